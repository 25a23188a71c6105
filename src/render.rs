use crate::constants::POINT_SPRITE_SCALE;
use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;
use wish_core::{Camera, MeshInstance, PointInstance, TreeScene};

mod helpers;
pub mod mesh;

use helpers::{InstanceBuffer, PipelineSpec};
use mesh::{MeshSet, MeshVertex};

static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
static MESHES_WGSL: &str = include_str!("../shaders/meshes.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    cam_pos: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct GroupUniform {
    model: [[f32; 4]; 4],
}

impl GroupUniform {
    fn spin_y(angle: f32) -> Self {
        Self {
            model: Mat4::from_rotation_y(angle).to_cols_array_2d(),
        }
    }
}

const POINT_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x4];
const MESH_VERTEX_ATTRS: [wgpu::VertexAttribute; 4] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x3, 3 => Float32];
const MESH_INSTANCE_ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    4 => Float32x4, 5 => Float32x4, 6 => Float32x4, 7 => Float32x4, 8 => Float32x4, 9 => Float32x4
];

/// A point group: its spin transform and its sprite buffer.
struct PointLayer {
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instances: InstanceBuffer,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,

    point_pipeline: wgpu::RenderPipeline,
    particles: PointLayer,
    ribbon: PointLayer,

    mesh_pipeline: wgpu::RenderPipeline,
    mesh_vertices: wgpu::Buffer,
    ornament_vertex_count: u32,
    card_vertex_range: std::ops::Range<u32>,
    ornaments: InstanceBuffer,
    cards: InstanceBuffer,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl GpuState {
    pub async fn new(canvas: web::HtmlCanvasElement, scene: &TreeScene) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        // Bind group 0: camera and lighting, shared by both pipelines.
        let globals_layout = helpers::uniform_layout(&device, "globals_layout");
        let (globals_buffer, globals_bind_group) = helpers::create_uniform(
            &device,
            &globals_layout,
            "globals",
            &Globals::identity(),
        );
        // Bind group 1 (points only): group spin.
        let group_layout = helpers::uniform_layout(&device, "group_layout");

        let point_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(POINTS_WGSL.into()),
        });
        let point_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points_layout"),
            bind_group_layouts: &[&globals_layout, &group_layout],
            push_constant_ranges: &[],
        });
        let additive = wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        };
        let point_pipeline = helpers::make_pipeline(
            &device,
            PipelineSpec {
                label: "points_pipeline",
                layout: &point_layout,
                shader: &point_shader,
                vs_entry: "vs_point",
                fs_entry: "fs_point",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<PointInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &POINT_ATTRS,
                }],
                color_format: format,
                blend: wgpu::BlendState {
                    color: additive,
                    alpha: additive,
                },
                depth_write: false,
            },
        );

        let mesh_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("meshes_shader"),
            source: wgpu::ShaderSource::Wgsl(MESHES_WGSL.into()),
        });
        let mesh_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("meshes_layout"),
            bind_group_layouts: &[&globals_layout],
            push_constant_ranges: &[],
        });
        let mesh_pipeline = helpers::make_pipeline(
            &device,
            PipelineSpec {
                label: "meshes_pipeline",
                layout: &mesh_layout,
                shader: &mesh_shader,
                vs_entry: "vs_mesh",
                fs_entry: "fs_mesh",
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<MeshVertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &MESH_VERTEX_ATTRS,
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<MeshInstance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &MESH_INSTANCE_ATTRS,
                    },
                ],
                color_format: format,
                blend: wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
                depth_write: true,
            },
        );

        let MeshSet {
            vertices,
            ornament_vertex_count,
            card_vertex_range,
        } = MeshSet::build();
        let mesh_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let point_bytes = std::mem::size_of::<PointInstance>() as u64;
        let mesh_bytes = std::mem::size_of::<MeshInstance>() as u64;
        let particles = PointLayer::new(
            &device,
            &group_layout,
            "particles",
            scene.points().len() as u64 * point_bytes,
        );
        let ribbon = PointLayer::new(
            &device,
            &group_layout,
            "ribbon",
            scene.ribbon_points().len() as u64 * point_bytes,
        );
        let ornaments = InstanceBuffer::new(
            &device,
            "ornament_instances",
            scene.ornament_instances().len() as u64 * mesh_bytes,
        );
        let cards = InstanceBuffer::new(
            &device,
            "card_instances",
            scene.card_instances().len() as u64 * mesh_bytes,
        );

        let bg = scene.config.palette.background.to_array();
        log::info!(
            "[render] {}x{} {:?}, {} mesh vertices",
            width,
            height,
            format,
            vertices.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            _depth_tex: depth_tex,
            depth_view,
            globals_buffer,
            globals_bind_group,
            point_pipeline,
            particles,
            ribbon,
            mesh_pipeline,
            mesh_vertices,
            ornament_vertex_count,
            card_vertex_range,
            ornaments,
            cards,
            width,
            height,
            clear_color: wgpu::Color {
                r: helpers::srgb_to_linear(bg[0]),
                g: helpers::srgb_to_linear(bg[1]),
                b: helpers::srgb_to_linear(bg[2]),
                a: 1.0,
            },
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (tex, view) = helpers::create_depth_texture(&self.device, width, height);
            self._depth_tex = tex;
            self.depth_view = view;
        }
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Upload this frame's engine buffers and draw them.
    pub fn render(
        &mut self,
        dt_sec: f32,
        scene: &TreeScene,
        camera: &Camera,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        self.write_globals(scene, camera);
        self.particles
            .upload(&self.device, &self.queue, scene.points(), scene.particles().rotation_y());
        self.ribbon
            .upload(&self.device, &self.queue, scene.ribbon_points(), scene.ribbon().rotation_y());
        self.ornaments
            .upload(&self.device, &self.queue, scene.ornament_instances());
        self.cards
            .upload(&self.device, &self.queue, scene.card_instances());

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);

            // Opaque-ish meshes first so sprites depth-test against them.
            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_vertex_buffer(0, self.mesh_vertices.slice(..));
            if self.ornaments.count() > 0 {
                rpass.set_vertex_buffer(1, self.ornaments.slice());
                rpass.draw(0..self.ornament_vertex_count, 0..self.ornaments.count());
            }
            if self.cards.count() > 0 {
                rpass.set_vertex_buffer(1, self.cards.slice());
                rpass.draw(self.card_vertex_range.clone(), 0..self.cards.count());
            }

            rpass.set_pipeline(&self.point_pipeline);
            for layer in [&self.particles, &self.ribbon] {
                if layer.instances.count() == 0 {
                    continue;
                }
                rpass.set_bind_group(1, &layer.bind_group, &[]);
                rpass.set_vertex_buffer(0, layer.instances.slice());
                rpass.draw(0..6, 0..layer.instances.count());
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn write_globals(&self, scene: &TreeScene, camera: &Camera) {
        let pose = camera.pose();
        let right = pose.rotation * Vec3::X;
        let up = pose.up();
        let g = Globals {
            view_proj: camera.view_projection().to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            cam_pos: pose.position.extend(1.0).to_array(),
            params: [
                scene.ambient_intensity(),
                self.time_accum,
                POINT_SPRITE_SCALE,
                0.0,
            ],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&g));
    }
}

impl Globals {
    fn identity() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            cam_right: [1.0, 0.0, 0.0, 0.0],
            cam_up: [0.0, 1.0, 0.0, 0.0],
            cam_pos: [0.0, 0.0, 0.0, 1.0],
            params: [0.0; 4],
        }
    }
}

impl PointLayer {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &'static str,
        capacity_bytes: u64,
    ) -> Self {
        let (uniform, bind_group) =
            helpers::create_uniform(device, layout, label, &GroupUniform::spin_y(0.0));
        Self {
            uniform,
            bind_group,
            instances: InstanceBuffer::new(device, label, capacity_bytes),
        }
    }

    fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        points: &[PointInstance],
        rotation_y: f32,
    ) {
        queue.write_buffer(
            &self.uniform,
            0,
            bytemuck::bytes_of(&GroupUniform::spin_y(rotation_y)),
        );
        self.instances.upload(device, queue, points);
    }
}
