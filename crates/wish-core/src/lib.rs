pub mod carousel;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod instances;
pub mod occlusion;
pub mod ornaments;
pub mod palette;
pub mod particles;
pub mod progress;
pub mod ribbon;
pub mod sampler;
pub mod scene;
pub mod state;

pub use carousel::{CardTransform, Carousel, HeroIndex, PhotoCard, PhotoStatus};
pub use config::*;
pub use error::ConfigError;
pub use instances::{shape, MeshInstance, PointInstance};
pub use occlusion::{OcclusionTunnel, ViewRay};
pub use ornaments::{Ornament, OrnamentColor, OrnamentKind, OrnamentSet};
pub use palette::{Palette, Rgb};
pub use particles::ParticleField;
pub use progress::{Phase, ProgressController};
pub use ribbon::Ribbon;
pub use sampler::TreeShape;
pub use scene::TreeScene;
pub use state::{safe_look_rotation, Camera, CameraPose};
