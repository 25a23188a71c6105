use glam::{Vec3, Vec4};

/// Linear-ish RGB color parsed from a packed `0xRRGGBB` literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub Vec3);

impl Rgb {
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self(Vec3::new(r, g, b))
    }

    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb(self.0.lerp(other.0, t))
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Vec4 {
        self.0.extend(a)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        self.0.to_array()
    }
}

/// Named colors used across the scene.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub emerald: Rgb,
    pub emerald_bright: Rgb,
    pub ruby: Rgb,
    pub gold: Rgb,
    pub gold_amber: Rgb,
    pub pearl: Rgb,
    pub background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            emerald: Rgb::from_hex(0x025939),
            emerald_bright: Rgb::from_hex(0x10b981),
            ruby: Rgb::from_hex(0xd92828),
            gold: Rgb::from_hex(0xfcd34d),
            gold_amber: Rgb::from_hex(0xf59e0b),
            pearl: Rgb::from_hex(0xfef3c7),
            background: Rgb::from_hex(0x050505),
        }
    }
}
