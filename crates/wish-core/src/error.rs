use thiserror::Error;

/// Rejected scene configuration. Raised once at construction, never per frame.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tree {field} must be positive and finite, got {value}")]
    TreeDimension { field: &'static str, value: f32 },
    #[error("{field} must be in (0, 1], got {value}")]
    Factor { field: &'static str, value: f32 },
    #[error("{collection} shell radius range [{min}, {max}] is invalid")]
    ShellRange {
        collection: &'static str,
        min: f32,
        max: f32,
    },
    #[error("occlusion depth window [{near}, {far}] is empty")]
    OcclusionWindow { near: f32, far: f32 },
    #[error("occlusion radius must be positive, got {0}")]
    OcclusionRadius(f32),
    #[error("particle count must be non-zero")]
    NoParticles,
    #[error("ribbon needs at least one loop and one point per loop")]
    EmptyRibbon,
    #[error("ornament minimum distance must be positive, got {0}")]
    OrnamentSpacing(f32),
    #[error("ornament height band [{min}, {max}] must lie within [0, 1]")]
    OrnamentBand { min: f32, max: f32 },
    #[error("photo height band [{min}, {max}] must lie within [0, 1)")]
    PhotoBand { min: f32, max: f32 },
    #[error("hero depth must be positive, got {0}")]
    HeroDepth(f32),
    #[error("{field} must be non-negative and finite, got {value}")]
    Jitter { field: &'static str, value: f32 },
}
