pub mod labels;
pub mod procedural;

pub use labels::{FaceLabel, LabelTexture};
pub use procedural::ProceduralTexture;

use image::RgbaImage;

use crate::bevel::TextureLayout;

/// Source of texel color for a die texture.
#[derive(Debug, Clone)]
pub enum TextureSource {
    /// Rasterized numeral labels, one cell per face.
    Labels(LabelTexture),
    /// Procedural noise field sampled on the 3D surface.
    Procedural(ProceduralTexture),
}

impl TextureSource {
    /// Rasterizes the texture against a generated UV layout.
    #[must_use]
    pub fn rasterize(&self, layout: &TextureLayout) -> RgbaImage {
        match self {
            Self::Labels(labels) => labels.rasterize(layout),
            Self::Procedural(procedural) => procedural.rasterize(layout),
        }
    }
}
