use std::sync::Arc;

use crate::bevel::{BevelParams, GenerateBevel};
use crate::error::{ConstructionError, Result};
use crate::texture::TextureSource;
use crate::topology::Model;

use super::{ConvexHullShape, Die};

/// Composes a model, collision shape, texture source, and result table into
/// dice.
///
/// Pure over its parameters: building twice with identical parameters yields
/// equivalent dice with no hidden global mutation. Generation cost is
/// non-trivial, so callers should cache built dice by (shape, rounding,
/// edge detail).
#[derive(Debug, Clone)]
pub struct DieFactory {
    model: Arc<Model>,
    collision: ConvexHullShape,
    texture: TextureSource,
    results: Vec<u32>,
}

impl DieFactory {
    /// Creates a new factory for one die shape.
    ///
    /// # Errors
    ///
    /// Returns an error if `results` is not a permutation of
    /// `1..=face_count`.
    pub fn new(model: Arc<Model>, texture: TextureSource, results: Vec<u32>) -> Result<Self> {
        validate_results(&model, &results)?;
        let collision = ConvexHullShape::from_model(&model)?;

        Ok(Self {
            model,
            collision,
            texture,
            results,
        })
    }

    /// Replaces the texture source.
    #[must_use]
    pub fn with_texture(mut self, texture: TextureSource) -> Self {
        self.texture = texture;
        self
    }

    /// The shared model backing every die from this factory.
    #[must_use]
    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    /// Printed value per face index.
    #[must_use]
    pub fn results(&self) -> &[u32] {
        &self.results
    }

    /// Builds one die at the given rounding radius and edge tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error for non-positive rounding, zero edge detail, or a
    /// degenerate vertex rounding frame.
    pub fn build(&self, rounding: f64, edge_detail: usize) -> Result<Die> {
        let params = BevelParams {
            rounding,
            edge_detail,
        };
        let (layout, surfaces) = GenerateBevel::new(params).execute(&self.model)?;
        let texture = self.texture.rasterize(&layout);

        Ok(Die {
            model: Arc::clone(&self.model),
            collision: self.collision.clone(),
            texture,
            surfaces,
            results: self.results.clone(),
        })
    }
}

/// Checks that the result table is a permutation of `1..=N`.
fn validate_results(model: &Model, results: &[u32]) -> Result<()> {
    let expected = model.face_count();
    let mut sorted = results.to_vec();
    sorted.sort_unstable();

    #[allow(clippy::cast_possible_truncation)]
    let valid =
        results.len() == expected && sorted.iter().enumerate().all(|(i, &v)| v == i as u32 + 1);
    if valid {
        Ok(())
    } else {
        Err(ConstructionError::ResultsNotPermutation {
            expected,
            found: results.len(),
        }
        .into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolydieError;
    use crate::math::Point3;
    use crate::operations::BuildModel;
    use crate::texture::{FaceLabel, LabelTexture};

    fn cube_model() -> Arc<Model> {
        let points: Vec<Point3> = (0..8)
            .map(|i| {
                Point3::new(
                    if i & 0b001 == 0 { -0.5 } else { 0.5 },
                    if i & 0b010 == 0 { -0.5 } else { 0.5 },
                    if i & 0b100 == 0 { -0.5 } else { 0.5 },
                )
            })
            .collect();
        Arc::new(BuildModel::new(points, vec![1.0], 6).execute().unwrap())
    }

    fn labels() -> TextureSource {
        TextureSource::Labels(LabelTexture::new(
            vec![FaceLabel::new("1", 0, 0.0, 0.0)],
            240.0,
        ))
    }

    #[test]
    fn builds_a_complete_die() {
        let factory = DieFactory::new(cube_model(), labels(), vec![6, 4, 5, 3, 1, 2]).unwrap();
        let die = factory.build(0.09, 5).unwrap();

        assert_eq!(die.results, vec![6, 4, 5, 3, 1, 2]);
        assert_eq!(die.surfaces.len(), 1 + 8);
        assert_eq!(die.collision.vertices.len(), 8);
        assert_eq!(die.collision.faces.len(), 6);
        assert_eq!(die.texture.width(), 6 * 512);
        assert_eq!(die.texture.height(), 512);
    }

    #[test]
    fn repeated_builds_are_equivalent() {
        let factory = DieFactory::new(cube_model(), labels(), vec![6, 4, 5, 3, 1, 2]).unwrap();
        let a = factory.build(0.09, 5).unwrap();
        let b = factory.build(0.09, 5).unwrap();

        assert_eq!(a.surfaces[0].positions, b.surfaces[0].positions);
        assert_eq!(a.texture.as_raw(), b.texture.as_raw());
    }

    #[test]
    fn rejects_wrong_length_results() {
        let result = DieFactory::new(cube_model(), labels(), vec![1, 2, 3]);
        assert!(matches!(
            result,
            Err(PolydieError::Construction(ConstructionError::ResultsNotPermutation { .. }))
        ));
    }

    #[test]
    fn rejects_duplicate_results() {
        let result = DieFactory::new(cube_model(), labels(), vec![1, 2, 3, 4, 5, 5]);
        assert!(matches!(
            result,
            Err(PolydieError::Construction(ConstructionError::ResultsNotPermutation { .. }))
        ));
    }

    #[test]
    fn rejects_bad_parameters_before_generating() {
        let factory = DieFactory::new(cube_model(), labels(), vec![6, 4, 5, 3, 1, 2]).unwrap();
        assert!(factory.build(-0.1, 5).is_err());
        assert!(factory.build(0.09, 0).is_err());
    }
}
