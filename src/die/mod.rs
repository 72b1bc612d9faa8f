pub mod collision;
pub mod factory;
pub mod roll;
pub mod shapes;

pub use collision::ConvexHullShape;
pub use factory::DieFactory;
pub use roll::{random_orientation, Roll};
pub use shapes::{d10, d12, d20, d4, d6, d8, standard_set};

use std::sync::Arc;

use image::RgbaImage;

use crate::bevel::SurfaceMesh;
use crate::topology::Model;

/// An immutable, fully generated die.
///
/// One instance exists per (shape, rounding, edge detail); the model is
/// shared across every die of its shape. Generation cost is non-trivial, so
/// callers should cache dice rather than rebuilding them.
#[derive(Debug, Clone)]
pub struct Die {
    /// Shared topology for this die's shape.
    pub model: Arc<Model>,
    /// Convex-hull descriptor for the physics collaborator.
    pub collision: ConvexHullShape,
    /// Rasterized face texture.
    pub texture: RgbaImage,
    /// Render surfaces: the beveled body first, then one cap per vertex.
    pub surfaces: Vec<SurfaceMesh>,
    /// Printed value per face index; a permutation of `1..=N`.
    pub results: Vec<u32>,
}

/// A live rolled instance: one die paired with its render handle and physics
/// body, both owned by external collaborators.
///
/// Created per roll and discarded on reset; ending a session releases the
/// handles via [`DieObject::into_parts`] before the next session starts.
#[derive(Debug)]
pub struct DieObject<R, B> {
    die: Arc<Die>,
    render: R,
    body: B,
}

impl<R, B> DieObject<R, B> {
    /// Pairs a die with its live handles.
    #[must_use]
    pub fn new(die: Arc<Die>, render: R, body: B) -> Self {
        Self { die, render, body }
    }

    /// The die this instance was rolled from.
    #[must_use]
    pub fn die(&self) -> &Arc<Die> {
        &self.die
    }

    /// The render handle.
    #[must_use]
    pub fn render(&self) -> &R {
        &self.render
    }

    /// The render handle, mutably.
    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    /// The physics body.
    #[must_use]
    pub fn body(&self) -> &B {
        &self.body
    }

    /// The physics body, mutably.
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// Releases the handles so their owners can tear them down.
    #[must_use]
    pub fn into_parts(self) -> (Arc<Die>, R, B) {
        (self.die, self.render, self.body)
    }
}
