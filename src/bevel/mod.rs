mod fillet;
mod inset;
mod sphere_cap;
mod vertex_center;

use crate::error::{GeometryError, Result, TopologyError};
use crate::math::{Point2, Point3, Vector2, Vector3};
use crate::topology::{Model, VertexId};

/// Pixels per model unit when sizing the rasterization target.
const PX_PER_UNIT: f64 = 100.0;

/// Pixel width of one per-face label cell.
const CELL_PX: u32 = 512;

/// Parameters controlling bevel generation.
#[derive(Debug, Clone, Copy)]
pub struct BevelParams {
    /// Rounding radius applied to faces, edges, and vertices.
    pub rounding: f64,
    /// Number of quad segments swept along each edge fillet.
    pub edge_detail: usize,
}

impl BevelParams {
    fn validate(self) -> Result<()> {
        if !self.rounding.is_finite() || self.rounding <= 0.0 {
            return Err(GeometryError::InvalidRounding(self.rounding).into());
        }
        if self.edge_detail < 1 {
            return Err(GeometryError::InvalidEdgeDetail(self.edge_detail).into());
        }
        Ok(())
    }
}

/// A triangle mesh for one rendered surface.
#[derive(Debug, Clone, Default)]
pub struct SurfaceMesh {
    /// Vertex positions.
    pub positions: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates, in sampler space (v up).
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

/// A texture-space polygon with a 3D correspondence per corner.
///
/// Corner UVs are normalized texel coordinates: u right, v down, both in
/// `[0, 1]` of the rasterization target.
#[derive(Debug, Clone)]
pub struct Chart {
    /// Corner pairs of surface position and texel coordinate.
    pub corners: Vec<(Point3, Point2)>,
    /// Surface normal shared by the whole polygon.
    pub normal: Vector3,
}

/// UV atlas for one generated die surface.
///
/// Fillet strips occupy a band sized by accumulated angular width and edge
/// length; each face inset is centered and uniformly scaled into its own
/// cell, indexed by face position. Vertex caps carry degenerate UVs and do
/// not appear here.
#[derive(Debug, Clone)]
pub struct TextureLayout {
    /// Number of per-face label cells tiling the horizontal axis.
    pub cell_count: usize,
    /// Pixel width of the rasterization target.
    pub width_px: u32,
    /// Pixel height of the rasterization target.
    pub height_px: u32,
    /// Charts addressable by the texel rasterizers.
    pub charts: Vec<Chart>,
}

/// Chart in pre-normalization coordinates: fillet strips in accumulated
/// strip units, face insets in centered cell-local units.
struct RawChart {
    corners: Vec<(Point3, Vector2)>,
    normal: Vector3,
}

/// An inset chart bound to its face cell.
struct InsetChart {
    raw: RawChart,
    cell: usize,
}

/// Looks up a vertex's rounded-corner center by its input-order index.
fn center_of(model: &Model, centers: &[Point3], vertex: VertexId) -> Result<Point3> {
    let index = model
        .vertex_index(vertex)
        .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))?;
    Ok(centers[index])
}

/// Generates rounded-bevel render geometry for a die model.
///
/// A rounded die insets each flat face along its normal by the rounding
/// radius, replaces each edge with a fillet strip swept through the dihedral
/// angle, and caps each vertex with a sphere at its computed rounding
/// center. The first returned surface is the beveled body; the remaining
/// surfaces are the per-vertex caps.
pub struct GenerateBevel {
    params: BevelParams,
}

impl GenerateBevel {
    /// Creates a new `GenerateBevel` operation.
    #[must_use]
    pub fn new(params: BevelParams) -> Self {
        Self { params }
    }

    /// Executes the generation, returning the UV atlas and the surfaces.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are out of range, or if a vertex
    /// of the model has a degenerate rounding frame.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    pub fn execute(&self, model: &Model) -> Result<(TextureLayout, Vec<SurfaceMesh>)> {
        self.params.validate()?;
        let rounding = self.params.rounding;

        let centers = vertex_center::vertex_centers(model, rounding)?;
        let strips = fillet::generate(model, &centers, self.params)?;
        let insets = inset::generate(model, &centers, rounding)?;

        let cell_count = model.face_count();
        let width_px = (cell_count as u32 * CELL_PX).max((strips.width * PX_PER_UNIT).ceil() as u32);
        let height_px = CELL_PX.max((strips.height * PX_PER_UNIT).ceil() as u32);

        let mut charts = Vec::with_capacity(strips.charts.len() + insets.len());
        for raw in strips.charts {
            let corners = raw
                .corners
                .iter()
                .map(|&(p, uv)| {
                    (
                        p,
                        Point2::new(
                            uv.x * PX_PER_UNIT / f64::from(width_px),
                            uv.y * PX_PER_UNIT / f64::from(height_px),
                        ),
                    )
                })
                .collect();
            charts.push(Chart {
                corners,
                normal: raw.normal,
            });
        }
        for inset in insets {
            let corners = inset
                .raw
                .corners
                .iter()
                .map(|&(p, uv)| {
                    (
                        p,
                        Point2::new((inset.cell as f64 + 0.5 + uv.x) / cell_count as f64, 0.5 - uv.y),
                    )
                })
                .collect();
            charts.push(Chart {
                corners,
                normal: inset.raw.normal,
            });
        }

        let mut surfaces = Vec::with_capacity(1 + centers.len());
        surfaces.push(assemble(&charts));
        for &center in &centers {
            surfaces.push(sphere_cap::generate(center, rounding, self.params.edge_detail));
        }

        let layout = TextureLayout {
            cell_count,
            width_px,
            height_px,
            charts,
        };
        Ok((layout, surfaces))
    }
}

/// Packs all charts into one triangle mesh.
///
/// Every chart polygon is convex with consistent winding, so a fixed fan
/// `(0,1,2)`, `(2,3,0)`, `(3,4,0)` suffices instead of general ear-clipping.
/// Texel-space v flips into sampler space here.
fn assemble(charts: &[Chart]) -> SurfaceMesh {
    let mut mesh = SurfaceMesh::default();
    for chart in charts {
        #[allow(clippy::cast_possible_truncation)]
        let base = mesh.positions.len() as u32;
        for &(p, uv) in &chart.corners {
            mesh.positions.push(p);
            mesh.normals.push(chart.normal);
            mesh.uvs.push(Point2::new(uv.x, 1.0 - uv.y));
        }

        mesh.indices.push([base, base + 1, base + 2]);
        if chart.corners.len() >= 4 {
            mesh.indices.push([base + 2, base + 3, base]);
        }
        if chart.corners.len() >= 5 {
            mesh.indices.push([base + 3, base + 4, base]);
        }
    }
    mesh
}
