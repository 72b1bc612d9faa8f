use image::{Rgba, RgbaImage};
use noise::{NoiseFn, Simplex};

use crate::bevel::{Chart, TextureLayout};
use crate::math::{Point2, Point3, Vector3};

/// Barycentric acceptance tolerance, relative to the triangle area.
const AREA_EPS: f64 = 1e-6;

/// Procedural color field sampled on the die surface.
///
/// Each chart texel maps back to a 3D surface position by barycentric
/// interpolation and picks its color from a piecewise-linear ramp keyed by
/// 3D simplex noise at that position. The default stops keep a tight band
/// between 0.49 and 0.51, so the ramp reads as a sharp two-tone boundary
/// rather than a smooth gradient.
#[derive(Debug, Clone)]
pub struct ProceduralTexture {
    /// Noise seed.
    pub seed: u32,
    /// Spatial frequency multiplier applied to surface positions.
    pub frequency: f64,
    /// Gradient stops keyed by the clamped noise value, as linear RGB.
    pub stops: Vec<(f64, Vector3)>,
}

impl Default for ProceduralTexture {
    fn default() -> Self {
        let base = Vector3::new(0.1, 0.1, 0.1);
        let violet = Vector3::new(89.0, 60.0, 143.0) / 255.0;
        let teal = Vector3::new(2.0, 128.0, 144.0) / 255.0;
        Self {
            seed: 0,
            frequency: 4.0,
            stops: vec![(0.0, base), (0.49, violet), (0.51, teal), (1.0, base)],
        }
    }
}

impl ProceduralTexture {
    /// Rasterizes every chart of the layout into a fresh image.
    ///
    /// Texels outside every chart stay transparent.
    #[must_use]
    pub fn rasterize(&self, layout: &TextureLayout) -> RgbaImage {
        let simplex = Simplex::new(self.seed);
        let mut image = RgbaImage::new(layout.width_px, layout.height_px);
        for chart in &layout.charts {
            self.rasterize_chart(&mut image, chart, &simplex);
        }
        image
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    fn rasterize_chart(&self, image: &mut RgbaImage, chart: &Chart, simplex: &Simplex) {
        let width = f64::from(image.width());
        let height = f64::from(image.height());

        let texels: Vec<(Point3, Point2)> = chart
            .corners
            .iter()
            .map(|&(p, uv)| (p, Point2::new(uv.x * width, uv.y * height)))
            .collect();

        let min_x = texels.iter().map(|(_, uv)| uv.x).fold(f64::INFINITY, f64::min);
        let max_x = texels.iter().map(|(_, uv)| uv.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = texels.iter().map(|(_, uv)| uv.y).fold(f64::INFINITY, f64::min);
        let max_y = texels.iter().map(|(_, uv)| uv.y).fold(f64::NEG_INFINITY, f64::max);

        let x0 = min_x.floor().max(0.0) as u32;
        let x1 = (max_x.ceil() as u32).min(image.width().saturating_sub(1));
        let y0 = min_y.floor().max(0.0) as u32;
        let y1 = (max_y.ceil() as u32).min(image.height().saturating_sub(1));

        for y in y0..=y1 {
            for x in x0..=x1 {
                let sample = Point2::new(f64::from(x), f64::from(y));

                for i in 1..texels.len() - 1 {
                    let tri = [texels[0], texels[i], texels[i + 1]];

                    let a = triangle_area(&sample, &tri[0].1, &tri[1].1);
                    let b = triangle_area(&sample, &tri[1].1, &tri[2].1);
                    let c = triangle_area(&sample, &tri[0].1, &tri[2].1);
                    let d = triangle_area(&tri[0].1, &tri[1].1, &tri[2].1);
                    if d < f64::EPSILON || (a + b + c - d).abs() > AREA_EPS * d.max(1.0) {
                        continue;
                    }

                    let position = tri[2].0.coords * (a / d)
                        + tri[0].0.coords * (b / d)
                        + tri[1].0.coords * (c / d);

                    let value = simplex
                        .get([
                            position.x * self.frequency,
                            position.y * self.frequency,
                            position.z * self.frequency,
                        ])
                        .clamp(0.0, 1.0);
                    let color = self.gradient(value);
                    image.put_pixel(x, y, Rgba([to_byte(color.x), to_byte(color.y), to_byte(color.z), 0xFF]));
                }
            }
        }
    }

    /// Piecewise-linear ramp lookup over the configured stops.
    fn gradient(&self, value: f64) -> Vector3 {
        let mut index = 0;
        while index + 2 < self.stops.len() && value > self.stops[index + 1].0 {
            index += 1;
        }
        let (t0, c0) = self.stops[index];
        let (t1, c1) = self.stops[index + 1];
        let t = ((value - t0) / (t1 - t0)).clamp(0.0, 1.0);
        c0.lerp(&c1, t)
    }
}

fn triangle_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    0.5 * ((a.x - c.x) * (b.y - a.y) - (a.x - b.x) * (c.y - a.y)).abs()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(value: f64) -> u8 {
    (value * 255.0).floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    fn quad_layout() -> TextureLayout {
        // One square chart covering the middle of a 64x64 target, mapped to
        // a unit square in 3D.
        let corners = vec![
            (Point3::new(0.0, 0.0, 0.0), Point2::new(0.25, 0.25)),
            (Point3::new(1.0, 0.0, 0.0), Point2::new(0.75, 0.25)),
            (Point3::new(1.0, 1.0, 0.0), Point2::new(0.75, 0.75)),
            (Point3::new(0.0, 1.0, 0.0), Point2::new(0.25, 0.75)),
        ];
        TextureLayout {
            cell_count: 1,
            width_px: 64,
            height_px: 64,
            charts: vec![Chart {
                corners,
                normal: Vector3::z(),
            }],
        }
    }

    #[test]
    fn paints_inside_and_skips_outside() {
        let image = ProceduralTexture::default().rasterize(&quad_layout());

        assert_eq!(image.get_pixel(32, 32).0[3], 0xFF);
        assert_eq!(image.get_pixel(2, 2).0[3], 0x00);
        assert_eq!(image.get_pixel(62, 2).0[3], 0x00);
    }

    #[test]
    fn rasterization_is_deterministic() {
        let texture = ProceduralTexture::default();
        let a = texture.rasterize(&quad_layout());
        let b = texture.rasterize(&quad_layout());
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn gradient_hits_exact_stops() {
        let texture = ProceduralTexture::default();

        let base = Vector3::new(0.1, 0.1, 0.1);
        assert!((texture.gradient(0.0) - base).norm() < 1e-12);
        assert!((texture.gradient(1.0) - base).norm() < 1e-12);

        let violet = Vector3::new(89.0, 60.0, 143.0) / 255.0;
        let teal = Vector3::new(2.0, 128.0, 144.0) / 255.0;
        assert!((texture.gradient(0.49) - violet).norm() < 1e-12);
        assert!((texture.gradient(0.51) - teal).norm() < 1e-9);
    }

    #[test]
    fn band_transition_is_sharp() {
        let texture = ProceduralTexture::default();
        let just_below = texture.gradient(0.489);
        let just_above = texture.gradient(0.511);

        // Within 0.022 of noise value, the color crosses the full
        // violet-to-teal distance.
        assert!((just_above - just_below).norm() > 0.4);
    }
}
