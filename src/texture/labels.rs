use std::f64::consts::PI;

use image::{Rgba, RgbaImage};

use crate::bevel::TextureLayout;

/// Cell background, a dark neutral.
const BACKGROUND: Rgba<u8> = Rgba([0x33, 0x33, 0x33, 0xFF]);

/// Numeral color.
const FOREGROUND: Rgba<u8> = Rgba([0xEE, 0xEE, 0xEE, 0xFF]);

/// 5x7 digit bitmaps, one byte per row, bit 4 = leftmost column.
#[rustfmt::skip]
const DIGITS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
    [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

/// One numeral printed on a die face.
///
/// Rotation and offset are tuned per shape so numerals sit upright relative
/// to each face's inset orientation.
#[derive(Debug, Clone)]
pub struct FaceLabel {
    /// Digits to print.
    pub text: &'static str,
    /// Face cell the label lands in.
    pub face: usize,
    /// Rotation about the cell center, in units of pi radians.
    pub rotation: f64,
    /// Offset along the rotated vertical axis, in pixels.
    pub offset: f64,
}

impl FaceLabel {
    /// Creates a new face label.
    #[must_use]
    pub fn new(text: &'static str, face: usize, rotation: f64, offset: f64) -> Self {
        Self {
            text,
            face,
            rotation,
            offset,
        }
    }
}

/// Rasterized numeral labels for a die, one square cell per face.
#[derive(Debug, Clone)]
pub struct LabelTexture {
    labels: Vec<FaceLabel>,
    glyph_height: f64,
}

impl LabelTexture {
    /// Creates a new label texture with the given glyph height in pixels.
    #[must_use]
    pub fn new(labels: Vec<FaceLabel>, glyph_height: f64) -> Self {
        Self {
            labels,
            glyph_height,
        }
    }

    /// Rasterizes the labels into the layout's target dimensions.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn rasterize(&self, layout: &TextureLayout) -> RgbaImage {
        let mut image = RgbaImage::from_pixel(layout.width_px, layout.height_px, BACKGROUND);
        let cell_width = f64::from(layout.width_px) / layout.cell_count as f64;
        let cell_height = f64::from(layout.height_px);

        for label in &self.labels {
            if label.face < layout.cell_count {
                self.draw(&mut image, label, cell_width, cell_height);
            }
        }
        image
    }

    /// Paints one label by inverse-mapping each cell pixel through the
    /// label's rotation and offset, so glyphs rotate exactly.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    fn draw(&self, image: &mut RgbaImage, label: &FaceLabel, cell_width: f64, cell_height: f64) {
        let x0 = label.face as f64 * cell_width;
        let center_x = x0 + cell_width / 2.0;
        let center_y = cell_height / 2.0;
        let (sin, cos) = (label.rotation * PI).sin_cos();

        for py in 0..cell_height as u32 {
            for px in x0 as u32..(x0 + cell_width) as u32 {
                let dx = f64::from(px) + 0.5 - center_x;
                let dy = f64::from(py) + 0.5 - center_y;

                let gx = cos * dx + sin * dy;
                let gy = -sin * dx + cos * dy - label.offset;
                if sample_text(label.text, gx, gy, self.glyph_height) {
                    image.put_pixel(px, py, FOREGROUND);
                }
            }
        }
    }
}

/// Samples the digit font at a glyph-space point; the text is centered on
/// the origin.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn sample_text(text: &str, x: f64, y: f64, glyph_height: f64) -> bool {
    let scale = glyph_height / 7.0;
    let advance = 6.0 * scale;
    let count = text.chars().count();
    let total_width = count as f64 * advance - scale;

    let lx = x + total_width / 2.0;
    let ly = y + glyph_height / 2.0;
    if lx < 0.0 || ly < 0.0 || ly >= glyph_height {
        return false;
    }

    let index = (lx / advance).floor() as usize;
    if index >= count {
        return false;
    }
    let column = ((lx - index as f64 * advance) / scale).floor() as usize;
    if column >= 5 {
        return false;
    }
    let row = (ly / scale).floor() as usize;

    let Some(digit) = text.chars().nth(index).and_then(|c| c.to_digit(10)) else {
        return false;
    };
    (DIGITS[digit as usize][row] >> (4 - column)) & 1 == 1
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn layout(cells: usize) -> TextureLayout {
        #[allow(clippy::cast_possible_truncation)]
        let width_px = 512 * cells as u32;
        TextureLayout {
            cell_count: cells,
            width_px,
            height_px: 512,
            charts: Vec::new(),
        }
    }

    fn lit_pixels(image: &RgbaImage) -> Vec<(u32, u32)> {
        image
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 == FOREGROUND.0)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn digits_land_in_their_cell() {
        let texture = LabelTexture::new(vec![FaceLabel::new("3", 1, 0.0, 0.0)], 240.0);
        let image = texture.rasterize(&layout(3));

        let lit = lit_pixels(&image);
        assert!(!lit.is_empty());
        for (x, _) in lit {
            assert!((512..1024).contains(&x));
        }
    }

    #[test]
    fn background_fills_unlabelled_cells() {
        let texture = LabelTexture::new(vec![FaceLabel::new("5", 0, 0.0, 0.0)], 240.0);
        let image = texture.rasterize(&layout(2));

        for x in 512..1024 {
            for y in 0..512 {
                assert_eq!(image.get_pixel(x, y).0, BACKGROUND.0);
            }
        }
    }

    #[test]
    fn offset_shifts_the_glyph_vertically() {
        let up = LabelTexture::new(vec![FaceLabel::new("1", 0, 0.0, -125.0)], 130.0);
        let down = LabelTexture::new(vec![FaceLabel::new("1", 0, 0.0, 125.0)], 130.0);

        let up_rows: Vec<u32> = lit_pixels(&up.rasterize(&layout(1))).iter().map(|&(_, y)| y).collect();
        let down_rows: Vec<u32> = lit_pixels(&down.rasterize(&layout(1))).iter().map(|&(_, y)| y).collect();

        let up_max = up_rows.iter().max().copied().unwrap();
        let down_min = down_rows.iter().min().copied().unwrap();
        assert!(up_max < 256);
        assert!(down_min >= 256);
    }

    #[test]
    fn half_turn_mirrors_the_offset() {
        let plain = LabelTexture::new(vec![FaceLabel::new("2", 0, 0.0, -125.0)], 130.0);
        let turned = LabelTexture::new(vec![FaceLabel::new("2", 0, 1.0, -125.0)], 130.0);

        let plain_rows: Vec<u32> = lit_pixels(&plain.rasterize(&layout(1))).iter().map(|&(_, y)| y).collect();
        let turned_rows: Vec<u32> = lit_pixels(&turned.rasterize(&layout(1))).iter().map(|&(_, y)| y).collect();

        assert!(plain_rows.iter().max().copied().unwrap() < 256);
        assert!(turned_rows.iter().min().copied().unwrap() >= 256);
    }

    #[test]
    fn multi_digit_labels_widen() {
        let one = LabelTexture::new(vec![FaceLabel::new("1", 0, 0.0, 0.0)], 160.0);
        let twenty = LabelTexture::new(vec![FaceLabel::new("20", 0, 0.0, 0.0)], 160.0);

        let span = |rows: &[(u32, u32)]| {
            let xs: Vec<u32> = rows.iter().map(|&(x, _)| x).collect();
            xs.iter().max().copied().unwrap() - xs.iter().min().copied().unwrap()
        };
        let narrow = span(&lit_pixels(&one.rasterize(&layout(1))));
        let wide = span(&lit_pixels(&twenty.rasterize(&layout(1))));
        assert!(wide > narrow);
    }
}
