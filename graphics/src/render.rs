use std::ops::Range;

use image::{ImageFormat, RgbImage};
use knight_search::Square;
use tempfile::NamedTempFile;

use crate::error::{RenderError, Result};
use crate::style::RenderStyle;

/// Draws a knight path on top of a checkerboard.
#[derive(Clone, Debug, Default)]
pub struct BoardRenderer {
    style: RenderStyle,
}

impl BoardRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    /// Render `path` into a new image.
    ///
    /// The board comes first, then one line per pair of consecutive squares and finally a
    /// marker on the first square. Squares outside the board are clipped, move legality is not
    /// checked.
    pub fn render(&self, path: &[Square]) -> Result<RgbImage> {
        let Some(&start) = path.first() else {
            return Err(RenderError::InvalidPath);
        };
        self.style.validate()?;

        let mut img = self.draw_board();

        for pair in path.windows(2) {
            self.draw_segment(&mut img, pair[0], pair[1]);
        }

        self.draw_marker(&mut img, start);

        log::debug!(
            "rendered {} squares into {}x{} image",
            path.len(),
            img.width(),
            img.height()
        );

        Ok(img)
    }

    /// Render `path` and write it as PNG to `out`, replacing any existing file.
    ///
    /// The PNG is encoded into a temporary file next to `out` and moved into place once
    /// complete, so `out` is left untouched when rendering or encoding fails.
    pub fn render_to_file(&self, path: &[Square], out: &std::path::Path) -> Result<()> {
        let img = self.render(path)?;

        let dir = match out.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => std::path::Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        img.write_to(tmp.as_file_mut(), ImageFormat::Png)?;
        tmp.persist(out).map_err(|e| e.error)?;

        Ok(())
    }

    fn draw_board(&self) -> RgbImage {
        let size = self.style.image_size();
        let cell = self.style.cell_size;

        RgbImage::from_fn(size, size, |x, y| {
            if (x / cell + y / cell) % 2 == 0 {
                self.style.dark.into()
            } else {
                self.style.light.into()
            }
        })
    }

    fn draw_segment(&self, img: &mut RgbImage, from: Square, to: Square) {
        let a = self.center_of(from);
        let b = self.center_of(to);
        let half_width = self.style.path_width / 2.0;

        let xs = pixel_range(a.0.min(b.0) - half_width, a.0.max(b.0) + half_width, img.width());
        let ys = pixel_range(a.1.min(b.1) - half_width, a.1.max(b.1) + half_width, img.height());

        for y in ys {
            for x in xs.clone() {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                if distance_to_segment(p, a, b) <= half_width {
                    img.put_pixel(x, y, self.style.path_color.into());
                }
            }
        }
    }

    fn draw_marker(&self, img: &mut RgbImage, square: Square) {
        let (cx, cy) = self.center_of(square);
        let radius = (0.5 - self.style.marker_margin) * self.style.cell_size as f32;

        let xs = pixel_range(cx - radius, cx + radius, img.width());
        let ys = pixel_range(cy - radius, cy + radius, img.height());

        for y in ys {
            for x in xs.clone() {
                let (dx, dy) = (x as f32 + 0.5 - cx, y as f32 + 0.5 - cy);
                if dx * dx + dy * dy <= radius * radius {
                    img.put_pixel(x, y, self.style.marker_color.into());
                }
            }
        }
    }

    /// Pixel coordinates of the middle of a square's cell
    fn center_of(&self, square: Square) -> (f32, f32) {
        let cell = self.style.cell_size as f32;
        (
            (square.file as f32 + 0.5) * cell,
            (square.rank as f32 + 0.5) * cell,
        )
    }
}

/// Pixel indices covering `[lo, hi]`, clipped to `0..size`
fn pixel_range(lo: f32, hi: f32, size: u32) -> Range<u32> {
    let end = (hi.ceil().max(0.0) as u32).min(size);
    let start = (lo.floor().max(0.0) as u32).min(end);
    start..end
}

fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;

    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    };

    let (ex, ey) = (p.0 - (a.0 + t * dx), p.1 - (a.1 + t * dy));
    (ex * ex + ey * ey).sqrt()
}
