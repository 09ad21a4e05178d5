use std::fs;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// Largest width and height of a rendered board in pixels
pub const MAX_IMAGE_SIZE: u32 = 1 << 15;

/// An RGB color, written as `[r, g, b]` in JSON
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const WHITE: Color = Color([255, 255, 255]);
    pub const GRAY: Color = Color([128, 128, 128]);
    pub const RED: Color = Color([255, 0, 0]);
    pub const BLACK: Color = Color([0, 0, 0]);
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb(color.0)
    }
}

/// How the board and the path are drawn. Missing fields in JSON fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Width and height of one square in pixels
    pub cell_size: u32,
    /// Squares where `file + rank` is odd
    pub light: Color,
    /// Squares where `file + rank` is even
    pub dark: Color,
    pub path_color: Color,
    /// Stroke width of the path in pixels
    pub path_width: f32,
    pub marker_color: Color,
    /// Space between the start marker and the cell border, as a fraction of the cell size
    pub marker_margin: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            cell_size: 50,
            light: Color::WHITE,
            dark: Color::GRAY,
            path_color: Color::RED,
            path_width: 5.0,
            marker_color: Color::BLACK,
            marker_margin: 0.2,
        }
    }
}

impl RenderStyle {
    pub fn from_json(json: &str) -> Result<Self> {
        let style: RenderStyle = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    pub fn load(path: &std::path::Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(RenderError::invalid_style("cell_size must be positive"));
        }
        match (knight_search::BOARD_SIZE as u32).checked_mul(self.cell_size) {
            Some(size) if size <= MAX_IMAGE_SIZE => {}
            _ => {
                return Err(RenderError::invalid_style(format!(
                    "cell_size {} makes the board larger than {MAX_IMAGE_SIZE} pixels",
                    self.cell_size
                )))
            }
        }
        if !self.path_width.is_finite() || self.path_width <= 0.0 {
            return Err(RenderError::invalid_style(format!(
                "path_width must be positive, got {}",
                self.path_width
            )));
        }
        if !(0.0..0.5).contains(&self.marker_margin) {
            return Err(RenderError::invalid_style(format!(
                "marker_margin must be in [0, 0.5), got {}",
                self.marker_margin
            )));
        }
        Ok(())
    }

    /// Width and height of the rendered image in pixels, saturating for styles that do not
    /// pass [`RenderStyle::validate`]
    pub fn image_size(&self) -> u32 {
        (knight_search::BOARD_SIZE as u32).saturating_mul(self.cell_size)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = RenderStyle::default();
        assert_eq!(style.cell_size, 50);
        assert_eq!(style.image_size(), 400);
        assert_eq!(style.dark, Color::GRAY);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let style = RenderStyle::from_json(r#"{ "cell_size": 20, "dark": [10, 20, 30] }"#).unwrap();

        assert_eq!(style.cell_size, 20);
        assert_eq!(style.image_size(), 160);
        assert_eq!(style.dark, Color([10, 20, 30]));
        assert_eq!(style.light, Color::WHITE);
        assert_eq!(style.path_width, 5.0);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(RenderStyle::from_json("{}").unwrap(), RenderStyle::default());
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            RenderStyle::from_json(r#"{ "cell_size": "big" }"#),
            Err(RenderError::Style(_))
        ));
    }

    #[test]
    fn test_cell_size_limits() {
        let largest = RenderStyle {
            cell_size: MAX_IMAGE_SIZE / 8,
            ..Default::default()
        };
        assert!(largest.validate().is_ok());
        assert_eq!(largest.image_size(), MAX_IMAGE_SIZE);

        let overflowing = RenderStyle {
            cell_size: u32::MAX / 4,
            ..Default::default()
        };
        assert!(matches!(
            overflowing.validate(),
            Err(RenderError::InvalidStyle(_))
        ));
        assert_eq!(overflowing.image_size(), u32::MAX);
    }

    #[test]
    fn test_invalid_values() {
        for json in [
            r#"{ "cell_size": 0 }"#,
            r#"{ "cell_size": 1073741823 }"#,
            r#"{ "cell_size": 4097 }"#,
            r#"{ "path_width": 0.0 }"#,
            r#"{ "path_width": -1.0 }"#,
            r#"{ "marker_margin": 0.5 }"#,
            r#"{ "marker_margin": -0.1 }"#,
        ] {
            assert!(
                matches!(RenderStyle::from_json(json), Err(RenderError::InvalidStyle(_))),
                "{json} should be rejected"
            );
        }
    }
}
