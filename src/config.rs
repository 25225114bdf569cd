//! Renderer configuration

use crate::errors::ConfigError;
use crate::render::clip::ClipStrategy;
use crate::render::defaults;
use crate::render::types::Theme;
use crate::types::{Color, NumericError};

/// Everything fixed when a renderer is built
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Model units to pixels.
    pub pixels_per_unit: f64,
    /// How close the cursor must come to a handle to hit it.
    pub hit_radius_px: f64,
    pub clip: ClipStrategy,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pixels_per_unit: defaults::PIXELS_PER_UNIT,
            hit_radius_px: defaults::HIT_RADIUS_PX,
            clip: ClipStrategy::default(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f64) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    pub fn with_hit_radius(mut self, hit_radius_px: f64) -> Self {
        self.hit_radius_px = hit_radius_px;
        self
    }

    pub fn with_clip(mut self, clip: ClipStrategy) -> Self {
        self.clip = clip;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the background from a color string: `#rgb`, `#rrggbb`,
    /// `#rrggbbaa` or a color name.
    pub fn with_background(mut self, color: &str) -> Result<Self, ConfigError> {
        self.theme.background = color.parse()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        NumericError::check_positive(self.pixels_per_unit).map_err(|reason| {
            ConfigError::InvalidPixelsPerUnit {
                value: self.pixels_per_unit,
                reason,
            }
        })?;
        NumericError::check_positive(self.hit_radius_px).map_err(|reason| {
            ConfigError::InvalidHitRadius {
                value: self.hit_radius_px,
                reason,
            }
        })?;

        let theme = &self.theme;
        let colors = [
            &theme.background,
            &theme.grid.color,
            &theme.axis.color,
            &theme.vector.line.color,
            &theme.handle.idle,
            &theme.handle.hovered,
            &theme.handle.dragging,
            &theme.point.color,
        ];
        for color in colors {
            check_color(color)?;
        }
        Ok(())
    }
}

/// Names must be non-empty and alphabetic; raw values must be non-empty.
fn check_color(color: &Color) -> Result<(), ConfigError> {
    let bad = match color {
        Color::Named(name) => name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()),
        Color::Raw(raw) => raw.trim().is_empty(),
        Color::Rgb(..) | Color::Rgba(..) => false,
    };
    if bad {
        return Err(ConfigError::InvalidColor {
            input: color.to_string(),
        });
    }
    Ok(())
}
