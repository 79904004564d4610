//! Configuration types for dfdview.
//!
//! This module provides configuration structures that control how the diagram
//! is exported. All types implement [`serde::Deserialize`] for loading from
//! TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining style and export settings.
//! - [`StyleConfig`] - Visual styling options such as the export background color.
//! - [`ExportConfig`] - Raster oversampling and encoder quality.
//!
//! # Example
//!
//! ```
//! # use dfdview::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.export().pixel_ratio(), 3.0);
//! ```

use serde::Deserialize;

use dfdview_core::color::Color;

/// Background painted behind exported images when none is configured.
pub const DEFAULT_BACKGROUND: &str = "#f8fafc";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(style: StyleConfig, export: ExportConfig) -> Self {
        Self { style, export }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }
}

/// Visual styling configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] of exported images, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style section with the given background color string.
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

/// Export tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Device pixels per canvas unit for raster output.
    #[serde(default = "ExportConfig::default_pixel_ratio")]
    pixel_ratio: f32,

    /// Encoder quality in `0.0..=1.0`; lossless encoders ignore it.
    #[serde(default = "ExportConfig::default_quality")]
    quality: f32,
}

impl ExportConfig {
    /// Creates an export section.
    pub fn new(pixel_ratio: f32, quality: f32) -> Self {
        Self {
            pixel_ratio,
            quality,
        }
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    pub fn quality(&self) -> f32 {
        self.quality
    }

    /// Checks that the values can be handed to an encoder.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending key when the pixel ratio is not
    /// a positive finite number or the quality lies outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0) {
            return Err(format!(
                "Invalid export.pixel_ratio in config: {} (expected a positive number)",
                self.pixel_ratio
            ));
        }
        if !(0.0..=1.0).contains(&self.quality) {
            return Err(format!(
                "Invalid export.quality in config: {} (expected a value between 0 and 1)",
                self.quality
            ));
        }
        Ok(())
    }

    fn default_pixel_ratio() -> f32 {
        3.0
    }

    fn default_quality() -> f32 {
        1.0
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(Self::default_pixel_ratio(), Self::default_quality())
    }
}
