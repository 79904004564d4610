//! Color handling for dfdview diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors are parsed from CSS strings, written into SVG
//! attributes, and converted to 8-bit RGBA when a raster background is filled.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfdview_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let slate = Color::new("#f8fafc").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfdview_core::color::Color;
    ///
    /// let fill = Color::new("#F0FFF0").unwrap().with_alpha(0.7);
    /// assert!((fill.alpha() - 0.7).abs() < 0.001);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Converts this color to 8-bit sRGB components `[r, g, b, a]`.
    ///
    /// Used when a raster surface is cleared to a background color.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfdview_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red.to_rgba8(), [255, 0, 0, 255]);
    /// ```
    pub fn to_rgba8(self) -> [u8; 4] {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        [rgba.r, rgba.g, rgba.b, rgba.a]
    }

    /// Returns the opaque `#rrggbb` form of this color for SVG paint attributes.
    ///
    /// Alpha is dropped; callers pair it with a `*-opacity` attribute so that
    /// both browsers and SVG rasterizers see the same paint.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfdview_core::color::Color;
    ///
    /// let color = Color::new("rgb(0, 102, 204)").unwrap();
    /// assert_eq!(color.to_svg_value(), "#0066cc");
    /// ```
    pub fn to_svg_value(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_svg_value())
    }
}
