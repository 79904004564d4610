//! Stroke definitions for outlines and lines.
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#cc0000"`, `1` |
//! | `width` | `stroke-width` | `2.5` |

use crate::color::Color;

/// A solid stroke for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use dfdview_core::draw::StrokeDefinition;
/// use dfdview_core::color::Color;
///
/// // Process outline
/// let stroke = StrokeDefinition::solid(Color::new("#0066CC").unwrap(), 2.5);
/// assert_eq!(stroke.width(), 2.5);
/// ```
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply the stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use dfdview_core::draw::StrokeDefinition;
/// use dfdview_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("#009900").unwrap(), 3.0);
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0)
///     .set("x2", 200)
///     .set("y2", 0);
///
/// let line = dfdview_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_svg_value())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
    }

    #[test]
    fn test_apply_stroke_sets_attributes() {
        let stroke = StrokeDefinition::solid(Color::new("#CC0000").unwrap(), 2.0);
        let rect = crate::apply_stroke!(svg::node::element::Rectangle::new(), &stroke);
        let markup = rect.to_string();

        assert!(markup.contains(r##"stroke="#cc0000""##));
        assert!(markup.contains(r#"stroke-width="2""#));
        assert!(!markup.contains("stroke-dasharray"));
    }
}
