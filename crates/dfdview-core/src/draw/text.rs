//! Text rendering definitions for diagram labels.
//!
//! - [`TextDefinition`] - Reusable text style (family, size, weight, color, anchoring)
//! - [`Text`] - A string paired with a [`TextDefinition`], rendered at an explicit point
//!
//! Positions are literal scene coordinates, so no text measurement is done:
//! horizontal alignment is left to `text-anchor` and vertical alignment to
//! `dominant-baseline`.
//!
//! ```
//! # use dfdview_core::draw::{FontWeight, Text, TextAnchor, TextDefinition};
//! # use dfdview_core::geometry::Point;
//! let mut style = TextDefinition::new();
//! style.set_font_size(14.0);
//! style.set_font_weight(FontWeight::Bold);
//! style.set_anchor(TextAnchor::Middle);
//!
//! let node = Text::new(&style, "Pharmacist").render_at(Point::new(220.0, 1085.0));
//! assert!(node.to_string().contains("Pharmacist"));
//! ```

use svg::node::{Text as SvgText, element as svg_element};

use crate::{color::Color, draw::SvgNode, geometry::Point};

/// Font weight, serialized as its numeric CSS value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    SemiBold,
    Bold,
    ExtraBold,
}

impl FontWeight {
    /// Returns the CSS numeric weight
    pub fn to_svg_value(self) -> u16 {
        match self {
            Self::Normal => 400,
            Self::SemiBold => 600,
            Self::Bold => 700,
            Self::ExtraBold => 800,
        }
    }
}

/// Horizontal anchoring of text relative to its position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Defines the visual style for text elements.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Font weight | normal |
/// | Color | `None` (SVG default, black) |
/// | Anchor | start |
/// | Vertically centered | `false` |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    font_weight: FontWeight,
    color: Option<Color>,
    anchor: TextAnchor,
    vertically_centered: bool,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the font family.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size in pixels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the font weight.
    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Returns the text color, if set.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Returns the horizontal anchor.
    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Sets the font weight.
    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_weight = weight;
    }

    /// Sets the text color; `None` leaves the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the horizontal anchor.
    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    /// When set, the text's vertical middle sits on the position's y.
    pub fn set_vertically_centered(&mut self, centered: bool) {
        self.vertically_centered = centered;
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12.0,
            font_weight: FontWeight::default(),
            color: None,
            anchor: TextAnchor::default(),
            vertically_centered: false,
        }
    }
}

/// A renderable single-line text element.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Renders an SVG `<text>` element anchored at `position`.
    pub fn render_at(&self, position: Point) -> SvgNode {
        let definition = self.definition;
        let mut rendered = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", definition.anchor().to_svg_value())
            .set("font-family", definition.font_family())
            .set("font-size", definition.font_size())
            .set("font-weight", definition.font_weight().to_svg_value());

        if definition.vertically_centered {
            rendered = rendered.set("dominant-baseline", "middle");
        }

        if let Some(color) = definition.color() {
            rendered = rendered
                .set("fill", color.to_svg_value())
                .set("fill-opacity", color.alpha());
        }

        Box::new(rendered.add(SvgText::new(self.content)))
    }
}
