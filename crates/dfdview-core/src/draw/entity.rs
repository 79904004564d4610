//! External entity: a source or sink of data outside the system boundary.
//!
//! Drawn as a rounded rectangle with a bold, centered label.

use std::sync::Arc;

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{
        Drawable, FontWeight, LayeredOutput, RenderLayer, Shadow, StrokeDefinition, Text,
        TextAnchor, TextDefinition,
    },
    geometry::{Bounds, Point, Size},
};

/// Shared styling for [`ExternalEntity`] elements.
#[derive(Debug, Clone)]
pub struct EntityDefinition {
    fill_color: Color,
    stroke: StrokeDefinition,
    text: TextDefinition,
    corner_radius: f32,
    shadow: Option<Shadow>,
}

impl EntityDefinition {
    /// Create a new entity definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The box size used when an entity does not specify one.
    pub fn default_size() -> Size {
        Size::new(140.0, 70.0)
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn text(&self) -> &TextDefinition {
        &self.text
    }
}

impl Default for EntityDefinition {
    fn default() -> Self {
        let mut text = TextDefinition::new();
        text.set_font_size(14.0);
        text.set_font_weight(FontWeight::Bold);
        text.set_color(Some(Color::new("#000").expect("valid entity text color")));
        text.set_anchor(TextAnchor::Middle);
        text.set_vertically_centered(true);

        Self {
            fill_color: Color::new("#FFE6E6").expect("valid entity fill color"),
            stroke: StrokeDefinition::solid(
                Color::new("#CC0000").expect("valid entity stroke color"),
                2.0,
            ),
            text,
            corner_radius: 5.0,
            shadow: Some(Shadow::Regular),
        }
    }
}

/// An external entity placed by its top-left corner.
#[derive(Debug, Clone)]
pub struct ExternalEntity {
    definition: Arc<EntityDefinition>,
    top_left: Point,
    size: Size,
    label: String,
}

impl ExternalEntity {
    /// Creates an entity of the definition's default size.
    pub fn new(definition: Arc<EntityDefinition>, top_left: Point, label: impl Into<String>) -> Self {
        Self {
            definition,
            top_left,
            size: EntityDefinition::default_size(),
            label: label.into(),
        }
    }

    /// Overrides the box size (builder style).
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Drawable for ExternalEntity {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let definition = &self.definition;

        let rect = svg_element::Rectangle::new()
            .set("x", self.top_left.x())
            .set("y", self.top_left.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("rx", definition.corner_radius)
            .set("fill", definition.fill_color.to_svg_value())
            .set("fill-opacity", definition.fill_color.alpha());
        let mut rect = crate::apply_stroke!(rect, definition.stroke());
        if let Some(shadow) = definition.shadow {
            rect = rect.set("filter", shadow.url());
        }
        output.add_to_layer(RenderLayer::Content, Box::new(rect));

        let center = self.bounds().center();
        let label = Text::new(definition.text(), &self.label).render_at(center);
        output.add_to_layer(RenderLayer::Text, label);

        output
    }

    fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.top_left, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> ExternalEntity {
        ExternalEntity::new(
            Arc::new(EntityDefinition::default()),
            Point::new(150.0, 350.0),
            "User",
        )
    }

    #[test]
    fn test_entity_default_size_and_bounds() {
        let entity = entity();
        assert_eq!(entity.size(), Size::new(140.0, 70.0));

        let bounds = entity.bounds();
        assert_eq!(bounds.min_point(), Point::new(150.0, 350.0));
        assert_eq!(bounds.center(), Point::new(220.0, 385.0));
    }

    #[test]
    fn test_entity_with_size() {
        let entity = entity().with_size(Size::new(160.0, 70.0));
        assert_eq!(entity.bounds().max_x(), 310.0);
    }

    #[test]
    fn test_entity_render() {
        let groups: Vec<String> = entity()
            .render_to_layers()
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();

        assert_eq!(groups.len(), 2);
        assert!(groups[0].contains("<rect"));
        assert!(groups[0].contains(r#"rx="5""#));
        assert!(groups[0].contains(r##"fill="#ffe6e6""##));
        assert!(groups[0].contains("url(#shadow)"));
        assert!(groups[1].contains(r#"x="220""#));
        assert!(groups[1].contains(r#"y="385""#));
        assert!(groups[1].contains("User"));
    }
}
