//! Data store: an open-ended rectangle with rails on top and bottom.

use std::sync::Arc;

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{
        Drawable, FontWeight, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition,
    },
    geometry::{Bounds, Point, Size},
};

/// Inset of the id and label from the left edge.
const TEXT_INSET: f32 = 15.0;
/// Baseline offset of the id from the top edge.
const ID_BASELINE: f32 = 22.0;
/// Baseline offset of the label from the top edge.
const LABEL_BASELINE: f32 = 42.0;

/// Shared styling for [`DataStore`] elements.
#[derive(Debug, Clone)]
pub struct DataStoreDefinition {
    fill_color: Color,
    rail: StrokeDefinition,
    id_text: TextDefinition,
    label_text: TextDefinition,
}

impl DataStoreDefinition {
    /// Create a new data store definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The size used when a store does not specify one.
    pub fn default_size() -> Size {
        Size::new(200.0, 60.0)
    }

    pub fn rail(&self) -> &StrokeDefinition {
        &self.rail
    }
}

impl Default for DataStoreDefinition {
    fn default() -> Self {
        let mut id_text = TextDefinition::new();
        id_text.set_font_size(13.0);
        id_text.set_font_weight(FontWeight::ExtraBold);
        id_text.set_color(Some(Color::new("#006600").expect("valid store id color")));

        let mut label_text = TextDefinition::new();
        label_text.set_font_size(12.0);
        label_text.set_font_weight(FontWeight::SemiBold);
        label_text.set_color(Some(Color::new("#000").expect("valid store text color")));

        Self {
            fill_color: Color::new("#F0FFF0")
                .expect("valid store fill color")
                .with_alpha(0.7),
            rail: StrokeDefinition::solid(Color::new("#009900").expect("valid rail color"), 3.0),
            id_text,
            label_text,
        }
    }
}

/// A data store placed by its top-left corner.
#[derive(Debug, Clone)]
pub struct DataStore {
    definition: Arc<DataStoreDefinition>,
    top_left: Point,
    size: Size,
    id: String,
    label: String,
}

impl DataStore {
    /// Creates a store of the default size; `id` is the short tag such as `"D1:"`.
    pub fn new(
        definition: Arc<DataStoreDefinition>,
        top_left: Point,
        id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            definition,
            top_left,
            size: DataStoreDefinition::default_size(),
            id: id.into(),
            label: label.into(),
        }
    }

    /// Overrides the store size (builder style).
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn rail(&self, y: f32) -> svg_element::Line {
        let line = svg_element::Line::new()
            .set("x1", self.top_left.x())
            .set("y1", y)
            .set("x2", self.top_left.x() + self.size.width())
            .set("y2", y);
        crate::apply_stroke!(line, self.definition.rail())
    }
}

impl Drawable for DataStore {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let definition = &self.definition;
        let (x, y) = (self.top_left.x(), self.top_left.y());

        let body = svg_element::Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", definition.fill_color.to_svg_value())
            .set("fill-opacity", definition.fill_color.alpha());
        output.add_to_layer(RenderLayer::Background, Box::new(body));

        output.add_to_layer(RenderLayer::Content, Box::new(self.rail(y)));
        output.add_to_layer(
            RenderLayer::Content,
            Box::new(self.rail(y + self.size.height())),
        );

        let id = Text::new(&definition.id_text, &self.id)
            .render_at(Point::new(x + TEXT_INSET, y + ID_BASELINE));
        output.add_to_layer(RenderLayer::Text, id);

        let label = Text::new(&definition.label_text, &self.label)
            .render_at(Point::new(x + TEXT_INSET, y + LABEL_BASELINE));
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

    fn store() -> DataStore {
        DataStore::new(
            Arc::new(DataStoreDefinition::default()),
            Point::new(1950.0, 200.0),
            "D1:",
            "User Data Store",
        )
    }

    #[test]
    fn test_data_store_bounds() {
        let bounds = store().bounds();
        assert_eq!(bounds.min_point(), Point::new(1950.0, 200.0));
        assert_eq!(bounds.to_size(), Size::new(200.0, 60.0));

        let wide = store().with_size(Size::new(260.0, 60.0));
        assert_eq!(wide.bounds().max_x(), 2210.0);
    }

    #[test]
    fn test_data_store_render() {
        let groups: Vec<String> = store()
            .render_to_layers()
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();

        assert_eq!(groups.len(), 3);

        // body
        assert!(groups[0].contains(r#"data-layer="background""#));
        assert!(groups[0].contains(r#"fill-opacity="0.7""#));

        // rails
        assert_eq!(groups[1].matches("<line").count(), 2);
        assert!(groups[1].contains(r#"y1="260""#));
        assert!(groups[1].contains(r#"stroke-width="3""#));

        // id and label
        assert!(groups[2].contains(r#"x="1965""#));
        assert!(groups[2].contains(r#"y="222""#));
        assert!(groups[2].contains(r#"y="242""#));
        assert!(groups[2].contains("D1:"));
        assert!(groups[2].contains("User Data Store"));
    }
}
