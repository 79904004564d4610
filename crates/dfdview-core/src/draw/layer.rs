//! Layer-based rendering for SVG output.
//!
//! Drawables push their SVG nodes onto a [`RenderLayer`]; [`LayeredOutput`]
//! later emits one `<g data-layer="..">` group per non-empty layer, bottom to
//! top, so that every connector is painted above every shape and every label
//! above every connector regardless of the order elements appear in a scene.
//!
//! # Example
//!
//! ```
//! # use dfdview_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Text};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("1.1")));
//! output.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));
//!
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Fills drawn beneath outlines (data store bodies)
    Background,
    /// Entity boxes, process circles and data store rails
    Content,
    /// Data flow paths
    Arrow,
    /// Label plates behind data flow captions
    Label,
    /// All text
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Content => "content",
            Self::Arrow => "arrow",
            Self::Label => "label",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends all nodes of `other` to this output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Nodes keep their insertion order within a layer (stable sort).
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::Rectangle;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Label, Box::new(Rectangle::new()));

        output1.merge(output2);
        assert_eq!(output1.render().len(), 2);
    }

    #[test]
    fn test_layered_output_merge_same_layer() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Arrow, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Arrow, Box::new(Rectangle::new()));

        output1.merge(output2);
        assert_eq!(output1.render().len(), 1);
    }

    #[test]
    fn test_layered_output_render_orders_layers() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Arrow, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();

        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].contains(r#"data-layer="background""#));
        assert!(rendered[1].contains(r#"data-layer="arrow""#));
        assert!(rendered[2].contains(r#"data-layer="text""#));
    }
}
