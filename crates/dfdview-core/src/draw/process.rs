//! Process: a numbered transformation of data, drawn as a circle.
//!
//! The process number sits above the center; the label is split on `\n` and
//! stacked below it at a fixed line pitch.

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

/// Vertical distance from the center to the process number baseline.
const NUMBER_OFFSET: f32 = 25.0;
/// Pitch between label lines.
const LINE_HEIGHT: f32 = 18.0;
/// Upward nudge applied to multi-line labels.
const MULTI_LINE_LIFT: f32 = 5.0;

/// Shared styling for [`Process`] elements.
#[derive(Debug, Clone)]
pub struct ProcessDefinition {
    fill_color: Color,
    stroke: StrokeDefinition,
    number_text: TextDefinition,
    label_text: TextDefinition,
    shadow: Option<Shadow>,
}

impl ProcessDefinition {
    /// Create a new process definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The radius used when a process does not specify one.
    pub fn default_radius() -> f32 {
        65.0
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Default for ProcessDefinition {
    fn default() -> Self {
        let accent = Color::new("#0066CC").expect("valid process accent color");

        let mut number_text = TextDefinition::new();
        number_text.set_font_size(16.0);
        number_text.set_font_weight(FontWeight::ExtraBold);
        number_text.set_color(Some(accent));
        number_text.set_anchor(TextAnchor::Middle);

        let mut label_text = TextDefinition::new();
        label_text.set_font_size(12.0);
        label_text.set_font_weight(FontWeight::SemiBold);
        label_text.set_color(Some(Color::new("#000").expect("valid process text color")));
        label_text.set_anchor(TextAnchor::Middle);

        Self {
            fill_color: Color::new("#E6F3FF").expect("valid process fill color"),
            stroke: StrokeDefinition::solid(accent, 2.5),
            number_text,
            label_text,
            shadow: Some(Shadow::Regular),
        }
    }
}

/// A process placed by its center.
#[derive(Debug, Clone)]
pub struct Process {
    definition: Arc<ProcessDefinition>,
    center: Point,
    radius: f32,
    number: String,
    label: String,
}

impl Process {
    /// Creates a process of the default radius.
    ///
    /// `label` may contain `\n` to break lines.
    pub fn new(
        definition: Arc<ProcessDefinition>,
        center: Point,
        number: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            definition,
            center,
            radius: ProcessDefinition::default_radius(),
            number: number.into(),
            label: label.into(),
        }
    }

    /// Overrides the circle radius (builder style).
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Positions of each label line, in order.
    fn label_line_positions(&self) -> impl Iterator<Item = (&str, Point)> {
        let lines: Vec<&str> = self.label.split('\n').collect();
        let lift = if lines.len() > 1 { MULTI_LINE_LIFT } else { 0.0 };
        let center = self.center;

        lines.into_iter().enumerate().map(move |(index, line)| {
            let y = center.y() + index as f32 * LINE_HEIGHT - lift;
            (line, Point::new(center.x(), y))
        })
    }
}

impl Drawable for Process {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let definition = &self.definition;

        let circle = svg_element::Circle::new()
            .set("cx", self.center.x())
            .set("cy", self.center.y())
            .set("r", self.radius)
            .set("fill", definition.fill_color.to_svg_value())
            .set("fill-opacity", definition.fill_color.alpha());
        let mut circle = crate::apply_stroke!(circle, definition.stroke());
        if let Some(shadow) = definition.shadow {
            circle = circle.set("filter", shadow.url());
        }
        output.add_to_layer(RenderLayer::Content, Box::new(circle));

        let number_position = Point::new(self.center.x(), self.center.y() - NUMBER_OFFSET);
        let number = Text::new(&definition.number_text, &self.number).render_at(number_position);
        output.add_to_layer(RenderLayer::Text, number);

        for (line, position) in self.label_line_positions() {
            let text = Text::new(&definition.label_text, line).render_at(position);
            output.add_to_layer(RenderLayer::Text, text);
        }

        output
    }

    fn bounds(&self) -> Bounds {
        let diameter = self.radius * 2.0;
        Bounds::new_from_center(self.center, Size::new(diameter, diameter))
    }
}
