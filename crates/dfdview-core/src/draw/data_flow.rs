//! Data flow drawable: a labeled connector with an arrowhead at its end.
//!
//! A flow is either a polyline through two or more points, a cubic curve with
//! explicit control points, or a quadratic curve whose control point is
//! derived from the endpoints. Every flow carries a caption drawn on a small
//! plate placed near the middle of the path.

use std::sync::Arc;

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{
        Drawable, FontWeight, LayeredOutput, RenderLayer, Shadow, StrokeDefinition, SvgNode,
        Text, TextAnchor, TextDefinition,
    },
    geometry::{Bounds, Point, Size},
};

/// The SVG id of the shared arrowhead marker.
pub const ARROWHEAD_ID: &str = "arrowhead";

/// Fraction of |dx|, |dy| used to push the automatic quadratic control point
/// away from the chord midpoint.
const AUTO_CURVE_FACTOR: f32 = 0.3;

/// Offset of a curved flow's caption from the chord midpoint.
const CURVED_LABEL_OFFSET: Point = Point::new(20.0, -15.0);
/// Lift of a straight flow's caption above the chord midpoint.
const STRAIGHT_LABEL_LIFT: f32 = 10.0;
/// Size of the caption plate.
const LABEL_PLATE_SIZE: Size = Size::new(90.0, 20.0);
/// Baseline offset of the caption text below the plate center.
const LABEL_BASELINE_OFFSET: f32 = 4.0;

/// Straight segments from `start` through any bends to `end`.
///
/// Only built through [`FlowPath::polyline`] and [`FlowPath::straight`], so
/// it always has both endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    start: Point,
    bends: Vec<Point>,
    end: Point,
}

impl Polyline {
    /// Every point of the polyline, in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.start)
            .chain(self.bends.iter().copied())
            .chain(std::iter::once(self.end))
    }
}

/// Geometry of a data flow.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowPath {
    /// Straight segments through every point, in order.
    Polyline(Polyline),
    /// Cubic Bezier from `start` to `end`.
    Cubic {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Quadratic Bezier whose control point is computed by [`FlowPath::quadratic_control`].
    Quadratic { start: Point, end: Point },
}

impl FlowPath {
    /// Creates a polyline path.
    ///
    /// Returns `None` when fewer than two points are given.
    pub fn polyline(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut bends: Vec<Point> = points.into_iter().collect();
        if bends.len() < 2 {
            return None;
        }
        let end = bends.pop()?;
        let start = bends.remove(0);
        Some(Self::Polyline(Polyline { start, bends, end }))
    }

    /// Creates a straight segment between two points.
    pub fn straight(start: Point, end: Point) -> Self {
        Self::Polyline(Polyline {
            start,
            bends: Vec::new(),
            end,
        })
    }

    /// First point of the path.
    pub fn start(&self) -> Point {
        match self {
            Self::Polyline(Polyline { start, .. })
            | Self::Cubic { start, .. }
            | Self::Quadratic { start, .. } => *start,
        }
    }

    /// Last point of the path, where the arrowhead sits.
    pub fn end(&self) -> Point {
        match self {
            Self::Polyline(Polyline { end, .. })
            | Self::Cubic { end, .. }
            | Self::Quadratic { end, .. } => *end,
        }
    }

    /// Whether the path is drawn as a curve.
    pub fn is_curved(&self) -> bool {
        !matches!(self, Self::Polyline(_))
    }

    /// Control point of an automatic quadratic curve between `start` and `end`.
    ///
    /// The chord midpoint is pushed by 30% of the absolute horizontal and
    /// vertical distance, always toward positive x and y.
    pub fn quadratic_control(start: Point, end: Point) -> Point {
        let offset = end.sub_point(start).abs().scale(AUTO_CURVE_FACTOR);
        start.midpoint(end).add_point(offset)
    }

    /// Builds the SVG path data string.
    pub fn to_path_data(&self) -> String {
        match self {
            Self::Polyline(polyline) => polyline
                .points()
                .enumerate()
                .map(|(index, point)| {
                    let command = if index == 0 { 'M' } else { 'L' };
                    format!("{command} {} {}", point.x(), point.y())
                })
                .collect::<Vec<_>>()
                .join(" "),
            Self::Cubic {
                start,
                control1,
                control2,
                end,
            } => format!(
                "M {} {} C {} {}, {} {}, {} {}",
                start.x(),
                start.y(),
                control1.x(),
                control1.y(),
                control2.x(),
                control2.y(),
                end.x(),
                end.y()
            ),
            Self::Quadratic { start, end } => {
                let control = Self::quadratic_control(*start, *end);
                format!(
                    "M {} {} Q {} {} {} {}",
                    start.x(),
                    start.y(),
                    control.x(),
                    control.y(),
                    end.x(),
                    end.y()
                )
            }
        }
    }

    /// Center of the caption plate.
    ///
    /// Curved flows place it beside the chord midpoint; straight flows place it
    /// just above the midpoint of the first and last points.
    pub fn label_position(&self) -> Point {
        let midpoint = self.start().midpoint(self.end());
        if self.is_curved() {
            midpoint.add_point(CURVED_LABEL_OFFSET)
        } else {
            Point::new(midpoint.x(), midpoint.y() - STRAIGHT_LABEL_LIFT)
        }
    }

    /// Every point that defines the path, control points included.
    fn defining_points(&self) -> Vec<Point> {
        match self {
            Self::Polyline(polyline) => polyline.points().collect(),
            Self::Cubic {
                start,
                control1,
                control2,
                end,
            } => vec![*start, *control1, *control2, *end],
            Self::Quadratic { start, end } => {
                vec![*start, Self::quadratic_control(*start, *end), *end]
            }
        }
    }
}

/// Shared styling for [`DataFlow`] elements.
#[derive(Debug, Clone)]
pub struct DataFlowDefinition {
    stroke: StrokeDefinition,
    plate_fill: Color,
    plate_stroke: StrokeDefinition,
    plate_corner_radius: f32,
    plate_shadow: Option<Shadow>,
    text: TextDefinition,
}

impl DataFlowDefinition {
    /// Create a new data flow definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Builds the arrowhead `<marker>` every flow references.
    pub fn arrowhead_definition(&self) -> SvgNode {
        let color = self.stroke.color();
        Box::new(
            svg_element::Marker::new()
                .set("id", ARROWHEAD_ID)
                .set("markerWidth", 10)
                .set("markerHeight", 10)
                .set("refX", 9)
                .set("refY", 3)
                .set("orient", "auto")
                .add(
                    svg_element::Polygon::new()
                        .set("points", "0 0, 10 3, 0 6")
                        .set("fill", color.to_svg_value())
                        .set("fill-opacity", color.alpha()),
                ),
        )
    }
}

impl Default for DataFlowDefinition {
    fn default() -> Self {
        let mut text = TextDefinition::new();
        text.set_font_size(10.0);
        text.set_font_weight(FontWeight::SemiBold);
        text.set_color(Some(Color::new("#000").expect("valid flow text color")));
        text.set_anchor(TextAnchor::Middle);

        Self {
            stroke: StrokeDefinition::solid(Color::new("#333").expect("valid flow color"), 2.0),
            plate_fill: Color::new("white").expect("valid plate fill color"),
            plate_stroke: StrokeDefinition::solid(
                Color::new("#666").expect("valid plate stroke color"),
                0.5,
            ),
            plate_corner_radius: 3.0,
            plate_shadow: Some(Shadow::Light),
            text,
        }
    }
}

/// A labeled connector between two diagram elements.
#[derive(Debug, Clone)]
pub struct DataFlow {
    definition: Arc<DataFlowDefinition>,
    path: FlowPath,
    label: String,
}

impl DataFlow {
    pub fn new(definition: Arc<DataFlowDefinition>, path: FlowPath, label: impl Into<String>) -> Self {
        Self {
            definition,
            path,
            label: label.into(),
        }
    }

    pub fn path(&self) -> &FlowPath {
        &self.path
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Drawable for DataFlow {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let definition = &self.definition;

        let path = svg_element::Path::new()
            .set("d", self.path.to_path_data())
            .set("fill", "none");
        let path = crate::apply_stroke!(path, definition.stroke())
            .set("marker-end", format!("url(#{ARROWHEAD_ID})"));
        output.add_to_layer(RenderLayer::Arrow, Box::new(path));

        let label_center = self.path.label_position();
        let plate_origin = Point::new(
            label_center.x() - LABEL_PLATE_SIZE.width() / 2.0,
            label_center.y() - LABEL_PLATE_SIZE.height() / 2.0,
        );
        let plate = svg_element::Rectangle::new()
            .set("x", plate_origin.x())
            .set("y", plate_origin.y())
            .set("width", LABEL_PLATE_SIZE.width())
            .set("height", LABEL_PLATE_SIZE.height())
            .set("rx", definition.plate_corner_radius)
            .set("fill", definition.plate_fill.to_svg_value())
            .set("fill-opacity", definition.plate_fill.alpha());
        let mut plate = crate::apply_stroke!(plate, &definition.plate_stroke);
        if let Some(shadow) = definition.plate_shadow {
            plate = plate.set("filter", shadow.url());
        }
        output.add_to_layer(RenderLayer::Label, Box::new(plate));

        let baseline = Point::new(label_center.x(), label_center.y() + LABEL_BASELINE_OFFSET);
        let caption = Text::new(&definition.text, &self.label).render_at(baseline);
        output.add_to_layer(RenderLayer::Text, caption);

        output
    }

    fn bounds(&self) -> Bounds {
        let path_bounds = Bounds::from_points(self.path.defining_points())
            .unwrap_or_else(|| Bounds::new_from_center(self.path.start(), Size::default()));
        let plate_bounds = Bounds::new_from_center(self.path.label_position(), LABEL_PLATE_SIZE);
        path_bounds.merge(&plate_bounds)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn flow(path: FlowPath) -> DataFlow {
        DataFlow::new(Arc::new(DataFlowDefinition::default()), path, "Login Request")
    }

    #[test]
    fn test_polyline_requires_two_points() {
        assert!(FlowPath::polyline(Vec::new()).is_none());
        assert!(FlowPath::polyline([Point::new(1.0, 1.0)]).is_none());
        assert!(FlowPath::polyline([Point::new(1.0, 1.0), Point::new(2.0, 2.0)]).is_some());
    }

    #[test]
    fn test_polyline_keeps_every_point() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let Some(FlowPath::Polyline(polyline)) = FlowPath::polyline(points) else {
            panic!("Expected a polyline");
        };

        assert_eq!(polyline.points().collect::<Vec<_>>(), points);
    }

    #[test]
    fn test_polyline_path_data() {
        let path = FlowPath::polyline([
            Point::new(290.0, 385.0),
            Point::new(500.0, 385.0),
            Point::new(685.0, 300.0),
        ])
        .unwrap();

        assert_eq!(path.to_path_data(), "M 290 385 L 500 385 L 685 300");
        assert_eq!(path.end(), Point::new(685.0, 300.0));
        assert!(!path.is_curved());
    }

    #[test]
    fn test_cubic_path_data() {
        let path = FlowPath::Cubic {
            start: Point::new(1255.0, 1800.0),
            control1: Point::new(1600.0, 1700.0),
            control2: Point::new(1800.0, 1600.0),
            end: Point::new(1950.0, 1570.0),
        };

        assert_eq!(
            path.to_path_data(),
            "M 1255 1800 C 1600 1700, 1800 1600, 1950 1570"
        );
    }

    #[test]
    fn test_quadratic_control_uses_absolute_offsets() {
        // Leftward and upward flow still bends toward +x, +y.
        let control = FlowPath::quadratic_control(Point::new(200.0, 200.0), Point::new(100.0, 100.0));
        assert_approx_eq!(f32, control.x(), 180.0);
        assert_approx_eq!(f32, control.y(), 180.0);

        let path = FlowPath::Quadratic {
            start: Point::new(0.0, 0.0),
            end: Point::new(100.0, 0.0),
        };
        assert_eq!(path.to_path_data(), "M 0 0 Q 80 0 100 0");
    }

    #[test]
    fn test_label_position_straight() {
        let path = FlowPath::polyline([
            Point::new(0.0, 100.0),
            Point::new(500.0, 900.0),
            Point::new(200.0, 100.0),
        ])
        .unwrap();

        // Middle points do not move the label.
        let label = path.label_position();
        assert_approx_eq!(f32, label.x(), 100.0);
        assert_approx_eq!(f32, label.y(), 90.0);
    }

    #[test]
    fn test_label_position_curved() {
        let path = FlowPath::Cubic {
            start: Point::new(100.0, 100.0),
            control1: Point::new(900.0, 900.0),
            control2: Point::new(900.0, 900.0),
            end: Point::new(300.0, 300.0),
        };

        let label = path.label_position();
        assert_approx_eq!(f32, label.x(), 220.0);
        assert_approx_eq!(f32, label.y(), 185.0);
    }

    #[test]
    fn test_data_flow_render() {
        let groups: Vec<String> = flow(FlowPath::straight(
            Point::new(0.0, 100.0),
            Point::new(200.0, 100.0),
        ))
        .render_to_layers()
        .render()
        .iter()
        .map(|node| node.to_string())
        .collect();

        assert_eq!(groups.len(), 3);

        assert!(groups[0].contains(r#"data-layer="arrow""#));
        assert!(groups[0].contains(r#"marker-end="url(#arrowhead)""#));
        assert!(groups[0].contains(r#"fill="none""#));

        // plate centered on (100, 90)
        assert!(groups[1].contains(r#"x="55""#));
        assert!(groups[1].contains(r#"y="80""#));
        assert!(groups[1].contains("url(#shadow-light)"));

        assert!(groups[2].contains(r#"y="94""#));
        assert!(groups[2].contains("Login Request"));
    }

    #[test]
    fn test_data_flow_bounds_include_plate() {
        let bounds = flow(FlowPath::straight(Point::new(0.0, 100.0), Point::new(20.0, 100.0))).bounds();

        assert_approx_eq!(f32, bounds.min_x(), -35.0);
        assert_approx_eq!(f32, bounds.max_x(), 55.0);
        assert_approx_eq!(f32, bounds.min_y(), 80.0);
        assert_approx_eq!(f32, bounds.max_y(), 100.0);
    }

    #[test]
    fn test_arrowhead_definition() {
        let markup = DataFlowDefinition::default().arrowhead_definition().to_string();
        assert!(markup.contains(r#"id="arrowhead""#));
        assert!(markup.contains(r#"points="0 0, 10 3, 0 6""#));
        assert!(markup.contains(r##"fill="#333333""##));
    }
}
