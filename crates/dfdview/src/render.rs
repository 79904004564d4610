//! SVG document rendering for the scene.

use svg::{Document, node::element as svg_element};

use dfdview_core::{color::Color, geometry::Transform, scene::Scene};

/// Renders `scene` seen through `transform` into a complete SVG document.
///
/// The document keeps the canvas as its view box. Definitions and the
/// optional background are not transformed; all drawn content sits in one
/// group carrying the view transform.
pub fn render_document(scene: &Scene, transform: Transform, background: Option<Color>) -> Document {
    let canvas = scene.canvas();
    let doc = Document::new()
        .set(
            "viewBox",
            format!("0 0 {} {}", canvas.width(), canvas.height()),
        )
        .set("width", canvas.width())
        .set("height", canvas.height());

    let doc = match background {
        Some(color) => doc.add(background_rect(canvas.width(), canvas.height(), color)),
        None => doc,
    };

    let defs = scene
        .definitions()
        .into_iter()
        .fold(svg_element::Definitions::new(), |defs, node| defs.add(node));

    let content = scene.render_to_layers().render().into_iter().fold(
        svg_element::Group::new().set("transform", transform.to_svg_value()),
        |group, node| group.add(node),
    );

    doc.add(defs).add(content)
}

fn background_rect(width: f32, height: f32, color: Color) -> svg_element::Rectangle {
    let rect = svg_element::Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", color.to_svg_value());

    if color.alpha() < 1.0 {
        rect.set("fill-opacity", color.alpha())
    } else {
        rect
    }
}
