//! Drop-shadow filters shared by diagram elements.

use svg::node::element as svg_element;

use crate::draw::SvgNode;

/// A drop shadow an element may reference through its `filter` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shadow {
    /// Under entities and processes
    Regular,
    /// Under data flow label plates
    Light,
}

impl Shadow {
    /// Every shadow variant, in definition order.
    pub const ALL: [Shadow; 2] = [Shadow::Regular, Shadow::Light];

    /// The SVG id of this filter.
    pub fn id(self) -> &'static str {
        match self {
            Self::Regular => "shadow",
            Self::Light => "shadow-light",
        }
    }

    /// The `filter` attribute value referencing this shadow.
    pub fn url(self) -> String {
        format!("url(#{})", self.id())
    }

    /// Builds the `<filter>` definition for this shadow.
    pub fn definition(self) -> SvgNode {
        let (offset, deviation, opacity) = match self {
            Self::Regular => (2, 3, 0.2),
            Self::Light => (1, 1, 0.1),
        };

        let drop_shadow = svg_element::FilterEffectDropShadow::new()
            .set("dx", offset)
            .set("dy", offset)
            .set("stdDeviation", deviation)
            .set("flood-color", "#000000")
            .set("flood-opacity", opacity);

        Box::new(
            svg_element::Filter::new()
                .set("id", self.id())
                .set("x", "-20%")
                .set("y", "-20%")
                .set("width", "140%")
                .set("height", "140%")
                .add(drop_shadow),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_ids_and_urls() {
        assert_eq!(Shadow::Regular.id(), "shadow");
        assert_eq!(Shadow::Light.url(), "url(#shadow-light)");
    }

    #[test]
    fn test_shadow_definition() {
        let markup = Shadow::Regular.definition().to_string();
        assert!(markup.contains(r#"id="shadow""#));
        assert!(markup.contains("feDropShadow"));
        assert!(markup.contains(r#"stdDeviation="3""#));
    }
}
