//! PNG encoder backed by resvg.

use std::sync::{Arc, OnceLock};

use log::debug;
use resvg::usvg;

use super::{EncodeError, EncodeOptions, Encoder, Surface};

/// Rasterizes the surface with resvg and encodes it as PNG.
///
/// The output is `canvas × pixel_ratio` pixels, filled with the background
/// color before the diagram is drawn. System fonts are loaded once, on the
/// first encode.
#[derive(Debug, Default)]
pub struct PngEncoder {
    fonts: OnceLock<Arc<usvg::fontdb::Database>>,
}

impl PngEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    fn fonts(&self) -> Arc<usvg::fontdb::Database> {
        let fonts = self.fonts.get_or_init(|| {
            let mut database = usvg::fontdb::Database::new();
            database.load_system_fonts();
            debug!(faces = database.len(); "System fonts loaded");
            Arc::new(database)
        });
        Arc::clone(fonts)
    }
}

impl Encoder for PngEncoder {
    fn encode(&self, target: &Surface, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
        let pixel_ratio = options.pixel_ratio.unwrap_or(1.0);

        let markup = target.to_document(Some(options.background)).to_string();
        let usvg_options = usvg::Options {
            fontdb: self.fonts(),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_data(markup.as_bytes(), &usvg_options)
            .map_err(|err| EncodeError::Svg(err.to_string()))?;

        let size = target.size().scale(pixel_ratio);
        let width = size.width().ceil() as u32;
        let height = size.height().ceil() as u32;
        let mut pixmap =
            tiny_skia::Pixmap::new(width, height).ok_or(EncodeError::Pixmap { width, height })?;

        let [r, g, b, a] = options.background.to_rgba8();
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(pixel_ratio, pixel_ratio),
            &mut pixmap.as_mut(),
        );
        debug!(width, height; "Diagram rasterized");

        pixmap
            .encode_png()
            .map_err(|err| EncodeError::Png(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use dfdview_core::{
        color::Color,
        geometry::{Point, Size, Transform},
        scene::SceneBuilder,
    };

    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn surface() -> Surface {
        let scene = SceneBuilder::new("Tiny", Size::new(40.0, 20.0))
            .flow([Point::new(2.0, 10.0), Point::new(38.0, 10.0)], "")
            .build();
        Surface::new(Arc::new(scene), Transform::identity())
    }

    fn options(pixel_ratio: Option<f32>) -> EncodeOptions {
        EncodeOptions {
            quality: 1.0,
            pixel_ratio,
            background: Color::new("#f8fafc").unwrap(),
        }
    }

    /// Width and height from the IHDR chunk.
    fn dimensions(png: &[u8]) -> (u32, u32) {
        let width = u32::from_be_bytes(png[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(png[20..24].try_into().unwrap());
        (width, height)
    }

    #[test]
    fn test_png_is_scaled_by_pixel_ratio() {
        let png = PngEncoder::new()
            .encode(&surface(), &options(Some(3.0)))
            .unwrap();

        assert_eq!(png[..8], PNG_SIGNATURE);
        assert_eq!(dimensions(&png), (120, 60));
    }

    #[test]
    fn test_png_without_pixel_ratio_uses_canvas_size() {
        let png = PngEncoder::new().encode(&surface(), &options(None)).unwrap();
        assert_eq!(dimensions(&png), (40, 20));
    }

    #[test]
    fn test_zero_pixel_ratio_fails() {
        let err = PngEncoder::new()
            .encode(&surface(), &options(Some(0.0)))
            .unwrap_err();
        assert!(matches!(err, EncodeError::Pixmap { width: 0, height: 0 }));
    }
}
