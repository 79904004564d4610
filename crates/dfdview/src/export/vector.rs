//! SVG encoder.

use log::debug;

use super::{EncodeError, EncodeOptions, Encoder, Surface};

/// Serializes the surface as a standalone SVG document.
///
/// The background is painted as a full-canvas rectangle behind the diagram.
/// Pixel ratio and quality have no meaning for vector output and are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgEncoder;

impl Encoder for SvgEncoder {
    fn encode(&self, target: &Surface, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
        let document = target.to_document(Some(options.background));
        let markup = document.to_string();
        debug!(bytes = markup.len(); "SVG document serialized");
        Ok(markup.into_bytes())
    }
}
