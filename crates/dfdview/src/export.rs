//! Export of the current view to PNG and SVG images.
//!
//! Exporting is split into two capabilities:
//!
//! - an [`Encoder`] turns a [`Surface`] (the scene with the view transform
//!   applied) into an encoded image payload;
//! - a [`DownloadSink`] stores the payload under a filename.
//!
//! [`ExportTrigger`] wires them together. Exports are queued to a single
//! worker thread and an [`ExportHandle`] is returned immediately, so the
//! caller keeps handling pointer events while the image is encoded. The
//! worker delivers exports in submission order.
//!
//! # Error Handling
//!
//! Export failures never reach the caller. An encoder or sink error is logged
//! at `error` level with the filename, no file is produced, and the handle
//! reports the failure by returning `None` from [`ExportHandle::wait`].

mod raster;
mod sink;
mod vector;

pub use raster::PngEncoder;
pub use sink::{DirectorySink, DownloadSink};
pub use vector::SvgEncoder;

use std::{
    path::PathBuf,
    sync::{Arc, mpsc},
    thread,
};

use log::{debug, error, info};
use thiserror::Error;

use dfdview_core::{
    color::Color,
    geometry::{Size, Transform},
    scene::Scene,
};
use dfdview_parser::ExportFormat;

use crate::{
    DfdViewError,
    config::{AppConfig, DEFAULT_BACKGROUND},
    render,
};

/// Filename of raster exports.
pub const RASTER_FILENAME: &str = "dfd-level2-diagram.png";

/// Filename of vector exports.
pub const VECTOR_FILENAME: &str = "dfd-level2-diagram.svg";

/// Returns the fixed filename for `format`.
pub fn filename_for(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Png => RASTER_FILENAME,
        ExportFormat::Svg => VECTOR_FILENAME,
    }
}

/// The visual to export: a shared scene seen through a view transform.
#[derive(Debug, Clone)]
pub struct Surface {
    scene: Arc<Scene>,
    transform: Transform,
}

impl Surface {
    pub fn new(scene: Arc<Scene>, transform: Transform) -> Self {
        Self { scene, transform }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Size of the exported image in canvas units.
    pub fn size(&self) -> Size {
        self.scene.canvas()
    }

    /// Renders the surface as an SVG document over an optional background.
    pub fn to_document(&self, background: Option<Color>) -> svg::Document {
        render::render_document(&self.scene, self.transform, background)
    }
}

/// Parameters handed to an [`Encoder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodeOptions {
    /// Quality in `0.0..=1.0`, meaningful only for lossy formats.
    pub quality: f32,
    /// Device pixels per canvas unit; `None` for resolution-independent output.
    pub pixel_ratio: Option<f32>,
    /// Color painted behind the diagram.
    pub background: Color,
}

/// Errors produced while encoding a [`Surface`].
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to load rendered SVG: {0}")]
    Svg(String),

    #[error("cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Png(String),
}

/// Capability that encodes a surface into an image payload.
///
/// Implementations are shared with worker threads, hence `Send + Sync`.
pub trait Encoder: Send + Sync {
    /// Encodes `target` into the bytes of an image file.
    ///
    /// # Errors
    ///
    /// Returns an [`EncodeError`] when the surface cannot be rendered or the
    /// image cannot be encoded.
    fn encode(&self, target: &Surface, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError>;
}

/// Encoder settings shared by every export of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportSettings {
    quality: f32,
    pixel_ratio: f32,
    background: Color,
}

impl ExportSettings {
    pub fn new(quality: f32, pixel_ratio: f32, background: Color) -> Self {
        Self {
            quality,
            pixel_ratio,
            background,
        }
    }

    /// Reads the export and style sections of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DfdViewError::Config`] for an unparsable background color or
    /// out-of-range export values.
    pub fn from_config(config: &AppConfig) -> Result<Self, DfdViewError> {
        let export = config.export();
        export.validate().map_err(DfdViewError::Config)?;

        let background = config
            .style()
            .background_color()
            .map_err(DfdViewError::Config)?
            .unwrap_or(Self::default().background);

        Ok(Self::new(export.quality(), export.pixel_ratio(), background))
    }

    pub fn quality(&self) -> f32 {
        self.quality
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    pub fn background(&self) -> Color {
        self.background
    }

    fn raster_options(&self) -> EncodeOptions {
        EncodeOptions {
            quality: self.quality,
            pixel_ratio: Some(self.pixel_ratio),
            background: self.background,
        }
    }

    fn vector_options(&self) -> EncodeOptions {
        EncodeOptions {
            quality: self.quality,
            pixel_ratio: None,
            background: self.background,
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self::new(
            1.0,
            3.0,
            Color::new(DEFAULT_BACKGROUND).expect("Invalid default background color"),
        )
    }
}

/// A queued or running export.
#[derive(Debug)]
pub struct ExportHandle {
    filename: String,
    result: Option<mpsc::Receiver<Option<PathBuf>>>,
}

impl ExportHandle {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Blocks until the export finishes.
    ///
    /// Returns the path of the written file, or `None` if the export failed.
    pub fn wait(self) -> Option<PathBuf> {
        let Self { filename, result } = self;
        match result?.recv() {
            Ok(path) => path,
            Err(_) => {
                error!(filename; "Export worker stopped before the export finished");
                None
            }
        }
    }
}

/// One export waiting for the worker.
struct ExportJob {
    encoder: Arc<dyn Encoder>,
    target: Surface,
    options: EncodeOptions,
    filename: String,
    reply: mpsc::Sender<Option<PathBuf>>,
}

/// Starts exports of a surface on a background worker.
///
/// All exports of a trigger share one worker thread and are delivered in the
/// order they were requested, so a later export of a filename always replaces
/// an earlier one.
pub struct ExportTrigger {
    settings: ExportSettings,
    raster_encoder: Arc<dyn Encoder>,
    vector_encoder: Arc<dyn Encoder>,
    queue: Option<mpsc::Sender<ExportJob>>,
}

impl ExportTrigger {
    /// Creates a trigger with the built-in [`PngEncoder`] and [`SvgEncoder`].
    pub fn new(settings: ExportSettings, sink: Arc<dyn DownloadSink>) -> Self {
        let (queue, jobs) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("dfdview-export".to_string())
            .spawn(move || run_worker(sink.as_ref(), jobs));

        let queue = match worker {
            Ok(_) => Some(queue),
            Err(err) => {
                error!(err:err; "Failed to start export worker");
                None
            }
        };

        Self {
            settings,
            raster_encoder: Arc::new(PngEncoder::new()),
            vector_encoder: Arc::new(SvgEncoder),
            queue,
        }
    }

    /// Creates a trigger with settings read from `config`.
    ///
    /// # Errors
    ///
    /// See [`ExportSettings::from_config`].
    pub fn from_config(
        config: &AppConfig,
        sink: Arc<dyn DownloadSink>,
    ) -> Result<Self, DfdViewError> {
        Ok(Self::new(ExportSettings::from_config(config)?, sink))
    }

    /// Replaces the encoder used by [`Self::export_as_raster`].
    pub fn with_raster_encoder(mut self, encoder: Arc<dyn Encoder>) -> Self {
        self.raster_encoder = encoder;
        self
    }

    /// Replaces the encoder used by [`Self::export_as_vector`].
    pub fn with_vector_encoder(mut self, encoder: Arc<dyn Encoder>) -> Self {
        self.vector_encoder = encoder;
        self
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Exports `target` as a PNG at the configured pixel ratio.
    pub fn export_as_raster(&self, target: Surface, filename: &str) -> ExportHandle {
        self.enqueue(
            Arc::clone(&self.raster_encoder),
            target,
            self.settings.raster_options(),
            filename,
        )
    }

    /// Exports `target` as an SVG.
    pub fn export_as_vector(&self, target: Surface, filename: &str) -> ExportHandle {
        self.enqueue(
            Arc::clone(&self.vector_encoder),
            target,
            self.settings.vector_options(),
            filename,
        )
    }

    /// Exports `target` in `format` under its fixed filename.
    pub fn export(&self, format: ExportFormat, target: Surface) -> ExportHandle {
        let filename = filename_for(format);
        match format {
            ExportFormat::Png => self.export_as_raster(target, filename),
            ExportFormat::Svg => self.export_as_vector(target, filename),
        }
    }

    /// Encodes `target` in `format` on the calling thread, without delivering it.
    ///
    /// # Errors
    ///
    /// Returns the encoder's [`EncodeError`].
    pub fn encode(&self, format: ExportFormat, target: &Surface) -> Result<Vec<u8>, EncodeError> {
        match format {
            ExportFormat::Png => self
                .raster_encoder
                .encode(target, &self.settings.raster_options()),
            ExportFormat::Svg => self
                .vector_encoder
                .encode(target, &self.settings.vector_options()),
        }
    }

    fn enqueue(
        &self,
        encoder: Arc<dyn Encoder>,
        target: Surface,
        options: EncodeOptions,
        filename: &str,
    ) -> ExportHandle {
        info!(filename, pixel_ratio:? = options.pixel_ratio; "Queueing export");

        let (reply, result) = mpsc::channel();
        let job = ExportJob {
            encoder,
            target,
            options,
            filename: filename.to_string(),
            reply,
        };

        let queued = self
            .queue
            .as_ref()
            .is_some_and(|queue| queue.send(job).is_ok());
        if !queued {
            error!(filename; "Export worker is not running");
        }

        ExportHandle {
            filename: filename.to_string(),
            result: queued.then_some(result),
        }
    }
}

/// Runs queued exports one after another until the trigger is dropped.
fn run_worker(sink: &dyn DownloadSink, jobs: mpsc::Receiver<ExportJob>) {
    for job in jobs {
        let path = run_export(
            job.encoder.as_ref(),
            sink,
            &job.target,
            &job.options,
            &job.filename,
        );
        // The handle may have been dropped without waiting.
        let _ = job.reply.send(path);
    }
    debug!("Export worker stopped");
}

/// Encodes and delivers one export. Failures are logged and turned into `None`.
fn run_export(
    encoder: &dyn Encoder,
    sink: &dyn DownloadSink,
    target: &Surface,
    options: &EncodeOptions,
    filename: &str,
) -> Option<PathBuf> {
    let bytes = match encoder.encode(target, options) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(filename, err:err; "Failed to encode diagram");
            return None;
        }
    };
    debug!(filename, bytes = bytes.len(); "Diagram encoded");

    match sink.deliver(filename, &bytes) {
        Ok(path) => {
            info!(filename, path = path.display().to_string(); "Diagram exported");
            Some(path)
        }
        Err(err) => {
            error!(filename, err:err; "Failed to save exported diagram");
            None
        }
    }
}
