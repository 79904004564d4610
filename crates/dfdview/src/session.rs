//! An interactive viewing session over one scene.

use std::{path::PathBuf, sync::Arc};

use log::{debug, info, trace};

use dfdview_core::{scene::Scene, viewport::ViewportController};
use dfdview_parser::{Command, ExportFormat};

use crate::{
    DfdViewError,
    export::{ExportHandle, ExportTrigger, Surface},
};

/// Outcome of the exports started during a session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Files that were written, each listed once even if a later export
    /// replaced it.
    pub written: Vec<PathBuf>,
    /// Filenames of exports that failed.
    pub failed: Vec<String>,
}

/// Owns the viewport controller of a scene and routes events to it.
///
/// Pointer and zoom events update the view synchronously. Export events
/// snapshot the current view and hand it to the [`ExportTrigger`]; the
/// session keeps the handles so that [`Session::finish`] can wait for them.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use dfdview::{
///     Session, diagram,
///     export::{DirectorySink, ExportSettings, ExportTrigger},
/// };
///
/// let exporter = ExportTrigger::new(ExportSettings::default(), Arc::new(DirectorySink::new("out")));
/// let mut session = Session::new(Arc::new(diagram::medicine_level2()), exporter);
///
/// session.run_script("press 100 100\nmove 150 120\nrelease\nexport svg\n")?;
/// let summary = session.finish();
/// assert_eq!(summary.written.len(), 1);
/// # Ok::<(), dfdview::DfdViewError>(())
/// ```
pub struct Session {
    scene: Arc<Scene>,
    controller: ViewportController,
    exporter: ExportTrigger,
    in_flight: Vec<ExportHandle>,
}

impl Session {
    /// Starts a session at the initial view.
    pub fn new(scene: Arc<Scene>, exporter: ExportTrigger) -> Self {
        Self {
            scene,
            controller: ViewportController::new(),
            exporter,
            in_flight: Vec::new(),
        }
    }

    pub fn scene(&self) -> &Arc<Scene> {
        &self.scene
    }

    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    /// Direct access to the controller, for callers that drive it with
    /// pointer events of their own.
    pub fn controller_mut(&mut self) -> &mut ViewportController {
        &mut self.controller
    }

    /// The scene as currently seen through the viewport.
    pub fn surface(&self) -> Surface {
        Surface::new(Arc::clone(&self.scene), self.controller.current_transform())
    }

    /// Applies one event.
    pub fn apply(&mut self, command: &Command) {
        trace!(command:%; "Applying command");
        match *command {
            Command::ZoomIn => self.controller.zoom_in(),
            Command::ZoomOut => self.controller.zoom_out(),
            Command::Press { x, y } => self.controller.begin_drag(x, y),
            Command::Move { x, y } => self.controller.update_drag(x, y),
            Command::Release => self.controller.end_drag(),
            Command::Leave => self.controller.pointer_leave(),
            Command::Export(format) => self.export(format),
        }
    }

    /// Parses a view script and applies its commands in order.
    ///
    /// Nothing is applied when the script has errors.
    ///
    /// # Errors
    ///
    /// Returns [`DfdViewError::Parse`] with every malformed line of `source`.
    pub fn run_script(&mut self, source: &str) -> Result<usize, DfdViewError> {
        let commands = dfdview_parser::parse(source)
            .map_err(|err| DfdViewError::new_parse_error(err, source))?;

        for command in &commands {
            self.apply(command.inner());
        }

        debug!(
            commands = commands.len(),
            zoom_percent = self.controller.zoom_percent();
            "View script applied"
        );
        Ok(commands.len())
    }

    /// Starts an export of the current view under its fixed filename.
    pub fn export(&mut self, format: ExportFormat) {
        let handle = self.exporter.export(format, self.surface());
        self.in_flight.push(handle);
    }

    /// Number of exports started and not yet waited for.
    pub fn pending_exports(&self) -> usize {
        self.in_flight.len()
    }

    /// Encodes the current view on the calling thread.
    ///
    /// # Errors
    ///
    /// Returns [`DfdViewError::Render`] if encoding fails.
    pub fn snapshot(&self, format: ExportFormat) -> Result<Vec<u8>, DfdViewError> {
        Ok(self.exporter.encode(format, &self.surface())?)
    }

    /// Waits for every export started during the session.
    ///
    /// Exports are delivered in the order they were started, so a file that
    /// was exported more than once holds the latest view.
    pub fn finish(self) -> ExportSummary {
        let mut summary = ExportSummary::default();
        for handle in self.in_flight {
            let filename = handle.filename().to_string();
            match handle.wait() {
                Some(path) if summary.written.contains(&path) => {}
                Some(path) => summary.written.push(path),
                None => summary.failed.push(filename),
            }
        }

        let state = self.controller.state();
        info!(
            zoom_percent = self.controller.zoom_percent(),
            pan_x = state.pan().x(),
            pan_y = state.pan().y(),
            written = summary.written.len(),
            failed = summary.failed.len();
            "Session finished"
        );
        summary
    }
}
