//! Commands a view script can issue.

use std::fmt;

/// Image format of an export command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Raster export
    Png,
    /// Vector export
    Svg,
}

impl ExportFormat {
    /// The file extension, which is also the script keyword.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One viewport or export event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    ZoomIn,
    ZoomOut,
    /// Pointer button pressed at `(x, y)`.
    Press { x: f32, y: f32 },
    /// Pointer moved to `(x, y)`.
    Move { x: f32, y: f32 },
    /// Pointer button released.
    Release,
    /// Pointer left the viewport.
    Leave,
    Export(ExportFormat),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomIn => write!(f, "zoom in"),
            Self::ZoomOut => write!(f, "zoom out"),
            Self::Press { x, y } => write!(f, "press {x} {y}"),
            Self::Move { x, y } => write!(f, "move {x} {y}"),
            Self::Release => write!(f, "release"),
            Self::Leave => write!(f, "leave"),
            Self::Export(format) => write!(f, "export {format}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display_matches_script_syntax() {
        assert_eq!(Command::ZoomOut.to_string(), "zoom out");
        assert_eq!(Command::Press { x: 10.0, y: -2.5 }.to_string(), "press 10 -2.5");
        assert_eq!(Command::Export(ExportFormat::Svg).to_string(), "export svg");
    }
}
