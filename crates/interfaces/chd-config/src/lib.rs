//! Central configuration constants for the converter front-end.

/// Base name of the external converter binary.
pub const TOOL_NAME: &str = "chdman";

/// File name of the append-only diagnostic log written beside the program.
pub const DIAGNOSTIC_LOG_NAME: &str = "chd_output.log";

/// Extension (with dot) given to every produced container.
pub const CONTAINER_EXTENSION: &str = ".chd";

/// Bytes requested from the child's output pipes per read.
pub const READ_CHUNK_BYTES: usize = 64;

/// Once the rolling progress buffer grows past this many characters it is truncated.
pub const PROGRESS_BUFFER_LIMIT: usize = 128;

/// Characters kept from the end of the progress buffer after truncation.
pub const PROGRESS_BUFFER_RETAIN: usize = 16;

/// Characters of recent tool output mirrored to the UI.
pub const OUTPUT_TAIL_CHARS: usize = 80;

/// Extensions accepted from drag-and-drop, regardless of the selected system.
pub const DROP_EXTENSIONS: &[&str] = &[".cue", ".gdi", ".iso", ".cdi"];

/// Extensions used when a system name cannot be resolved.
pub const FALLBACK_EXTENSIONS: &[&str] = &[".cue", ".gdi", ".iso"];

/// Platform-specific file name of the converter binary.
pub fn tool_file_name() -> String {
    if cfg!(target_os = "windows") {
        format!("{TOOL_NAME}.exe")
    } else {
        TOOL_NAME.to_string()
    }
}
