pub mod diagnostics;
pub mod locate;
pub mod runner;

// Re-exports for convenience
pub use diagnostics::DiagnosticLog;
pub use locate::{program_dir, resolve_tool, ToolLocator};
pub use runner::{ChdmanRunner, RunError, RunObserver, RunOutcome};
