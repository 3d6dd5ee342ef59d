pub mod app;
pub mod app_core;
pub mod batch;
pub mod converter;
pub mod discovery;
pub mod domain;
pub mod orchestrator;
pub mod pipeline;
pub mod ports;
pub mod viewmodel;

pub use app::ChdApplication;
pub use app_core::*;
pub use batch::{run_batch, BatchItem, BatchKind, BatchRequest, BatchSummary};
pub use converter::ChdmanConverter;
pub use domain::{Alert, AlertLevel, AppState};
pub use pipeline::{ConversionRunEvent, ConversionRunId, ConversionState};
pub use ports::*;
pub use viewmodel::*;
