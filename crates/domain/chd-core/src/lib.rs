pub mod job;
pub mod path_utils;
pub mod profile;
pub mod progress;

pub use job::{ConversionJob, JobError, Subcommand};
pub use path_utils::DiscPath;
pub use profile::SystemProfile;
pub use progress::{ProgressExtractor, COMPLETE_PERCENT};
