use std::path::PathBuf;

use chd_core::SystemProfile;

#[derive(Debug, Clone)]
pub enum AppCommand {
    SelectSystem(SystemProfile),

    // Conversion
    ConvertSingle { input: PathBuf, output: PathBuf },
    ConvertFolder(PathBuf),
    ConvertDropped(Vec<PathBuf>),
}
