use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::path_utils::DiscPath;
use crate::profile::SystemProfile;

/// Mode selector passed as the converter's first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcommand {
    CreateCd,
    CreateDvd,
}

impl Subcommand {
    pub fn as_arg(self) -> &'static str {
        match self {
            Subcommand::CreateCd => "createcd",
            Subcommand::CreateDvd => "createdvd",
        }
    }

    /// DVD mode only for ISOs of a DVD-capable system; everything else is a CD.
    pub fn select(system: SystemProfile, input: &Path) -> Subcommand {
        if system.supports_dvd() && DiscPath::has_any_extension(input, &[".iso"]) {
            Subcommand::CreateDvd
        } else {
            Subcommand::CreateCd
        }
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JobError {
    #[error("output path is the same as the input: {0}")]
    SamePath(PathBuf),
}

/// One input file bound to its output path and converter mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    input_path: PathBuf,
    output_path: PathBuf,
    subcommand: Subcommand,
    system: SystemProfile,
}

impl ConversionJob {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        system: SystemProfile,
    ) -> Result<Self, JobError> {
        let input_path = input_path.into();
        let output_path = output_path.into();
        if input_path == output_path {
            return Err(JobError::SamePath(input_path));
        }
        let subcommand = Subcommand::select(system, &input_path);
        Ok(Self {
            input_path,
            output_path,
            subcommand,
            system,
        })
    }

    /// Output written next to the input with the container extension.
    pub fn beside_source(
        input_path: impl Into<PathBuf>,
        system: SystemProfile,
    ) -> Result<Self, JobError> {
        let input_path = input_path.into();
        let output_path = DiscPath::container_path(&input_path);
        Self::new(input_path, output_path, system)
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn subcommand(&self) -> Subcommand {
        self.subcommand
    }

    pub fn system(&self) -> SystemProfile {
        self.system
    }

    pub fn display_name(&self) -> String {
        DiscPath::display_name(&self.input_path)
    }

    /// `[subcommand, -i, input, -o, output]`
    pub fn args(&self) -> Vec<OsString> {
        vec![
            OsString::from(self.subcommand.as_arg()),
            OsString::from("-i"),
            self.input_path.clone().into_os_string(),
            OsString::from("-o"),
            self.output_path.clone().into_os_string(),
        ]
    }
}
