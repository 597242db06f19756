//! Run configuration

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Suffix of message files picked up by discovery
pub const EML_SUFFIX: &str = ".eml";

/// Name of the workbook written next to the input files
pub const OUTPUT_FILE_NAME: &str = "Informacije Polaznika.xlsx";

/// Name of the single worksheet in the workbook
pub const SHEET_NAME: &str = "Informacije Polaznika";

/// Where to look for messages and where to put the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned for message files; the workbook is written here too
    pub input_dir: PathBuf,

    /// File name suffix to match (case-sensitive)
    pub suffix: String,

    /// File name of the output workbook
    pub output_file_name: String,

    /// Worksheet name
    pub sheet_name: String,
}

impl Config {
    /// Default settings for the given directory
    #[must_use]
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            suffix: EML_SUFFIX.to_string(),
            output_file_name: OUTPUT_FILE_NAME.to_string(),
            sheet_name: SHEET_NAME.to_string(),
        }
    }

    /// Default settings for the process working directory
    pub fn from_current_dir() -> Result<Self> {
        let dir = std::env::current_dir().map_err(Error::WorkingDir)?;
        Ok(Self::new(dir))
    }

    #[must_use]
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Full path of the workbook this run writes
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.input_dir.join(&self.output_file_name)
    }
}
