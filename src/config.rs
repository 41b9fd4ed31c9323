//! School configuration, read from TOML.
//!
//! ```toml
//! subject = "Physics"
//! duties = ["yoga", "teaching"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::duty::DutyKind;
use crate::error::{Result, SchoolError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchoolConfig {
    /// Subject used by the single-responsibility walkthrough.
    pub subject: String,
    /// Duties the teacher works through, in order.
    pub duties: Vec<DutyKind>,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            subject: "Mathematics".to_string(),
            duties: DutyKind::ALL.to_vec(),
        }
    }
}

impl SchoolConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = Self::parse_toml(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses without validating, for callers that still adjust the plan.
    pub fn parse_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a file without validating it.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading school config");
        let source = fs::read_to_string(path).map_err(|source| SchoolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml(&source)
    }

    /// Replaces the duty plan when `duties` is not empty.
    pub fn override_duties(&mut self, duties: Vec<DutyKind>) {
        if !duties.is_empty() {
            self.duties = duties;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.duties.is_empty() {
            return Err(SchoolError::EmptyPlan);
        }
        Ok(())
    }
}
