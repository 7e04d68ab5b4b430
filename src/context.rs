//! Configuration context
//!
//! Holds the process-level settings that stream lists are built under.
//! Passing it explicitly lets independent lists (and tests) coexist without
//! any global state.

use crate::registry::{ConfigError, Result};

/// Longest accepted program name, in bytes, exclusive
pub const MAX_PROGRAM_NAME_LEN: usize = 4096;

/// Settings shared by every stream list of one configuration load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigContext {
    program_name: String,
}

impl Default for ConfigContext {
    fn default() -> Self {
        Self {
            program_name: env!("CARGO_PKG_NAME").to_owned(),
        }
    }
}

impl ConfigContext {
    /// Create a context with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the program name, builder style
    pub fn with_program_name(mut self, name: &str) -> Result<Self> {
        self.set_program_name(Some(name))?;
        Ok(self)
    }

    /// Name of the program loading the configuration
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Set the name of the program loading the configuration
    pub fn set_program_name(&mut self, name: Option<&str>) -> Result<()> {
        match name {
            None | Some("") => Err(ConfigError::EmptyValue {
                field: "program name",
            }),
            Some(s) if s.len() >= MAX_PROGRAM_NAME_LEN => Err(ConfigError::TooLong {
                field: "program name",
            }),
            Some(s) => {
                self.program_name = s.to_owned();
                Ok(())
            }
        }
    }
}
