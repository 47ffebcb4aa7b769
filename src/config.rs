//! Generator configuration file handling.
//!
//! Settings can be saved to and loaded from JSON. Missing fields fall back to
//! their defaults, so `{}` is a valid file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{PassgenError, Result};
use crate::generator::DEFAULT_MAX_ATTEMPTS;
use crate::types::StrengthTier;

/// Default password length.
pub const DEFAULT_LENGTH: usize = 12;

/// Generator settings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of characters to generate
    pub length: usize,
    /// Tier selecting the enabled character classes
    pub strength: StrengthTier,
    /// Cap on full redraws after denylist collisions
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            strength: StrengthTier::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// The weak tier passes validation on purpose: its failure belongs to the
    /// alphabet builder, which reports it as a configuration error.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(PassgenError::invalid_length(
                "password length must be at least 1",
            ));
        }
        if self.max_attempts == 0 {
            return Err(PassgenError::configuration("max_attempts must be at least 1"));
        }
        Ok(())
    }

    /// Overlay values given explicitly on the command line.
    pub fn merge(
        mut self,
        length: Option<usize>,
        strength: Option<StrengthTier>,
        max_attempts: Option<usize>,
    ) -> Self {
        if let Some(length) = length {
            self.length = length;
        }
        if let Some(strength) = strength {
            self.strength = strength;
        }
        if let Some(max_attempts) = max_attempts {
            self.max_attempts = max_attempts;
        }
        self
    }
}
