//! passgen library
//!
//! Random password generation from configurable character classes, a fixed
//! denylist filter, and a coarse strength rating.

pub mod alphabet;
pub mod cli;
pub mod config;
pub mod denylist;
pub mod error;
pub mod generator;
pub mod logging;
pub mod report;
pub mod runner;
pub mod strength;
pub mod types;

// Re-export main types for convenience
pub use alphabet::{Alphabet, CharClasses};
pub use config::GeneratorConfig;
pub use denylist::{DenylistChecker, StaticDenylist, COMMON_PASSWORDS};
pub use error::{PassgenError, Result};
pub use generator::{Password, PasswordGenerator, DEFAULT_MAX_ATTEMPTS};
pub use report::Report;
pub use strength::evaluate;
pub use types::{CharClass, StrengthRating, StrengthTier};
