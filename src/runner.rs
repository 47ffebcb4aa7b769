//! End-to-end generation flow used by the binary.
//!
//! Tier -> selectors -> alphabet -> password -> rating. Errors from any stage
//! are returned unchanged; nothing here retries.

use rand::Rng;
use tracing::info;

use crate::alphabet::{Alphabet, CharClasses};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::generator::PasswordGenerator;
use crate::report::Report;
use crate::strength::evaluate;

/// Run the flow with the thread-local random source.
pub fn run(config: &GeneratorConfig) -> Result<Report> {
    run_with(config, &mut rand::thread_rng())
}

/// Run the flow with the supplied random source.
pub fn run_with<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<Report> {
    let classes = CharClasses::from(config.strength);
    info!(tier = %config.strength, classes = ?classes.enabled(), "Deriving alphabet");

    let alphabet = Alphabet::build(classes)?;
    let generator = PasswordGenerator::new().max_attempts(config.max_attempts);
    let password = generator.generate_with(&alphabet, config.length, rng)?;
    let rating = evaluate(password.as_str());

    info!(length = password.len(), %rating, "Generated password");
    Ok(Report::new(password, rating))
}
