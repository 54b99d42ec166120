//! Linear campaign pacing: validate four entered numbers (budget, duration,
//! days elapsed, amount spent) and derive expected spend, variance,
//! recommended daily spend and a pacing status.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod interfaces;
pub mod logger;

pub use application::controller::PacingController;
pub use application::engine::PacingEngine;
pub use domain::campaign::{CampaignEntries, CampaignInputs, Field, RawEntries};
pub use domain::options::DisplayOptions;
pub use domain::pacing::{BandPolicy, PacingDirection, PacingResult, PacingStatus, Severity};
pub use domain::validation::{ValidationErrors, validate};
pub use error::{PacingError, Result};
