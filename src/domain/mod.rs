//! Domain types for campaign pacing.
//!
//! Entries move through three stages: raw text ([`campaign::RawEntries`]),
//! parsed values ([`campaign::CampaignEntries`]) and validated inputs
//! ([`campaign::CampaignInputs`]). Only the last stage can produce a
//! [`pacing::PacingResult`].

pub mod campaign;
pub mod options;
pub mod pacing;
pub mod validation;
