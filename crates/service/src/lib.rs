//! Service layer for slugfill
//!
//! Turns titles into candidate slugs, makes them unique against the live table
//! and drives the row-by-row backfill.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod generator;
mod resolver;
#[cfg(test)]
mod test_support;
mod updater;

pub use error::ServiceError;
pub use generator::CandidateGenerator;
pub use resolver::{Resolution, ResolutionOutcome, UniquenessResolver};
pub use updater::SlugUpdater;
