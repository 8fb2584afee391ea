//! Compound interest calculator.
//!
//! The `application::engine::calculate` function validates raw form input and
//! applies `A = P(1 + r/n)^(nt)`. Everything under `interfaces` renders that
//! result for a terminal or for CSV batches.

pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;
