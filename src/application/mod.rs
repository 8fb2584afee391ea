//! Application layer sitting between the raw form input and the domain.
//!
//! `engine` turns raw text into a validated calculation, `session` holds the
//! form state that the presentation layer renders.

pub mod engine;
pub mod session;
