//! Domain layer: the compounding frequency set and the interest formula.

pub mod calculation;
pub mod frequency;
