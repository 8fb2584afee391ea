use crate::error::InterestError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How many times per year interest is added to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CompoundingFrequency {
    Annually,
    SemiAnnually,
    Quarterly,
    #[default]
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Annually,
        CompoundingFrequency::SemiAnnually,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    /// Number of compounding periods per year (`n` in the formula).
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "Annually",
            CompoundingFrequency::SemiAnnually => "Semi-Annually",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Daily => "Daily",
        }
    }
}

impl TryFrom<u32> for CompoundingFrequency {
    type Error = InterestError;

    fn try_from(periods: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|frequency| frequency.periods_per_year() == periods)
            .ok_or_else(|| InterestError::UnsupportedFrequency(periods.to_string()))
    }
}

impl FromStr for CompoundingFrequency {
    type Err = InterestError;

    /// Accepts either the label (`semi-annually`) or the period count (`2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(periods) = s.parse::<u32>() {
            return Self::try_from(periods);
        }
        Self::ALL
            .into_iter()
            .find(|frequency| frequency.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| InterestError::UnsupportedFrequency(s.to_string()))
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for CompoundingFrequency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.periods_per_year())
    }
}
