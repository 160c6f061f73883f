//! Answer records and the closed value sets of the scored questions.
//!
//! Values arrive as the raw strings attached to each option. Anything outside a
//! field's known set parses to `Unrecognized`, which scores zero and never
//! satisfies a branch condition.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question: u8,
    pub value: String,
}

impl Answer {
    pub fn new(question: u8, value: impl Into<String>) -> Self {
        Self { question, value: value.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    New,
    /// Wire value `some`.
    Familiar,
    Experienced,
    Unrecognized,
}

impl From<&str> for Experience {
    fn from(value: &str) -> Self {
        match value {
            "new" => Self::New,
            "some" => Self::Familiar,
            "experienced" => Self::Experienced,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    General,
    Focus,
    Endurance,
    Muscle,
    Strength,
    Unrecognized,
}

impl From<&str> for PrimaryGoal {
    fn from(value: &str) -> Self {
        match value {
            "general" => Self::General,
            "focus" => Self::Focus,
            "endurance" => Self::Endurance,
            "muscle" => Self::Muscle,
            "strength" => Self::Strength,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutFrequency {
    /// `1-2days`
    OneToTwoDays,
    /// `3-4days`
    ThreeToFourDays,
    /// `5-6days`
    FiveToSixDays,
    Daily,
    Unrecognized,
}

impl From<&str> for WorkoutFrequency {
    fn from(value: &str) -> Self {
        match value {
            "1-2days" => Self::OneToTwoDays,
            "3-4days" => Self::ThreeToFourDays,
            "5-6days" => Self::FiveToSixDays,
            "daily" => Self::Daily,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Commitment {
    Trial,
    Committed,
    Transformation,
    Unrecognized,
}

impl From<&str> for Commitment {
    fn from(value: &str) -> Self {
        match value {
            "trial" => Self::Trial,
            "committed" => Self::Committed,
            "transformation" => Self::Transformation,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRange {
    Budget,
    Moderate,
    Premium,
    NoLimit,
    Unrecognized,
}

impl BudgetRange {
    pub fn is_premium(self) -> bool {
        matches!(self, Self::Premium | Self::NoLimit)
    }
}

impl From<&str> for BudgetRange {
    fn from(value: &str) -> Self {
        match value {
            "budget" => Self::Budget,
            "moderate" => Self::Moderate,
            "premium" => Self::Premium,
            "no_limit" => Self::NoLimit,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarietyPreference {
    Variety,
    Surprise,
    Rotation,
    Simple,
    Unrecognized,
}

impl From<&str> for VarietyPreference {
    fn from(value: &str) -> Self {
        match value {
            "variety" => Self::Variety,
            "surprise" => Self::Surprise,
            "rotation" => Self::Rotation,
            "simple" => Self::Simple,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Complete,
    Unrecognized,
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        match value {
            "complete" => Self::Complete,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    LongTerm,
    Unrecognized,
}

impl From<&str> for Timeline {
    fn from(value: &str) -> Self {
        match value {
            "longterm" => Self::LongTerm,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusInterest {
    FlavorDiscovery,
    Unrecognized,
}

impl From<&str> for BonusInterest {
    fn from(value: &str) -> Self {
        match value {
            "flavor_discovery" => Self::FlavorDiscovery,
            _ => Self::Unrecognized,
        }
    }
}
