use std::fmt;

use serde::{Deserialize, Serialize};

pub const TOTAL_QUESTIONS: u8 = 12;

/// Profile field captured by each question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Experience,
    PrimaryGoal,
    Challenge,
    WorkoutFreq,
    Timing,
    VarietyPreference,
    Priority,
    Timeline,
    CurrentSupps,
    Budget,
    Commitment,
    Bonus,
}

/// Question `n` captures `QUESTIONS[n - 1]`.
pub const QUESTIONS: [ProfileField; TOTAL_QUESTIONS as usize] = [
    ProfileField::Experience,
    ProfileField::PrimaryGoal,
    ProfileField::Challenge,
    ProfileField::WorkoutFreq,
    ProfileField::Timing,
    ProfileField::VarietyPreference,
    ProfileField::Priority,
    ProfileField::Timeline,
    ProfileField::CurrentSupps,
    ProfileField::Budget,
    ProfileField::Commitment,
    ProfileField::Bonus,
];

impl ProfileField {
    pub fn for_question(question: u8) -> Option<Self> {
        let slot = usize::from(question).checked_sub(1)?;
        QUESTIONS.get(slot).copied()
    }

    pub fn question(self) -> u8 {
        let slot = QUESTIONS.iter().position(|field| *field == self).unwrap_or_default();
        slot as u8 + 1
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::PrimaryGoal => "primaryGoal",
            Self::Challenge => "challenge",
            Self::WorkoutFreq => "workoutFreq",
            Self::Timing => "timing",
            Self::VarietyPreference => "varietyPreference",
            Self::Priority => "priority",
            Self::Timeline => "timeline",
            Self::CurrentSupps => "currentSupps",
            Self::Budget => "budget",
            Self::Commitment => "commitment",
            Self::Bonus => "bonus",
        }
    }

    /// Fields recorded for the profile but never read by scoring.
    pub fn is_scored(self) -> bool {
        !matches!(self, Self::Challenge | Self::Timing | Self::CurrentSupps)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        QUESTIONS.iter().copied().find(|field| field.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub fn is_valid_question(question: u8) -> bool {
    (1..=TOTAL_QUESTIONS).contains(&question)
}
