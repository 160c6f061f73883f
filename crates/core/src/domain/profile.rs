use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::answer::{
    Answer, BonusInterest, BudgetRange, Commitment, Experience, PrimaryGoal, Priority, Timeline,
    VarietyPreference, WorkoutFrequency,
};
use crate::domain::question::ProfileField;

/// Field-named view of a session's answers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile {
    fields: BTreeMap<ProfileField, String>,
}

impl UserProfile {
    /// Later answers for the same question replace earlier ones. Answers for
    /// questions outside the table are dropped.
    pub fn from_answers<'a, I>(answers: I) -> Self
    where
        I: IntoIterator<Item = &'a Answer>,
    {
        let mut profile = Self::default();
        for answer in answers {
            if let Some(field) = ProfileField::for_question(answer.question) {
                profile.set(field, answer.value.clone());
            }
        }
        profile
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn with(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> {
        self.fields.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn experience(&self) -> Option<Experience> {
        self.get(ProfileField::Experience).map(Experience::from)
    }

    pub fn primary_goal(&self) -> Option<PrimaryGoal> {
        self.get(ProfileField::PrimaryGoal).map(PrimaryGoal::from)
    }

    pub fn workout_frequency(&self) -> Option<WorkoutFrequency> {
        self.get(ProfileField::WorkoutFreq).map(WorkoutFrequency::from)
    }

    pub fn variety_preference(&self) -> Option<VarietyPreference> {
        self.get(ProfileField::VarietyPreference).map(VarietyPreference::from)
    }

    pub fn priority(&self) -> Option<Priority> {
        self.get(ProfileField::Priority).map(Priority::from)
    }

    pub fn timeline(&self) -> Option<Timeline> {
        self.get(ProfileField::Timeline).map(Timeline::from)
    }

    pub fn budget(&self) -> Option<BudgetRange> {
        self.get(ProfileField::Budget).map(BudgetRange::from)
    }

    pub fn commitment(&self) -> Option<Commitment> {
        self.get(ProfileField::Commitment).map(Commitment::from)
    }

    pub fn bonus(&self) -> Option<BonusInterest> {
        self.get(ProfileField::Bonus).map(BonusInterest::from)
    }
}
