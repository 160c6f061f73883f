//! Weight tables for the recommendation score and the variety bonus.

use serde::{Deserialize, Serialize};

use crate::domain::answer::{
    BonusInterest, BudgetRange, Commitment, Experience, PrimaryGoal, Priority, Timeline,
    VarietyPreference, WorkoutFrequency,
};
use crate::domain::profile::UserProfile;

pub const MAX_SCORE: u32 = 98;
pub const MAX_VARIETY_BONUS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub variety_bonus: u32,
}

impl ScoreResult {
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self { score: compute_score(profile), variety_bonus: compute_variety_bonus(profile) }
    }
}

/// Activity + commitment + budget + experience + goal intensity. Absent fields add 0.
pub fn compute_score(profile: &UserProfile) -> u32 {
    profile.workout_frequency().map_or(0, activity_weight)
        + profile.commitment().map_or(0, commitment_weight)
        + profile.budget().map_or(0, budget_weight)
        + profile.experience().map_or(0, experience_weight)
        + profile.primary_goal().map_or(0, goal_weight)
}

pub fn compute_variety_bonus(profile: &UserProfile) -> u32 {
    profile.variety_preference().map_or(0, variety_preference_weight)
        + profile.priority().map_or(0, priority_weight)
        + profile.timeline().map_or(0, timeline_weight)
        + profile.bonus().map_or(0, bonus_weight)
}

pub fn activity_weight(value: WorkoutFrequency) -> u32 {
    match value {
        WorkoutFrequency::OneToTwoDays => 5,
        WorkoutFrequency::ThreeToFourDays => 12,
        WorkoutFrequency::FiveToSixDays => 18,
        WorkoutFrequency::Daily => 20,
        WorkoutFrequency::Unrecognized => 0,
    }
}

pub fn commitment_weight(value: Commitment) -> u32 {
    match value {
        Commitment::Trial => 8,
        Commitment::Committed => 18,
        Commitment::Transformation => 25,
        Commitment::Unrecognized => 0,
    }
}

pub fn budget_weight(value: BudgetRange) -> u32 {
    match value {
        BudgetRange::Budget => 8,
        BudgetRange::Moderate => 15,
        BudgetRange::Premium | BudgetRange::NoLimit => 20,
        BudgetRange::Unrecognized => 0,
    }
}

pub fn experience_weight(value: Experience) -> u32 {
    match value {
        Experience::New => 5,
        Experience::Familiar => 10,
        Experience::Experienced => 15,
        Experience::Unrecognized => 0,
    }
}

pub fn goal_weight(value: PrimaryGoal) -> u32 {
    match value {
        PrimaryGoal::General => 8,
        PrimaryGoal::Focus => 10,
        PrimaryGoal::Endurance => 15,
        PrimaryGoal::Muscle | PrimaryGoal::Strength => 18,
        PrimaryGoal::Unrecognized => 0,
    }
}

pub fn variety_preference_weight(value: VarietyPreference) -> u32 {
    match value {
        VarietyPreference::Variety | VarietyPreference::Surprise => 3,
        VarietyPreference::Rotation => 2,
        VarietyPreference::Simple | VarietyPreference::Unrecognized => 0,
    }
}

pub fn priority_weight(value: Priority) -> u32 {
    match value {
        Priority::Complete => 2,
        Priority::Unrecognized => 0,
    }
}

pub fn timeline_weight(value: Timeline) -> u32 {
    match value {
        Timeline::LongTerm => 2,
        Timeline::Unrecognized => 0,
    }
}

pub fn bonus_weight(value: BonusInterest) -> u32 {
    match value {
        BonusInterest::FlavorDiscovery => 3,
        BonusInterest::Unrecognized => 0,
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::profile::UserProfile;
    use crate::domain::question::ProfileField;

    use super::{compute_score, compute_variety_bonus, ScoreResult, MAX_SCORE, MAX_VARIETY_BONUS};

    const WORKOUT: &[&str] = &["1-2days", "3-4days", "5-6days", "daily", "never", ""];
    const COMMITMENT: &[&str] = &["trial", "committed", "transformation", "maybe"];
    const BUDGET: &[&str] = &["budget", "moderate", "premium", "no_limit", "free"];
    const EXPERIENCE: &[&str] = &["new", "some", "experienced", "guru"];
    const GOAL: &[&str] = &["general", "focus", "endurance", "muscle", "strength", "sleep"];

    fn optional(values: &[&'static str]) -> Vec<Option<&'static str>> {
        std::iter::once(None).chain(values.iter().copied().map(Some)).collect()
    }

    fn with_optional(profile: UserProfile, field: ProfileField, value: Option<&str>) -> UserProfile {
        match value {
            Some(value) => profile.with(field, value),
            None => profile,
        }
    }

    #[test]
    fn empty_profile_scores_zero() {
        let result = ScoreResult::for_profile(&UserProfile::default());
        assert_eq!(result, ScoreResult { score: 0, variety_bonus: 0 });
    }

    #[test]
    fn score_stays_within_bounds_for_every_combination() {
        let mut max_seen = 0;
        for workout in optional(WORKOUT) {
            for commitment in optional(COMMITMENT) {
                for budget in optional(BUDGET) {
                    for experience in optional(EXPERIENCE) {
                        for goal in optional(GOAL) {
                            let profile = UserProfile::default();
                            let profile = with_optional(profile, ProfileField::WorkoutFreq, workout);
                            let profile =
                                with_optional(profile, ProfileField::Commitment, commitment);
                            let profile = with_optional(profile, ProfileField::Budget, budget);
                            let profile =
                                with_optional(profile, ProfileField::Experience, experience);
                            let profile = with_optional(profile, ProfileField::PrimaryGoal, goal);

                            let score = compute_score(&profile);
                            assert!(score <= MAX_SCORE, "score {score} exceeds max");
                            max_seen = max_seen.max(score);
                        }
                    }
                }
            }
        }
        assert_eq!(max_seen, MAX_SCORE);
    }

    #[test]
    fn variety_bonus_stays_within_bounds_for_every_combination() {
        let mut max_seen = 0;
        for preference in optional(&["variety", "surprise", "rotation", "simple", "other"]) {
            for priority in optional(&["complete", "results"]) {
                for timeline in optional(&["longterm", "shortterm"]) {
                    for bonus in optional(&["flavor_discovery", "free_shipping"]) {
                        let profile = UserProfile::default();
                        let profile =
                            with_optional(profile, ProfileField::VarietyPreference, preference);
                        let profile = with_optional(profile, ProfileField::Priority, priority);
                        let profile = with_optional(profile, ProfileField::Timeline, timeline);
                        let profile = with_optional(profile, ProfileField::Bonus, bonus);

                        let bonus = compute_variety_bonus(&profile);
                        assert!(bonus <= MAX_VARIETY_BONUS, "bonus {bonus} exceeds max");
                        max_seen = max_seen.max(bonus);
                    }
                }
            }
        }
        assert_eq!(max_seen, MAX_VARIETY_BONUS);
    }

    #[test]
    fn weights_sum_per_dimension() {
        let profile = UserProfile::default()
            .with(ProfileField::WorkoutFreq, "1-2days")
            .with(ProfileField::Commitment, "trial")
            .with(ProfileField::Budget, "budget")
            .with(ProfileField::Experience, "new")
            .with(ProfileField::PrimaryGoal, "focus");

        assert_eq!(compute_score(&profile), 5 + 8 + 8 + 5 + 10);
    }

    #[test]
    fn unscored_fields_do_not_move_either_score() {
        let base = UserProfile::default().with(ProfileField::Experience, "some");
        let noisy = base
            .clone()
            .with(ProfileField::Challenge, "energy")
            .with(ProfileField::Timing, "morning")
            .with(ProfileField::CurrentSupps, "protein");

        assert_eq!(ScoreResult::for_profile(&base), ScoreResult::for_profile(&noisy));
        assert_eq!(compute_score(&noisy), 10);
    }

    #[test]
    fn rotation_counts_two_and_simple_counts_nothing() {
        let rotation = UserProfile::default().with(ProfileField::VarietyPreference, "rotation");
        let simple = UserProfile::default().with(ProfileField::VarietyPreference, "simple");

        assert_eq!(compute_variety_bonus(&rotation), 2);
        assert_eq!(compute_variety_bonus(&simple), 0);
    }
}
