use stackquiz_core::domain::answer::{Commitment, Experience, PrimaryGoal};
use stackquiz_core::UserProfile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insight {
    pub title: &'static str,
    pub text: &'static str,
}

pub fn education_tips(profile: &UserProfile) -> Vec<Insight> {
    let mut tips = vec![match profile.primary_goal() {
        Some(PrimaryGoal::Muscle) => Insight {
            title: "💪 Muscle Building Science",
            text: "Our creatine increases protein synthesis by 15-22%. Combined with pre-workout, users gain 3-5 lbs more muscle in 8 weeks.",
        },
        Some(PrimaryGoal::Focus) => Insight {
            title: "🧠 Cognitive Enhancement",
            text: "Our nootropic blend increases focus by 67% within 30 minutes. Perfect for both mental and physical performance.",
        },
        Some(PrimaryGoal::Strength) => Insight {
            title: "🏋️ Power Amplification",
            text: "Strength athletes report 15-25% max lift increases in 4 weeks. Our combination maximizes explosive power output.",
        },
        Some(PrimaryGoal::Endurance) => Insight {
            title: "🏃 Endurance Revolution",
            text: "Marathon runners extend their sessions by 20-30 minutes. Our formula prevents fatigue cascade and maintains peak performance.",
        },
        _ => Insight {
            title: "🌟 Holistic Wellness",
            text: "Complete wellness users report improved energy, enhanced sleep quality, and elevated daily performance within 2 weeks.",
        },
    }];

    match profile.experience() {
        Some(Experience::New) => tips.push(Insight {
            title: "🌱 Perfect Starting Point",
            text: "New users see 40% faster results with our guided approach. We'll recommend the optimal starter stack and provide step-by-step guidance.",
        }),
        Some(Experience::Experienced) => tips.push(Insight {
            title: "🚀 Advanced Optimization",
            text: "Experienced users unlock our premium formulations and advanced protocols. Time to break through your next level.",
        }),
        _ => {}
    }

    if profile.commitment() == Some(Commitment::Transformation) {
        tips.push(Insight {
            title: "🔥 Complete Metamorphosis",
            text: "Long-term commitment unlocks our most powerful transformation protocols. All-in users see 2-3x more dramatic results.",
        });
    }

    tips
}

pub fn social_proof(profile: &UserProfile) -> Vec<&'static str> {
    let mut lines = vec![match profile.primary_goal() {
        Some(PrimaryGoal::Muscle) => "87% of muscle builders see visible gains within 4-6 weeks",
        Some(PrimaryGoal::Focus) => "94% report improved mental clarity within the first week",
        Some(PrimaryGoal::Strength) => {
            "Strength-focused users increase max lifts by average 18% in 6 weeks"
        }
        Some(PrimaryGoal::Endurance) => {
            "Endurance athletes extend workout duration by 25-35% on average"
        }
        _ => "Wellness-focused users report improved energy in 92% of cases",
    }];

    match profile.experience() {
        Some(Experience::New) => {
            lines.push("95% of new users stick with their supplement routine using our guidance")
        }
        Some(Experience::Experienced) => {
            lines.push("Advanced users report 40% faster optimization with our premium stacks")
        }
        _ => {}
    }

    if profile.commitment() == Some(Commitment::Transformation) {
        lines.push("Long-term commitment users report 3x more dramatic body changes");
    }

    lines
}

pub fn render_insights(profile: &UserProfile) -> String {
    let mut lines = Vec::new();
    for tip in education_tips(profile) {
        lines.push(format!("## {}", tip.title));
        lines.push(tip.text.to_string());
    }
    lines.extend(social_proof(profile).into_iter().map(|line| format!("✨ {line}")));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use stackquiz_core::{ProfileField, UserProfile};

    use super::{education_tips, render_insights, social_proof};

    #[test]
    fn unanswered_goal_falls_back_to_wellness_copy() {
        let profile = UserProfile::default();

        let tips = education_tips(&profile);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].title, "🌟 Holistic Wellness");
        assert_eq!(
            social_proof(&profile),
            vec!["Wellness-focused users report improved energy in 92% of cases"]
        );
    }

    #[test]
    fn experience_and_commitment_add_lines() {
        let profile = UserProfile::default()
            .with(ProfileField::PrimaryGoal, "muscle")
            .with(ProfileField::Experience, "experienced")
            .with(ProfileField::Commitment, "transformation");

        let titles: Vec<_> = education_tips(&profile).iter().map(|tip| tip.title).collect();
        assert_eq!(
            titles,
            vec![
                "💪 Muscle Building Science",
                "🚀 Advanced Optimization",
                "🔥 Complete Metamorphosis",
            ]
        );
        assert_eq!(social_proof(&profile).len(), 3);
    }

    #[test]
    fn familiar_experience_adds_nothing() {
        let profile = UserProfile::default()
            .with(ProfileField::PrimaryGoal, "focus")
            .with(ProfileField::Experience, "some");

        assert_eq!(education_tips(&profile).len(), 1);
        assert_eq!(social_proof(&profile).len(), 1);
        let text = render_insights(&profile);
        assert!(text.contains("## 🧠 Cognitive Enhancement"));
        assert!(text.ends_with("✨ 94% report improved mental clarity within the first week"));
    }
}
