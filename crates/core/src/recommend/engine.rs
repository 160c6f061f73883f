use rust_decimal::Decimal;
use tracing::info;

use crate::config::QuizConfig;
use crate::domain::answer::{BudgetRange, PrimaryGoal, WorkoutFrequency};
use crate::domain::product::BundleProduct;
use crate::domain::profile::UserProfile;
use crate::recommend::cart::CartPayload;
use crate::recommend::catalog::{template_for, BundleTemplate};
use crate::recommend::scoring::ScoreResult;
use crate::recommend::types::{BundleKind, RecommendationBundle, Tier};

pub const VARIETY_BONUS_THRESHOLD: u32 = 6;
pub const VARIETY_DESCRIPTION_SUFFIX: &str =
    " BONUS: 3-flavor creatine variety pack included for complete taste exploration.";
const DEFAULT_FLAVOR: &str = "Blue Raspberry";
const VARIETY_FLAVOR: &str = "Variety Pack (3 Flavors)";

pub trait RecommendationEngine: Send + Sync {
    fn recommend(&self, profile: &UserProfile) -> RecommendationBundle;
}

/// Stateless engine; the only input besides the profile is the cart endpoint.
#[derive(Clone, Debug, Default)]
pub struct DeterministicRecommendationEngine {
    cart: CartPayload,
}

impl DeterministicRecommendationEngine {
    pub fn new(cart: CartPayload) -> Self {
        Self { cart }
    }

    pub fn from_config(config: &QuizConfig) -> Self {
        Self::new(CartPayload::new(config.cart_url.as_deref()))
    }
}

impl RecommendationEngine for DeterministicRecommendationEngine {
    fn recommend(&self, profile: &UserProfile) -> RecommendationBundle {
        let scores = ScoreResult::for_profile(profile);
        let tier = Tier::for_score(scores.score);
        let kind = resolve_kind(tier, profile);
        let variety = variety_applies(scores, profile);

        let bundle = build_bundle(template_for(kind), scores, variety, &self.cart);

        info!(
            event_name = "recommendation.generated",
            score = scores.score,
            variety_bonus = scores.variety_bonus,
            tier = %tier,
            kind = ?kind,
            variety_applied = bundle.variety_applied,
            stack_name = %bundle.stack_name,
            "recommendation generated"
        );

        bundle
    }
}

/// Starter and Essential split on profile answers; Elite and Ultimate have one bundle.
pub fn resolve_kind(tier: Tier, profile: &UserProfile) -> BundleKind {
    match tier {
        Tier::Starter => {
            let low_activity = profile.workout_frequency() == Some(WorkoutFrequency::OneToTwoDays);
            let focus = profile.primary_goal() == Some(PrimaryGoal::Focus);
            if low_activity || focus {
                BundleKind::StarterNootropic
            } else {
                BundleKind::StarterCreatine
            }
        }
        Tier::Essential => {
            if profile.budget() == Some(BudgetRange::Budget) {
                BundleKind::EssentialMonthly
            } else {
                BundleKind::EssentialTwoMonth
            }
        }
        Tier::Elite => BundleKind::Elite,
        Tier::Ultimate => BundleKind::Ultimate,
    }
}

pub fn variety_applies(scores: ScoreResult, profile: &UserProfile) -> bool {
    scores.variety_bonus >= VARIETY_BONUS_THRESHOLD
        && profile.budget().is_some_and(BudgetRange::is_premium)
}

fn build_bundle(
    template: &BundleTemplate,
    scores: ScoreResult,
    variety: bool,
    cart: &CartPayload,
) -> RecommendationBundle {
    let mut stack_name = template.stack_name.to_owned();
    let mut description = template.description.to_owned();
    let mut products: Vec<BundleProduct> =
        template.products.iter().map(BundleProduct::from).collect();

    if variety {
        description.push_str(VARIETY_DESCRIPTION_SUFFIX);
        stack_name = stack_name.replacen("Stack", "Discovery Stack", 1);
        if let Some(first) = products.first_mut() {
            first.name = first.name.replacen(DEFAULT_FLAVOR, VARIETY_FLAVOR, 1);
        }
    }

    let cart_payload = cart.build(&stack_name);

    RecommendationBundle {
        tier: template.kind.tier(),
        kind: template.kind,
        product_mix: template.product_mix,
        duration_months: template.duration_months,
        subscription: true,
        price: Decimal::from(template.price),
        list_price: Decimal::from(template.list_price),
        stack_name,
        description,
        upgrade_message: template.upgrade_message.to_owned(),
        products,
        price_text: template.price_text.to_owned(),
        savings_text: template.savings_text.to_owned(),
        offer_badge: template.offer_badge.to_owned(),
        urgency_text: template.urgency_text.to_owned(),
        variety_applied: variety,
        scores,
        cart_payload,
    }
}
