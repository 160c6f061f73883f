use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::BundleProduct;
use crate::recommend::scoring::ScoreResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Starter,
    Essential,
    Elite,
    Ultimate,
}

impl Tier {
    /// Inclusive bands, first match wins.
    pub fn for_score(score: u32) -> Self {
        match score {
            0..=35 => Self::Starter,
            36..=55 => Self::Essential,
            56..=75 => Self::Elite,
            _ => Self::Ultimate,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Starter => "starter",
            Self::Essential => "essential",
            Self::Elite => "elite",
            Self::Ultimate => "ultimate",
        };
        f.write_str(label)
    }
}

/// Resolved branch of the decision tree. Each kind has exactly one template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleKind {
    StarterNootropic,
    StarterCreatine,
    EssentialMonthly,
    EssentialTwoMonth,
    Elite,
    Ultimate,
}

impl BundleKind {
    pub fn tier(self) -> Tier {
        match self {
            Self::StarterNootropic | Self::StarterCreatine => Tier::Starter,
            Self::EssentialMonthly | Self::EssentialTwoMonth => Tier::Essential,
            Self::Elite => Tier::Elite,
            Self::Ultimate => Tier::Ultimate,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductMix {
    SingleNootropics,
    SingleCreatine,
    BothProducts,
}

/// Finished recommendation handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub tier: Tier,
    pub kind: BundleKind,
    pub product_mix: ProductMix,
    pub duration_months: u32,
    pub subscription: bool,
    /// Monthly price for one-month bundles, otherwise the total for the term.
    pub price: Decimal,
    pub list_price: Decimal,
    pub stack_name: String,
    pub description: String,
    pub upgrade_message: String,
    pub products: Vec<BundleProduct>,
    pub price_text: String,
    pub savings_text: String,
    pub offer_badge: String,
    pub urgency_text: String,
    pub variety_applied: bool,
    pub scores: ScoreResult,
    pub cart_payload: String,
}

impl RecommendationBundle {
    pub fn savings(&self) -> Decimal {
        self.list_price - self.price
    }
}
