//! Static bundle templates, one per decision-tree branch.

use crate::domain::product::CatalogProduct;
use crate::recommend::types::{BundleKind, ProductMix};

pub const NOOTROPIC_MONTHLY: CatalogProduct =
    CatalogProduct { name: "Work Vibes Nootropic Capsules (Monthly)", sku: "nootropic_monthly" };
pub const CREATINE_MONTHLY: CatalogProduct =
    CatalogProduct { name: "Creatine Gummies - Blue Raspberry (Monthly)", sku: "creatine_monthly" };
pub const CREATINE_2_MONTH: CatalogProduct = CatalogProduct {
    name: "Creatine Gummies - Blue Raspberry (2-Month Supply)",
    sku: "creatine_2month",
};
pub const NOOTROPIC_2_MONTH: CatalogProduct = CatalogProduct {
    name: "Work Vibes Nootropic Capsules (2-Month Supply)",
    sku: "nootropic_2month",
};
pub const CREATINE_3_MONTH: CatalogProduct = CatalogProduct {
    name: "Creatine Gummies - Blue Raspberry (3-Month Supply)",
    sku: "creatine_3month",
};
pub const NOOTROPIC_3_MONTH: CatalogProduct = CatalogProduct {
    name: "Work Vibes Nootropic Capsules (3-Month Supply)",
    sku: "nootropic_3month",
};
pub const CREATINE_6_MONTH: CatalogProduct = CatalogProduct {
    name: "Creatine Gummies - Blue Raspberry (6-Month Supply)",
    sku: "creatine_6month",
};
pub const NOOTROPIC_6_MONTH: CatalogProduct = CatalogProduct {
    name: "Work Vibes Nootropic Capsules (6-Month Supply)",
    sku: "nootropic_6month",
};

/// Prices are whole dollars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BundleTemplate {
    pub kind: BundleKind,
    pub product_mix: ProductMix,
    pub duration_months: u32,
    pub price: u32,
    pub list_price: u32,
    pub stack_name: &'static str,
    pub description: &'static str,
    pub upgrade_message: &'static str,
    pub products: &'static [CatalogProduct],
    pub price_text: &'static str,
    pub savings_text: &'static str,
    pub offer_badge: &'static str,
    pub urgency_text: &'static str,
}

pub const STARTER_NOOTROPIC: BundleTemplate = BundleTemplate {
    kind: BundleKind::StarterNootropic,
    product_mix: ProductMix::SingleNootropics,
    duration_months: 1,
    price: 24,
    list_price: 30,
    stack_name: "Wellness Warrior Starter Stack",
    description: "Perfect starting point for building healthy habits. Our nootropics provide the mental clarity and motivation to establish a consistent routine.",
    upgrade_message: "Once you experience improved focus and motivation, consider adding our creatine gummies for complete physical + mental synergy.",
    products: &[NOOTROPIC_MONTHLY],
    price_text: "Monthly Subscription - $24.00/month",
    savings_text: "YOU SAVE $6.00 per month vs one-time pricing ($30.00)",
    offer_badge: "STARTER SPECIAL",
    urgency_text: "🌱 Perfect for beginners - Start your journey today!",
};

pub const STARTER_CREATINE: BundleTemplate = BundleTemplate {
    kind: BundleKind::StarterCreatine,
    product_mix: ProductMix::SingleCreatine,
    duration_months: 1,
    price: 25,
    list_price: 30,
    stack_name: "Strength Master Starter Stack",
    description: "Foundation-building stack focused on strength and recovery. Start with proven creatine science to see immediate performance gains.",
    upgrade_message: "After 30 days of strength gains, most users add our nootropics for complete mind-muscle optimization.",
    products: &[CREATINE_MONTHLY],
    price_text: "Monthly Subscription - $25.00/month",
    savings_text: "YOU SAVE $5.00 per month vs one-time pricing ($30.00)",
    offer_badge: "STRENGTH STARTER",
    urgency_text: "💪 Build strength from day one!",
};

pub const ESSENTIAL_MONTHLY: BundleTemplate = BundleTemplate {
    kind: BundleKind::EssentialMonthly,
    product_mix: ProductMix::BothProducts,
    duration_months: 1,
    price: 49,
    list_price: 60,
    stack_name: "Performance Synergy Essential Stack",
    description: "Complete physical + mental performance system. Get the full synergy effect with both products at our most affordable monthly rate.",
    upgrade_message: "Many users upgrade to 3-month supplies after experiencing the powerful synergy effect - significant savings and consistency.",
    products: &[CREATINE_MONTHLY, NOOTROPIC_MONTHLY],
    price_text: "Monthly Subscription - $49.00/month",
    savings_text: "YOU SAVE $11.00 per month vs one-time pricing ($60.00)",
    offer_badge: "BEST VALUE COMBO",
    urgency_text: "🎯 Complete mind-muscle synergy at the best price!",
};

pub const ESSENTIAL_TWO_MONTH: BundleTemplate = BundleTemplate {
    kind: BundleKind::EssentialTwoMonth,
    product_mix: ProductMix::BothProducts,
    duration_months: 2,
    price: 98,
    list_price: 120,
    stack_name: "Peak Synergy Pro Stack",
    description: "Advanced 2-month supply ensuring consistent results and habit formation. Physical strength + mental clarity working in perfect harmony.",
    upgrade_message: "Pro tip: Users who commit to 3+ months see exponentially better results due to compound effects.",
    products: &[CREATINE_2_MONTH, NOOTROPIC_2_MONTH],
    price_text: "2-Month Subscription - $98.00 (2 months)",
    savings_text: "YOU SAVE $22.00 vs monthly pricing ($120.00)",
    offer_badge: "PRO PERFORMANCE",
    urgency_text: "🚀 2-month commitment = better consistency and results!",
};

pub const ELITE: BundleTemplate = BundleTemplate {
    kind: BundleKind::Elite,
    product_mix: ProductMix::BothProducts,
    duration_months: 3,
    price: 147,
    list_price: 180,
    stack_name: "Elite Performance Synergy Stack",
    description: "Premium 3-month transformation system. Complete physical + mental optimization with our highest-performing dosage protocol.",
    upgrade_message: "Elite users often extend to 6-month protocols for maximum body recomposition and cognitive enhancement.",
    products: &[CREATINE_3_MONTH, NOOTROPIC_3_MONTH],
    price_text: "3-Month Subscription - $147.00 (3 months)",
    savings_text: "YOU SAVE $33.00 vs monthly pricing ($180.00)",
    offer_badge: "ELITE TRANSFORMATION",
    urgency_text: "🔥 3-month elite protocol - Maximum results guaranteed!",
};

pub const ULTIMATE: BundleTemplate = BundleTemplate {
    kind: BundleKind::Ultimate,
    product_mix: ProductMix::BothProducts,
    duration_months: 6,
    price: 294,
    list_price: 360,
    stack_name: "Ultimate Mind-Muscle Mastery Stack",
    description: "Ultimate 6-month transformation protocol. Complete system for serious athletes and high-performers seeking maximum results.",
    upgrade_message: "You're committed to excellence. After this protocol, we'll help you design your advanced optimization regimen.",
    products: &[CREATINE_6_MONTH, NOOTROPIC_6_MONTH],
    price_text: "6-Month Subscription - $294.00 (6 months)",
    savings_text: "YOU SAVE $66.00 vs monthly pricing ($360.00)",
    offer_badge: "ULTIMATE MASTERY",
    urgency_text: "👑 6-month mastery protocol - For the truly committed!",
};

pub const TEMPLATES: [BundleTemplate; 6] =
    [STARTER_NOOTROPIC, STARTER_CREATINE, ESSENTIAL_MONTHLY, ESSENTIAL_TWO_MONTH, ELITE, ULTIMATE];

pub fn template_for(kind: BundleKind) -> &'static BundleTemplate {
    match kind {
        BundleKind::StarterNootropic => &STARTER_NOOTROPIC,
        BundleKind::StarterCreatine => &STARTER_CREATINE,
        BundleKind::EssentialMonthly => &ESSENTIAL_MONTHLY,
        BundleKind::EssentialTwoMonth => &ESSENTIAL_TWO_MONTH,
        BundleKind::Elite => &ELITE,
        BundleKind::Ultimate => &ULTIMATE,
    }
}
