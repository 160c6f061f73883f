use stackquiz_core::RecommendationBundle;

pub fn render_bundle(bundle: &RecommendationBundle) -> String {
    let mut lines = vec![
        format!("{} [{}]", bundle.stack_name, bundle.offer_badge),
        bundle.description.clone(),
        format!("💡 Pro Tip: {}", bundle.upgrade_message),
        "Includes:".to_string(),
    ];
    lines.extend(
        bundle.products.iter().map(|product| format!("  ✓ {} ({})", product.name, product.sku.0)),
    );
    lines.push(bundle.price_text.clone());
    lines.push(bundle.savings_text.clone());
    lines.push(bundle.urgency_text.clone());

    let variety = if bundle.variety_applied { ", variety pack included" } else { "" };
    lines.push(format!(
        "Score {} ({} tier), variety bonus {}{variety}",
        bundle.scores.score, bundle.tier, bundle.scores.variety_bonus
    ));
    lines.push(format!("Add to cart: {}", bundle.cart_payload));
    lines.join("\n")
}
