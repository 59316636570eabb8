// Category-scoped normalization of raw commodity text onto the canonical
// vocabulary.
mod capture;
mod rules;
mod units;

pub use units::resolve_unit;

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::Category;
use crate::parser::sanitize::sanitize;

/// Canonical (name, specification) pair produced by the rule tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub name: String,
    pub specification: Option<String>,
}

static GENERIC_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(Local|Imported|Fresh|Frozen|Chilled|Whole Round|Native)\b").unwrap()
});
static QUANTITY_TOKENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+-?\d*\s*(?:pcs?/?kg|grams?|cm|ml|L)").unwrap());

/// Maps raw commodity and specification text onto a canonical pair. The
/// category selects the rule table; rules are tried in order and the
/// first match wins. Total: unmatched text comes back cleaned, never an
/// error.
pub fn normalize(raw_commodity: &str, raw_spec: &str, category: Category) -> Normalized {
    let text = sanitize(&format!("{raw_commodity} {raw_spec}"));
    let upper = text.to_uppercase();

    let table = rules::table_for(category);
    for rule in table.rules {
        if rule.matches(&upper) {
            return rule.produce(&text, table.capture);
        }
    }
    generic_cleanup(&text)
}

/// Last-resort cleanup: strip origin/freshness/packaging adjectives and
/// embedded quantity tokens, keep the remainder as the name.
fn generic_cleanup(text: &str) -> Normalized {
    let name = GENERIC_NOISE.replace_all(text, "");
    let name = QUANTITY_TOKENS.replace_all(&name, "");
    let name = sanitize(&name);
    let name = name
        .trim_matches(|c: char| matches!(c, ',' | ' ' | '(' | ')'))
        .to_string();
    Normalized { name, specification: None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_commodity_and_specification_text() {
        let n = normalize("Bangus", "Large", Category::FishProducts);
        assert_eq!(n.name, "Bangus Large");
        assert_eq!(n.specification.as_deref(), Some("Large"));
    }

    #[test]
    fn rule_order_precedence_rib_eye_before_rib() {
        let n = normalize("Beef Rib Eye Ribs", "", Category::BeefMeatProducts);
        assert_eq!(n.name, "Beef Rib Eye");
    }

    #[test]
    fn brand_beats_generic_oil_type() {
        let n = normalize(
            "Cooking Oil, Palm Olein, Minola",
            "350 ml",
            Category::OtherBasicCommodities,
        );
        assert_eq!(n.name, "Cooking Oil (Minola)");
    }

    #[test]
    fn generic_cleanup_strips_noise_and_quantities() {
        let n = normalize(
            "Carabeef Fresh Whole Round 250 grams",
            "",
            Category::OtherLivestockMeatProducts,
        );
        assert_eq!(n.name, "Carabeef");
        assert_eq!(n.specification, None);
    }

    #[test]
    fn never_panics_on_junk_input() {
        for junk in ["", "   ", "((((", "\u{7f}\u{1}", "123.45", ",,,"] {
            let _ = normalize(junk, junk, Category::Spices);
        }
    }

    #[test]
    fn unmatched_text_comes_back_cleaned() {
        let n = normalize("Dressed Duck, Local", "", Category::PoultryProducts);
        // Poultry fallback: no brand, noise words stripped.
        assert_eq!(n.name, "Dressed Duck, Local");
        // "Local" is not poultry noise; generic categories do strip it.
        let g = normalize("Dressed Duck, Local", "", Category::OtherLivestockMeatProducts);
        assert_eq!(g.name, "Dressed Duck");
    }
}
