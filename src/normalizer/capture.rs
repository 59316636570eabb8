// Per-category size/specification capture. The patterns differ in scope
// between categories (some carry unit suffixes like "diameter" or
// "bunch hd", others only size words), so each is its own unit.
use std::sync::LazyLock;

use regex::Regex;

static FISH_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:Large|Medium|Small)\b(?:\s*\(?\d+\s*-?\s*\d*\s*pcs?\s*/?\s*kg\)?)?")
        .unwrap()
});

static BEEF_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(Large|Medium|Small|Lean|Boneless|with Bones)\b").unwrap());

static VEGETABLE_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:Medium|Large|Small)?\s*\(?\d+-?\d*\s*(?:cm|gm?|g|pcs)(?:\s*[-/]\s*\d+\s*(?:kg|cm|g|gm))?\s*(?:diameter|bunch hd|head|pcs/kg)?\)?",
    )
    .unwrap()
});

static FRUIT_SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(Ripe|Green|Solo|\d+-\d+\s*pcs/kg)").unwrap());

/// Size word plus an immediately following piece-count descriptor.
pub(crate) fn fish_size(text: &str) -> Option<String> {
    FISH_SIZE.find(text).map(|m| m.as_str().trim().to_string())
}

/// First size or cut qualifier.
pub(crate) fn beef_size(text: &str) -> Option<String> {
    BEEF_SIZE.find(text).map(|m| m.as_str().trim().to_string())
}

/// Bundle/diameter/weight descriptors, e.g. "Medium (8-10 cm diameter".
pub(crate) fn vegetable_spec(text: &str) -> Option<String> {
    VEGETABLE_SPEC.find(text).map(|m| m.as_str().trim().to_string())
}

/// Ripeness or piece-count descriptor.
pub(crate) fn fruit_spec(text: &str) -> Option<String> {
    FRUIT_SPEC.find(text).map(|m| m.as_str().trim().to_string())
}

/// Onion size; the document only ever prints Medium or Large, and Large
/// wins when both appear.
pub(crate) fn spice_size(text: &str) -> Option<String> {
    let upper = text.to_uppercase();
    if upper.contains("LARGE") {
        Some("Large".to_string())
    } else if upper.contains("MEDIUM") {
        Some("Medium".to_string())
    } else {
        None
    }
}

pub(crate) fn strip_vegetable_spec(text: &str) -> String {
    VEGETABLE_SPEC.replace_all(text, "").into_owned()
}

pub(crate) fn strip_fruit_spec(text: &str) -> String {
    FRUIT_SPEC.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fish_size_word_alone() {
        assert_eq!(fish_size("Bangus Large"), Some("Large".to_string()));
        assert_eq!(fish_size("Whole Round"), None);
    }

    #[test]
    fn fish_size_with_piece_count() {
        assert_eq!(
            fish_size("Medium 12-14 pcs/kg"),
            Some("Medium 12-14 pcs/kg".to_string())
        );
    }

    #[test]
    fn beef_size_qualifiers() {
        assert_eq!(beef_size("Rib Eye Boneless"), Some("Boneless".to_string()));
        assert_eq!(beef_size("Brisket with Bones"), Some("with Bones".to_string()));
        assert_eq!(beef_size("Rump"), None);
    }

    #[test]
    fn vegetable_diameter_descriptor() {
        assert_eq!(
            vegetable_spec("Cabbage Medium (8-10 cm diameter"),
            Some("Medium (8-10 cm diameter".to_string())
        );
    }

    #[test]
    fn vegetable_weight_range_descriptor() {
        assert!(vegetable_spec("510 gm - 1 kg/head").is_some());
        assert_eq!(vegetable_spec("Pechay Baguio"), None);
    }

    #[test]
    fn fruit_descriptors() {
        assert_eq!(fruit_spec("Papaya Ripe"), Some("Ripe".to_string()));
        assert_eq!(fruit_spec("Banana 8-10 pcs/kg"), Some("8-10 pcs/kg".to_string()));
        assert_eq!(fruit_spec("Mango"), None);
    }

    #[test]
    fn spice_size_prefers_large() {
        assert_eq!(spice_size("Red Onion Medium Large"), Some("Large".to_string()));
        assert_eq!(spice_size("White Onion Medium"), Some("Medium".to_string()));
        assert_eq!(spice_size("Garlic"), None);
    }
}
