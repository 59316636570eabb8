// Line-level classification for the extracted document text.
use std::sync::LazyLock;

use regex::Regex;

use super::category::Category;

static PAGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Page\s+\d+\s+of\s+\d+").unwrap());
// Price tokens are thousands-grouped with exactly two fraction digits, or
// the literal placeholder the document prints for unavailable prices.
static PRICE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(\d{1,3}(?:,\d{3})*\.\d{2}|n/a)\s*$").unwrap());

/// Column-header words echoed into data rows by reflowed table headers.
const HEADER_WORDS: &[&str] = &[
    "PREVAILING",
    "RETAIL",
    "PRICE",
    "COMMODITY",
    "SPECIFICATION",
    "UNIT",
    "P/UNIT",
];

/// Footnote and title markers that identify non-data lines.
const NOISE_MARKERS: &[&str] = &["SOURCE:", "NOTE:", "DEPARTMENT"];

#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    /// "Page N of M" reflow marker; invalidates any buffered fragments.
    PageMarker,
    CategoryHeader(Category),
    /// Header, footer or column-header echo.
    Noise,
    /// Line closed by a trailing price token.
    PriceTerminated { content: String, price: PriceToken },
    /// Fragment of a commodity name or specification.
    Continuation(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PriceToken {
    Amount(f64),
    NotApplicable,
}

impl PriceToken {
    fn parse(token: &str) -> Self {
        if token == "n/a" {
            return PriceToken::NotApplicable;
        }
        match token.replace(',', "").parse::<f64>() {
            Ok(value) => PriceToken::Amount(value),
            Err(_) => PriceToken::NotApplicable,
        }
    }
}

/// Classifies one sanitized, non-empty line.
pub fn classify(line: &str) -> LineClass {
    if PAGE_MARKER.is_match(line) {
        return LineClass::PageMarker;
    }
    if let Some(category) = Category::match_line(line) {
        return LineClass::CategoryHeader(category);
    }
    if is_boilerplate(line) {
        return LineClass::Noise;
    }
    if let Some(caps) = PRICE_TOKEN.captures(line) {
        let token = caps.get(1).expect("price group always present");
        let full = caps.get(0).expect("match always present");
        return LineClass::PriceTerminated {
            content: line[..full.start()].trim().to_string(),
            price: PriceToken::parse(token.as_str()),
        };
    }
    LineClass::Continuation(line.to_string())
}

fn header_word_count(upper: &str) -> usize {
    HEADER_WORDS.iter().filter(|w| upper.contains(*w)).count()
}

/// Source/footnote markers, the document title line, and column-header
/// echoes. These never carry row data.
pub fn is_boilerplate(line: &str) -> bool {
    let upper = line.to_uppercase();
    NOISE_MARKERS.iter().any(|m| upper.contains(m))
        || upper.contains("PREVAILING")
        || upper.contains("COMMODITY")
        || upper.contains("SPECIFICATION")
        || upper.contains("PRICE PER UNIT")
        || header_word_count(&upper) >= 2
}

/// Guard for canonical names the normalizer passed through verbatim: a
/// bare header word, or two or more of them, is not a commodity.
pub fn is_header_artifact(name: &str) -> bool {
    let upper = name.to_uppercase();
    HEADER_WORDS.contains(&upper.as_str()) || header_word_count(&upper) >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_marker_detected() {
        assert_eq!(classify("Page 2 of 5"), LineClass::PageMarker);
        assert_eq!(classify("page 12 of 12"), LineClass::PageMarker);
    }

    #[test]
    fn category_header_detected() {
        assert_eq!(
            classify("FISH PRODUCTS"),
            LineClass::CategoryHeader(Category::FishProducts)
        );
    }

    #[test]
    fn boilerplate_detected() {
        assert_eq!(classify("Source: DA-AFID field monitors"), LineClass::Noise);
        assert_eq!(classify("Department of Agriculture"), LineClass::Noise);
        assert_eq!(classify("COMMODITY SPECIFICATION"), LineClass::Noise);
        assert_eq!(classify("PREVAILING RETAIL PRICE PER UNIT"), LineClass::Noise);
    }

    #[test]
    fn trailing_price_terminates_line() {
        match classify("Beef Brisket 380.00") {
            LineClass::PriceTerminated { content, price } => {
                assert_eq!(content, "Beef Brisket");
                assert_eq!(price, PriceToken::Amount(380.0));
            }
            other => panic!("unexpected class: {:?}", other),
        }
    }

    #[test]
    fn thousands_grouped_price_parses() {
        match classify("Beef Tenderloin 1,250.00") {
            LineClass::PriceTerminated { price, .. } => {
                assert_eq!(price, PriceToken::Amount(1250.0));
            }
            other => panic!("unexpected class: {:?}", other),
        }
    }

    #[test]
    fn not_applicable_token_recognized() {
        match classify("Corn Cracked n/a") {
            LineClass::PriceTerminated { price, .. } => {
                assert_eq!(price, PriceToken::NotApplicable);
            }
            other => panic!("unexpected class: {:?}", other),
        }
    }

    #[test]
    fn price_without_two_fraction_digits_is_continuation() {
        assert_eq!(
            classify("Galunggong 250.5"),
            LineClass::Continuation("Galunggong 250.5".to_string())
        );
    }

    #[test]
    fn bare_price_line_is_continuation() {
        // No separating whitespace before the token; nothing to anchor to.
        assert_eq!(classify("250.00"), LineClass::Continuation("250.00".to_string()));
    }

    #[test]
    fn header_echo_is_boilerplate() {
        assert!(is_boilerplate("RETAIL PRICE PER"));
        assert!(is_boilerplate("UNIT PRICE"));
        assert!(!is_boilerplate("Bangus Large"));
    }

    #[test]
    fn header_artifact_guard() {
        assert!(is_header_artifact("PRICE"));
        assert!(is_header_artifact("Retail Price"));
        assert!(!is_header_artifact("Chicken Egg"));
    }
}
