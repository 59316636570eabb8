// Text-to-structure parsing of the extracted price index document.
pub mod category;
pub mod classify;
pub mod markets;
pub mod sanitize;

pub use category::Category;

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Origin, ParseResult, PriceRecord};
use crate::normalizer;
use classify::{LineClass, PriceToken};
use sanitize::sanitize;

pub trait Parser {
    fn parse(&self, raw_text: &str) -> ParseResult;
}

pub struct PriceIndexParser;

impl PriceIndexParser {
    pub fn new() -> Self {
        Self
    }
}

static ORIGIN_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i),?\s*\b(Local|Imported)\b").unwrap());

/// Line-loop state scoped to one parse call; each invocation owns its
/// own, so concurrent parses never share buffers.
#[derive(Debug, Default)]
struct ParserState {
    current_category: Option<Category>,
    commodity_buffer: Vec<String>,
    spec_buffer: Vec<String>,
}

impl ParserState {
    fn reset_buffers(&mut self) {
        self.commodity_buffer.clear();
        self.spec_buffer.clear();
    }
}

impl Parser for PriceIndexParser {
    /// Single forward pass over the line sequence. Malformed input is
    /// never an error; it degrades to fewer records.
    fn parse(&self, raw_text: &str) -> ParseResult {
        let covered_markets = markets::extract_markets(raw_text);
        let mut records = Vec::new();
        let mut state = ParserState::default();

        for raw_line in raw_text.lines() {
            step(&mut state, raw_line, &mut records);
        }

        ParseResult { covered_markets, records }
    }
}

/// Advances the state machine by one physical line.
fn step(state: &mut ParserState, raw_line: &str, records: &mut Vec<PriceRecord>) {
    let line = sanitize(raw_line);
    if line.is_empty() {
        return;
    }

    match classify::classify(&line) {
        // A reflowed page boundary may have corrupted the in-flight
        // record; discard rather than guess.
        LineClass::PageMarker => state.reset_buffers(),
        LineClass::CategoryHeader(category) => {
            state.current_category = Some(category);
            state.reset_buffers();
        }
        LineClass::Noise => {}
        LineClass::PriceTerminated { content, price } => {
            // Nothing before the first category header is trustworthy.
            if state.current_category.is_some() {
                if let Some(record) = close_record(state, &content, price) {
                    records.push(record);
                }
            }
        }
        LineClass::Continuation(fragment) => {
            if state.current_category.is_none() {
                return;
            }
            // First unterminated line is taken as the commodity name,
            // later ones as specification continuation. Names spanning
            // three or more lines overflow into the specification buffer.
            if state.commodity_buffer.is_empty() {
                state.commodity_buffer.push(fragment);
            } else {
                state.spec_buffer.push(fragment);
            }
        }
    }
}

/// Closes the buffered record on a price-terminated line. Buffers are
/// cleared on every path through here, emitted or not.
fn close_record(state: &mut ParserState, content: &str, price: PriceToken) -> Option<PriceRecord> {
    let category = state.current_category?;

    // Reflowed text can attach a price to a column-header echo.
    if classify::is_boilerplate(content) {
        state.reset_buffers();
        return None;
    }

    let (raw_commodity, raw_spec) = if state.commodity_buffer.is_empty() {
        // Whole record fit on one line.
        (content.to_string(), String::new())
    } else {
        let commodity = state.commodity_buffer.join(" ");
        let mut parts = std::mem::take(&mut state.spec_buffer);
        parts.push(content.to_string());
        (commodity, parts.join(" "))
    };
    state.reset_buffers();

    let amount = match price {
        PriceToken::Amount(value) => value,
        // A row without a numeric price carries no information.
        PriceToken::NotApplicable => return None,
    };

    let origin = infer_origin(&raw_commodity, &raw_spec, category);
    let commodity_text = strip_origin_keywords(&raw_commodity);
    let spec_text = strip_origin_keywords(&raw_spec);

    let normalized = normalizer::normalize(&commodity_text, &spec_text, category);
    if normalized.name.chars().count() <= 2 || classify::is_header_artifact(&normalized.name) {
        return None;
    }

    let unit_source = if spec_text.is_empty() { &commodity_text } else { &spec_text };
    let unit = normalizer::resolve_unit(unit_source, &normalized.name);

    Some(PriceRecord {
        category: category.output_label().to_string(),
        commodity: normalized.name,
        origin,
        unit,
        price: amount,
    })
}

fn infer_origin(raw_commodity: &str, raw_spec: &str, category: Category) -> Origin {
    if category.origin_qualifier() == Some(Origin::Imported) {
        return Origin::Imported;
    }
    let combined = format!("{raw_commodity} {raw_spec}").to_uppercase();
    if combined.contains("IMPORTED") {
        Origin::Imported
    } else {
        Origin::Local
    }
}

fn strip_origin_keywords(text: &str) -> String {
    sanitize(&ORIGIN_KEYWORDS.replace_all(text, ""))
}
