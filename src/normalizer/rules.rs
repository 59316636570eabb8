// Canonicalization rule tables, one per category family. Rules are data:
// an ordered list of keyword predicates evaluated top to bottom, first
// match wins. Order is load-bearing — "RIB EYE" must precede "RIB",
// "STRIP"+"LOIN" must precede "LOIN" — so reordering entries changes
// behavior.
use std::sync::LazyLock;

use regex::Regex;

use super::Normalized;
use super::capture;
use crate::parser::Category;
use crate::parser::sanitize::sanitize;

pub(crate) struct Rule {
    /// At least one must appear in the uppercased text (empty = no constraint).
    pub any: &'static [&'static str],
    /// Every keyword must appear.
    pub all: &'static [&'static str],
    /// None of these may appear.
    pub none: &'static [&'static str],
    pub output: Output,
}

pub(crate) enum Output {
    /// Fixed canonical pair.
    Fixed(&'static str, Option<&'static str>),
    /// Fixed name; specification captured by the table's size pattern.
    Sized(&'static str),
    /// Producer for the brand-priority and per-category cleanup cases.
    Produce(fn(&str) -> Normalized),
}

pub(crate) struct RuleTable {
    pub rules: &'static [Rule],
    /// Trailing size/count capture shared by this table's Sized outputs.
    pub capture: Option<fn(&str) -> Option<String>>,
}

impl Rule {
    pub fn matches(&self, upper: &str) -> bool {
        (self.any.is_empty() || self.any.iter().any(|k| upper.contains(k)))
            && self.all.iter().all(|k| upper.contains(k))
            && self.none.iter().all(|k| !upper.contains(k))
    }

    pub fn produce(&self, text: &str, table_capture: Option<fn(&str) -> Option<String>>) -> Normalized {
        match self.output {
            Output::Fixed(name, spec) => Normalized {
                name: name.to_string(),
                specification: spec.map(str::to_string),
            },
            Output::Sized(name) => Normalized {
                name: name.to_string(),
                specification: table_capture.and_then(|f| f(text)),
            },
            Output::Produce(f) => f(text),
        }
    }
}

const NONE: &[&str] = &[];

const fn fixed(all: &'static [&'static str], name: &'static str, spec: Option<&'static str>) -> Rule {
    Rule { any: NONE, all, none: NONE, output: Output::Fixed(name, spec) }
}

const fn sized(all: &'static [&'static str], name: &'static str) -> Rule {
    Rule { any: NONE, all, none: NONE, output: Output::Sized(name) }
}

/// Category-specific cleanup applied when no keyword rule fires.
const fn catch_all(producer: fn(&str) -> Normalized) -> Rule {
    Rule { any: NONE, all: NONE, none: NONE, output: Output::Produce(producer) }
}

pub(crate) fn table_for(category: Category) -> &'static RuleTable {
    match category {
        Category::ImportedCommercialRice | Category::LocalCommercialRice => &RICE,
        Category::CornProducts => &CORN,
        Category::FishProducts => &FISH,
        Category::BeefMeatProducts => &BEEF,
        Category::PorkMeatProducts => &PORK,
        Category::PoultryProducts => &POULTRY,
        Category::LowlandVegetables | Category::HighlandVegetables => &VEGETABLES,
        Category::Spices => &SPICES,
        Category::Fruits => &FRUITS,
        Category::OtherBasicCommodities => &BASIC,
        // No dedicated vocabulary; everything falls to generic cleanup.
        Category::OtherLivestockMeatProducts => &OTHER_LIVESTOCK,
    }
}

static RICE: RuleTable = RuleTable {
    rules: &[
        fixed(&["BASMATI"], "Basmati Rice", None),
        fixed(&["GLUTINOUS"], "Glutinous Rice", None),
        fixed(&["JASPONICA"], "Jasponica Rice", None),
        fixed(&["JAPONICA"], "Jasponica Rice", None),
        fixed(&["SPECIAL", "WHITE"], "Special White Rice", None),
        fixed(&["PREMIUM"], "Premium Rice", Some("5% broken")),
        fixed(&["WELL MILLED"], "Well Milled Rice", Some("1-19% bran streak")),
        fixed(&["REGULAR MILLED"], "Regular Milled Rice", Some("20-40% bran streak")),
    ],
    capture: None,
};

static CORN: RuleTable = RuleTable {
    rules: &[
        fixed(&["WHITE", "COB"], "Corn White", Some("Cob, Glutinous")),
        fixed(&["YELLOW", "COB"], "Corn Yellow", Some("Cob, Sweet")),
        fixed(&["GRITS", "WHITE", "FOOD"], "Corn Grits White", Some("Food Grade")),
        fixed(&["GRITS", "YELLOW", "FOOD"], "Corn Grits Yellow", Some("Food Grade")),
        fixed(&["CRACKED"], "Corn Cracked", Some("Feed Grade")),
        fixed(&["GRITS", "FEED"], "Corn Grits", Some("Feed Grade")),
    ],
    capture: None,
};

static FISH: RuleTable = RuleTable {
    rules: &[
        sized(&["ALUMAHAN"], "Alumahan (Indian Mackerel)"),
        sized(&["MACKEREL", "INDIAN"], "Alumahan (Indian Mackerel)"),
        sized(&["BANGUS", "LARGE"], "Bangus Large"),
        sized(&["BANGUS", "MEDIUM"], "Bangus Medium"),
        sized(&["BONITO"], "Bonito (Frigate Tuna)"),
        fixed(&["GALUNGGONG"], "Galunggong", Some("Medium (12-14 pcs/kg)")),
        Rule {
            any: NONE,
            all: &["MACKEREL"],
            none: &["INDIAN"],
            output: Output::Fixed("Mackerel", None),
        },
        fixed(&["PAMPANO"], "Pampano", None),
        fixed(&["SALMON BELLY"], "Salmon Belly", None),
        fixed(&["SALMON HEAD"], "Salmon Head", None),
        Rule {
            any: &["SARDINES", "TAMBAN"],
            all: NONE,
            none: NONE,
            output: Output::Fixed("Sardines (Tamban)", None),
        },
        Rule { any: &["SQUID", "PUSIT"], all: NONE, none: NONE, output: Output::Sized("Squid") },
        Rule {
            any: &["TAMBAKOL", "YELLOW-FIN"],
            all: NONE,
            none: NONE,
            output: Output::Fixed("Tambakol (Yellow-Fin Tuna)", Some("Medium")),
        },
        fixed(&["TILAPIA"], "Tilapia", Some("Medium (5-6 pcs/kg)")),
    ],
    capture: Some(capture::fish_size),
};

static BEEF: RuleTable = RuleTable {
    rules: &[
        sized(&["TENDERLOIN"], "Beef Tenderloin"),
        sized(&["STRIP", "LOIN"], "Beef Striploin"),
        sized(&["SIRLOIN"], "Beef Sirloin"),
        sized(&["SHORT RIB"], "Beef Short Ribs"),
        sized(&["RIB EYE"], "Beef Rib Eye"),
        sized(&["RIB SET"], "Beef Rib Set"),
        sized(&["RIB"], "Beef Ribs"),
        sized(&["RUMP"], "Beef Rump"),
        sized(&["ROUND"], "Beef Round"),
        sized(&["LOIN"], "Beef Loin"),
        sized(&["PLATE"], "Beef Plate"),
        sized(&["CHUCK"], "Beef Chuck"),
        sized(&["BRISKET"], "Beef Brisket"),
        sized(&["SHANK"], "Beef Shank"),
        catch_all(beef_fallback),
    ],
    capture: Some(capture::beef_size),
};

static PORK: RuleTable = RuleTable {
    rules: &[
        fixed(&["BELLY"], "Pork Belly (Liempo)", None),
        fixed(&["PICNIC SHOULDER"], "Pork Picnic Shoulder (Kasim)", None),
        catch_all(pork_fallback),
    ],
    capture: None,
};

static POULTRY: RuleTable = RuleTable {
    rules: &[
        fixed(&["EGG"], "Chicken Egg", Some("Medium (56-60 grams/pc)")),
        catch_all(poultry_fallback),
    ],
    capture: None,
};

static VEGETABLES: RuleTable = RuleTable {
    rules: &[
        sized(&["BELL PEPPER", "GREEN"], "Bell Pepper (Green)"),
        sized(&["BELL PEPPER", "RED"], "Bell Pepper (Red)"),
        sized(&["BELL PEPPER"], "Bell Pepper"),
        sized(&["CABBAGE", "RARE BALL"], "Cabbage (Rare Ball)"),
        sized(&["CABBAGE", "SCORPIO"], "Cabbage (Scorpio)"),
        sized(&["CABBAGE", "WONDER BALL"], "Cabbage (Wonder Ball)"),
        sized(&["CABBAGE"], "Cabbage"),
        sized(&["LETTUCE", "GREEN ICE"], "Lettuce (Green Ice)"),
        sized(&["LETTUCE", "ICEBERG"], "Lettuce (Iceberg)"),
        sized(&["LETTUCE", "ROMAINE"], "Lettuce (Romaine)"),
        sized(&["LETTUCE"], "Lettuce"),
        sized(&["BROCCOLI"], "Broccoli"),
        sized(&["POTATO"], "White Potato"),
        sized(&["CAULIFLOWER"], "Cauliflower"),
        sized(&["CARROT"], "Carrots"),
        sized(&["CELERY"], "Celery"),
        sized(&["CHAYOTE"], "Chayote"),
        Rule {
            any: &["HABICHUELAS", "BAGUIO BEANS"],
            all: NONE,
            none: NONE,
            output: Output::Sized("Baguio Beans"),
        },
        sized(&["PECHAY", "BAGUIO"], "Pechay Baguio"),
        catch_all(vegetable_fallback),
    ],
    capture: Some(capture::vegetable_spec),
};

static SPICES: RuleTable = RuleTable {
    rules: &[
        Rule {
            any: &["CHILLI", "CHILI"],
            all: &["RED"],
            none: NONE,
            output: Output::Fixed("Chilli Red", Some("Tingala")),
        },
        Rule {
            any: &["CHILLI", "CHILI"],
            all: &["TINGALA"],
            none: NONE,
            output: Output::Fixed("Chilli Red", Some("Tingala")),
        },
        Rule {
            any: &["CHILLI", "CHILI"],
            all: &["GREEN"],
            none: NONE,
            output: Output::Fixed("Chilli Green", Some("Haba/Panigang")),
        },
        Rule {
            any: &["CHILLI", "CHILI"],
            all: &["TIGER"],
            none: NONE,
            output: Output::Fixed("Tiger Chillies", None),
        },
        fixed(&["GARLIC", "NATIVE"], "Garlic Native", None),
        fixed(&["GARLIC"], "Garlic", None),
        fixed(&["GINGER"], "Ginger", Some("Medium (150-300 gm)")),
        sized(&["ONION", "RED"], "Red Onion"),
        sized(&["ONION", "WHITE"], "White Onion"),
    ],
    capture: Some(capture::spice_size),
};

static FRUITS: RuleTable = RuleTable {
    rules: &[
        fixed(&["BANANA", "LAKATAN"], "Banana (Lakatan)", Some("8-10 pcs/kg")),
        fixed(&["BANANA", "LATUNDAN"], "Banana (Latundan)", Some("10-12 pcs/kg")),
        fixed(&["BANANA", "SABA"], "Banana (Saba)", None),
        fixed(&["MANGO", "CARABAO"], "Mango (Carabao)", Some("Ripe, 3-4 pcs/kg")),
        fixed(&["PAPAYA"], "Papaya", Some("Solo, Ripe, 2-3 pcs/kg")),
        catch_all(fruit_fallback),
    ],
    capture: Some(capture::fruit_spec),
};

static BASIC: RuleTable = RuleTable {
    rules: &[
        Rule {
            any: NONE,
            all: &["COOKING OIL"],
            none: NONE,
            output: Output::Produce(cooking_oil),
        },
        fixed(&["SUGAR", "REFINED"], "Sugar (Refined)", None),
        fixed(&["SUGAR", "WASHED"], "Sugar (Washed)", None),
        fixed(&["SUGAR", "BROWN"], "Sugar (Brown)", None),
        fixed(&["SALT", "IODIZED"], "Salt (Iodized)", None),
        fixed(&["SALT", "ROCK"], "Salt (Rock)", None),
    ],
    capture: None,
};

static OTHER_LIVESTOCK: RuleTable = RuleTable { rules: &[], capture: None };

static BEEF_SIZE_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(Large|Medium|Small|Lean|Boneless|with Bones)\b").unwrap());
static PORK_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(Local|Imported|Liempo|Kasim)\b").unwrap());
static POULTRY_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(Magnolia|Bounty Fresh|Unbranded|Fresh|Fully Dressed)\b").unwrap()
});
static VEGETABLE_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(Local|Imported|Native|Suprema Variety|Medium|Large|Small)\b").unwrap()
});
static EMPTY_PARENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\s*\)").unwrap());

fn trim_residue(name: &str) -> String {
    name.trim_matches(|c: char| matches!(c, ',' | ' ' | '(' | ')')).to_string()
}

fn beef_fallback(text: &str) -> Normalized {
    let specification = capture::beef_size(text);
    let name = sanitize(&BEEF_SIZE_WORDS.replace_all(text, ""));
    let name = name.trim_matches(|c: char| c == ',' || c == ' ');
    let name = if name.chars().count() > 2 { name.to_string() } else { "Beef".to_string() };
    Normalized { name, specification }
}

fn pork_fallback(text: &str) -> Normalized {
    let name = sanitize(&PORK_NOISE.replace_all(text, ""));
    Normalized {
        name: name.trim_matches(|c: char| c == ',' || c == ' ').to_string(),
        specification: None,
    }
}

fn poultry_fallback(text: &str) -> Normalized {
    let upper = text.to_uppercase();
    // Named brands take precedence; "Bounty Fresh" must be resolved as a
    // brand before "Fresh" is stripped as an adjective.
    let brand = if upper.contains("MAGNOLIA") {
        Some("Magnolia")
    } else if upper.contains("BOUNTY FRESH") {
        Some("Bounty Fresh")
    } else if upper.contains("UNBRANDED") {
        Some("Unbranded")
    } else {
        None
    };

    let name = sanitize(&POULTRY_NOISE.replace_all(text, ""));
    Normalized {
        name: name.trim_matches(|c: char| c == ',' || c == ' ').to_string(),
        specification: brand.map(str::to_string),
    }
}

fn vegetable_fallback(text: &str) -> Normalized {
    let specification = capture::vegetable_spec(text);
    let name = capture::strip_vegetable_spec(text);
    let name = VEGETABLE_NOISE.replace_all(&name, "");
    let name = EMPTY_PARENS.replace_all(&name, "");
    Normalized { name: trim_residue(&sanitize(&name)), specification }
}

fn fruit_fallback(text: &str) -> Normalized {
    let specification = capture::fruit_spec(text);
    let name = capture::strip_fruit_spec(text);
    Normalized { name: trim_residue(&sanitize(&name)), specification }
}

fn cooking_oil(text: &str) -> Normalized {
    let upper = text.to_uppercase();
    // Brand priority: named brands win over the generic oil-type keyword.
    let brand = if upper.contains("COCONUT") {
        "Coconut"
    } else if upper.contains("MINOLA") {
        "Minola"
    } else if upper.contains("SPRING") {
        "Spring"
    } else if upper.contains("JOLLY") || upper.contains("PALM OLEIN") {
        "Palm Olein (Jolly)"
    } else {
        "Palm"
    };
    Normalized { name: format!("Cooking Oil ({brand})"), specification: None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize_with(table: &RuleTable, text: &str) -> Option<Normalized> {
        let upper = text.to_uppercase();
        table
            .rules
            .iter()
            .find(|r| r.matches(&upper))
            .map(|r| r.produce(text, table.capture))
    }

    #[test]
    fn rib_eye_wins_over_bare_rib() {
        let n = normalize_with(&BEEF, "Rib Eye Roll Ribs").unwrap();
        assert_eq!(n.name, "Beef Rib Eye");
    }

    #[test]
    fn strip_loin_wins_over_bare_loin() {
        let n = normalize_with(&BEEF, "Striploin").unwrap();
        assert_eq!(n.name, "Beef Striploin");
    }

    #[test]
    fn beef_fallback_keeps_cleaned_name_and_size() {
        let n = normalize_with(&BEEF, "Oxtail Lean").unwrap();
        assert_eq!(n.name, "Oxtail");
        assert_eq!(n.specification.as_deref(), Some("Lean"));
    }

    #[test]
    fn indian_mackerel_resolves_to_alumahan() {
        let n = normalize_with(&FISH, "Indian Mackerel Medium").unwrap();
        assert_eq!(n.name, "Alumahan (Indian Mackerel)");
        assert_eq!(n.specification.as_deref(), Some("Medium"));
    }

    #[test]
    fn plain_mackerel_stays_mackerel() {
        let n = normalize_with(&FISH, "Mackerel").unwrap();
        assert_eq!(n.name, "Mackerel");
    }

    #[test]
    fn squid_synonym_matches() {
        let n = normalize_with(&FISH, "Pusit Large").unwrap();
        assert_eq!(n.name, "Squid");
        assert_eq!(n.specification.as_deref(), Some("Large"));
    }

    #[test]
    fn named_oil_brand_wins_over_generic_type() {
        let n = normalize_with(&BASIC, "Cooking Oil Palm Olein Minola 1 Liter").unwrap();
        assert_eq!(n.name, "Cooking Oil (Minola)");
    }

    #[test]
    fn generic_oil_type_used_without_named_brand() {
        let n = normalize_with(&BASIC, "Cooking Oil Palm Olein 350 ml").unwrap();
        assert_eq!(n.name, "Cooking Oil (Palm Olein (Jolly))");
    }

    #[test]
    fn poultry_brand_extracted_into_specification() {
        let n = normalize_with(&POULTRY, "Magnolia Whole Chicken Fully Dressed").unwrap();
        assert_eq!(n.name, "Whole Chicken");
        assert_eq!(n.specification.as_deref(), Some("Magnolia"));
    }

    #[test]
    fn chicken_egg_is_fixed_pair() {
        let n = normalize_with(&POULTRY, "Chicken Egg Medium").unwrap();
        assert_eq!(n.name, "Chicken Egg");
        assert_eq!(n.specification.as_deref(), Some("Medium (56-60 grams/pc)"));
    }

    #[test]
    fn rice_rules_match_milling_grades() {
        let n = normalize_with(&RICE, "Well Milled Rice").unwrap();
        assert_eq!(n.name, "Well Milled Rice");
        assert_eq!(n.specification.as_deref(), Some("1-19% bran streak"));
    }

    #[test]
    fn unknown_rice_variety_falls_through() {
        assert!(normalize_with(&RICE, "Red Rice Organic").is_none());
    }

    #[test]
    fn vegetable_fallback_strips_descriptor() {
        let n = normalize_with(&VEGETABLES, "Ampalaya Medium (8-10 cm)").unwrap();
        assert_eq!(n.name, "Ampalaya");
        assert!(n.specification.is_some());
    }

    #[test]
    fn spice_onion_keeps_size() {
        let n = normalize_with(&SPICES, "Red Onion Large").unwrap();
        assert_eq!(n.name, "Red Onion");
        assert_eq!(n.specification.as_deref(), Some("Large"));
    }

    #[test]
    fn other_livestock_has_no_vocabulary() {
        assert!(normalize_with(&OTHER_LIVESTOCK, "Carabeef Rump").is_none());
    }
}
