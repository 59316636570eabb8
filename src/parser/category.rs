// The 13 section headers printed in the price index, as a closed set.
use crate::model::Origin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ImportedCommercialRice,
    LocalCommercialRice,
    CornProducts,
    FishProducts,
    BeefMeatProducts,
    PorkMeatProducts,
    OtherLivestockMeatProducts,
    PoultryProducts,
    LowlandVegetables,
    HighlandVegetables,
    Spices,
    Fruits,
    OtherBasicCommodities,
}

pub const ALL_CATEGORIES: [Category; 13] = [
    Category::ImportedCommercialRice,
    Category::LocalCommercialRice,
    Category::CornProducts,
    Category::FishProducts,
    Category::BeefMeatProducts,
    Category::PorkMeatProducts,
    Category::OtherLivestockMeatProducts,
    Category::PoultryProducts,
    Category::LowlandVegetables,
    Category::HighlandVegetables,
    Category::Spices,
    Category::Fruits,
    Category::OtherBasicCommodities,
];

impl Category {
    /// Header label exactly as printed in the document.
    pub fn label(self) -> &'static str {
        match self {
            Category::ImportedCommercialRice => "IMPORTED COMMERCIAL RICE",
            Category::LocalCommercialRice => "LOCAL COMMERCIAL RICE",
            Category::CornProducts => "CORN PRODUCTS",
            Category::FishProducts => "FISH PRODUCTS",
            Category::BeefMeatProducts => "BEEF MEAT PRODUCTS",
            Category::PorkMeatProducts => "PORK MEAT PRODUCTS",
            Category::OtherLivestockMeatProducts => "OTHER LIVESTOCK MEAT PRODUCTS",
            Category::PoultryProducts => "POULTRY PRODUCTS",
            Category::LowlandVegetables => "LOWLAND VEGETABLES",
            Category::HighlandVegetables => "HIGHLAND VEGETABLES",
            Category::Spices => "SPICES",
            Category::Fruits => "FRUITS",
            Category::OtherBasicCommodities => "OTHER BASIC COMMODITIES",
        }
    }

    /// Label with the Local/Imported qualifier stripped, as emitted in
    /// output records.
    pub fn output_label(self) -> &'static str {
        match self {
            Category::ImportedCommercialRice | Category::LocalCommercialRice => "COMMERCIAL RICE",
            other => other.label(),
        }
    }

    /// Origin qualifier folded into the two rice headers.
    pub fn origin_qualifier(self) -> Option<Origin> {
        match self {
            Category::ImportedCommercialRice => Some(Origin::Imported),
            Category::LocalCommercialRice => Some(Origin::Local),
            _ => None,
        }
    }

    /// Case-insensitive substring match of a line against the label set.
    pub fn match_line(line: &str) -> Option<Category> {
        let upper = line.to_uppercase();
        ALL_CATEGORIES.into_iter().find(|c| upper.contains(c.label()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_header_case_insensitively() {
        assert_eq!(Category::match_line("Fish Products"), Some(Category::FishProducts));
        assert_eq!(
            Category::match_line("  IMPORTED COMMERCIAL RICE  "),
            Some(Category::ImportedCommercialRice)
        );
    }

    #[test]
    fn rejects_non_header_lines() {
        assert_eq!(Category::match_line("Bangus Large"), None);
        assert_eq!(Category::match_line("RICE"), None);
    }

    #[test]
    fn rice_qualifiers_are_stripped_from_output_label() {
        assert_eq!(Category::ImportedCommercialRice.output_label(), "COMMERCIAL RICE");
        assert_eq!(Category::LocalCommercialRice.output_label(), "COMMERCIAL RICE");
        assert_eq!(Category::FishProducts.output_label(), "FISH PRODUCTS");
    }

    #[test]
    fn rice_qualifiers_carry_origin() {
        assert_eq!(
            Category::ImportedCommercialRice.origin_qualifier(),
            Some(Origin::Imported)
        );
        assert_eq!(Category::LocalCommercialRice.origin_qualifier(), Some(Origin::Local));
        assert_eq!(Category::Spices.origin_qualifier(), None);
    }

    #[test]
    fn every_label_matches_itself() {
        for category in ALL_CATEGORIES {
            assert_eq!(Category::match_line(category.label()), Some(category));
        }
    }
}
