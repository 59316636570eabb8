/// Derives the measurement unit from commodity identity and the
/// specification text. Pure and total; everything that is not an egg or
/// a liquid oil sells per kilogram.
pub fn resolve_unit(spec_text: &str, canonical_name: &str) -> String {
    let upper_spec = spec_text.to_uppercase();
    let upper_name = canonical_name.to_uppercase();

    if upper_name.contains("EGG") && upper_name.contains("CHICKEN") {
        return "pc".to_string();
    }

    if upper_name.contains("COOKING OIL") {
        if upper_spec.contains("350") && upper_spec.contains("ML") {
            return "350 ml".to_string();
        }
        if upper_spec.contains("500") && upper_spec.contains("ML") {
            return "500 ml".to_string();
        }
        if upper_spec.contains('1') && (upper_spec.contains("LITER") || upper_spec.contains('L')) {
            return "1 L".to_string();
        }
        return "L".to_string();
    }

    "kg".to_string()
}
