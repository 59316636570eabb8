/// Strips C0/C1 control characters, collapses whitespace runs to single
/// spaces and trims both ends. Idempotent.
pub fn sanitize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !c.is_control()).collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
