// Section-naming conventions seen in the sheets, as (patterns, suffix)
// pairs matched case-insensitively against the subject name. New
// conventions go here, not in the grouping code.
const SECTION_PATTERNS: &[(&[&str], &str)] = &[
    (&["(sec a)", "(section a)"], "-A"),
    (&["(sec b)", "(section b)"], "-B"),
];

/// Resolve the key suffix for one section name of a collided subject code.
/// Unrecognized names fall back to `-<full name>`, which is verbose but
/// keeps keys unique (two distinct names can never produce the same key).
pub fn section_suffix(name: &str) -> String {
    let lower = name.to_lowercase();
    for (patterns, suffix) in SECTION_PATTERNS {
        if patterns.iter().any(|p| lower.contains(p)) {
            return (*suffix).to_string();
        }
    }
    format!("-{}", name)
}
