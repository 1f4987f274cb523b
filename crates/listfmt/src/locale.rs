/// Normalize locale identifiers to a canonical-ish form for table lookup.
///
/// - Converts `_` to `-` (POSIX and Android report `en_US`).
/// - Trims whitespace.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-")
}

/// CLDR parent locales that differ from plain subtag truncation.
///
/// Only the locales that inherit list data through a non-truncation parent
/// are listed. `en-150` itself resolves to `en-001`.
const PARENT_LOCALES: &[(&str, &str)] = &[
    ("en-150", "en-001"),
    ("en-AT", "en-150"),
    ("en-BE", "en-150"),
    ("en-CH", "en-150"),
    ("en-DE", "en-150"),
    ("en-DK", "en-150"),
    ("en-FI", "en-150"),
    ("en-NL", "en-150"),
    ("en-SE", "en-150"),
    ("en-SI", "en-150"),
    ("zh-Hant-MO", "zh-Hant-HK"),
];

/// Children of `en-001` (international English, no serial comma).
const EN_001_CHILDREN: &[&str] = &[
    "AG", "AI", "AU", "BB", "BM", "BS", "BW", "BZ", "CA", "CC", "CK", "CM", "CX", "CY", "DG",
    "DM", "ER", "FJ", "FK", "FM", "GB", "GD", "GG", "GH", "GI", "GM", "GY", "HK", "IE", "IL",
    "IM", "IN", "IO", "JE", "JM", "KE", "KI", "KN", "KY", "LC", "LR", "LS", "MG", "MO", "MS",
    "MT", "MU", "MV", "MW", "MY", "NA", "NF", "NG", "NR", "NU", "NZ", "PG", "PK", "PN", "PW",
    "RW", "SB", "SC", "SD", "SG", "SH", "SL", "SS", "SX", "SZ", "TC", "TK", "TO", "TT", "TV",
    "TZ", "UG", "VC", "VG", "VU", "WS", "ZA", "ZM", "ZW",
];

/// The CLDR parent of `locale` when it is not the truncated identifier.
pub fn parent_locale(locale: &str) -> Option<&'static str> {
    if let Some((_, parent)) = PARENT_LOCALES.iter().find(|(child, _)| *child == locale) {
        return Some(parent);
    }
    match locale.split_once('-') {
        Some(("en", region)) if EN_001_CHILDREN.contains(&region) => Some("en-001"),
        _ => None,
    }
}

/// Create a fallback chain for pattern table lookup.
///
/// Each step takes the CLDR parent where one is defined and otherwise drops
/// the trailing subtag.
///
/// Example:
/// - `zh-Hans-CN` -> `["zh-Hans-CN", "zh-Hans", "zh"]`
/// - `uk_UA` -> `["uk-UA", "uk"]`
/// - `en-AT` -> `["en-AT", "en-150", "en-001", "en"]`
///
/// There is no hard fallback to another language: list grammar differs too
/// much between languages for a substitute to be correct.
pub fn locale_fallback_chain(locale: &str) -> Vec<String> {
    let l = normalize_locale(locale);
    let mut chain = Vec::new();

    let mut cur = l.as_str();
    while !cur.is_empty() {
        chain.push(cur.to_string());
        if let Some(parent) = parent_locale(cur) {
            cur = parent;
            continue;
        }
        match cur.rfind('-') {
            Some(idx) => cur = &cur[..idx],
            None => break,
        }
    }
    chain
}
