//! Native list formatting: the capability trait, the locales whose native
//! output is known to match the pattern table, and the process-wide switch
//! that allows delegation at all.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::locale::normalize_locale;
use crate::pattern::ConjunctionType;
use crate::ListFormatError;

static NATIVE_DELEGATION: AtomicBool = AtomicBool::new(false);

/// Allow or forbid delegation to a native formatter, process-wide.
///
/// Only affects `ListFormat` instances constructed afterwards. A
/// `FormatContext` can override it with `with_native_delegation`.
pub fn set_native_delegation(enabled: bool) {
    let prev = NATIVE_DELEGATION.swap(enabled, Ordering::Relaxed);
    if prev != enabled {
        debug!("set_native_delegation: {} -> {}", prev, enabled);
    }
}

pub fn native_delegation_enabled() -> bool {
    NATIVE_DELEGATION.load(Ordering::Relaxed)
}

/// A platform list formatter.
///
/// Output must match the pattern table for every locale in
/// [`VERIFIED_NATIVE_LOCALES`]; `conformance::check` tests exactly that.
pub trait NativeListFormat: Send + Sync {
    fn supports(&self, locale: &str) -> bool;

    fn format(
        &self,
        items: &[&str],
        conjunction: ConjunctionType,
        locale: &str,
    ) -> Result<String, ListFormatError>;
}

/// Locales whose native output matches the pattern table across platforms.
///
/// Left out on purpose:
/// - Burmese (`my`): platforms disagree on its separators.
/// - Spanish (`es-*`) and Hebrew (`he-*`): native formatters change the
///   conjunction depending on the next item (`y` becomes `e` before "Italia"),
///   which a fixed template cannot express.
/// - `en-CA` and `en-AE`: regional overrides of the `en-001` patterns.
pub const VERIFIED_NATIVE_LOCALES: &[&str] = &[
    "am", "ar", "ar-001", "ar-AE", "ar-BH", "ar-DJ", "ar-DZ", "ar-EG", "ar-EH", "ar-ER", "ar-IL",
    "ar-IQ", "ar-JO", "ar-KM", "ar-KW", "ar-LB", "ar-LY", "ar-MA", "ar-MR", "ar-OM", "ar-PS",
    "ar-QA", "ar-SA", "ar-SD", "ar-SO", "ar-SS", "ar-SY", "ar-TD", "ar-TN", "ar-YE", "bg", "bg-BG",
    "bn", "bn-BD", "bn-IN", "bs-Cyrl", "bs-Cyrl-BA", "ca", "ca-AD", "ca-ES", "ca-FR", "ca-IT",
    "cs", "cs-CZ", "da", "da-DK", "da-GL", "de", "de-AT", "de-BE", "de-CH", "de-DE", "de-IT",
    "de-LI", "de-LU", "el", "el-CY", "el-GR", "en", "en-001", "en-150", "en-AG", "en-AI", "en-AS",
    "en-AT", "en-AU", "en-BB", "en-BE", "en-BI", "en-BM", "en-BS", "en-BW", "en-BZ", "en-CC",
    "en-CH", "en-CK", "en-CM", "en-CX", "en-CY", "en-DE", "en-DG", "en-DK", "en-DM", "en-ER",
    "en-FI", "en-FJ", "en-FK", "en-FM", "en-GB", "en-GD", "en-GG", "en-GH", "en-GI", "en-GM",
    "en-GU", "en-GY", "en-HK", "en-IE", "en-IL", "en-IM", "en-IN", "en-IO", "en-JE", "en-JM",
    "en-KE", "en-KI", "en-KN", "en-KY", "en-LC", "en-LR", "en-LS", "en-MG", "en-MH", "en-MO",
    "en-MP", "en-MS", "en-MT", "en-MU", "en-MW", "en-MY", "en-NA", "en-NF", "en-NG", "en-NL",
    "en-NR", "en-NU", "en-NZ", "en-PG", "en-PH", "en-PK", "en-PN", "en-PR", "en-PW", "en-RW",
    "en-SB", "en-SC", "en-SD", "en-SE", "en-SG", "en-SH", "en-SI", "en-SL", "en-SS", "en-SX",
    "en-SZ", "en-TC", "en-TK", "en-TO", "en-TT", "en-TV", "en-TZ", "en-UG", "en-UM", "en-US",
    "en-VC", "en-VG", "en-VI", "en-VU", "en-WS", "en-ZA", "en-ZM", "en-ZW", "et", "et-EE", "fa",
    "fa-AF", "fa-IR", "fi", "fi-FI", "fil", "fil-PH", "fr", "fr-BE", "fr-BF", "fr-BI", "fr-BJ",
    "fr-BL", "fr-CA", "fr-CD", "fr-CF", "fr-CG", "fr-CH", "fr-CI", "fr-CM", "fr-DJ", "fr-DZ",
    "fr-FR", "fr-GA", "fr-GF", "fr-GN", "fr-GP", "fr-GQ", "fr-HT", "fr-KM", "fr-LU", "fr-MA",
    "fr-MC", "fr-MF", "fr-MG", "fr-ML", "fr-MQ", "fr-MR", "fr-MU", "fr-NC", "fr-NE", "fr-PF",
    "fr-PM", "fr-RE", "fr-RW", "fr-SC", "fr-SN", "fr-SY", "fr-TD", "fr-TG", "fr-TN", "fr-VU",
    "fr-WF", "fr-YT", "gu", "gu-IN", "hi", "hi-IN", "hr", "hr-BA", "hr-HR", "hu", "hu-HU", "id",
    "id-ID", "it", "it-CH", "it-IT", "it-SM", "it-VA", "ja", "ja-JP", "kn", "kn-IN", "ko", "ko-KP",
    "ko-KR", "lt", "lt-LT", "lv", "lv-LV", "ml", "ml-IN", "mr", "mr-IN", "ms", "ms-BN", "ms-ID",
    "ms-MY", "ms-SG", "nb", "nl", "nl-AW", "nl-BE", "nl-BQ", "nl-CW", "nl-NL", "nl-SR", "nl-SX",
    "no", "pl", "pl-PL", "pt", "pt-AO", "pt-BR", "pt-CH", "pt-CV", "pt-GQ", "pt-GW", "pt-LU",
    "pt-MO", "pt-MZ", "pt-PT", "pt-ST", "pt-TL", "ro", "ro-MD", "ro-RO", "ru", "ru-BY", "ru-KG",
    "ru-KZ", "ru-MD", "ru-RU", "ru-UA", "sk", "sk-SK", "sl", "sl-SI", "sr", "sr-Cyrl",
    "sr-Cyrl-BA", "sr-Cyrl-ME", "sr-Cyrl-RS", "sr-Cyrl-XK", "sr-Latn", "sr-Latn-BA", "sr-Latn-ME",
    "sr-Latn-RS", "sr-Latn-XK", "sv", "sv-AX", "sv-FI", "sv-SE", "sw", "sw-CD", "sw-KE", "sw-TZ",
    "sw-UG", "ta", "ta-IN", "ta-LK", "ta-MY", "ta-SG", "te", "te-IN", "th", "th-TH", "tr", "tr-CY",
    "tr-TR", "uk", "uk-UA", "vi", "vi-VN", "zh", "zh-Hans", "zh-Hans-CN", "zh-Hans-HK",
    "zh-Hans-MO", "zh-Hans-SG", "zh-Hant", "zh-Hant-HK", "zh-Hant-MO", "zh-Hant-TW",
];

/// Membership in [`VERIFIED_NATIVE_LOCALES`], after `_` -> `-` normalization.
pub fn is_verified_native_locale(locale: &str) -> bool {
    let locale = normalize_locale(locale);
    VERIFIED_NATIVE_LOCALES.contains(&locale.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verified_locales() {
        assert!(is_verified_native_locale("en"));
        assert!(is_verified_native_locale("zh-Hans"));
        assert!(is_verified_native_locale("uk-UA"));
        assert!(!is_verified_native_locale("my"));
        assert!(!is_verified_native_locale("es"));
        assert!(is_verified_native_locale("en_US"));
        assert!(is_verified_native_locale(" zh_Hant_HK "));
    }

    #[test]
    fn verified_locales_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for loc in VERIFIED_NATIVE_LOCALES {
            assert!(seen.insert(*loc), "duplicate verified locale {loc}");
        }
    }
}
