use icu_list::{ListFormatter, ListLength};
use icu_locid::Locale;

use crate::native::NativeListFormat;
use crate::pattern::ConjunctionType;
use crate::ListFormatError;

fn parse_locale(locale: &str) -> Result<Locale, ListFormatError> {
    locale
        .parse()
        .map_err(|e| ListFormatError::Native(format!("invalid locale `{}`: {}", locale, e)))
}

/// Native list formatting backed by ICU4X compiled data (wide length).
///
/// ICU4X falls back to root data for locales it does not know, so `supports`
/// only checks that the identifier parses; eligibility is decided by the
/// verified-locale list.
#[derive(Clone, Copy, Debug, Default)]
pub struct IcuListFormat;

impl IcuListFormat {
    pub fn new() -> Self {
        Self
    }

    fn formatter(
        locale: &str,
        conjunction: ConjunctionType,
    ) -> Result<ListFormatter, ListFormatError> {
        let loc = parse_locale(locale)?;
        let res = match conjunction {
            ConjunctionType::And => {
                ListFormatter::try_new_and_with_length(&(&loc).into(), ListLength::Wide)
            }
            ConjunctionType::Or => {
                ListFormatter::try_new_or_with_length(&(&loc).into(), ListLength::Wide)
            }
        };
        res.map_err(|e| ListFormatError::Native(format!("icu list data for `{}`: {}", locale, e)))
    }
}

impl NativeListFormat for IcuListFormat {
    fn supports(&self, locale: &str) -> bool {
        parse_locale(locale).is_ok()
    }

    fn format(
        &self,
        items: &[&str],
        conjunction: ConjunctionType,
        locale: &str,
    ) -> Result<String, ListFormatError> {
        let formatter = Self::formatter(locale, conjunction)?;
        Ok(formatter.format_to_string(items.iter()))
    }
}
