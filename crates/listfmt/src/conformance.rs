//! Native/table equivalence checks.
//!
//! A locale may only be listed as verified-native if, for every item list,
//! the native formatter produces one of the outputs the pattern table
//! accepts for it.

use thiserror::Error;

use crate::format::FormatContext;
use crate::pattern::ConjunctionType;
use crate::ListFormatError;

#[derive(Debug, Error)]
pub enum ConformanceError {
    #[error("no native list formatter supports `{locale}`")]
    NativeUnavailable { locale: String },

    #[error("native output for `{locale}` ({conjunction}) diverges: got {native:?}, accepted {accepted:?}")]
    Divergent {
        locale: String,
        conjunction: ConjunctionType,
        native: String,
        accepted: Vec<String>,
    },

    #[error(transparent)]
    Format(#[from] ListFormatError),
}

/// Format `items` through both paths and compare.
///
/// Returns the native output when it is in the table's accepted output set.
pub fn check<S: AsRef<str>>(
    context: &FormatContext,
    locale: &str,
    conjunction: ConjunctionType,
    items: &[S],
) -> Result<String, ConformanceError> {
    let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();

    let native = context
        .native()
        .filter(|n| n.supports(locale))
        .ok_or_else(|| ConformanceError::NativeUnavailable {
            locale: locale.to_string(),
        })?;
    let native_out = native.format(&items, conjunction, locale)?;

    let entry = context.patterns().lookup(locale, conjunction).ok_or_else(|| {
        ListFormatError::UnsupportedLocale {
            locale: locale.to_string(),
            conjunction,
        }
    })?;
    let accepted = entry
        .accepted_outputs(&items)
        .map_err(|bad| ListFormatError::malformed(locale, conjunction, bad))?;

    if accepted.contains(&native_out) {
        Ok(native_out)
    } else {
        Err(ConformanceError::Divergent {
            locale: locale.to_string(),
            conjunction,
            native: native_out,
            accepted,
        })
    }
}
