//! Locale-aware list formatting
//!
//! Turns `["a", "b", "c"]` into `"a, b, and c"`, `"a, b, or c"` or
//! `"a、b和c"` depending on locale and conjunction type.
//!
//! Two strategies behind one API:
//! - `table`: CLDR-style `two`/`start`/`middle`/`end` templates folded over
//!   the items (always available)
//! - `native`: a platform formatter (`icu` feature for ICU4X), used only
//!   for locales whose native output is verified to match the table
//!
//! ```
//! use std::sync::Arc;
//! use listfmt::{
//!     ConjunctionType, FormatContext, ListFormat, ListFormatConfig, PatternEntry, PatternSet,
//!     PatternTable,
//! };
//!
//! let mut table = PatternTable::new();
//! table.insert(
//!     "en",
//!     ConjunctionType::And,
//!     PatternEntry::new(PatternSet::new("{0} and {1}", "{0}, {1}", "{0}, {1}", "{0}, and {1}")),
//! );
//! let ctx = FormatContext::new(Arc::new(table));
//!
//! let lf = ListFormat::with_context("en", ListFormatConfig::default(), &ctx).unwrap();
//! assert_eq!(lf.format(&["Motorcycle", "bus", "car"]).unwrap(), "Motorcycle, bus, and car");
//! ```

mod assemble;
pub mod conformance;
mod error;
mod format;
mod locale;
mod native;
mod pattern;
mod state;
mod table;

#[cfg(feature = "icu")]
mod icu;

pub use assemble::assemble;
pub use error::ListFormatError;
pub use format::{
    Backend, FormatContext, Formatter, ListFormat, ListFormatConfig, NativeFormatter,
    TableFormatter,
};
pub use locale::{locale_fallback_chain, normalize_locale, parent_locale};
pub use native::{
    is_verified_native_locale, native_delegation_enabled, set_native_delegation,
    NativeListFormat, VERIFIED_NATIVE_LOCALES,
};
pub use pattern::{
    ConjunctionType, MalformedTemplate, PatternSet, Template, TemplateDefect, TemplateRole,
};
pub use state::ListFormatState;
pub use table::{LocalePatterns, PatternEntry, PatternTable, PatternTableError};

#[cfg(feature = "icu")]
pub use icu::IcuListFormat;

/// Format `items` with the ambient [`ListFormatState`].
///
/// Shorthand for `ListFormat::new(config)?.format(items)`; build a
/// [`ListFormat`] once when formatting many lists.
pub fn format_list<S: AsRef<str>>(
    items: &[S],
    config: ListFormatConfig,
) -> Result<String, ListFormatError> {
    ListFormat::new(config)?.format(items)
}
