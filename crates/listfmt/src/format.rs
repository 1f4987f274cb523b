//! `ListFormat` and the two formatting strategies behind it.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::assemble::assemble;
use crate::locale::normalize_locale;
use crate::native::{is_verified_native_locale, native_delegation_enabled, NativeListFormat};
use crate::pattern::{ConjunctionType, PatternSet};
use crate::state::ListFormatState;
use crate::table::LocalePatterns;
use crate::ListFormatError;

#[cfg(feature = "builtin-data")]
use crate::table::PatternTable;

/// Which strategy a [`ListFormat`] settled on at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    Native,
    Table,
}

/// A formatting strategy bound to one `(locale, conjunction)` pair.
pub trait Formatter: Send + Sync {
    fn format_list(&self, items: &[&str]) -> Result<String, ListFormatError>;

    fn backend(&self) -> Backend;
}

/// Formats by folding items through a cached [`PatternSet`].
#[derive(Clone, Debug)]
pub struct TableFormatter {
    locale: String,
    conjunction: ConjunctionType,
    patterns: PatternSet,
}

impl TableFormatter {
    pub fn new(
        locale: impl Into<String>,
        conjunction: ConjunctionType,
        patterns: PatternSet,
    ) -> Self {
        Self {
            locale: locale.into(),
            conjunction,
            patterns,
        }
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }
}

impl Formatter for TableFormatter {
    fn format_list(&self, items: &[&str]) -> Result<String, ListFormatError> {
        assemble(items, &self.patterns)
            .map_err(|bad| ListFormatError::malformed(&self.locale, self.conjunction, bad))
    }

    fn backend(&self) -> Backend {
        Backend::Table
    }
}

/// Formats by delegating to a [`NativeListFormat`].
#[derive(Clone)]
pub struct NativeFormatter {
    locale: String,
    conjunction: ConjunctionType,
    native: Arc<dyn NativeListFormat>,
}

impl NativeFormatter {
    pub fn new(
        locale: impl Into<String>,
        conjunction: ConjunctionType,
        native: Arc<dyn NativeListFormat>,
    ) -> Self {
        Self {
            locale: locale.into(),
            conjunction,
            native,
        }
    }
}

impl Formatter for NativeFormatter {
    fn format_list(&self, items: &[&str]) -> Result<String, ListFormatError> {
        self.native.format(items, self.conjunction, &self.locale)
    }

    fn backend(&self) -> Backend {
        Backend::Native
    }
}

/// Everything a [`ListFormat`] resolves against: the pattern data, an
/// optional native formatter and the rules for when to use it.
#[derive(Clone)]
pub struct FormatContext {
    patterns: Arc<dyn LocalePatterns>,
    native: Option<Arc<dyn NativeListFormat>>,
    native_delegation: Option<bool>,
    verified_locales: Option<Arc<HashSet<String>>>,
}

impl FormatContext {
    pub fn new(patterns: Arc<dyn LocalePatterns>) -> Self {
        Self {
            patterns,
            native: None,
            native_delegation: None,
            verified_locales: None,
        }
    }

    /// A context over the embedded pattern table.
    #[cfg(feature = "builtin-data")]
    pub fn builtin() -> Result<Self, ListFormatError> {
        Ok(Self::new(Arc::new(PatternTable::builtin()?)))
    }

    pub fn with_native(mut self, native: Arc<dyn NativeListFormat>) -> Self {
        self.native = Some(native);
        self
    }

    /// Override the process-wide delegation switch for this context.
    pub fn with_native_delegation(mut self, enabled: bool) -> Self {
        self.native_delegation = Some(enabled);
        self
    }

    /// Replace the built-in verified-native locale list.
    pub fn with_verified_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = locales
            .into_iter()
            .map(|l| {
                let l: String = l.into();
                normalize_locale(&l)
            })
            .collect();
        self.verified_locales = Some(Arc::new(set));
        self
    }

    pub fn patterns(&self) -> &dyn LocalePatterns {
        self.patterns.as_ref()
    }

    pub fn native(&self) -> Option<&Arc<dyn NativeListFormat>> {
        self.native.as_ref()
    }

    pub fn native_delegation(&self) -> bool {
        self.native_delegation.unwrap_or_else(native_delegation_enabled)
    }

    pub fn is_verified_locale(&self, locale: &str) -> bool {
        match &self.verified_locales {
            Some(set) => set.contains(&normalize_locale(locale)),
            None => is_verified_native_locale(locale),
        }
    }

    /// The native formatter to use for `locale`, if delegation applies.
    fn native_for(&self, locale: &str) -> Option<&Arc<dyn NativeListFormat>> {
        if !self.native_delegation() {
            return None;
        }
        let native = self.native.as_ref()?;
        if !self.is_verified_locale(locale) {
            return None;
        }
        if !native.supports(locale) {
            warn!(
                locale = %locale,
                "verified native list format locale is not supported by the native formatter"
            );
            return None;
        }
        Some(native)
    }

    fn table_formatter(
        &self,
        locale: &str,
        conjunction: ConjunctionType,
    ) -> Option<TableFormatter> {
        let entry = self.patterns.lookup(locale, conjunction)?;
        Some(TableFormatter::new(
            locale,
            conjunction,
            entry.primary().clone(),
        ))
    }

    fn select(
        &self,
        locale: &str,
        conjunction: ConjunctionType,
    ) -> Result<Box<dyn Formatter>, ListFormatError> {
        if let Some(native) = self.native_for(locale) {
            debug!(locale = %locale, %conjunction, "ListFormat: native backend");
            return Ok(Box::new(NativeFormatter::new(
                locale,
                conjunction,
                Arc::clone(native),
            )));
        }

        if let Some(table) = self.table_formatter(locale, conjunction) {
            debug!(locale = %locale, %conjunction, "ListFormat: table backend");
            return Ok(Box::new(table));
        }

        Err(ListFormatError::UnsupportedLocale {
            locale: locale.to_string(),
            conjunction,
        })
    }
}

impl fmt::Debug for FormatContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatContext")
            .field("native", &self.native.is_some())
            .field("native_delegation", &self.native_delegation)
            .field(
                "verified_locales",
                &self.verified_locales.as_ref().map(|s| s.len()),
            )
            .finish_non_exhaustive()
    }
}

/// Construction options for [`ListFormat`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListFormatConfig {
    #[serde(rename = "type")]
    pub conjunction: ConjunctionType,
}

impl ListFormatConfig {
    pub fn and() -> Self {
        Self {
            conjunction: ConjunctionType::And,
        }
    }

    pub fn or() -> Self {
        Self {
            conjunction: ConjunctionType::Or,
        }
    }
}

/// Formats item lists for one locale and conjunction type.
///
/// The strategy (native or pattern table) is chosen once at construction;
/// an instance never changes afterwards and can be shared across threads.
pub struct ListFormat {
    locale: String,
    conjunction: ConjunctionType,
    formatter: Box<dyn Formatter>,
}

impl ListFormat {
    /// Bind to the ambient locale and context of the global [`ListFormatState`].
    pub fn new(config: ListFormatConfig) -> Result<Self, ListFormatError> {
        let state = ListFormatState::try_get().ok_or(ListFormatError::NotInitialized)?;
        Self::with_context(&state.locale(), config, state.context())
    }

    pub fn with_context(
        locale: &str,
        config: ListFormatConfig,
        context: &FormatContext,
    ) -> Result<Self, ListFormatError> {
        let locale = normalize_locale(locale);
        let formatter = context.select(&locale, config.conjunction)?;
        Ok(Self {
            locale,
            conjunction: config.conjunction,
            formatter,
        })
    }

    pub fn format<S: AsRef<str>>(&self, items: &[S]) -> Result<String, ListFormatError> {
        let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
        self.formatter.format_list(&items)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn conjunction(&self) -> ConjunctionType {
        self.conjunction
    }

    pub fn backend(&self) -> Backend {
        self.formatter.backend()
    }
}

impl fmt::Debug for ListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListFormat")
            .field("locale", &self.locale)
            .field("conjunction", &self.conjunction)
            .field("backend", &self.backend())
            .finish()
    }
}
