//! Locale-keyed pattern tables.
//!
//! The YAML format maps each locale to an optional `and` and `or` entry:
//!
//! ```yaml
//! en:
//!   and:
//!     two: "{0} and {1}"
//!     start: "{0}, {1}"
//!     middle: "{0}, {1}"
//!     end: "{0}, and {1}"
//! my:
//!   and:
//!     two: "{0}နှင့် {1}"
//!     start: "{0}၊ {1}"
//!     middle: "{0}၊ {1}"
//!     end: "{0}နှင့် {1}"
//!     variants:
//!       - start: "{0} {1}"
//! ```
//!
//! `variants` are partial overrides of the entry. They never change what gets
//! formatted; they list outputs that platforms are known to produce instead
//! and that are accepted as equivalent.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::assemble::assemble;
use crate::locale::{locale_fallback_chain, normalize_locale};
use crate::pattern::{ConjunctionType, MalformedTemplate, PatternSet};
use crate::ListFormatError;

const MAX_LOCALES: usize = 2_000;
const MAX_LOCALE_BYTES: usize = 64;
const MAX_TEMPLATE_BYTES: usize = 1024;
const MAX_VARIANTS: usize = 16;

#[cfg(feature = "builtin-data")]
const BUILTIN_PATTERNS: &str = include_str!("../data/list_patterns.yaml");

/// Lookup of the pattern entry for a `(locale, conjunction)` pair.
///
/// Implementations must be read-only once shared.
pub trait LocalePatterns: Send + Sync {
    fn lookup(&self, locale: &str, conjunction: ConjunctionType) -> Option<&PatternEntry>;
}

/// The pattern set used for formatting plus its accepted variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternEntry {
    primary: PatternSet,
    variants: Vec<PatternSet>,
}

impl PatternEntry {
    pub fn new(primary: PatternSet) -> Self {
        Self {
            primary,
            variants: Vec::new(),
        }
    }

    /// Add an accepted variant, given as a partial override of the primary set.
    pub fn with_variant(mut self, partial: &PatternSet) -> Self {
        let full = self.primary.overlay(partial);
        self.variants.push(full);
        self
    }

    pub fn primary(&self) -> &PatternSet {
        &self.primary
    }

    pub fn variants(&self) -> &[PatternSet] {
        &self.variants
    }

    /// Every output accepted for `items`: the primary output first, then each
    /// distinct variant output.
    pub fn accepted_outputs<S: AsRef<str>>(
        &self,
        items: &[S],
    ) -> Result<Vec<String>, MalformedTemplate> {
        let mut out = vec![assemble(items, &self.primary)?];
        for variant in &self.variants {
            let s = assemble(items, variant)?;
            if !out.contains(&s) {
                out.push(s);
            }
        }
        Ok(out)
    }

    pub fn accepts<S: AsRef<str>>(
        &self,
        items: &[S],
        output: &str,
    ) -> Result<bool, MalformedTemplate> {
        Ok(self.accepted_outputs(items)?.iter().any(|s| s == output))
    }
}

#[derive(Debug, Error)]
pub enum PatternTableError {
    #[error("pattern table yaml error: {0}")]
    Yaml(String),

    #[error("pattern table limit exceeded: {0}")]
    Limit(String),
}

// `deny_unknown_fields` does not combine with `flatten`; unknown keys are
// collected and rejected in `build_entry` instead.
#[derive(Debug, Deserialize)]
struct RawEntry {
    two: Option<String>,
    start: Option<String>,
    middle: Option<String>,
    end: Option<String>,
    #[serde(default)]
    variants: Vec<PatternSet>,
    #[serde(flatten)]
    unknown: HashMap<String, serde_yaml::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLocale {
    and: Option<RawEntry>,
    or: Option<RawEntry>,
}

#[derive(Clone, Debug, Default)]
struct LocaleEntries {
    and: Option<PatternEntry>,
    or: Option<PatternEntry>,
}

impl LocaleEntries {
    fn get(&self, conjunction: ConjunctionType) -> Option<&PatternEntry> {
        match conjunction {
            ConjunctionType::And => self.and.as_ref(),
            ConjunctionType::Or => self.or.as_ref(),
        }
    }

    fn slot(&mut self, conjunction: ConjunctionType) -> &mut Option<PatternEntry> {
        match conjunction {
            ConjunctionType::And => &mut self.and,
            ConjunctionType::Or => &mut self.or,
        }
    }
}

fn is_valid_locale_key(key: &str) -> bool {
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// An immutable-once-shared map from `(locale, conjunction)` to pattern entries.
#[derive(Clone, Debug, Default)]
pub struct PatternTable {
    entries: HashMap<String, LocaleEntries>,
}

impl PatternTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The embedded CLDR-derived table.
    #[cfg(feature = "builtin-data")]
    pub fn builtin() -> Result<Self, PatternTableError> {
        Self::parse(BUILTIN_PATTERNS)
    }

    pub fn insert(&mut self, locale: &str, conjunction: ConjunctionType, entry: PatternEntry) {
        let loc = normalize_locale(locale);
        *self.entries.entry(loc).or_default().slot(conjunction) = Some(entry);
    }

    /// Merge `other` into `self`; entries in `other` win.
    pub fn extend(&mut self, other: PatternTable) {
        for (loc, entries) in other.entries {
            let cur = self.entries.entry(loc).or_default();
            if entries.and.is_some() {
                cur.and = entries.and;
            }
            if entries.or.is_some() {
                cur.or = entries.or;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Exact lookup without walking the fallback chain.
    pub fn get(&self, locale: &str, conjunction: ConjunctionType) -> Option<&PatternEntry> {
        self.entries.get(&normalize_locale(locale))?.get(conjunction)
    }

    /// Parse a YAML pattern table.
    pub fn parse(src: &str) -> Result<Self, PatternTableError> {
        let raw: HashMap<String, RawLocale> = serde_yaml::from_str(src)
            .map_err(|e| PatternTableError::Yaml(format!("yaml parse error: {e}")))?;

        if raw.len() > MAX_LOCALES {
            return Err(PatternTableError::Limit(format!(
                "too many locales (max {MAX_LOCALES})"
            )));
        }

        let mut table = Self::new();
        for (key, locale) in raw {
            let loc = normalize_locale(&key);
            if !is_valid_locale_key(&loc) {
                return Err(PatternTableError::Yaml(format!(
                    "invalid locale `{key}` (allowed: [A-Za-z0-9][A-Za-z0-9_-]*)"
                )));
            }
            if loc.len() > MAX_LOCALE_BYTES {
                return Err(PatternTableError::Limit(format!(
                    "locale `{key}` is too long (max {MAX_LOCALE_BYTES} bytes)"
                )));
            }

            for (conjunction, raw_entry) in [
                (ConjunctionType::And, locale.and),
                (ConjunctionType::Or, locale.or),
            ] {
                let Some(raw_entry) = raw_entry else {
                    continue;
                };
                let entry = build_entry(&loc, conjunction, raw_entry)?;
                table.insert(&loc, conjunction, entry);
            }
        }

        debug!(locales = table.len(), "PatternTable::parse: loaded");
        Ok(table)
    }

    /// Check every template of every entry, including variants.
    pub fn check(&self) -> Result<(), ListFormatError> {
        for (loc, entries) in &self.entries {
            for conjunction in [ConjunctionType::And, ConjunctionType::Or] {
                let Some(entry) = entries.get(conjunction) else {
                    continue;
                };
                for set in std::iter::once(&entry.primary).chain(&entry.variants) {
                    set.validate()
                        .map_err(|bad| ListFormatError::malformed(loc, conjunction, bad))?;
                }
            }
        }
        Ok(())
    }
}

fn build_entry(
    locale: &str,
    conjunction: ConjunctionType,
    raw: RawEntry,
) -> Result<PatternEntry, PatternTableError> {
    if let Some(field) = raw.unknown.keys().next() {
        return Err(PatternTableError::Yaml(format!(
            "unknown field `{field}` in `{locale}.{conjunction}`"
        )));
    }
    if raw.variants.len() > MAX_VARIANTS {
        return Err(PatternTableError::Limit(format!(
            "too many variants in `{locale}.{conjunction}` (max {MAX_VARIANTS})"
        )));
    }

    let primary = PatternSet {
        two: raw.two,
        start: raw.start,
        middle: raw.middle,
        end: raw.end,
    };

    let too_long = std::iter::once(&primary)
        .chain(&raw.variants)
        .flat_map(PatternSet::roles)
        .any(|t| t.len() > MAX_TEMPLATE_BYTES);
    if too_long {
        return Err(PatternTableError::Limit(format!(
            "template in `{locale}.{conjunction}` is too long (max {MAX_TEMPLATE_BYTES} bytes)"
        )));
    }

    Ok(raw
        .variants
        .iter()
        .fold(PatternEntry::new(primary), PatternEntry::with_variant))
}

impl LocalePatterns for PatternTable {
    fn lookup(&self, locale: &str, conjunction: ConjunctionType) -> Option<&PatternEntry> {
        let chain = locale_fallback_chain(locale);
        for (depth, l) in chain.iter().enumerate() {
            if let Some(entry) = self.get(l, conjunction) {
                if depth > 0 {
                    debug!(
                        requested = %locale,
                        resolved = %l,
                        %conjunction,
                        "PatternTable::lookup: fell back"
                    );
                }
                return Some(entry);
            }
        }
        None
    }
}
