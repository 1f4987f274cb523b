use std::sync::{OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::format::FormatContext;
use crate::locale::normalize_locale;

/// Global list-format singleton.
static LIST_FORMAT_STATE: OnceLock<ListFormatState> = OnceLock::new();

const DEFAULT_LOCALE: &str = "en";

/// Ambient locale and format context used by [`crate::ListFormat::new`].
pub struct ListFormatState {
    locale: RwLock<String>,
    context: FormatContext,
}

impl ListFormatState {
    /// Initialize the global state.
    ///
    /// Safe to call multiple times; the first call wins. The context must be
    /// fully populated here: it is never mutated afterwards.
    pub fn init(locale: impl Into<String>, context: FormatContext) {
        let loc = normalize_locale(&locale.into());
        let st = ListFormatState {
            locale: RwLock::new(if loc.is_empty() {
                DEFAULT_LOCALE.to_string()
            } else {
                loc
            }),
            context,
        };

        if LIST_FORMAT_STATE.set(st).is_err() {
            debug!("ListFormatState::init: already initialized");
        }
    }

    pub fn try_get() -> Option<&'static ListFormatState> {
        LIST_FORMAT_STATE.get()
    }

    pub fn locale(&self) -> String {
        self.locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Switch the ambient locale. Existing `ListFormat` instances keep the
    /// locale they were constructed with.
    pub fn set_locale(&self, locale: impl Into<String>) {
        let loc = normalize_locale(&locale.into());
        if loc.is_empty() {
            return;
        }

        let mut cur = self.locale.write().unwrap_or_else(PoisonError::into_inner);
        if *cur == loc {
            return;
        }
        debug!("ListFormatState::set_locale: {} -> {}", *cur, loc);
        *cur = loc;
    }

    pub fn context(&self) -> &FormatContext {
        &self.context
    }
}
