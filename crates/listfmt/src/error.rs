use thiserror::Error;

use crate::pattern::{ConjunctionType, MalformedTemplate, TemplateRole};
use crate::table::PatternTableError;

#[derive(Debug, Error)]
pub enum ListFormatError {
    #[error("no list patterns for locale `{locale}` ({conjunction}) and no native formatter")]
    UnsupportedLocale {
        locale: String,
        conjunction: ConjunctionType,
    },

    #[error("malformed `{role}` pattern for locale `{locale}` ({conjunction}): {reason}")]
    MalformedPattern {
        locale: String,
        conjunction: ConjunctionType,
        role: TemplateRole,
        reason: String,
    },

    #[error("native list formatter error: {0}")]
    Native(String),

    #[error("list format state not initialized; call ListFormatState::init() at startup")]
    NotInitialized,

    #[error(transparent)]
    Table(#[from] PatternTableError),
}

impl ListFormatError {
    pub(crate) fn malformed(
        locale: &str,
        conjunction: ConjunctionType,
        bad: MalformedTemplate,
    ) -> Self {
        Self::MalformedPattern {
            locale: locale.to_string(),
            conjunction,
            role: bad.role,
            reason: bad.defect.to_string(),
        }
    }
}
