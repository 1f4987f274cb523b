//! Pattern sets, template parsing and template-role selection.
//!
//! A pattern set holds four templates, each with the placeholders `{0}` and
//! `{1}` in that order:
//! - `two`: joins a list of exactly two items
//! - `start`: joins the first and second item of a longer list
//! - `middle`: appends each interior item
//! - `end`: appends the last item

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const FIRST: &str = "{0}";
const SECOND: &str = "{1}";

/// Whether a list is joined with an "and"-like or an "or"-like word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConjunctionType {
    #[default]
    And,
    Or,
}

impl ConjunctionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for ConjunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The grammatical position a fold step occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateRole {
    Two,
    Start,
    Middle,
    End,
}

impl TemplateRole {
    pub const ALL: [TemplateRole; 4] = [Self::Two, Self::Start, Self::Middle, Self::End];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Two => "two",
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

impl fmt::Display for TemplateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select the template for the fold step that appends `items[position]`.
///
/// Only valid for lists of three or more items; shorter lists never reach a
/// fold step.
pub(crate) fn select_template(position: usize, total_count: usize) -> TemplateRole {
    debug_assert!(total_count >= 3, "select_template called with {total_count} items");
    debug_assert!(position >= 1 && position < total_count);

    if position == total_count - 1 {
        TemplateRole::End
    } else if position == 1 {
        TemplateRole::Start
    } else {
        TemplateRole::Middle
    }
}

/// Why a template string cannot be used.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TemplateDefect {
    #[error("template is missing")]
    Missing,

    #[error("placeholder `{0}` not found")]
    MissingPlaceholder(&'static str),

    #[error("placeholder `{0}` appears more than once")]
    DuplicatePlaceholder(&'static str),

    #[error("placeholder `{{1}}` precedes `{{0}}`")]
    OutOfOrder,
}

/// A template role that could not be resolved from a [`PatternSet`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("`{role}` template: {defect}")]
pub struct MalformedTemplate {
    pub role: TemplateRole,
    pub defect: TemplateDefect,
}

/// A validated template: `prefix {0} infix {1} suffix`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template<'a> {
    prefix: &'a str,
    infix: &'a str,
    suffix: &'a str,
}

impl<'a> Template<'a> {
    pub fn parse(raw: &'a str) -> Result<Self, TemplateDefect> {
        let first = find_single(raw, FIRST)?;
        let second = find_single(raw, SECOND)?;
        if second < first {
            return Err(TemplateDefect::OutOfOrder);
        }

        Ok(Self {
            prefix: &raw[..first],
            infix: &raw[first + FIRST.len()..second],
            suffix: &raw[second + SECOND.len()..],
        })
    }

    /// Substitute both placeholders. Item text is inserted verbatim.
    pub fn apply(&self, first: &str, second: &str) -> String {
        let len = self.prefix.len()
            + first.len()
            + self.infix.len()
            + second.len()
            + self.suffix.len();
        let mut out = String::with_capacity(len);
        out.push_str(self.prefix);
        out.push_str(first);
        out.push_str(self.infix);
        out.push_str(second);
        out.push_str(self.suffix);
        out
    }
}

fn find_single(raw: &str, placeholder: &'static str) -> Result<usize, TemplateDefect> {
    let mut hits = raw.match_indices(placeholder).map(|(idx, _)| idx);
    let Some(idx) = hits.next() else {
        return Err(TemplateDefect::MissingPlaceholder(placeholder));
    };
    if hits.next().is_some() {
        return Err(TemplateDefect::DuplicatePlaceholder(placeholder));
    }
    Ok(idx)
}

/// The four templates for one `(locale, conjunction)` pair.
///
/// Roles are optional so that incomplete data can be loaded and reported at
/// the point where a role is actually needed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl PatternSet {
    pub fn new(
        two: impl Into<String>,
        start: impl Into<String>,
        middle: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            two: Some(two.into()),
            start: Some(start.into()),
            middle: Some(middle.into()),
            end: Some(end.into()),
        }
    }

    pub fn role(&self, role: TemplateRole) -> Option<&str> {
        match role {
            TemplateRole::Two => self.two.as_deref(),
            TemplateRole::Start => self.start.as_deref(),
            TemplateRole::Middle => self.middle.as_deref(),
            TemplateRole::End => self.end.as_deref(),
        }
    }

    pub fn template(&self, role: TemplateRole) -> Result<Template<'_>, MalformedTemplate> {
        let raw = self.role(role).ok_or(MalformedTemplate {
            role,
            defect: TemplateDefect::Missing,
        })?;
        Template::parse(raw).map_err(|defect| MalformedTemplate { role, defect })
    }

    /// Check every role, not just the ones a particular list length needs.
    pub fn validate(&self) -> Result<(), MalformedTemplate> {
        for role in TemplateRole::ALL {
            self.template(role)?;
        }
        Ok(())
    }

    /// A copy of `self` with every role present in `partial` replaced.
    pub fn overlay(&self, partial: &PatternSet) -> PatternSet {
        PatternSet {
            two: partial.two.clone().or_else(|| self.two.clone()),
            start: partial.start.clone().or_else(|| self.start.clone()),
            middle: partial.middle.clone().or_else(|| self.middle.clone()),
            end: partial.end.clone().or_else(|| self.end.clone()),
        }
    }

    pub(crate) fn roles(&self) -> impl Iterator<Item = &str> {
        [&self.two, &self.start, &self.middle, &self.end]
            .into_iter()
            .filter_map(|r| r.as_deref())
    }
}
