use crate::pattern::{select_template, MalformedTemplate, PatternSet, TemplateRole};

/// Fold `items` into one string using the templates in `patterns`.
///
/// Items are opaque: their text is inserted verbatim and never re-read, so
/// separator-like content in an item does not change which templates apply.
/// Only the roles a given length needs are resolved; a missing or malformed
/// one is an error rather than a guess.
pub fn assemble<S: AsRef<str>>(
    items: &[S],
    patterns: &PatternSet,
) -> Result<String, MalformedTemplate> {
    match items {
        [] => Ok(String::new()),
        [only] => Ok(only.as_ref().to_string()),
        [first, second] => {
            let two = patterns.template(TemplateRole::Two)?;
            Ok(two.apply(first.as_ref(), second.as_ref()))
        }
        [first, rest @ ..] => {
            let count = items.len();
            let mut acc = first.as_ref().to_string();
            for (offset, item) in rest.iter().enumerate() {
                let role = select_template(offset + 1, count);
                acc = patterns.template(role)?.apply(&acc, item.as_ref());
            }
            Ok(acc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::TemplateDefect;
    use pretty_assertions::assert_eq;

    fn tagged() -> PatternSet {
        PatternSet::new("T({0}|{1})", "S({0}|{1})", "M({0}|{1})", "E({0}|{1})")
    }

    fn english_and() -> PatternSet {
        PatternSet::new("{0} and {1}", "{0}, {1}", "{0}, {1}", "{0}, and {1}")
    }

    #[test]
    fn degenerate_lengths() {
        let none: [&str; 0] = [];
        assert_eq!(assemble(&none, &tagged()).unwrap(), "");
        assert_eq!(assemble(&["solo"], &tagged()).unwrap(), "solo");
    }

    #[test]
    fn two_items_keep_order() {
        assert_eq!(assemble(&["a", "b"], &tagged()).unwrap(), "T(a|b)");
    }

    #[test]
    fn fold_applies_start_middle_end() {
        assert_eq!(assemble(&["a", "b", "c"], &tagged()).unwrap(), "E(S(a|b)|c)");
        assert_eq!(
            assemble(&["a", "b", "c", "d", "e"], &tagged()).unwrap(),
            "E(M(M(S(a|b)|c)|d)|e)"
        );
    }

    #[test]
    fn english_scenarios() {
        let p = english_and();
        assert_eq!(
            assemble(&["Motorcycle", "bus"], &p).unwrap(),
            "Motorcycle and bus"
        );
        assert_eq!(
            assemble(&["Motorcycle", "bus", "car"], &p).unwrap(),
            "Motorcycle, bus, and car"
        );
        assert_eq!(
            assemble(&["Motorcycle", "bus", "car", "submarine"], &p).unwrap(),
            "Motorcycle, bus, car, and submarine"
        );
    }

    #[test]
    fn separator_like_items_are_opaque() {
        let p = english_and();
        assert_eq!(
            assemble(&["a, and b", "{0}", "c"], &p).unwrap(),
            "a, and b, {0}, and c"
        );
    }

    #[test]
    fn owned_items_are_accepted() {
        let items = vec!["x".to_string(), "y".to_string()];
        assert_eq!(assemble(&items, &english_and()).unwrap(), "x and y");
    }

    #[test]
    fn missing_role_fails_only_when_needed() {
        let partial = PatternSet {
            two: Some("{0} and {1}".to_string()),
            ..PatternSet::default()
        };
        assert_eq!(assemble(&["a"], &partial).unwrap(), "a");
        assert_eq!(assemble(&["a", "b"], &partial).unwrap(), "a and b");

        let err = assemble(&["a", "b", "c"], &partial).unwrap_err();
        assert_eq!(err.role, TemplateRole::Start);
        assert_eq!(err.defect, TemplateDefect::Missing);
    }

    #[test]
    fn malformed_end_is_reported() {
        let mut p = english_and();
        p.end = Some("{0}, and".to_string());
        let err = assemble(&["a", "b", "c"], &p).unwrap_err();
        assert_eq!(err.role, TemplateRole::End);
        assert_eq!(err.defect, TemplateDefect::MissingPlaceholder("{1}"));
    }
}
