//! Property-based invariant tests for list assembly.
//!
//! 1. Empty lists format to "", single items pass through unchanged
//! 2. Two items use `two` in order, never swapped
//! 3. n >= 3 items use one `start`, n-3 `middle`, one `end`, in that order
//! 4. Item content never changes the fold structure
//! 5. Identical construction gives identical output
//! 6. Native and table dispatch agree for a concatenating native formatter

use std::sync::Arc;

use listfmt::{
    assemble, ConjunctionType, FormatContext, ListFormat, ListFormatConfig, ListFormatError,
    NativeListFormat, PatternEntry, PatternSet, PatternTable,
};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn tagged() -> PatternSet {
    PatternSet::new("T<{0}|{1}>", "S<{0}|{1}>", "M<{0}|{1}>", "E<{0}|{1}>")
}

fn english() -> PatternSet {
    PatternSet::new("{0} and {1}", "{0}, {1}", "{0}, {1}", "{0}, and {1}")
}

fn context() -> FormatContext {
    let mut table = PatternTable::new();
    table.insert("en", ConjunctionType::And, PatternEntry::new(english()));
    table.insert("xx", ConjunctionType::And, PatternEntry::new(tagged()));
    FormatContext::new(Arc::new(table)).with_native_delegation(false)
}

/// Build the expected tagged output without going through templates.
fn expected_tagged(items: &[String]) -> String {
    match items.len() {
        0 => String::new(),
        1 => items[0].clone(),
        2 => format!("T<{}|{}>", items[0], items[1]),
        n => {
            let mut acc = format!("S<{}|{}>", items[0], items[1]);
            for item in &items[2..n - 1] {
                acc = format!("M<{}|{}>", acc, item);
            }
            format!("E<{}|{}>", acc, items[n - 1])
        }
    }
}

/// Items that may look like templates or separators, but carry no tag markers.
fn item() -> impl Strategy<Value = String> {
    "[a-z ,、{}01]{0,8}"
}

fn items(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(item(), 0..max)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Degenerate lists
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn single_item_passes_through(x in item()) {
        let lf = ListFormat::with_context("en", ListFormatConfig::and(), &context()).unwrap();
        prop_assert_eq!(lf.format(&[x.as_str()]).unwrap(), x);
        let empty: [&str; 0] = [];
        prop_assert_eq!(lf.format(&empty).unwrap(), "");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Two items keep their order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn two_items_use_two_template(a in item(), b in item()) {
        let out = assemble(&[a.as_str(), b.as_str()], &english()).unwrap();
        prop_assert_eq!(out, format!("{} and {}", a, b));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3 + 4. Fold structure is independent of item content
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fold_structure(items in items(12)) {
        let out = assemble(&items, &tagged()).unwrap();
        prop_assert_eq!(&out, &expected_tagged(&items));

        let n = items.len();
        if n >= 3 {
            prop_assert_eq!(out.matches("S<").count(), 1);
            prop_assert_eq!(out.matches("M<").count(), n - 3);
            prop_assert_eq!(out.matches("E<").count(), 1);
            prop_assert_eq!(out.matches("T<").count(), 0);
            prop_assert!(out.starts_with("E<"));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Idempotent construction
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn identical_instances_agree(items in items(8)) {
        let ctx = context();
        let a = ListFormat::with_context("xx", ListFormatConfig::and(), &ctx).unwrap();
        let b = ListFormat::with_context("xx", ListFormatConfig::and(), &ctx).unwrap();
        prop_assert_eq!(a.format(&items).unwrap(), b.format(&items).unwrap());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Native/table equivalence
// ═════════════════════════════════════════════════════════════════════════

struct EnglishJoin;

impl NativeListFormat for EnglishJoin {
    fn supports(&self, locale: &str) -> bool {
        locale == "en"
    }

    fn format(
        &self,
        items: &[&str],
        _conjunction: ConjunctionType,
        _locale: &str,
    ) -> Result<String, ListFormatError> {
        Ok(match items {
            [] => String::new(),
            [only] => only.to_string(),
            [a, b] => format!("{a} and {b}"),
            [init @ .., last] => format!("{}, and {}", init.join(", "), last),
        })
    }
}

proptest! {
    #[test]
    fn native_and_table_agree(items in items(8)) {
        let native_ctx = context()
            .with_native(Arc::new(EnglishJoin))
            .with_native_delegation(true);
        let native = ListFormat::with_context("en", ListFormatConfig::and(), &native_ctx).unwrap();
        let table = ListFormat::with_context("en", ListFormatConfig::and(), &context()).unwrap();
        prop_assert_eq!(native.format(&items).unwrap(), table.format(&items).unwrap());
    }
}
