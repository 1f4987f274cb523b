//! The global state is process-wide, so everything touching it lives in a
//! single test.

#![cfg(feature = "builtin-data")]

use std::sync::Arc;

use listfmt::{
    format_list, native_delegation_enabled, set_native_delegation, Backend, ConjunctionType,
    FormatContext, ListFormat, ListFormatConfig, ListFormatError, ListFormatState,
    NativeListFormat,
};
use pretty_assertions::assert_eq;

struct Bracketed;

impl NativeListFormat for Bracketed {
    fn supports(&self, _locale: &str) -> bool {
        true
    }

    fn format(
        &self,
        items: &[&str],
        _conjunction: ConjunctionType,
        _locale: &str,
    ) -> Result<String, ListFormatError> {
        Ok(format!("[{}]", items.join("|")))
    }
}

#[test]
fn ambient_locale_and_delegation_flag() {
    assert!(matches!(
        ListFormat::new(ListFormatConfig::default()),
        Err(ListFormatError::NotInitialized)
    ));

    let ctx = FormatContext::builtin()
        .unwrap()
        .with_native(Arc::new(Bracketed));
    ListFormatState::init("en_US", ctx);
    let state = ListFormatState::try_get().unwrap();
    assert_eq!(state.locale(), "en-US");

    // Delegation is off by default.
    assert!(!native_delegation_enabled());
    let lf = ListFormat::new(ListFormatConfig::default()).unwrap();
    assert_eq!(lf.locale(), "en-US");
    assert_eq!(lf.backend(), Backend::Table);
    assert_eq!(
        format_list(&["Motorcycle", "bus", "car"], ListFormatConfig::or()).unwrap(),
        "Motorcycle, bus, or car"
    );

    // Switching the locale only affects new instances.
    state.set_locale("zh-Hans");
    assert_eq!(lf.format(&["a", "b"]).unwrap(), "a and b");
    let zh = ListFormat::new(ListFormatConfig::default()).unwrap();
    assert_eq!(zh.format(&["摩托车", "公共汽车", "车"]).unwrap(), "摩托车、公共汽车和车");

    // The process-wide flag enables delegation for new instances.
    set_native_delegation(true);
    let native = ListFormat::new(ListFormatConfig::default()).unwrap();
    assert_eq!(native.backend(), Backend::Native);
    assert_eq!(native.format(&["a", "b"]).unwrap(), "[a|b]");
    assert_eq!(zh.backend(), Backend::Table);

    // Burmese is not verified, so it stays on the table.
    state.set_locale("my");
    let my = ListFormat::new(ListFormatConfig::default()).unwrap();
    assert_eq!(my.backend(), Backend::Table);
    set_native_delegation(false);

    // A second init is ignored.
    ListFormatState::init("fr", FormatContext::builtin().unwrap());
    assert_eq!(ListFormatState::try_get().unwrap().locale(), "my");

    state.set_locale("tlh");
    assert!(matches!(
        ListFormat::new(ListFormatConfig::default()),
        Err(ListFormatError::UnsupportedLocale { .. })
    ));
}
