//! Property tests for content classification.

use proptest::prelude::*;

use assetline::domain::services::{classify, classify_bytes, WRAPPER_PREFIX};
use assetline::ModuleKind;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Anything that starts with the wrapper prefix is wrapped.
    #[test]
    fn property_prefix_makes_wrapped(rest in "(?s).{0,256}") {
        let source = format!("{WRAPPER_PREFIX}{rest}");
        prop_assert_eq!(classify(&source), ModuleKind::Wrapped);
    }

    /// PROPERTY: Without the prefix at byte 0 a file is plain, no matter
    /// where else the registration call appears.
    #[test]
    fn property_prefix_elsewhere_is_plain(
        lead in "(?s).{1,32}",
        rest in "(?s).{0,64}",
    ) {
        prop_assume!(!lead.starts_with(WRAPPER_PREFIX));
        let source = format!("{lead}{WRAPPER_PREFIX}{rest}");
        prop_assert_eq!(classify(&source), ModuleKind::Plain);
    }

    /// PROPERTY: Classification never panics on arbitrary bytes and agrees
    /// with the text form when the bytes are valid UTF-8.
    #[test]
    fn property_bytes_agree_with_text(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let kind = classify_bytes(&bytes);
        if let Ok(text) = std::str::from_utf8(&bytes) {
            prop_assert_eq!(classify(text), kind);
        }
    }
}
