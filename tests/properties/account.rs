//! Property tests for account id validation.

use proptest::prelude::*;

use wasmship::TargetAccount;

fn valid_account() -> impl Strategy<Value = String> {
    let part = proptest::string::string_regex("[a-z0-9]{1,8}").unwrap();
    let sep = prop_oneof![Just("."), Just("-"), Just("_")];
    (
        proptest::string::string_regex("[a-z0-9]{2,8}").unwrap(),
        proptest::collection::vec((sep, part), 0..=4),
    )
        .prop_map(|(head, rest)| {
            rest.into_iter().fold(head, |mut id, (sep, part)| {
                id.push_str(sep);
                id.push_str(&part);
                id
            })
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,80}") {
        let _ = TargetAccount::parse(s);
    }

    /// PROPERTY: Well-formed ids are accepted and displayed unchanged.
    #[test]
    fn property_well_formed_ids_parse(id in valid_account()) {
        let account = TargetAccount::parse(id.clone()).unwrap();
        prop_assert_eq!(account.to_string(), id);
    }

    /// PROPERTY: Any uppercase letter makes an id invalid.
    #[test]
    fn property_uppercase_rejected(id in valid_account(), upper in "[A-Z]") {
        let mixed = format!("{}{}", id, upper);
        prop_assert!(TargetAccount::parse(mixed).is_err());
    }

    /// PROPERTY: Doubled separators are always rejected.
    #[test]
    fn property_doubled_separator_rejected(
        head in "[a-z]{2,8}",
        sep in "[._-]{2}",
        tail in "[a-z]{2,8}",
    ) {
        let id = format!("{}{}{}", head, sep, tail);
        prop_assert!(TargetAccount::parse(id).is_err());
    }
}
