//! Unit tests for cast-in/cast-out between Money and its stored record

use chrono::{TimeZone, Utc};
use money_core::{Currency, CurrencyCatalog, Money, MoneyError};
use rust_decimal_macros::dec;
use store_codec::{MoneyCodec, RawAmount, RawMoney};
use test_utils::{builtin_currency, fixed_timestamp, MoneyBuilder};

mod cast_out {
    use super::*;

    #[test]
    fn test_record_carries_amount_code_and_timestamp() {
        let money = MoneyBuilder::new()
            .with_amount(dec!(1.234))
            .with_created_at(fixed_timestamp())
            .build();

        let raw = MoneyCodec::with_builtin_catalog().cast_out(&money);
        assert_eq!(raw.amount, 1.234);
        assert_eq!(raw.currency, "USD");
        assert_eq!(raw.created_at, fixed_timestamp());
    }

    #[test]
    fn test_record_serializes_with_camel_case_keys() {
        let money = MoneyBuilder::new()
            .with_amount(dec!(9.5))
            .with_created_at(Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap())
            .build();

        let raw = RawMoney::from(&money);
        let json = serde_json::to_value(&raw).unwrap();
        assert_eq!(json["amount"], 9.5);
        assert_eq!(json["currency"], "USD");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}

mod cast_in {
    use super::*;

    #[test]
    fn test_round_trip_reconstructs_an_equal_money() {
        let codec = MoneyCodec::with_builtin_catalog();
        let money = Money::parse("1.234", builtin_currency("USD")).unwrap();

        let back = codec.cast_in(&codec.cast_out(&money)).unwrap();
        assert_eq!(back, money);
        assert_eq!(back.created_at(), money.created_at());
    }

    #[test]
    fn test_unknown_currency_code_is_surfaced() {
        let codec = MoneyCodec::with_builtin_catalog();
        let raw = RawMoney {
            amount: 10.0,
            currency: "ZZZ".to_string(),
            created_at: fixed_timestamp(),
        };
        assert_eq!(
            codec.cast_in(&raw),
            Err(MoneyError::UnknownCurrency("ZZZ".to_string()))
        );
    }

    #[test]
    fn test_cast_raw_accepts_numeric_strings() {
        let codec = MoneyCodec::with_builtin_catalog();
        let money = codec
            .cast_raw(&RawAmount::from("1.234"), "usd", Some(fixed_timestamp()))
            .unwrap();
        assert_eq!(money.amount(), dec!(1.234));
        assert_eq!(money.currency().code(), "USD");
    }

    #[test]
    fn test_cast_raw_rejects_malformed_strings() {
        let codec = MoneyCodec::with_builtin_catalog();
        let result = codec.cast_raw(&RawAmount::from("ten dollars"), "USD", None);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_cast_raw_rejects_non_finite_numbers() {
        let codec = MoneyCodec::with_builtin_catalog();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = codec.cast_raw(&RawAmount::Number(bad), "USD", None);
            assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
        }
    }

    #[test]
    fn test_cast_raw_defaults_missing_timestamp_to_now() {
        let codec = MoneyCodec::with_builtin_catalog();
        let before = Utc::now();
        let money = codec
            .cast_raw(&RawAmount::from(5.0), "USD", None)
            .unwrap();
        assert!(money.created_at() >= before);
        assert!(money.created_at() <= Utc::now());
    }

    #[test]
    fn test_injected_catalog_controls_resolution() {
        let fake = CurrencyCatalog::from_currencies([Currency::new("GIL", "G", "Gil", 0)]);
        let codec = MoneyCodec::new(&fake);

        assert!(codec.cast_raw(&RawAmount::from(7.0), "GIL", None).is_ok());
        assert_eq!(
            codec.cast_raw(&RawAmount::from(7.0), "USD", None),
            Err(MoneyError::UnknownCurrency("USD".to_string()))
        );
    }
}

mod raw_amount {
    use super::*;

    #[test]
    fn test_deserializes_from_number_or_string() {
        let number: RawAmount = serde_json::from_str("1.234").unwrap();
        assert_eq!(number, RawAmount::Number(1.234));

        let text: RawAmount = serde_json::from_str("\"1.234\"").unwrap();
        assert_eq!(text, RawAmount::Text("1.234".to_string()));
    }

    #[test]
    fn test_both_forms_cast_to_the_same_decimal() {
        assert_eq!(
            RawAmount::from(1.234).to_decimal().unwrap(),
            RawAmount::from("1.234").to_decimal().unwrap()
        );
    }
}

mod round_trip_properties {
    use super::*;
    use proptest::prelude::*;
    use test_utils::money_strategy;

    proptest! {
        #[test]
        fn cast_in_after_cast_out_is_identity(money in money_strategy()) {
            let codec = MoneyCodec::with_builtin_catalog();
            let back = codec.cast_in(&codec.cast_out(&money)).unwrap();
            prop_assert_eq!(back, money);
        }

        #[test]
        fn stored_code_always_resolves_for_generated_money(money in money_strategy()) {
            let raw = MoneyCodec::with_builtin_catalog().cast_out(&money);
            prop_assert!(CurrencyCatalog::builtin().contains(&raw.currency));
        }
    }
}
