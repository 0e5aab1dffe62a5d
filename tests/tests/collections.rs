//! All and Any over collection elements.
//!
//! `Basket.quantities` is Any(Range(1..5), EqualTo(3)), `Basket.counts` is
//! All of the same pair and `Basket.tags` is All(NotBlank, Length(max = 8)).

use tenet_tests::prelude::*;

mod any {
    use super::*;

    #[test]
    fn test_one_passing_element_discards_failures() -> TestResult<()> {
        // GIVEN "bad" fails both checks, 3 passes both
        let shop = Shop::new()?;
        let basket = fixtures::basket(list![1, "bad", 3], Value::Null);

        // WHEN
        let result = shop.validator().validate(&basket, &[]);

        // THEN
        ExpectViolations::new().none().verify("any passes", &result)
    }

    #[test]
    fn test_no_passing_element_keeps_every_failure() -> TestResult<()> {
        let shop = Shop::new()?;
        let basket = fixtures::basket(list!["bad", 9], Value::Null);

        let result = shop.validator().validate(&basket, &[]);

        ExpectViolations::new()
            .paths(&["quantities[0]", "quantities[0]", "quantities[1]", "quantities[1]"])
            .at("quantities[0]", "This value should be a valid number")
            .at("quantities[1]", "This value should be 5 or less")
            .at("quantities[1]", "This value should be equal to 3")
            .verify("any fails", &result)
    }

    #[test]
    fn test_empty_collection_is_valid() -> TestResult<()> {
        let shop = Shop::new()?;
        let basket = fixtures::basket(list![], Value::Null);

        let result = shop.validator().validate(&basket, &[]);

        ExpectViolations::new().none().verify("empty quantities", &result)
    }
}

mod all {
    use super::*;

    #[test]
    fn test_every_failing_element_is_reported() -> TestResult<()> {
        // GIVEN 1 fails EqualTo, "bad" fails both, 3 passes
        let shop = Shop::new()?;
        let basket = fixtures::basket(Value::Null, list![1, "bad", 3]);

        // WHEN
        let result = shop.validator().validate(&basket, &[]);

        // THEN
        ExpectViolations::new()
            .paths(&["counts[0]", "counts[1]", "counts[1]"])
            .at("counts[0]", "This value should be equal to 3")
            .nothing_at("counts[2]")
            .verify("all fails", &result)
    }

    #[test]
    fn test_map_entries_use_keys_in_paths() -> TestResult<()> {
        let shop = Shop::new()?;
        let basket = fixtures::basket(Value::Null, Value::Null);
        basket.set(
            "tags",
            Value::Map(fields! { "a" => "", "b" => "far too long", "c" => "ok" }),
        );

        let result = shop.validator().validate(&basket, &[]);

        ExpectViolations::new()
            .paths(&["tags[a]", "tags[b]"])
            .at("tags[a]", "This value should not be blank")
            .message_matches(r"too long\. It should have 8 characters or less$")
            .verify("tag map", &result)
    }

    #[test]
    fn test_map_entries_are_visited_in_key_order() -> TestResult<()> {
        let shop = Shop::new()?;
        let basket = fixtures::basket(Value::Null, Value::Null);
        let mut tags = tenet_core::Fields::new();
        tags.insert("zeta".to_string(), Value::from(""));
        tags.insert("alpha".to_string(), Value::from(""));
        basket.set("tags", Value::Map(tags));

        let result = shop.validator().validate(&basket, &[]);

        ExpectViolations::new()
            .paths(&["tags[alpha]", "tags[zeta]"])
            .verify("sorted tags", &result)
    }

    #[test]
    fn test_scalar_is_not_iterable() -> TestResult<()> {
        let shop = Shop::new()?;
        let basket = fixtures::basket(Value::Null, Value::Int(4));

        let result = shop.validator().validate(&basket, &[]);

        ExpectViolations::new()
            .count(1)
            .at("counts", "This value should be iterable")
            .verify("scalar counts", &result)
    }

    #[test]
    fn test_null_collection_is_valid() -> TestResult<()> {
        let shop = Shop::new()?;
        let basket = fixtures::basket(Value::Null, Value::Null);

        let result = shop.validator().validate(&basket, &[]);

        ExpectViolations::new().none().verify("null collections", &result)
    }
}

mod bare_values {
    use super::*;

    #[test]
    fn test_any_on_bare_list() -> TestResult<()> {
        let shop = Shop::new()?;
        let any = Constraint::any(vec![
            Constraint::rule(&RANGE).option("min", 1).option("max", 5).build()?,
            Constraint::rule(&EQUAL_TO).value(3).build()?,
        ])
        .build()?;

        let passing = shop.validator().validate_value_with(&list![1, "bad", 3], &any, &[]);
        let failing = shop.validator().validate_value_with(&list!["bad"], &any, &[]);

        ExpectViolations::new().none().verify("passing list", &passing)?;
        ExpectViolations::new()
            .paths(&["[0]", "[0]"])
            .verify("failing list", &failing)
    }
}
