//! The validator entry points, custom units and configuration errors.

use std::sync::Arc;
use std::thread;
use tenet_constraint::{ConstraintResult, ConstraintValidator, DefaultValidatorFactory, LastViolation, MessageParameters};
use tenet_metadata::{ConstraintDefinition, MetadataError};
use tenet_tests::prelude::*;

static EVEN: ConstraintDefinition = ConstraintDefinition {
    name: "Even",
    validated_by: "even",
    options: &[],
    required: &[],
    default_option: None,
    message: "{{ value }} is not even",
};

static UNREGISTERED: ConstraintDefinition = ConstraintDefinition {
    name: "Unregistered",
    validated_by: "missing",
    options: &[],
    required: &[],
    default_option: None,
    message: "never rendered",
};

#[derive(Default)]
struct EvenValidator {
    last: LastViolation,
}

impl ConstraintValidator for EvenValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        match value {
            Value::Int(n) if n % 2 != 0 => Ok(self
                .last
                .fail(constraint.message_template(), [("{{ value }}", n.to_string())])),
            _ => Ok(true),
        }
    }

    fn message_template(&self) -> &str {
        self.last.template()
    }

    fn message_parameters(&self) -> &MessageParameters {
        self.last.parameters()
    }
}

mod entry_points {
    use super::*;

    #[test]
    fn test_validate_property_reads_current_value() -> TestResult<()> {
        let shop = Shop::new()?;
        let order = fixtures::order(1, -5, Some("EUR"));

        let result = shop.validator().validate_property(&order, "total", &[]);

        ExpectViolations::new()
            .paths(&["total"])
            .verify("order total", &result)
    }

    #[test]
    fn test_validate_value_without_an_instance() -> TestResult<()> {
        // GIVEN
        let shop = Shop::new()?;

        // WHEN
        let violations = shop
            .validator()
            .validate_value("Address", "zip", &Value::from("abc"), &[])?;

        // THEN the root is the class name
        let rendered = violations.to_string();
        if rendered != "Address.zip:\n    Invalid zip code \"abc\"\n" {
            return Err(TestError::assertion_failed("zip value", format!("got {:?}", rendered)));
        }
        match violations.get(0).map(|v| &v.root) {
            Some(Value::String(class)) if class == "Address" => Ok(()),
            other => Err(TestError::assertion_failed("zip value", format!("unexpected root {:?}", other))),
        }
    }

    #[test]
    fn test_unconstrained_property_yields_nothing() -> TestResult<()> {
        let shop = Shop::new()?;
        let customer = fixtures::customer(1, "Ada");

        let by_property = shop.validator().validate_property(&customer, "password", &[]);
        let by_value = shop
            .validator()
            .validate_value("Customer", "password", &Value::from(""), &[]);

        ExpectViolations::new().none().verify("password property", &by_property)?;
        ExpectViolations::new().none().verify("password value", &by_value)
    }

    #[test]
    fn test_constraint_outside_requested_groups_is_skipped() -> TestResult<()> {
        let shop = Shop::new()?;
        let strict = Constraint::rule(&RANGE).option("max", 10).group("Strict").build()?;

        let default = shop.validator().validate_value_with(&Value::Int(11), &strict, &[]);
        let requested = shop
            .validator()
            .validate_value_with(&Value::Int(11), &strict, &["Strict".into()]);

        ExpectViolations::new().none().verify("default group", &default)?;
        ExpectViolations::new()
            .count(1)
            .message_matches("^This value should be 10 or less$")
            .verify("strict group", &requested)
    }

    #[test]
    fn test_metadata_is_built_once() -> TestResult<()> {
        let shop = Shop::new()?;

        let first = shop.validator().metadata_for("Order")?;
        let second = shop.validator().metadata_for("Order")?;

        if Arc::ptr_eq(&first, &second) {
            Ok(())
        } else {
            Err(TestError::assertion_failed("metadata cache", "metadata was built twice"))
        }
    }
}

mod units {
    use super::*;

    fn numbers_validator(definition: &'static ConstraintDefinition) -> TestResult<Validator> {
        let classes = fixtures::classes()?;
        let source = StaticMetadataSource::new().with(
            "Basket",
            ClassDeclaration::new().property("counts", [Constraint::all(vec![Constraint::rule(definition).build()?]).build()?]),
        );
        let mut factory = DefaultValidatorFactory::new();
        factory.register("even", || Box::new(EvenValidator::default()));
        Ok(Validator::builder(classes).source(source).factory(factory).build())
    }

    #[test]
    fn test_custom_unit_is_used() -> TestResult<()> {
        let validator = numbers_validator(&EVEN)?;
        let basket = fixtures::basket(Value::Null, list![2, 3, 4]);

        let result = validator.validate(&basket, &[]);

        ExpectViolations::new()
            .paths(&["counts[1]"])
            .at("counts[1]", "3 is not even")
            .verify("odd count", &result)
    }

    #[test]
    fn test_unknown_unit_is_an_error() -> TestResult<()> {
        let validator = numbers_validator(&UNREGISTERED)?;
        let basket = fixtures::basket(Value::Null, list![1]);

        let result = validator.validate(&basket, &[]);

        ExpectViolations::new()
            .error("No validator unit registered for: missing")
            .verify("missing unit", &result)
    }
}

mod declaration_errors {
    use super::*;

    #[test]
    fn test_unknown_option_is_rejected() -> TestResult<()> {
        match Constraint::rule(&RANGE).option("step", 2).build() {
            Err(MetadataError::InvalidOptions { options, .. }) if options == vec!["step"] => Ok(()),
            other => Err(TestError::assertion_failed("unknown option", format!("got {:?}", other))),
        }
    }

    #[test]
    fn test_required_option_is_enforced() -> TestResult<()> {
        match Constraint::rule(&REGEX).build() {
            Err(MetadataError::MissingOptions { options, .. }) if options == vec!["pattern"] => Ok(()),
            other => Err(TestError::assertion_failed("missing option", format!("got {:?}", other))),
        }
    }
}

mod concurrency {
    use super::*;

    #[test]
    fn test_one_validator_serves_many_threads() -> TestResult<()> {
        // GIVEN one shared validator and an invalid order per thread
        let shop = Shop::new()?;
        let validator = shop.validator();

        // WHEN
        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| scope.spawn(move || validator.validate(&fixtures::order(i, -5, None), &[])))
                .collect();
            handles.into_iter().map(|h| h.join()).collect()
        });

        // THEN every thread saw the same single violation
        for (i, joined) in results.into_iter().enumerate() {
            let result = joined
                .map_err(|_| TestError::assertion_failed("threads", format!("thread {} panicked", i)))?;
            ExpectViolations::new()
                .paths(&["total"])
                .verify(&format!("thread {}", i), &result)?;
        }
        Ok(())
    }
}
