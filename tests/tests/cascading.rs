//! Cascading into referenced objects and collections of objects.

use tenet_tests::prelude::*;

mod references {
    use super::*;

    #[test]
    fn test_cascaded_violation_path_is_prefixed() -> TestResult<()> {
        // GIVEN a customer whose address has a blank city
        let shop = Shop::new()?;
        let customer = fixtures::customer(1, "Ada");
        customer.set("address", fixtures::address("", "75001"));

        // WHEN
        let result = shop.validator().validate(&customer, &[]);

        // THEN
        ExpectViolations::new()
            .paths(&["address.city"])
            .at("address.city", "This value should not be blank")
            .verify("blank city", &result)
    }

    #[test]
    fn test_null_reference_is_valid() -> TestResult<()> {
        let shop = Shop::new()?;
        let customer = fixtures::customer(1, "Ada");
        customer.set("address", Value::Null);

        let result = shop.validator().validate(&customer, &[]);

        ExpectViolations::new().none().verify("no address", &result)
    }

    #[test]
    fn test_wrong_class_is_reported_without_descending() -> TestResult<()> {
        // GIVEN an order where an Address is required; the order itself is invalid
        let shop = Shop::new()?;
        let customer = fixtures::customer(1, "Ada");
        customer.set("address", fixtures::order(2, -5, None));

        // WHEN
        let result = shop.validator().validate(&customer, &[]);

        // THEN one violation, nothing from inside the order
        ExpectViolations::new()
            .count(1)
            .at("address", "This value should be instance of Address")
            .verify("wrong class", &result)
    }

    #[test]
    fn test_cascade_into_scalar_is_an_error() -> TestResult<()> {
        let shop = Shop::new()?;
        let customer = fixtures::customer(1, "Ada");
        customer.set("address", "1 Main St");

        let result = shop.validator().validate(&customer, &[]);

        ExpectViolations::new()
            .error("Cannot cascade into String at 'address'")
            .verify("scalar address", &result)
    }

    #[test]
    fn test_violation_root_is_validated_object() -> TestResult<()> {
        let shop = Shop::new()?;
        let customer = fixtures::customer(1, "Ada");
        customer.set("address", fixtures::address("", "75001"));

        let violations = shop.validator().validate(&customer, &[])?;

        let Some(violation) = violations.get(0) else {
            return Err(TestError::assertion_failed("root", "expected one violation"));
        };
        match &violation.root {
            Value::Object(root) if root.id() == customer.id() => Ok(()),
            other => Err(TestError::assertion_failed("root", format!("unexpected root {}", other))),
        }
    }
}

mod collections_of_objects {
    use super::*;

    #[test]
    fn test_list_elements_are_indexed() -> TestResult<()> {
        // GIVEN
        let shop = Shop::new()?;
        let customer = fixtures::customer(1, "Ada");
        customer.set(
            "addresses",
            list![fixtures::address("Paris", "75001"), fixtures::address("Lyon", "abc")],
        );

        // WHEN
        let result = shop.validator().validate(&customer, &[]);

        // THEN the custom message carries the quoted value
        ExpectViolations::new()
            .paths(&["addresses[1].zip"])
            .at("addresses[1].zip", "Invalid zip code \"abc\"")
            .verify("bad zip", &result)
    }

    #[test]
    fn test_rendered_violation_names_root_class() -> TestResult<()> {
        let shop = Shop::new()?;
        let customer = fixtures::customer(1, "Ada");
        customer.set("addresses", list![fixtures::address("", "75001")]);

        let violations = shop.validator().validate(&customer, &[])?;

        let rendered = violations.to_string();
        if rendered == "Customer.addresses[0].city:\n    This value should not be blank\n" {
            Ok(())
        } else {
            Err(TestError::assertion_failed("render", format!("got {:?}", rendered)))
        }
    }
}

mod cycles {
    use super::*;

    #[test]
    fn test_cycle_is_walked_once() -> TestResult<()> {
        // GIVEN two customers referring to each other, the second one nameless
        let shop = Shop::new()?;
        let ada = fixtures::customer(1, "Ada");
        let nameless = fixtures::customer(2, "");
        ada.set("referrer", nameless.clone());
        nameless.set("referrer", ada.clone());

        // WHEN
        let result = shop.validator().validate(&ada, &[]);

        // THEN the walk terminates and each object reports once
        ExpectViolations::new()
            .paths(&["referrer.name"])
            .verify("referrer cycle", &result)
    }

    #[test]
    fn test_self_reference_is_an_error_when_rejecting() -> TestResult<()> {
        let shop = Shop::with_config(ValidatorConfig::default().with_cycle_policy(CyclePolicy::Reject))?;
        let customer = fixtures::customer(1, "Ada");
        customer.set("referrer", customer.clone());

        let result = shop.validator().validate(&customer, &[]);

        ExpectViolations::new()
            .error("Cyclic reference to Customer at 'referrer'")
            .verify("self reference", &result)
    }

    #[test]
    fn test_shared_object_is_not_a_cycle_when_rejecting() -> TestResult<()> {
        // GIVEN the same address reachable twice, without a cycle
        let shop = Shop::with_config(ValidatorConfig::default().with_cycle_policy(CyclePolicy::Reject))?;
        let customer = fixtures::customer(1, "Ada");
        let shared = fixtures::address("", "75001");
        customer.set("address", shared.clone());
        customer.set("addresses", list![shared]);

        let result = shop.validator().validate(&customer, &[]);

        ExpectViolations::new()
            .paths(&["address.city", "addresses[0].city"])
            .verify("shared address", &result)
    }

    #[test]
    fn test_shared_object_is_reported_at_every_path() -> TestResult<()> {
        // GIVEN the default policy and the same address reachable twice
        let shop = Shop::new()?;
        let customer = fixtures::customer(1, "Ada");
        let shared = fixtures::address("", "75001");
        customer.set("address", shared.clone());
        customer.set("addresses", list![shared.clone(), shared]);

        // WHEN
        let result = shop.validator().validate(&customer, &[]);

        // THEN only true cycles are cut
        ExpectViolations::new()
            .paths(&["address.city", "addresses[0].city", "addresses[1].city"])
            .verify("shared address", &result)
    }
}
