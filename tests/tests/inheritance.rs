//! Constraints inherited from parent classes and interfaces.

use tenet_registry::{ClassRegistryBuilder, FieldDef};
use tenet_tests::prelude::*;

mod merged_constraints {
    use super::*;

    #[test]
    fn test_interface_getters_are_validated() -> TestResult<()> {
        // GIVEN a product with a blank title (Named) and a negative price (Priced)
        let shop = Shop::new()?;
        let product = fixtures::product(Some(1), "", -1);

        // WHEN
        let result = shop.validator().validate(&product, &[]);

        // THEN
        ExpectViolations::new()
            .paths(&["name", "price"])
            .at("name", "This value should not be blank")
            .at("price", "This value should be 0 or more")
            .verify("interface constraints", &result)
    }

    #[test]
    fn test_local_constraint_replaces_inherited_one_of_same_kind() -> TestResult<()> {
        // GIVEN Product and Entity both declare NotNull on id
        let shop = Shop::new()?;
        let product = fixtures::product(None, "Lamp", 10);

        // WHEN
        let result = shop.validator().validate(&product, &[]);

        // THEN only the product's own message is reported
        ExpectViolations::new()
            .count(1)
            .at("id", "A product needs an id")
            .verify("product id", &result)?;

        let metadata = shop.validator().metadata_for("Product")?;
        let id_constraints = metadata.property("id").map(|p| p.constraints().len());
        if id_constraints != Some(1) {
            return Err(TestError::assertion_failed(
                "product id",
                format!("expected one id constraint, got {:?}", id_constraints),
            ));
        }
        Ok(())
    }

    #[test]
    fn test_parent_constraint_applies_to_subclass() -> TestResult<()> {
        let shop = Shop::new()?;
        let customer = fixtures::customer(1, "Ada");
        customer.set("id", Value::Null);

        let result = shop.validator().validate(&customer, &[]);

        ExpectViolations::new()
            .paths(&["id"])
            .at("id", "This value should not be null")
            .verify("customer id", &result)
    }

    #[test]
    fn test_parent_name_selects_only_its_constraints() -> TestResult<()> {
        // GIVEN a customer failing both Entity (id) and Named (name)
        let shop = Shop::new()?;
        let customer = fixtures::customer(1, "");
        customer.set("id", Value::Null);

        // WHEN validating the implicit "Entity" group
        let result = shop.validator().validate(&customer, &["Entity".into()]);

        // THEN
        ExpectViolations::new()
            .paths(&["id"])
            .verify("entity group", &result)
    }
}

mod accessors {
    use super::*;

    #[test]
    fn test_getter_and_isser_are_chosen_from_class_model() -> TestResult<()> {
        let shop = Shop::new()?;

        let metadata = shop.validator().metadata_for("Customer")?;
        let members: Vec<Option<&str>> = ["active", "name", "email"]
            .iter()
            .map(|name| metadata.property(name).map(|p| p.accessor().member()))
            .collect();

        if members == vec![Some("isActive"), Some("getName"), Some("email")] {
            Ok(())
        } else {
            Err(TestError::assertion_failed("accessors", format!("got {:?}", members)))
        }
    }

    fn account_validator(property: &str) -> TestResult<Validator> {
        let mut classes = ClassRegistryBuilder::new();
        classes
            .add_class("Account")
            .public_field("login")
            .field(FieldDef::new("password").private())
            .done()?;
        let source = StaticMetadataSource::new().with(
            "Account",
            ClassDeclaration::new().property(property, [Constraint::rule(&NOT_BLANK).build()?]),
        );
        Ok(Validator::builder(classes.build()).source(source).build())
    }

    #[test]
    fn test_private_field_without_accessor_is_denied() -> TestResult<()> {
        let validator = account_validator("password")?;
        let account = Object::with_fields("Account", fields! { "login" => "ada", "password" => "" });

        let result = validator.validate(&account, &[]);

        ExpectViolations::new()
            .error("Member Account::password is not public")
            .verify("private password", &result)
    }

    #[test]
    fn test_unknown_member_is_an_error() -> TestResult<()> {
        let validator = account_validator("ghost")?;
        let account = Object::with_fields("Account", fields! { "login" => "ada" });

        let result = validator.validate(&account, &[]);

        ExpectViolations::new()
            .error("Neither field nor accessor for ghost exists on class Account")
            .verify("ghost property", &result)
    }
}
