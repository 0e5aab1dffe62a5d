//! A small shop domain used by the integration scenarios.
//!
//! ```text
//! interface Named   { getName }           name:  NotBlank
//! interface Priced  { getPrice }          price: Range(min = 0)
//! class Entity      { id }                id:    NotNull
//! class Address     { street, city, zip } city:  NotBlank, zip: Regex
//! class Customer extends Entity implements Named
//!     email: Regex, address: Valid(Address), addresses: Valid,
//!     orders: Valid, referrer: Valid(Customer), active: IsTrue [Strict]
//! class Order extends Entity implements Priced, sequence [Basic, Strict]
//!     total: Range(min = 0) [Basic], Range(max = 1000) [Strict]
//!     currency: NotNull [Strict], Choice(EUR, USD) [Strict]
//! class Product extends Entity implements Named, Priced
//!     id: NotNull("A product needs an id"), sku: Regex
//! class Basket
//!     quantities: Any(Range(1..5), EqualTo(3)), counts: All(same),
//!     tags: All(NotBlank, Length(max = 8))
//! ```

use std::sync::Arc;
use tenet_constraint::builtin::{CHOICE, EQUAL_TO, IS_TRUE, LENGTH, NOT_BLANK, NOT_NULL, RANGE, REGEX};
use tenet_core::{fields, list, Object, ObjectRef, Value};
use tenet_metadata::{ClassDeclaration, Constraint, GroupSequence, StaticMetadataSource};
use tenet_registry::{ClassRegistry, ClassRegistryBuilder, FieldDef, MethodDef};
use tenet_validator::{Validator, ValidatorConfig};

use crate::TestResult;

/// The shop class model.
pub fn classes() -> TestResult<ClassRegistry> {
    let mut builder = ClassRegistryBuilder::new();
    builder
        .add_interface("Named")
        .method(MethodDef::abstract_method("getName"))
        .done()?;
    builder
        .add_interface("Priced")
        .method(MethodDef::abstract_method("getPrice"))
        .done()?;
    builder.add_class("Entity").public_field("id").done()?;
    builder
        .add_class("Address")
        .public_field("street")
        .public_field("city")
        .public_field("zip")
        .done()?;
    builder
        .add_class("Customer")
        .extends("Entity")
        .implements("Named")
        .public_field("name")
        .public_field("email")
        .public_field("address")
        .public_field("addresses")
        .public_field("orders")
        .public_field("referrer")
        .field(FieldDef::new("active").private())
        .field(FieldDef::new("password").private())
        .public_method("getName", |o| o.get("name").unwrap_or(Value::Null))
        .public_method("isActive", |o| o.get("active").unwrap_or(Value::Bool(false)))
        .done()?;
    builder
        .add_class("Order")
        .extends("Entity")
        .implements("Priced")
        .public_field("total")
        .public_field("currency")
        .public_method("getPrice", |o| o.get("total").unwrap_or(Value::Null))
        .done()?;
    builder
        .add_class("Product")
        .extends("Entity")
        .implements("Named")
        .implements("Priced")
        .public_field("title")
        .public_field("price")
        .public_field("sku")
        .public_method("getName", |o| o.get("title").unwrap_or(Value::Null))
        .public_method("getPrice", |o| o.get("price").unwrap_or(Value::Null))
        .done()?;
    builder
        .add_class("Basket")
        .public_field("quantities")
        .public_field("counts")
        .public_field("tags")
        .done()?;
    Ok(builder.build())
}

fn element_checks() -> TestResult<Vec<Constraint>> {
    Ok(vec![
        Constraint::rule(&RANGE).option("min", 1).option("max", 5).build()?,
        Constraint::rule(&EQUAL_TO).value(3).build()?,
    ])
}

/// Constraint declarations for the shop model.
pub fn metadata() -> TestResult<StaticMetadataSource> {
    let mut source = StaticMetadataSource::new();

    source.declare(
        "Entity",
        ClassDeclaration::new().property("id", [Constraint::rule(&NOT_NULL).build()?]),
    );
    source.declare(
        "Named",
        ClassDeclaration::new().getter("name", [Constraint::rule(&NOT_BLANK).build()?]),
    );
    source.declare(
        "Priced",
        ClassDeclaration::new().getter("price", [Constraint::rule(&RANGE).option("min", 0).build()?]),
    );
    source.declare(
        "Address",
        ClassDeclaration::new()
            .property("city", [Constraint::rule(&NOT_BLANK).build()?])
            .property(
                "zip",
                [Constraint::rule(&REGEX)
                    .value(r"^\d{5}$")
                    .message("Invalid zip code {{ value }}")
                    .build()?],
            ),
    );
    source.declare(
        "Customer",
        ClassDeclaration::new()
            .property("email", [Constraint::rule(&REGEX).value("^[^@]+@[^@]+$").build()?])
            .property("address", [Constraint::valid().value("Address").build()?])
            .property("addresses", [Constraint::valid().build()?])
            .property("orders", [Constraint::valid().build()?])
            .property("referrer", [Constraint::valid().value("Customer").build()?])
            .getter("active", [Constraint::rule(&IS_TRUE).group("Strict").build()?]),
    );
    source.declare(
        "Order",
        ClassDeclaration::new()
            .property(
                "total",
                [
                    Constraint::rule(&RANGE).option("min", 0).group("Basic").build()?,
                    Constraint::rule(&RANGE).option("max", 1000).group("Strict").build()?,
                ],
            )
            .property(
                "currency",
                [
                    Constraint::rule(&NOT_NULL).group("Strict").build()?,
                    Constraint::rule(&CHOICE)
                        .value(list!["EUR", "USD"])
                        .group("Strict")
                        .build()?,
                ],
            )
            .group_sequence(GroupSequence::new(["Basic", "Strict"])),
    );
    source.declare(
        "Product",
        ClassDeclaration::new()
            .property(
                "id",
                [Constraint::rule(&NOT_NULL).message("A product needs an id").build()?],
            )
            .property("sku", [Constraint::rule(&REGEX).value(r"^[A-Z]{3}-\d+$").build()?]),
    );
    source.declare(
        "Basket",
        ClassDeclaration::new()
            .property("quantities", [Constraint::any(element_checks()?).build()?])
            .property("counts", [Constraint::all(element_checks()?).build()?])
            .property(
                "tags",
                [Constraint::all(vec![
                    Constraint::rule(&NOT_BLANK).build()?,
                    Constraint::rule(&LENGTH).option("max", 8).build()?,
                ])
                .build()?],
            ),
    );

    Ok(source)
}

/// A validator over the shop model.
pub struct Shop {
    validator: Validator,
}

impl Shop {
    pub fn new() -> TestResult<Self> {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> TestResult<Self> {
        let validator = Validator::builder(Arc::new(classes()?))
            .source(metadata()?)
            .config(config)
            .build();
        Ok(Self { validator })
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}

// ==================== Instances ====================

pub fn address(city: &str, zip: &str) -> ObjectRef {
    Object::with_fields(
        "Address",
        fields! { "street" => "1 Main St", "city" => city, "zip" => zip },
    )
}

/// A customer that passes every Default constraint.
pub fn customer(id: i64, name: &str) -> ObjectRef {
    Object::with_fields(
        "Customer",
        fields! {
            "id" => id,
            "name" => name,
            "email" => "someone@example.com",
            "active" => true,
        },
    )
}

pub fn order(id: i64, total: impl Into<Value>, currency: Option<&str>) -> ObjectRef {
    Object::with_fields(
        "Order",
        fields! { "id" => id, "total" => total.into(), "currency" => currency },
    )
}

pub fn product(id: Option<i64>, title: &str, price: impl Into<Value>) -> ObjectRef {
    Object::with_fields(
        "Product",
        fields! { "id" => id, "title" => title, "price" => price.into(), "sku" => "ABC-1" },
    )
}

pub fn basket(quantities: Value, counts: Value) -> ObjectRef {
    Object::with_fields(
        "Basket",
        fields! { "quantities" => quantities, "counts" => counts },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fixtures_are_valid() {
        let shop = Shop::new().unwrap();
        let customer = customer(1, "Ada");
        customer.set("address", address("Paris", "75001"));
        customer.set("orders", list![order(2, 10, Some("EUR"))]);

        let violations = shop.validator().validate(&customer, &[]).unwrap();

        assert!(violations.is_empty(), "unexpected violations:\n{}", violations);
    }

    #[test]
    fn test_every_class_has_metadata() {
        let shop = Shop::new().unwrap();

        for class in ["Named", "Priced", "Entity", "Address", "Customer", "Order", "Product", "Basket"] {
            assert!(shop.validator().metadata_for(class).is_ok(), "{}", class);
        }
    }
}
