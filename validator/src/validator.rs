//! The validator facade.

use crate::{GraphWalker, GroupChain, PropertyPath, ValidationResult, ValidatorConfig, ViolationList};
use std::sync::Arc;
use tenet_constraint::{DefaultValidatorFactory, ValidatorFactory, ValidatorRegistry};
use tenet_core::{ObjectRef, Value};
use tenet_metadata::{ChainSource, ClassMetadata, Constraint, GroupSpec, MetadataFactory, MetadataSource};
use tenet_registry::ClassRegistry;
use tracing::debug;

/// Entry point for validating objects, single properties and bare values.
///
/// A validator owns the metadata cache and the validator unit cache, both of
/// which live as long as the validator. It can be shared across threads.
pub struct Validator {
    metadata: MetadataFactory,
    validators: ValidatorRegistry,
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(metadata: MetadataFactory, validators: ValidatorRegistry, config: ValidatorConfig) -> Self {
        Self {
            metadata,
            validators,
            config,
        }
    }

    /// Start building a validator over a class model.
    pub fn builder(classes: impl Into<Arc<ClassRegistry>>) -> ValidatorBuilder {
        ValidatorBuilder::new(classes)
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Resolved metadata of `class`, including inherited constraints.
    pub fn metadata_for(&self, class: &str) -> ValidationResult<Arc<ClassMetadata>> {
        Ok(self.metadata.get_class_metadata(class)?)
    }

    /// Validate an object graph. An empty `groups` slice means `Default`.
    pub fn validate(&self, object: &ObjectRef, groups: &[GroupSpec]) -> ValidationResult<ViolationList> {
        let class = self.metadata_for(object.class())?;
        let chain = GroupChain::resolve(groups, class.group_sequence())?;
        let mut walker = self.walker(Value::Object(object.clone()));
        let root = PropertyPath::root();

        run_chain(&chain, &mut walker, |walker, group| {
            walker.walk_class(&class, object, group, &root)
        })?;
        Ok(walker.into_violations())
    }

    /// Validate the current value of one property of `object`. A property
    /// without metadata yields no violations.
    pub fn validate_property(
        &self,
        object: &ObjectRef,
        property: &str,
        groups: &[GroupSpec],
    ) -> ValidationResult<ViolationList> {
        let class = self.metadata_for(object.class())?;
        let chain = GroupChain::resolve(groups, class.group_sequence())?;
        let mut walker = self.walker(Value::Object(object.clone()));
        let Some(metadata) = class.property(property) else {
            return Ok(walker.into_violations());
        };
        let path = PropertyPath::root().child(property);

        run_chain(&chain, &mut walker, |walker, group| {
            walker.walk_property(metadata, object, group, &path)
        })?;
        Ok(walker.into_violations())
    }

    /// Validate `value` as if it were the value of `property` on an instance
    /// of `class`. The violations' root is the class name.
    pub fn validate_value(
        &self,
        class: &str,
        property: &str,
        value: &Value,
        groups: &[GroupSpec],
    ) -> ValidationResult<ViolationList> {
        let metadata = self.metadata_for(class)?;
        let chain = GroupChain::resolve(groups, metadata.group_sequence())?;
        let mut walker = self.walker(Value::String(class.to_string()));
        let Some(property_metadata) = metadata.property(property) else {
            return Ok(walker.into_violations());
        };
        let path = PropertyPath::root().child(property);

        run_chain(&chain, &mut walker, |walker, group| {
            walker.walk_property_value(property_metadata, value, group, &path)
        })?;
        Ok(walker.into_violations())
    }

    /// Validate a bare value against one constraint. The constraint is
    /// applied in every requested group it belongs to.
    pub fn validate_value_with(
        &self,
        value: &Value,
        constraint: &Constraint,
        groups: &[GroupSpec],
    ) -> ValidationResult<ViolationList> {
        let chain = GroupChain::resolve(groups, None)?;
        let mut walker = self.walker(value.clone());
        let root = PropertyPath::root();

        run_chain(&chain, &mut walker, |walker, group| {
            if !constraint.in_group(group) {
                return Ok(());
            }
            walker.walk_constraint(constraint, value, group, &root)
        })?;
        Ok(walker.into_violations())
    }

    fn walker(&self, root: Value) -> GraphWalker<'_> {
        GraphWalker::new(root, &self.metadata, &self.validators, &self.config)
    }
}

/// Run every pass of `chain`. Plain groups all run; each sequence stops after
/// the first group that adds violations.
fn run_chain<F>(chain: &GroupChain, walker: &mut GraphWalker<'_>, mut pass: F) -> ValidationResult<()>
where
    F: FnMut(&mut GraphWalker<'_>, &str) -> ValidationResult<()>,
{
    for group in chain.groups() {
        pass(&mut *walker, group.as_str())?;
    }

    for sequence in chain.sequences() {
        for group in sequence.iter() {
            let before = walker.violation_count();
            pass(&mut *walker, group)?;
            if walker.violation_count() > before {
                debug!(group, "group sequence stopped");
                break;
            }
        }
    }
    Ok(())
}

/// Builder for a [`Validator`].
pub struct ValidatorBuilder {
    classes: Arc<ClassRegistry>,
    sources: ChainSource,
    factory: Option<Box<dyn ValidatorFactory>>,
    config: ValidatorConfig,
}

impl ValidatorBuilder {
    pub fn new(classes: impl Into<Arc<ClassRegistry>>) -> Self {
        Self {
            classes: classes.into(),
            sources: ChainSource::new(),
            factory: None,
            config: ValidatorConfig::default(),
        }
    }

    /// Add a metadata source. Declarations from all sources are combined.
    pub fn source(mut self, source: impl MetadataSource + 'static) -> Self {
        self.sources = self.sources.with_source(source);
        self
    }

    /// Replace the default validator factory (all built-in units).
    pub fn factory(mut self, factory: impl ValidatorFactory + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Validator {
        let factory: Box<dyn ValidatorFactory> = match self.factory {
            Some(factory) => factory,
            None => Box::new(DefaultValidatorFactory::new()),
        };
        Validator::new(
            MetadataFactory::new(self.classes, self.sources),
            ValidatorRegistry::from_boxed(factory),
            self.config,
        )
    }
}
