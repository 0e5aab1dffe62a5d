//! Builds and memoizes class metadata.

use crate::accessor::{resolve_getter, resolve_property};
use crate::{ClassDeclaration, ClassMetadata, MemberKind, MetadataError, MetadataResult, MetadataSource};
use dashmap::DashMap;
use std::sync::Arc;
use tenet_registry::ClassRegistry;
use tracing::debug;

/// Resolves [`ClassMetadata`] per class name and caches it for the lifetime
/// of the factory.
///
/// Ancestors (parent class, then implemented interfaces) are resolved and
/// cached before the requested class, so merging always sees fully resolved
/// metadata. Cache entries are published once and never replaced.
pub struct MetadataFactory {
    classes: Arc<ClassRegistry>,
    source: Box<dyn MetadataSource>,
    cache: DashMap<String, Arc<ClassMetadata>>,
}

impl MetadataFactory {
    pub fn new(classes: Arc<ClassRegistry>, source: impl MetadataSource + 'static) -> Self {
        Self::from_boxed(classes, Box::new(source))
    }

    pub fn from_boxed(classes: Arc<ClassRegistry>, source: Box<dyn MetadataSource>) -> Self {
        Self {
            classes,
            source,
            cache: DashMap::new(),
        }
    }

    /// The class model metadata is resolved against.
    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }

    /// Get the metadata of `class`, building it on first request.
    ///
    /// A class without any declaration yields empty metadata. A class the
    /// class model does not know is an error.
    pub fn get_class_metadata(&self, class: &str) -> MetadataResult<Arc<ClassMetadata>> {
        if let Some(cached) = self.cache.get(class) {
            return Ok(Arc::clone(cached.value()));
        }

        let class_def = self
            .classes
            .get_class(class)
            .ok_or_else(|| MetadataError::unknown_class(class))?;

        let mut ancestors = Vec::new();
        if let Some(parent) = &class_def.parent {
            ancestors.push(self.get_class_metadata(parent)?);
        }
        for interface in &class_def.interfaces {
            ancestors.push(self.get_class_metadata(interface)?);
        }

        let mut metadata = ClassMetadata::new(class);
        if let Some(declaration) = self.source.load(class)? {
            self.apply_declaration(&mut metadata, declaration)?;
        }
        for ancestor in &ancestors {
            metadata.merge(ancestor);
        }

        debug!(
            class,
            constraints = metadata.constraints().len(),
            properties = metadata.properties().len(),
            group_sequence = metadata.has_group_sequence(),
            "class metadata built"
        );

        let published = self
            .cache
            .entry(class.to_string())
            .or_insert_with(|| Arc::new(metadata));
        Ok(Arc::clone(published.value()))
    }

    /// Check whether metadata for `class` has already been built.
    pub fn has_metadata_for(&self, class: &str) -> bool {
        self.cache.contains_key(class)
    }

    /// Names of all classes with cached metadata.
    pub fn cached_classes(&self) -> Vec<String> {
        self.cache.iter().map(|entry| entry.key().clone()).collect()
    }

    fn apply_declaration(
        &self,
        metadata: &mut ClassMetadata,
        declaration: ClassDeclaration,
    ) -> MetadataResult<()> {
        for constraint in declaration.constraints {
            metadata.add_constraint(constraint);
        }

        for member in declaration.members {
            let accessor = match member.kind {
                MemberKind::Property => resolve_property(&self.classes, metadata.name(), &member.name)?,
                MemberKind::Getter => resolve_getter(&self.classes, metadata.name(), &member.name)?,
            };
            if member.constraints.is_empty() {
                metadata.add_property(&member.name, accessor);
                continue;
            }
            for constraint in member.constraints {
                metadata.add_property_constraint(&member.name, Arc::clone(&accessor), constraint);
            }
        }

        if let Some(sequence) = declaration.group_sequence {
            metadata.set_group_sequence(sequence)?;
        }

        Ok(())
    }
}
