//! PresenterRegistry - resolves presenters for subjects
//!
//! The registry replaces runtime module introspection with an explicit table
//! keyed by the same naming convention: a namespace level (the conventional
//! `<module parent>::presenter` path) and a name level (`<Type>Presenter`).
//! Keeping the two levels separate keeps the two failure modes separate: an
//! unknown namespace and a known namespace missing the name are different
//! errors.
//!
//! Populate at startup, then share read-only (wrap in `Arc` for the template
//! helper).

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::convention::{PresenterKey, subject_type_path};
use crate::error::{PresentError, PresentResult};
use crate::presenter::{Presenter, PresenterCtor};

/// Key under which [`tag_subject`](PresenterRegistry::tag_subject) records
/// the subject's type path
pub const SUBJECT_TYPE_KEY: &str = "$subject_type";

/// Table of presenter constructors, keyed by namespace and name
#[derive(Default)]
pub struct PresenterRegistry {
    namespaces: HashMap<String, HashMap<String, PresenterCtor>>,
}

impl PresenterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the conventional presenter for subject type `S`
    ///
    /// The key is derived from `S` by the naming convention and validated
    /// here: a second registration for the same key is rejected.
    pub fn register<S: ?Sized>(&mut self, ctor: PresenterCtor) -> PresentResult<()> {
        let key = PresenterKey::for_subject::<S>()?;
        self.register_key(key, ctor)
    }

    /// Register under an explicit namespace and name
    ///
    /// For callers registering on behalf of types they do not have at hand
    /// (plugin tables, config-driven setups).
    pub fn register_at(&mut self, namespace: &str, name: &str, ctor: PresenterCtor) -> PresentResult<()> {
        self.register_key(
            PresenterKey {
                namespace: namespace.to_string(),
                name: name.to_string(),
            },
            ctor,
        )
    }

    fn register_key(&mut self, key: PresenterKey, ctor: PresenterCtor) -> PresentResult<()> {
        let names = self.namespaces.entry(key.namespace.clone()).or_default();
        if names.contains_key(&key.name) {
            return Err(PresentError::DuplicatePresenter {
                namespace: key.namespace,
                name: key.name,
            });
        }
        info!(namespace = %key.namespace, name = %key.name, "registered presenter");
        names.insert(key.name, ctor);
        Ok(())
    }

    /// Resolve the conventional constructor for subject type `S`
    pub fn resolve<S: ?Sized>(&self) -> PresentResult<PresenterCtor> {
        self.resolve_key(&PresenterKey::for_subject::<S>()?)
    }

    /// Resolve a constructor by explicit key
    pub fn resolve_key(&self, key: &PresenterKey) -> PresentResult<PresenterCtor> {
        debug!(namespace = %key.namespace, name = %key.name, "resolving presenter");
        let names = self
            .namespaces
            .get(&key.namespace)
            .ok_or_else(|| PresentError::NamespaceNotFound(key.namespace.clone()))?;
        names
            .get(&key.name)
            .copied()
            .ok_or_else(|| PresentError::PresenterNotFound {
                namespace: key.namespace.clone(),
                name: key.name.clone(),
            })
    }

    /// Present a subject
    ///
    /// With an explicit constructor the registry is bypassed and the
    /// constructor's own error, if any, propagates unmodified. Without one
    /// the constructor is resolved by the naming convention.
    pub fn present<S: Serialize>(
        &self,
        subject: &S,
        ctor: Option<PresenterCtor>,
        context: Option<Value>,
    ) -> PresentResult<Box<dyn Presenter>> {
        let ctor = match ctor {
            Some(ctor) => ctor,
            None => self.resolve::<S>()?,
        };
        let subject = serde_json::to_value(subject)?;
        debug!(type_path = subject_type_path::<S>(), "presenting subject");
        ctor(subject, context)
    }

    /// Serialize a subject with its type path recorded under
    /// [`SUBJECT_TYPE_KEY`]
    ///
    /// Subjects handed to the template layer lose their Rust type; the tag
    /// lets the `present_object` helper run the naming convention anyway.
    /// Only object-shaped subjects can carry the tag.
    pub fn tag_subject<S: Serialize>(&self, subject: &S) -> PresentResult<Value> {
        let mut value = serde_json::to_value(subject)?;
        match value.as_object_mut() {
            Some(map) => {
                map.insert(
                    SUBJECT_TYPE_KEY.to_string(),
                    Value::String(subject_type_path::<S>().to_string()),
                );
                Ok(value)
            }
            None => Err(PresentError::ConstructorMismatch(format!(
                "subject '{}' does not serialize to an object",
                subject_type_path::<S>()
            ))),
        }
    }

    /// Number of registered presenters across all namespaces
    pub fn len(&self) -> usize {
        self.namespaces.values().map(HashMap::len).sum()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}
