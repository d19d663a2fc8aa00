//! Presenter trait and base implementation
//!
//! A presenter wraps a subject (held in its erased `serde_json::Value` form)
//! plus an optional view context, and answers field lookups: names the
//! presenter declares itself win, everything else falls through to the
//! subject. A name absent from both fails with [`PresentError::FieldMissing`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{PresentError, PresentResult};

/// Constructor signature stored in the registry
///
/// Takes the erased subject and the optional view context. A constructor that
/// cannot accept the supplied subject returns
/// [`PresentError::ConstructorMismatch`]; the registry propagates it
/// unmodified.
pub type PresenterCtor = fn(Value, Option<Value>) -> PresentResult<Box<dyn Presenter>>;

/// A presentation wrapper around a subject
///
/// Implementors usually embed a [`BasePresenter`] and override
/// [`local_field`](Presenter::local_field) to declare derived fields. The
/// default [`get_field`](Presenter::get_field) dispatch may also be replaced
/// wholesale for presenters that answer every name themselves.
pub trait Presenter {
    /// The wrapped subject
    fn subject(&self) -> &Value;

    /// Mutable access to the wrapped subject
    fn subject_mut(&mut self) -> &mut Value;

    /// The view context this presenter was constructed with, if any
    fn view_context(&self) -> Option<&Value>;

    /// Names of the fields the presenter declares itself
    fn local_field_names(&self) -> &'static [&'static str] {
        &[]
    }

    /// A field declared on the presenter itself, or `None` to fall through
    fn local_field(&self, _name: &str) -> Option<Value> {
        None
    }

    /// Replace the wrapped subject; subsequent forwarded reads reflect it
    fn set_subject(&mut self, subject: Value) {
        *self.subject_mut() = subject;
    }

    /// Look up a field: presenter first, then the subject
    fn get_field(&self, name: &str) -> PresentResult<Value> {
        if let Some(value) = self.local_field(name) {
            debug!(%name, "field resolved on presenter");
            return Ok(value);
        }
        if let Some(value) = self.subject().get(name) {
            debug!(%name, "field forwarded to subject");
            return Ok(value.clone());
        }
        Err(PresentError::FieldMissing(name.to_string()))
    }

    /// The presenter as a single JSON object for template rendering
    ///
    /// Subject fields overlaid with the presenter's own, so declared fields
    /// shadow same-named subject fields here too.
    fn to_value(&self) -> Value {
        let mut merged = match self.subject() {
            Value::Object(map) => map.clone(),
            other => {
                let mut map = Map::new();
                if !other.is_null() {
                    map.insert("subject".to_string(), other.clone());
                }
                map
            }
        };
        for name in self.local_field_names() {
            if let Some(value) = self.local_field(name) {
                merged.insert((*name).to_string(), value);
            }
        }
        Value::Object(merged)
    }
}

impl std::fmt::Debug for dyn Presenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presenter")
            .field("subject", self.subject())
            .field("view_context", &self.view_context())
            .finish()
    }
}

/// Presenter with no fields of its own; every lookup forwards to the subject
#[derive(Debug, Clone)]
pub struct BasePresenter {
    /// The wrapped subject
    pub subject: Value,
    /// Optional view context, passed through unchanged
    pub view_context: Option<Value>,
}

impl BasePresenter {
    /// Wrap a subject with an optional view context
    pub fn new(subject: Value, view_context: Option<Value>) -> Self {
        Self { subject, view_context }
    }

    /// Ready-made [`PresenterCtor`] producing a boxed `BasePresenter`
    pub fn construct(subject: Value, view_context: Option<Value>) -> PresentResult<Box<dyn Presenter>> {
        Ok(Box::new(Self::new(subject, view_context)))
    }
}

impl Presenter for BasePresenter {
    fn subject(&self) -> &Value {
        &self.subject
    }

    fn subject_mut(&mut self) -> &mut Value {
        &mut self.subject
    }

    fn view_context(&self) -> Option<&Value> {
        self.view_context.as_ref()
    }
}

/// Deserialize the erased subject into the shape a presenter requires
///
/// The typed-constructor helper: failure means the constructor does not
/// accept this subject, reported as [`PresentError::ConstructorMismatch`].
pub fn typed_subject<T: DeserializeOwned>(subject: &Value) -> PresentResult<T> {
    serde_json::from_value(subject.clone()).map_err(|e| PresentError::ConstructorMismatch(e.to_string()))
}
