//! Handlebars integration
//!
//! Exposes the registry to templates as a `present_object` helper. The helper
//! returns the presenter's merged fields as a value, so it composes with
//! subexpressions and block params:
//!
//! ```text
//! {{#with (present_object project) as |p|}}
//!   {{p.project_name}}: {{p.price_detail}}
//! {{/with}}
//! ```
//!
//! The second parameter is an optional explicit presenter path
//! (`"myapp::presenter::ProjectPresenter"`); without it the subject must have
//! been inserted via [`PresenterRegistry::tag_subject`] so the naming
//! convention can run after type erasure. The full render-context data is
//! threaded to the presenter as its view context.

use std::sync::Arc;

use handlebars::{
    Context, Handlebars, Helper, HelperDef, RenderContext, RenderError, RenderErrorReason, ScopedJson,
};
use serde_json::Value;
use tracing::debug;

use crate::convention::PresenterKey;
use crate::error::PresentError;
use crate::presenter::PresenterCtor;
use crate::registry::{PresenterRegistry, SUBJECT_TYPE_KEY};

/// Name the helper is registered under
pub const PRESENT_OBJECT_HELPER: &str = "present_object";

/// `present_object` helper: `(present_object subject [presenter_path])`
pub struct PresentObjectHelper {
    registry: Arc<PresenterRegistry>,
}

impl PresentObjectHelper {
    /// Create a helper backed by the given registry
    pub fn new(registry: Arc<PresenterRegistry>) -> Self {
        Self { registry }
    }

    fn resolve(&self, subject: &Value, explicit_path: Option<&str>) -> Result<PresenterCtor, PresentError> {
        let key = match explicit_path {
            Some(path) => PresenterKey::parse(path)?,
            None => {
                let tag = subject
                    .get(SUBJECT_TYPE_KEY)
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        PresentError::NamespaceNotFound(format!(
                            "subject carries no '{SUBJECT_TYPE_KEY}' tag and no presenter path was given"
                        ))
                    })?;
                PresenterKey::for_subject_path(tag)?
            }
        };
        self.registry.resolve_key(&key)
    }
}

impl HelperDef for PresentObjectHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let subject = h
            .param(0)
            .ok_or(RenderErrorReason::ParamNotFoundForIndex(PRESENT_OBJECT_HELPER, 0))?
            .value();
        let explicit_path = h.param(1).and_then(|p| p.value().as_str());
        debug!(?explicit_path, "present_object helper called");

        let ctor = self.resolve(subject, explicit_path).map_err(nested)?;
        let presented = ctor(subject.clone(), Some(ctx.data().clone())).map_err(nested)?;
        Ok(ScopedJson::Derived(presented.to_value()))
    }
}

fn nested(err: PresentError) -> RenderError {
    RenderErrorReason::NestedError(Box::new(err)).into()
}

/// Register the `present_object` helper with a handlebars instance
pub fn register_helpers(hbs: &mut Handlebars<'_>, registry: Arc<PresenterRegistry>) {
    hbs.register_helper(PRESENT_OBJECT_HELPER, Box::new(PresentObjectHelper::new(registry)));
}
