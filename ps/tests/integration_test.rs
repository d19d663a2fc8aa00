//! Integration tests for the presenter crate
//!
//! These tests verify end-to-end resolution and delegation behavior. The
//! handlebars helper is covered separately in `template_test.rs`.

use presenter::{BasePresenter, PresentError, PresentResult, Presenter, PresenterRegistry, typed_subject};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct User {
    name: String,
    email: String,
}

fn user() -> User {
    User {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
    }
}

/// Presenter with derived fields over a typed view of the subject
struct UserPresenter {
    base: BasePresenter,
    user: User,
}

impl UserPresenter {
    fn construct(subject: Value, view_context: Option<Value>) -> PresentResult<Box<dyn Presenter>> {
        let user: User = typed_subject(&subject)?;
        Ok(Box::new(Self {
            base: BasePresenter::new(subject, view_context),
            user,
        }))
    }
}

impl Presenter for UserPresenter {
    fn subject(&self) -> &Value {
        self.base.subject()
    }

    fn subject_mut(&mut self) -> &mut Value {
        self.base.subject_mut()
    }

    fn view_context(&self) -> Option<&Value> {
        self.base.view_context()
    }

    fn local_field_names(&self) -> &'static [&'static str] {
        &["display_caps_name", "display_caps_email"]
    }

    fn local_field(&self, name: &str) -> Option<Value> {
        match name {
            "display_caps_name" => Some(json!(self.user.name.to_uppercase())),
            "display_caps_email" => Some(json!(self.user.email.to_uppercase())),
            _ => None,
        }
    }
}

// =============================================================================
// Resolution Tests
// =============================================================================

#[test]
fn test_present_with_explicit_presenter() {
    let registry = PresenterRegistry::new();

    let presented = registry.present(&user(), Some(UserPresenter::construct), None).unwrap();

    assert_eq!(presented.get_field("display_caps_name").unwrap(), json!("JOHN DOE"));
    assert_eq!(presented.get_field("name").unwrap(), json!("John Doe"));
}

#[test]
fn test_present_discovers_conventional_presenter() {
    let mut registry = PresenterRegistry::new();
    registry.register::<User>(UserPresenter::construct).unwrap();

    let presented = registry.present(&user(), None, None).unwrap();

    assert_eq!(presented.get_field("display_caps_email").unwrap(), json!("JOHN@EXAMPLE.COM"));
}

#[test]
fn test_present_without_registration_fails() {
    let registry = PresenterRegistry::new();

    let err = registry.present(&user(), None, None).unwrap_err();

    assert!(matches!(err, PresentError::NamespaceNotFound(_)));
}

#[test]
fn test_present_with_incompatible_presenter() {
    #[derive(Deserialize)]
    struct Invoice {
        #[allow(dead_code)]
        total: f64,
    }

    fn invoice_ctor(subject: Value, view_context: Option<Value>) -> PresentResult<Box<dyn Presenter>> {
        let _: Invoice = typed_subject(&subject)?;
        BasePresenter::construct(subject, view_context)
    }

    let registry = PresenterRegistry::new();
    let err = registry.present(&user(), Some(invoice_ctor), None).unwrap_err();

    assert!(matches!(err, PresentError::ConstructorMismatch(_)));
}

#[test]
fn test_present_threads_view_context_unchanged() {
    let registry = PresenterRegistry::new();
    let ctx = json!({"request_path": "/users/1", "flags": [1, 2, 3]});

    let presented = registry
        .present(&user(), Some(UserPresenter::construct), Some(ctx.clone()))
        .unwrap();

    assert_eq!(presented.view_context(), Some(&ctx));
}

// =============================================================================
// Delegation Tests
// =============================================================================

#[test]
fn test_forwarded_field_reflects_reassigned_subject() {
    let registry = PresenterRegistry::new();
    let mut presented = registry.present(&user(), Some(BasePresenter::construct), None).unwrap();
    assert_eq!(presented.get_field("name").unwrap(), json!("John Doe"));

    presented.set_subject(json!({"name": "Jane Roe"}));

    assert_eq!(presented.get_field("name").unwrap(), json!("Jane Roe"));
}

#[test]
fn test_missing_field_fails_on_wrapper_and_subject() {
    let registry = PresenterRegistry::new();
    let presented = registry.present(&user(), Some(UserPresenter::construct), None).unwrap();

    let err = presented.get_field("phone_number").unwrap_err();
    assert!(err.to_string().contains("'phone_number'"));
}
