//! Naming convention
//!
//! Derives where a subject's presenter lives from the subject's type path:
//! the presenter's name is the subject's type name plus `Presenter`, and its
//! namespace is the subject's module path with the last segment replaced by
//! `presenter`. `myapp::models::User` resolves to `UserPresenter` in
//! `myapp::presenter`.

use tracing::debug;

use crate::error::{PresentError, PresentResult};

/// Suffix appended to a subject's type name
pub const PRESENTER_SUFFIX: &str = "Presenter";

/// Namespace segment that replaces the subject module's last segment
pub const PRESENTER_SEGMENT: &str = "presenter";

/// Where a presenter is registered: a namespace plus a name within it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PresenterKey {
    /// Registry namespace, e.g. `myapp::presenter`
    pub namespace: String,
    /// Presenter name within the namespace, e.g. `UserPresenter`
    pub name: String,
}

impl PresenterKey {
    /// Derive the conventional key for a subject type path
    ///
    /// The path must be module-qualified (`crate::module::Type`); a bare type
    /// name has no module to derive a namespace from.
    pub fn for_subject_path(type_path: &str) -> PresentResult<Self> {
        let (module, type_name) = type_path.rsplit_once("::").ok_or_else(|| {
            PresentError::NamespaceNotFound(format!("subject type '{type_path}' has no module path"))
        })?;

        // Mirror of the parent-package rule: drop the module path's last
        // segment, keep a single-segment module as-is.
        let head = module.rsplit_once("::").map(|(head, _)| head).unwrap_or(module);
        let key = Self {
            namespace: format!("{head}::{PRESENTER_SEGMENT}"),
            name: format!("{type_name}{PRESENTER_SUFFIX}"),
        };
        debug!(%type_path, namespace = %key.namespace, name = %key.name, "derived presenter key");
        Ok(key)
    }

    /// Derive the conventional key for a subject type
    pub fn for_subject<S: ?Sized>() -> PresentResult<Self> {
        Self::for_subject_path(subject_type_path::<S>())
    }

    /// Parse an explicit `namespace::Name` override string
    pub fn parse(path: &str) -> PresentResult<Self> {
        let (namespace, name) = path.rsplit_once("::").ok_or_else(|| {
            PresentError::NamespaceNotFound(format!("presenter path '{path}' has no namespace"))
        })?;
        Ok(Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
        })
    }
}

impl std::fmt::Display for PresenterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.namespace, self.name)
    }
}

/// The subject's type path with generic arguments stripped
///
/// `std::any::type_name` is not a stable identity across compiler versions,
/// but the module-qualified path of a plain named type is, and that is all
/// the convention consumes.
pub fn subject_type_path<S: ?Sized>() -> &'static str {
    let full = std::any::type_name::<S>();
    match full.find('<') {
        Some(idx) => &full[..idx],
        None => full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_for_nested_module() {
        let key = PresenterKey::for_subject_path("myapp::models::User").unwrap();
        assert_eq!(key.namespace, "myapp::presenter");
        assert_eq!(key.name, "UserPresenter");
    }

    #[test]
    fn test_key_for_single_segment_module() {
        let key = PresenterKey::for_subject_path("myapp::User").unwrap();
        assert_eq!(key.namespace, "myapp::presenter");
        assert_eq!(key.name, "UserPresenter");
    }

    #[test]
    fn test_key_for_deep_module_replaces_only_last_segment() {
        let key = PresenterKey::for_subject_path("myapp::web::models::Project").unwrap();
        assert_eq!(key.namespace, "myapp::web::presenter");
        assert_eq!(key.name, "ProjectPresenter");
    }

    #[test]
    fn test_key_for_bare_type_fails() {
        let err = PresenterKey::for_subject_path("User").unwrap_err();
        assert!(matches!(err, PresentError::NamespaceNotFound(_)));
    }

    #[test]
    fn test_key_for_subject_type() {
        struct Sample;
        let key = PresenterKey::for_subject::<Sample>().unwrap();
        assert_eq!(key.name, "SamplePresenter");
        assert!(key.namespace.ends_with("::presenter"));
    }

    #[test]
    fn test_type_path_strips_generics() {
        let path = subject_type_path::<Vec<String>>();
        assert_eq!(path, "alloc::vec::Vec");
    }

    #[test]
    fn test_parse_explicit_path() {
        let key = PresenterKey::parse("myapp::presenter::UserPresenter").unwrap();
        assert_eq!(key.namespace, "myapp::presenter");
        assert_eq!(key.name, "UserPresenter");
    }

    #[test]
    fn test_parse_without_namespace_fails() {
        assert!(PresenterKey::parse("UserPresenter").is_err());
    }

    #[test]
    fn test_display() {
        let key = PresenterKey::parse("a::b::CPresenter").unwrap();
        assert_eq!(key.to_string(), "a::b::CPresenter");
    }
}
