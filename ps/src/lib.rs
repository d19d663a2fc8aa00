//! Presenter - convention-over-configuration view wrappers
//!
//! Wraps domain objects in presenters that expose formatted/derived view data
//! while forwarding everything else to the wrapped subject. Resolution is by
//! naming convention (`myapp::models::User` -> `UserPresenter` registered
//! under `myapp::presenter`), with an explicit constructor override, and is
//! exposed to handlebars templates as a `present_object` helper.
//!
//! # Example
//!
//! ```
//! use presenter::{BasePresenter, PresenterRegistry};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//! }
//!
//! # fn main() -> Result<(), presenter::PresentError> {
//! let mut registry = PresenterRegistry::new();
//! registry.register::<User>(BasePresenter::construct)?;
//!
//! let user = User { name: "John Doe".to_string() };
//! let presented = registry.present(&user, None, None)?;
//! assert_eq!(presented.get_field("name")?, "John Doe");
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`convention`] - the presenter naming rule
//! - [`presenter`] - the `Presenter` trait and `BasePresenter`
//! - [`registry`] - startup-populated constructor table and `present`
//! - [`template`] - handlebars `present_object` helper (feature `template`)

pub mod convention;
pub mod error;
pub mod presenter;
pub mod registry;

#[cfg(feature = "template")]
pub mod template;

// Re-export commonly used types
pub use convention::{PRESENTER_SEGMENT, PRESENTER_SUFFIX, PresenterKey, subject_type_path};
pub use error::{PresentError, PresentResult};
pub use presenter::{BasePresenter, Presenter, PresenterCtor, typed_subject};
pub use registry::{PresenterRegistry, SUBJECT_TYPE_KEY};

#[cfg(feature = "template")]
pub use template::{PRESENT_OBJECT_HELPER, PresentObjectHelper, register_helpers};
