//! Field-format validation collaborators.
//!
//! Validation is kept outside the domain types: a [`WorkItem`] holds its
//! e-mail as an opaque string, and the service applies [`EmailValidator`]
//! at the create/update boundary.
//!
//! [`WorkItem`]: crate::domain::item::WorkItem

pub mod email;

pub use email::EmailValidator;
