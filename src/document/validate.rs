//! The self-validation capability shared by every document node.

use serde_json::{Map, Value};

use super::ValidationError;

/// A value that can check its own invariants.
///
/// Every node of the document tree implements `Validate`, and
/// [`Resource<T>`](crate::Resource) requires it of its attributes type so
/// that caller-defined rules run as part of the recursive walk.
///
/// # Example
///
/// ```rust
/// use jsonapi_document::{Validate, ValidationError};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct UserAttributes {
///     email: String,
/// }
///
/// impl Validate for UserAttributes {
///     fn validate(&self) -> Result<(), ValidationError> {
///         if !self.email.contains('@') {
///             return Err(ValidationError::invalid_attribute("email", "must contain '@'"));
///         }
///         Ok(())
///     }
/// }
///
/// let attributes = UserAttributes { email: "nobody".to_string() };
/// assert!(attributes.validate().is_err());
/// ```
pub trait Validate {
    /// Checks the value, returning the first violation found.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] discovered.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Free-form attribute objects carry no rules of their own.
impl Validate for Map<String, Value> {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}
