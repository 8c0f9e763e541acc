//! Errors produced while turning builder state into a record.

use thiserror::Error;

use crate::pizza::Kind;

/// Why a construction attempt was rejected.
///
/// Every variant is terminal: the builder that produced it is spent and no
/// partial record exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// A required attribute was never supplied, or a value broke a constraint.
    #[error("invalid {attribute}: {constraint}")]
    Validation {
        attribute: &'static str,
        constraint: String,
    },

    /// A kind-specific operation reached a builder or record of another kind.
    #[error("`{operation}` applies to {expected} pizzas, not {found}")]
    TypeMismatch {
        operation: &'static str,
        expected: Kind,
        found: Kind,
    },

    /// The builder already produced (or failed to produce) its record.
    #[error("{builder} was already built")]
    UseAfterBuild { builder: &'static str },
}

impl BuildError {
    pub fn missing(attribute: &'static str) -> Self {
        Self::Validation {
            attribute,
            constraint: "is required but was never set".to_string(),
        }
    }

    pub fn invalid(attribute: &'static str, constraint: impl Into<String>) -> Self {
        Self::Validation {
            attribute,
            constraint: constraint.into(),
        }
    }

    pub fn mismatch(operation: &'static str, expected: Kind, found: Kind) -> Self {
        Self::TypeMismatch {
            operation,
            expected,
            found,
        }
    }

    /// Name of the offending attribute, for validation failures.
    pub fn attribute(&self) -> Option<&'static str> {
        match self {
            Self::Validation { attribute, .. } => Some(attribute),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_names_attribute() {
        let err = BuildError::missing("size");
        assert_eq!(err.attribute(), Some("size"));
        assert_eq!(err.to_string(), "invalid size: is required but was never set");
    }

    #[test]
    fn test_mismatch_message() {
        let err = BuildError::mismatch("size", Kind::NewYork, Kind::Calzone);
        assert_eq!(err.attribute(), None);
        assert_eq!(
            err.to_string(),
            "`size` applies to new-york pizzas, not calzone"
        );
    }

    #[test]
    fn test_use_after_build_message() {
        let err = BuildError::UseAfterBuild {
            builder: "TaggedPizzaBuilder",
        };
        assert_eq!(err.to_string(), "TaggedPizzaBuilder was already built");
    }
}
