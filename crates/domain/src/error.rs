//! Validation errors raised when input does not match the expected shape.

/// A request value failed the shape check.
///
/// Every variant names what went wrong in a machine-readable way so the HTTP
/// layer can report the offending field without parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field required: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("expected a JSON object")]
    NotAnObject,
}

impl ValidationError {
    /// Name of the offending field, when the error is tied to one.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field } | Self::InvalidType { field, .. } => Some(field),
            Self::NotAnObject => None,
        }
    }

    /// Stable short code describing the failure.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing",
            Self::InvalidType { .. } => "invalid_type",
            Self::NotAnObject => "not_an_object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_field_and_kind_when_missing() {
        let err = ValidationError::MissingField { field: "value" };
        assert_eq!(err.field(), Some("value"));
        assert_eq!(err.kind(), "missing");
        assert_eq!(err.to_string(), "field required: value");
    }

    #[test]
    fn should_expose_field_and_kind_when_invalid_type() {
        let err = ValidationError::InvalidType {
            field: "item_id",
            expected: "integer",
        };
        assert_eq!(err.field(), Some("item_id"));
        assert_eq!(err.kind(), "invalid_type");
        assert_eq!(
            err.to_string(),
            "invalid value for item_id: expected integer"
        );
    }

    #[test]
    fn should_have_no_field_when_not_an_object() {
        let err = ValidationError::NotAnObject;
        assert_eq!(err.field(), None);
        assert_eq!(err.kind(), "not_an_object");
    }
}
