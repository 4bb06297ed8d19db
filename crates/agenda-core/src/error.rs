use thiserror::Error;

/// Why a field value was refused.
///
/// Entity constructors and setters return the first violation they hit.
/// Registry operations swallow it and report `false` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The {field} field cannot be NULL.")]
    NullField { field: &'static str },

    #[error("The {field} field must be at least {min} characters.")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("The {field} field must not exceed {max} characters.")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("The {field} field cannot be in the past.")]
    PastDate { field: &'static str },
}

impl ValidationError {
    /// Display name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NullField { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::PastDate { field } => field,
        }
    }
}
