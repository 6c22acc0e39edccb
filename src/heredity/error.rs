//! The `error` module contains the errors raised when fitness templates are
//! requested with unusable parameters.

use derive_builder::UninitializedFieldError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeredityError {
    #[error("Invalid constraint range: the minimum of {min} exceeds the maximum of {max}")]
    InvalidConstraintRange { min: usize, max: usize },

    #[error("Invalid constraint range: at least one constraint must be requested")]
    ZeroConstraints,

    #[error("Invalid score range: [{min}, {max}]")]
    InvalidScoreRange { min: f64, max: f64 },

    #[error("The gene pool does not contain any locus")]
    EmptyGenePool,

    #[error("The locus {0} of the gene pool does not contain any gene")]
    EmptyLocus(String),

    #[error("Uninitialised field: {0}")]
    UninitialisedField(String),
}

impl From<UninitializedFieldError> for HeredityError {
    fn from(error: UninitializedFieldError) -> Self {
        HeredityError::UninitialisedField(error.field_name().to_string())
    }
}

pub type Result<T> = std::result::Result<T, HeredityError>;
