//! Request validation and the error taxonomy

pub mod error;
pub mod fields;

pub use error::{ComputationError, GeodesyError, GeodesyResult, ValidationErrors};
pub use fields::{FieldKind, FieldSpec, RequestValidator, ValidatedFields};
