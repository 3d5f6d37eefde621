//! Cooking log validation.

use crate::error::CoreError;

/// Validate a log rating.
///
/// The column is `DOUBLE PRECISION`, which would happily store `NaN` or
/// infinities parsed from strings like `"inf"`; those are rejected here.
pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    if rating.is_finite() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be a finite number, got {rating}"
        )))
    }
}
