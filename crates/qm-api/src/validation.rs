use crate::error::ApiError;

/// Longest text, in characters, accepted in any request field
pub const MAX_TEXT_CHARS: usize = 512;

/// Most acceptable variants one reference may carry
pub const MAX_VARIANTS: usize = 32;

/// Validate every acceptable variant of a reference answer
///
/// `#[validate(length)]` only bounds the list itself, so each entry is
/// checked here.
///
/// # Examples
/// ```
/// use qm_api::validation::validate_variants;
///
/// assert!(validate_variants(&["Einstein".to_string()]).is_ok());
/// assert!(validate_variants(&["x".repeat(513)]).is_err());
/// ```
pub fn validate_variants(variants: &[String]) -> Result<(), ApiError> {
    if variants.len() > MAX_VARIANTS {
        return Err(ApiError::Validation(format!(
            "At most {MAX_VARIANTS} acceptable variants are allowed, got {}",
            variants.len()
        )));
    }

    for (index, variant) in variants.iter().enumerate() {
        let chars = variant.chars().count();
        if chars > MAX_TEXT_CHARS {
            return Err(ApiError::Validation(format!(
                "acceptable[{index}] must be at most {MAX_TEXT_CHARS} characters long, got {chars}"
            )));
        }
    }

    Ok(())
}
