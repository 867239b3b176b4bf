use thiserror::Error;

#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum StrokeCountError {
    #[error("stroke count {0:?} is not a number")]
    NotANumber(String),
    #[error("stroke count {0:?} is zero")]
    Zero(String),
}

/// Parse a `kTotalStrokes` value.
///
/// A value holding an ASCII space lists several candidates and only the first
/// one is used. Other separators such as U+3000 do not split the value, so it
/// fails to parse as a whole. A blank value is `Ok(None)`; a candidate that is
/// not a positive base-10 integer is an error so the caller can report it and
/// treat the count as absent.
pub fn parse_stroke_count(raw: &str) -> Result<Option<u32>, StrokeCountError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let token = if value.contains(' ') {
        value.split_whitespace().next().unwrap_or(value)
    } else {
        value
    };
    match token.parse::<u32>() {
        Ok(0) => Err(StrokeCountError::Zero(raw.to_string())),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(StrokeCountError::NotANumber(raw.to_string())),
    }
}
