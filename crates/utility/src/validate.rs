use std::error;
use std::fmt;

/// Characters that are never part of a legitimate location string.
const FORBIDDEN_CHARACTERS: [char; 5] = ['<', '>', '"', '\'', ';'];

/// Keywords that indicate injection attempts rather than place names.
const SUSPICIOUS_KEYWORDS: [&str; 7] = [
    "select", "insert", "update", "delete", "drop", "union", "script",
];

const SUSPICIOUS_SEQUENCES: [&str; 3] = ["--", "/*", "*/"];

const MIN_LOCATION_LENGTH: usize = 2;
const MAX_LOCATION_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Missing(&'static str),
    TooShort(&'static str),
    TooLong(&'static str),
    InvalidCharacters(&'static str),
    InvalidContent(&'static str),
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl error::Error for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::Missing(field) => {
                write!(f, "{} is required", capitalize(field))
            }
            ValidationError::TooShort(field) => write!(
                f,
                "{} must be at least {} characters long",
                capitalize(field),
                MIN_LOCATION_LENGTH
            ),
            ValidationError::TooLong(field) => write!(
                f,
                "{} must be less than {} characters",
                capitalize(field),
                MAX_LOCATION_LENGTH
            ),
            ValidationError::InvalidCharacters(field) => {
                write!(f, "{} contains invalid characters", capitalize(field))
            }
            ValidationError::InvalidContent(field) => {
                write!(f, "{} contains invalid content", capitalize(field))
            }
            ValidationError::LatitudeOutOfRange(lat) => {
                write!(f, "Latitude must be between -90 and 90, got {}", lat)
            }
            ValidationError::LongitudeOutOfRange(lon) => {
                write!(f, "Longitude must be between -180 and 180, got {}", lon)
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Validate free-form location text and return the trimmed string.
///
/// `field` names the input ("origin", "destination") for error messages.
pub fn validate_location_input(
    location: &str,
    field: &'static str,
) -> Result<String, ValidationError> {
    let location = location.trim();

    if location.is_empty() {
        return Err(ValidationError::Missing(field));
    }
    if location.len() < MIN_LOCATION_LENGTH {
        return Err(ValidationError::TooShort(field));
    }
    if location.len() > MAX_LOCATION_LENGTH {
        return Err(ValidationError::TooLong(field));
    }
    if location.chars().any(|c| FORBIDDEN_CHARACTERS.contains(&c)) {
        return Err(ValidationError::InvalidCharacters(field));
    }

    let lowered = location.to_lowercase();
    let has_suspicious_keyword = lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .any(|word| SUSPICIOUS_KEYWORDS.contains(&word));
    let has_suspicious_sequence = SUSPICIOUS_SEQUENCES
        .iter()
        .any(|sequence| lowered.contains(sequence));
    if has_suspicious_keyword || has_suspicious_sequence {
        return Err(ValidationError::InvalidContent(field));
    }

    Ok(location.to_owned())
}

/// Validate a latitude/longitude pair.
pub fn validate_coordinates(
    latitude: f64,
    longitude: f64,
) -> Result<(f64, f64), ValidationError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::LongitudeOutOfRange(longitude));
    }
    Ok((latitude, longitude))
}
