use std::num::NonZeroU32;

use crate::controllers::interactive::errors::submit::SubmitError;
use crate::core::data::colour::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourSubmission {
    pub base_colour: Rgba,
    pub max_iterations: NonZeroU32,
}

/// Parses a packed RGBA colour written in hexadecimal, either case, with no
/// prefix. Surrounding whitespace is ignored.
pub fn parse_hex_colour(input: &str) -> Result<Rgba, SubmitError> {
    u32::from_str_radix(input.trim(), 16)
        .map(Rgba)
        .map_err(|source| SubmitError::InvalidColorInput {
            input: input.to_string(),
            source,
        })
}

pub fn parse_max_iterations(input: &str) -> Result<NonZeroU32, SubmitError> {
    input
        .trim()
        .parse::<NonZeroU32>()
        .map_err(|source| SubmitError::InvalidIterationInput {
            input: input.to_string(),
            source,
        })
}

/// Validates both fields; the colour is checked first.
pub fn parse_submission(
    hex_rgba: &str,
    max_iterations: &str,
) -> Result<ColourSubmission, SubmitError> {
    let base_colour = parse_hex_colour(hex_rgba)?;
    let max_iterations = parse_max_iterations(max_iterations)?;

    Ok(ColourSubmission {
        base_colour,
        max_iterations,
    })
}
