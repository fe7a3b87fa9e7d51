//! Validation helper functions for tool parameters
//!
//! Unknown codes are rejected with a public error listing the valid options.
//! Out-of-range numbers are never rejected; the study state clamps them.

use crate::catalog::{Level, PartOfSpeech};
use crate::formatting::LearnedFilter;
use mcp_attr::{Result as McpResult, bail_public};
use std::str::FromStr;

fn parse_param<T>(value: &str) -> McpResult<T>
where
    T: FromStr<Err = String>,
{
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(message) => bail_public!(_, "{}", message),
    }
}

/// Parse and validate a level code
///
/// # Arguments
/// * `level_str` - Level code such as "A1" or "b2"
///
/// # Returns
/// Result containing parsed Level or error
pub fn parse_level(level_str: &str) -> McpResult<Level> {
    parse_param(level_str)
}

/// Parse and validate a part-of-speech filter
pub fn parse_part_of_speech(pos_str: &str) -> McpResult<PartOfSpeech> {
    parse_param(pos_str)
}

/// Parse and validate a learned/unlearned filter
pub fn parse_learned_filter(filter_str: &str) -> McpResult<LearnedFilter> {
    parse_param(filter_str)
}

/// Normalize an item ID by trimming surrounding whitespace
///
/// # Examples
/// ```
/// # use deutsch_daily::validation::normalize_id;
/// assert_eq!(normalize_id("  a1-haus "), "a1-haus");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim().to_string()
}
