//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.
//!
//! A variable that is set but blank counts as unset for the `_or` variants, so an
//! empty line in `.env` falls back to the default instead of failing to parse.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, or `default` when it is unset or blank.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    non_blank(name).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, or use `default` when it is unset or blank.
///
/// A present but unparsable value is still an error.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match non_blank(name) {
        Some(val) => val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name)),
        None => Ok(default),
    }
}

/// Read a comma-separated list, or `default` when unset or blank.
///
/// Items are trimmed and empty items dropped.
pub fn get_env_list_or(name: &'static str, default: &[&str]) -> Vec<String> {
    match non_blank(name) {
        Some(val) => val
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        None => default.iter().map(|s| s.to_string()).collect(),
    }
}

fn non_blank(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_missing() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_NEVER_SET"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_NEVER_SET"))
        );
    }

    #[test]
    fn test_get_env_parse_or() {
        env::set_var("LIB_UTILS_TEST_PARSE_OR", " 42 ");
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_PARSE_OR", 7u32), Ok(42));

        env::set_var("LIB_UTILS_TEST_PARSE_OR_BAD", "forty");
        assert_eq!(
            get_env_parse_or("LIB_UTILS_TEST_PARSE_OR_BAD", 7u32),
            Err(Error::WrongFormat("LIB_UTILS_TEST_PARSE_OR_BAD"))
        );

        env::set_var("LIB_UTILS_TEST_PARSE_OR_BLANK", "  ");
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_PARSE_OR_BLANK", 7u32), Ok(7));
    }

    #[test]
    fn test_get_env_list_or() {
        env::set_var("LIB_UTILS_TEST_LIST", "http://a.test, ,http://b.test ");
        assert_eq!(
            get_env_list_or("LIB_UTILS_TEST_LIST", &["x"]),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(
            get_env_list_or("LIB_UTILS_TEST_LIST_UNSET", &["x", "y"]),
            vec!["x".to_string(), "y".to_string()]
        );
    }
}
