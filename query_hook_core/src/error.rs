/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */
use std::fmt;

/// Errors raised while building a hook configuration.
///
/// The hook itself never fails; only the configuration surface can.
#[derive(Debug)]
pub enum QueryHookError {
    /// A level name that is not one of trace/debug/info/warn/error
    InvalidLevel(String),
    /// A duration precision that could not be parsed
    InvalidPrecision(String),
    /// Malformed settings document
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, QueryHookError>;

impl QueryHookError {
    pub fn invalid_precision<T: Into<String>>(value: T) -> Self {
        Self::InvalidPrecision(value.into())
    }
}

impl fmt::Display for QueryHookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryHookError::InvalidLevel(level) => write!(f, "Invalid log level: '{}'", level),
            QueryHookError::InvalidPrecision(value) => write!(f, "Invalid duration precision: '{}'", value),
            QueryHookError::InvalidSettings(message) => write!(f, "Invalid hook settings: {}", message),
        }
    }
}

impl std::error::Error for QueryHookError {}

impl From<serde_json::Error> for QueryHookError {
    fn from(err: serde_json::Error) -> Self {
        QueryHookError::InvalidSettings(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(QueryHookError::InvalidLevel("loud".to_string()).to_string(), "Invalid log level: 'loud'");
        assert_eq!(QueryHookError::invalid_precision("3 parsecs").to_string(), "Invalid duration precision: '3 parsecs'");
        let err: QueryHookError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid hook settings: "));
    }
}
