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
use std::time::Duration;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::duration::format_duration;
use crate::event::QueryError;
use crate::level::LogLevel;

/// Key of the field carrying the query duration.
pub const DURATION_FIELD: &str = "duration";

/// Typed value of a structured log field.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Rounded duration, already rendered to its string form
    Duration(String),
    /// Error reported by the query
    Error(QueryError),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Duration(value) => f.write_str(value),
            FieldValue::Error(err) => write!(f, "{}", err),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Named structured field attached to a log record.
#[derive(Debug, Clone)]
pub struct LogField {
    pub key: String,
    pub value: FieldValue,
}

impl LogField {
    pub fn duration(duration: Duration) -> Self {
        Self {
            key: DURATION_FIELD.to_string(),
            value: FieldValue::Duration(format_duration(duration)),
        }
    }

    pub fn error<K: Into<String>>(key: K, err: QueryError) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::Error(err),
        }
    }
}

/// Serializes an ordered field list as a JSON-style object.
pub struct Fields<'a>(pub &'a [LogField]);

impl Serialize for Fields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for field in self.0 {
            map.serialize_entry(&field.key, &field.value)?;
        }
        map.end()
    }
}

/// One log entry produced for a query.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub fields: Vec<LogField>,
}

impl LogRecord {
    pub fn new<T: Into<String>>(level: LogLevel, message: T) -> Self {
        Self {
            level,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }

    pub fn field_keys(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.key.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_order_when_serialized() {
        let fields = vec![
            LogField::duration(Duration::from_millis(4)),
            LogField::error("err", QueryError::message("relation \"nop\" does not exist")),
        ];
        let json = serde_json::to_string(&Fields(&fields)).unwrap();
        assert_eq!(json, r#"{"duration":"4ms","err":"relation \"nop\" does not exist"}"#);
    }

    #[test]
    fn test_record_field_lookup() {
        let mut record = LogRecord::new(LogLevel::Error, "SELECT 1");
        record.fields.push(LogField::error("error", QueryError::message("boom")));
        assert_eq!(record.field("error").map(|v| v.to_string()), Some("boom".to_string()));
        assert!(record.field("duration").is_none());
        assert_eq!(record.field_keys(), vec!["error"]);
    }
}
