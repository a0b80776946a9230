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
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Error carried by a finished query.
///
/// `NoRows` and `TxDone` come through the error channel but are benign: the
/// hook logs them like successful queries.
#[derive(Debug, Clone)]
pub enum QueryError {
    /// The query returned no rows
    NoRows,
    /// The transaction was already committed or rolled back
    TxDone,
    /// Any other driver or database failure
    Other(Arc<dyn Error + Send + Sync>),
}

impl QueryError {
    pub fn other<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Other(Arc::new(err))
    }

    /// Wrap a plain error message, e.g. one reported by the server.
    pub fn message<T: Into<String>>(message: T) -> Self {
        let message: String = message.into();
        let err: Box<dyn Error + Send + Sync> = message.into();
        Self::Other(Arc::from(err))
    }

    pub fn is_benign(&self) -> bool {
        matches!(self, QueryError::NoRows | QueryError::TxDone)
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::NoRows => write!(f, "sql: no rows in result set"),
            QueryError::TxDone => write!(f, "sql: transaction has already been committed or rolled back"),
            QueryError::Other(err) => write!(f, "{}", err),
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            QueryError::Other(err) => Some(&**err),
            _ => None,
        }
    }
}

/// A finished (or finishing) query as reported by the database layer.
#[derive(Debug, Clone)]
pub struct QueryEvent {
    query: String,
    start_time: Instant,
    error: Option<QueryError>,
}

impl QueryEvent {
    /// Start an event for `query`, stamped with the current instant.
    pub fn new<T: Into<String>>(query: T) -> Self {
        Self {
            query: query.into(),
            start_time: Instant::now(),
            error: None,
        }
    }

    pub fn with_start_time(mut self, start_time: Instant) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn with_error(mut self, error: QueryError) -> Self {
        self.error = Some(error);
        self
    }

    /// Record the outcome of the query.
    pub fn finish<T>(mut self, result: &std::result::Result<T, QueryError>) -> Self {
        self.error = result.as_ref().err().cloned();
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn start_time(&self) -> &Instant {
        &self.start_time
    }

    pub fn error(&self) -> Option<&QueryError> {
        self.error.as_ref()
    }
}

/// Execution context handed through the before/after hooks.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    connection_id: Option<u32>,
    metadata: HashMap<String, String>,
}

impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_connection_id(&mut self, connection_id: u32) {
        self.connection_id = Some(connection_id);
    }

    pub fn connection_id(&self) -> Option<&u32> {
        self.connection_id.as_ref()
    }

    pub fn set_metadata<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }
}
