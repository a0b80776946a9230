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
use query_hook_core::{Fields, LogField, LogLevel};
use tracing::{debug, error, info, trace, warn};

use crate::sink::LogSink;

/// Target of the events emitted by [`TracingSink`].
pub const TRACING_TARGET: &str = "query_hook";

/// Forwards records to `tracing` under the `query_hook` target.
///
/// Structured fields travel as a single `fields` value, a JSON object in
/// emission order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

macro_rules! emit {
    ($mac:ident, $message:expr, $fields:expr) => {
        match $fields {
            Some(fields) => $mac!(target: TRACING_TARGET, fields = %fields, "{}", $message),
            None => $mac!(target: TRACING_TARGET, "{}", $message),
        }
    };
}

impl LogSink for TracingSink {
    fn log(&self, level: LogLevel, message: &str, fields: &[LogField]) {
        let fields = if fields.is_empty() {
            None
        } else {
            serde_json::to_string(&Fields(fields)).ok()
        };
        match level {
            LogLevel::Trace => emit!(trace, message, fields),
            LogLevel::Debug => emit!(debug, message, fields),
            LogLevel::Info => emit!(info, message, fields),
            LogLevel::Warn => emit!(warn, message, fields),
            LogLevel::Error => emit!(error, message, fields),
        }
    }
}
