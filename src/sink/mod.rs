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
use query_hook_core::{LogField, LogLevel};

mod console;
mod recording;
mod tracer;

pub use console::{format_line, ConsoleSink};
pub use recording::RecordingSink;
pub use tracer::{TracingSink, TRACING_TARGET};

/// Destination of the hook's log records.
///
/// Called on the thread that ran the query, possibly from several threads at
/// once. Failures stay inside the sink.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, message: &str, fields: &[LogField]);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopSink;

impl LogSink for NopSink {
    fn log(&self, _level: LogLevel, _message: &str, _fields: &[LogField]) {}
}
