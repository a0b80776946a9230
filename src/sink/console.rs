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
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use chrono::Local;
use query_hook_core::{Fields, LogField, LogLevel};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::sink::LogSink;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Writes one tab-separated line per record:
///
/// ```text
/// 2025-01-01 12:00:00.000	ERROR	SELECT * FROM nop	{"err": "relation \"nop\" does not exist"}
/// ```
///
/// The fields column is omitted when a record has no fields.
pub struct ConsoleSink<W: Write + Send> {
    writer: Mutex<W>,
}

/// Renders a record without the leading timestamp.
pub fn format_line(level: LogLevel, message: &str, fields: &[LogField]) -> io::Result<String> {
    let mut line = format!("{}\t{}", level, message);
    if !fields.is_empty() {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
        Fields(fields).serialize(&mut ser)?;
        line.push('\t');
        line.push_str(&String::from_utf8_lossy(&buf));
    }
    Ok(line)
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let mut writer = self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(writer, "{}\t{}", timestamp, line)?;
        writer.flush()
    }
}

impl<W: Write + Send> LogSink for ConsoleSink<W> {
    fn log(&self, level: LogLevel, message: &str, fields: &[LogField]) {
        let result = format_line(level, message, fields).and_then(|line| self.write_line(&line));
        if let Err(err) = result {
            tracing::warn!("query hook failed to write log line: {}", err);
        }
    }
}

/// Compact JSON with a space after `:` and `,`, e.g. `{"a": "x", "b": "y"}`.
#[derive(Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}
