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
#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use query_hook::prelude::*;

pub const RELATION_ERROR: &str = "ERROR: relation \"nop\" does not exist (SQLSTATE=42P01)";

/// Hook writing into an in-memory sink.
pub fn recording_hook<I>(options: I) -> (QueryHook, Arc<RecordingSink>)
where
    I: IntoIterator<Item = HookOption>,
{
    let sink = Arc::new(RecordingSink::new());
    let hook = QueryHook::new(Some(sink.clone() as Arc<dyn LogSink>), options);
    (hook, sink)
}

/// An event for `query` that started `elapsed` before the returned instant.
pub fn finished_event(query: &str, error: Option<QueryError>, elapsed: Duration) -> (QueryEvent, Instant) {
    let now = Instant::now();
    let start = now.checked_sub(elapsed).unwrap_or(now);
    let event = QueryEvent::new(query).with_start_time(start);
    let event = match error {
        Some(err) => event.with_error(err),
        None => event,
    };
    (event, start + elapsed)
}

pub fn relation_error() -> QueryError {
    QueryError::message(RELATION_ERROR)
}

/// Cloneable writer shared between a `ConsoleSink` and the test.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    /// Lines written so far, without their timestamp column.
    pub fn messages(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(|line| match line.find('\t') {
                Some(idx) => line[idx + 1..].to_string(),
                None => line.to_string(),
            })
            .collect()
    }

    pub fn flush_messages(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hook writing console lines into a shared buffer.
pub fn console_hook<I>(options: I) -> (QueryHook, SharedBuf)
where
    I: IntoIterator<Item = HookOption>,
{
    let buf = SharedBuf::default();
    let sink: Arc<dyn LogSink> = Arc::new(ConsoleSink::new(buf.clone()));
    (QueryHook::new(Some(sink), options), buf)
}
