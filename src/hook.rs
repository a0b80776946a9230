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
use std::sync::Arc;
use std::time::Instant;

use query_hook_core::{format_duration, round_duration, LogField, LogRecord, QueryEvent};

use crate::config::{DurationMode, ErrorMode, HookOption, QueryHookConfig};
use crate::sink::{LogSink, NopSink};

/// Logs query events to a [`LogSink`].
///
/// By default only failed queries are logged, at `ERROR`. Successful queries,
/// and the benign `NoRows`/`TxDone` outcomes, are logged at the query level
/// once the hook is verbose.
pub struct QueryHook {
    config: QueryHookConfig,
    sink: Arc<dyn LogSink>,
}

impl QueryHook {
    /// Creates a new query hook. A missing sink discards every record.
    pub fn new<I>(sink: Option<Arc<dyn LogSink>>, options: I) -> Self
    where
        I: IntoIterator<Item = HookOption>,
    {
        Self::with_config(sink, QueryHookConfig::from_options(options))
    }

    pub fn with_config(sink: Option<Arc<dyn LogSink>>, config: QueryHookConfig) -> Self {
        Self {
            config,
            sink: sink.unwrap_or_else(|| Arc::new(NopSink)),
        }
    }

    /// Applies more options. Needs exclusive access, so it can only happen
    /// before the hook is shared with the database layer.
    pub fn apply<I>(&mut self, options: I)
    where
        I: IntoIterator<Item = HookOption>,
    {
        self.config.apply_all(options);
    }

    pub fn config(&self) -> &QueryHookConfig {
        &self.config
    }

    /// Called before the query runs. Hands the context back untouched.
    pub fn before_query<C>(&self, ctx: C, _event: &QueryEvent) -> C {
        ctx
    }

    /// Called once the query finished, successfully or not.
    pub fn after_query(&self, event: &QueryEvent) {
        if let Some(record) = self.record_at(event, Instant::now()) {
            self.sink.log(record.level, &record.message, &record.fields);
        }
    }

    /// Builds the record `after_query` would emit if the query ended at `now`.
    pub fn record_at(&self, event: &QueryEvent, now: Instant) -> Option<LogRecord> {
        if !self.config.enabled {
            return None;
        }

        let (level, err) = match event.error() {
            None => (self.config.query_level, None),
            Some(err) if err.is_benign() => (self.config.query_level, None),
            Some(err) => (self.config.error_level, Some(err)),
        };
        if err.is_none() && !self.config.verbose {
            return None;
        }

        let elapsed = now.saturating_duration_since(*event.start_time());
        let duration = round_duration(elapsed, self.config.precision);

        let mut record = LogRecord::new(level, event.query());
        match self.config.duration {
            DurationMode::Field => record.fields.push(LogField::duration(duration)),
            DurationMode::Message => {
                record.message = format!("duration: {} {}", format_duration(duration), record.message);
            }
            DurationMode::Off => {}
        }

        if let Some(err) = err {
            match self.config.error_mode {
                ErrorMode::Field => record
                    .fields
                    .push(LogField::error(self.config.error_field_name.clone(), err.clone())),
                ErrorMode::Message => {
                    record.message = format!("{} error: {}", record.message, err);
                }
            }
        }

        Some(record)
    }
}

impl Default for QueryHook {
    fn default() -> Self {
        Self::with_config(None, QueryHookConfig::default())
    }
}

