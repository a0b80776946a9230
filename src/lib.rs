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
//! Query hook - structured logging of SQL query events.
//!
//! Put the desired version of the crate into the `dependencies` section of your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! query_hook = "0.1.0"
//! ```
//!
//! ## Feature.
//!
//! * ```async``` - async interceptors for non-blocking database layers
//!
//! ## Options.
//!
//! * `Enabled(bool)` - master switch, default on.
//! * `Verbose(bool)` - log successful queries too. By default only failed queries are logged.
//! * `Duration` - write the duration into the message: `duration: 3ms SELECT 1`.
//! * `DurationAsField` - write the duration as a `duration` field.
//! * `DurationPrecision(Duration)` - rounding of the logged duration, default 1ms.
//! * `ErrorAsField(name)` - write the error as a field instead of `<query> error: <err>`.
//! * `Levels(query, error)` - levels of successful and failed queries, default DEBUG and ERROR.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use query_hook::prelude::*;
//!
//! let sink = Arc::new(RecordingSink::new());
//! let hook = QueryHook::new(
//!     Some(sink.clone() as Arc<dyn LogSink>),
//!     [HookOption::Verbose(true), HookOption::ErrorAsField("err".to_string())],
//! );
//!
//! let mut chain = InterceptorChain::new();
//! chain.add_interceptor(Arc::new(hook));
//!
//! let event = QueryEvent::new("SELECT * FROM nop");
//! let ctx = chain.before_query(QueryContext::new(), &event);
//! // ... run the query ...
//! let event = event.with_error(QueryError::message("relation \"nop\" does not exist"));
//! chain.after_query(&ctx, &event);
//!
//! let records = sink.records();
//! assert_eq!(records[0].level, LogLevel::Error);
//! assert_eq!(records[0].message, "SELECT * FROM nop");
//! assert_eq!(records[0].field_keys(), vec!["err"]);
//! ```

#![deny(clippy::all)]

mod config;
mod hook;
pub mod interceptor;
pub mod prelude;
pub mod sink;

#[doc(inline)]
pub use config::{DurationMode, ErrorMode, HookOption, QueryHookConfig, QueryHookSettings, DEFAULT_ERROR_FIELD};
#[doc(inline)]
pub use hook::QueryHook;
#[doc(inline)]
pub use interceptor::{InterceptorChain, QueryInterceptor};
#[doc(inline)]
pub use sink::{ConsoleSink, LogSink, NopSink, RecordingSink, TracingSink};
pub use query_hook_core::{
    format_duration, parse_precision, round_duration, FieldValue, Fields, LogField, LogLevel, LogRecord,
    QueryContext, QueryError, QueryEvent, QueryHookError, DURATION_FIELD,
};
#[cfg(feature = "async")]
pub use interceptor::non_blocking::{AsyncInterceptorChain, AsyncQueryInterceptor};
