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
pub use crate::config::{DurationMode, ErrorMode, HookOption, QueryHookConfig, QueryHookSettings};
pub use crate::hook::QueryHook;
pub use crate::interceptor::{InterceptorChain, QueryInterceptor};
pub use crate::sink::{ConsoleSink, LogSink, NopSink, RecordingSink, TracingSink};
pub use query_hook_core::{FieldValue, LogField, LogLevel, LogRecord, QueryContext, QueryError, QueryEvent, QueryHookError};
#[cfg(feature = "async")]
pub use crate::interceptor::non_blocking::{AsyncInterceptorChain, AsyncQueryInterceptor};

pub type Result<T> = std::result::Result<T, QueryHookError>;
