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
use query_hook_core::{QueryContext, QueryEvent};

use crate::hook::QueryHook;

mod chain;

pub use chain::InterceptorChain;

#[cfg(feature = "async")]
pub mod non_blocking;

/// Hook points called by the database layer around each query.
///
/// Both methods are called exactly once per query attempt.
pub trait QueryInterceptor: Send + Sync {
    /// Interceptor name
    fn name(&self) -> &'static str;

    /// Call before executing the query
    fn before_query(&self, ctx: QueryContext, _event: &QueryEvent) -> QueryContext {
        ctx
    }

    /// Call after executing the query, whatever its outcome
    fn after_query(&self, ctx: &QueryContext, event: &QueryEvent);
}

impl QueryInterceptor for QueryHook {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn before_query(&self, ctx: QueryContext, event: &QueryEvent) -> QueryContext {
        QueryHook::before_query(self, ctx, event)
    }

    fn after_query(&self, _ctx: &QueryContext, event: &QueryEvent) {
        QueryHook::after_query(self, event)
    }
}
