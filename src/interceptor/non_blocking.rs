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

use query_hook_core::{QueryContext, QueryEvent};

use crate::hook::QueryHook;

/// Async counterpart of [`QueryInterceptor`](crate::interceptor::QueryInterceptor)
/// for non-blocking database layers.
#[async_trait::async_trait]
pub trait AsyncQueryInterceptor: Send + Sync {
    /// Interceptor name
    fn name(&self) -> &'static str;

    /// Call before executing the query
    async fn before_query(&self, ctx: QueryContext, _event: &QueryEvent) -> QueryContext {
        ctx
    }

    /// Call after executing the query, whatever its outcome
    async fn after_query(&self, ctx: &QueryContext, event: &QueryEvent);
}

#[async_trait::async_trait]
impl AsyncQueryInterceptor for QueryHook {
    fn name(&self) -> &'static str {
        "logging"
    }

    async fn before_query(&self, ctx: QueryContext, event: &QueryEvent) -> QueryContext {
        QueryHook::before_query(self, ctx, event)
    }

    async fn after_query(&self, _ctx: &QueryContext, event: &QueryEvent) {
        QueryHook::after_query(self, event)
    }
}

/// Interceptor chain manager for async interceptors
#[derive(Clone, Default)]
pub struct AsyncInterceptorChain {
    interceptors: Vec<Arc<dyn AsyncQueryInterceptor>>,
}

impl AsyncInterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_interceptor(&mut self, interceptor: Arc<dyn AsyncQueryInterceptor>) -> &mut Self {
        tracing::debug!("registered async query interceptor '{}'", interceptor.name());
        self.interceptors.push(interceptor);
        self
    }

    pub async fn before_query(&self, mut ctx: QueryContext, event: &QueryEvent) -> QueryContext {
        for interceptor in &self.interceptors {
            ctx = interceptor.before_query(ctx, event).await;
        }
        ctx
    }

    pub async fn after_query(&self, ctx: &QueryContext, event: &QueryEvent) {
        for interceptor in self.interceptors.iter().rev() {
            interceptor.after_query(ctx, event).await;
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}
