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

use crate::interceptor::QueryInterceptor;

/// Interceptors registered on a database handle.
///
/// `before_query` runs them in registration order, threading the context
/// through; `after_query` runs them in reverse.
#[derive(Clone, Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn QueryInterceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_interceptor(&mut self, interceptor: Arc<dyn QueryInterceptor>) -> &mut Self {
        tracing::debug!("registered query interceptor '{}'", interceptor.name());
        self.interceptors.push(interceptor);
        self
    }

    pub fn before_query(&self, ctx: QueryContext, event: &QueryEvent) -> QueryContext {
        self.interceptors
            .iter()
            .fold(ctx, |ctx, interceptor| interceptor.before_query(ctx, event))
    }

    pub fn after_query(&self, ctx: &QueryContext, event: &QueryEvent) {
        for interceptor in self.interceptors.iter().rev() {
            interceptor.after_query(ctx, event);
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    /// Get the number of interceptors
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Check if it is empty
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}
