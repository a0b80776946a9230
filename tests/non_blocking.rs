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

use query_hook::prelude::*;

mod common;

use common::*;

#[tokio::test]
async fn test_async_chain_logs_query() {
    let (hook, sink) = recording_hook([HookOption::Verbose(true), HookOption::ErrorAsField("err".to_string())]);
    let mut chain = AsyncInterceptorChain::new();
    chain.add_interceptor(Arc::new(hook));
    assert_eq!(chain.names(), vec!["logging"]);
    assert_eq!(chain.len(), 1);

    let event = QueryEvent::new("SELECT * FROM nop");
    let ctx = chain.before_query(QueryContext::new(), &event).await;
    assert!(sink.is_empty());

    let event = event.with_error(relation_error());
    chain.after_query(&ctx, &event).await;

    let records = sink.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, LogLevel::Error);
    assert_eq!(records[0].message, "SELECT * FROM nop");
    assert_eq!(records[0].field_keys(), vec!["err"]);
}

#[tokio::test]
async fn test_async_hook_respects_gates() {
    let (hook, sink) = recording_hook([HookOption::Enabled(false)]);
    let event = QueryEvent::new("SELECT * FROM nop").with_error(relation_error());
    AsyncQueryInterceptor::after_query(&hook, &QueryContext::new(), &event).await;
    assert!(sink.is_empty());

    let (hook, sink) = recording_hook(Vec::<HookOption>::new());
    let event = QueryEvent::new("SELECT 1");
    let ctx = AsyncQueryInterceptor::before_query(&hook, QueryContext::new(), &event).await;
    AsyncQueryInterceptor::after_query(&hook, &ctx, &event).await;
    assert!(sink.is_empty());
}
