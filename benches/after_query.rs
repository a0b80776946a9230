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
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use query_hook::prelude::*;

pub fn bench_after_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("after_query");
    group.measurement_time(Duration::from_secs(3));

    let success = QueryEvent::new("SELECT id, name FROM t_system_user WHERE id = ?");
    let failure = success.clone().with_error(QueryError::message("relation \"t_system_user\" does not exist"));

    // Benchmark: silent path, nothing is emitted
    let hook = QueryHook::new(Some(Arc::new(NopSink) as Arc<dyn LogSink>), Vec::<HookOption>::new());
    group.bench_function("quiet_success", |b| {
        b.iter(|| hook.after_query(black_box(&success)));
    });

    // Benchmark: error rendered into the message
    group.bench_function("error_in_message", |b| {
        b.iter(|| hook.after_query(black_box(&failure)));
    });

    // Benchmark: duration and error as fields
    let hook = QueryHook::new(
        Some(Arc::new(NopSink) as Arc<dyn LogSink>),
        [HookOption::Verbose(true), HookOption::DurationAsField, HookOption::ErrorAsField("err".to_string())],
    );
    group.bench_function("fields", |b| {
        b.iter(|| hook.after_query(black_box(&failure)));
    });

    group.finish();
}

criterion_group!(benches, bench_after_query);
criterion_main!(benches);
