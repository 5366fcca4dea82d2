// tmplbench - Template Engine Micro-Benchmark Harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Warmup/measurement protocol tests.
//!
//! Uses the instrumented engine stub and its call log to check, per metric:
//! - warmup finishes before the first sample is taken
//! - every timed window wraps exactly one engine call
//! - compile latency never reuses a compiled template
//! - render latency compiles once and reuses that template

use serde_json::json;
use tmplbench::{BenchmarkCase, CaseState, Metric};
use tmplbench_test::{CallLog, Event, ManualClock, StubEngine};

const WARMUP: u64 = 7;

fn case(metric: Metric, iterations: u64) -> BenchmarkCase {
    BenchmarkCase::builder("stub", "{{ name }}")
        .warmup(WARMUP)
        .context(json!({ "name": "World" }))
        .measure(metric, iterations, "measured")
        .build()
        .unwrap()
}

fn run(case: &BenchmarkCase) -> (StubEngine, CallLog) {
    let clock = ManualClock::new();
    let log = CallLog::new();
    let engine = StubEngine::new()
        .with_clock(clock.clone())
        .with_log(log.clone());
    let mut timer = clock.timer().with_log(log.clone());

    let report = case.run(&engine, &mut timer).unwrap();
    assert_eq!(report.state, CaseState::Reported);
    (engine, log)
}

// ============================================================================
// Warmup
// ============================================================================

#[test]
fn test_warmup_completes_before_first_sample_compile() {
    let (_, log) = run(&case(Metric::Compile, 5));
    let before = log.engine_calls_before_first_sample().unwrap();
    assert!(before >= WARMUP as usize, "only {before} calls before first sample");
}

#[test]
fn test_warmup_completes_before_first_sample_render() {
    let (_, log) = run(&case(Metric::Render, 5));
    let before = log.engine_calls_before_first_sample().unwrap();
    // One compile plus the warmup renders.
    assert_eq!(before, WARMUP as usize + 2);
}

#[test]
fn test_no_warmup_call_is_timed() {
    let (_, log) = run(&case(Metric::Render, 3));
    let events = log.events();
    let first_start = events.iter().position(|e| *e == Event::TimerStart).unwrap();
    let warmup_renders = events[..first_start]
        .iter()
        .filter(|e| matches!(e, Event::Render { .. }))
        .count();
    assert_eq!(warmup_renders, WARMUP as usize);
}

// ============================================================================
// Compile latency
// ============================================================================

#[test]
fn test_compile_called_exactly_n_times_while_measuring() {
    let (engine, log) = run(&case(Metric::Compile, 12));

    let timed = log.timed_calls();
    assert_eq!(timed.len(), 12);
    assert!(timed.iter().all(|e| matches!(e, Event::Compile { .. })));
    assert_eq!(engine.compile_calls(), WARMUP as usize + 12);
    assert_eq!(engine.render_calls(), 0);
}

#[test]
fn test_compile_never_reuses_a_template() {
    let (_, log) = run(&case(Metric::Compile, 20));

    let mut ids: Vec<usize> = log
        .timed_calls()
        .iter()
        .filter_map(|e| match e {
            Event::Compile { template } => Some(*template),
            _ => None,
        })
        .collect();
    assert_eq!(ids.len(), 20);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20, "a compiled template was reused");
}

// ============================================================================
// Render latency
// ============================================================================

#[test]
fn test_render_compiles_once_outside_measurement() {
    let (engine, log) = run(&case(Metric::Render, 25));

    assert_eq!(engine.compile_calls(), 1);
    assert!(log
        .timed_calls()
        .iter()
        .all(|e| !matches!(e, Event::Compile { .. })));
}

#[test]
fn test_render_reuses_one_template() {
    let (engine, log) = run(&case(Metric::Render, 25));

    let compiled = log.compiled_templates();
    assert_eq!(compiled.len(), 1);

    let timed = log.timed_calls();
    assert_eq!(timed.len(), 25);
    assert!(timed
        .iter()
        .all(|e| *e == Event::Render { template: compiled[0] }));

    assert!(log
        .rendered_templates()
        .iter()
        .all(|&id| id == compiled[0]));
    assert_eq!(engine.render_calls(), WARMUP as usize + 25);
}

#[test]
fn test_each_window_wraps_one_call() {
    let case = BenchmarkCase::builder("both", "{{ name }}")
        .warmup(2)
        .context(json!({ "name": "World" }))
        .measure(Metric::Compile, 4, "compile")
        .measure(Metric::Render, 6, "render")
        .build()
        .unwrap();
    let (_, log) = run(&case);

    let mut calls_in_window = 0;
    let mut windows = 0;
    for event in log.events() {
        match event {
            Event::TimerStart => calls_in_window = 0,
            Event::SampleRecorded => {
                assert_eq!(calls_in_window, 1);
                windows += 1;
            }
            _ => calls_in_window += 1,
        }
    }
    assert_eq!(windows, 10);
}
