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

//! End-to-end runs through [`BenchmarkRunner`] with simulated engines and
//! clocks, plus one short run against MiniJinja itself.

use serde_json::json;
use std::time::Duration;
use tmplbench::reporters::{export_json, format_report, MetricOutcome};
use tmplbench::scenarios::standard_cases;
use tmplbench::{
    BenchConfig, BenchError, BenchmarkCase, BenchmarkRunner, CaseState, Metric, MiniJinjaEngine,
    MonotonicTimer, Report, TimerError,
};
use tmplbench_test::{ManualClock, ScriptedTimer, StubEngine};

fn render_case(name: &str, warmup: u64, iterations: u64) -> BenchmarkCase {
    BenchmarkCase::builder(name, "Hello {{ name }}!")
        .title(format!("{name} case"))
        .summary_label(name)
        .warmup(warmup)
        .context(json!({ "name": "World" }))
        .measure(Metric::Render, iterations, "Rendering")
        .build()
        .unwrap()
}

/// Runs `cases` against stub engines whose renders cost `render_cost` on a
/// shared manual clock.
fn run_simulated(cases: Vec<BenchmarkCase>, render_cost: Duration) -> Report {
    let clock = ManualClock::new();
    let engine_clock = clock.clone();
    let mut runner = BenchmarkRunner::new(move || {
        StubEngine::new()
            .with_clock(engine_clock.clone())
            .render_cost(render_cost)
    })
    .with_cases(cases);

    let mut timer = clock.timer();
    runner.run_all(&mut timer).unwrap()
}

// ============================================================================
// Deterministic timings
// ============================================================================

#[test]
fn test_fixed_render_cost_reports_exact_statistics() {
    let report = run_simulated(vec![render_case("fixed", 3, 10)], Duration::from_micros(5));

    let stats = report.get("fixed", Metric::Render).unwrap();
    assert_eq!(stats.mean, 5.0);
    assert_eq!(stats.median, 5.0);
    assert_eq!(stats.count, 10);

    let text = format_report(&report);
    assert!(text.contains("     Average:  5.00 μs"));
    assert!(text.contains("     Median:   5.00 μs"));
    assert!(text.contains("fixed rendering: 5.00 μs"));
}

#[test]
fn test_repeated_runs_agree() {
    let first = run_simulated(vec![render_case("a", 2, 50)], Duration::from_nanos(1_250));
    let second = run_simulated(vec![render_case("a", 2, 50)], Duration::from_nanos(1_250));

    assert_eq!(
        first.get("a", Metric::Render),
        second.get("a", Metric::Render)
    );
}

#[test]
fn test_scripted_samples_are_aggregated() {
    let case = BenchmarkCase::builder("scripted", "x")
        .warmup(1)
        .measure(Metric::Render, 4, "Rendering")
        .build()
        .unwrap();
    let mut runner = BenchmarkRunner::new(StubEngine::new).with_cases([case]);
    let mut timer = ScriptedTimer::new([4.0, 1.0, 3.0, 2.0]);

    let report = runner.run_all(&mut timer).unwrap();
    let stats = report.get("scripted", Metric::Render).unwrap();
    assert_eq!(stats.mean, 2.5);
    assert_eq!(stats.median, 2.5);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 4.0);
    assert_eq!(timer.remaining(), 0);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_render_failure_mid_measurement() {
    let clock = ManualClock::new();
    let engine_clock = clock.clone();
    // Two warmup renders, so the seventh call is the fifth measured one.
    let mut runner = BenchmarkRunner::new(move || {
        StubEngine::new()
            .with_clock(engine_clock.clone())
            .render_cost(Duration::from_micros(1))
            .fail_render_on(7)
    })
    .with_cases([render_case("broken", 2, 10), render_case("healthy", 0, 3)]);
    let mut timer = clock.timer();

    let report = runner.run_all(&mut timer).unwrap();

    let broken = report.case("broken").unwrap();
    assert_eq!(broken.state, CaseState::Failed);
    assert!(report.get("broken", Metric::Render).is_none());
    match &broken.metric(Metric::Render).unwrap().outcome {
        MetricOutcome::Failed { error } => assert!(error.contains("render #7")),
        other => panic!("expected failure, got {other:?}"),
    }

    // Fresh engine per case: the failure counter does not carry over.
    assert_eq!(report.case("healthy").unwrap().state, CaseState::Reported);
    assert!(report.has_failures());
    assert_ne!(report.exit_status(), 0);

    let text = format_report(&report);
    assert!(text.contains("FAILED:   render error: injected failure on render #7"));
    assert!(text.contains("broken rendering:  FAILED"));
}

#[test]
fn test_compile_failure_skips_render() {
    let case = BenchmarkCase::builder("both", "x")
        .warmup(1)
        .measure(Metric::Compile, 3, "Compilation")
        .measure(Metric::Render, 3, "Rendering")
        .build()
        .unwrap();
    let mut runner =
        BenchmarkRunner::new(|| StubEngine::new().fail_compile_on(2)).with_cases([case]);

    let report = runner.run_all(&mut MonotonicTimer::new()).unwrap();
    let case = report.case("both").unwrap();

    assert!(case.is_failed());
    assert!(matches!(
        case.metric(Metric::Compile).unwrap().outcome,
        MetricOutcome::Failed { .. }
    ));
    assert_eq!(
        case.metric(Metric::Render).unwrap().outcome,
        MetricOutcome::Skipped
    );
}

#[test]
fn test_timer_failure_aborts_run() {
    let mut runner = BenchmarkRunner::new(StubEngine::new)
        .with_cases([render_case("first", 0, 10), render_case("second", 0, 10)]);
    let mut timer = ScriptedTimer::new([1.0, 1.0, 1.0]);

    let err = runner.run_all(&mut timer).unwrap_err();
    assert!(matches!(
        err,
        BenchError::Timer(TimerError::ClockUnavailable(_))
    ));
}

// ============================================================================
// Reporting
// ============================================================================

#[test]
fn test_json_export_of_run() {
    let report = run_simulated(
        vec![render_case("one", 1, 4), render_case("two", 1, 4)],
        Duration::from_micros(2),
    );

    let json = export_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["engine"], "Stub");
    assert_eq!(value["title"], "Stub Engine Performance Benchmark");
    assert_eq!(value["cases"][0]["name"], "one");
    assert_eq!(value["cases"][1]["name"], "two");
    assert_eq!(value["cases"][0]["metrics"][0]["outcome"]["status"], "reported");
    assert_eq!(value["cases"][0]["metrics"][0]["outcome"]["mean"], 2.0);
}

#[test]
fn test_standard_cases_against_minijinja() {
    let config = BenchConfig::default()
        .with_warmup_iterations(2)
        .with_compile_iterations(5)
        .with_render_iterations(20);
    let mut runner =
        BenchmarkRunner::new(MiniJinjaEngine::new).with_cases(standard_cases(&config).unwrap());

    let report = runner.run_all(&mut MonotonicTimer::new()).unwrap();

    assert_eq!(report.engine, "MiniJinja");
    assert_eq!(report.case_count(), 3);
    assert!(!report.has_failures());
    assert_eq!(report.get("simple", Metric::Compile).unwrap().count, 5);
    for name in ["simple", "loop", "complex"] {
        let stats = report.get(name, Metric::Render).unwrap();
        assert_eq!(stats.count, 20);
        assert!(stats.min >= 0.0);
    }

    let text = format_report(&report);
    assert!(text.starts_with(&"=".repeat(60)));
    assert!(text.contains("MiniJinja Engine Performance Benchmark"));
    assert!(text.contains("3. Complex Template (nested loops, filters, conditionals)"));
    assert!(text.contains("Simple template compilation:"));
}
