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

//! tmplbench binary.
//!
//! Runs the standard suite against MiniJinja and prints the report. Takes no
//! arguments and reads no configuration. Exits non-zero if any case failed or
//! the run was aborted.

use std::process::ExitCode;
use tmplbench::reporters::print_report;
use tmplbench::{scenarios, BenchConfig, BenchmarkRunner, MiniJinjaEngine, MonotonicTimer};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Fixed directive; the environment is never consulted.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("tmplbench=info"))
        .with_writer(std::io::stderr)
        .init();

    let cases = match scenarios::standard_cases(&BenchConfig::default()) {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut runner = BenchmarkRunner::new(MiniJinjaEngine::new).with_cases(cases);
    let report = match runner.run_all(&mut MonotonicTimer::new()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = print_report(&report) {
        eprintln!("Error: failed to write report: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::from(report.exit_status())
}
