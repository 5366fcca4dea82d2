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

//! Binary smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn tmplbench_cmd() -> Command {
    Command::cargo_bin("tmplbench").expect("Failed to find tmplbench binary")
}

#[test]
fn test_binary_prints_report() {
    tmplbench_cmd()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("=".repeat(60)))
        .stdout(predicate::str::contains(
            "MiniJinja Engine Performance Benchmark",
        ))
        .stdout(predicate::str::contains("1. Simple Template (Hello {{ name }}!)"))
        .stdout(predicate::str::contains("   Compilation (cold start):"))
        .stdout(predicate::str::contains("   Rendering (5 items):"))
        .stdout(predicate::str::contains("   Rendering (3 users):"))
        .stdout(predicate::str::contains("Summary"))
        .stdout(predicate::str::contains("Complex template rendering:"))
        .stdout(predicate::str::contains("μs"));
}

#[test]
fn test_binary_ignores_arguments() {
    tmplbench_cmd()
        .arg("--unused")
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary"));
}

#[test]
fn test_logs_go_to_stderr() {
    tmplbench_cmd()
        .env("RUST_LOG", "off")
        .assert()
        .success()
        .stdout(predicate::str::contains("running benchmark case").not())
        .stderr(predicate::str::contains("running benchmark case"));
}
