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

//! The standard benchmark scenarios.
//!
//! Three complexity tiers:
//!
//! - **simple**: plain interpolation, measured for compile and render latency
//! - **loop**: a single `for` loop over five strings
//! - **complex**: a loop over user records with a filter and a conditional

use crate::core::{BenchConfig, Metric};
use crate::engine::Context;
use crate::error::Result;
use crate::harness::case::BenchmarkCase;
use serde_json::json;

/// Plain variable interpolation.
pub const SIMPLE_TEMPLATE: &str = "Hello {{ name }}!";

/// A single loop.
pub const LOOP_TEMPLATE: &str = "{% for item in items %}{{ item }} {% endfor %}";

/// Loop with nested blocks, a filter and a conditional.
pub const COMPLEX_TEMPLATE: &str = r#"
{% for user in users %}
  <div class="user">
    <h2>{{ user.name|upper }}</h2>
    <p>Email: {{ user.email }}</p>
    <p>Age: {{ user.age }}</p>
    {% if user.active %}Active{% else %}Inactive{% endif %}
  </div>
{% endfor %}
"#;

/// Context for [`SIMPLE_TEMPLATE`].
pub fn simple_context() -> Context {
    json!({ "name": "World" })
}

/// Context for [`LOOP_TEMPLATE`].
pub fn loop_context() -> Context {
    json!({ "items": ["apple", "banana", "cherry", "date", "elderberry"] })
}

/// Context for [`COMPLEX_TEMPLATE`].
pub fn complex_context() -> Context {
    json!({
        "users": [
            { "name": "Alice", "email": "alice@example.com", "age": 30, "active": true },
            { "name": "Bob", "email": "bob@example.com", "age": 25, "active": false },
            { "name": "Charlie", "email": "charlie@example.com", "age": 35, "active": true },
        ]
    })
}

/// Builds the three standard cases with iteration counts from `config`.
pub fn standard_cases(config: &BenchConfig) -> Result<Vec<BenchmarkCase>> {
    config.validate()?;

    Ok(vec![
        BenchmarkCase::builder("simple", SIMPLE_TEMPLATE)
            .title("Simple Template (Hello {{ name }}!)")
            .summary_label("Simple template")
            .warmup(config.warmup_iterations)
            .generated_context(simple_context)
            .measure(
                Metric::Compile,
                config.compile_iterations,
                "Compilation (cold start)",
            )
            .measure(
                Metric::Render,
                config.render_iterations,
                "Rendering (cached template)",
            )
            .build()?,
        BenchmarkCase::builder("loop", LOOP_TEMPLATE)
            .title("Loop Template ({% for item in items %})")
            .summary_label("Loop template")
            .warmup(config.warmup_iterations)
            .generated_context(loop_context)
            .measure(Metric::Render, config.render_iterations, "Rendering (5 items)")
            .build()?,
        BenchmarkCase::builder("complex", COMPLEX_TEMPLATE)
            .title("Complex Template (nested loops, filters, conditionals)")
            .summary_label("Complex template")
            .warmup(config.warmup_iterations)
            .generated_context(complex_context)
            .measure(Metric::Render, config.render_iterations, "Rendering (3 users)")
            .build()?,
    ])
}
