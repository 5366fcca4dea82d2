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

//! Instrumented template engine stub.

use crate::clock::ManualClock;
use crate::log::{CallLog, Event};
use std::cell::Cell;
use std::time::Duration;
use tmplbench::{CompileError, CompiledTemplate, Context, RenderError, TemplateEngine};

/// Engine stub that counts calls, simulates cost on a [`ManualClock`] and
/// fails on demand.
///
/// Every `compile` returns a template with a new id, so reuse of a compiled
/// template is visible in the [`CallLog`].
#[derive(Debug, Default)]
pub struct StubEngine {
    log: CallLog,
    clock: Option<ManualClock>,
    compile_cost: Duration,
    render_cost: Duration,
    fail_compile_on: Option<usize>,
    fail_render_on: Option<usize>,
    compile_calls: Cell<usize>,
    render_calls: Cell<usize>,
}

impl StubEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs calls into `log`.
    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    /// Advances `clock` by the configured cost on every call.
    pub fn with_clock(mut self, clock: ManualClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Simulated duration of each `compile`.
    pub fn compile_cost(mut self, cost: Duration) -> Self {
        self.compile_cost = cost;
        self
    }

    /// Simulated duration of each `render`.
    pub fn render_cost(mut self, cost: Duration) -> Self {
        self.render_cost = cost;
        self
    }

    /// Makes the `n`th compile call (1-based, warmup included) fail.
    pub fn fail_compile_on(mut self, n: usize) -> Self {
        self.fail_compile_on = Some(n);
        self
    }

    /// Makes the `n`th render call (1-based, warmup included) fail.
    pub fn fail_render_on(mut self, n: usize) -> Self {
        self.fail_render_on = Some(n);
        self
    }

    pub fn compile_calls(&self) -> usize {
        self.compile_calls.get()
    }

    pub fn render_calls(&self) -> usize {
        self.render_calls.get()
    }

    fn spend(&self, cost: Duration) {
        if let Some(clock) = &self.clock {
            clock.advance(cost);
        }
    }
}

impl TemplateEngine for StubEngine {
    type Compiled<'env> = StubTemplate<'env> where Self: 'env;

    fn name(&self) -> &str {
        "Stub"
    }

    fn compile(&self, source: &'static str) -> Result<StubTemplate<'_>, CompileError> {
        let call = self.compile_calls.get() + 1;
        self.compile_calls.set(call);
        self.spend(self.compile_cost);

        if self.fail_compile_on == Some(call) {
            return Err(CompileError::new(format!("injected failure on compile #{call}")));
        }

        let id = call - 1;
        self.log.record(Event::Compile { template: id });
        Ok(StubTemplate {
            engine: self,
            id,
            source,
        })
    }
}

/// Template produced by [`StubEngine`].
#[derive(Debug)]
pub struct StubTemplate<'env> {
    engine: &'env StubEngine,
    id: usize,
    source: &'static str,
}

impl StubTemplate<'_> {
    /// Unique per `compile` call.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl CompiledTemplate for StubTemplate<'_> {
    fn render(&self, _context: &Context) -> Result<String, RenderError> {
        let engine = self.engine;
        let call = engine.render_calls.get() + 1;
        engine.render_calls.set(call);
        engine.spend(engine.render_cost);
        engine.log.record(Event::Render { template: self.id });

        if engine.fail_render_on == Some(call) {
            return Err(RenderError::new(format!("injected failure on render #{call}")));
        }
        Ok(self.source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_each_compile_is_distinct() {
        let engine = StubEngine::new();
        let a = engine.compile("x").unwrap();
        let b = engine.compile("x").unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(engine.compile_calls(), 2);
    }

    #[test]
    fn test_render_cost_advances_clock() {
        let clock = ManualClock::new();
        let engine = StubEngine::new()
            .with_clock(clock.clone())
            .render_cost(Duration::from_micros(5));
        let template = engine.compile("x").unwrap();

        assert_eq!(template.render(&json!({})).unwrap(), "x");
        assert_eq!(clock.now(), Duration::from_micros(5));
    }

    #[test]
    fn test_injected_failures() {
        let engine = StubEngine::new().fail_render_on(2).fail_compile_on(3);
        let template = engine.compile("x").unwrap();
        assert!(template.render(&json!({})).is_ok());
        assert!(template.render(&json!({})).is_err());
        assert!(template.render(&json!({})).is_ok());

        assert!(engine.compile("x").is_ok());
        assert!(engine.compile("x").is_err());
    }
}
