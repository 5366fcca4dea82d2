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

//! MiniJinja adapter.

use super::{CompiledTemplate, Context, TemplateEngine};
use crate::error::{CompileError, RenderError};
use minijinja::{Environment, Template, UndefinedBehavior};

/// A MiniJinja [`Environment`] exposed as a [`TemplateEngine`].
///
/// Undefined values are strict, so a missing context key surfaces as a
/// [`RenderError`] instead of rendering as an empty string.
/// `template_from_str` does not cache, so every `compile` pays the full cost.
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// A template compiled by [`MiniJinjaEngine`].
pub struct MiniJinjaTemplate<'env> {
    template: Template<'env, 'env>,
}

impl TemplateEngine for MiniJinjaEngine {
    type Compiled<'env> = MiniJinjaTemplate<'env> where Self: 'env;

    fn name(&self) -> &str {
        "MiniJinja"
    }

    fn compile(&self, source: &'static str) -> Result<MiniJinjaTemplate<'_>, CompileError> {
        self.env
            .template_from_str(source)
            .map(|template| MiniJinjaTemplate { template })
            .map_err(|e| CompileError::new(e.to_string()))
    }
}

impl CompiledTemplate for MiniJinjaTemplate<'_> {
    fn render(&self, context: &Context) -> Result<String, RenderError> {
        self.template
            .render(context)
            .map_err(|e| RenderError::new(e.to_string()))
    }
}
