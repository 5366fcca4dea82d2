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

//! Template engine adapters.
//!
//! The harness never calls an engine directly. Everything goes through
//! [`TemplateEngine`] and [`CompiledTemplate`], so any engine can be plugged
//! in by implementing these two traits.
//!
//! An engine instance doubles as the per-case environment: it owns whatever
//! caches the engine keeps, and the runner creates a fresh one for every case.

pub mod minijinja;

pub use self::minijinja::{MiniJinjaEngine, MiniJinjaTemplate};

use crate::error::{CompileError, RenderError};

/// Data a template is rendered against.
pub type Context = serde_json::Value;

/// Compiles template sources into renderable templates.
pub trait TemplateEngine {
    /// The engine's executable form of a template. May borrow the engine.
    type Compiled<'env>: CompiledTemplate
    where
        Self: 'env;

    /// Human-readable engine name, used in the report banner.
    fn name(&self) -> &str;

    /// Compiles `source`.
    ///
    /// Fails with [`CompileError`] if the source is not valid for this engine.
    fn compile(&self, source: &'static str) -> Result<Self::Compiled<'_>, CompileError>;
}

/// A template that has already been compiled.
pub trait CompiledTemplate {
    /// Renders against `context`.
    ///
    /// Fails with [`RenderError`] if required keys are missing or have the
    /// wrong shape.
    fn render(&self, context: &Context) -> Result<String, RenderError>;
}
