// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Simple C++ renderer - pure translation with minimal logic.
//!
//! This module takes the imperative AST and renders it to C++ text.
//! The renderer is intentionally "dumb" - it pattern matches node kinds
//! and emits corresponding C++ text without semantic analysis. Fragments
//! are composed strictly bottom-up: a parent template is assembled only
//! from already-rendered child fragments.

mod cpp_writer;
mod expression_renderer;
mod function_renderer;
mod program_renderer;
mod statement_renderer;
mod struct_renderer;

pub use cpp_writer::CppWriter;
pub use expression_renderer::expression_to_string;
pub use program_renderer::render_program;
pub use statement_renderer::{block_to_string, statement_to_string};
