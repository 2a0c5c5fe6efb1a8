// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! C++ text rendering backend for the imperative AST.
//!
//! The boundary operation is [`render_program`]: a pure function from an
//! immutable AST root to the generated source text. Parsing source text
//! into the AST belongs to an external front end; any parse errors must be
//! surfaced before rendering is attempted. [`generator`] adds the fallible
//! outer layer (depth bound, logging, file output).

pub mod generator;
mod renderer;

pub use renderer::{block_to_string, expression_to_string, render_program, statement_to_string, CppWriter};
