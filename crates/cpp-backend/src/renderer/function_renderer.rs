// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders function definitions to C++ syntax.

use super::cpp_writer::render_to_string;
use super::expression_renderer::expression_to_string;
use super::statement_renderer::block_to_string;
use imperative_ast::FunctionDef;

/// Render a function definition: return type, name, comma-separated
/// parameter list (no trailing separator), braced body.
pub fn function_to_string(func: &FunctionDef) -> String {
    render_to_string(|w| {
        w.write(&format!("{} {}(", func.return_type, func.name));
        w.sep_with(", ", &func.params, |w, param| {
            w.write(&expression_to_string(param));
        });
        w.write(") ");
        w.braced(&block_to_string(&func.body));
    })
}
