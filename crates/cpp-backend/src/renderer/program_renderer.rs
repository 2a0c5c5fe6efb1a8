// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders a complete program to C++ text.

use super::function_renderer::function_to_string;
use super::struct_renderer::struct_to_string;
use imperative_ast::{Declaration, Import, Program};
use itertools::Itertools;

/// Render a program: top-level declaration fragments in sequence order,
/// joined by exactly one blank line.
///
/// Pure function of the tree; calling it twice on the same program yields
/// byte-identical text.
pub fn render_program(program: &Program) -> String {
    program
        .declarations
        .iter()
        .map(render_declaration)
        .join("\n\n")
}

fn render_declaration(decl: &Declaration) -> String {
    match decl {
        Declaration::Import(import) => render_import(import),
        Declaration::Struct(struct_def) => struct_to_string(struct_def),
        Declaration::Function(func) => function_to_string(func),
    }
}

/// One `#include` line per name, newline-joined. Names pass through
/// verbatim, with no quoting or angle brackets added.
fn render_import(import: &Import) -> String {
    import
        .names
        .iter()
        .map(|name| format!("#include {}", name))
        .join("\n")
}
