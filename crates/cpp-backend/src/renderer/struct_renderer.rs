// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders struct definitions to C++ `struct` declarations.

use super::cpp_writer::render_to_string;
use super::expression_renderer::expression_to_string;
use imperative_ast::StructDef;
use itertools::Itertools;

/// Render a struct definition. Each member renders as a standalone
/// declaration statement, `;`-suffixed, one per line inside the braces.
pub fn struct_to_string(struct_def: &StructDef) -> String {
    let members = struct_def
        .members
        .iter()
        .map(|member| format!("{};", expression_to_string(member)))
        .join("\n");

    render_to_string(|w| {
        w.write(&format!("struct {} ", struct_def.name));
        w.braced(&members);
    })
}
