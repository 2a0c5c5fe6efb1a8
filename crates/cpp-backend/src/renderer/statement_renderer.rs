// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders statement nodes and statement blocks to C++ fragments.

use super::cpp_writer::render_to_string;
use super::expression_renderer::expression_to_string;
use imperative_ast::{Block, Statement};
use itertools::Itertools;

/// Render one statement to a fragment, without the trailing `;` (the
/// enclosing block owns statement termination).
pub fn statement_to_string(stmt: &Statement) -> String {
    match stmt {
        Statement::Expr(expr) => expression_to_string(expr),

        Statement::If {
            condition,
            body,
            else_body,
        } => render_to_string(|w| {
            w.write(&format!("if {} ", expression_to_string(condition)));
            w.braced(&block_to_string(body));
            // The else arm changes the rendered shape; absent means the
            // one-branch form.
            if let Some(else_body) = else_body {
                w.write(" else ");
                w.braced(&block_to_string(else_body));
            }
        }),

        Statement::While { condition, body } => render_to_string(|w| {
            w.write(&format!("while {} ", expression_to_string(condition)));
            w.braced(&block_to_string(body));
        }),

        Statement::For {
            start,
            condition,
            next,
            body,
        } => render_to_string(|w| {
            w.write(&format!(
                "for ({}; {}; {}) ",
                expression_to_string(start),
                expression_to_string(condition),
                expression_to_string(next)
            ));
            w.braced(&block_to_string(body));
        }),
    }
}

/// Render a statement block: every statement fragment suffixed with `;`,
/// last one included, newline-joined. An empty block renders as empty text.
pub fn block_to_string(block: &Block) -> String {
    block
        .statements
        .iter()
        .map(|stmt| format!("{};", statement_to_string(stmt)))
        .join("\n")
}
