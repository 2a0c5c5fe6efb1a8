// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders expression nodes to C++ fragments.
//!
//! Every compound expression (call, subscript, allocation, member access,
//! prefix and binary application) is wrapped in its own parentheses. The
//! renderer never consults an operator precedence table; the wrapping
//! guarantees the emitted expression parses with the same grouping as the
//! tree, whatever the source language's precedence rules were.

use imperative_ast::Expression;
use itertools::Itertools;

/// Render an expression to a fragment. Pure and total over the closed
/// expression set; children are rendered before the parent fragment is
/// assembled.
pub fn expression_to_string(expr: &Expression) -> String {
    match expr {
        Expression::Assign { left, right } => {
            format!(
                "{} = {}",
                expression_to_string(left),
                expression_to_string(right)
            )
        }

        Expression::Alloc { ty, name, init } => match init {
            Some(init) => format!("{} {} = {}", ty, name, expression_to_string(init)),
            None => format!("{} {}", ty, name),
        },

        Expression::Call { callee, args } => {
            let args = args.iter().map(expression_to_string).join(", ");
            format!("({}({}))", expression_to_string(callee), args)
        }

        Expression::Index { base, index } => {
            format!(
                "({}[{}])",
                expression_to_string(base),
                expression_to_string(index)
            )
        }

        Expression::New { elem_ty, dimensions } => {
            let dims = dimensions
                .iter()
                .map(|d| format!("[{}]", expression_to_string(d)))
                .join("");
            format!("(new {}{})", elem_ty, dims)
        }

        Expression::Member { base, name } => {
            format!("({}.{})", expression_to_string(base), name)
        }

        Expression::Prefix { op, operand } => {
            format!("({}{})", op, expression_to_string(operand))
        }

        Expression::Binary { left, op, right } => {
            format!(
                "({} {} {})",
                expression_to_string(left),
                op,
                expression_to_string(right)
            )
        }

        Expression::Const(text) => text.clone(),
    }
}
