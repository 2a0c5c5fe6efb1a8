// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use crate::data::expressions::Expression;
use serde::{Deserialize, Serialize};

/// Structured statement (high-level control flow)
///
/// Expressions in statement position (assignments, calls, declarations) are
/// explicit here: the `Expr` case wraps any expression used as a statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Statement {
    /// Expression used as a statement
    Expr(Expression),

    /// Conditional. The else branch is optional; its presence selects the
    /// two-branch rendered shape.
    If {
        condition: Expression,
        body: Block,
        else_body: Option<Block>,
    },

    /// While loop
    While {
        condition: Expression,
        body: Block,
    },

    /// C-style for loop. All three clauses are always present.
    For {
        start: Expression,
        condition: Expression,
        next: Expression,
        body: Block,
    },
}

/// Ordered sequence of statements; order is execution and emission order.
/// An empty sequence is legal (empty body).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Statement {
    /// Child blocks of this statement, in source order.
    pub fn blocks(&self) -> Vec<&Block> {
        match self {
            Statement::Expr(_) => vec![],
            Statement::If {
                body, else_body, ..
            } => {
                let mut blocks = vec![body];
                blocks.extend(else_body.iter());
                blocks
            }
            Statement::While { body, .. } => vec![body],
            Statement::For { body, .. } => vec![body],
        }
    }

    /// Expressions owned directly by this statement (not recursing into
    /// nested blocks).
    pub fn expressions(&self) -> Vec<&Expression> {
        match self {
            Statement::Expr(expr) => vec![expr],
            Statement::If { condition, .. } => vec![condition],
            Statement::While { condition, .. } => vec![condition],
            Statement::For {
                start,
                condition,
                next,
                ..
            } => vec![start, condition, next],
        }
    }

    /// Iterate over this statement and all statements in nested blocks
    /// (depth-first, explicit stack).
    pub fn iter(&self) -> StatementIter<'_> {
        StatementIter { stack: vec![self] }
    }
}

pub struct StatementIter<'a> {
    stack: Vec<&'a Statement>,
}

impl<'a> Iterator for StatementIter<'a> {
    type Item = &'a Statement;

    fn next(&mut self) -> Option<Self::Item> {
        let statement = self.stack.pop()?;
        for block in statement.blocks() {
            self.stack.extend(block.statements.iter());
        }
        Some(statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_reaches_statements_in_nested_blocks() {
        // if c { while d { x = 1; } } else { y; }
        let stmt = Statement::If {
            condition: Expression::constant("c"),
            body: Block::new(vec![Statement::While {
                condition: Expression::constant("d"),
                body: Block::new(vec![Statement::Expr(Expression::assign(
                    Expression::constant("x"),
                    Expression::constant("1"),
                ))]),
            }]),
            else_body: Some(Block::new(vec![Statement::Expr(Expression::constant(
                "y",
            ))])),
        };

        // if, while, assignment, else-branch expression
        assert_eq!(stmt.iter().count(), 4);
    }

    #[test]
    fn if_blocks_include_else_only_when_present() {
        let one_armed = Statement::If {
            condition: Expression::constant("c"),
            body: Block::empty(),
            else_body: None,
        };
        assert_eq!(one_armed.blocks().len(), 1);

        let two_armed = Statement::If {
            condition: Expression::constant("c"),
            body: Block::empty(),
            else_body: Some(Block::empty()),
        };
        assert_eq!(two_armed.blocks().len(), 2);
    }
}
