// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

pub mod declarations;
pub mod expressions;
pub mod statements;

use declarations::Declaration;
use expressions::Expression;
use serde::{Deserialize, Serialize};
use statements::Statement;

/// Complete program: the root of one AST.
///
/// Owns an ordered sequence of top-level declarations; sequence order is
/// emission order. The tree is immutable once built, owned top-down, with
/// no sharing and no cycles. The front end is the sole producer and the
/// renderer the sole consumer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Program {
    pub declarations: Vec<Declaration>,
}

impl Program {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Maximum nesting depth over all nodes in the tree, computed with an
    /// explicit work stack. Counts declarations as depth 1 and every
    /// statement, block entry, or sub-expression as one more level.
    pub fn max_depth(&self) -> usize {
        enum Node<'a> {
            Stmt(&'a Statement),
            Expr(&'a Expression),
        }

        let mut stack: Vec<(Node, usize)> = Vec::new();
        let mut max = if self.declarations.is_empty() { 0 } else { 1 };

        for decl in &self.declarations {
            match decl {
                Declaration::Import(_) => {}
                Declaration::Struct(s) => {
                    stack.extend(s.members.iter().map(|e| (Node::Expr(e), 2)));
                }
                Declaration::Function(f) => {
                    stack.extend(f.params.iter().map(|e| (Node::Expr(e), 2)));
                    stack.extend(f.body.statements.iter().map(|s| (Node::Stmt(s), 2)));
                }
            }
        }

        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            match node {
                Node::Stmt(stmt) => {
                    stack.extend(
                        stmt.expressions()
                            .into_iter()
                            .map(|e| (Node::Expr(e), depth + 1)),
                    );
                    for block in stmt.blocks() {
                        stack.extend(
                            block.statements.iter().map(|s| (Node::Stmt(s), depth + 1)),
                        );
                    }
                }
                Node::Expr(expr) => {
                    stack.extend(
                        expr.children()
                            .into_iter()
                            .map(|e| (Node::Expr(e), depth + 1)),
                    );
                }
            }
        }

        max
    }
}
