// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Expression node
///
/// The set of kinds is closed: every renderer matches exhaustively on this
/// enum, so a missing rendering rule is a compile error. Operator and type
/// text is carried verbatim; the front end owns lexical validity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Expression {
    /// Assignment: `left = right`
    Assign {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Variable declaration: `ty name` or `ty name = init`
    Alloc {
        ty: String,
        name: String,
        init: Option<Box<Expression>>,
    },

    /// Function call: `callee(args, ...)`
    Call {
        callee: Box<Expression>,
        args: Vec<Expression>,
    },

    /// Subscript access: `base[index]`
    Index {
        base: Box<Expression>,
        index: Box<Expression>,
    },

    /// Dynamic array allocation: `new elem[dim1][dim2]...`
    /// One bracketed size expression per dimension, in order.
    New {
        elem_ty: String,
        dimensions: Vec<Expression>,
    },

    /// Field access: `base.name`
    Member {
        base: Box<Expression>,
        name: String,
    },

    /// Prefix operator application: `op operand`
    Prefix {
        op: String,
        operand: Box<Expression>,
    },

    /// Binary operator application: `left op right`
    Binary {
        left: Box<Expression>,
        op: String,
        right: Box<Expression>,
    },

    /// Opaque literal or identifier text, emitted verbatim
    Const(String),
}

impl Expression {
    pub fn constant(text: impl Into<String>) -> Expression {
        Expression::Const(text.into())
    }

    pub fn assign(left: Expression, right: Expression) -> Expression {
        Expression::Assign {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn alloc(ty: impl Into<String>, name: impl Into<String>, init: Option<Expression>) -> Expression {
        Expression::Alloc {
            ty: ty.into(),
            name: name.into(),
            init: init.map(Box::new),
        }
    }

    pub fn call(callee: Expression, args: Vec<Expression>) -> Expression {
        Expression::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn index(base: Expression, index: Expression) -> Expression {
        Expression::Index {
            base: Box::new(base),
            index: Box::new(index),
        }
    }

    pub fn member(base: Expression, name: impl Into<String>) -> Expression {
        Expression::Member {
            base: Box::new(base),
            name: name.into(),
        }
    }

    pub fn prefix(op: impl Into<String>, operand: Expression) -> Expression {
        Expression::Prefix {
            op: op.into(),
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expression, op: impl Into<String>, right: Expression) -> Expression {
        Expression::Binary {
            left: Box::new(left),
            op: op.into(),
            right: Box::new(right),
        }
    }

    /// Direct child expressions, in source order.
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::Assign { left, right } => vec![left.as_ref(), right.as_ref()],
            Expression::Alloc { init, .. } => init.iter().map(|e| e.as_ref()).collect(),
            Expression::Call { callee, args } => {
                let mut children = vec![callee.as_ref()];
                children.extend(args.iter());
                children
            }
            Expression::Index { base, index } => vec![base.as_ref(), index.as_ref()],
            Expression::New { dimensions, .. } => dimensions.iter().collect(),
            Expression::Member { base, .. } => vec![base.as_ref()],
            Expression::Prefix { operand, .. } => vec![operand.as_ref()],
            Expression::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Expression::Const(_) => vec![],
        }
    }

    /// Iterate over this expression and all nested expressions (depth-first,
    /// explicit stack).
    pub fn iter(&self) -> ExpressionIter<'_> {
        ExpressionIter { stack: vec![self] }
    }
}

pub struct ExpressionIter<'a> {
    stack: Vec<&'a Expression>,
}

impl<'a> Iterator for ExpressionIter<'a> {
    type Item = &'a Expression;

    fn next(&mut self) -> Option<Self::Item> {
        let expr = self.stack.pop()?;
        self.stack.extend(expr.children());
        Some(expr)
    }
}
