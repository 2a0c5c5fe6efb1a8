// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! AST node model for a small imperative language
//!
//! This crate defines the closed set of node kinds (declarations, statements,
//! expressions) as immutable tagged unions. It does NOT render target code -
//! that responsibility belongs to backend crates (cpp-backend, etc.), and
//! parsing source text into this model belongs to an external front end.

mod data;

// Program root (from data/mod.rs)
pub use data::Program;

// Declaration definitions (from data/declarations.rs)
pub use data::declarations::{Declaration, FunctionDef, Import, StructDef};

// Statement definitions (from data/statements.rs)
pub use data::statements::{Block, Statement, StatementIter};

// Expression definitions (from data/expressions.rs)
pub use data::expressions::{Expression, ExpressionIter};
