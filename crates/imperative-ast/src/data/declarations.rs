// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use crate::data::expressions::Expression;
use crate::data::statements::Block;
use serde::{Deserialize, Serialize};

/// Top-level declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Declaration {
    Import(Import),
    Struct(StructDef),
    Function(FunctionDef),
}

/// Inclusion directive group. Each name becomes one `#include` line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Import {
    /// Header/module names, emitted in order, verbatim
    pub names: Vec<String>,
}

/// Struct definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructDef {
    /// Type name (e.g., "Point")
    pub name: String,

    /// Field declarations, in declaration order. Every member must render
    /// as a standalone declaration statement.
    pub members: Vec<Expression>,
}

/// Function definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDef {
    /// Return-type text, emitted verbatim
    pub return_type: String,

    /// Function name
    pub name: String,

    /// Parameter declarations; rendered comma-separated in declaration order
    pub params: Vec<Expression>,

    /// Function body; may be empty
    pub body: Block,
}
