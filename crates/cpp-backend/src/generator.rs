// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Generator entry point: drives rendering and writes the result to disk.
//!
//! The pure rendering API is [`crate::render_program`]; this module wraps it
//! with the fallible concerns a front end wants handled: a recursion-depth
//! bound checked before the recursive walk, logging, and file output.

use anyhow::bail;
use imperative_ast::Program;
#[allow(unused_imports)]
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

use crate::renderer::render_program;

/// Generator options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Path of the generated translation unit.
    pub output_path: PathBuf,

    /// Upper bound on tree nesting depth. Rendering is a recursive walk, so
    /// trees deeper than this are refused instead of risking stack overflow.
    pub max_render_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("output.cpp"),
            max_render_depth: 512,
        }
    }
}

/// Render the program and write it to the configured path. Returns the
/// generated text, byte-identical to the file contents.
pub fn run_cpp_gen(program: &Program, options: &Options) -> anyhow::Result<String> {
    let depth = program.max_depth();
    if depth > options.max_render_depth {
        bail!(
            "tree nesting depth {} exceeds the configured bound of {}",
            depth,
            options.max_render_depth
        );
    }

    info!(
        "rendering {} top-level declarations (nesting depth {})",
        program.declarations.len(),
        depth
    );

    let output = render_program(program);

    debug!("writing generated C++ to `{}`", options.output_path.display());
    fs::write(&options.output_path, &output)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imperative_ast::{Block, Declaration, Expression, FunctionDef, Statement};

    fn deeply_nested_program(levels: usize) -> Program {
        let mut expr = Expression::constant("x");
        for _ in 0..levels {
            expr = Expression::prefix("-", expr);
        }
        Program::new(vec![Declaration::Function(FunctionDef {
            return_type: "int".to_string(),
            name: "deep".to_string(),
            params: vec![],
            body: Block::new(vec![Statement::Expr(expr)]),
        })])
    }

    #[test]
    fn generated_file_matches_returned_text() {
        let dir = tempfile::tempdir().unwrap();
        let options = Options {
            output_path: dir.path().join("out.cpp"),
            ..Options::default()
        };
        let program = Program::new(vec![Declaration::Function(FunctionDef {
            return_type: "int".to_string(),
            name: "main".to_string(),
            params: vec![],
            body: Block::empty(),
        })]);

        let output = run_cpp_gen(&program, &options).unwrap();
        assert_eq!(output, "int main() {\n    \n}");
        assert_eq!(fs::read_to_string(&options.output_path).unwrap(), output);
    }

    #[test]
    fn depth_bound_rejects_over_deep_trees() {
        let dir = tempfile::tempdir().unwrap();
        let options = Options {
            output_path: dir.path().join("out.cpp"),
            max_render_depth: 16,
        };

        let shallow = deeply_nested_program(4);
        assert!(run_cpp_gen(&shallow, &options).is_ok());

        let deep = deeply_nested_program(64);
        let err = run_cpp_gen(&deep, &options).unwrap_err();
        assert!(err.to_string().contains("exceeds the configured bound"));
    }
}
