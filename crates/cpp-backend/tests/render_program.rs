// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! End-to-end rendering of a complete program.

use cpp_backend::generator::{run_cpp_gen, Options};
use cpp_backend::render_program;
use imperative_ast::{
    Block, Declaration, Expression, FunctionDef, Import, Program, Statement, StructDef,
};
use simplelog::{Config, LevelFilter, SimpleLogger};

fn sample_program() -> Program {
    Program::new(vec![
        Declaration::Import(Import {
            names: vec!["iostream".to_string(), "vector".to_string()],
        }),
        Declaration::Struct(StructDef {
            name: "Point".to_string(),
            members: vec![
                Expression::alloc("int", "x", None),
                Expression::alloc("int", "y", None),
            ],
        }),
        Declaration::Function(FunctionDef {
            return_type: "int".to_string(),
            name: "main".to_string(),
            params: vec![],
            body: Block::new(vec![
                Statement::Expr(Expression::alloc(
                    "int",
                    "n",
                    Some(Expression::constant("10")),
                )),
                Statement::Expr(Expression::alloc(
                    "int",
                    "s",
                    Some(Expression::constant("0")),
                )),
                Statement::For {
                    start: Expression::alloc("int", "i", Some(Expression::constant("0"))),
                    condition: Expression::binary(
                        Expression::constant("i"),
                        "<",
                        Expression::constant("n"),
                    ),
                    next: Expression::assign(
                        Expression::constant("i"),
                        Expression::binary(
                            Expression::constant("i"),
                            "+",
                            Expression::constant("1"),
                        ),
                    ),
                    body: Block::new(vec![Statement::Expr(Expression::assign(
                        Expression::constant("s"),
                        Expression::binary(
                            Expression::constant("s"),
                            "+",
                            Expression::constant("i"),
                        ),
                    ))]),
                },
                Statement::If {
                    condition: Expression::binary(
                        Expression::constant("s"),
                        ">",
                        Expression::constant("100"),
                    ),
                    body: Block::new(vec![Statement::Expr(Expression::assign(
                        Expression::constant("s"),
                        Expression::constant("100"),
                    ))]),
                    else_body: Some(Block::new(vec![Statement::Expr(Expression::assign(
                        Expression::constant("s"),
                        Expression::binary(
                            Expression::constant("s"),
                            "+",
                            Expression::constant("1"),
                        ),
                    ))])),
                },
            ]),
        }),
    ])
}

const EXPECTED: &str = "\
#include iostream
#include vector

struct Point {
    int x;
    int y;
}

int main() {
    int n = 10;
    int s = 0;
    for (int i = 0; (i < n); i = (i + 1)) {
        s = (s + i);
    };
    if (s > 100) {
        s = 100;
    } else {
        s = (s + 1);
    };
}";

#[test]
fn renders_complete_program_bit_exact() {
    let program = sample_program();
    assert_eq!(render_program(&program), EXPECTED);
}

#[test]
fn generator_round_trip_through_file() {
    let _ = SimpleLogger::init(LevelFilter::Debug, Config::default());

    let dir = tempfile::tempdir().unwrap();
    let options = Options {
        output_path: dir.path().join("main.cpp"),
        ..Options::default()
    };

    let output = run_cpp_gen(&sample_program(), &options).unwrap();
    assert_eq!(output, EXPECTED);
    assert_eq!(
        std::fs::read_to_string(&options.output_path).unwrap(),
        EXPECTED
    );
}

#[test]
fn rendering_twice_yields_byte_identical_text() {
    let program = sample_program();
    assert_eq!(render_program(&program), render_program(&program));
}
