//! End-to-end parser scenarios: source text through the lexer and parser.
//!
//! Each test pins one observable behavior of the front end (shape of the tree or kind of error).

use tern_syntax::ast::*;
use tern_syntax::diagnostics::{SyntaxError, SyntaxErrorKind};
use tern_syntax::lexer;
use tern_syntax::parser::{self, ParseOptions};

fn parse(source: &str) -> Result<File, SyntaxError> {
    let tokens = lexer::lex("s.tern", source).expect("lex failed");
    parser::parse("s.tern", &tokens, &ParseOptions::default())
}

fn expr(source: &str) -> Result<Spanned<Expr>, SyntaxError> {
    let tokens = lexer::lex("s.tern", source).expect("lex failed");
    parser::parse_expr("s.tern", &tokens, &ParseOptions::default())
}

fn ident(name: &str) -> Expr {
    Expr::Ident(name.to_string())
}

/// Wrap `body` in a func so statement-level forms can be exercised.
fn in_func(body: &str) -> String {
    format!("pri func f() () {{\n{body}\n}}\n")
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn repeated_associative_operator_flattens() {
    let e = expr("a + b + c").unwrap();
    let Expr::Associative(AssociativeOp::Add, operands) = &e.node else {
        panic!("expected associative add, got {:?}", e.node);
    };
    let names: Vec<_> = operands.iter().map(|o| o.node.as_ident()).collect();
    assert_eq!(names, vec![Some("a"), Some("b"), Some("c")]);
}

#[test]
fn different_operators_build_nested_binary_nodes() {
    let e = expr("a + b - c").unwrap();
    let Expr::Binary(lhs, BinaryOp::Sub, rhs) = &e.node else {
        panic!("expected binary sub, got {:?}", e.node);
    };
    assert_eq!(rhs.node, ident("c"));
    let Expr::Binary(a, BinaryOp::Add, b) = &lhs.node else {
        panic!("expected binary add, got {:?}", lhs.node);
    };
    assert_eq!((&a.node, &b.node), (&ident("a"), &ident("b")));
}

#[test]
fn two_operands_stay_binary_even_for_associative_operators() {
    let e = expr("a * b").unwrap();
    assert!(matches!(e.node, Expr::Binary(_, BinaryOp::Mul, _)));
}

#[test]
fn single_bracket_is_an_index() {
    let e = expr("x[i]").unwrap();
    let Expr::Index(recv, index) = &e.node else {
        panic!("expected index, got {:?}", e.node);
    };
    assert_eq!((&recv.node, &index.node), (&ident("x"), &ident("i")));
}

#[test]
fn colon_brackets_are_ranges() {
    for (source, has_low, has_high) in [
        ("x[i:j]", true, true),
        ("x[i:]", true, false),
        ("x[:j]", false, true),
        ("x[:]", false, false),
    ] {
        let e = expr(source).unwrap();
        match &e.node {
            Expr::Slice { receiver, low, high } => {
                assert_eq!(receiver.node, ident("x"), "{source}");
                assert_eq!(low.is_some(), has_low, "{source}");
                assert_eq!(high.is_some(), has_high, "{source}");
            }
            other => panic!("{source}: expected slice, got {other:?}"),
        }
    }
}

#[test]
fn cast_takes_a_type_expression() {
    let e = expr("x as u32").unwrap();
    let Expr::Cast(value, ty) = &e.node else {
        panic!("expected cast, got {:?}", e.node);
    };
    assert_eq!(value.node, ident("x"));
    assert_eq!(
        ty.node,
        TypeExpr::Named {
            package: None,
            name: "u32".into(),
            refinement: None,
        }
    );
}

#[test]
fn cast_binds_tighter_than_arithmetic() {
    let e = expr("a + b as u8").unwrap();
    let Expr::Binary(_, BinaryOp::Add, rhs) = &e.node else {
        panic!("expected add, got {:?}", e.node);
    };
    assert!(matches!(rhs.node, Expr::Cast(..)));
}

#[test]
fn call_arguments_are_named() {
    let e = expr("decode!(src: in.src, n: 4,)").unwrap();
    let Expr::Call(call) = &e.node else {
        panic!("expected call, got {:?}", e.node);
    };
    assert_eq!(call.effect, Effect::Impure);
    let names: Vec<_> = call.args.iter().map(|a| a.node.name.as_str()).collect();
    assert_eq!(names, vec!["src", "n"]);
}

#[test]
fn status_literals_carry_keyword_and_message() {
    for (source, keyword) in [
        (r#"error "bad""#, StatusKeyword::Error),
        (r#"status "ok""#, StatusKeyword::Status),
        (r#"suspension "short read""#, StatusKeyword::Suspension),
    ] {
        let e = expr(source).unwrap();
        assert!(matches!(e.node, Expr::Status(k, _) if k == keyword), "{source}");
    }
}

// =============================================================================
// Try expressions
// =============================================================================

#[test]
fn try_wraps_a_call() {
    let file = parse(&in_func("var n u32 = try foo()")).unwrap();
    let Declaration::Func(f) = &file.declarations[0].node else {
        panic!("expected func");
    };
    let Statement::Var(v) = &f.body[0].node else {
        panic!("expected var, got {:?}", f.body[0].node);
    };
    let Some(VarInit::Assign(value)) = &v.init else {
        panic!("expected initializer");
    };
    let Expr::Try(call) = &value.node else {
        panic!("expected try, got {:?}", value.node);
    };
    assert_eq!(call.callee.node, ident("foo"));
    assert!(call.args.is_empty());
}

#[test]
fn try_without_call_is_malformed() {
    let err = parse(&in_func("var n u32 = try foo")).unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::MalformedTry);
    assert_eq!(err.line, 2);
}

// =============================================================================
// Iterate counts
// =============================================================================

#[test]
fn iterate_length_must_be_a_power_of_two() {
    let err = parse(&in_func("iterate () (length: 3, unroll: 1) {\n}")).unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::MalformedLiteral);
}

#[test]
fn iterate_accepts_the_largest_count() {
    let file = parse(&in_func("iterate () (length: 256, unroll: 1) {\n}")).unwrap();
    let Declaration::Func(f) = &file.declarations[0].node else {
        panic!("expected func");
    };
    assert!(matches!(&f.body[0].node, Statement::Iterate(it) if it.length == 256 && it.unroll == 1));
}

// =============================================================================
// Package ids
// =============================================================================

#[test]
fn packageid_json_is_valid() {
    let file = parse("packageid \"json\"\n").unwrap();
    match &file.declarations[0].node {
        Declaration::PackageId(p) => {
            assert_eq!(p.id, "json");
            assert_ne!(p.code, 0);
        }
        other => panic!("expected packageid, got {other:?}"),
    }
}

#[test]
fn packageid_empty_is_invalid() {
    let err = parse("packageid \"\"\n").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::MalformedLiteral);
}

#[test]
fn packageid_too_long_is_invalid() {
    let err = parse("packageid \"jsonx\"\n").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::MalformedLiteral);
}

// =============================================================================
// Assertion chains
// =============================================================================

#[test]
fn ordered_assertion_chain_validates() {
    let file = parse("pri func f() (), pre x, inv y, post z {\n}\n").unwrap();
    let Declaration::Func(f) = &file.declarations[0].node else {
        panic!("expected func");
    };
    let keywords: Vec<_> = f.asserts.iter().map(|a| a.node.keyword).collect();
    assert_eq!(keywords, vec![AssertKeyword::Pre, AssertKeyword::Inv, AssertKeyword::Post]);
}

#[test]
fn backward_assertion_chain_fails() {
    let err = parse("pri func f() (), inv y, pre x {\n}\n").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::AssertionOrder);
}

#[test]
fn bare_assert_in_chain_fails() {
    let err = parse(&in_func("while true, pre x, assert y {\n}")).unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::AssertionOrder);
}

#[test]
fn iterate_carries_an_assertion_chain() {
    let file = parse(&in_func("iterate (c u8 =: x) (length: 8, unroll: 8), inv true {\n}")).unwrap();
    let Declaration::Func(f) = &file.declarations[0].node else {
        panic!("expected func");
    };
    assert!(matches!(&f.body[0].node, Statement::Iterate(it) if it.asserts.len() == 1));
}

// =============================================================================
// Whole declarations
// =============================================================================

#[test]
fn suspendible_method_round_trip() {
    let file = parse("pub func foo.bar?() () { var x u32 = 4; return x; }").unwrap();
    assert_eq!(file.declarations.len(), 1);
    let Declaration::Func(f) = &file.declarations[0].node else {
        panic!("expected func, got {:?}", file.declarations[0].node);
    };
    assert_eq!(f.visibility, Visibility::Public);
    assert!(f.effect.is_impure());
    assert!(f.effect.is_suspendible());
    assert_eq!(f.receiver.as_deref(), Some("foo"));
    assert_eq!(f.name, "bar");
    assert_eq!(f.body.len(), 2);

    let Statement::Var(v) = &f.body[0].node else {
        panic!("expected var, got {:?}", f.body[0].node);
    };
    assert_eq!(v.name, "x");
    assert!(matches!(&v.init, Some(VarInit::Assign(e)) if e.node == Expr::Literal(Literal::Number("4".into()))));

    let Statement::Ret(r) = &f.body[1].node else {
        panic!("expected return, got {:?}", f.body[1].node);
    };
    assert_eq!(r.kind, RetKind::Return);
    assert_eq!(r.value.as_ref().map(|v| &v.node), Some(&ident("x")));
}

#[test]
fn every_node_records_its_first_line() {
    let source = "pri struct s(\n\tn u32,\n)\n\npri func s.f!() () {\n\tthis.n = 1\n\tif true {\n\t\treturn\n\t}\n}\n";
    let file = parse(source).unwrap();
    let lines: Vec<_> = file.declarations.iter().map(Spanned::line).collect();
    assert_eq!(lines, vec![1, 5]);
    let Declaration::Func(f) = &file.declarations[1].node else {
        panic!("expected func");
    };
    let stmt_lines: Vec<_> = f.body.iter().map(Spanned::line).collect();
    assert_eq!(stmt_lines, vec![6, 7]);
    assert!(f.body.iter().all(|s| &*s.pos.filename == "s.tern"));
}

#[test]
fn parse_source_surfaces_lex_errors() {
    let err = parser::parse_source("s.tern", "pri const x u8 = #\n", &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, tern_syntax::diagnostics::FrontendError::Lex(_)));
}
