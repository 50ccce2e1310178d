#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on specific syntactic forms and on the exact error produced for malformed
/// input. End-to-end scenarios live in `tests/`.
mod tests {
    use super::*;

    fn parse_str(source: &str) -> Result<File, SyntaxError> {
        parse_with(source, ParseOptions::default())
    }

    fn parse_with(source: &str, options: ParseOptions) -> Result<File, SyntaxError> {
        let tokens = lexer::lex("t.tern", source).expect("lex");
        parse("t.tern", &tokens, &options)
    }

    fn expr_str(source: &str) -> Result<Spanned<Expr>, SyntaxError> {
        let tokens = lexer::lex("t.tern", source).expect("lex");
        parse_expr("t.tern", &tokens, &ParseOptions::default())
    }

    fn func_body(source: &str) -> Block {
        let file = parse_str(source).unwrap();
        match file.declarations.into_iter().next().map(|d| d.node) {
            Some(Declaration::Func(f)) => f.body,
            other => panic!("expected func, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_file() {
        let file = parse_str("").unwrap();
        assert!(file.declarations.is_empty());
        assert_eq!(&*file.filename, "t.tern");
    }

    #[test]
    fn test_parse_use_and_packageid() {
        let file = parse_str("packageid \"json\"\nuse \"std/deflate\"\n").unwrap();
        assert_eq!(file.declarations.len(), 2);
        match &file.declarations[0].node {
            Declaration::PackageId(p) => {
                assert_eq!(p.id, "json");
                assert_eq!(Some(p.code), base38::encode("json"));
            }
            other => panic!("expected packageid, got {other:?}"),
        }
        match &file.declarations[1].node {
            Declaration::Use(u) => assert_eq!(u.path, "std/deflate"),
            other => panic!("expected use, got {other:?}"),
        }
        assert_eq!(file.declarations[1].line(), 2);
    }

    #[test]
    fn test_packageid_rejects_uppercase() {
        let err = parse_str("packageid \"JSON\"\n").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::MalformedLiteral);
        assert_eq!(err.message, r#""JSON" is not a valid packageid"#);
    }

    #[test]
    fn test_parse_struct() {
        let file = parse_str("pub struct decoder?(\n\tn u32,\n\tsrc ptr buf1,\n)\n").unwrap();
        match &file.declarations[0].node {
            Declaration::Struct(s) => {
                assert_eq!(s.visibility, Visibility::Public);
                assert!(s.suspendible);
                assert_eq!(s.name, "decoder");
                assert_eq!(s.fields.len(), 2);
                assert!(matches!(s.fields[1].node.ty.node, TypeExpr::Pointer(_)));
                assert_eq!(s.fields[1].line(), 3);
            }
            other => panic!("expected struct, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_status_decl() {
        let file = parse_str("pri error (0x10) \"bad header\"\n").unwrap();
        match &file.declarations[0].node {
            Declaration::Status(s) => {
                assert_eq!(s.visibility, Visibility::Private);
                assert_eq!(s.keyword, StatusKeyword::Error);
                assert_eq!(s.value.node, Expr::Literal(Literal::Number("0x10".into())));
                assert_eq!(s.message, "bad header");
            }
            other => panic!("expected status, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_const_dollar_aggregate() {
        let file = parse_str("pri const lut array[2] array[2] u8 = $($(1, 2), $(3, 4,),)\n").unwrap();
        match &file.declarations[0].node {
            Declaration::Const(c) => {
                let Expr::Dollar(rows) = &c.value.node else {
                    panic!("expected dollar expression, got {:?}", c.value.node);
                };
                assert_eq!(rows.len(), 2);
                assert!(rows.iter().all(|r| matches!(&r.node, Expr::Dollar(items) if items.len() == 2)));
            }
            other => panic!("expected const, got {other:?}"),
        }
    }

    #[test]
    fn test_const_requires_value() {
        let err = parse_str("pri const n u32\n").unwrap_err();
        assert_eq!(err.message, r#"expected "=", got ";""#);
    }

    #[test]
    fn test_missing_terminator_is_reported() {
        let err = parse_str("use \"a\" use \"b\"\n").unwrap_err();
        assert_eq!(err.to_string(), r#"parse: expected (implicit) ";", got "use" at t.tern:1"#);
    }

    #[test]
    fn test_unrecognized_top_level() {
        let err = parse_str("x = 1\n").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
        assert_eq!(err.message, r#"expected top level declaration, got "x""#);
    }

    #[test]
    fn test_flagged_declaration_requires_known_keyword() {
        let err = parse_str("pub var x u8\n").unwrap_err();
        assert_eq!(err.message, r#"expected "const", "func", "error", "suspension" or "struct", got "var""#);
    }

    #[test]
    fn test_builtin_names_are_rejected_by_default() {
        let err = parse_str("pri struct u32()\n").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::IllegalName);
        assert_eq!(err.message, r#"built-in "u32" used for struct name"#);

        let err = parse_str("pri func in.read() () {}\n").unwrap_err();
        assert_eq!(err.message, r#"built-in "in" used for func receiver"#);

        let err = parse_str("pri const length u32 = 1\n").unwrap_err();
        assert_eq!(err.message, r#"built-in "length" used for const name"#);
    }

    #[test]
    fn test_name_options_allow_reserved_names() {
        let options = ParseOptions::default()
            .with_builtin_names(true)
            .with_double_underscore_names(true);
        assert!(parse_with("pri struct u32()\npri func __x.__y() () {}\n", options).is_ok());

        let only_builtins = ParseOptions::default().with_builtin_names(true);
        let err = parse_with("pri func __y() () {}\n", only_builtins).unwrap_err();
        assert_eq!(err.message, r#"double-underscore "__y" used for func name"#);
    }

    #[test]
    fn test_func_effects() {
        for (marker, effect) in [("", Effect::Pure), ("!", Effect::Impure), ("?", Effect::Suspendible)] {
            let file = parse_str(&format!("pub func d.f{marker}() () {{}}\n")).unwrap();
            let Declaration::Func(f) = &file.declarations[0].node else {
                panic!("expected func");
            };
            assert_eq!(f.effect, effect);
            assert_eq!(f.receiver.as_deref(), Some("d"));
        }
    }

    #[test]
    fn test_func_assert_chain_is_validated_before_body() {
        let source = "pri func f(x u32) (), pre x > 0, post x < 9 {\n\treturn\n}\n";
        let file = parse_str(source).unwrap();
        let Declaration::Func(f) = &file.declarations[0].node else {
            panic!("expected func");
        };
        assert_eq!(f.asserts.len(), 2);
        assert_eq!(f.asserts[1].node.keyword, AssertKeyword::Post);

        // The body is malformed too, but the chain error comes first.
        let err = parse_str("pri func f() (), post true, pre true {\n\t)\n}\n").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::AssertionOrder);
    }

    #[test]
    fn test_validate_assert_chain_reports_first_offender() {
        let pos = |line| Pos::new(Arc::from("v.tern"), line);
        let assert = |keyword, line| {
            Spanned::new(
                Assert {
                    keyword,
                    condition: Spanned::new(Expr::Literal(Literal::Bool(true)), pos(line)),
                    reason: None,
                    args: Vec::new(),
                },
                pos(line),
            )
        };
        let chain = vec![
            assert(AssertKeyword::Pre, 1),
            assert(AssertKeyword::Inv, 2),
            assert(AssertKeyword::Inv, 3),
            assert(AssertKeyword::Pre, 4),
        ];
        let err = validate_assert_chain(&chain).unwrap_err();
        assert_eq!(err.line, 4);
        assert_eq!(err.message, r#"assertion chain not in "pre", "inv", "post" order"#);
        assert!(validate_assert_chain(&chain[..3]).is_ok());
        assert!(validate_assert_chain(&[]).is_ok());
    }

    #[test]
    fn test_assert_via_reason() {
        let body = func_body("pri func f() () {\n\tassert x < y via \"a < b: b > a\"(a: y, b: x)\n}\n");
        let Statement::Assert(a) = &body[0].node else {
            panic!("expected assert, got {:?}", body[0].node);
        };
        assert_eq!(a.keyword, AssertKeyword::Assert);
        assert_eq!(a.reason.as_deref(), Some("a < b: b > a"));
        assert_eq!(a.args.len(), 2);
        assert_eq!(a.args[0].node.name, "a");
    }

    #[test]
    fn test_if_else_if_chain() {
        let body = func_body("pri func f() () {\n\tif a {\n\t} else if b {\n\t\tx = 1\n\t} else {\n\t}\n}\n");
        let Statement::If(s) = &body[0].node else {
            panic!("expected if");
        };
        let Some(ElseBranch::If(elif)) = &s.else_branch else {
            panic!("expected else-if");
        };
        assert_eq!(elif.line(), 3);
        assert_eq!(elif.node.then_body.len(), 1);
        assert!(matches!(elif.node.else_branch, Some(ElseBranch::Block(ref b)) if b.is_empty()));
    }

    #[test]
    fn test_jumps_and_labels() {
        let body = func_body("pri func f() () {\n\twhile:outer true {\n\t\tbreak:outer\n\t\tcontinue\n\t}\n}\n");
        let Statement::While(w) = &body[0].node else {
            panic!("expected while");
        };
        assert_eq!(w.label.as_deref(), Some("outer"));
        assert_eq!(
            w.body[0].node,
            Statement::Jump(JumpStmt {
                kind: JumpKind::Break,
                label: Some("outer".into())
            })
        );
        assert_eq!(
            w.body[1].node,
            Statement::Jump(JumpStmt {
                kind: JumpKind::Continue,
                label: None
            })
        );
    }

    #[test]
    fn test_inv_is_a_statement() {
        let body = func_body("pri func f() () {\n\tinv n < 8\n\tpre n > 0\n}\n");
        let keywords: Vec<_> = body
            .iter()
            .map(|s| match &s.node {
                Statement::Assert(a) => a.keyword,
                other => panic!("expected assertion, got {other:?}"),
            })
            .collect();
        assert_eq!(keywords, vec![AssertKeyword::Inv, AssertKeyword::Pre]);
        assert_eq!(body[0].line(), 2);
    }

    #[test]
    fn test_while_with_ordered_assert_chain() {
        let body = func_body("pri func f() () {\n\twhile n > 0,\n\t\tpre n < 9,\n\t\tinv n >= 0,\n\t\tpost n == 0 {\n\t\tn -= 1\n\t}\n}\n");
        let Statement::While(w) = &body[0].node else {
            panic!("expected while");
        };
        let keywords: Vec<_> = w.asserts.iter().map(|a| a.node.keyword).collect();
        assert_eq!(keywords, vec![AssertKeyword::Pre, AssertKeyword::Inv, AssertKeyword::Post]);
        assert_eq!(w.asserts[2].line(), 5);
        assert!(matches!(w.body[0].node, Statement::Assign(_)));
    }

    #[test]
    fn test_io_bind_targets() {
        let body = func_body("pri func f() () {\n\tio_bind (in.src, dst) {\n\t}\n}\n");
        let Statement::IoBind(b) = &body[0].node else {
            panic!("expected io_bind");
        };
        assert_eq!(b.bindings.len(), 2);

        let err = parse_str("pri func f() () {\n\tio_bind (this.src) {\n\t}\n}\n").unwrap_err();
        assert_eq!(err.message, r#"expected "in.something", got "this.src""#);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_iterate_vars_share_statement_line() {
        let source = "pri func f() () {\n\titerate:loop (\n\t\tp ptr u8 =: args.src,\n\t\tq ptr u8 =: args.dst,\n\t) (length: 4, unroll: 2) {\n\t} else (length: 1, unroll: 1) {\n\t}\n}\n";
        let body = func_body(source);
        let Statement::Iterate(it) = &body[0].node else {
            panic!("expected iterate");
        };
        assert_eq!(body[0].line(), 2);
        assert_eq!(it.label.as_deref(), Some("loop"));
        assert_eq!((it.length, it.unroll), (4, 2));
        assert!(it.vars.iter().all(|v| v.line() == 2));
        assert!(matches!(it.vars[0].node.init, Some(VarInit::Bind(_))));
        let tail = it.else_iterate.as_deref().expect("else iterate");
        assert_eq!(tail.line(), 6);
        assert_eq!((tail.node.length, tail.node.unroll), (1, 1));
        assert!(tail.node.label.is_none() && tail.node.vars.is_empty());
    }

    #[test]
    fn test_iterate_var_requires_bind_operator() {
        let err = parse_str("pri func f() () {\n\titerate (p u8 = 1) (length: 1, unroll: 1) {}\n}\n").unwrap_err();
        assert_eq!(err.message, r#"expected "=:", got "=""#);
    }

    #[test]
    fn test_iterate_unroll_must_be_power_of_two() {
        let err = parse_str("pri func f() () {\n\titerate () (length: 8, unroll: 512) {}\n}\n").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::MalformedLiteral);
        assert_eq!(err.message, r#"expected power-of-2 unroll count in [1..256], got "512""#);
    }

    #[test]
    fn test_var_forms() {
        let body = func_body("pri func f() () {\n\tvar a u8\n\tvar b u8 = 1\n\tvar c u8 = try g!()\n}\n");
        let inits: Vec<_> = body
            .iter()
            .map(|s| match &s.node {
                Statement::Var(v) => v.init.clone(),
                other => panic!("expected var, got {other:?}"),
            })
            .collect();
        assert!(inits[0].is_none());
        assert!(matches!(&inits[1], Some(VarInit::Assign(e)) if matches!(e.node, Expr::Literal(_))));
        let Some(VarInit::Assign(e)) = &inits[2] else {
            panic!("expected assignment");
        };
        assert!(matches!(&e.node, Expr::Try(call) if call.effect == Effect::Impure));
    }

    #[test]
    fn test_return_and_yield() {
        let body = func_body("pri func f() () {\n\treturn\n\tyield error \"short read\"\n}\n");
        assert_eq!(
            body[0].node,
            Statement::Ret(RetStmt {
                kind: RetKind::Return,
                value: None
            })
        );
        let Statement::Ret(y) = &body[1].node else {
            panic!("expected yield");
        };
        assert_eq!(y.kind, RetKind::Yield);
        assert_eq!(
            y.value.as_ref().map(|v| &v.node),
            Some(&Expr::Status(StatusKeyword::Error, "short read".into()))
        );
    }

    #[test]
    fn test_assignment_operators() {
        let body = func_body("pri func f() () {\n\tx += 1\n\tthis.n ~+= 2\n\tg!()\n}\n");
        assert!(matches!(&body[0].node, Statement::Assign(a) if a.op == AssignOp::Add));
        assert!(matches!(&body[1].node, Statement::Assign(a) if a.op == AssignOp::WrappingAdd));
        assert!(matches!(&body[2].node, Statement::Expr(e) if matches!(e.node, Expr::Call(_))));
    }

    #[test]
    fn test_last_statement_may_omit_semicolon() {
        let body = func_body("pri func f() () { x = 1; return x }\n");
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn test_unterminated_block() {
        let err = parse_str("pri func f() () {\n\tx = 1\n").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEof);
        assert_eq!(err.to_string(), r#"parse: expected "}", got end of input at t.tern:2"#);
    }

    #[test]
    fn test_type_decorators_and_refinements() {
        let file = parse_str("pri struct s(\n\ta nptr array[4] base.u8[0..9],\n\tb slice table u32[..255],\n)\n").unwrap();
        let Declaration::Struct(s) = &file.declarations[0].node else {
            panic!("expected struct");
        };
        let TypeExpr::NullablePointer(inner) = &s.fields[0].node.ty.node else {
            panic!("expected nptr");
        };
        let TypeExpr::Array { inner, .. } = &inner.node else {
            panic!("expected array");
        };
        match &inner.node {
            TypeExpr::Named {
                package,
                name,
                refinement: Some(r),
            } => {
                assert_eq!(package.as_deref(), Some("base"));
                assert_eq!(name, "u8");
                assert!(r.low.is_some() && r.high.is_some());
            }
            other => panic!("expected refined name, got {other:?}"),
        }
        let TypeExpr::Slice(inner) = &s.fields[1].node.ty.node else {
            panic!("expected slice");
        };
        let TypeExpr::Table(inner) = &inner.node else {
            panic!("expected table");
        };
        assert!(matches!(&inner.node, TypeExpr::Named { refinement: Some(r), .. } if r.low.is_none()));
    }

    #[test]
    fn test_refinement_rejects_index_form() {
        let err = parse_str("pri struct s(a u32[5])\n").unwrap_err();
        assert_eq!(err.message, r#"expected "..", got "]""#);
    }

    #[test]
    fn test_precedence_folds_left() {
        let e = expr_str("a + b * c == d").unwrap();
        let Expr::Binary(lhs, BinaryOp::Eq, rhs) = &e.node else {
            panic!("expected ==, got {:?}", e.node);
        };
        assert_eq!(rhs.node, Expr::Ident("d".into()));
        let Expr::Binary(a, BinaryOp::Add, mul) = &lhs.node else {
            panic!("expected +, got {:?}", lhs.node);
        };
        assert_eq!(a.node, Expr::Ident("a".into()));
        assert!(matches!(mul.node, Expr::Binary(_, BinaryOp::Mul, _)));
    }

    #[test]
    fn test_logical_chains_flatten() {
        let e = expr_str("a and b and c or d").unwrap();
        let Expr::Binary(lhs, BinaryOp::Or, _) = &e.node else {
            panic!("expected or, got {:?}", e.node);
        };
        assert!(matches!(&lhs.node, Expr::Associative(AssociativeOp::And, ops) if ops.len() == 3));
    }

    #[test]
    fn test_unary_and_parens() {
        let e = expr_str("-(a + b)").unwrap();
        let Expr::Unary(UnaryOp::Neg, inner) = &e.node else {
            panic!("expected negation, got {:?}", e.node);
        };
        assert!(matches!(inner.node, Expr::Binary(_, BinaryOp::Add, _)));
        let e = expr_str("not not x").unwrap();
        assert!(matches!(&e.node, Expr::Unary(UnaryOp::Not, inner) if matches!(inner.node, Expr::Unary(UnaryOp::Not, _))));
    }

    #[test]
    fn test_postfix_chain() {
        let e = expr_str("a.b?(n: 1)[2].c").unwrap();
        let Expr::Selector(recv, field) = &e.node else {
            panic!("expected selector, got {:?}", e.node);
        };
        assert_eq!(field, "c");
        let Expr::Index(call, _) = &recv.node else {
            panic!("expected index");
        };
        let Expr::Call(call) = &call.node else {
            panic!("expected call");
        };
        assert_eq!(call.effect, Effect::Suspendible);
        assert!(matches!(&call.callee.node, Expr::Selector(_, name) if name == "b"));
    }

    #[test]
    fn test_bracket_requires_colon_or_close() {
        let err = expr_str("x[a b]").unwrap_err();
        assert_eq!(err.message, r#"expected ":" or "]", got "b""#);
    }

    #[test]
    fn test_parse_expr_must_consume_everything() {
        let err = expr_str("a b").unwrap_err();
        assert_eq!(err.message, r#"expected end of expression, got "b""#);
    }

    #[test]
    fn test_parse_expr_empty_input() {
        let err = parse_expr("t.tern", &[], &ParseOptions::default()).unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEof);
        assert_eq!(err.to_string(), "parse: expected expression, got end of input at t.tern:1");
    }

    #[test]
    fn test_bad_string_escape() {
        let err = expr_str(r#"error "bad \q""#).unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::MalformedLiteral);
    }
}
