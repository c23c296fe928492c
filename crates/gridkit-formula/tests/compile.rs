use gridkit_core::{FieldKind, FieldSchema, FormulaErrorKind};
use gridkit_formula::{compile, Compiler, Expr};

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

fn fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::new("fld1", "Name", FieldKind::SingleLineText),
        FieldSchema::new("fldDone", "Done", FieldKind::Checkbox),
        FieldSchema::new("fldPriority", "Priority", FieldKind::Number),
    ]
}

fn compile_json(expr: serde_json::Value) -> gridkit_core::Result<String> {
    let expr: Expr = serde_json::from_value(expr).unwrap();
    compile(&expr, &fields())
}

#[test]
fn literals() {
    let fields = fields();
    let compiler = Compiler::new(&fields);

    assert_eq!(compiler.compile(&Expr::null()).unwrap(), "BLANK()");
    assert_eq!(compiler.compile(&Expr::from(None::<i64>)).unwrap(), "BLANK()");
    assert_eq!(compiler.compile(&Expr::from(true)).unwrap(), "TRUE()");
    assert_eq!(compiler.compile(&Expr::from(false)).unwrap(), "FALSE()");
    assert_eq!(compiler.compile(&Expr::from(42)).unwrap(), "42");
    assert_eq!(compiler.compile(&Expr::from(-1.5)).unwrap(), "-1.5");
    assert_eq!(compiler.compile(&Expr::from("hi")).unwrap(), "\"hi\"");
}

#[test]
fn embedded_quotes_are_escaped() {
    assert_eq!(
        compile_json(json!("say \"hi\"")).unwrap(),
        r#""say \"hi\"""#
    );
}

#[test]
fn trailing_backslash_cannot_escape_the_closing_quote() {
    assert_eq!(compile_json(json!("a\\")).unwrap(), r#""a\\""#);
    assert_eq!(
        compile_json(json!(r#"C:\dir "x""#)).unwrap(),
        r#""C:\\dir \"x\"""#
    );
}

#[test]
fn timestamps_are_quoted_utc() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    assert_eq!(
        compile(&Expr::from(at), &fields()).unwrap(),
        "\"2024-03-01T12:30:00.000Z\""
    );
}

#[test]
fn field_refs_resolve_by_name_or_id() {
    assert_eq!(compile_json(json!({"field": "Name"})).unwrap(), "{fld1}");
    assert_eq!(compile_json(json!({"field": "fld1"})).unwrap(), "{fld1}");
}

#[test]
fn field_id_wins_over_colliding_name() {
    let fields = vec![
        FieldSchema::new("fldA", "Title", FieldKind::SingleLineText),
        FieldSchema::new("fldB", "fldA", FieldKind::SingleLineText),
    ];

    assert_eq!(compile(&Expr::field("fldA"), &fields).unwrap(), "{fldA}");
}

#[test]
fn unresolved_field_lists_known_names() {
    let err = compile_json(json!({"field": "Nmae"})).unwrap_err();

    assert!(err.is_formula());
    assert_eq!(
        err.as_formula(),
        Some(&FormulaErrorKind::UnresolvedField {
            reference: "Nmae".to_string(),
            known_names: vec![
                "Name".to_string(),
                "Done".to_string(),
                "Priority".to_string()
            ],
        })
    );
    assert_eq!(
        err.to_string(),
        "unresolved field reference `Nmae`; known fields: Name, Done, Priority"
    );
}

#[test]
fn functions_and_operators() {
    assert_eq!(
        compile_json(json!(["AND", {"field": "fldDone"}, ["=", {"field": "fldPriority"}, 5]]))
            .unwrap(),
        "AND({fldDone}, {fldPriority} = 5)"
    );

    assert_eq!(compile_json(json!(["TODAY"])).unwrap(), "TODAY()");
    assert_eq!(
        compile_json(json!(["CONCATENATE", {"field": "Name"}, "!"])).unwrap(),
        "CONCATENATE({fld1}, \"!\")"
    );
}

#[test]
fn builder_helpers_compile() {
    let expr = Expr::or([
        Expr::not(Expr::field("Done")),
        Expr::ge(Expr::field("Priority"), 3),
    ]);

    assert_eq!(
        compile(&expr, &fields()).unwrap(),
        "OR(NOT({fldDone}), {fldPriority} >= 3)"
    );
}

#[test]
fn nested_operators_keep_their_grouping() {
    let expr = Expr::binary_op(
        "*",
        Expr::binary_op("+", Expr::field("Priority"), 1),
        2,
    );

    assert_eq!(compile(&expr, &fields()).unwrap(), "({fldPriority} + 1) * 2");
}

#[test]
fn nested_operator_on_the_left_of_a_comparison_is_grouped() {
    let expr = json!(["=", ["+", {"field": "Priority"}, 1], 2]);
    assert_eq!(compile_json(expr).unwrap(), "({fldPriority} + 1) = 2");
}

#[test]
fn operator_arity_is_exactly_two() {
    for args in [json!(["="]), json!(["=", 1]), json!(["=", 1, 2, 3])] {
        let err = compile_json(args.clone()).unwrap_err();
        let actual = args.as_array().unwrap().len() - 1;

        assert_eq!(
            err.as_formula(),
            Some(&FormulaErrorKind::Arity {
                opcode: "=".to_string(),
                actual,
            })
        );
    }
}

#[test]
fn unknown_opcode_fails() {
    let err = compile_json(json!(["FROBNICATE", 1])).unwrap_err();

    assert_eq!(
        err.as_formula(),
        Some(&FormulaErrorKind::UnknownOpcode {
            opcode: "FROBNICATE".to_string()
        })
    );
}

#[test]
fn nested_failure_returns_no_formula() {
    // The bad reference sits deep inside an otherwise valid tree.
    let err = compile_json(json!(["AND", true, ["OR", false, {"field": "Gone"}]])).unwrap_err();
    assert!(err.is_formula());
}

#[test]
fn concatenation_operator_compiles_but_is_rejected_upstream() {
    // `&` is kept in the operator set; the filter endpoint refuses it.
    assert_eq!(
        compile_json(json!(["&", {"field": "Name"}, "x"])).unwrap(),
        "{fld1} & \"x\""
    );
}
