//! Tests for intrinsic call recognition.

use ahk_emitter::intrinsics::{INTRINSICS, lookup, names};
use ahk_emitter::{EmitError, IntrinsicKind, PrintOptions, Printer};
use ahk_ir::{BinaryOperator, Expr, Stmt};

fn emit(expr: &Expr) -> String {
    Printer::emit_to_string(expr).expect("emission succeeds")
}

fn emit_err(expr: &Expr) -> EmitError {
    Printer::emit_to_string(expr).expect_err("emission fails")
}

fn operator(name: &str) -> Expr {
    Expr::field(Some(Expr::internal_type("IronAHK.Scripting.Script.Operator")), name)
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn test_registry_entries_are_unique() {
    for (i, a) in INTRINSICS.iter().enumerate() {
        for b in &INTRINSICS[i + 1..] {
            assert!(
                a.name != b.name || a.arity != b.arity,
                "duplicate entry {}/{}",
                a.name,
                a.arity
            );
        }
    }
}

#[test]
fn test_lookup_requires_name_and_arity() {
    assert_eq!(
        lookup(names::INDEX, 2).map(|entry| entry.kind),
        Some(IntrinsicKind::IndexAccess)
    );
    assert!(lookup(names::INDEX, 3).is_none());
    assert!(lookup("index", 2).is_none());
    assert!(lookup("MsgBox", 1).is_none());
}

// =============================================================================
// LabelJump
// =============================================================================

#[test]
fn test_label_jump() {
    let jump = Expr::intrinsic(names::LABEL_CALL, vec![Expr::string("Top")]);
    assert_eq!(emit(&jump), "goto Top");
    assert_eq!(Printer::statement_to_string(&Stmt::expr(jump)).unwrap(), "goto Top");
}

#[test]
fn test_label_jump_with_non_string_label_fails() {
    let jump = Expr::intrinsic(names::LABEL_CALL, vec![Expr::int(3)]);
    match emit_err(&jump) {
        EmitError::MalformedIntrinsic { name, reason } => {
            assert_eq!(name, names::LABEL_CALL);
            assert!(reason.contains("Integer"), "reason was: {reason}");
        }
        other => panic!("expected MalformedIntrinsic, got {other:?}"),
    }

    let jump = Expr::intrinsic(names::LABEL_CALL, vec![Expr::var("target")]);
    assert!(matches!(
        emit_err(&jump),
        EmitError::MalformedIntrinsic { .. }
    ));
}

// =============================================================================
// ConditionalPassthrough
// =============================================================================

#[test]
fn test_conditional_passthrough_keeps_argument_rendering() {
    let cond = Expr::binary(Expr::var("x"), BinaryOperator::LessThan, Expr::int(10));
    let wrapped = Expr::intrinsic(names::IF_ELSE, vec![cond.clone()]);

    assert_eq!(emit(&wrapped), emit(&cond));
    assert_eq!(emit(&wrapped), "(x < 10)");

    // The statement context passes through too.
    assert_eq!(
        Printer::statement_to_string(&Stmt::expr(wrapped)).unwrap(),
        "x < 10"
    );
}

// =============================================================================
// BinaryOperate
// =============================================================================

#[test]
fn test_operate() {
    let op = Expr::intrinsic(
        names::OPERATE,
        vec![operator("Concat"), Expr::string("a"), Expr::var("b")],
    );
    assert_eq!(emit(&op), "\"a\" . b");

    let op = Expr::intrinsic(
        names::OPERATE,
        vec![operator("Power"), Expr::var("x"), Expr::int(2)],
    );
    assert_eq!(emit(&op), "x ** 2");
}

#[test]
fn test_operate_nested_binary_operands_are_wrapped() {
    let left = Expr::binary(Expr::var("a"), BinaryOperator::Add, Expr::var("b"));
    let op = Expr::intrinsic(
        names::OPERATE,
        vec![operator("FloorDivide"), left, Expr::int(2)],
    );
    assert_eq!(
        Printer::statement_to_string(&Stmt::expr(op)).unwrap(),
        "(a + b) // 2"
    );
}

#[test]
fn test_operate_with_unknown_operator_fails() {
    let op = Expr::intrinsic(
        names::OPERATE,
        vec![operator("Modulo"), Expr::var("a"), Expr::var("b")],
    );
    match emit_err(&op) {
        EmitError::MalformedIntrinsic { name, reason } => {
            assert_eq!(name, names::OPERATE);
            assert!(reason.contains("Modulo"));
        }
        other => panic!("expected MalformedIntrinsic, got {other:?}"),
    }
}

#[test]
fn test_operate_with_non_field_selector_fails() {
    let op = Expr::intrinsic(
        names::OPERATE,
        vec![Expr::string("Add"), Expr::var("a"), Expr::var("b")],
    );
    assert!(matches!(
        emit_err(&op),
        EmitError::MalformedIntrinsic { name, .. } if name == names::OPERATE
    ));
}

// =============================================================================
// ArrayExtend
// =============================================================================

#[test]
fn test_extend_array_emits_nothing() {
    let extend = Expr::intrinsic(names::EXTEND_ARRAY, vec![Expr::int(16)]);
    assert_eq!(emit(&extend), "");
}

// =============================================================================
// IndexedAssign / IndexAccess
// =============================================================================

#[test]
fn test_index_access() {
    let index = Expr::intrinsic(names::INDEX, vec![Expr::var("x"), Expr::int(1)]);
    assert_eq!(emit(&index), "x[1]");
}

#[test]
fn test_nested_index_access() {
    let inner = Expr::intrinsic(names::INDEX, vec![Expr::var("grid"), Expr::var("row")]);
    let outer = Expr::intrinsic(names::INDEX, vec![inner, Expr::var("col")]);
    assert_eq!(emit(&outer), "grid[row][col]");
}

#[test]
fn test_set_object_reorders_arguments() {
    let set = Expr::intrinsic(
        names::SET_OBJECT,
        vec![
            Expr::array(vec![Expr::var("key")]),
            Expr::var("obj"),
            Expr::array(vec![Expr::int(1)]),
            Expr::string("v"),
        ],
    );
    assert_eq!(emit(&set), "obj[1][key] := \"v\"");
}

// =============================================================================
// MapLiteral
// =============================================================================

#[test]
fn test_dictionary() {
    let map = Expr::intrinsic(
        names::DICTIONARY,
        vec![
            Expr::array(vec![Expr::var("a"), Expr::var("b")]),
            Expr::array(vec![Expr::int(1), Expr::int(2)]),
        ],
    );
    assert_eq!(emit(&map), "{ a := 1, b := 2 }");
}

#[test]
fn test_dictionary_with_string_keys_and_nested_values() {
    let map = Expr::intrinsic(
        names::DICTIONARY,
        vec![
            Expr::array(vec![Expr::string("name"), Expr::string("sum")]),
            Expr::array(vec![
                Expr::string("box"),
                Expr::binary(Expr::var("w"), BinaryOperator::Add, Expr::var("h")),
            ]),
        ],
    );
    assert_eq!(emit(&map), "{ \"name\" := \"box\", \"sum\" := (w + h) }");
}

#[test]
fn test_empty_dictionary() {
    let map = Expr::intrinsic(
        names::DICTIONARY,
        vec![Expr::array(vec![]), Expr::array(vec![])],
    );
    assert_eq!(emit(&map), "{}");
}

#[test]
fn test_dictionary_length_mismatch_fails_before_writing() {
    let map = Expr::intrinsic(
        names::DICTIONARY,
        vec![
            Expr::array(vec![Expr::var("a"), Expr::var("b")]),
            Expr::array(vec![Expr::int(1)]),
        ],
    );
    let mut printer = Printer::new(String::new());
    let err = printer.emit_expression(&map).expect_err("mismatch is rejected");
    assert!(matches!(
        err,
        EmitError::MalformedIntrinsic { name, .. } if name == names::DICTIONARY
    ));
    assert_eq!(printer.finish(), "");
}

#[test]
fn test_dictionary_requires_array_literals() {
    let map = Expr::intrinsic(
        names::DICTIONARY,
        vec![Expr::var("keys"), Expr::var("values")],
    );
    assert!(matches!(
        emit_err(&map),
        EmitError::MalformedIntrinsic { .. }
    ));
}

// =============================================================================
// Fall-through
// =============================================================================

#[test]
fn test_marker_call_with_unregistered_shape_is_a_plain_call() {
    let call = Expr::intrinsic(names::INDEX, vec![Expr::var("a"), Expr::int(1), Expr::int(2)]);
    assert_eq!(emit(&call), "Index(a, 1, 2)");

    let call = Expr::intrinsic("Parameters", vec![]);
    assert_eq!(emit(&call), "Parameters()");
}

fn marker_call_on(target: Expr, method: &str, args: Vec<Expr>) -> Expr {
    Expr::Invocation {
        target: Some(Box::new(target)),
        method: method.to_string(),
        args,
        intrinsic: true,
    }
}

#[test]
fn test_marker_call_on_internal_type_is_written_bare() {
    let marker = || Expr::internal_type("IronAHK.Scripting.Script");

    let call = marker_call_on(marker(), "Parameters", vec![]);
    assert_eq!(emit(&call), "Parameters()");

    let index = marker_call_on(marker(), names::INDEX, vec![Expr::var("x"), Expr::int(1)]);
    assert_eq!(emit(&index), "x[1]");
}

#[test]
fn test_marker_call_with_real_target_fails() {
    let call = marker_call_on(Expr::var("obj"), "Foo", vec![Expr::int(1)]);
    let mut printer = Printer::new(String::new());
    match printer.emit_expression(&call).expect_err("target would be lost") {
        EmitError::MalformedIntrinsic { reason, .. } => {
            assert!(reason.contains("Foo"), "reason was: {reason}");
            assert!(reason.contains("VariableRef"), "reason was: {reason}");
        }
        other => panic!("expected MalformedIntrinsic, got {other:?}"),
    }
    assert_eq!(printer.finish(), "");

    let index = marker_call_on(
        Expr::var("obj"),
        names::INDEX,
        vec![Expr::var("x"), Expr::int(1)],
    );
    assert!(matches!(
        emit_err(&index),
        EmitError::MalformedIntrinsic { name, .. } if name == names::INDEX
    ));

    let visible_type = marker_call_on(Expr::type_ref("Helpers"), "Run", vec![]);
    assert!(matches!(
        emit_err(&visible_type),
        EmitError::MalformedIntrinsic { .. }
    ));
}

#[test]
fn test_untagged_call_with_intrinsic_name_is_not_recognized() {
    let call = Expr::call(names::INDEX, vec![Expr::var("x"), Expr::int(1)]);
    assert_eq!(emit(&call), "Index(x, 1)");

    let call = Expr::method(Expr::var("obj"), names::LABEL_CALL, vec![Expr::string("Top")]);
    assert_eq!(emit(&call), "obj.LabelCall(\"Top\")");
}

// =============================================================================
// Depth accounting
// =============================================================================

fn emit_with_max_depth(expr: &Expr, max_depth: u32) -> Result<String, EmitError> {
    let options = PrintOptions {
        max_depth,
        ..PrintOptions::default()
    };
    let mut printer = Printer::with_options(String::new(), options);
    printer.emit_expression(expr)?;
    Ok(printer.finish())
}

#[test]
fn test_index_and_operate_stay_at_caller_depth() {
    let inner = Expr::intrinsic(names::INDEX, vec![Expr::var("grid"), Expr::var("row")]);
    let index = Expr::intrinsic(names::INDEX, vec![inner, Expr::var("col")]);
    assert_eq!(
        emit_with_max_depth(&index, 0).expect("operands at depth 0"),
        "grid[row][col]"
    );

    let op = Expr::intrinsic(
        names::OPERATE,
        vec![operator("Concat"), Expr::var("a"), Expr::var("b")],
    );
    assert_eq!(emit_with_max_depth(&op, 0).expect("operands at depth 0"), "a . b");

    // A plain call puts its arguments one level down.
    let call = Expr::call("Foo", vec![Expr::var("x")]);
    assert_eq!(
        emit_with_max_depth(&call, 0),
        Err(EmitError::DepthLimitExceeded { limit: 0 })
    );
}

#[test]
fn test_set_object_stays_at_caller_depth() {
    let set = Expr::intrinsic(
        names::SET_OBJECT,
        vec![
            Expr::array(vec![Expr::var("key")]),
            Expr::var("obj"),
            Expr::array(vec![Expr::int(1)]),
            Expr::string("v"),
        ],
    );
    // Only the index elements, inside their array literals, sit one level down.
    assert_eq!(
        emit_with_max_depth(&set, 1).expect("elements at depth 1"),
        "obj[1][key] := \"v\""
    );
    assert_eq!(
        emit_with_max_depth(&set, 0),
        Err(EmitError::DepthLimitExceeded { limit: 0 })
    );
}

#[test]
fn test_dictionary_entries_go_one_level_deeper() {
    let map = Expr::intrinsic(
        names::DICTIONARY,
        vec![
            Expr::array(vec![Expr::var("a")]),
            Expr::array(vec![Expr::int(1)]),
        ],
    );
    assert_eq!(
        emit_with_max_depth(&map, 0),
        Err(EmitError::DepthLimitExceeded { limit: 0 })
    );
    assert_eq!(
        emit_with_max_depth(&map, 1).expect("entries at depth 1"),
        "{ a := 1 }"
    );
}
