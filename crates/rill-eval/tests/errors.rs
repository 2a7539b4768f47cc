//! Negative scenarios: every failure is terminal and carries the
//! originating token's line and column.

use rill_eval::{Env, Evaluator};
use rill_parse::parse_source;

fn run_err(src: &str) -> String {
    let block = parse_source(src).expect("parse failed");
    let env = Env::new();
    Evaluator::new()
        .execute(&block, &env)
        .expect_err("execution should fail")
        .to_string()
}

#[test]
fn mixed_type_array_literal() {
    let err = run_err("a = []int{1, 2.1, 3}\n");
    assert!(
        err.contains("Array element #2 should be type 'int' but 'float' given"),
        "{err}"
    );
    assert!(err.contains("line:1, pos 5"), "{err}");
}

#[test]
fn struct_literal_with_field_type_mismatch() {
    let err = run_err("struct point {\n   float x\n   float y\n}\np = point{x = 1., y = 2}\n");
    assert!(err.contains("Field 'y' defined as 'float' but 'int' given"), "{err}");
}

#[test]
fn struct_literal_with_unknown_field() {
    let err = run_err("struct point {\n   float x\n   float y\n}\np = point{x = 1., z = 2.}\n");
    assert!(
        err.contains("Struct 'point' doesn't have the field 'z' in the definition"),
        "{err}"
    );
}

#[test]
fn struct_literal_with_missing_field() {
    let err = run_err("struct point {\n   float x\n   float y\n}\np = point{x = 1.}\n");
    assert!(
        err.contains("Var of struct 'point' should have 2 fields filled but in fact only 1"),
        "{err}"
    );
}

#[test]
fn struct_literal_of_undefined_struct() {
    let err = run_err("p = point{x = 1.}\n");
    assert!(err.contains("Struct 'point' is not defined"), "{err}");
}

#[test]
fn assignment_to_builtin_name() {
    let err = run_err("print = 10\n");
    assert!(err.contains("Builtins are immutable"), "{err}");
    assert!(err.contains("line:1, pos 1"), "{err}");
}

#[test]
fn assignment_to_enum_definition_name() {
    let err = run_err("enum Colors {red, green}\nColors = 5\n");
    assert!(
        err.contains("cannot assign to 'Colors': the name is already used by an enum definition"),
        "{err}"
    );
    assert!(err.contains("line:2, pos 1"), "{err}");
}

#[test]
fn reassignment_changing_the_type() {
    let err = run_err("a = 5\na = 6.0\n");
    assert!(
        err.contains("type mismatch on assignment: var type is int and value type is float"),
        "{err}"
    );
    assert!(err.contains("line:2"), "{err}");
}

#[test]
fn binary_operator_on_mismatched_types() {
    let err = run_err("a = 1 + 2.0\n");
    assert!(
        err.contains("forbidden operation on different types: int and float"),
        "{err}"
    );
}

#[test]
fn unsupported_operator_for_enum() {
    let err = run_err("enum Colors {red, green}\na = Colors:red != Colors:green\n");
    assert!(err.contains("unsupported operator '!=' for type: 'Colors'"), "{err}");
}

#[test]
fn logical_operator_on_integers() {
    let err = run_err("a = 1 && 2\n");
    assert!(err.contains("unsupported operator for types: int && int"), "{err}");
}

#[test]
fn division_by_zero_is_positioned() {
    let err = run_err("a = 1 / 0\n");
    assert!(err.contains("division by zero"), "{err}");
    assert!(err.contains("line:1"), "{err}");
}

#[test]
fn unary_not_requires_a_boolean() {
    let err = run_err("a = !5\n");
    assert!(
        err.contains("Operator '!' could be applied only on bool, 'int' given"),
        "{err}"
    );
}

#[test]
fn unary_minus_requires_a_number() {
    let err = run_err("a = -true\n");
    assert!(err.contains("unknown operator: -bool"), "{err}");
}

#[test]
fn if_condition_must_be_boolean() {
    let err = run_err("if 5 {\na = 1\n}\n");
    assert!(
        err.contains("Condition should be boolean type but int in fact"),
        "{err}"
    );
}

#[test]
fn case_condition_must_be_boolean() {
    let err = run_err("switch {\ncase 5\na = 1\n}\n");
    assert!(
        err.contains("Result of case condition should be 'boolean' but 'int' given"),
        "{err}"
    );
}

#[test]
fn identifier_not_found() {
    let err = run_err("a = missing\n");
    assert!(err.contains("identifier not found: missing"), "{err}");
    assert!(err.contains("line:1, pos 5"), "{err}");
}

#[test]
fn calling_a_non_function() {
    let err = run_err("a = 5\nb = a(1)\n");
    assert!(err.contains("not a function: int"), "{err}");
}

#[test]
fn call_arity_mismatch() {
    let err = run_err("f = fn(int x) int {\n   return x\n}\na = f(1, 2)\n");
    assert!(
        err.contains("Function call arguments count mismatch: declared 1, but called 2"),
        "{err}"
    );
}

#[test]
fn call_argument_type_mismatch() {
    let err = run_err("f = fn(int x) int {\n   return x\n}\na = f(1.5)\n");
    assert!(
        err.contains("argument #1 type mismatch: expected 'int' by func declaration but called 'float'"),
        "{err}"
    );
}

#[test]
fn return_type_mismatch() {
    let err = run_err("f = fn() int {\n   return 1.5\n}\na = f()\n");
    assert!(
        err.contains("Return type mismatch: function declared as 'int' but in fact return 'float'"),
        "{err}"
    );
}

#[test]
fn array_index_out_of_bounds() {
    let err = run_err("a = []int{1, 2}\nb = a[2]\n");
    assert!(err.contains("Array access out of bounds: '2'"), "{err}");
}

#[test]
fn negative_array_index_is_out_of_bounds() {
    let err = run_err("a = []int{1, 2}\nb = a[-1]\n");
    assert!(err.contains("Array access out of bounds: '-1'"), "{err}");
}

#[test]
fn array_index_must_be_an_integer() {
    let err = run_err("a = []int{1, 2}\nb = a[1.]\n");
    assert!(
        err.contains("Array access can be only by 'int' type but 'float' given"),
        "{err}"
    );
}

#[test]
fn indexing_a_non_array() {
    let err = run_err("a = 5\nb = a[0]\n");
    assert!(
        err.contains("Array access can be only on arrays but 'int' given"),
        "{err}"
    );
}

#[test]
fn field_access_on_a_non_struct() {
    let err = run_err("a = 5\nb = a.x\n");
    assert!(
        err.contains("Field access can be only on struct but 'int' given"),
        "{err}"
    );
}

#[test]
fn unknown_struct_field_on_read() {
    let err = run_err("struct point {\n   float x\n}\np = point{x = 1.}\nb = p.z\n");
    assert!(err.contains("Struct 'point' doesn't have field 'z'"), "{err}");
}

#[test]
fn unknown_enum_element() {
    let err = run_err("enum Colors {red, green}\na = Colors:yellow\n");
    assert!(err.contains("Enum 'Colors' doesn't have element 'yellow'"), "{err}");
}

#[test]
fn enum_element_access_on_a_non_enum() {
    let err = run_err("a = 5\nb = a:x\n");
    assert!(err.contains("Expected enum, got 'int'"), "{err}");
}

#[test]
fn duplicate_struct_definition() {
    let err = run_err("struct point {\n   float x\n}\nstruct point {\n   float x\n}\n");
    assert!(err.contains("struct 'point' already defined in this scope"), "{err}");
    assert!(err.contains("line:4"), "{err}");
}

#[test]
fn duplicate_enum_definition() {
    let err = run_err("enum C {a}\nenum C {b}\n");
    assert!(err.contains("enum 'C' already defined in this scope"), "{err}");
}

#[test]
fn emptier_of_an_unknown_type() {
    let err = run_err("a = ?unknown\n");
    assert!(err.contains("? is not supported on type: 'unknown'"), "{err}");
}

#[test]
fn emptier_array_of_an_unknown_type() {
    let err = run_err("a = ?[]unknown\n");
    assert!(err.contains("? is not supported on type: '[]unknown'"), "{err}");
}

#[test]
fn builtin_argument_type_mismatch() {
    let err = run_err("a = length(5)\n");
    assert!(
        err.contains("wrong type of argument #1 for 'length': need array, got int"),
        "{err}"
    );
}

#[test]
fn builtin_arity_mismatch() {
    let err = run_err("a = absInt(1, 2)\n");
    assert!(
        err.contains("wrong number of arguments for 'absInt': need 1, got 2"),
        "{err}"
    );
}

#[test]
fn emptiness_is_not_defined_for_booleans() {
    let err = run_err("a = empty(true)\n");
    assert!(err.contains("type 'bool' doesn't support emptiness"), "{err}");
}

#[test]
fn field_assignment_on_a_non_struct() {
    let err = run_err("a = 5\na.x = 1\n");
    assert!(
        err.contains("Field access can be only on struct but 'int' given"),
        "{err}"
    );
}

#[test]
fn field_assignment_to_an_unknown_field() {
    let err = run_err("struct point {\n   float x\n}\np = point{x = 1.}\np.z = 2.\n");
    assert!(err.contains("Struct 'point' doesn't have field 'z'"), "{err}");
}

#[test]
fn runaway_recursion_hits_the_call_depth_limit() {
    let err = run_err("f = fn() int {\n   return f()\n}\na = f()\n");
    assert!(err.contains("maximum call depth exceeded"), "{err}");
}
