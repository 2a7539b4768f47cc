use rill_ast::ast::{Expression, Statement, UnaryOp};
use rill_parse::parse_source;

fn value_of(src: &str) -> Expression {
    let block = parse_source(src).unwrap();
    let Statement::Expression { expr, .. } = &block.statements[0] else {
        panic!("expected expression statement");
    };
    let Expression::Assignment { value, .. } = expr else {
        panic!("expected assignment");
    };
    (**value).clone()
}

#[test]
fn int_literal() {
    assert!(matches!(value_of("a = 42\n"), Expression::IntLiteral { value: 42, .. }));
}

#[test]
fn float_literals_including_bare_dot() {
    assert!(
        matches!(value_of("a = 3.14\n"), Expression::FloatLiteral { value, .. } if (value - 3.14).abs() < 1e-9)
    );
    assert!(
        matches!(value_of("a = 1.\n"), Expression::FloatLiteral { value, .. } if (value - 1.0).abs() < 1e-9)
    );
}

#[test]
fn bool_literals() {
    assert!(matches!(value_of("a = true\n"), Expression::BoolLiteral { value: true, .. }));
    assert!(matches!(value_of("a = false\n"), Expression::BoolLiteral { value: false, .. }));
}

#[test]
fn unary_minus_and_not() {
    let neg = value_of("a = -5\n");
    let Expression::Unary { op: UnaryOp::Neg, right, .. } = neg else {
        panic!("expected unary minus");
    };
    assert!(matches!(*right, Expression::IntLiteral { value: 5, .. }));

    let not = value_of("a = !true\n");
    assert!(matches!(not, Expression::Unary { op: UnaryOp::Not, .. }));
}

#[test]
fn array_literal_keeps_element_type_and_order() {
    let arr = value_of("a = []int{1, 2, 3}\n");
    let Expression::ArrayLiteral { elements_type, elements, .. } = arr else {
        panic!("expected array literal");
    };
    assert_eq!(elements_type, "int");
    assert_eq!(elements.len(), 3);
    assert!(matches!(elements[2], Expression::IntLiteral { value: 3, .. }));
}

#[test]
fn empty_array_literal() {
    let arr = value_of("a = []float{}\n");
    let Expression::ArrayLiteral { elements_type, elements, .. } = arr else {
        panic!("expected array literal");
    };
    assert_eq!(elements_type, "float");
    assert!(elements.is_empty());
}

#[test]
fn emptier_scalar_and_array() {
    let e = value_of("a = ?int\n");
    assert!(matches!(e, Expression::Emptier { ref type_name, is_array: false, .. } if type_name == "int"));

    let e = value_of("a = ?[]point\n");
    assert!(matches!(e, Expression::Emptier { ref type_name, is_array: true, .. } if type_name == "point"));
}
