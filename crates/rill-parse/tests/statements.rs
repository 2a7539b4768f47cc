use rill_ast::ast::{Expression, Statement};
use rill_parse::parse_source;

#[test]
fn assignment_statement() {
    let block = parse_source("a = 1\n").unwrap();
    assert_eq!(block.statements.len(), 1);
    let Statement::Expression { expr, .. } = &block.statements[0] else {
        panic!("expected expression statement");
    };
    let Expression::Assignment { target, .. } = expr else {
        panic!("expected assignment");
    };
    assert_eq!(target.name, "a");
}

#[test]
fn call_statement_stands_alone() {
    let block = parse_source("print(42)\n").unwrap();
    let Statement::Expression { expr, .. } = &block.statements[0] else {
        panic!("expected expression statement");
    };
    let Expression::Call { function, arguments, .. } = expr else {
        panic!("expected call");
    };
    assert!(matches!(&**function, Expression::Ident(id) if id.name == "print"));
    assert_eq!(arguments.len(), 1);
}

#[test]
fn field_assignment_statement() {
    let block = parse_source("p.y = 3.\n").unwrap();
    let Statement::Expression { expr, .. } = &block.statements[0] else {
        panic!("expected expression statement");
    };
    let Expression::StructFieldAssignment { receiver, field, .. } = expr else {
        panic!("expected struct field assignment");
    };
    assert!(matches!(&**receiver, Expression::Ident(id) if id.name == "p"));
    assert_eq!(field.name, "y");
}

#[test]
fn nested_field_assignment_statement() {
    let block = parse_source("m.p.y = 3.\n").unwrap();
    let Statement::Expression { expr, .. } = &block.statements[0] else {
        panic!("expected expression statement");
    };
    let Expression::StructFieldAssignment { receiver, field, .. } = expr else {
        panic!("expected struct field assignment");
    };
    assert_eq!(field.name, "y");
    assert!(matches!(&**receiver, Expression::FieldAccess { .. }));
}

#[test]
fn return_statement() {
    let block = parse_source("f = fn() int {\nreturn 5\n}\n").unwrap();
    let Statement::Expression { expr, .. } = &block.statements[0] else {
        panic!("expected expression statement");
    };
    let Expression::Assignment { value, .. } = expr else {
        panic!("expected assignment");
    };
    let Expression::FunctionLiteral(f) = &**value else {
        panic!("expected function literal");
    };
    assert_eq!(f.return_type, "int");
    assert!(matches!(f.body.statements[0], Statement::Return { .. }));
}

#[test]
fn function_literal_arguments() {
    let block = parse_source("sum = fn(int x, int y) int {\nreturn x + y\n}\n").unwrap();
    let Statement::Expression { expr, .. } = &block.statements[0] else {
        panic!("expected expression statement");
    };
    let Expression::Assignment { value, .. } = expr else {
        panic!("expected assignment");
    };
    let Expression::FunctionLiteral(f) = &**value else {
        panic!("expected function literal");
    };
    assert_eq!(f.arguments.len(), 2);
    assert_eq!(f.arguments[0].var_type, "int");
    assert_eq!(f.arguments[0].name, "x");
    assert_eq!(f.arguments[1].name, "y");
}

#[test]
fn function_argument_with_array_type() {
    let block = parse_source("f = fn([]Colors c) bool {\nreturn true\n}\n").unwrap();
    let Statement::Expression { expr, .. } = &block.statements[0] else {
        panic!("expected expression statement");
    };
    let Expression::Assignment { value, .. } = expr else {
        panic!("expected assignment");
    };
    let Expression::FunctionLiteral(f) = &**value else {
        panic!("expected function literal");
    };
    assert_eq!(f.arguments[0].var_type, "[]Colors");
    assert_eq!(f.arguments[0].name, "c");
}

#[test]
fn if_with_else() {
    let block = parse_source("if 4 > 3 {\na = 10\n} else {\nb = 20\n}\n").unwrap();
    let Statement::If(stmt) = &block.statements[0] else {
        panic!("expected if statement");
    };
    assert!(matches!(stmt.condition, Expression::Binary { .. }));
    assert_eq!(stmt.positive.statements.len(), 1);
    assert_eq!(stmt.else_branch.as_ref().unwrap().statements.len(), 1);
}

#[test]
fn if_without_else() {
    let block = parse_source("if a {\nb = 5\n}\n").unwrap();
    let Statement::If(stmt) = &block.statements[0] else {
        panic!("expected if statement");
    };
    assert!(stmt.else_branch.is_none());
}

#[test]
fn struct_definition_keeps_field_order() {
    let block = parse_source("struct point {\n   float x\n   float y\n}\n").unwrap();
    let Statement::StructDefinition(def) = &block.statements[0] else {
        panic!("expected struct definition");
    };
    assert_eq!(def.name, "point");
    assert_eq!(def.fields.len(), 2);
    assert_eq!(def.fields[0].name, "x");
    assert_eq!(def.fields[0].var_type, "float");
    assert_eq!(def.fields[1].name, "y");
}

#[test]
fn struct_definition_with_struct_typed_field() {
    let block = parse_source("struct mech {\n   point p\n}\n").unwrap();
    let Statement::StructDefinition(def) = &block.statements[0] else {
        panic!("expected struct definition");
    };
    assert_eq!(def.fields[0].var_type, "point");
}

#[test]
fn enum_definition_single_line() {
    let block = parse_source("enum Colors {red, green, blue}\n").unwrap();
    let Statement::EnumDefinition(def) = &block.statements[0] else {
        panic!("expected enum definition");
    };
    assert_eq!(def.name, "Colors");
    assert_eq!(def.elements, vec!["red", "green", "blue"]);
}

#[test]
fn enum_definition_with_newlines_after_commas() {
    let block = parse_source("enum Colors {\nred,\ngreen,\nblue}\n").unwrap();
    let Statement::EnumDefinition(def) = &block.statements[0] else {
        panic!("expected enum definition");
    };
    assert_eq!(def.elements, vec!["red", "green", "blue"]);
}

#[test]
fn blank_lines_are_skipped() {
    let block = parse_source("a = 1\n\n\nb = 2\n").unwrap();
    assert_eq!(block.statements.len(), 2);
}

#[test]
fn positions_point_at_the_originating_token() {
    let block = parse_source("a = 1\nbb = 2\n").unwrap();
    let second = block.statements[1].pos();
    assert_eq!((second.line, second.col), (2, 1));
}
