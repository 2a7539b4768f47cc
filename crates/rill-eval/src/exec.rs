//! Tree-walking evaluator.
//!
//! Walks a parsed `StatementsBlock` against an `Env`, checking types at
//! use sites. Return statements propagate through blocks as a
//! distinguished `Flow` variant and are unwrapped at call boundaries.
//! All errors are positioned at the originating token; the environment is
//! only mutated when a statement succeeds end to end.

use crate::builtins::{check_args, default_builtins, Builtin};
use crate::env::Env;
use crate::value::{
    ArrayValue, EnumDefinition, FunctionValue, StructDefinition, StructValue, Value, TYPE_BOOL,
    TYPE_FLOAT, TYPE_INT,
};
use anyhow::{anyhow, Result};
use rill_ast::ast::{
    BinaryOp, EnumDefinition as AstEnumDefinition, Expression, FieldInit, FunctionLiteral, Ident,
    IfStatement, Statement, StatementsBlock, StructDefinition as AstStructDefinition, Switch,
    TypedName, UnaryOp,
};
use rill_ast::pos::Pos;
use std::cell::Cell;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Maximum function call depth. Prevents stack overflow from runaway
/// recursion in the interpreted program; each interpreted call costs
/// several host stack frames, so this stays well under typical thread
/// stack sizes.
const MAX_CALL_DEPTH: u32 = 500;

/// One entry per node class, reported to the trace callback as nodes are
/// evaluated. Builtin calls additionally carry the builtin's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Assignment,
    StructFieldAssignment,
    Return,
    IfStmt,
    Switch,
    Unary,
    Emptier,
    BinExpr,
    Struct,
    StructFieldCall,
    NumInt,
    NumFloat,
    Boolean,
    Array,
    ArrayIndex,
    Identifier,
    Function,
    FunctionCall,
    EnumElementCall,
    Builtin { name: String },
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Assignment => write!(f, "assignment"),
            Operation::StructFieldAssignment => write!(f, "struct_field_assignment"),
            Operation::Return => write!(f, "return"),
            Operation::IfStmt => write!(f, "if"),
            Operation::Switch => write!(f, "switch"),
            Operation::Unary => write!(f, "unary"),
            Operation::Emptier => write!(f, "emptier"),
            Operation::BinExpr => write!(f, "bin_expr"),
            Operation::Struct => write!(f, "struct"),
            Operation::StructFieldCall => write!(f, "struct_field_call"),
            Operation::NumInt => write!(f, "num_int"),
            Operation::NumFloat => write!(f, "num_float"),
            Operation::Boolean => write!(f, "boolean"),
            Operation::Array => write!(f, "array"),
            Operation::ArrayIndex => write!(f, "array_index"),
            Operation::Identifier => write!(f, "identifier"),
            Operation::Function => write!(f, "function"),
            Operation::FunctionCall => write!(f, "function_call"),
            Operation::EnumElementCall => write!(f, "enum_element_call"),
            Operation::Builtin { name } => write!(f, "builtin:{name}"),
        }
    }
}

pub type TraceCallback = Box<dyn Fn(&Operation)>;

/// Block evaluation result: a plain value, or a value produced by
/// `return` that unwinds enclosing blocks until a call boundary.
enum Flow {
    Value(Value),
    Return(Value),
}

fn runtime_error(pos: Pos, msg: impl AsRef<str>) -> anyhow::Error {
    anyhow!("{}\nline:{}, pos {}", msg.as_ref(), pos.line, pos.col)
}

pub struct Evaluator {
    builtins: HashMap<String, Rc<Builtin>>,
    trace: Option<TraceCallback>,
    call_depth: Cell<u32>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator {
            builtins: default_builtins(),
            trace: None,
            call_depth: Cell::new(0),
        }
    }

    /// Install a callback invoked once per evaluated node. Side effects
    /// only; it cannot alter evaluation.
    pub fn set_trace_callback(&mut self, callback: impl Fn(&Operation) + 'static) {
        self.trace = Some(Box::new(callback));
    }

    /// Register an additional builtin. Must happen before `execute`;
    /// replaces any builtin with the same name.
    pub fn add_builtin(&mut self, builtin: Builtin) {
        self.builtins.insert(builtin.name.clone(), Rc::new(builtin));
    }

    /// Run a program against the given environment.
    pub fn execute(&self, block: &StatementsBlock, env: &Env) -> Result<()> {
        self.exec_statements_block(block, env)?;
        Ok(())
    }

    fn emit(&self, operation: Operation) {
        if let Some(callback) = &self.trace {
            callback(&operation);
        }
    }

    fn exec_statements_block(&self, block: &StatementsBlock, env: &Env) -> Result<Flow> {
        for statement in &block.statements {
            let flow = self.exec_statement(statement, env)?;
            if let Flow::Return(_) = flow {
                return Ok(flow);
            }
            // non-return results of statements are discarded
        }
        Ok(Flow::Value(Value::Void))
    }

    fn exec_statement(&self, statement: &Statement, env: &Env) -> Result<Flow> {
        match statement {
            Statement::Expression { expr, .. } => {
                self.exec_expression(expr, env)?;
                Ok(Flow::Value(Value::Void))
            }
            Statement::Return { value, .. } => {
                self.emit(Operation::Return);
                let v = self.exec_expression(value, env)?;
                Ok(Flow::Return(v))
            }
            Statement::If(stmt) => self.exec_if(stmt, env),
            Statement::Switch(stmt) => self.exec_switch(stmt, env),
            Statement::StructDefinition(def) => {
                self.register_struct_definition(def, env)?;
                Ok(Flow::Value(Value::Void))
            }
            Statement::EnumDefinition(def) => {
                self.register_enum_definition(def, env)?;
                Ok(Flow::Value(Value::Void))
            }
        }
    }

    fn exec_expression(&self, expr: &Expression, env: &Env) -> Result<Value> {
        match expr {
            Expression::Assignment { pos, target, value } => {
                self.exec_assignment(*pos, target, value, env)
            }
            Expression::StructFieldAssignment {
                pos,
                receiver,
                field,
                value,
            } => self.exec_struct_field_assignment(*pos, receiver, field, value, env),
            Expression::Unary { pos, op, right } => self.exec_unary(*pos, *op, right, env),
            Expression::Binary {
                pos,
                op,
                left,
                right,
            } => self.exec_binary(*pos, *op, left, right, env),
            Expression::Emptier {
                pos,
                type_name,
                is_array,
            } => self.exec_emptier(*pos, type_name, *is_array, env),
            Expression::Ident(ident) => self.exec_identifier(ident, env),
            Expression::IntLiteral { value, .. } => {
                self.emit(Operation::NumInt);
                Ok(Value::int(*value))
            }
            Expression::FloatLiteral { value, .. } => {
                self.emit(Operation::NumFloat);
                Ok(Value::float(*value))
            }
            Expression::BoolLiteral { value, .. } => {
                self.emit(Operation::Boolean);
                Ok(Value::Boolean(*value))
            }
            Expression::ArrayLiteral {
                pos,
                elements_type,
                elements,
            } => self.exec_array(*pos, elements_type, elements, env),
            Expression::Index { pos, left, index } => self.exec_array_index(*pos, left, index, env),
            Expression::FunctionLiteral(f) => self.exec_function_literal(f, env),
            Expression::Call {
                pos,
                function,
                arguments,
            } => self.exec_function_call(*pos, function, arguments, env),
            Expression::StructLiteral { pos, name, fields } => {
                self.exec_struct_literal(*pos, name, fields, env)
            }
            Expression::FieldAccess {
                pos,
                receiver,
                field,
            } => self.exec_struct_field_call(*pos, receiver, field, env),
            Expression::EnumElement {
                pos,
                receiver,
                element,
            } => self.exec_enum_element_call(*pos, receiver, element, env),
        }
    }

    fn exec_assignment(
        &self,
        _pos: Pos,
        target: &Ident,
        value: &Expression,
        env: &Env,
    ) -> Result<Value> {
        if self.builtins.contains_key(&target.name) {
            return Err(runtime_error(target.pos, "Builtins are immutable"));
        }
        // an assignment to an enum's name would be unreachable behind the
        // definition in identifier resolution, so reject it outright
        if env.enum_definition(&target.name).is_some() {
            return Err(runtime_error(
                target.pos,
                format!(
                    "cannot assign to '{}': the name is already used by an enum definition",
                    target.name
                ),
            ));
        }
        self.emit(Operation::Assignment);
        let v = self.exec_expression(value, env)?;

        if let Some(old) = env.get(&target.name) {
            if old.type_name() != v.type_name() {
                return Err(runtime_error(
                    value.pos(),
                    format!(
                        "type mismatch on assignment: var type is {} and value type is {}",
                        old.type_name(),
                        v.type_name()
                    ),
                ));
            }
        }

        env.set(target.name.as_str(), v.clone());
        Ok(v)
    }

    fn exec_struct_field_assignment(
        &self,
        pos: Pos,
        receiver: &Expression,
        field: &Ident,
        value: &Expression,
        env: &Env,
    ) -> Result<Value> {
        self.emit(Operation::StructFieldAssignment);
        let v = self.exec_expression(value, env)?;
        let left = self.exec_expression(receiver, env)?;

        let s = match left {
            Value::Struct(s) => s,
            other => {
                return Err(runtime_error(
                    pos,
                    format!(
                        "Field access can be only on struct but '{}' given",
                        other.type_name()
                    ),
                ));
            }
        };

        if !s.fields.borrow().contains_key(&field.name) {
            return Err(runtime_error(
                pos,
                format!(
                    "Struct '{}' doesn't have field '{}'",
                    s.def.name, field.name
                ),
            ));
        }
        s.fields.borrow_mut().insert(field.name.clone(), v.clone());
        Ok(v)
    }

    fn exec_unary(&self, pos: Pos, op: UnaryOp, right: &Expression, env: &Env) -> Result<Value> {
        self.emit(Operation::Unary);
        let right = self.exec_expression(right, env)?;
        match op {
            UnaryOp::Not => match right {
                Value::Boolean(b) => Ok(Value::Boolean(!b)),
                other => Err(runtime_error(
                    pos,
                    format!(
                        "Operator '!' could be applied only on bool, '{}' given",
                        other.type_name()
                    ),
                )),
            },
            UnaryOp::Neg => match right {
                Value::Integer { value, .. } => Ok(Value::int(value.wrapping_neg())),
                Value::Float { value, .. } => Ok(Value::float(-value)),
                other => Err(runtime_error(
                    pos,
                    format!("unknown operator: -{}", other.type_name()),
                )),
            },
        }
    }

    fn exec_emptier(&self, pos: Pos, type_name: &str, is_array: bool, env: &Env) -> Result<Value> {
        self.emit(Operation::Emptier);
        if is_array {
            if type_name == TYPE_INT
                || type_name == TYPE_FLOAT
                || env.struct_definition(type_name).is_some()
            {
                return Ok(Value::Array(Rc::new(RefCell::new(ArrayValue {
                    elements_type: type_name.to_string(),
                    elements: Vec::new(),
                    empty: true,
                }))));
            }
            return Err(runtime_error(
                pos,
                format!("? is not supported on type: '[]{type_name}'"),
            ));
        }
        if type_name == TYPE_INT {
            return Ok(Value::Integer {
                value: 0,
                empty: true,
            });
        }
        if type_name == TYPE_FLOAT {
            return Ok(Value::Float {
                value: 0.0,
                empty: true,
            });
        }
        if let Some(def) = env.struct_definition(type_name) {
            return Ok(Value::Struct(Rc::new(StructValue {
                def,
                fields: RefCell::new(HashMap::new()),
                empty: true,
            })));
        }
        Err(runtime_error(
            pos,
            format!("? is not supported on type: '{type_name}'"),
        ))
    }

    fn exec_binary(
        &self,
        pos: Pos,
        op: BinaryOp,
        left: &Expression,
        right: &Expression,
        env: &Env,
    ) -> Result<Value> {
        self.emit(Operation::BinExpr);
        // both sides are always evaluated, even for && and ||
        let left = self.exec_expression(left, env)?;
        let right = self.exec_expression(right, env)?;

        if left.type_name() != right.type_name() {
            return Err(runtime_error(
                pos,
                format!(
                    "forbidden operation on different types: {} and {}",
                    left.type_name(),
                    right.type_name()
                ),
            ));
        }

        exec_scalar_bin_operation(pos, left, right, op)
    }

    fn exec_identifier(&self, ident: &Ident, env: &Env) -> Result<Value> {
        self.emit(Operation::Identifier);
        if let Some(builtin) = self.builtins.get(&ident.name) {
            return Ok(Value::Builtin(builtin.clone()));
        }
        // a bare enum name evaluates to an enum value with no selected
        // element
        if let Some(def) = env.enum_definition(&ident.name) {
            return Ok(Value::Enum { def, index: 0 });
        }
        if let Some(value) = env.get(&ident.name) {
            return Ok(value);
        }
        Err(runtime_error(
            ident.pos,
            format!("identifier not found: {}", ident.name),
        ))
    }

    fn exec_function_literal(&self, f: &FunctionLiteral, env: &Env) -> Result<Value> {
        self.emit(Operation::Function);
        Ok(Value::Function(Rc::new(FunctionValue {
            arguments: f.arguments.clone(),
            body: f.body.clone(),
            return_type: f.return_type.clone(),
            env: env.clone(),
        })))
    }

    fn exec_function_call(
        &self,
        pos: Pos,
        function: &Expression,
        arguments: &[Expression],
        env: &Env,
    ) -> Result<Value> {
        let depth = self.call_depth.get() + 1;
        self.call_depth.set(depth);
        if depth > MAX_CALL_DEPTH {
            self.call_depth.set(depth - 1);
            return Err(runtime_error(
                pos,
                format!("maximum call depth exceeded (limit: {MAX_CALL_DEPTH} calls)"),
            ));
        }
        let result = self.exec_function_call_inner(pos, function, arguments, env);
        self.call_depth.set(self.call_depth.get().saturating_sub(1));
        result
    }

    fn exec_function_call_inner(
        &self,
        pos: Pos,
        function: &Expression,
        arguments: &[Expression],
        env: &Env,
    ) -> Result<Value> {
        self.emit(Operation::FunctionCall);
        let callee = self.exec_expression(function, env)?;

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.exec_expression(argument, env)?);
        }

        match callee {
            Value::Function(f) => {
                check_call_arguments(pos, &f.arguments, &args)?;

                let function_env = Env::enclosed(&f.env);
                for (declared, value) in f.arguments.iter().zip(args) {
                    function_env.set(declared.name.as_str(), value);
                }

                let result = match self.exec_statements_block(&f.body, &function_env)? {
                    Flow::Return(v) => v,
                    Flow::Value(_) => Value::Void,
                };

                check_return_type(pos, &result, &f.return_type)?;
                Ok(result)
            }
            Value::Builtin(builtin) => {
                self.emit(Operation::Builtin {
                    name: builtin.name.clone(),
                });
                check_args(&builtin, &args).map_err(|e| runtime_error(pos, e.to_string()))?;
                let result =
                    (builtin.func)(env, &args).map_err(|e| runtime_error(pos, e.to_string()))?;
                check_return_type(pos, &result, &builtin.return_type)?;
                Ok(result)
            }
            other => Err(runtime_error(
                pos,
                format!("not a function: {}", other.type_name()),
            )),
        }
    }

    fn exec_if(&self, stmt: &IfStatement, env: &Env) -> Result<Flow> {
        self.emit(Operation::IfStmt);
        let condition = match self.exec_expression(&stmt.condition, env)? {
            Value::Boolean(b) => b,
            other => {
                return Err(runtime_error(
                    stmt.pos,
                    format!(
                        "Condition should be boolean type but {} in fact",
                        other.type_name()
                    ),
                ));
            }
        };

        if condition {
            self.exec_statements_block(&stmt.positive, env)
        } else if let Some(else_branch) = &stmt.else_branch {
            self.exec_statements_block(else_branch, env)
        } else {
            Ok(Flow::Value(Value::Void))
        }
    }

    /// Cases are linear, not exhaustive; the first true condition wins and
    /// there is no fall-through.
    fn exec_switch(&self, stmt: &Switch, env: &Env) -> Result<Flow> {
        self.emit(Operation::Switch);
        for case in &stmt.cases {
            let matched = match self.exec_expression(&case.condition, env)? {
                Value::Boolean(b) => b,
                other => {
                    return Err(runtime_error(
                        case.condition.pos(),
                        format!(
                            "Result of case condition should be 'boolean' but '{}' given",
                            other.type_name()
                        ),
                    ));
                }
            };
            if matched {
                let flow = self.exec_statements_block(&case.body, env)?;
                if let Flow::Return(_) = flow {
                    return Ok(flow);
                }
                return Ok(Flow::Value(Value::Void));
            }
        }
        if let Some(default) = &stmt.default {
            let flow = self.exec_statements_block(default, env)?;
            if let Flow::Return(_) = flow {
                return Ok(flow);
            }
        }
        Ok(Flow::Value(Value::Void))
    }

    fn exec_array(
        &self,
        pos: Pos,
        elements_type: &str,
        elements: &[Expression],
        env: &Env,
    ) -> Result<Value> {
        self.emit(Operation::Array);
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(self.exec_expression(element, env)?);
        }
        for (i, value) in values.iter().enumerate() {
            if value.type_name() != elements_type {
                return Err(runtime_error(
                    pos,
                    format!(
                        "Array element #{} should be type '{}' but '{}' given",
                        i + 1,
                        elements_type,
                        value.type_name()
                    ),
                ));
            }
        }
        Ok(Value::Array(Rc::new(RefCell::new(ArrayValue {
            elements_type: elements_type.to_string(),
            elements: values,
            empty: false,
        }))))
    }

    fn exec_array_index(
        &self,
        pos: Pos,
        left: &Expression,
        index: &Expression,
        env: &Env,
    ) -> Result<Value> {
        self.emit(Operation::ArrayIndex);
        let left = self.exec_expression(left, env)?;
        let index = self.exec_expression(index, env)?;

        let array = match left {
            Value::Array(a) => a,
            other => {
                return Err(runtime_error(
                    pos,
                    format!(
                        "Array access can be only on arrays but '{}' given",
                        other.type_name()
                    ),
                ));
            }
        };
        let i = match index {
            Value::Integer { value, .. } => value,
            other => {
                return Err(runtime_error(
                    pos,
                    format!(
                        "Array access can be only by 'int' type but '{}' given",
                        other.type_name()
                    ),
                ));
            }
        };

        let array = array.borrow();
        if i < 0 || i as usize >= array.elements.len() {
            return Err(runtime_error(
                pos,
                format!("Array access out of bounds: '{i}'"),
            ));
        }
        Ok(array.elements[i as usize].clone())
    }

    fn exec_struct_literal(
        &self,
        pos: Pos,
        name: &Ident,
        fields: &[FieldInit],
        env: &Env,
    ) -> Result<Value> {
        self.emit(Operation::Struct);
        let Some(def) = env.struct_definition(&name.name) else {
            return Err(runtime_error(
                pos,
                format!("Struct '{}' is not defined", name.name),
            ));
        };

        let mut values = HashMap::new();
        for field in fields {
            let value = self.exec_expression(&field.value, env)?;

            let Some(declared) = def.field_type(&field.name.name) else {
                return Err(runtime_error(
                    field.pos,
                    format!(
                        "Struct '{}' doesn't have the field '{}' in the definition",
                        def.name, field.name.name
                    ),
                ));
            };
            if declared != value.type_name() {
                return Err(runtime_error(
                    field.pos,
                    format!(
                        "Field '{}' defined as '{}' but '{}' given",
                        field.name.name,
                        declared,
                        value.type_name()
                    ),
                ));
            }

            values.insert(field.name.name.clone(), value);
        }

        if values.len() != def.fields.len() {
            return Err(runtime_error(
                pos,
                format!(
                    "Var of struct '{}' should have {} fields filled but in fact only {}",
                    def.name,
                    def.fields.len(),
                    values.len()
                ),
            ));
        }

        Ok(Value::Struct(Rc::new(StructValue {
            def,
            fields: RefCell::new(values),
            empty: false,
        })))
    }

    fn exec_struct_field_call(
        &self,
        pos: Pos,
        receiver: &Expression,
        field: &Ident,
        env: &Env,
    ) -> Result<Value> {
        self.emit(Operation::StructFieldCall);
        let s = match self.exec_expression(receiver, env)? {
            Value::Struct(s) => s,
            other => {
                return Err(runtime_error(
                    pos,
                    format!(
                        "Field access can be only on struct but '{}' given",
                        other.type_name()
                    ),
                ));
            }
        };

        let fields = s.fields.borrow();
        match fields.get(&field.name) {
            Some(value) => Ok(value.clone()),
            None => Err(runtime_error(
                pos,
                format!(
                    "Struct '{}' doesn't have field '{}'",
                    s.def.name, field.name
                ),
            )),
        }
    }

    fn exec_enum_element_call(
        &self,
        pos: Pos,
        receiver: &Expression,
        element: &Ident,
        env: &Env,
    ) -> Result<Value> {
        self.emit(Operation::EnumElementCall);
        let def = match self.exec_expression(receiver, env)? {
            Value::Enum { def, .. } => def,
            other => {
                return Err(runtime_error(
                    pos,
                    format!("Expected enum, got '{}'", other.type_name()),
                ));
            }
        };

        match def.elements.iter().position(|el| el == &element.name) {
            Some(index) => Ok(Value::Enum {
                def,
                index: index as u8,
            }),
            None => Err(runtime_error(
                pos,
                format!(
                    "Enum '{}' doesn't have element '{}'",
                    def.name, element.name
                ),
            )),
        }
    }

    fn register_struct_definition(&self, def: &AstStructDefinition, env: &Env) -> Result<()> {
        let runtime_def = StructDefinition {
            name: def.name.clone(),
            fields: def
                .fields
                .iter()
                .map(|f| (f.name.clone(), f.var_type.clone()))
                .collect(),
        };
        env.register_struct(runtime_def)
            .map_err(|e| runtime_error(def.pos, e.to_string()))
    }

    fn register_enum_definition(&self, def: &AstEnumDefinition, env: &Env) -> Result<()> {
        let runtime_def = EnumDefinition {
            name: def.name.clone(),
            elements: def.elements.clone(),
        };
        env.register_enum(runtime_def)
            .map_err(|e| runtime_error(def.pos, e.to_string()))
    }
}

/// Declared argument count and per-argument type check for user
/// functions.
fn check_call_arguments(pos: Pos, declared: &[TypedName], actual: &[Value]) -> Result<()> {
    if declared.len() != actual.len() {
        return Err(runtime_error(
            pos,
            format!(
                "Function call arguments count mismatch: declared {}, but called {}",
                declared.len(),
                actual.len()
            ),
        ));
    }
    for (i, arg) in declared.iter().enumerate() {
        if actual[i].type_name() != arg.var_type {
            return Err(runtime_error(
                arg.pos,
                format!(
                    "argument #{} type mismatch: expected '{}' by func declaration but called '{}'",
                    i + 1,
                    arg.var_type,
                    actual[i].type_name()
                ),
            ));
        }
    }
    Ok(())
}

fn check_return_type(pos: Pos, result: &Value, declared: &str) -> Result<()> {
    if result.type_name() != declared {
        return Err(runtime_error(
            pos,
            format!(
                "Return type mismatch: function declared as '{}' but in fact return '{}'",
                declared,
                result.type_name()
            ),
        ));
    }
    Ok(())
}

// ======= scalar binary operations =======

fn exec_scalar_bin_operation(pos: Pos, left: Value, right: Value, op: BinaryOp) -> Result<Value> {
    match (&left, &right) {
        (Value::Integer { value: l, .. }, Value::Integer { value: r, .. }) => {
            integer_bin_operation(pos, *l, *r, op)
        }
        (Value::Float { value: l, .. }, Value::Float { value: r, .. }) => {
            float_bin_operation(pos, *l, *r, op)
        }
        (Value::Boolean(l), Value::Boolean(r)) => boolean_bin_operation(pos, *l, *r, op),
        (Value::Enum { index: l, .. }, Value::Enum { index: r, .. }) => {
            if op != BinaryOp::Eq {
                return Err(runtime_error(
                    pos,
                    format!(
                        "unsupported operator '{}' for type: '{}'",
                        op,
                        left.type_name()
                    ),
                ));
            }
            Ok(Value::Boolean(l == r))
        }
        _ => Err(runtime_error(
            pos,
            format!(
                "unsupported operator '{}' for type: '{}'",
                op,
                left.type_name()
            ),
        )),
    }
}

fn integer_bin_operation(pos: Pos, left: i64, right: i64, op: BinaryOp) -> Result<Value> {
    match op {
        BinaryOp::Add => Ok(Value::int(left.wrapping_add(right))),
        BinaryOp::Sub => Ok(Value::int(left.wrapping_sub(right))),
        BinaryOp::Mul => Ok(Value::int(left.wrapping_mul(right))),
        BinaryOp::Div => match left.checked_div(right) {
            Some(v) => Ok(Value::int(v)),
            None => Err(runtime_error(pos, "division by zero")),
        },
        BinaryOp::Lt => Ok(Value::Boolean(left < right)),
        BinaryOp::Gt => Ok(Value::Boolean(left > right)),
        BinaryOp::Eq => Ok(Value::Boolean(left == right)),
        BinaryOp::NotEq => Ok(Value::Boolean(left != right)),
        _ => Err(runtime_error(
            pos,
            format!("unsupported operator for types: {TYPE_INT} {op} {TYPE_INT}"),
        )),
    }
}

fn float_bin_operation(pos: Pos, left: f64, right: f64, op: BinaryOp) -> Result<Value> {
    match op {
        BinaryOp::Add => Ok(Value::float(left + right)),
        BinaryOp::Sub => Ok(Value::float(left - right)),
        BinaryOp::Mul => Ok(Value::float(left * right)),
        BinaryOp::Div => Ok(Value::float(left / right)),
        BinaryOp::Lt => Ok(Value::Boolean(left < right)),
        BinaryOp::Gt => Ok(Value::Boolean(left > right)),
        BinaryOp::Eq => Ok(Value::Boolean(left == right)),
        BinaryOp::NotEq => Ok(Value::Boolean(left != right)),
        _ => Err(runtime_error(
            pos,
            format!("unsupported operator for types: {TYPE_FLOAT} {op} {TYPE_FLOAT}"),
        )),
    }
}

fn boolean_bin_operation(pos: Pos, left: bool, right: bool, op: BinaryOp) -> Result<Value> {
    match op {
        BinaryOp::Eq => Ok(Value::Boolean(left == right)),
        BinaryOp::NotEq => Ok(Value::Boolean(left != right)),
        BinaryOp::And => Ok(Value::Boolean(left && right)),
        BinaryOp::Or => Ok(Value::Boolean(left || right)),
        _ => Err(runtime_error(
            pos,
            format!("unsupported operator for types: {TYPE_BOOL} {op} {TYPE_BOOL}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> Pos {
        Pos::default()
    }

    #[test]
    fn integer_division_truncates() {
        let v = integer_bin_operation(p(), 7, 2, BinaryOp::Div).unwrap();
        assert!(matches!(v, Value::Integer { value: 3, .. }));
        let v = integer_bin_operation(p(), -7, 2, BinaryOp::Div).unwrap();
        assert!(matches!(v, Value::Integer { value: -3, .. }));
    }

    #[test]
    fn integer_division_by_zero_is_an_error() {
        let err = integer_bin_operation(p(), 1, 0, BinaryOp::Div).unwrap_err();
        assert!(err.to_string().contains("division by zero"));
    }

    #[test]
    fn float_division_by_zero_follows_ieee() {
        let v = float_bin_operation(p(), 1.0, 0.0, BinaryOp::Div).unwrap();
        assert!(matches!(v, Value::Float { value, .. } if value.is_infinite()));
    }

    #[test]
    fn boolean_logical_operators() {
        assert!(matches!(
            boolean_bin_operation(p(), true, false, BinaryOp::And).unwrap(),
            Value::Boolean(false)
        ));
        assert!(matches!(
            boolean_bin_operation(p(), true, false, BinaryOp::Or).unwrap(),
            Value::Boolean(true)
        ));
        assert!(boolean_bin_operation(p(), true, false, BinaryOp::Add).is_err());
    }

    #[test]
    fn enums_support_equality_only() {
        let def = Rc::new(EnumDefinition {
            name: "Colors".to_string(),
            elements: vec!["red".to_string(), "green".to_string()],
        });
        let red = Value::Enum {
            def: def.clone(),
            index: 0,
        };
        let green = Value::Enum { def, index: 1 };
        let v = exec_scalar_bin_operation(p(), red.clone(), green.clone(), BinaryOp::Eq).unwrap();
        assert!(matches!(v, Value::Boolean(false)));
        assert!(exec_scalar_bin_operation(p(), red, green, BinaryOp::NotEq).is_err());
    }
}
