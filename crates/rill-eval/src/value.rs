//! Runtime values for rill programs.
//!
//! Every value has an observable type name; the evaluator compares these
//! names at use sites. Arrays and struct instances are shared by handle,
//! so aliased bindings observe field and element mutation.

use crate::builtins::Builtin;
use crate::env::Env;
use rill_ast::ast::{StatementsBlock, TypedName};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

pub const TYPE_INT: &str = "int";
pub const TYPE_FLOAT: &str = "float";
pub const TYPE_BOOL: &str = "bool";
pub const TYPE_VOID: &str = "void";
pub const TYPE_FUNCTION: &str = "function";
pub const TYPE_BUILTIN: &str = "builtin function";

/// A registered `struct` type: name plus fields in declaration order.
#[derive(Debug, Clone)]
pub struct StructDefinition {
    pub name: String,
    /// (field name, declared type), in declaration order
    pub fields: Vec<(String, String)>,
}

impl StructDefinition {
    pub fn field_type(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_str())
    }
}

/// A registered `enum` type.
#[derive(Debug, Clone)]
pub struct EnumDefinition {
    pub name: String,
    pub elements: Vec<String>,
}

#[derive(Debug)]
pub struct ArrayValue {
    pub elements_type: String,
    pub elements: Vec<Value>,
    pub empty: bool,
}

#[derive(Debug)]
pub struct StructValue {
    pub def: Rc<StructDefinition>,
    pub fields: RefCell<HashMap<String, Value>>,
    pub empty: bool,
}

pub struct FunctionValue {
    pub arguments: Vec<TypedName>,
    pub body: StatementsBlock,
    pub return_type: String,
    /// The environment the literal was evaluated in (lexical closure).
    pub env: Env,
}

// No derive: the captured env can reach back to this function through the
// binding that holds it.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self
            .arguments
            .iter()
            .map(|a| format!("{} {}", a.var_type, a.name))
            .collect();
        write!(f, "fn({}) {}", args.join(", "), self.return_type)
    }
}

#[derive(Debug, Clone)]
pub enum Value {
    Integer {
        value: i64,
        empty: bool,
    },
    Float {
        value: f64,
        empty: bool,
    },
    Boolean(bool),
    Enum {
        def: Rc<EnumDefinition>,
        index: u8,
    },
    Array(Rc<RefCell<ArrayValue>>),
    Struct(Rc<StructValue>),
    Function(Rc<FunctionValue>),
    Builtin(Rc<Builtin>),
    Void,
}

impl Value {
    pub fn int(value: i64) -> Value {
        Value::Integer {
            value,
            empty: false,
        }
    }

    pub fn float(value: f64) -> Value {
        Value::Float {
            value,
            empty: false,
        }
    }

    /// The observable type name used by every runtime type check.
    pub fn type_name(&self) -> String {
        match self {
            Value::Integer { .. } => TYPE_INT.to_string(),
            Value::Float { .. } => TYPE_FLOAT.to_string(),
            Value::Boolean(_) => TYPE_BOOL.to_string(),
            Value::Enum { def, .. } => def.name.clone(),
            Value::Array(a) => format!("[]{}", a.borrow().elements_type),
            Value::Struct(s) => s.def.name.clone(),
            Value::Function(_) => TYPE_FUNCTION.to_string(),
            Value::Builtin(_) => TYPE_BUILTIN.to_string(),
            Value::Void => TYPE_VOID.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer { value, .. } => write!(f, "{value}"),
            Value::Float { value, .. } => write!(f, "{value:.2}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Enum { def, index } => match def.elements.get(*index as usize) {
                Some(el) => write!(f, "{el}"),
                None => write!(f, "{}", def.name),
            },
            Value::Array(a) => {
                let a = a.borrow();
                let elements: Vec<String> = a.elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[]{}{{{}}}", a.elements_type, elements.join(", "))
            }
            Value::Struct(s) => {
                // definition order keeps the rendering deterministic
                let fields = s.fields.borrow();
                let rendered: Vec<String> = s
                    .def
                    .fields
                    .iter()
                    .filter_map(|(name, _)| {
                        fields.get(name).map(|v| format!("{name}: {v}"))
                    })
                    .collect();
                write!(f, "{}{{{}}}", s.def.name, rendered.join(", "))
            }
            Value::Function(_) => write!(f, "function"),
            Value::Builtin(_) => write!(f, "builtin function"),
            Value::Void => write!(f, "void"),
        }
    }
}
