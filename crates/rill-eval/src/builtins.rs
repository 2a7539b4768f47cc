//! Built-in functions and their argument checking.
//!
//! The evaluator owns a registry of these; embedders may add their own
//! before execution starts. Argument type specs are type-name strings,
//! with `"any"` and `"array"` as wildcards.

use crate::env::Env;
use crate::value::{Value, TYPE_BOOL, TYPE_FLOAT, TYPE_INT, TYPE_VOID};
use anyhow::{bail, Result};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

pub const BUILTIN_PRINT: &str = "print";
pub const BUILTIN_EMPTY: &str = "empty";
pub const BUILTIN_LENGTH: &str = "length";
pub const BUILTIN_ABS_INT: &str = "absInt";
pub const BUILTIN_ABS_FLOAT: &str = "absFloat";

/// Argument type wildcard matching any value.
pub const ARG_ANY: &str = "any";
/// Argument type wildcard matching any array.
pub const ARG_ARRAY: &str = "array";

pub type BuiltinFn = Box<dyn Fn(&Env, &[Value]) -> Result<Value>>;

pub struct Builtin {
    pub name: String,
    pub arg_types: Vec<String>,
    pub return_type: String,
    pub func: BuiltinFn,
}

impl Builtin {
    pub fn new(
        name: &str,
        arg_types: &[&str],
        return_type: &str,
        func: impl Fn(&Env, &[Value]) -> Result<Value> + 'static,
    ) -> Builtin {
        Builtin {
            name: name.to_string(),
            arg_types: arg_types.iter().map(|s| s.to_string()).collect(),
            return_type: return_type.to_string(),
            func: Box::new(func),
        }
    }
}

// No derive: the host callable is opaque.
impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "builtin {}({}) {}",
            self.name,
            self.arg_types.join(", "),
            self.return_type
        )
    }
}

/// Arity and per-argument type check, run before the host callable.
pub(crate) fn check_args(builtin: &Builtin, args: &[Value]) -> Result<()> {
    if builtin.arg_types.len() != args.len() {
        bail!(
            "wrong number of arguments for '{}': need {}, got {}",
            builtin.name,
            builtin.arg_types.len(),
            args.len()
        );
    }
    for (i, arg_type) in builtin.arg_types.iter().enumerate() {
        match arg_type.as_str() {
            ARG_ANY => {}
            ARG_ARRAY => {
                if !matches!(args[i], Value::Array(_)) {
                    bail!(
                        "wrong type of argument #{} for '{}': need {}, got {}",
                        i + 1,
                        builtin.name,
                        arg_type,
                        args[i].type_name()
                    );
                }
            }
            t => {
                if t != args[i].type_name() {
                    bail!(
                        "wrong type of argument #{} for '{}': need {}, got {}",
                        i + 1,
                        builtin.name,
                        t,
                        args[i].type_name()
                    );
                }
            }
        }
    }
    Ok(())
}

/// The registry every evaluator starts with.
pub(crate) fn default_builtins() -> HashMap<String, Rc<Builtin>> {
    let mut builtins = HashMap::new();

    let mut add = |b: Builtin| {
        builtins.insert(b.name.clone(), Rc::new(b));
    };

    add(Builtin::new(BUILTIN_PRINT, &[ARG_ANY], TYPE_VOID, |_env, args| {
        println!("{}", args[0]);
        Ok(Value::Void)
    }));

    add(Builtin::new(BUILTIN_EMPTY, &[ARG_ANY], TYPE_BOOL, |_env, args| {
        match &args[0] {
            Value::Struct(s) => Ok(Value::Boolean(s.empty)),
            Value::Integer { empty, .. } => Ok(Value::Boolean(*empty)),
            Value::Float { empty, .. } => Ok(Value::Boolean(*empty)),
            Value::Array(a) => Ok(Value::Boolean(a.borrow().empty)),
            other => bail!("type '{}' doesn't support emptiness", other.type_name()),
        }
    }));

    add(Builtin::new(BUILTIN_LENGTH, &[ARG_ARRAY], TYPE_INT, |_env, args| {
        let Value::Array(a) = &args[0] else {
            bail!("'length' expects an array");
        };
        Ok(Value::int(a.borrow().elements.len() as i64))
    }));

    add(Builtin::new(BUILTIN_ABS_INT, &[TYPE_INT], TYPE_INT, |_env, args| {
        let Value::Integer { value, .. } = &args[0] else {
            bail!("'absInt' expects an int");
        };
        Ok(Value::int(value.wrapping_abs()))
    }));

    add(Builtin::new(
        BUILTIN_ABS_FLOAT,
        &[TYPE_FLOAT],
        TYPE_FLOAT,
        |_env, args| {
            let Value::Float { value, .. } = &args[0] else {
                bail!("'absFloat' expects a float");
            };
            Ok(Value::float(value.abs()))
        },
    ));

    builtins
}
