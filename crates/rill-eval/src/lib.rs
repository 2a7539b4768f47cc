#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

pub mod builtins;
pub mod env;
pub mod exec;
pub mod value;

pub use builtins::Builtin;
pub use env::Env;
pub use exec::{Evaluator, Operation};
pub use value::Value;
