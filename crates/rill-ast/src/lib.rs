#![forbid(unsafe_code)]
#![deny(unused_must_use)]

pub mod pos {
    use serde::Serialize;

    /// Source coordinates of a token. `line` and `col` are 1-based and feed
    /// error messages; `offset` is the absolute character index the lexer
    /// rewinds to.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
    pub struct Pos {
        pub line: u32,
        pub col: u32,
        pub offset: u32,
    }
}

pub mod ast {
    use super::pos::Pos;
    use serde::Serialize;

    /// An ordered sequence of statements: the top-level program, a function
    /// body, or a branch of `if`/`switch`.
    #[derive(Debug, Clone, Default, Serialize)]
    pub struct StatementsBlock {
        pub statements: Vec<Statement>,
    }

    impl StatementsBlock {
        /// Position of the first statement, or a zero position for an
        /// empty block.
        pub fn pos(&self) -> Pos {
            self.statements.first().map(Statement::pos).unwrap_or_default()
        }
    }

    #[derive(Debug, Clone, Serialize)]
    pub enum Statement {
        /// An expression evaluated for effect; its result is discarded.
        /// Only identifier-headed expressions (assignments, field
        /// assignments, calls) can appear here.
        Expression { pos: Pos, expr: Expression },
        Return { pos: Pos, value: Expression },
        If(IfStatement),
        Switch(Switch),
        StructDefinition(StructDefinition),
        EnumDefinition(EnumDefinition),
    }

    impl Statement {
        pub fn pos(&self) -> Pos {
            match self {
                Statement::Expression { pos, .. } => *pos,
                Statement::Return { pos, .. } => *pos,
                Statement::If(s) => s.pos,
                Statement::Switch(s) => s.pos,
                Statement::StructDefinition(s) => s.pos,
                Statement::EnumDefinition(s) => s.pos,
            }
        }
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct IfStatement {
        pub pos: Pos,
        pub condition: Expression,
        pub positive: StatementsBlock,
        pub else_branch: Option<StatementsBlock>,
    }

    /// `switch [scrutinee] { case … default … }`. With a scrutinee, each
    /// case condition was parsed as the right part of an expression whose
    /// left side is the scrutinee.
    #[derive(Debug, Clone, Serialize)]
    pub struct Switch {
        pub pos: Pos,
        pub scrutinee: Option<Expression>,
        pub cases: Vec<Case>,
        pub default: Option<StatementsBlock>,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct Case {
        pub pos: Pos,
        pub condition: Expression,
        pub body: StatementsBlock,
    }

    /// `struct Name { type field … }`. Fields keep source order.
    #[derive(Debug, Clone, Serialize)]
    pub struct StructDefinition {
        pub pos: Pos,
        pub name: String,
        pub fields: Vec<TypedName>,
    }

    impl StructDefinition {
        pub fn field(&self, name: &str) -> Option<&TypedName> {
            self.fields.iter().find(|f| f.name == name)
        }
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct EnumDefinition {
        pub pos: Pos,
        pub name: String,
        pub elements: Vec<String>,
    }

    /// A `<type> <name>` pair: function argument or struct field. Array
    /// types carry the `[]` prefix in `var_type`.
    #[derive(Debug, Clone, Serialize)]
    pub struct TypedName {
        pub pos: Pos,
        pub var_type: String,
        pub name: String,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct Ident {
        pub pos: Pos,
        pub name: String,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct FunctionLiteral {
        pub pos: Pos,
        pub arguments: Vec<TypedName>,
        pub return_type: String,
        pub body: StatementsBlock,
    }

    /// One `field = expr` entry of a struct literal.
    #[derive(Debug, Clone, Serialize)]
    pub struct FieldInit {
        pub pos: Pos,
        pub name: Ident,
        pub value: Expression,
    }

    #[derive(Debug, Clone, Serialize)]
    pub enum Expression {
        Assignment {
            pos: Pos,
            target: Ident,
            value: Box<Expression>,
        },
        /// `recv.field = value` where `recv` may itself be a field-access
        /// chain.
        StructFieldAssignment {
            pos: Pos,
            receiver: Box<Expression>,
            field: Ident,
            value: Box<Expression>,
        },
        Unary {
            pos: Pos,
            op: UnaryOp,
            right: Box<Expression>,
        },
        Binary {
            pos: Pos,
            op: BinaryOp,
            left: Box<Expression>,
            right: Box<Expression>,
        },
        /// `?T` or `?[]T`: produces an empty sentinel of the named type.
        Emptier {
            pos: Pos,
            type_name: String,
            is_array: bool,
        },
        Ident(Ident),
        IntLiteral {
            pos: Pos,
            value: i64,
        },
        FloatLiteral {
            pos: Pos,
            value: f64,
        },
        BoolLiteral {
            pos: Pos,
            value: bool,
        },
        /// `[]T{e1, e2, …}`
        ArrayLiteral {
            pos: Pos,
            elements_type: String,
            elements: Vec<Expression>,
        },
        Index {
            pos: Pos,
            left: Box<Expression>,
            index: Box<Expression>,
        },
        FunctionLiteral(FunctionLiteral),
        Call {
            pos: Pos,
            function: Box<Expression>,
            arguments: Vec<Expression>,
        },
        /// `Name{field = expr, …}`
        StructLiteral {
            pos: Pos,
            name: Ident,
            fields: Vec<FieldInit>,
        },
        FieldAccess {
            pos: Pos,
            receiver: Box<Expression>,
            field: Ident,
        },
        /// `Enum:element`
        EnumElement {
            pos: Pos,
            receiver: Box<Expression>,
            element: Ident,
        },
    }

    impl Expression {
        pub fn pos(&self) -> Pos {
            match self {
                Expression::Assignment { pos, .. } => *pos,
                Expression::StructFieldAssignment { pos, .. } => *pos,
                Expression::Unary { pos, .. } => *pos,
                Expression::Binary { pos, .. } => *pos,
                Expression::Emptier { pos, .. } => *pos,
                Expression::Ident(id) => id.pos,
                Expression::IntLiteral { pos, .. } => *pos,
                Expression::FloatLiteral { pos, .. } => *pos,
                Expression::BoolLiteral { pos, .. } => *pos,
                Expression::ArrayLiteral { pos, .. } => *pos,
                Expression::Index { pos, .. } => *pos,
                Expression::FunctionLiteral(f) => f.pos,
                Expression::Call { pos, .. } => *pos,
                Expression::StructLiteral { pos, .. } => *pos,
                Expression::FieldAccess { pos, .. } => *pos,
                Expression::EnumElement { pos, .. } => *pos,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub enum UnaryOp {
        Not,
        Neg,
    }

    impl std::fmt::Display for UnaryOp {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                UnaryOp::Not => write!(f, "!"),
                UnaryOp::Neg => write!(f, "-"),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub enum BinaryOp {
        // logical
        Or,
        And,
        // equality
        Eq,
        NotEq,
        // relational
        Lt,
        Gt,
        // arithmetic
        Add,
        Sub,
        Mul,
        Div,
    }

    impl std::fmt::Display for BinaryOp {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let s = match self {
                BinaryOp::Or => "||",
                BinaryOp::And => "&&",
                BinaryOp::Eq => "==",
                BinaryOp::NotEq => "!=",
                BinaryOp::Lt => "<",
                BinaryOp::Gt => ">",
                BinaryOp::Add => "+",
                BinaryOp::Sub => "-",
                BinaryOp::Mul => "*",
                BinaryOp::Div => "/",
            };
            write!(f, "{s}")
        }
    }
}
