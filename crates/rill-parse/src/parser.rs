use crate::lexer::Lexer;
use crate::token::{tokens_string, Token, TokenKind};
use anyhow::{anyhow, Result};
use rill_ast::ast::{
    BinaryOp, Case, EnumDefinition, Expression, FieldInit, FunctionLiteral, Ident, IfStatement,
    Statement, StatementsBlock, StructDefinition, Switch, TypedName, UnaryOp,
};

/// Maximum nesting depth for expressions and statement blocks. Prevents
/// stack overflow from pathological input.
const MAX_NESTING_DEPTH: u32 = 512;

/// Binding strength of tokens in expression position, low to high. The
/// struct-construction `{`, field `.`, and enum-element `:` share the
/// highest index-class strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Assignment, // =
    Or,         // ||
    And,        // &&
    Equality,   // == !=
    Comparison, // < >
    Sum,        // + -
    Product,    // * /
    Prefix,     // -x !x
    Call,       // f(x)
    Index,      // a[i]  T{..}  s.f  E:el
}

fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Assign => Precedence::Assignment,
        TokenKind::Or => Precedence::Or,
        TokenKind::And => Precedence::And,
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equality,
        TokenKind::Lt | TokenKind::Gt => Precedence::Comparison,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Star | TokenKind::Slash => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        TokenKind::LBracket | TokenKind::LBrace | TokenKind::Dot | TokenKind::Colon => {
            Precedence::Index
        }
        _ => Precedence::Lowest,
    }
}

fn binary_op_of(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::Eq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        TokenKind::And => Some(BinaryOp::And),
        TokenKind::Or => Some(BinaryOp::Or),
        _ => None,
    }
}

/// Lex and parse a whole program.
pub fn parse_source(src: &str) -> Result<StatementsBlock> {
    Parser::new(Lexer::new(src))?.parse()
}

/// Pratt parser over the lexer's token stream. Holds a one-token
/// lookahead window.
pub struct Parser {
    lexer: Lexer,
    curr: Token,
    next: Token,
    depth: u32,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self> {
        let curr = lexer.next_token()?;
        let next = lexer.next_token()?;
        Ok(Parser {
            lexer,
            curr,
            next,
            depth: 0,
        })
    }

    pub fn parse(&mut self) -> Result<StatementsBlock> {
        let statements = self.parse_block_of_statements(&[TokenKind::Eof])?;
        Ok(StatementsBlock { statements })
    }

    // ======= token window =======

    fn read(&mut self) -> Result<()> {
        self.curr = std::mem::replace(&mut self.next, self.lexer.next_token()?);
        Ok(())
    }

    /// Advance, then skip a single end-of-line if one follows. Used where
    /// the grammar permits a newline after a delimiter.
    fn read_with_eol_opt(&mut self) -> Result<()> {
        self.read()?;
        if self.curr.kind == TokenKind::Eol {
            self.read()?;
        }
        Ok(())
    }

    fn curr_in(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.curr.kind)
    }

    fn next_in(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.next.kind)
    }

    fn expect_current(&self, kind: TokenKind) -> Result<Token> {
        if self.curr.kind == kind {
            Ok(self.curr.clone())
        } else {
            Err(self.parse_error(format!(
                "expected token to be '{}', got '{}' instead",
                kind, self.curr.kind
            )))
        }
    }

    fn expect_current_in(&self, kinds: &[TokenKind]) -> Result<Token> {
        if kinds.len() == 1 {
            return self.expect_current(kinds[0]);
        }
        if self.curr_in(kinds) {
            Ok(self.curr.clone())
        } else {
            Err(self.parse_error(format!(
                "expected token to be one of ({}), got '{}' instead",
                tokens_string(kinds),
                self.curr.kind
            )))
        }
    }

    fn require_token(&mut self, kind: TokenKind) -> Result<()> {
        self.read()?;
        self.expect_current(kind)?;
        Ok(())
    }

    fn require_sequence(&mut self, kinds: &[TokenKind]) -> Result<()> {
        for &kind in kinds {
            self.require_token(kind)?;
        }
        Ok(())
    }

    fn parse_error(&self, msg: impl AsRef<str>) -> anyhow::Error {
        anyhow!(
            "{}\nline:{}, pos {}",
            msg.as_ref(),
            self.curr.pos.line,
            self.curr.pos.col
        )
    }

    fn enter_nesting(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.parse_error(format!(
                "maximum nesting depth exceeded (limit: {MAX_NESTING_DEPTH})"
            )));
        }
        Ok(())
    }

    fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // ======= statements =======

    fn parse_block_of_statements(&mut self, terminators: &[TokenKind]) -> Result<Vec<Statement>> {
        self.enter_nesting()?;
        let result = self.parse_block_of_statements_inner(terminators);
        self.exit_nesting();
        result
    }

    fn parse_block_of_statements_inner(
        &mut self,
        terminators: &[TokenKind],
    ) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();
        while !self.curr_in(terminators) {
            if let Some(stmt) = self.parse_statement()? {
                statements.push(stmt);
            }
            self.read()?;
        }
        Ok(statements)
    }

    /// Dispatch on the current token kind. Only identifier-headed
    /// expressions (assignment, field assignment, call) may stand alone
    /// as statements.
    fn parse_statement(&mut self) -> Result<Option<Statement>> {
        match self.curr.kind {
            TokenKind::Ident => {
                let pos = self.curr.pos;
                let expr = if self.next.kind == TokenKind::LParen {
                    let function = Expression::Ident(Ident {
                        pos,
                        name: self.curr.literal.clone(),
                    });
                    self.read()?;
                    self.parse_function_call(function)?
                } else if self.next.kind == TokenKind::Dot {
                    self.parse_struct_field_assignment(&[TokenKind::Eol])?
                } else {
                    self.parse_assignment(&[TokenKind::Eol])?
                };
                Ok(Some(Statement::Expression { pos, expr }))
            }
            TokenKind::Return => self.parse_return().map(Some),
            TokenKind::If => self.parse_if().map(Some),
            TokenKind::Struct => self.parse_struct_definition().map(Some),
            TokenKind::Enum => self.parse_enum_definition().map(Some),
            TokenKind::Switch => self.parse_switch().map(Some),
            TokenKind::Eol => Ok(None),
            _ => Err(self.parse_error(format!(
                "unexpected token for start of statement: '{}'",
                self.curr.kind
            ))),
        }
    }

    /// Shared body of `ident = expr` used by plain assignments and struct
    /// literal fields. Leaves the current token on the terminator.
    fn parse_named_assignment(&mut self, terminators: &[TokenKind]) -> Result<(Ident, Expression)> {
        let target_tok = self.expect_current(TokenKind::Ident)?;
        let target = Ident {
            pos: target_tok.pos,
            name: target_tok.literal,
        };
        self.read()?;
        self.expect_current(TokenKind::Assign)?;
        self.read()?;
        let value = self.parse_expression(Precedence::Lowest, terminators)?;
        self.read()?;
        self.expect_current_in(terminators)?;
        Ok((target, value))
    }

    fn parse_assignment(&mut self, terminators: &[TokenKind]) -> Result<Expression> {
        let pos = self.curr.pos;
        let (target, value) = self.parse_named_assignment(terminators)?;
        Ok(Expression::Assignment {
            pos,
            target,
            value: Box::new(value),
        })
    }

    /// `ident(.field)+ = expr` — the left side is a field-access chain.
    fn parse_struct_field_assignment(&mut self, terminators: &[TokenKind]) -> Result<Expression> {
        let pos = self.curr.pos;
        let first = self.expect_current(TokenKind::Ident)?;
        let mut chain = Expression::Ident(Ident {
            pos: first.pos,
            name: first.literal,
        });

        // nested structs can be here
        while self.next.kind == TokenKind::Dot {
            self.read()?;
            self.expect_current(TokenKind::Dot)?;
            chain = self.parse_field_access(chain)?;
        }

        let Expression::FieldAccess {
            receiver, field, ..
        } = chain
        else {
            return Err(self.parse_error("expected a field access chain on the left of '='"));
        };

        self.read()?;
        self.expect_current(TokenKind::Assign)?;
        self.read()?;
        let value = self.parse_expression(Precedence::Lowest, terminators)?;
        self.read()?;
        self.expect_current_in(terminators)?;

        Ok(Expression::StructFieldAssignment {
            pos,
            receiver,
            field,
            value: Box::new(value),
        })
    }

    fn parse_return(&mut self) -> Result<Statement> {
        let pos = self.curr.pos;
        self.read()?;
        let value = self.parse_expression(Precedence::Lowest, &[TokenKind::Eol])?;
        Ok(Statement::Return { pos, value })
    }

    fn parse_if(&mut self) -> Result<Statement> {
        let pos = self.curr.pos;
        self.read()?;
        let condition = self.parse_expression(Precedence::Lowest, &[TokenKind::LBrace])?;
        self.require_sequence(&[TokenKind::LBrace, TokenKind::Eol])?;
        self.read()?;
        let statements = self.parse_block_of_statements(&[TokenKind::RBrace])?;
        let positive = StatementsBlock { statements };

        self.read()?;
        if self.curr.kind != TokenKind::Else {
            return Ok(Statement::If(IfStatement {
                pos,
                condition,
                positive,
                else_branch: None,
            }));
        }

        self.require_sequence(&[TokenKind::LBrace, TokenKind::Eol])?;
        let statements = self.parse_block_of_statements(&[TokenKind::RBrace])?;
        Ok(Statement::If(IfStatement {
            pos,
            condition,
            positive,
            else_branch: Some(StatementsBlock { statements }),
        }))
    }

    fn parse_struct_definition(&mut self) -> Result<Statement> {
        let pos = self.curr.pos;
        self.read()?;
        let name = self.expect_current(TokenKind::Ident)?.literal;
        self.require_sequence(&[TokenKind::LBrace, TokenKind::Eol])?;
        self.read()?;
        let fields = self.parse_var_and_types(TokenKind::RBrace, TokenKind::Eol)?;
        if fields.is_empty() {
            return Err(self.parse_error("struct should contain at least 1 field"));
        }
        Ok(Statement::StructDefinition(StructDefinition {
            pos,
            name,
            fields,
        }))
    }

    fn parse_enum_definition(&mut self) -> Result<Statement> {
        let pos = self.curr.pos;
        self.read()?;
        let name = self.expect_current(TokenKind::Ident)?.literal;
        self.require_token(TokenKind::LBrace)?;
        self.read_with_eol_opt()?;

        let mut elements = Vec::new();
        while self.curr.kind != TokenKind::RBrace {
            let el = self.expect_current(TokenKind::Ident)?;
            elements.push(el.literal);
            self.read()?;
            if self.curr.kind == TokenKind::Comma {
                self.read_with_eol_opt()?;
            }
        }
        self.read()?;

        Ok(Statement::EnumDefinition(EnumDefinition {
            pos,
            name,
            elements,
        }))
    }

    fn parse_switch(&mut self) -> Result<Statement> {
        let pos = self.curr.pos;

        let scrutinee = if self.next.kind != TokenKind::LBrace {
            self.read()?;
            Some(self.parse_expression(Precedence::Lowest, &[TokenKind::LBrace])?)
        } else {
            None
        };

        self.require_sequence(&[TokenKind::LBrace, TokenKind::Eol])?;
        self.read()?;

        let mut cases = Vec::new();
        while self.curr.kind == TokenKind::Case {
            let case_pos = self.curr.pos;
            let condition = match &scrutinee {
                // with a scrutinee, `case > 10` parses as `scrutinee > 10`
                Some(scr) => {
                    self.parse_infix_chain(scr.clone(), Precedence::Lowest, &[TokenKind::Eol])?
                }
                None => {
                    self.read()?;
                    self.parse_expression(Precedence::Lowest, &[TokenKind::Eol])?
                }
            };
            self.require_token(TokenKind::Eol)?;
            let statements = self.parse_block_of_statements(&[
                TokenKind::Case,
                TokenKind::Default,
                TokenKind::RBrace,
            ])?;
            cases.push(Case {
                pos: case_pos,
                condition,
                body: StatementsBlock { statements },
            });
        }

        let mut default = None;
        if self.curr.kind == TokenKind::Default {
            self.require_token(TokenKind::Eol)?;
            let statements = self.parse_block_of_statements(&[TokenKind::RBrace])?;
            default = Some(StatementsBlock { statements });
        }

        self.expect_current(TokenKind::RBrace)?;

        Ok(Statement::Switch(Switch {
            pos,
            scrutinee,
            cases,
            default,
        }))
    }

    // ======= expressions (Pratt) =======

    fn parse_expression(
        &mut self,
        precedence: Precedence,
        terminators: &[TokenKind],
    ) -> Result<Expression> {
        self.enter_nesting()?;
        let result = self.parse_expression_inner(precedence, terminators);
        self.exit_nesting();
        result
    }

    fn parse_expression_inner(
        &mut self,
        precedence: Precedence,
        terminators: &[TokenKind],
    ) -> Result<Expression> {
        let left = self.parse_prefix(terminators)?;
        self.parse_infix_chain(left, precedence, terminators)
    }

    fn parse_prefix(&mut self, terminators: &[TokenKind]) -> Result<Expression> {
        match self.curr.kind {
            TokenKind::Minus | TokenKind::Not => self.parse_unary(terminators),
            TokenKind::NumInt => self.parse_integer(),
            TokenKind::NumFloat => self.parse_float(),
            TokenKind::True | TokenKind::False => Ok(Expression::BoolLiteral {
                pos: self.curr.pos,
                value: self.curr.kind == TokenKind::True,
            }),
            TokenKind::Ident => Ok(Expression::Ident(Ident {
                pos: self.curr.pos,
                name: self.curr.literal.clone(),
            })),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::Question => self.parse_emptier(),
            _ => Err(self.parse_error(format!(
                "no prefix parse function for '{}' found",
                self.curr.kind
            ))),
        }
    }

    /// Repeatedly apply infix parsers to `left` while the next token binds
    /// tighter than `precedence` and is not a terminator.
    fn parse_infix_chain(
        &mut self,
        mut left: Expression,
        precedence: Precedence,
        terminators: &[TokenKind],
    ) -> Result<Expression> {
        while !self.next_in(terminators) && precedence < precedence_of(self.next.kind) {
            match self.next.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::And
                | TokenKind::Or => {
                    self.read()?;
                    left = self.parse_binary(left, terminators)?;
                }
                TokenKind::LParen => {
                    self.read()?;
                    left = self.parse_function_call(left)?;
                }
                TokenKind::LBracket => {
                    self.read()?;
                    left = self.parse_index(left)?;
                }
                TokenKind::LBrace => {
                    self.read()?;
                    left = self.parse_struct_literal(left)?;
                }
                TokenKind::Dot => {
                    self.read()?;
                    left = self.parse_field_access(left)?;
                }
                TokenKind::Colon => {
                    self.read()?;
                    left = self.parse_enum_element(left)?;
                }
                other => {
                    return Err(self.parse_error(format!(
                        "unexpected next token for binary expression '{other}'"
                    )));
                }
            }
        }
        Ok(left)
    }

    fn parse_unary(&mut self, terminators: &[TokenKind]) -> Result<Expression> {
        let pos = self.curr.pos;
        let op = match self.curr.kind {
            TokenKind::Not => UnaryOp::Not,
            _ => UnaryOp::Neg,
        };
        self.read()?;
        let right = self.parse_expression(Precedence::Prefix, terminators)?;
        Ok(Expression::Unary {
            pos,
            op,
            right: Box::new(right),
        })
    }

    fn parse_integer(&mut self) -> Result<Expression> {
        let pos = self.curr.pos;
        let value = self
            .curr
            .literal
            .parse::<i64>()
            .map_err(|_| self.parse_error(format!("could not parse '{}' as integer", self.curr.literal)))?;
        Ok(Expression::IntLiteral { pos, value })
    }

    fn parse_float(&mut self) -> Result<Expression> {
        let pos = self.curr.pos;
        let value = self
            .curr
            .literal
            .parse::<f64>()
            .map_err(|_| self.parse_error(format!("could not parse '{}' as float", self.curr.literal)))?;
        Ok(Expression::FloatLiteral { pos, value })
    }

    fn parse_grouped(&mut self) -> Result<Expression> {
        self.read()?;
        let expr = self.parse_expression(Precedence::Lowest, &[TokenKind::RParen])?;
        self.read()?;
        self.expect_current(TokenKind::RParen)?;
        Ok(expr)
    }

    fn parse_binary(&mut self, left: Expression, terminators: &[TokenKind]) -> Result<Expression> {
        let pos = self.curr.pos;
        // the caller dispatched on this kind, so the lookup cannot miss
        let op = binary_op_of(self.curr.kind)
            .ok_or_else(|| self.parse_error(format!("not a binary operator: '{}'", self.curr.kind)))?;
        let precedence = precedence_of(self.curr.kind);
        self.read()?;
        let right = self.parse_expression(precedence, terminators)?;
        Ok(Expression::Binary {
            pos,
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// `fn(<type> <ident>, …) <type> { <newline> block }`
    fn parse_function_literal(&mut self) -> Result<Expression> {
        let pos = self.curr.pos;
        self.read()?;
        self.expect_current(TokenKind::LParen)?;
        self.read()?;
        let arguments = self.parse_var_and_types(TokenKind::RParen, TokenKind::Comma)?;
        self.expect_current(TokenKind::RParen)?;
        self.read()?;
        let return_type = self
            .expect_current_in(&[TokenKind::Type, TokenKind::Ident])?
            .literal;
        self.require_sequence(&[TokenKind::LBrace, TokenKind::Eol])?;
        self.read()?;
        let statements = self.parse_block_of_statements(&[TokenKind::RBrace])?;
        Ok(Expression::FunctionLiteral(FunctionLiteral {
            pos,
            arguments,
            return_type,
            body: StatementsBlock { statements },
        }))
    }

    /// A `<type> <ident>` list shared by function arguments (delimiter
    /// `,`, end `)`) and struct fields (delimiter newline, end `}`). An
    /// array type is written `[]<type>`.
    fn parse_var_and_types(
        &mut self,
        end_token: TokenKind,
        delimiter: TokenKind,
    ) -> Result<Vec<TypedName>> {
        let mut vars = Vec::new();

        while self.curr_in(&[TokenKind::LBracket, TokenKind::Type, TokenKind::Ident]) {
            let pos = self.curr.pos;
            let mut var_type = String::new();
            if self.curr.kind == TokenKind::LBracket {
                self.require_token(TokenKind::RBracket)?;
                var_type.push_str("[]");
                self.read()?;
                self.expect_current_in(&[TokenKind::Type, TokenKind::Ident])?;
            }
            var_type.push_str(&self.curr.literal);

            self.read()?;
            let name = self.expect_current(TokenKind::Ident)?.literal;
            vars.push(TypedName {
                pos,
                var_type,
                name,
            });

            if self.next.kind != end_token {
                self.read()?;
                self.expect_current(delimiter)?;
            }
            self.read_with_eol_opt()?;
        }

        Ok(vars)
    }

    fn parse_function_call(&mut self, function: Expression) -> Result<Expression> {
        let pos = self.curr.pos;
        self.read()?;
        let arguments = self.parse_expressions(&[TokenKind::RParen])?;
        Ok(Expression::Call {
            pos,
            function: Box::new(function),
            arguments,
        })
    }

    /// Comma-separated expressions up to any of `close`. Newlines are
    /// permitted after commas. Leaves the current token on the closer.
    fn parse_expressions(&mut self, close: &[TokenKind]) -> Result<Vec<Expression>> {
        let mut expressions = Vec::new();
        let mut terminators = close.to_vec();
        terminators.push(TokenKind::Comma);

        while !self.curr_in(close) {
            let expr = self.parse_expression(Precedence::Lowest, &terminators)?;
            expressions.push(expr);
            self.read()?;
            if self.curr.kind == TokenKind::Comma {
                self.read_with_eol_opt()?;
            }
        }

        Ok(expressions)
    }

    /// `[]<type>{expr, …}`
    fn parse_array_literal(&mut self) -> Result<Expression> {
        let pos = self.curr.pos;
        self.require_token(TokenKind::RBracket)?;
        self.read()?;
        let elements_type = self
            .expect_current_in(&[TokenKind::Ident, TokenKind::Type])?
            .literal;
        self.read()?;

        let mut elements = Vec::new();
        if self.curr.kind == TokenKind::LBrace {
            self.read()?;
            elements = self.parse_expressions(&[TokenKind::Comma, TokenKind::RBrace])?;
        }

        Ok(Expression::ArrayLiteral {
            pos,
            elements_type,
            elements,
        })
    }

    fn parse_index(&mut self, left: Expression) -> Result<Expression> {
        let pos = self.curr.pos;
        self.read()?;
        let index = self.parse_expression(Precedence::Index, &[TokenKind::RBracket])?;
        self.read()?;
        Ok(Expression::Index {
            pos,
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    /// `<ident>{field = expr, …}` — struct construction. Only valid on a
    /// plain identifier left-hand side.
    fn parse_struct_literal(&mut self, left: Expression) -> Result<Expression> {
        let Expression::Ident(name) = left else {
            return Err(self.parse_error("struct construction is only valid on an identifier"));
        };
        let pos = self.curr.pos;
        self.read()?;

        let mut fields = Vec::new();
        while self.curr.kind == TokenKind::Ident {
            let field_pos = self.curr.pos;
            let (field_name, value) =
                self.parse_named_assignment(&[TokenKind::Comma, TokenKind::RBrace])?;
            fields.push(FieldInit {
                pos: field_pos,
                name: field_name,
                value,
            });
            if self.curr.kind == TokenKind::Comma {
                self.read_with_eol_opt()?;
            }
        }

        Ok(Expression::StructLiteral { pos, name, fields })
    }

    fn parse_field_access(&mut self, left: Expression) -> Result<Expression> {
        let pos = self.curr.pos;
        self.read()?;
        let field_tok = self.expect_current(TokenKind::Ident)?;
        Ok(Expression::FieldAccess {
            pos,
            receiver: Box::new(left),
            field: Ident {
                pos: field_tok.pos,
                name: field_tok.literal,
            },
        })
    }

    fn parse_enum_element(&mut self, left: Expression) -> Result<Expression> {
        let pos = self.curr.pos;
        self.read()?;
        let el = self.expect_current(TokenKind::Ident)?;
        Ok(Expression::EnumElement {
            pos,
            receiver: Box::new(left),
            element: Ident {
                pos: el.pos,
                name: el.literal,
            },
        })
    }

    /// `?<type>` or `?[]<type>` — empty-sentinel constructor.
    fn parse_emptier(&mut self) -> Result<Expression> {
        let pos = self.curr.pos;
        self.read()?;
        self.expect_current_in(&[TokenKind::LBracket, TokenKind::Type, TokenKind::Ident])?;
        let mut is_array = false;
        if self.curr.kind == TokenKind::LBracket {
            self.require_token(TokenKind::RBracket)?;
            is_array = true;
            self.read()?;
            self.expect_current_in(&[TokenKind::Type, TokenKind::Ident])?;
        }
        Ok(Expression::Emptier {
            pos,
            type_name: self.curr.literal.clone(),
            is_array,
        })
    }
}
