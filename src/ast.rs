use std::rc::Rc;

/// Indented text rendering of a syntax tree.
pub mod tree;

/// The two numeric types of the typed evaluator.
///
/// The ordering is meaningful: `Integer < Float`, so widening always goes to
/// the larger of two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberType {
    /// 64-bit signed integer (`int`).
    Integer,
    /// 64-bit floating point (`float`).
    Float,
}

impl NumberType {
    /// Maps a type keyword (`int`, `float`) to its type.
    ///
    /// # Example
    /// ```
    /// use reckon::ast::NumberType;
    ///
    /// assert_eq!(NumberType::from_keyword("float"), Some(NumberType::Float));
    /// assert_eq!(NumberType::from_keyword("double"), None);
    /// ```
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "int" => Some(Self::Integer),
            "float" => Some(Self::Float),
            _ => None,
        }
    }
}

impl std::fmt::Display for NumberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "int"),
            Self::Float => write!(f, "float"),
        }
    }
}

/// A numeric literal as written in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberLiteral {
    /// An integer literal such as `42`.
    Integer(i64),
    /// A decimal literal such as `3.14` or `.5`.
    Float(f64),
}

impl NumberLiteral {
    /// The type a literal has before any context is applied.
    #[must_use]
    pub const fn natural_type(&self) -> NumberType {
        match self {
            Self::Integer(_) => NumberType::Integer,
            Self::Float(_) => NumberType::Float,
        }
    }
}

impl From<i64> for NumberLiteral {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for NumberLiteral {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// An expression node.
///
/// Every node owns its children; the tree never shares or cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: NumberLiteral,
        /// Whether the literal's type is explicitly declared. Bare literals
        /// from the parser are never fixed.
        fixed: bool,
        /// Byte offset in the source.
        pos:   usize,
    },
    /// Reference to a name.
    Identifier {
        /// The referenced name.
        name: String,
        /// Byte offset in the source.
        pos:  usize,
    },
    /// A unary operation (`-x`).
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
        /// Byte offset in the source.
        pos:     usize,
    },
    /// A left operand followed by `(operator, operand)` links.
    ///
    /// Evaluated left to right. Power chains are built right-nested by the
    /// parser, so `a ** b ** c` is `a ** (b ** c)`.
    Chain {
        /// The leftmost operand.
        first: Box<Self>,
        /// The remaining operators and operands, in source order.
        rest:  Vec<ChainLink>,
    },
    /// A call of a named function.
    Call {
        /// The function name.
        name:      String,
        /// Argument expressions in order.
        arguments: Vec<Self>,
        /// Byte offset in the source.
        pos:       usize,
    },
}

impl Expr {
    /// Gets the byte offset where the expression starts.
    ///
    /// ## Example
    /// ```
    /// use reckon::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               pos:  5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Number { pos, .. }
            | Self::Identifier { pos, .. }
            | Self::Unary { pos, .. }
            | Self::Call { pos, .. } => *pos,
            Self::Chain { first, .. } => first.position(),
        }
    }
}

/// One `(operator, operand)` step of a [`Expr::Chain`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChainLink {
    /// The operator joining the accumulated value and `operand`.
    pub op:      BinaryOperator,
    /// The right-hand operand.
    pub operand: Expr,
    /// Byte offset of the operator.
    pub pos:     usize,
}

/// A brace-delimited sequence of statements evaluated in its own frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the braces.
    pub statements: Vec<Statement>,
    /// Byte offset of the opening brace.
    pub pos:        usize,
}

/// A user-defined function.
///
/// Stored behind an `Rc` so that the defining frame and every call site
/// share one definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// Parameter names in order.
    pub params: Vec<String>,
    /// The body.
    pub body:   Block,
    /// Byte offset of the `func` keyword.
    pub pos:    usize,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `set x = e`, `int x = e` or `float x = e`.
    Assignment {
        /// The bound name.
        name:     String,
        /// The explicitly declared type, if any.
        declared: Option<NumberType>,
        /// The bound expression.
        value:    Expr,
        /// Byte offset of the statement.
        pos:      usize,
    },
    /// `func name(params) { ... }`.
    Function(Rc<FunctionDef>),
    /// `{ ... }`.
    Block(Block),
    /// `if c then s [else s]`.
    If {
        /// The condition; zero is false.
        condition:   Expr,
        /// Statement run when the condition is non-zero.
        then_branch: Box<Self>,
        /// Statement run otherwise.
        else_branch: Option<Box<Self>>,
        /// Byte offset of the `if` keyword.
        pos:         usize,
    },
    /// `print e`.
    Print {
        /// The printed expression.
        expr: Expr,
        /// Byte offset of the `print` keyword.
        pos:  usize,
    },
    /// `reset`: drops every binding of the innermost frame.
    Reset {
        /// Byte offset of the `reset` keyword.
        pos: usize,
    },
    /// An expression evaluated for its value.
    Expression(Expr),
}

/// The root of a parsed source text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in order.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Bitwise and (`&`)
    BitAnd,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Arithmetic right shift (`>>`)
    ShiftRight,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
}

impl BinaryOperator {
    /// Returns `true` for the comparison operators, which yield `1` or `0`.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Equal
                 | Self::NotEqual
                 | Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual)
    }

    /// Returns `true` for operators only defined on integers.
    #[must_use]
    pub const fn is_bitwise(self) -> bool {
        matches!(self,
                 Self::BitOr | Self::BitXor | Self::BitAnd | Self::ShiftLeft | Self::ShiftRight)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitAnd => "&",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
