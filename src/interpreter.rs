/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens one at a time,
/// each classified by an ordered table of regular-expression rules. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with kind, text and byte offset.
/// - Resolves overlapping rules by declaration order.
/// - Reports lexical errors for unmatchable input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with one token of lookahead and
/// constructs an AST that represents the structure of statements and
/// expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Encodes operator precedence and associativity.
/// - Reports the expected and actual token on the first syntax error.
pub mod parser;
/// Scoped name bindings.
///
/// A stack of frames mapping names to numbers or function definitions, with
/// lookups from the innermost frame outward.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// manages frames and function calls, and emits printed values to a sink.
/// It is generic over the numeric value type.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, blocks and conditionals.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The value module defines the runtime numeric types.
///
/// Integers for the plain calculator, and integer/float numbers with a fixed
/// flag for the typed calculator, together with the inference rules that
/// decide the type of each operation.
///
/// # Responsibilities
/// - Defines the `Numeric` trait the evaluator is generic over.
/// - Implements checked integer and float arithmetic.
/// - Provides safe promotion between numeric types (integer to float).
pub mod value;
