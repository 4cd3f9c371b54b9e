/// The evaluator module walks the syntax tree and computes its value.
///
/// The evaluator traverses the AST post-order, applies the arithmetic
/// operators with checked integer arithmetic, and reports failures such as
/// division by zero or overflow.
///
/// # Responsibilities
/// - Converts number literals to integers.
/// - Applies negation and the four binary operators.
/// - Reports runtime errors instead of panicking.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw expression text and produces a sequence of tokens,
/// each carrying its exact source text and kind. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into operator, parenthesis and
///   number tokens.
/// - Skips spaces and tabs.
/// - Reports the first unrecognized character with its position.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent over a fixed grammar with one token of
/// lookahead. Precedence comes from the layering of the grammar rules and
/// left-associativity from folding operands in a loop.
///
/// # Responsibilities
/// - Converts tokens into a single expression tree.
/// - Validates the grammar, reporting errors with token positions.
/// - Rejects empty input and trailing tokens.
pub mod parser;
/// Diagnostic rendering of syntax trees.
///
/// Produces a box-drawing dump of an expression tree, used by the command
/// line front end to show how an expression was grouped.
pub mod printer;
