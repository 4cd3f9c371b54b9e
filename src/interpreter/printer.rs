use std::fmt::Write;

use crate::ast::Expr;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Renders an expression tree as an indented diagnostic dump.
///
/// The first line is always `Expression`; every node follows on its own line
/// below its parent. The right operand of a binary node and the operand of a
/// unary node are drawn as the last child.
///
/// # Example
/// ```
/// use infix::interpreter::{lexer::tokenize, parser::core::parse, printer::render_tree};
///
/// let expr = parse(&tokenize("1 + -2").unwrap()).unwrap();
/// assert_eq!(render_tree(&expr),
///            "Expression\n\
///             └── BinaryExpr (+)\n    \
///                 ├── Number: 1\n    \
///                 └── UnaryExpr (-)\n        \
///                     └── Number: 2\n");
/// ```
#[must_use]
pub fn render_tree(expr: &Expr) -> String {
    let mut out = String::from("Expression\n");
    render_node(&mut out, expr, "", true);
    out
}

fn render_node(out: &mut String, expr: &Expr, prefix: &str, is_last: bool) {
    let connector = if is_last { LAST_BRANCH } else { BRANCH };
    let child_prefix = format!("{prefix}{}", if is_last { SPACE } else { PIPE });

    // Writing into a `String` cannot fail.
    match expr {
        Expr::NumberLiteral { text } => {
            let _ = writeln!(out, "{prefix}{connector}Number: {text}");
        },
        Expr::Unary { operator, operand } => {
            let _ = writeln!(out, "{prefix}{connector}UnaryExpr ({operator})");
            render_node(out, operand, &child_prefix, true);
        },
        Expr::Binary { left,
                       operator,
                       right, } => {
            let _ = writeln!(out, "{prefix}{connector}BinaryExpr ({operator})");
            render_node(out, left, &child_prefix, false);
            render_node(out, right, &child_prefix, true);
        },
    }
}
