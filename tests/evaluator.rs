use infix::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::core::evaluate,
        lexer::{Token, TokenKind, tokenize},
        parser::core::parse,
    },
};

fn eval_src(src: &str) -> Result<i64, EvalError> {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"));
    let expr = parse(&tokens).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    evaluate(&expr)
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval_src("1+2"), Ok(3));
    assert_eq!(eval_src("8-5"), Ok(3));
    assert_eq!(eval_src("7*9"), Ok(63));
    assert_eq!(eval_src("10/2"), Ok(5));
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(eval_src("1-2-3"), Ok(-4));
    assert_eq!(eval_src("1+2*3"), Ok(7));
    assert_eq!(eval_src("6-4/2"), Ok(4));
    assert_eq!(eval_src("(1+2)*3"), Ok(9));
    assert_eq!(eval_src("100/10/5"), Ok(2));
}

#[test]
fn unary_minus() {
    assert_eq!(eval_src("--5"), Ok(5));
    assert_eq!(eval_src("---5"), Ok(-5));
    assert_eq!(eval_src("-(2+3)*2"), Ok(-10));
    assert_eq!(eval_src("3--3"), Ok(6));
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(eval_src("7/2"), Ok(3));
    assert_eq!(eval_src("-7/2"), Ok(-3));
    assert_eq!(eval_src("7/-2"), Ok(-3));
    assert_eq!(eval_src("1/3"), Ok(0));
}

#[test]
fn leading_zeros() {
    assert_eq!(eval_src("007+000"), Ok(7));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(eval_src("5/0"), Err(EvalError::DivisionByZero));
    assert_eq!(eval_src("1/(2-2)"), Err(EvalError::DivisionByZero));
    assert_eq!(eval_src("0/0"), Err(EvalError::DivisionByZero));
}

#[test]
fn errors_propagate_through_unary_minus() {
    assert_eq!(eval_src("-(1/0)"), Err(EvalError::DivisionByZero));
    assert_eq!(eval_src("--99999999999999999999"),
               Err(EvalError::InvalidNumber { literal: "99999999999999999999".to_string() }));
}

#[test]
fn overflow_is_an_error() {
    assert_eq!(eval_src("9223372036854775807"), Ok(i64::MAX));
    assert_eq!(eval_src("-9223372036854775807-1"), Ok(i64::MIN));
    assert_eq!(eval_src("9223372036854775807+1"), Err(EvalError::Overflow));
    assert_eq!(eval_src("-9223372036854775807-2"), Err(EvalError::Overflow));
    assert_eq!(eval_src("4611686018427387904*2"), Err(EvalError::Overflow));
    assert_eq!(eval_src("(-9223372036854775807-1)/-1"), Err(EvalError::Overflow));
    assert_eq!(eval_src("-(-9223372036854775807-1)"), Err(EvalError::Overflow));
}

#[test]
fn literal_out_of_range() {
    assert_eq!(eval_src("9223372036854775808"),
               Err(EvalError::InvalidNumber { literal: "9223372036854775808".to_string() }));
}

#[test]
fn left_operand_error_wins() {
    assert_eq!(eval_src("1/0 + 99999999999999999999"), Err(EvalError::DivisionByZero));
    assert!(matches!(eval_src("99999999999999999999 + 1/0"),
                     Err(EvalError::InvalidNumber { .. })));
}

#[test]
fn invalid_operators_in_hand_built_trees() {
    let expr = Expr::binary(Expr::number("1"), Token::new("(", TokenKind::LParen), Expr::number("2"));
    assert_eq!(evaluate(&expr),
               Err(EvalError::InvalidOperator { operator: "(".to_string() }));

    let expr = Expr::unary(Token::new("*", TokenKind::Star), Expr::number("2"));
    assert_eq!(evaluate(&expr),
               Err(EvalError::InvalidOperator { operator: "*".to_string() }));
}

#[test]
fn invalid_literal_in_hand_built_tree() {
    let expr = Expr::number("12a");
    assert_eq!(evaluate(&expr),
               Err(EvalError::InvalidNumber { literal: "12a".to_string() }));
}
