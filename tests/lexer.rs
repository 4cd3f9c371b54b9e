use infix::{
    error::LexError,
    interpreter::lexer::{Token, TokenKind, tokenize},
};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"))
                 .iter()
                 .map(Token::kind)
                 .collect()
}

fn assert_unrecognized(src: &str, position: usize, character: char) {
    match tokenize(src) {
        Err(LexError::UnrecognizedCharacter { position: p,
                                              character: c, }) => {
            assert_eq!((p, c), (position, character), "wrong error for {src:?}");
        },
        Ok(tokens) => panic!("{src:?} tokenized to {tokens:?} but was expected to fail"),
    }
}

#[test]
fn single_character_tokens() {
    assert_eq!(kinds("+-*/()"),
               vec![TokenKind::Plus,
                    TokenKind::Minus,
                    TokenKind::Star,
                    TokenKind::Slash,
                    TokenKind::LParen,
                    TokenKind::RParen]);
}

#[test]
fn digit_runs_are_one_number_token() {
    let tokens = tokenize("123").unwrap();
    assert_eq!(tokens, vec![Token::new("123", TokenKind::Number)]);

    let tokens = tokenize("12+345").unwrap();
    assert_eq!(tokens,
               vec![Token::new("12", TokenKind::Number),
                    Token::new("+", TokenKind::Plus),
                    Token::new("345", TokenKind::Number)]);
}

#[test]
fn leading_zeros_are_kept_verbatim() {
    let tokens = tokenize("007").unwrap();
    assert_eq!(tokens[0].literal(), "007");

    let tokens = tokenize("000").unwrap();
    assert_eq!(tokens[0].literal(), "000");
}

#[test]
fn empty_and_blank_input_yield_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   ").unwrap().is_empty());
    assert!(tokenize("\t \t").unwrap().is_empty());
}

#[test]
fn whitespace_does_not_change_tokens() {
    let expected = tokenize("1+2").unwrap();
    assert_eq!(tokenize("1 + 2").unwrap(), expected);
    assert_eq!(tokenize(" 1+2 ").unwrap(), expected);
    assert_eq!(tokenize("\t1\t+ 2").unwrap(), expected);
}

#[test]
fn whitespace_separates_numbers() {
    assert_eq!(tokenize("1 2").unwrap(),
               vec![Token::new("1", TokenKind::Number), Token::new("2", TokenKind::Number)]);
}

#[test]
fn unary_minus_is_a_separate_token() {
    assert_eq!(tokenize("--5").unwrap(),
               vec![Token::new("-", TokenKind::Minus),
                    Token::new("-", TokenKind::Minus),
                    Token::new("5", TokenKind::Number)]);
}

#[test]
fn unrecognized_characters_are_rejected_with_position() {
    assert_unrecognized("3.14", 1, '.');
    assert_unrecognized("2^3", 1, '^');
    assert_unrecognized("x=5", 0, 'x');
    assert_unrecognized("1 + 2 % 3", 6, '%');
    assert_unrecognized("[1]", 0, '[');
    assert_unrecognized("4 @", 2, '@');
}

#[test]
fn newlines_are_not_whitespace() {
    assert_unrecognized("1\n+2", 1, '\n');
}

#[test]
fn non_ascii_characters_are_rejected() {
    assert_unrecognized("1 × 2", 2, '×');
}

#[test]
fn error_message_names_character_and_position() {
    let err = tokenize("2^3").unwrap_err();
    assert_eq!(err.to_string(), "unrecognized character '^' at position 1");
    assert_eq!(err.position(), 1);
}
