use pretty_assertions::assert_eq;
use virgule::{
    error::{Error, ParseError},
    evaluate, evaluate_with,
    interpreter::{
        lexer::{Lexer, TokenKind},
        parser::state::Expected,
        symbols::Symbols,
        value::core::Number,
    },
};

fn parse_error(src: &str) -> ParseError {
    match evaluate(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("`{src}` should fail to parse, got {other:?}"),
    }
}

fn syntax(expected: Expected, found: &str, position: usize) -> ParseError {
    ParseError::Syntax { expected,
                         found: found.to_string(),
                         position }
}

#[test]
fn unknown_characters_are_positioned() {
    assert_eq!(parse_error("1+#"),
               ParseError::UnknownCharacter { character: "#".to_string(),
                                              position:  2, });
    assert_eq!(parse_error("12 $ 3"),
               ParseError::UnknownCharacter { character: "$".to_string(),
                                              position:  3, });
    assert_eq!(parse_error("1,2,3"),
               ParseError::UnknownCharacter { character: ",".to_string(),
                                              position:  3, });
}

#[test]
fn positions_count_characters_not_bytes() {
    assert_eq!(parse_error("1+é"),
               ParseError::UnknownCharacter { character: "é".to_string(),
                                              position:  2, });

    let tokens: Vec<_> = Lexer::new("é 1", Symbols::STANDARD).collect();
    let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();

    assert_eq!(positions, vec![0, 2, 3]);
    assert_eq!(tokens[1].kind, TokenKind::Number(Number::Integer(1)));
    assert_eq!(tokens[2].kind, TokenKind::Eof);

    assert_eq!(parse_error("1\u{a0}+\u{a0}x"), syntax(Expected::Operand, "x", 4));
    assert_eq!(parse_error("\u{661}"),
               ParseError::UnknownCharacter { character: "\u{661}".to_string(),
                                              position:  0, });
}

#[test]
fn first_fault_wins() {
    assert_eq!(parse_error("1 2 #"), syntax(Expected::Operator, "2", 2));
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(parse_error("(1+2"), ParseError::UnbalancedParenthesis { position: 4 });
    assert_eq!(parse_error("((1)"), ParseError::UnbalancedParenthesis { position: 4 });
    assert_eq!(parse_error("1+2)"), syntax(Expected::Operator, ")", 3));
    assert_eq!(parse_error(")"), syntax(Expected::Expression, ")", 0));
}

#[test]
fn syntax_errors_name_the_expected_category() {
    assert_eq!(parse_error(""), syntax(Expected::Expression, "FIN", 0));
    assert_eq!(parse_error("("), syntax(Expected::Expression, "FIN", 1));
    assert_eq!(parse_error("()"), syntax(Expected::Expression, ")", 1));
    assert_eq!(parse_error("*3"), syntax(Expected::Expression, "*", 0));
    assert_eq!(parse_error("- -1"), syntax(Expected::Expression, "-", 2));
    assert_eq!(parse_error("1 2"), syntax(Expected::Operator, "2", 2));
    assert_eq!(parse_error("1(2)"), syntax(Expected::Operator, "(", 1));
    assert_eq!(parse_error("1+"), syntax(Expected::Operand, "FIN", 2));
    assert_eq!(parse_error("1+*2"), syntax(Expected::Operand, "*", 2));
    assert_eq!(parse_error("2*-"), syntax(Expected::Digit, "FIN", 3));
    assert_eq!(parse_error("2*-(3)"), syntax(Expected::Digit, "(", 3));
    assert_eq!(parse_error("2*--3"), syntax(Expected::Digit, "-", 3));
}

#[test]
fn unknown_identifiers_are_syntax_errors() {
    assert_eq!(parse_error("x+1"), syntax(Expected::Expression, "x", 0));
    assert_eq!(parse_error("1+foo"), syntax(Expected::Operand, "foo", 2));
    assert_eq!(parse_error("2 pi"), syntax(Expected::Operator, "3.141592653589793", 2));
}

#[test]
fn keywords_are_resolved_but_rejected() {
    virgule::test_utils::init_test_logging();

    let symbols = Symbols::new(&[], &["LET"]);

    let err = evaluate_with("1+let", symbols).unwrap_err();
    assert_eq!(err, Error::Parse(syntax(Expected::Operand, "LET", 2)));
}

#[test]
fn rendering_matches_the_prompt() {
    virgule::test_utils::init_test_logging();

    assert_eq!(evaluate("(1+2").unwrap_err().render(3), "       ^\nErreur: \")\" manquante");
    assert_eq!(evaluate("1+2)").unwrap_err().render(3),
               "      ^\nErreur: opération attendue, \")\" trouvé");
    assert_eq!(evaluate("2*-x").unwrap_err().render(0),
               "   ^\nErreur: chiffre attendu, \"x\" trouvé");
    assert_eq!(evaluate("1/0").unwrap_err().render(3), "Erreur : division par zero");
}

#[test]
fn runtime_errors_have_no_position() {
    let err = evaluate("1/0").unwrap_err();

    assert_eq!(err.position(), None);
    assert_eq!(evaluate("1+").unwrap_err().position(), Some(2));
}
