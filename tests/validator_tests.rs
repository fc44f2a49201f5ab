// Integration tests for the FORTLET recursive-descent acceptor.

use fortlet::{check, tokenize, validate, CheckError, Expected, TokenKind};

fn validate_source(source: &str) -> Result<(), fortlet::SyntaxError> {
    let tokens = tokenize(source).expect("scanning failed");
    validate(tokens)
}

#[test]
fn accepts_a_minimal_program() {
    assert!(validate_source("PROGRAM P\n INTEGER X\n X = 5\n END").is_ok());
}

#[test]
fn accepts_a_program_with_every_statement_form() {
    let source = "\
PROGRAM CALC
  -- declarations
  INTEGER VAR1
  REAL TOTAL

  -- assignments
  VAR1 = 100
  TOTAL = VAR1

  -- conditional
  IF (VAR1) THEN
    PRINT *, TOTAL
  END IF

END
";

    assert!(validate_source(source).is_ok());
}

#[test]
fn accepts_an_empty_statement_list() {
    assert!(validate_source("PROGRAM P\n END").is_ok());
}

#[test]
fn accepts_lowercase_source() {
    assert!(check("program p\n integer x\n x = 1\n end").is_ok());
}

#[test]
fn missing_then_is_reported_at_the_next_token() {
    let source = "PROGRAM P\n INTEGER A\n IF (A)\n A = 1\n END IF\n END";

    let error = validate_source(source).expect_err("validation should fail");

    assert_eq!(error.expected, Expected::Kind(TokenKind::Then));
    assert_eq!(error.found_kind, TokenKind::Identifier);
    assert_eq!(error.found_lexeme, "A");
    assert_eq!(error.line, 4);
    assert!(error.help.is_some());
}

#[test]
fn nested_if_consumes_its_own_end_if() {
    let source = "PROGRAM P\n INTEGER A\n IF (A) THEN\n PRINT *, A\n END IF\n END";

    assert!(validate_source(source).is_ok());
}

#[test]
fn if_body_is_exactly_one_statement() {
    let source = "PROGRAM P\n INTEGER A\n IF (A) THEN\n A = 1\n A = 2\n END IF\n END";

    let error = validate_source(source).expect_err("validation should fail");

    assert_eq!(error.expected, Expected::Kind(TokenKind::End));
    assert_eq!(error.found_kind, TokenKind::Identifier);
    assert_eq!(error.line, 5);
}

#[test]
fn statement_dispatch_rejects_unexpected_openers() {
    let error = validate_source("PROGRAM P\n THEN\n END").expect_err("validation should fail");

    assert_eq!(error.expected, Expected::Statement);
    assert_eq!(error.found_kind, TokenKind::Then);
    assert_eq!(error.found_lexeme, "THEN");
    assert_eq!(error.line, 2);
}

#[test]
fn missing_end_is_reported_against_the_exhausted_input() {
    let error = validate_source("PROGRAM P").expect_err("validation should fail");

    assert_eq!(error.expected, Expected::Kind(TokenKind::End));
    assert_eq!(error.found_kind, TokenKind::Eof);
    assert_eq!(error.line, 1);
}

#[test]
fn trailing_tokens_after_the_closing_end_are_rejected() {
    let error = validate_source("PROGRAM P\n END\n X = 1").expect_err("validation should fail");

    assert_eq!(error.expected, Expected::Kind(TokenKind::Eof));
    assert_eq!(error.found_kind, TokenKind::Identifier);
    assert_eq!(error.line, 3);
}

#[test]
fn print_accepts_any_operator_where_the_star_belongs() {
    // The grammar matches '*' as the OPERATOR kind without looking at the
    // character, so this structurally odd program is accepted.
    assert!(validate_source("PROGRAM P\n INTEGER X\n PRINT /, X\n END").is_ok());
}

#[test]
fn assignment_takes_a_number_or_a_name_on_the_right() {
    assert!(validate_source("PROGRAM P\n INTEGER X\n INTEGER Y\n X = Y\n END").is_ok());
    assert!(validate_source("PROGRAM P\n INTEGER X\n X = 3.5\n END").is_ok());

    let error = validate_source("PROGRAM P\n INTEGER X\n X = +\n END")
        .expect_err("validation should fail");

    assert_eq!(error.expected, Expected::Kind(TokenKind::Identifier));
    assert_eq!(error.found_kind, TokenKind::Operator);
}

#[test]
fn an_empty_token_sequence_is_rejected() {
    let error = validate(Vec::new()).expect_err("validation should fail");

    assert_eq!(error.expected, Expected::Kind(TokenKind::Program));
    assert_eq!(error.found_kind, TokenKind::Eof);
}

#[test]
fn lexical_failure_short_circuits_the_pipeline() {
    let source = "PROGRAM P\n INTEGER B\n B = @\n END";

    match check(source) {
        Err(CheckError::Lexical(error)) => {
            assert_eq!(error.line(), 3);
            assert_eq!(error.character, '@');
        }
        other => panic!("expected a lexical error, got {:?}", other),
    }
}

#[test]
fn check_returns_the_token_trace_on_success() {
    let tokens = check("PROGRAM P\n END").expect("check failed");

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::Program);
    assert_eq!(tokens.last().expect("sequence is empty").kind, TokenKind::Eof);
}
