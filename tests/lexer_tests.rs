// Integration tests for the FORTLET scanner.

use fortlet::{tokenize, TokenKind};

#[test]
fn scans_a_minimal_program() {
    let source = "PROGRAM P\n INTEGER X\n X = 5\n END";

    let tokens = tokenize(source).expect("scanning failed");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Program,
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::End,
            TokenKind::Eof,
        ]
    );

    assert_eq!(tokens[1].lexeme, "P");
    assert_eq!(tokens[3].lexeme, "X");
    assert_eq!(tokens[6].lexeme, "5");

    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 2, 2, 3, 3, 3, 4, 4]);
}

#[test]
fn sequence_ends_with_exactly_one_eof() {
    for source in ["", "PROGRAM P\n END", "X = 5", "-- only a comment"] {
        let tokens = tokenize(source).expect("scanning failed");

        assert_eq!(tokens.last().expect("sequence is empty").kind, TokenKind::Eof);
        let eof_count = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        assert_eq!(eof_count, 1, "source {:?}", source);
    }
}

#[test]
fn line_numbers_never_decrease() {
    let source = "PROGRAM P\n\n INTEGER X\n -- note\n X = 5\n\n END";
    let tokens = tokenize(source).expect("scanning failed");

    for pair in tokens.windows(2) {
        assert!(pair[0].line <= pair[1].line);
    }
}

#[test]
fn keywords_fold_case() {
    for source in ["PROGRAM", "Program", "program", "pRoGrAm"] {
        let tokens = tokenize(source).expect("scanning failed");

        assert_eq!(tokens[0].kind, TokenKind::Program);
        assert_eq!(tokens[0].lexeme, "PROGRAM");
    }
}

#[test]
fn keyword_prefix_is_a_single_identifier() {
    let tokens = tokenize("PROGRAMX").expect("scanning failed");

    assert_eq!(tokens.len(), 2); // the name plus EOF
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "PROGRAMX");
}

#[test]
fn comment_line_shifts_following_tokens_by_one_line() {
    let without = tokenize("PROGRAM P\n INTEGER X\n END").expect("scanning failed");
    let with = tokenize("PROGRAM P\n -- a note\n INTEGER X\n END").expect("scanning failed");

    assert_eq!(without.len(), with.len());

    for (before, after) in without.iter().zip(with.iter()) {
        assert_eq!(before.kind, after.kind);
        assert_eq!(before.lexeme, after.lexeme);

        if before.line >= 2 {
            assert_eq!(after.line, before.line + 1);
        } else {
            assert_eq!(after.line, before.line);
        }
    }
}

#[test]
fn stray_character_reports_line_and_character() {
    let source = "PROGRAM P\n INTEGER B\n B = @\n END";

    let error = tokenize(source).expect_err("scanning should fail");

    assert_eq!(error.line(), 3);
    assert_eq!(error.character, '@');
    assert_eq!(error.span.column, 5);
}

#[test]
fn identifier_must_start_with_a_letter() {
    let error = tokenize("_X").expect_err("scanning should fail");

    assert_eq!(error.character, '_');
    assert_eq!(error.line(), 1);
}

#[test]
fn all_operator_characters_share_one_kind() {
    let tokens = tokenize("+ - * / ( )").expect("scanning failed");

    let operators: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| t.lexeme.as_str())
        .collect();

    assert_eq!(operators, vec!["+", "-", "*", "/", "(", ")"]);
}

#[test]
fn numbers_may_carry_a_decimal_part() {
    let tokens = tokenize("X = 45.67").expect("scanning failed");

    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].lexeme, "45.67");

    // A trailing decimal point with no fractional digits is still one number.
    let tokens = tokenize("5.").expect("scanning failed");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "5.");
}

#[test]
fn comments_and_whitespace_never_materialize() {
    let tokens = tokenize("  -- nothing but a comment\n\t \n").expect("scanning failed");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].line, 3);
}
