//! Edge case tests for front-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, ScanState, Scanner, ScannerConfig, Token, TokenKind};
    use front_util::{DiagnosticCode, Handler};

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        let mut scanner = Scanner::from_text(source, &handler);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token();
            if token.is_end() {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    fn ident(s: &str) -> Token {
        Token::new(TokenKind::Identifier, s)
    }

    fn int(s: &str) -> Token {
        Token::new(TokenKind::IntegerLiteral, s)
    }

    // ==================== BOUNDARIES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_only_whitespace() {
        assert!(lex_all(" \t\r\n\x0B\x0C ").is_empty());
    }

    #[test]
    fn test_edge_single_letter() {
        assert_eq!(lex_all("x"), vec![ident("x")]);
    }

    #[test]
    fn test_edge_single_digit() {
        assert_eq!(lex_all("0"), vec![int("0")]);
    }

    #[test]
    fn test_edge_identifier_then_digits() {
        assert_eq!(lex_all("x1"), vec![ident("x1")]);
    }

    #[test]
    fn test_edge_digit_then_letter() {
        assert_eq!(lex_all("1x"), vec![int("1"), ident("x")]);
    }

    #[test]
    fn test_edge_alternating_runs() {
        assert_eq!(lex_all("12ab34"), vec![int("12"), ident("ab34")]);
    }

    #[test]
    fn test_edge_adjacent_operators() {
        let t = lex_all("((-a))");
        assert_eq!(t.len(), 6);
        assert_eq!(t[2], Token::new(TokenKind::Minus, "-"));
    }

    #[test]
    fn test_edge_trailing_whitespace() {
        assert_eq!(lex_all("a   \n\n"), vec![ident("a")]);
    }

    // ==================== LEXEME CAPACITY ====================

    #[test]
    fn test_edge_exact_capacity_no_diagnostic() {
        let handler = Handler::new();
        let name = "a".repeat(99);
        let tokens = tokenize(&name, &handler);
        assert_eq!(tokens[0], ident(&name));
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_edge_one_past_capacity() {
        let handler = Handler::new();
        let tokens = tokenize(&"b".repeat(100), &handler);
        assert_eq!(tokens[0].lexeme.len(), 99);
        assert_eq!(tokens.len(), 2);
        assert_eq!(handler.count_code(DiagnosticCode::E_LEXEME_TOO_LONG), 1);
        assert_eq!(
            handler.diagnostics()[0].notes,
            vec!["lexeme capacity is 99 characters; 1 dropped"]
        );
    }

    #[test]
    fn test_edge_long_number_truncated() {
        let handler = Handler::new();
        let tokens = tokenize(&format!("{}+", "7".repeat(150)), &handler);
        assert_eq!(tokens[0], int(&"7".repeat(99)));
        assert_eq!(tokens[1].kind, TokenKind::Plus);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_edge_each_long_token_reported() {
        let handler = Handler::new();
        let config = ScannerConfig {
            lexeme_capacity: 2,
            ..ScannerConfig::default()
        };
        let tokens: Vec<Token> =
            Scanner::with_config("abc 1234 xy".as_bytes(), &handler, config).collect();
        assert_eq!(tokens[0], ident("ab"));
        assert_eq!(tokens[1], int("12"));
        assert_eq!(tokens[2], ident("xy"));
        assert_eq!(handler.count_code(DiagnosticCode::E_LEXEME_TOO_LONG), 2);
    }

    #[test]
    fn test_edge_capacity_one() {
        let handler = Handler::new();
        let config = ScannerConfig {
            lexeme_capacity: 1,
            ..ScannerConfig::default()
        };
        let tokens: Vec<Token> =
            Scanner::with_config("+ ab".as_bytes(), &handler, config).collect();
        assert_eq!(tokens[0], Token::new(TokenKind::Plus, "+"));
        assert_eq!(tokens[1], ident("a"));
    }

    // ==================== UNRECOGNIZED ====================

    #[test]
    fn test_edge_assign_is_unrecognized() {
        let t = lex_all("x=1");
        assert_eq!(t[1], Token::new(TokenKind::Unrecognized, "="));
        assert_eq!(t[2], int("1"));
    }

    #[test]
    fn test_edge_underscore_is_unrecognized() {
        let t = lex_all("_a");
        assert_eq!(t[0].kind, TokenKind::Unrecognized);
        assert_eq!(t[1], ident("a"));
    }

    #[test]
    fn test_edge_non_ascii_bytes() {
        let handler = Handler::new();
        let tokens = tokenize("é", &handler);
        // two UTF-8 bytes, one token each
        assert_eq!(tokens.len(), 3);
        assert!(tokens[..2].iter().all(|t| t.kind == TokenKind::Unrecognized));
        assert_eq!(handler.count_code(DiagnosticCode::E_UNEXPECTED_CHAR), 2);
    }

    #[test]
    fn test_edge_nul_byte() {
        let t = lex_all("a\0b");
        assert_eq!(t, vec![ident("a"), Token::new(TokenKind::Unrecognized, "\0"), ident("b")]);
    }

    // ==================== TERMINATION ====================

    #[test]
    fn test_edge_end_repeats_forever() {
        let handler = Handler::new();
        let mut scanner = Scanner::from_text("", &handler);
        for _ in 0..10 {
            assert_eq!(scanner.next_token(), Token::end_of_input());
        }
        assert_eq!(scanner.state(), ScanState::AtEnd);
    }

    #[test]
    fn test_edge_lookahead_position_after_token() {
        let handler = Handler::new();
        let mut scanner = Scanner::from_text("ab\n  cd", &handler);
        scanner.next_token();
        assert_eq!((scanner.line(), scanner.column()), (1, 3));
        scanner.next_token();
        assert_eq!((scanner.line(), scanner.column()), (2, 5));
    }
}
