#[cfg(test)]
mod tests {
    use crate::{
        kind::LuaTokenKind,
        lexer::{LuaDocLexer, LuaDocLexerState},
        text::SourceRange,
    };

    fn lex_all(text: &str, state: LuaDocLexerState) -> Vec<(LuaTokenKind, String)> {
        let mut lexer = LuaDocLexer::new(text, SourceRange::new(0, text.len()));
        lexer.state = state;
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.kind == LuaTokenKind::TkEof {
                break;
            }
            if token.kind != LuaTokenKind::TkWhitespace {
                let text = &text[token.range.start_offset..token.range.end_offset()];
                tokens.push((token.kind, text.to_string()));
            }
        }
        tokens
    }

    #[test]
    fn test_doc_start() {
        let text = "  --- @param";
        let mut lexer = LuaDocLexer::new(text, SourceRange::new(0, 12));
        assert_eq!(lexer.lex(), LuaTokenKind::TkWhitespace);
        assert_eq!(lexer.lex(), LuaTokenKind::TkDocStart);
        let range = lexer.current_token_range();
        assert_eq!(&text[range.start_offset..range.end_offset()], "--- @");
        lexer.state = LuaDocLexerState::Tag;
        assert_eq!(lexer.lex(), LuaTokenKind::TkTagParam);
        assert_eq!(lexer.lex(), LuaTokenKind::TkEof);
    }

    #[test]
    fn test_normal_comment_start() {
        let mut lexer = LuaDocLexer::new("-- hello", SourceRange::new(0, 8));
        assert_eq!(lexer.lex(), LuaTokenKind::TkNormalStart);
        let mut lexer = LuaDocLexer::new("---hello", SourceRange::new(0, 8));
        assert_eq!(lexer.lex(), LuaTokenKind::TkNormalStart);
        let mut lexer = LuaDocLexer::new("local a", SourceRange::new(0, 7));
        assert_eq!(lexer.lex(), LuaTokenKind::TkDocTrivia);
    }

    #[test]
    fn test_tag_keywords() {
        let tokens = lex_all("type alias class overload field param return generic vararg see", LuaDocLexerState::Tag);
        let kinds: Vec<_> = tokens.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(
            kinds,
            vec![
                LuaTokenKind::TkTagType,
                LuaTokenKind::TkTagAlias,
                LuaTokenKind::TkTagClass,
                LuaTokenKind::TkTagOverload,
                LuaTokenKind::TkTagField,
                LuaTokenKind::TkTagParam,
                LuaTokenKind::TkTagReturn,
                LuaTokenKind::TkTagGeneric,
                LuaTokenKind::TkTagVararg,
                LuaTokenKind::TkTagOther,
            ]
        );
    }

    #[test]
    fn test_normal_tokens() {
        let tokens = lex_all(
            "fun(a?: string, ...: integer): table<string, A.B[]>|nil",
            LuaDocLexerState::Normal,
        );
        let expected = vec![
            (LuaTokenKind::TkName, "fun"),
            (LuaTokenKind::TkLeftParen, "("),
            (LuaTokenKind::TkName, "a"),
            (LuaTokenKind::TkDocQuestion, "?"),
            (LuaTokenKind::TkColon, ":"),
            (LuaTokenKind::TkName, "string"),
            (LuaTokenKind::TkComma, ","),
            (LuaTokenKind::TkDots, "..."),
            (LuaTokenKind::TkColon, ":"),
            (LuaTokenKind::TkName, "integer"),
            (LuaTokenKind::TkRightParen, ")"),
            (LuaTokenKind::TkColon, ":"),
            (LuaTokenKind::TkName, "table"),
            (LuaTokenKind::TkLt, "<"),
            (LuaTokenKind::TkName, "string"),
            (LuaTokenKind::TkComma, ","),
            (LuaTokenKind::TkName, "A.B"),
            (LuaTokenKind::TkLeftBracket, "["),
            (LuaTokenKind::TkRightBracket, "]"),
            (LuaTokenKind::TkGt, ">"),
            (LuaTokenKind::TkDocOr, "|"),
            (LuaTokenKind::TkName, "nil"),
        ];
        let expected: Vec<_> = expected
            .into_iter()
            .map(|(kind, text)| (kind, text.to_string()))
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_literals_and_detail() {
        let tokens = lex_all(r#""left"|'right'|10|true|false @ rest"#, LuaDocLexerState::Normal);
        let kinds: Vec<_> = tokens.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(
            kinds,
            vec![
                LuaTokenKind::TkString,
                LuaTokenKind::TkDocOr,
                LuaTokenKind::TkString,
                LuaTokenKind::TkDocOr,
                LuaTokenKind::TkInt,
                LuaTokenKind::TkDocOr,
                LuaTokenKind::TkTrue,
                LuaTokenKind::TkDocOr,
                LuaTokenKind::TkFalse,
                LuaTokenKind::TkDocDetail,
            ]
        );
        assert_eq!(tokens.last().unwrap().1, "@ rest");
    }

    #[test]
    fn test_negative_integer() {
        let tokens = lex_all("-1|2 -- note", LuaDocLexerState::Normal);
        assert_eq!(tokens[0], (LuaTokenKind::TkInt, "-1".to_string()));
        assert_eq!(tokens[1].0, LuaTokenKind::TkDocOr);
        assert_eq!(tokens[2], (LuaTokenKind::TkInt, "2".to_string()));
        assert_eq!(tokens[3], (LuaTokenKind::TkDocTrivia, "--".to_string()));
    }

    #[test]
    fn test_name_stops_at_comment() {
        let tokens = lex_all("my-type--comment", LuaDocLexerState::Normal);
        assert_eq!(tokens[0], (LuaTokenKind::TkName, "my-type".to_string()));
        assert_eq!(tokens[1], (LuaTokenKind::TkDocTrivia, "--".to_string()));

        let tokens = lex_all("T...", LuaDocLexerState::Normal);
        assert_eq!(tokens[0], (LuaTokenKind::TkName, "T".to_string()));
        assert_eq!(tokens[1], (LuaTokenKind::TkDots, "...".to_string()));
    }

    #[test]
    fn test_field_start_visibility() {
        let tokens = lex_all("private x", LuaDocLexerState::FieldStart);
        assert_eq!(tokens[0].0, LuaTokenKind::TkDocVisibility);
        assert_eq!(tokens[1].0, LuaTokenKind::TkName);

        let tokens = lex_all("package", LuaDocLexerState::FieldStart);
        assert_eq!(tokens[0].0, LuaTokenKind::TkDocVisibility);

        let tokens = lex_all("private", LuaDocLexerState::Normal);
        assert_eq!(tokens[0].0, LuaTokenKind::TkName);
    }

    #[test]
    fn test_skip_to_end() {
        let mut lexer = LuaDocLexer::new("a b c", SourceRange::new(0, 5));
        lexer.state = LuaDocLexerState::Normal;
        assert_eq!(lexer.lex(), LuaTokenKind::TkName);
        lexer.skip_to_end();
        assert_eq!(lexer.lex(), LuaTokenKind::TkEof);
    }
}
