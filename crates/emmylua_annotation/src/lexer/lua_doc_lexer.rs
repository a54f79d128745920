use crate::{
    kind::LuaTokenKind,
    text::{Reader, SourceRange},
};

use super::{LuaTokenData, is_name_continue, is_name_start};

/// Lexer over a single annotation line.
///
/// The parser drives the state: `Init` reads the `---@` prefix, `Tag` reads
/// the keyword and the remaining states read the tag body.
#[derive(Debug, Clone)]
pub struct LuaDocLexer<'a> {
    pub state: LuaDocLexerState,
    reader: Reader<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuaDocLexerState {
    Init,
    Tag,
    Normal,
    FieldStart,
}

impl<'a> LuaDocLexer<'a> {
    pub fn new(origin_text: &'a str, line_range: SourceRange) -> LuaDocLexer<'a> {
        let text = &origin_text[line_range.start_offset..line_range.end_offset()];
        LuaDocLexer {
            state: LuaDocLexerState::Init,
            reader: Reader::new_with_range(text, line_range),
        }
    }

    pub fn next_token(&mut self) -> LuaTokenData {
        let kind = self.lex();
        LuaTokenData::new(kind, self.current_token_range())
    }

    pub fn lex(&mut self) -> LuaTokenKind {
        self.reader.reset_buff();

        if self.reader.is_eof() {
            return LuaTokenKind::TkEof;
        }

        match self.state {
            LuaDocLexerState::Init => self.lex_init(),
            LuaDocLexerState::Tag => self.lex_tag(),
            LuaDocLexerState::Normal => self.lex_normal(),
            LuaDocLexerState::FieldStart => self.lex_field_start(),
        }
    }

    pub fn current_token_range(&self) -> SourceRange {
        self.reader.current_range()
    }

    /// Consumes everything left on the line without producing tokens.
    pub fn skip_to_end(&mut self) {
        self.reader.reset_buff();
        self.reader.eat_till_end();
        self.reader.reset_buff();
    }

    fn lex_init(&mut self) -> LuaTokenKind {
        let reader = &mut self.reader;
        match reader.current_char() {
            ch if is_doc_whitespace(ch) => {
                reader.eat_while(is_doc_whitespace);
                LuaTokenKind::TkWhitespace
            }
            '-' => {
                let count = reader.consume_char_n_times('-', 3);
                match count {
                    3 => {
                        reader.eat_while(is_doc_whitespace);
                        match reader.current_char() {
                            '@' => {
                                reader.bump();
                                LuaTokenKind::TkDocStart
                            }
                            _ => LuaTokenKind::TkNormalStart,
                        }
                    }
                    2 => LuaTokenKind::TkNormalStart,
                    _ => {
                        reader.eat_till_end();
                        LuaTokenKind::TkDocTrivia
                    }
                }
            }
            _ => {
                reader.eat_till_end();
                LuaTokenKind::TkDocTrivia
            }
        }
    }

    fn lex_tag(&mut self) -> LuaTokenKind {
        let reader = &mut self.reader;
        match reader.current_char() {
            ch if is_doc_whitespace(ch) => {
                reader.eat_while(is_doc_whitespace);
                LuaTokenKind::TkWhitespace
            }
            ch if is_name_start(ch) => {
                reader.bump();
                reader.eat_while(is_name_continue);
                to_tag(reader.current_text())
            }
            _ => {
                reader.eat_till_end();
                LuaTokenKind::TkDocTrivia
            }
        }
    }

    fn lex_normal(&mut self) -> LuaTokenKind {
        let reader = &mut self.reader;
        match reader.current_char() {
            ch if is_doc_whitespace(ch) => {
                reader.eat_while(is_doc_whitespace);
                LuaTokenKind::TkWhitespace
            }
            ':' => {
                reader.bump();
                LuaTokenKind::TkColon
            }
            '.' => {
                reader.bump();
                if reader.current_char() == '.' && reader.next_char() == '.' {
                    reader.bump();
                    reader.bump();
                    LuaTokenKind::TkDots
                } else {
                    LuaTokenKind::TkDot
                }
            }
            ',' => {
                reader.bump();
                LuaTokenKind::TkComma
            }
            '(' => {
                reader.bump();
                LuaTokenKind::TkLeftParen
            }
            ')' => {
                reader.bump();
                LuaTokenKind::TkRightParen
            }
            '[' => {
                reader.bump();
                LuaTokenKind::TkLeftBracket
            }
            ']' => {
                reader.bump();
                LuaTokenKind::TkRightBracket
            }
            '{' => {
                reader.bump();
                LuaTokenKind::TkLeftBrace
            }
            '}' => {
                reader.bump();
                LuaTokenKind::TkRightBrace
            }
            '<' => {
                reader.bump();
                LuaTokenKind::TkLt
            }
            '>' => {
                reader.bump();
                LuaTokenKind::TkGt
            }
            '|' => {
                reader.bump();
                LuaTokenKind::TkDocOr
            }
            '&' => {
                reader.bump();
                LuaTokenKind::TkDocAnd
            }
            '?' => {
                reader.bump();
                LuaTokenKind::TkDocQuestion
            }
            // `-1` is a literal, `-- text` starts the trailing comment
            '-' if reader.next_char().is_ascii_digit() => {
                reader.bump();
                reader.eat_while(|ch| ch.is_ascii_digit());
                LuaTokenKind::TkInt
            }
            '-' => {
                reader.eat_when('-');
                LuaTokenKind::TkDocTrivia
            }
            '#' | '@' => {
                reader.eat_till_end();
                LuaTokenKind::TkDocDetail
            }
            ch if ch.is_ascii_digit() => {
                reader.eat_while(|ch| ch.is_ascii_digit());
                LuaTokenKind::TkInt
            }
            ch if ch == '"' || ch == '\'' => {
                reader.bump();
                reader.eat_while(|c| c != ch);
                if reader.current_char() == ch {
                    reader.bump();
                }

                LuaTokenKind::TkString
            }
            ch if is_name_start(ch) => {
                let text = read_doc_name(reader);
                to_token_or_name(text)
            }
            _ => {
                reader.eat_till_end();
                LuaTokenKind::TkDocTrivia
            }
        }
    }

    fn lex_field_start(&mut self) -> LuaTokenKind {
        if is_name_start(self.reader.current_char()) {
            let text = read_doc_name(&mut self.reader);
            return to_visibility_or_name(text);
        }

        self.lex_normal()
    }
}

fn to_tag(text: &str) -> LuaTokenKind {
    match text {
        "type" => LuaTokenKind::TkTagType,
        "alias" => LuaTokenKind::TkTagAlias,
        "class" => LuaTokenKind::TkTagClass,
        "overload" => LuaTokenKind::TkTagOverload,
        "field" => LuaTokenKind::TkTagField,
        "param" => LuaTokenKind::TkTagParam,
        "return" => LuaTokenKind::TkTagReturn,
        "generic" => LuaTokenKind::TkTagGeneric,
        "vararg" => LuaTokenKind::TkTagVararg,
        _ => LuaTokenKind::TkTagOther,
    }
}

fn to_visibility_or_name(text: &str) -> LuaTokenKind {
    match text {
        "private" | "protected" | "public" | "package" => LuaTokenKind::TkDocVisibility,
        _ => LuaTokenKind::TkName,
    }
}

fn to_token_or_name(text: &str) -> LuaTokenKind {
    match text {
        "true" => LuaTokenKind::TkTrue,
        "false" => LuaTokenKind::TkFalse,
        _ => LuaTokenKind::TkName,
    }
}

fn is_doc_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n'
}

fn read_doc_name<'a>(reader: &mut Reader<'a>) -> &'a str {
    reader.bump();
    while !reader.is_eof() {
        match reader.current_char() {
            ch if is_name_continue(ch) => {
                reader.bump();
            }
            // `a.b`, `a-b`, but never `a..`, `a--`, `a.-`
            '.' | '-' => {
                let next = reader.next_char();
                if next == '.' || next == '-' || !is_name_continue(next) {
                    break;
                }

                reader.bump();
            }
            _ => break,
        }
    }

    reader.current_text()
}
