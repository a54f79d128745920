use rowan::TextRange;

use crate::{
    kind::LuaTokenKind,
    lexer::{LuaDocLexer, LuaDocLexerState},
    parser_error::LuaParseError,
    syntax::{LuaDocComment, LuaDocNameRef},
    text::SourceRange,
};

use super::DocParserConfig;

/// Token source over one annotation line.
///
/// Whitespace is skipped, `current_token` is always the next unconsumed
/// token and `current_location` is the range of the last consumed one.
/// One instance serves exactly one parse call.
pub struct LuaDocParser<'a> {
    text: &'a str,
    line_range: SourceRange,
    lexer: LuaDocLexer<'a>,
    current_token: LuaTokenKind,
    current_token_range: SourceRange,
    prev_token_range: SourceRange,
    config: DocParserConfig,
    type_depth: usize,
    errors: Vec<LuaParseError>,
}

impl<'a> LuaDocParser<'a> {
    /// Creates a parser for `line_range` of `text`, positioned at the first
    /// token of the line.
    pub fn new(text: &'a str, line_range: SourceRange, config: DocParserConfig) -> Self {
        Self::new_with_state(text, line_range, config, LuaDocLexerState::Init)
    }

    pub fn new_with_state(
        text: &'a str,
        line_range: SourceRange,
        config: DocParserConfig,
        state: LuaDocLexerState,
    ) -> Self {
        let mut lexer = LuaDocLexer::new(text, line_range);
        lexer.state = state;
        let mut parser = LuaDocParser {
            text,
            line_range,
            lexer,
            current_token: LuaTokenKind::None,
            current_token_range: SourceRange::new(line_range.start_offset, 0),
            prev_token_range: SourceRange::new(line_range.start_offset, 0),
            config,
            type_depth: 0,
            errors: Vec::new(),
        };

        parser.calc_next_current_token();
        parser
    }

    pub fn bump(&mut self) {
        if self.current_token == LuaTokenKind::TkEof {
            return;
        }

        self.prev_token_range = self.current_token_range;
        self.calc_next_current_token();
    }

    fn calc_next_current_token(&mut self) {
        loop {
            let token = self.lexer.next_token();
            match token.kind {
                LuaTokenKind::TkWhitespace => continue,
                LuaTokenKind::TkEof => {
                    self.current_token = LuaTokenKind::TkEof;
                    self.current_token_range = SourceRange::new(self.line_range.end_offset(), 0);
                }
                kind => {
                    self.current_token = kind;
                    self.current_token_range = token.range;
                }
            }
            break;
        }
    }

    pub fn peek_kind(&self) -> LuaTokenKind {
        self.current_token
    }

    pub fn current_token(&self) -> LuaTokenKind {
        self.current_token
    }

    pub fn current_token_range(&self) -> SourceRange {
        self.current_token_range
    }

    pub fn current_token_text(&self) -> &'a str {
        let range = self.current_token_range;
        &self.text[range.start_offset..range.end_offset()]
    }

    /// Range of the most recently consumed token.
    pub fn current_location(&self) -> TextRange {
        self.prev_token_range.into()
    }

    pub fn config(&self) -> &DocParserConfig {
        &self.config
    }

    /// The lexer state applies from the next token lexed on, so it must be
    /// set before bumping the token that precedes the new context.
    pub fn set_lexer_state(&mut self, state: LuaDocLexerState) {
        self.lexer.state = state;
    }

    /// Consumes a token the caller already knows is there. A mismatch means
    /// the parser was driven to the wrong place.
    pub fn consume(&mut self, kind: LuaTokenKind) -> Result<TextRange, LuaParseError> {
        if self.current_token != kind {
            return Err(LuaParseError::contract_violation_from(
                &t!(
                    "expected %{token}, but get %{current}",
                    token = kind,
                    current = self.current_token
                ),
                self.current_token_range,
            ));
        }

        self.bump();
        Ok(self.current_location())
    }

    /// A plain name such as an alias or generic parameter.
    pub fn consume_identifier(&mut self) -> Result<LuaDocNameRef, LuaParseError> {
        let name = self.consume_name()?;
        self.check_undotted(&name);
        Ok(name)
    }

    /// A class or field name, dotted paths allowed.
    pub fn consume_field_name(&mut self) -> Result<LuaDocNameRef, LuaParseError> {
        self.consume_name()
    }

    /// A parameter name: a plain name or `...`.
    pub fn consume_param_name(&mut self) -> Result<LuaDocNameRef, LuaParseError> {
        match self.current_token {
            LuaTokenKind::TkName => {
                let name = self.consume_name()?;
                self.check_undotted(&name);
                Ok(name)
            }
            LuaTokenKind::TkDots => {
                self.bump();
                Ok(LuaDocNameRef::new("...", self.current_location()))
            }
            _ => Err(LuaParseError::doc_error_from(
                &t!(
                    "expect parameter name or '...', but get %{current}",
                    current = self.current_token
                ),
                self.current_token_range,
            )),
        }
    }

    fn consume_name(&mut self) -> Result<LuaDocNameRef, LuaParseError> {
        if self.current_token != LuaTokenKind::TkName {
            return Err(LuaParseError::doc_error_from(
                &t!("expect name, but get %{current}", current = self.current_token),
                self.current_token_range,
            ));
        }

        let name = self.current_token_text();
        self.bump();
        Ok(LuaDocNameRef::new(name, self.current_location()))
    }

    fn check_undotted(&mut self, name: &LuaDocNameRef) {
        if name.name.contains('.') {
            self.push_error(LuaParseError::doc_error_from(
                &t!("name '%{name}' can not contain '.'", name = name.name),
                name.range.into(),
            ));
        }
    }

    /// Takes the rest of the line as free text. Surrounding whitespace and a
    /// single leading `@`, `--` or `#` marker are not part of the comment.
    pub fn drain_remaining_as_comment(&mut self) -> LuaDocComment {
        let end = self.line_range.end_offset();
        let start = match self.current_token {
            LuaTokenKind::TkEof => end,
            _ => self.current_token_range.start_offset,
        };

        let (offset, text) = strip_comment_marker(&self.text[start..end]);
        let range = if text.is_empty() {
            SourceRange::new(end, 0)
        } else {
            SourceRange::new(start + offset, text.len())
        };

        self.lexer.skip_to_end();
        if start < end {
            self.prev_token_range = SourceRange::from_start_end(start, end);
        }
        self.current_token = LuaTokenKind::TkEof;
        self.current_token_range = SourceRange::new(end, 0);

        LuaDocComment::new(text, range.into())
    }

    /// Guards recursion of the type parser against deeply nested input.
    pub fn enter_type(&mut self) -> Result<(), LuaParseError> {
        if self.type_depth >= self.config.max_type_depth {
            return Err(LuaParseError::doc_error_from(
                &t!("type nesting is too deep"),
                self.current_token_range,
            ));
        }

        self.type_depth += 1;
        Ok(())
    }

    pub fn leave_type(&mut self) {
        self.type_depth = self.type_depth.saturating_sub(1);
    }

    pub fn push_error(&mut self, error: LuaParseError) {
        self.errors.push(error);
    }

    /// Records a recoverable failure and hands back what could be parsed.
    pub fn accept<T>(&mut self, result: Result<T, LuaParseError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push_error(error);
                None
            }
        }
    }

    pub fn errors(&self) -> &[LuaParseError] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<LuaParseError> {
        std::mem::take(&mut self.errors)
    }
}

fn strip_comment_marker(raw: &str) -> (usize, &str) {
    let trimmed = raw.trim_start();
    let mut offset = raw.len() - trimmed.len();
    let mut rest = trimmed;
    for marker in ["@", "--", "#"] {
        if let Some(stripped) = rest.strip_prefix(marker) {
            offset += marker.len();
            rest = stripped;
            break;
        }
    }

    let text = rest.trim_start();
    offset += rest.len() - text.len();
    (offset, text.trim_end())
}
