use serde::Serialize;

use crate::{
    grammar::{parse_tag, parse_tag_keyword},
    parser_error::LuaParseError,
    syntax::LuaDocTag,
    text::{LineIndex, SourceRange},
};

use super::{DocParserConfig, LuaDocParser};

/// The outcome of parsing one annotation line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocTagParseResult {
    /// `None` for lines that are not a supported tag, and for a contract
    /// violation, which is then the only entry in `errors`.
    pub tag: Option<LuaDocTag>,
    pub errors: Vec<LuaParseError>,
}

impl LuaDocTagParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub struct LuaDocTagParser;

impl LuaDocTagParser {
    /// Parses `text` as a single annotation line such as `---@param x string`.
    pub fn parse_line(text: &str, config: DocParserConfig) -> LuaDocTagParseResult {
        Self::parse_line_range(text, SourceRange::new(0, text.len()), config)
    }

    /// Parses every line of a comment block on its own and keeps the results
    /// of the lines holding a supported tag, in line order. Ranges are offsets
    /// into `text`.
    pub fn parse_comment(text: &str, config: DocParserConfig) -> Vec<LuaDocTagParseResult> {
        let line_index = LineIndex::parse(text);
        let mut results = Vec::new();
        for line in 0..line_index.line_count() {
            let Some(line_range) = line_index.get_line_range(line, text) else {
                continue;
            };

            let result = Self::parse_line_range(text, line_range, config);
            if result.tag.is_some() || result.has_errors() {
                results.push(result);
            }
        }

        results
    }

    pub fn parse_line_range(
        text: &str,
        line_range: SourceRange,
        config: DocParserConfig,
    ) -> LuaDocTagParseResult {
        let mut p = LuaDocParser::new(text, line_range, config);
        let Some(kind) = parse_tag_keyword(&mut p) else {
            return LuaDocTagParseResult {
                tag: None,
                errors: Vec::new(),
            };
        };

        match parse_tag(&mut p, kind) {
            Ok(tag) => LuaDocTagParseResult {
                tag: Some(tag),
                errors: p.take_errors(),
            },
            Err(err) => {
                log::warn!("failed to parse @{} tag: {}", kind, err);
                LuaDocTagParseResult {
                    tag: None,
                    errors: vec![err],
                }
            }
        }
    }
}
