mod grammar;
mod kind;
mod lexer;
mod parser;
mod parser_error;
mod syntax;
mod text;

pub use grammar::{
    parse_fun_type, parse_return_item_type, parse_tag, parse_tag_alias, parse_tag_class,
    parse_tag_field, parse_tag_generic, parse_tag_keyword, parse_tag_overload, parse_tag_param,
    parse_tag_return, parse_tag_type, parse_tag_vararg, parse_type, parse_type_list,
};
pub use kind::*;
pub use lexer::{LuaDocLexer, LuaDocLexerState, LuaTokenData};
pub use parser::{DocParserConfig, LuaDocParser, LuaDocTagParseResult, LuaDocTagParser};
pub use parser_error::{LuaParseError, LuaParseErrorKind};
pub use syntax::*;
pub use text::LineIndex;
pub use text::{Reader, SourceRange};

#[macro_use]
extern crate rust_i18n;

rust_i18n::i18n!("./locales", fallback = "en");

pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}
