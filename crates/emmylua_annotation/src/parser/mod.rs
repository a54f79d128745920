mod lua_doc_parser;
mod lua_doc_tag_parser;
mod parser_config;

pub use lua_doc_parser::LuaDocParser;
pub use lua_doc_tag_parser::{LuaDocTagParseResult, LuaDocTagParser};
pub use parser_config::DocParserConfig;
