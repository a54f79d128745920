mod doc;

use crate::{parser_error::LuaParseError, syntax::LuaDocType};
pub use doc::*;

type DocTypeResult = Result<LuaDocType, LuaParseError>;
