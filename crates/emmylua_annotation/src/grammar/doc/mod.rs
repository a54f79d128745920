mod tag;
mod types;

pub use tag::{
    parse_tag_alias, parse_tag_class, parse_tag_field, parse_tag_generic, parse_tag_overload,
    parse_tag_param, parse_tag_return, parse_tag_type, parse_tag_vararg,
};
pub use types::{parse_fun_type, parse_return_item_type, parse_type, parse_type_list};

use crate::{
    kind::{LuaDocTagKind, LuaTokenKind},
    lexer::LuaDocLexerState,
    parser::LuaDocParser,
    parser_error::LuaParseError,
    syntax::LuaDocTag,
};

/// Parses the tag body for an already classified keyword. The parser must sit
/// on that keyword; any other token is a contract violation and nothing of
/// the line is recovered.
pub fn parse_tag(p: &mut LuaDocParser, kind: LuaDocTagKind) -> Result<LuaDocTag, LuaParseError> {
    let tag = match kind {
        LuaDocTagKind::Type => LuaDocTag::Type(parse_tag_type(p)?),
        LuaDocTagKind::Alias => LuaDocTag::Alias(parse_tag_alias(p)?),
        LuaDocTagKind::Class => LuaDocTag::Class(parse_tag_class(p)?),
        LuaDocTagKind::Overload => LuaDocTag::Overload(parse_tag_overload(p)?),
        LuaDocTagKind::Field => LuaDocTag::Field(parse_tag_field(p)?),
        LuaDocTagKind::Param => LuaDocTag::Param(parse_tag_param(p)?),
        LuaDocTagKind::Return => LuaDocTag::Return(parse_tag_return(p)?),
        LuaDocTagKind::Generic => LuaDocTag::Generic(parse_tag_generic(p)?),
        LuaDocTagKind::Vararg => LuaDocTag::Vararg(parse_tag_vararg(p)?),
    };

    Ok(tag)
}

/// Reads the `---@` prefix and classifies the keyword after it, leaving the
/// parser on the keyword token. Lines that are not tags, and tags outside the
/// supported set, give `None`.
pub fn parse_tag_keyword(p: &mut LuaDocParser) -> Option<LuaDocTagKind> {
    if p.current_token() != LuaTokenKind::TkDocStart {
        return None;
    }

    p.set_lexer_state(LuaDocLexerState::Tag);
    p.bump();
    let kind = LuaDocTagKind::from_token(p.current_token());
    if kind.is_none() {
        log::debug!("skip unsupported tag: {}", p.current_token_text());
    }
    kind
}

fn expect_token(p: &mut LuaDocParser, token: LuaTokenKind) -> Result<(), LuaParseError> {
    if p.current_token() == token {
        p.bump();
        Ok(())
    } else {
        Err(LuaParseError::doc_error_from(
            &t!(
                "expected %{token}, but get %{current}",
                token = token,
                current = p.current_token()
            ),
            p.current_token_range(),
        ))
    }
}

fn if_token_bump(p: &mut LuaDocParser, token: LuaTokenKind) -> bool {
    if p.current_token() == token {
        p.bump();
        true
    } else {
        false
    }
}
