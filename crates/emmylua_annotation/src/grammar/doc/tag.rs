use crate::{
    kind::{LuaFieldScope, LuaTokenKind},
    lexer::LuaDocLexerState,
    parser::LuaDocParser,
    parser_error::LuaParseError,
    syntax::{
        LuaDocGenericItem, LuaDocNameRef, LuaDocReturnItem, LuaDocTagAlias, LuaDocTagClass,
        LuaDocTagField, LuaDocTagGeneric, LuaDocTagOverload, LuaDocTagParam, LuaDocTagReturn,
        LuaDocTagType, LuaDocTagVararg,
    },
};

use super::{
    if_token_bump,
    types::{parse_return_item_type, parse_type},
};

// ---@type string
// ---@type number, string
pub fn parse_tag_type(p: &mut LuaDocParser) -> Result<LuaDocTagType, LuaParseError> {
    p.set_lexer_state(LuaDocLexerState::Normal);
    p.consume(LuaTokenKind::TkTagType)?;

    let mut types = Vec::new();
    loop {
        let ty = parse_type(p);
        match p.accept(ty) {
            Some(ty) => types.push(ty),
            None => break,
        }

        if !if_token_bump(p, LuaTokenKind::TkComma) {
            break;
        }
    }

    Ok(LuaDocTagType {
        types,
        comment: p.drain_remaining_as_comment(),
    })
}

// ---@alias Handler fun(ev: Event): boolean
pub fn parse_tag_alias(p: &mut LuaDocParser) -> Result<LuaDocTagAlias, LuaParseError> {
    p.set_lexer_state(LuaDocLexerState::Normal);
    p.consume(LuaTokenKind::TkTagAlias)?;

    let name = p.consume_identifier();
    let name = p.accept(name).unwrap_or_default();
    let alias_type = if name.is_empty() {
        None
    } else {
        let ty = parse_type(p);
        p.accept(ty)
    };

    Ok(LuaDocTagAlias {
        name,
        alias_type,
        comment: p.drain_remaining_as_comment(),
    })
}

// ---@class A
// ---@class A : B, C
pub fn parse_tag_class(p: &mut LuaDocParser) -> Result<LuaDocTagClass, LuaParseError> {
    p.set_lexer_state(LuaDocLexerState::Normal);
    p.consume(LuaTokenKind::TkTagClass)?;

    let name = p.consume_field_name();
    let name = p.accept(name).unwrap_or_default();
    let mut parents = Vec::new();
    if !name.is_empty() && if_token_bump(p, LuaTokenKind::TkColon) {
        loop {
            let parent = p.consume_field_name();
            match p.accept(parent) {
                Some(parent) => parents.push(parent),
                None => break,
            }

            if !if_token_bump(p, LuaTokenKind::TkComma) {
                break;
            }
        }
    }

    Ok(LuaDocTagClass {
        name,
        parents,
        comment: p.drain_remaining_as_comment(),
    })
}

// ---@overload fun(a: string): string
pub fn parse_tag_overload(p: &mut LuaDocParser) -> Result<LuaDocTagOverload, LuaParseError> {
    p.set_lexer_state(LuaDocLexerState::Normal);
    p.consume(LuaTokenKind::TkTagOverload)?;

    let ty = parse_type(p);
    // a non-function type leaves the overload unset without an error
    let func_type = p.accept(ty).and_then(|ty| ty.into_func_type());

    Ok(LuaDocTagOverload {
        func_type,
        comment: p.drain_remaining_as_comment(),
    })
}

// ---@field a string
// ---@field private a: string
// ---@field A.b number
pub fn parse_tag_field(p: &mut LuaDocParser) -> Result<LuaDocTagField, LuaParseError> {
    p.set_lexer_state(LuaDocLexerState::FieldStart);
    p.consume(LuaTokenKind::TkTagField)?;

    p.set_lexer_state(LuaDocLexerState::Normal);
    let mut scope = LuaFieldScope::Public;
    if p.current_token() == LuaTokenKind::TkDocVisibility {
        // only protected and private override the default
        match LuaFieldScope::to_field_scope(p.current_token_text()) {
            Some(LuaFieldScope::Protected) => scope = LuaFieldScope::Protected,
            Some(LuaFieldScope::Private) => scope = LuaFieldScope::Private,
            _ => {}
        }
        p.bump();
    }

    let name = p.consume_field_name();
    let name = p.accept(name).unwrap_or_default();
    let mut has_colon = false;
    let mut field_type = None;
    if !name.is_empty() {
        has_colon = if_token_bump(p, LuaTokenKind::TkColon);
        let ty = parse_type(p);
        field_type = p.accept(ty);
    }

    Ok(LuaDocTagField {
        scope,
        name,
        has_colon,
        field_type,
        comment: p.drain_remaining_as_comment(),
    })
}

// ---@param a number
// ---@param a? number
// ---@param ... string
pub fn parse_tag_param(p: &mut LuaDocParser) -> Result<LuaDocTagParam, LuaParseError> {
    p.set_lexer_state(LuaDocLexerState::Normal);
    p.consume(LuaTokenKind::TkTagParam)?;

    let name = p.consume_param_name();
    let name = p.accept(name).unwrap_or_default();
    let mut is_optional = false;
    let mut param_type = None;
    if !name.is_empty() {
        is_optional = if_token_bump(p, LuaTokenKind::TkDocQuestion);
        let ty = parse_type(p);
        param_type = p.accept(ty);
    }

    Ok(LuaDocTagParam {
        name,
        is_optional,
        param_type,
        comment: p.drain_remaining_as_comment(),
    })
}

// ---@return number
// ---@return number, string?
pub fn parse_tag_return(p: &mut LuaDocParser) -> Result<LuaDocTagReturn, LuaParseError> {
    p.set_lexer_state(LuaDocLexerState::Normal);
    p.consume(LuaTokenKind::TkTagReturn)?;

    let mut returns = Vec::new();
    loop {
        let ty = parse_return_item_type(p);
        let Some(ty) = p.accept(ty) else {
            break;
        };

        let is_optional = if_token_bump(p, LuaTokenKind::TkDocQuestion);
        returns.push(LuaDocReturnItem { ty, is_optional });

        if !if_token_bump(p, LuaTokenKind::TkComma) {
            break;
        }
    }

    Ok(LuaDocTagReturn {
        returns,
        comment: p.drain_remaining_as_comment(),
    })
}

// ---@generic T
// ---@generic T, U : Base
pub fn parse_tag_generic(p: &mut LuaDocParser) -> Result<LuaDocTagGeneric, LuaParseError> {
    p.set_lexer_state(LuaDocLexerState::Normal);
    p.consume(LuaTokenKind::TkTagGeneric)?;

    let mut params = Vec::new();
    loop {
        let name = p.consume_identifier();
        let Some(name) = p.accept(name) else {
            break;
        };

        let mut parent = LuaDocNameRef::default();
        if if_token_bump(p, LuaTokenKind::TkColon) {
            let constraint = p.consume_identifier();
            parent = p.accept(constraint).unwrap_or_default();
        }
        params.push(LuaDocGenericItem { name, parent });

        if !if_token_bump(p, LuaTokenKind::TkComma) {
            break;
        }
    }

    Ok(LuaDocTagGeneric {
        params,
        comment: p.drain_remaining_as_comment(),
    })
}

// ---@vararg string
pub fn parse_tag_vararg(p: &mut LuaDocParser) -> Result<LuaDocTagVararg, LuaParseError> {
    p.set_lexer_state(LuaDocLexerState::Normal);
    p.consume(LuaTokenKind::TkTagVararg)?;

    let ty = parse_type(p);
    let vararg_type = p.accept(ty);

    Ok(LuaDocTagVararg {
        vararg_type,
        comment: p.drain_remaining_as_comment(),
    })
}
