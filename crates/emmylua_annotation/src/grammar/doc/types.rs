use rowan::TextRange;

use crate::{
    grammar::DocTypeResult,
    kind::LuaTokenKind,
    parser::LuaDocParser,
    parser_error::LuaParseError,
    syntax::{
        LuaDocArrayType, LuaDocFuncReturn, LuaDocFuncType, LuaDocGenericItem, LuaDocGenericType,
        LuaDocLiteralKind, LuaDocLiteralType, LuaDocMultiType, LuaDocNameRef, LuaDocNameType,
        LuaDocNullableType, LuaDocObjectField, LuaDocObjectFieldKey, LuaDocObjectType,
        LuaDocTupleType, LuaDocType, LuaDocTypeParam, LuaDocVariadicType,
    },
};

use super::{expect_token, if_token_bump};

/// Parses one type expression, `<type>?` included.
pub fn parse_type(p: &mut LuaDocParser) -> DocTypeResult {
    parse_type_with(p, true)
}

/// Parses one type expression but leaves a trailing `?` to the caller, where
/// it marks an optional return value instead of a nullable type.
pub fn parse_return_item_type(p: &mut LuaDocParser) -> DocTypeResult {
    parse_type_with(p, false)
}

fn parse_type_with(p: &mut LuaDocParser, allow_nullable: bool) -> DocTypeResult {
    p.enter_type()?;
    let result = parse_union_type(p).map(|ty| {
        if allow_nullable && p.current_token() == LuaTokenKind::TkDocQuestion {
            p.bump();
            let range = ty.get_range().cover(p.current_location());
            LuaDocType::Nullable(LuaDocNullableType {
                base: Box::new(ty),
                range,
            })
        } else {
            ty
        }
    });
    p.leave_type();
    result
}

// <type> | <type> | ...
fn parse_union_type(p: &mut LuaDocParser) -> DocTypeResult {
    let first = parse_intersection_type(p)?;
    if p.current_token() != LuaTokenKind::TkDocOr {
        return Ok(first);
    }

    let mut types = vec![first];
    while p.current_token() == LuaTokenKind::TkDocOr {
        p.bump();
        types.push(parse_intersection_type(p)?);
    }

    let range = cover_types(&types);
    Ok(LuaDocType::Union(LuaDocMultiType { types, range }))
}

// <type> & <type> & ...
fn parse_intersection_type(p: &mut LuaDocParser) -> DocTypeResult {
    let first = parse_simple_type(p)?;
    if p.current_token() != LuaTokenKind::TkDocAnd {
        return Ok(first);
    }

    let mut types = vec![first];
    while p.current_token() == LuaTokenKind::TkDocAnd {
        p.bump();
        types.push(parse_simple_type(p)?);
    }

    let range = cover_types(&types);
    Ok(LuaDocType::Intersection(LuaDocMultiType { types, range }))
}

fn parse_simple_type(p: &mut LuaDocParser) -> DocTypeResult {
    let ty = parse_primary_type(p)?;

    parse_suffixed_type(p, ty)
}

fn parse_primary_type(p: &mut LuaDocParser) -> DocTypeResult {
    match p.current_token() {
        LuaTokenKind::TkLeftBrace => parse_object_type(p),
        LuaTokenKind::TkLeftBracket => parse_tuple_type(p),
        LuaTokenKind::TkLeftParen => parse_paren_type(p),
        LuaTokenKind::TkString
        | LuaTokenKind::TkInt
        | LuaTokenKind::TkTrue
        | LuaTokenKind::TkFalse => parse_literal_type(p),
        LuaTokenKind::TkName => match p.current_token_text() {
            "fun" | "async" => parse_fun_type(p).map(LuaDocType::Func),
            _ => parse_name_type(p),
        },
        LuaTokenKind::TkDots if p.config().support_compact_luals() => parse_vararg_type(p),
        _ => Err(LuaParseError::doc_error_from(
            &t!("expect type"),
            p.current_token_range(),
        )),
    }
}

// <type>[]
// <name type> < <type_list> >
// <name type> ...
fn parse_suffixed_type(p: &mut LuaDocParser, ty: LuaDocType) -> DocTypeResult {
    let mut ty = ty;
    loop {
        match p.current_token() {
            LuaTokenKind::TkLeftBracket => {
                p.bump();
                expect_token(p, LuaTokenKind::TkRightBracket)?;
                let range = ty.get_range().cover(p.current_location());
                ty = LuaDocType::Array(LuaDocArrayType {
                    base: Box::new(ty),
                    range,
                });
            }
            LuaTokenKind::TkLt => {
                let name_type = match ty {
                    LuaDocType::Name(name_type) => name_type,
                    _ => return Ok(ty),
                };

                p.bump();
                let args = parse_type_list(p)?;
                expect_token(p, LuaTokenKind::TkGt)?;
                let range = name_type.range.cover(p.current_location());
                ty = LuaDocType::Generic(LuaDocGenericType {
                    name: LuaDocNameRef::new(&name_type.name, name_type.range),
                    args,
                    range,
                });
            }
            LuaTokenKind::TkDots => {
                if !matches!(ty, LuaDocType::Name(_) | LuaDocType::Generic(_)) {
                    return Ok(ty);
                }

                p.bump();
                let range = ty.get_range().cover(p.current_location());
                return Ok(LuaDocType::Variadic(LuaDocVariadicType {
                    base: Box::new(ty),
                    range,
                }));
            }
            _ => return Ok(ty),
        }
    }
}

pub fn parse_type_list(p: &mut LuaDocParser) -> Result<Vec<LuaDocType>, LuaParseError> {
    let mut types = vec![parse_type(p)?];
    while p.current_token() == LuaTokenKind::TkComma {
        p.bump();
        types.push(parse_type(p)?);
    }
    Ok(types)
}

// ( <type> )
fn parse_paren_type(p: &mut LuaDocParser) -> DocTypeResult {
    let start: TextRange = p.current_token_range().into();
    p.bump();
    let mut ty = parse_type(p)?;
    expect_token(p, LuaTokenKind::TkRightParen)?;
    ty.set_range(start.cover(p.current_location()));
    Ok(ty)
}

// <string> | <integer> | <bool>
fn parse_literal_type(p: &mut LuaDocParser) -> DocTypeResult {
    let kind = match p.current_token() {
        LuaTokenKind::TkString => LuaDocLiteralKind::String,
        LuaTokenKind::TkInt => LuaDocLiteralKind::Integer,
        _ => LuaDocLiteralKind::Boolean,
    };
    let text = p.current_token_text().to_string();
    p.bump();
    Ok(LuaDocType::Literal(LuaDocLiteralType {
        kind,
        text,
        range: p.current_location(),
    }))
}

// <name type>
fn parse_name_type(p: &mut LuaDocParser) -> DocTypeResult {
    let name = p.current_token_text().to_string();
    p.bump();
    Ok(LuaDocType::Name(LuaDocNameType {
        name,
        range: p.current_location(),
    }))
}

// just compact luals
// ...<name type>
fn parse_vararg_type(p: &mut LuaDocParser) -> DocTypeResult {
    p.bump();
    let start = p.current_location();
    let base = parse_name_type_only(p)?;
    let range = start.cover(base.get_range());
    Ok(LuaDocType::Variadic(LuaDocVariadicType {
        base: Box::new(base),
        range,
    }))
}

fn parse_name_type_only(p: &mut LuaDocParser) -> DocTypeResult {
    if p.current_token() != LuaTokenKind::TkName {
        return Err(LuaParseError::doc_error_from(
            &t!("expect type"),
            p.current_token_range(),
        ));
    }
    parse_name_type(p)
}

// [ <type> , <type>  ...]
fn parse_tuple_type(p: &mut LuaDocParser) -> DocTypeResult {
    p.bump();
    let start = p.current_location();
    let mut types = Vec::new();
    if p.current_token() != LuaTokenKind::TkRightBracket {
        types = parse_type_list(p)?;
    }

    expect_token(p, LuaTokenKind::TkRightBracket)?;
    Ok(LuaDocType::Tuple(LuaDocTupleType {
        types,
        range: start.cover(p.current_location()),
    }))
}

// { <name>: <type>, [<type>]: <type>, <name>?: <type> }
fn parse_object_type(p: &mut LuaDocParser) -> DocTypeResult {
    p.bump();
    let start = p.current_location();
    let mut fields = Vec::new();
    if p.current_token() != LuaTokenKind::TkRightBrace {
        fields.push(parse_typed_field(p)?);
        while p.current_token() == LuaTokenKind::TkComma {
            p.bump();
            if p.current_token() == LuaTokenKind::TkRightBrace {
                break;
            }
            fields.push(parse_typed_field(p)?);
        }
    }

    expect_token(p, LuaTokenKind::TkRightBrace)?;
    Ok(LuaDocType::Object(LuaDocObjectType {
        fields,
        range: start.cover(p.current_location()),
    }))
}

fn parse_typed_field(p: &mut LuaDocParser) -> Result<LuaDocObjectField, LuaParseError> {
    let key = match p.current_token() {
        LuaTokenKind::TkName => {
            let name = p.current_token_text();
            p.bump();
            LuaDocObjectFieldKey::Name(LuaDocNameRef::new(name, p.current_location()))
        }
        LuaTokenKind::TkLeftBracket => {
            p.bump();
            let ty = parse_type(p)?;
            expect_token(p, LuaTokenKind::TkRightBracket)?;
            LuaDocObjectFieldKey::Type(ty)
        }
        _ => {
            return Err(LuaParseError::doc_error_from(
                &t!("expect name or [<type>]"),
                p.current_token_range(),
            ));
        }
    };

    let is_optional = if_token_bump(p, LuaTokenKind::TkDocQuestion);
    let field_type = if if_token_bump(p, LuaTokenKind::TkColon) {
        Some(parse_type(p)?)
    } else {
        None
    };

    Ok(LuaDocObjectField {
        key,
        is_optional,
        field_type,
    })
}

// fun ( <name>: <type>, ... ): <type>, ...
// async fun ( <name>: <type>, ... ): <type>, ...
// fun <T>( <name>: <type>, ... ): <type>, ...
pub fn parse_fun_type(p: &mut LuaDocParser) -> Result<LuaDocFuncType, LuaParseError> {
    let start: TextRange = p.current_token_range().into();
    let is_async = p.current_token() == LuaTokenKind::TkName && p.current_token_text() == "async";
    if is_async {
        p.bump();
    }

    if p.current_token() != LuaTokenKind::TkName || p.current_token_text() != "fun" {
        return Err(LuaParseError::doc_error_from(
            &t!("expect fun"),
            p.current_token_range(),
        ));
    }
    p.bump();

    let mut generics = Vec::new();
    if if_token_bump(p, LuaTokenKind::TkLt) {
        generics.push(parse_fun_generic(p)?);
        while if_token_bump(p, LuaTokenKind::TkComma) {
            generics.push(parse_fun_generic(p)?);
        }
        expect_token(p, LuaTokenKind::TkGt)?;
    }

    expect_token(p, LuaTokenKind::TkLeftParen)?;
    let mut params = Vec::new();
    if p.current_token() != LuaTokenKind::TkRightParen {
        params.push(parse_typed_param(p)?);
        while if_token_bump(p, LuaTokenKind::TkComma) {
            params.push(parse_typed_param(p)?);
        }
    }
    expect_token(p, LuaTokenKind::TkRightParen)?;

    let mut returns = Vec::new();
    if if_token_bump(p, LuaTokenKind::TkColon) {
        returns = parse_fun_return_list(p)?;
    }

    Ok(LuaDocFuncType {
        is_async,
        generics,
        params,
        returns,
        range: start.cover(p.current_location()),
    })
}

// T
// T : Parent
fn parse_fun_generic(p: &mut LuaDocParser) -> Result<LuaDocGenericItem, LuaParseError> {
    let name = p.consume_identifier()?;
    let parent = if if_token_bump(p, LuaTokenKind::TkColon) {
        p.consume_identifier()?
    } else {
        LuaDocNameRef::default()
    };
    Ok(LuaDocGenericItem { name, parent })
}

// <name> : <type>
// <name>? : <type>
// ... : <type>
// <name>
fn parse_typed_param(p: &mut LuaDocParser) -> Result<LuaDocTypeParam, LuaParseError> {
    let name = match p.current_token() {
        LuaTokenKind::TkName | LuaTokenKind::TkDots => p.consume_param_name()?,
        _ => {
            return Err(LuaParseError::doc_error_from(
                &t!("expect name or ..."),
                p.current_token_range(),
            ));
        }
    };

    let is_optional = if_token_bump(p, LuaTokenKind::TkDocQuestion);
    let param_type = if if_token_bump(p, LuaTokenKind::TkColon) {
        Some(parse_type(p)?)
    } else {
        None
    };

    Ok(LuaDocTypeParam {
        name,
        is_optional,
        param_type,
    })
}

fn parse_fun_return_list(p: &mut LuaDocParser) -> Result<Vec<LuaDocFuncReturn>, LuaParseError> {
    // compact luals return type (number, integer)
    let in_paren = p.config().support_compact_luals()
        && if_token_bump(p, LuaTokenKind::TkLeftParen);

    let mut returns = vec![parse_fun_return(p)?];
    while if_token_bump(p, LuaTokenKind::TkComma) {
        returns.push(parse_fun_return(p)?);
    }

    if in_paren {
        expect_token(p, LuaTokenKind::TkRightParen)?;
    }

    Ok(returns)
}

// <type>
// <name>: <type>
// <type>?
fn parse_fun_return(p: &mut LuaDocParser) -> Result<LuaDocFuncReturn, LuaParseError> {
    let mut ty = parse_return_item_type(p)?;
    let mut name = None;
    if p.current_token() == LuaTokenKind::TkColon
        && let LuaDocType::Name(name_type) = &ty
    {
        name = Some(LuaDocNameRef::new(&name_type.name, name_type.range));
        p.bump();
        ty = parse_return_item_type(p)?;
    }

    let is_optional = if_token_bump(p, LuaTokenKind::TkDocQuestion);
    Ok(LuaDocFuncReturn {
        name,
        ty,
        is_optional,
    })
}

fn cover_types(types: &[LuaDocType]) -> TextRange {
    match (types.first(), types.last()) {
        (Some(first), Some(last)) => first.get_range().cover(last.get_range()),
        _ => TextRange::default(),
    }
}
