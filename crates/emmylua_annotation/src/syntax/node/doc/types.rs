use std::fmt;

use rowan::TextRange;
use serde::Serialize;

use super::{LuaDocGenericItem, LuaDocNameRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LuaDocType {
    Name(LuaDocNameType),
    Literal(LuaDocLiteralType),
    Array(LuaDocArrayType),
    Generic(LuaDocGenericType),
    Union(LuaDocMultiType),
    Intersection(LuaDocMultiType),
    Nullable(LuaDocNullableType),
    Func(LuaDocFuncType),
    Object(LuaDocObjectType),
    Tuple(LuaDocTupleType),
    Variadic(LuaDocVariadicType),
}

impl LuaDocType {
    pub fn get_range(&self) -> TextRange {
        match self {
            LuaDocType::Name(it) => it.range,
            LuaDocType::Literal(it) => it.range,
            LuaDocType::Array(it) => it.range,
            LuaDocType::Generic(it) => it.range,
            LuaDocType::Union(it) => it.range,
            LuaDocType::Intersection(it) => it.range,
            LuaDocType::Nullable(it) => it.range,
            LuaDocType::Func(it) => it.range,
            LuaDocType::Object(it) => it.range,
            LuaDocType::Tuple(it) => it.range,
            LuaDocType::Variadic(it) => it.range,
        }
    }

    /// Widens the recorded range, e.g. to the parentheses around the type.
    pub fn set_range(&mut self, range: TextRange) {
        match self {
            LuaDocType::Name(it) => it.range = range,
            LuaDocType::Literal(it) => it.range = range,
            LuaDocType::Array(it) => it.range = range,
            LuaDocType::Generic(it) => it.range = range,
            LuaDocType::Union(it) => it.range = range,
            LuaDocType::Intersection(it) => it.range = range,
            LuaDocType::Nullable(it) => it.range = range,
            LuaDocType::Func(it) => it.range = range,
            LuaDocType::Object(it) => it.range = range,
            LuaDocType::Tuple(it) => it.range = range,
            LuaDocType::Variadic(it) => it.range = range,
        }
    }

    pub fn as_func_type(&self) -> Option<&LuaDocFuncType> {
        match self {
            LuaDocType::Func(it) => Some(it),
            _ => None,
        }
    }

    pub fn into_func_type(self) -> Option<LuaDocFuncType> {
        match self {
            LuaDocType::Func(it) => Some(it),
            _ => None,
        }
    }

    pub fn get_name(&self) -> Option<&str> {
        match self {
            LuaDocType::Name(it) => Some(&it.name),
            _ => None,
        }
    }

    /// Union members in written order, or the type itself.
    pub fn get_union_members(&self) -> Vec<&LuaDocType> {
        match self {
            LuaDocType::Union(it) => it.types.iter().collect(),
            _ => vec![self],
        }
    }

    fn is_compound(&self) -> bool {
        matches!(
            self,
            LuaDocType::Union(_) | LuaDocType::Intersection(_) | LuaDocType::Func(_)
        )
    }
}

// string, A.B
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocNameType {
    pub name: String,
    pub range: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LuaDocLiteralKind {
    String,
    Integer,
    Boolean,
}

// "left", 10, true
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocLiteralType {
    pub kind: LuaDocLiteralKind,
    pub text: String,
    pub range: TextRange,
}

// string[]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocArrayType {
    pub base: Box<LuaDocType>,
    pub range: TextRange,
}

// table<string, number>
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocGenericType {
    pub name: LuaDocNameRef,
    pub args: Vec<LuaDocType>,
    pub range: TextRange,
}

// A|B|C, A&B
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocMultiType {
    pub types: Vec<LuaDocType>,
    pub range: TextRange,
}

// string?
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocNullableType {
    pub base: Box<LuaDocType>,
    pub range: TextRange,
}

// async fun<T>(a: T, b?: string, ...: any): R, err: string?
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocFuncType {
    pub is_async: bool,
    pub generics: Vec<LuaDocGenericItem>,
    pub params: Vec<LuaDocTypeParam>,
    pub returns: Vec<LuaDocFuncReturn>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocTypeParam {
    pub name: LuaDocNameRef,
    pub is_optional: bool,
    pub param_type: Option<LuaDocType>,
}

impl LuaDocTypeParam {
    pub fn is_dots(&self) -> bool {
        self.name.name == "..."
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocFuncReturn {
    pub name: Option<LuaDocNameRef>,
    pub ty: LuaDocType,
    pub is_optional: bool,
}

// { name: string, [integer]: boolean }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocObjectType {
    pub fields: Vec<LuaDocObjectField>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LuaDocObjectFieldKey {
    Name(LuaDocNameRef),
    Type(LuaDocType),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocObjectField {
    pub key: LuaDocObjectFieldKey,
    pub is_optional: bool,
    pub field_type: Option<LuaDocType>,
}

// [string, integer]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocTupleType {
    pub types: Vec<LuaDocType>,
    pub range: TextRange,
}

// T...
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocVariadicType {
    pub base: Box<LuaDocType>,
    pub range: TextRange,
}

impl fmt::Display for LuaDocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LuaDocType::Name(it) => write!(f, "{}", it.name),
            LuaDocType::Literal(it) => write!(f, "{}", it.text),
            LuaDocType::Array(it) => {
                write_operand(f, &it.base)?;
                write!(f, "[]")
            }
            LuaDocType::Generic(it) => {
                write!(f, "{}<", it.name.name)?;
                write_list(f, &it.args)?;
                write!(f, ">")
            }
            LuaDocType::Union(it) => write_joined(f, &it.types, "|"),
            LuaDocType::Intersection(it) => write_joined(f, &it.types, "&"),
            LuaDocType::Nullable(it) => {
                write_operand(f, &it.base)?;
                write!(f, "?")
            }
            LuaDocType::Func(it) => write!(f, "{}", it),
            LuaDocType::Object(it) => {
                if it.fields.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for (i, field) in it.fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match &field.key {
                        LuaDocObjectFieldKey::Name(name) => write!(f, "{}", name.name)?,
                        LuaDocObjectFieldKey::Type(ty) => write!(f, "[{}]", ty)?,
                    }
                    if field.is_optional {
                        write!(f, "?")?;
                    }
                    if let Some(ty) = &field.field_type {
                        write!(f, ": {}", ty)?;
                    }
                }
                write!(f, " }}")
            }
            LuaDocType::Tuple(it) => {
                write!(f, "[")?;
                write_list(f, &it.types)?;
                write!(f, "]")
            }
            LuaDocType::Variadic(it) => {
                write_operand(f, &it.base)?;
                write!(f, "...")
            }
        }
    }
}

impl fmt::Display for LuaDocFuncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_async {
            write!(f, "async ")?;
        }
        write!(f, "fun")?;
        if !self.generics.is_empty() {
            write!(f, "<")?;
            for (i, generic) in self.generics.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", generic.name.name)?;
                if let Some((parent, _)) = generic.get_constraint() {
                    write!(f, ": {}", parent)?;
                }
            }
            write!(f, ">")?;
        }

        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param.name.name)?;
            if param.is_optional {
                write!(f, "?")?;
            }
            if let Some(ty) = &param.param_type {
                write!(f, ": {}", ty)?;
            }
        }
        write!(f, ")")?;

        for (i, ret) in self.returns.iter().enumerate() {
            write!(f, "{}", if i == 0 { ": " } else { ", " })?;
            if let Some(name) = &ret.name {
                write!(f, "{}: ", name.name)?;
            }
            write!(f, "{}", ret.ty)?;
            if ret.is_optional {
                write!(f, "?")?;
            }
        }
        Ok(())
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, ty: &LuaDocType) -> fmt::Result {
    if ty.is_compound() {
        write!(f, "({})", ty)
    } else {
        write!(f, "{}", ty)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, types: &[LuaDocType], sep: &str) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write_operand(f, ty)?;
    }
    Ok(())
}

fn write_list(f: &mut fmt::Formatter<'_>, types: &[LuaDocType]) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", ty)?;
    }
    Ok(())
}
