use rowan::TextRange;
use serde::Serialize;

use crate::kind::{LuaDocTagKind, LuaFieldScope};

use super::{LuaDocComment, LuaDocFuncType, LuaDocNameRef, LuaDocType};

/// One parsed `---@<keyword> ...` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LuaDocTag {
    Type(LuaDocTagType),
    Alias(LuaDocTagAlias),
    Class(LuaDocTagClass),
    Overload(LuaDocTagOverload),
    Field(LuaDocTagField),
    Param(LuaDocTagParam),
    Return(LuaDocTagReturn),
    Generic(LuaDocTagGeneric),
    Vararg(LuaDocTagVararg),
}

impl LuaDocTag {
    pub fn get_kind(&self) -> LuaDocTagKind {
        match self {
            LuaDocTag::Type(_) => LuaDocTagKind::Type,
            LuaDocTag::Alias(_) => LuaDocTagKind::Alias,
            LuaDocTag::Class(_) => LuaDocTagKind::Class,
            LuaDocTag::Overload(_) => LuaDocTagKind::Overload,
            LuaDocTag::Field(_) => LuaDocTagKind::Field,
            LuaDocTag::Param(_) => LuaDocTagKind::Param,
            LuaDocTag::Return(_) => LuaDocTagKind::Return,
            LuaDocTag::Generic(_) => LuaDocTagKind::Generic,
            LuaDocTag::Vararg(_) => LuaDocTagKind::Vararg,
        }
    }

    pub fn get_comment(&self) -> &LuaDocComment {
        match self {
            LuaDocTag::Type(it) => &it.comment,
            LuaDocTag::Alias(it) => &it.comment,
            LuaDocTag::Class(it) => &it.comment,
            LuaDocTag::Overload(it) => &it.comment,
            LuaDocTag::Field(it) => &it.comment,
            LuaDocTag::Param(it) => &it.comment,
            LuaDocTag::Return(it) => &it.comment,
            LuaDocTag::Generic(it) => &it.comment,
            LuaDocTag::Vararg(it) => &it.comment,
        }
    }
}

// ---@type string
// ---@type string|nil, number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocTagType {
    pub types: Vec<LuaDocType>,
    pub comment: LuaDocComment,
}

// ---@alias Handler fun(ev: Event): boolean
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocTagAlias {
    pub name: LuaDocNameRef,
    pub alias_type: Option<LuaDocType>,
    pub comment: LuaDocComment,
}

// ---@class Dog : Animal, Pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocTagClass {
    pub name: LuaDocNameRef,
    pub parents: Vec<LuaDocNameRef>,
    pub comment: LuaDocComment,
}

// ---@overload fun(list: table, sep: string): string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocTagOverload {
    /// `None` when the annotation does not hold a function type.
    pub func_type: Option<LuaDocFuncType>,
    pub comment: LuaDocComment,
}

// ---@field private name: string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocTagField {
    pub scope: LuaFieldScope,
    pub name: LuaDocNameRef,
    pub has_colon: bool,
    pub field_type: Option<LuaDocType>,
    pub comment: LuaDocComment,
}

// ---@param name? string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocTagParam {
    pub name: LuaDocNameRef,
    pub is_optional: bool,
    pub param_type: Option<LuaDocType>,
    pub comment: LuaDocComment,
}

// ---@return string, number?
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocTagReturn {
    pub returns: Vec<LuaDocReturnItem>,
    pub comment: LuaDocComment,
}

impl LuaDocTagReturn {
    pub fn get_types(&self) -> impl Iterator<Item = &LuaDocType> {
        self.returns.iter().map(|item| &item.ty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocReturnItem {
    pub ty: LuaDocType,
    pub is_optional: bool,
}

// ---@generic T, U : Base
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocTagGeneric {
    pub params: Vec<LuaDocGenericItem>,
    pub comment: LuaDocComment,
}

/// `T` or `T : Parent`. An unconstrained parameter has an empty `parent`
/// with a default range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LuaDocGenericItem {
    pub name: LuaDocNameRef,
    pub parent: LuaDocNameRef,
}

impl LuaDocGenericItem {
    pub fn get_constraint(&self) -> Option<(&str, TextRange)> {
        if self.parent.is_empty() {
            None
        } else {
            Some((self.parent.name.as_str(), self.parent.range))
        }
    }
}

// ---@vararg string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaDocTagVararg {
    pub vararg_type: Option<LuaDocType>,
    pub comment: LuaDocComment,
}
