use std::fmt;

use serde::Serialize;

use super::LuaTokenKind;

/// The nine annotation keywords that produce a [`crate::LuaDocTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LuaDocTagKind {
    Type,
    Alias,
    Class,
    Overload,
    Field,
    Param,
    Return,
    Generic,
    Vararg,
}

impl LuaDocTagKind {
    pub fn from_keyword(keyword: &str) -> Option<LuaDocTagKind> {
        match keyword {
            "type" => Some(LuaDocTagKind::Type),
            "alias" => Some(LuaDocTagKind::Alias),
            "class" => Some(LuaDocTagKind::Class),
            "overload" => Some(LuaDocTagKind::Overload),
            "field" => Some(LuaDocTagKind::Field),
            "param" => Some(LuaDocTagKind::Param),
            "return" => Some(LuaDocTagKind::Return),
            "generic" => Some(LuaDocTagKind::Generic),
            "vararg" => Some(LuaDocTagKind::Vararg),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            LuaDocTagKind::Type => "type",
            LuaDocTagKind::Alias => "alias",
            LuaDocTagKind::Class => "class",
            LuaDocTagKind::Overload => "overload",
            LuaDocTagKind::Field => "field",
            LuaDocTagKind::Param => "param",
            LuaDocTagKind::Return => "return",
            LuaDocTagKind::Generic => "generic",
            LuaDocTagKind::Vararg => "vararg",
        }
    }

    pub fn from_token(kind: LuaTokenKind) -> Option<LuaDocTagKind> {
        match kind {
            LuaTokenKind::TkTagType => Some(LuaDocTagKind::Type),
            LuaTokenKind::TkTagAlias => Some(LuaDocTagKind::Alias),
            LuaTokenKind::TkTagClass => Some(LuaDocTagKind::Class),
            LuaTokenKind::TkTagOverload => Some(LuaDocTagKind::Overload),
            LuaTokenKind::TkTagField => Some(LuaDocTagKind::Field),
            LuaTokenKind::TkTagParam => Some(LuaDocTagKind::Param),
            LuaTokenKind::TkTagReturn => Some(LuaDocTagKind::Return),
            LuaTokenKind::TkTagGeneric => Some(LuaDocTagKind::Generic),
            LuaTokenKind::TkTagVararg => Some(LuaDocTagKind::Vararg),
            _ => None,
        }
    }

    pub fn to_token(&self) -> LuaTokenKind {
        match self {
            LuaDocTagKind::Type => LuaTokenKind::TkTagType,
            LuaDocTagKind::Alias => LuaTokenKind::TkTagAlias,
            LuaDocTagKind::Class => LuaTokenKind::TkTagClass,
            LuaDocTagKind::Overload => LuaTokenKind::TkTagOverload,
            LuaDocTagKind::Field => LuaTokenKind::TkTagField,
            LuaDocTagKind::Param => LuaTokenKind::TkTagParam,
            LuaDocTagKind::Return => LuaTokenKind::TkTagReturn,
            LuaDocTagKind::Generic => LuaTokenKind::TkTagGeneric,
            LuaDocTagKind::Vararg => LuaTokenKind::TkTagVararg,
        }
    }
}

impl fmt::Display for LuaDocTagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
