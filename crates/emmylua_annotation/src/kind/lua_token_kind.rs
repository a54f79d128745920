use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u16)]
pub enum LuaTokenKind {
    #[default]
    None,
    TkWhitespace,
    TkEof,

    // comment start
    TkNormalStart, // --
    TkDocStart,    // ---@

    // tag keywords
    TkTagType,
    TkTagAlias,
    TkTagClass,
    TkTagOverload,
    TkTagField,
    TkTagParam,
    TkTagReturn,
    TkTagGeneric,
    TkTagVararg,
    TkTagOther,

    // doc body
    TkName,
    TkString,
    TkInt,
    TkTrue,
    TkFalse,
    TkColon,        // :
    TkComma,        // ,
    TkDot,          // .
    TkDots,         // ...
    TkDocQuestion,  // ?
    TkDocOr,        // |
    TkDocAnd,       // &
    TkLeftParen,    // (
    TkRightParen,   // )
    TkLeftBracket,  // [
    TkRightBracket, // ]
    TkLeftBrace,    // {
    TkRightBrace,   // }
    TkLt,           // <
    TkGt,           // >
    TkDocVisibility, // public | protected | private | package

    TkDocDetail, // @comment, #comment
    TkDocTrivia,
}

impl LuaTokenKind {
    pub fn is_tag(self) -> bool {
        matches!(
            self,
            LuaTokenKind::TkTagType
                | LuaTokenKind::TkTagAlias
                | LuaTokenKind::TkTagClass
                | LuaTokenKind::TkTagOverload
                | LuaTokenKind::TkTagField
                | LuaTokenKind::TkTagParam
                | LuaTokenKind::TkTagReturn
                | LuaTokenKind::TkTagGeneric
                | LuaTokenKind::TkTagVararg
                | LuaTokenKind::TkTagOther
        )
    }
}

impl fmt::Display for LuaTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
