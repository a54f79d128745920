use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize)]
pub enum LuaFieldScope {
    #[default]
    Public,
    Protected,
    Private,
}

impl LuaFieldScope {
    pub fn to_field_scope(scope: &str) -> Option<LuaFieldScope> {
        match scope {
            "public" => Some(LuaFieldScope::Public),
            "protected" => Some(LuaFieldScope::Protected),
            "private" => Some(LuaFieldScope::Private),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LuaFieldScope::Public => "public",
            LuaFieldScope::Protected => "protected",
            LuaFieldScope::Private => "private",
        }
    }
}
