mod lua_doc_tag_kind;
mod lua_field_scope;
mod lua_token_kind;

pub use lua_doc_tag_kind::LuaDocTagKind;
pub use lua_field_scope::LuaFieldScope;
pub use lua_token_kind::LuaTokenKind;
