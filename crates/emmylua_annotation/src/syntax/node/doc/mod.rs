mod tag;
mod types;

pub use tag::*;
pub use types::*;

use rowan::TextRange;
use serde::Serialize;

/// A name as written in the annotation together with its location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct LuaDocNameRef {
    pub name: String,
    pub range: TextRange,
}

impl LuaDocNameRef {
    pub fn new(name: &str, range: TextRange) -> Self {
        LuaDocNameRef {
            name: name.to_string(),
            range,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Free text left on a tag line after its structured part, shown in hover.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct LuaDocComment {
    pub text: String,
    pub range: TextRange,
}

impl LuaDocComment {
    pub fn new(text: &str, range: TextRange) -> Self {
        LuaDocComment {
            text: text.to_string(),
            range,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
