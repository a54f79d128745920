/// Options shared by every parse of one workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocParserConfig {
    /// Accept LuaLS spellings: `fun(): (A, B)` return lists and `...T`
    /// vararg types.
    pub compact_luals: bool,
    /// Maximum nesting of type expressions on one line.
    pub max_type_depth: usize,
}

impl DocParserConfig {
    pub fn new(compact_luals: bool, max_type_depth: usize) -> Self {
        Self {
            compact_luals,
            max_type_depth,
        }
    }

    pub fn support_compact_luals(&self) -> bool {
        self.compact_luals
    }
}

impl Default for DocParserConfig {
    fn default() -> Self {
        DocParserConfig {
            compact_luals: true,
            max_type_depth: 64,
        }
    }
}
