use std::fmt;

use rowan::TextRange;
use serde::Serialize;

use crate::text::SourceRange;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum LuaParseErrorKind {
    DocError,
    /// The caller asked for a tag that is not the one under the cursor.
    ContractViolation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuaParseError {
    pub kind: LuaParseErrorKind,
    pub message: String,
    pub range: TextRange,
}

impl LuaParseError {
    pub fn new(kind: LuaParseErrorKind, message: &str, range: TextRange) -> Self {
        LuaParseError {
            kind,
            message: message.to_string(),
            range,
        }
    }

    pub fn doc_error_from(message: &str, range: SourceRange) -> Self {
        LuaParseError::new(LuaParseErrorKind::DocError, message, range.into())
    }

    pub fn contract_violation_from(message: &str, range: SourceRange) -> Self {
        LuaParseError::new(LuaParseErrorKind::ContractViolation, message, range.into())
    }

    pub fn is_fatal(&self) -> bool {
        self.kind == LuaParseErrorKind::ContractViolation
    }
}

impl fmt::Display for LuaParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} at {:?}: {}",
            self.kind, self.range, self.message
        )
    }
}

impl std::error::Error for LuaParseError {}
