//! Error types for qrbill-core

use thiserror::Error;

/// Core error type for alternative scheme operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// The operation needs an instruction but none has been set
    #[error("alternative scheme has no instruction set")]
    InstructionUnset,
}

impl SchemeError {
    /// Stable machine-readable code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InstructionUnset => "SCHEME_INSTRUCTION_UNSET",
        }
    }

    /// Check if this is an `InstructionUnset` error
    #[must_use]
    pub const fn is_instruction_unset(&self) -> bool {
        matches!(self, Self::InstructionUnset)
    }
}

/// Result type alias for qrbill-core operations
pub type Result<T> = std::result::Result<T, SchemeError>;
