//! Alternative payment scheme instructions.
//!
//! An instruction is a free-form text fragment attached to a payment
//! document. It starts with a short scheme name (for example a payment
//! provider code) followed by scheme-specific parameters:
//!
//! ```rust
//! use qrbill_core::AlternativeScheme;
//!
//! let scheme = AlternativeScheme::with_instruction("Paymit/12341234/1241234");
//! assert_eq!(scheme.name(), Some("Paymit"));
//! assert_eq!(scheme.instruction_without_name(), Ok("/12341234/1241234"));
//! ```
//!
//! The name is never stored on its own. It is derived from the instruction
//! whenever the instruction changes, so the two cannot disagree.

use std::convert::Infallible;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemeError};
use crate::scan::scheme_name_len;

/// A single alternative payment scheme instruction.
///
/// # States
///
/// - **Unset**: no instruction; `name()` and `instruction()` return `None`
/// - **Set**: holds an instruction, possibly empty; the name may be `""`
///
/// Equality and hashing look at the raw instruction only.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub struct AlternativeScheme {
    instruction: Option<String>,
    /// Byte length of the scheme name; only meaningful while `instruction` is set
    name_len: usize,
}

impl AlternativeScheme {
    /// Create an instance without an instruction
    #[must_use]
    pub const fn new() -> Self {
        Self {
            instruction: None,
            name_len: 0,
        }
    }

    /// Create an instance holding `instruction`
    #[must_use]
    pub fn with_instruction(instruction: impl Into<String>) -> Self {
        let mut scheme = Self::new();
        scheme.set_instruction(instruction);
        scheme
    }

    /// Replace the instruction and derive the new scheme name.
    pub fn set_instruction(&mut self, instruction: impl Into<String>) {
        let instruction = instruction.into();
        let name_len = scheme_name_len(&instruction);
        tracing::trace!(
            scheme = &instruction[..name_len],
            len = instruction.len(),
            "Set alternative scheme instruction"
        );
        self.instruction = Some(instruction);
        self.name_len = name_len;
    }

    /// Check whether an instruction has been set
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.instruction.is_some()
    }

    /// Get the full instruction
    #[must_use]
    pub fn instruction(&self) -> Option<&str> {
        self.instruction.as_deref()
    }

    /// Get the scheme name.
    ///
    /// Returns `Some("")` when the instruction does not start with a word
    /// character, and `None` only when no instruction is set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.instruction.as_deref().map(|s| &s[..self.name_len])
    }

    /// Get the instruction without the leading scheme name.
    ///
    /// The result starts at the separator following the name (or at the
    /// first character if the name is empty).
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::InstructionUnset`] if no instruction is set.
    pub fn instruction_without_name(&self) -> Result<&str> {
        self.instruction.as_deref().map_or_else(
            || {
                tracing::debug!("Instruction requested from unset alternative scheme");
                Err(SchemeError::InstructionUnset)
            },
            |s| Ok(&s[self.name_len..]),
        )
    }

    /// Convert into the owned instruction
    #[must_use]
    pub fn into_instruction(self) -> Option<String> {
        self.instruction
    }
}

impl PartialEq for AlternativeScheme {
    fn eq(&self, other: &Self) -> bool {
        self.instruction == other.instruction
    }
}

impl Eq for AlternativeScheme {}

impl Hash for AlternativeScheme {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instruction.hash(state);
    }
}

impl std::fmt::Debug for AlternativeScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlternativeScheme")
            .field("instruction", &self.instruction)
            .finish()
    }
}

impl From<String> for AlternativeScheme {
    fn from(instruction: String) -> Self {
        Self::with_instruction(instruction)
    }
}

impl From<&str> for AlternativeScheme {
    fn from(instruction: &str) -> Self {
        Self::with_instruction(instruction)
    }
}

impl From<Option<String>> for AlternativeScheme {
    fn from(instruction: Option<String>) -> Self {
        instruction.map_or_else(Self::new, Self::with_instruction)
    }
}

impl From<AlternativeScheme> for Option<String> {
    fn from(scheme: AlternativeScheme) -> Self {
        scheme.into_instruction()
    }
}

impl std::str::FromStr for AlternativeScheme {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::with_instruction(s))
    }
}
