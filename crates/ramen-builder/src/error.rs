//! Selection errors
//!
//! Every variant is a wiring fault between the catalog and its caller: a key or
//! name the catalog does not carry, or a step index past the end.

/// Invalid selection or navigation request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Category key not present in the catalog
    #[error("invalid selection: unknown category '{0}'")]
    UnknownCategory(String),

    /// Choice name not present in the category
    #[error("invalid selection: '{choice}' is not a choice of '{category}'")]
    UnknownChoice {
        /// Category key
        category: String,
        /// Requested choice name
        choice: String,
    },

    /// Step index past the last step
    #[error("step {index} out of range ({steps} steps)")]
    StepOutOfRange {
        /// Requested step
        index: usize,
        /// Number of steps
        steps: usize,
    },
}

impl SelectionError {
    /// Create unknown choice error
    pub fn unknown_choice(category: impl Into<String>, choice: impl Into<String>) -> Self {
        Self::UnknownChoice {
            category: category.into(),
            choice: choice.into(),
        }
    }

    /// Category key the error refers to, if any
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::UnknownCategory(category) | Self::UnknownChoice { category, .. } => Some(category),
            Self::StepOutOfRange { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = SelectionError::unknown_choice("protein", "Unicorn");
        assert_eq!(
            err.to_string(),
            "invalid selection: 'Unicorn' is not a choice of 'protein'"
        );
        assert_eq!(err.category(), Some("protein"));

        let err = SelectionError::StepOutOfRange { index: 9, steps: 5 };
        assert_eq!(err.category(), None);
    }
}
