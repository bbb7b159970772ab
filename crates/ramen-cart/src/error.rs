//! Cart errors

/// Cart operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    /// Index does not address a line item
    #[error("line item index {index} out of range (cart holds {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of line items
        len: usize,
    },

    /// Selections are missing a required category
    #[error("bowl is incomplete, missing: {}", missing.join(", "))]
    NotFinalizable {
        /// Required category keys without a selection
        missing: Vec<String>,
    },

    /// Delivery option string not recognised
    #[error("unknown delivery option '{0}' (expected 'takeout' or 'delivery')")]
    UnknownDeliveryOption(String),
}

impl CartError {
    /// Check if the caller can recover by re-reading the cart and retrying
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
