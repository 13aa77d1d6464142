//! Container access errors.

/// Error returned by positional access on an attribute container.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// The index is outside `0..len`.
    #[error("attribute index {index} out of range for container of length {len}")]
    OutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = AttributeError::OutOfRange { index: 3, len: 2 };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains("length 2"));
    }
}
