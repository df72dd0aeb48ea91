//! One-line operation feedback.

use std::fmt;

/// Success or failure line shown after an operation.
///
/// # Examples
///
/// ```rust
/// use taskboard_core::display::OperationStatus;
///
/// let status = OperationStatus::success("Board reset");
/// assert_eq!(status.to_string(), "Success: Board reset\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_line() {
        let failure = OperationStatus::failure(String::from("No project is loaded"));
        assert_eq!(failure.to_string(), "Error: No project is loaded\n");
        assert!(!failure.success);
    }
}
