//! Field-level validation issues.
//!
//! Form endpoints report *all* problems with a payload at once, so validation
//! collects issues instead of failing on the first one.

/// A single human-readable problem with one field of a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Form field the issue refers to.
    pub field: &'static str,
    /// Human-readable message, suitable for display next to the field.
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl core::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
