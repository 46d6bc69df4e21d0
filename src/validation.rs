use std::fmt;

/// Severity of a single validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One validation finding, tagged with the field/source it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationMessage {
    pub severity: Severity,
    pub source: String,
    pub description: String,
}

impl ValidationMessage {
    pub fn error(source: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            source: source.into(),
            description: description.into(),
        }
    }

    pub fn warning(source: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            source: source.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "[{tag}] {}: {}", self.source, self.description)
    }
}

/// Implemented by structs whose field combinations carry physical
/// constraints that can't be encoded in the type system alone.
pub trait Validate {
    fn validate(&self) -> Vec<ValidationMessage>;

    /// Convenience: true when no `Error`-severity findings are present.
    fn is_valid(&self) -> bool {
        !self
            .validate()
            .iter()
            .any(|m| m.severity == Severity::Error)
    }
}
