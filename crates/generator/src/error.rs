use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("divisor must be a positive integer, got {divisor}")]
    NonPositiveDivisor { divisor: i64 },
    #[error("divisor {divisor} is mapped more than once")]
    DuplicateDivisor { divisor: i64 },
    #[error("invalid replacement rule '{rule}': {reason}")]
    InvalidRule { rule: String, reason: String },
}

impl GeneratorError {
    pub fn invalid_rule(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}
