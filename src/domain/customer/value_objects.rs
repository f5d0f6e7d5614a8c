use serde::{Deserialize, Serialize};

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Customer email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(pub String);

impl Email {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Brazilian taxpayer number, stored as digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cpf(String);

impl Cpf {
    /// Strips punctuation, so `123.456.789-09` and `12345678909` are equal.
    pub fn new(cpf: impl AsRef<str>) -> Self {
        Self(cpf.as_ref().chars().filter(char::is_ascii_digit).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_normalizes_punctuation() {
        assert_eq!(Cpf::new("123.456.789-09"), Cpf::new("12345678909"));
        assert_eq!(Cpf::new("123.456.789-09").as_str(), "12345678909");
    }
}
