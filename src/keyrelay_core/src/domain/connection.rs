use std::fmt;

/// Identity-provider connection an account authenticates through,
/// e.g. `Username-Password-Authentication`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection(String);

impl Connection {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
