/// Board location in the engine's own notation, e.g. `3-0`.
/// Never parsed; it only travels into prompts and back out inside notations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate(String);

impl Coordinate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Coordinate {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Coordinate {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
