use crate::board::*;

/// The notation that will actually be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub notation: String,
    pub proposed: String,
    pub fallback: bool,
}

/// Accept the advisor's text only if it is byte-for-byte a legal notation;
/// otherwise take the engine's first legal move. `None` only for an empty set.
pub fn resolve(proposed: &str, legal: &Legal) -> Option<Resolution> {
    match legal.contains(proposed) {
        true => Some(Resolution {
            notation: proposed.to_string(),
            proposed: proposed.to_string(),
            fallback: false,
        }),
        false => legal.first().map(|first| Resolution {
            notation: first.notation().to_string(),
            proposed: proposed.to_string(),
            fallback: true,
        }),
    }
}
