use super::*;
use crate::board::*;
use crate::remote::Engine;

/// Position and legal moves read together at the top of an acting cycle.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub snapshot: Snapshot,
    pub legal: Legal,
}

/// Read the position then the legal moves. Read-only.
///
/// An empty move list is [`Fault::NoLegalMoves`], which ends the game rather
/// than retrying.
pub async fn extract<E>(engine: &E) -> Result<Extraction, Fault>
where
    E: Engine + ?Sized,
{
    let snapshot = engine.state().await?;
    let legal = Legal::from(engine.legal().await?);
    log::debug!("[extract] {} · {} legal", snapshot, legal.len());
    match legal.is_empty() {
        true => Err(Fault::NoLegalMoves),
        false => Ok(Extraction { snapshot, legal }),
    }
}
