//! JSON shapes returned by the page's script API.
//!
//! The API has shipped in two dialects: the current one (`turn`,
//! `moveNumber`, pieces keyed by coordinate, bare notation strings, `error`
//! on failed moves) and an older one (`currentPlayer`, `turnNumber`, a piece
//! list, move objects, `message`). Both decode into the same board types.
use super::*;
use crate::board::*;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateWire {
    current_player: Option<String>,
    turn_number: Option<u32>,
    move_number: Option<u32>,
    /// Side to move in the current dialect; a turn count in some builds.
    turn: Option<serde_json::Value>,
    pieces: Option<PiecesWire>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PiecesWire {
    Listed(Vec<PieceWire>),
    Keyed(BTreeMap<String, KeyedPieceWire>),
}

#[derive(Debug, Deserialize)]
pub struct PieceWire {
    #[serde(rename = "type")]
    shape: String,
    color: String,
    position: String,
}

#[derive(Debug, Deserialize)]
pub struct KeyedPieceWire {
    #[serde(rename = "type")]
    shape: String,
    color: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MoveWire {
    Bare(String),
    Described {
        notation: String,
        piece: Option<String>,
        from: Option<String>,
        to: Option<String>,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct SidesWire<T> {
    white: T,
    black: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisWire {
    material: Option<SidesWire<i64>>,
    material_value: Option<SidesWire<i64>>,
    #[serde(default)]
    evaluation: f64,
    rhombus_distance_to_goal: Option<SidesWire<Option<u32>>>,
    white_rhombus_distance: Option<u32>,
    black_rhombus_distance: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ExecutionWire {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    error: Option<String>,
}

fn malformed<E>(e: E) -> EngineError
where
    E: std::fmt::Display,
{
    EngineError::Malformed(e.to_string())
}

impl PieceWire {
    fn piece(self) -> Result<Piece, EngineError> {
        Ok(Piece::new(
            Shape::try_from(self.shape.as_str()).map_err(malformed)?,
            Color::try_from(self.color.as_str()).map_err(malformed)?,
            Coordinate::from(self.position),
        ))
    }
}

impl PiecesWire {
    fn pieces(self) -> Result<Vec<Piece>, EngineError> {
        match self {
            Self::Listed(list) => list.into_iter().map(PieceWire::piece).collect(),
            Self::Keyed(map) => map
                .into_iter()
                .map(|(position, p)| PieceWire {
                    shape: p.shape,
                    color: p.color,
                    position,
                })
                .map(PieceWire::piece)
                .collect(),
        }
    }
}

impl TryFrom<StateWire> for Snapshot {
    type Error = EngineError;
    fn try_from(wire: StateWire) -> Result<Self, Self::Error> {
        let (turn_player, turn_count) = match wire.turn {
            Some(serde_json::Value::String(s)) => (Some(s), None),
            Some(serde_json::Value::Number(n)) => (None, n.as_u64().map(|n| n as u32)),
            _ => (None, None),
        };
        let player = wire
            .current_player
            .or(turn_player)
            .ok_or_else(|| malformed("state has no side to move"))?;
        let player = Color::try_from(player.as_str()).map_err(malformed)?;
        let turn = wire
            .turn_number
            .or(wire.move_number)
            .or(turn_count)
            .unwrap_or_default();
        let pieces = wire
            .pieces
            .ok_or_else(|| malformed("state has no pieces"))?
            .pieces()?;
        Ok(Snapshot::new(turn, player, pieces))
    }
}

impl From<MoveWire> for Move {
    fn from(wire: MoveWire) -> Self {
        match wire {
            MoveWire::Bare(notation) => Move::new(notation),
            MoveWire::Described {
                notation,
                piece,
                from,
                to,
            } => Move::new(notation).described(
                piece,
                from.map(Coordinate::from),
                to.map(Coordinate::from),
            ),
        }
    }
}

impl From<AnalysisWire> for Analysis {
    fn from(wire: AnalysisWire) -> Self {
        let material = wire
            .material
            .or(wire.material_value)
            .map(|m| PerSide {
                white: m.white,
                black: m.black,
            })
            .unwrap_or_default();
        let nested = wire.rhombus_distance_to_goal.unwrap_or_default();
        let distance = PerSide {
            white: nested.white.or(wire.white_rhombus_distance),
            black: nested.black.or(wire.black_rhombus_distance),
        };
        Analysis::new(material, wire.evaluation, distance)
    }
}

impl From<ExecutionWire> for Execution {
    fn from(wire: ExecutionWire) -> Self {
        Execution::new(wire.success, wire.message.or(wire.error))
    }
}
