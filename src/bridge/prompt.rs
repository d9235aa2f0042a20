use crate::SAMPLE_MOVES;
use crate::board::*;

/// Renders a position as the user message of an advisory request.
///
/// Pure and deterministic: the same snapshot, legal set and analysis always
/// produce the same text.
#[derive(Debug, Clone, Copy)]
pub struct Prompt;

impl Prompt {
    pub const INSTRUCTION: &'static str = "What is your best move? \
        Reply with ONLY the move notation (e.g., '3-0→3-1') and nothing else.";

    pub fn format(snapshot: &Snapshot, legal: &Legal, analysis: Option<&Analysis>) -> String {
        let mut lines = vec![
            String::from("CURRENT POSITION:"),
            String::new(),
            format!("Turn: {}", snapshot.turn()),
            format!("Current Player: {}", snapshot.player()),
            String::new(),
        ];
        if let Some(analysis) = analysis {
            lines.extend(Self::analysis(analysis));
            lines.push(String::new());
        }
        for color in Color::all() {
            lines.extend(Self::pieces(snapshot, color));
            lines.push(String::new());
        }
        lines.extend(Self::moves(legal));
        lines.push(String::new());
        lines.push(String::from(Self::INSTRUCTION));
        lines.join("\n")
    }

    fn analysis(analysis: &Analysis) -> Vec<String> {
        let distance = |d: Option<u32>| d.map_or_else(|| String::from("N/A"), |d| d.to_string());
        vec![
            String::from("ANALYSIS:"),
            format!(
                "- Material: White {}, Black {}",
                analysis.material().white,
                analysis.material().black
            ),
            format!("- Evaluation: {}", analysis.evaluation()),
            format!(
                "- White Rhombus Distance to Goal: {}",
                distance(analysis.distance().white)
            ),
            format!(
                "- Black Rhombus Distance to Goal: {}",
                distance(analysis.distance().black)
            ),
        ]
    }

    fn pieces(snapshot: &Snapshot, color: Color) -> Vec<String> {
        let pieces = snapshot
            .side(color)
            .map(|p| format!("  - {}", p))
            .collect::<Vec<_>>();
        std::iter::once(format!(
            "{} PIECES ({}):",
            color.to_string().to_uppercase(),
            pieces.len()
        ))
        .chain(match pieces.is_empty() {
            true => vec![String::from("  (none)")],
            false => pieces,
        })
        .collect()
    }

    fn moves(legal: &Legal) -> Vec<String> {
        let mut lines = vec![
            format!("YOU HAVE {} LEGAL MOVES.", legal.len()),
            String::new(),
            String::from("Sample moves available:"),
        ];
        lines.extend(
            legal
                .samples(SAMPLE_MOVES)
                .iter()
                .map(|m| format!("  - {}", m.describe())),
        );
        if legal.len() > SAMPLE_MOVES {
            lines.push(format!(
                "  ... and {} more moves",
                legal.len() - SAMPLE_MOVES
            ));
        }
        lines
    }
}
