use super::wire::*;
use super::*;
use crate::ENGINE_GLOBAL;
use crate::board::*;
use const_format::concatcp;
use serde::de::DeserializeOwned;

const PROBE: &str = concatcp!("return typeof ", ENGINE_GLOBAL, " !== 'undefined';");
const METHODS: &str = concatcp!("return Object.keys(", ENGINE_GLOBAL, ");");
const STATE: &str = concatcp!("return ", ENGINE_GLOBAL, ".getGameState();");
const LEGAL: &str = concatcp!("return ", ENGINE_GLOBAL, ".getLegalMoves();");
const ANALYSIS: &str = concatcp!("return ", ENGINE_GLOBAL, ".analyzePosition();");
const FINISHED: &str = "return window.gameOver || false;";

/// [`Engine`] backed by script evaluation in the game page.
#[derive(Debug)]
pub struct Scripted<S> {
    script: S,
}

impl<S> Scripted<S>
where
    S: Script,
{
    pub fn new(script: S) -> Self {
        Self { script }
    }
    /// The underlying channel, for transport-level setup such as navigation.
    pub fn script(&self) -> &S {
        &self.script
    }
    /// Script submitting a move. The notation is embedded as a JSON string
    /// literal, which is also a valid JS string literal.
    pub fn submission(notation: &str) -> String {
        format!(
            "return {}.makeMove({});",
            ENGINE_GLOBAL,
            serde_json::Value::from(notation)
        )
    }
    /// Names of the methods the page's script API exposes.
    pub async fn methods(&self) -> Result<Vec<String>, EngineError> {
        self.fetch(METHODS).await
    }
    async fn fetch<T>(&self, script: &str) -> Result<T, EngineError>
    where
        T: DeserializeOwned,
    {
        log::trace!("[scripted] {}", script);
        match self.script.execute(script).await? {
            serde_json::Value::Null => Err(EngineError::Malformed(format!(
                "no value returned by `{}`",
                script
            ))),
            value => serde_json::from_value(value)
                .map_err(|e| EngineError::Malformed(format!("{} (from `{}`)", e, script))),
        }
    }
}

#[async_trait::async_trait]
impl<S> Engine for Scripted<S>
where
    S: Script,
{
    async fn probe(&self) -> Result<bool, EngineError> {
        self.fetch(PROBE).await
    }
    async fn state(&self) -> Result<Snapshot, EngineError> {
        self.fetch::<StateWire>(STATE)
            .await
            .and_then(Snapshot::try_from)
    }
    async fn legal(&self) -> Result<Vec<Move>, EngineError> {
        self.fetch::<Vec<MoveWire>>(LEGAL)
            .await
            .map(|moves| moves.into_iter().map(Move::from).collect())
    }
    async fn analysis(&self) -> Result<Analysis, EngineError> {
        self.fetch::<AnalysisWire>(ANALYSIS).await.map(Analysis::from)
    }
    async fn execute(&self, notation: &str) -> Result<Execution, EngineError> {
        self.fetch::<ExecutionWire>(&Self::submission(notation))
            .await
            .map(Execution::from)
    }
    async fn finished(&self) -> Result<bool, EngineError> {
        self.fetch(FINISHED).await
    }
    async fn release(&self) {
        self.script.close().await
    }
}
