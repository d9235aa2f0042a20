//! In-memory collaborators for exercising the arbitration loop.
use super::*;
use crate::advisor::Advisor;
use crate::advisor::AdvisoryError;
use crate::board::*;
use crate::operator::Decision;
use crate::operator::Operator;
use crate::remote::Engine;
use crate::remote::EngineError;
use crate::remote::Execution;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Scripted game. Side to move and turn number are read from queues that
/// repeat their last entry; the game ends once `finish_after` moves were
/// accepted.
#[derive(Debug, Default)]
pub struct FakeEngine {
    players: Mutex<VecDeque<Color>>,
    turns: Mutex<VecDeque<u32>>,
    legal: Vec<Move>,
    missing: bool,
    flaky: Option<usize>,
    polls: AtomicUsize,
    executions: Mutex<VecDeque<Execution>>,
    finish_after: Option<usize>,
    accepted: AtomicUsize,
    states: AtomicUsize,
    executed: Mutex<Vec<String>>,
    released: AtomicBool,
}

impl FakeEngine {
    pub fn new(players: &[Color], legal: &[&str]) -> Self {
        Self {
            players: Mutex::new(players.iter().copied().collect()),
            turns: Mutex::new(VecDeque::from([12])),
            legal: legal.iter().map(|n| Move::new(*n)).collect(),
            ..Self::default()
        }
    }
    pub fn turns(self, turns: &[u32]) -> Self {
        *self.turns.lock().unwrap() = turns.iter().copied().collect();
        self
    }
    /// Script API not present on the page.
    pub fn absent(mut self) -> Self {
        self.missing = true;
        self
    }
    /// Every `n`-th game-over check fails.
    pub fn flaky(mut self, n: usize) -> Self {
        self.flaky = Some(n);
        self
    }
    pub fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }
    pub fn finish_after(mut self, moves: usize) -> Self {
        self.finish_after = Some(moves);
        self
    }
    pub fn answering(self, execution: Execution) -> Self {
        self.executions.lock().unwrap().push_back(execution);
        self
    }
    pub fn states(&self) -> usize {
        self.states.load(Ordering::SeqCst)
    }
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
    pub fn released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Engine for FakeEngine {
    async fn probe(&self) -> Result<bool, EngineError> {
        Ok(!self.missing)
    }
    async fn state(&self) -> Result<Snapshot, EngineError> {
        self.states.fetch_add(1, Ordering::SeqCst);
        let mut players = self.players.lock().unwrap();
        let player = match players.len() {
            0 => return Err(EngineError::Malformed("no player".into())),
            1 => players[0],
            _ => players.pop_front().unwrap(),
        };
        let mut turns = self.turns.lock().unwrap();
        let turn = match turns.len() {
            1 => turns[0],
            _ => turns.pop_front().unwrap_or_default(),
        };
        Ok(Snapshot::new(turn, player, vec![]))
    }
    async fn legal(&self) -> Result<Vec<Move>, EngineError> {
        Ok(self.legal.clone())
    }
    async fn analysis(&self) -> Result<Analysis, EngineError> {
        Err(EngineError::Transport("analyzePosition is not a function".into()))
    }
    async fn execute(&self, notation: &str) -> Result<Execution, EngineError> {
        self.executed.lock().unwrap().push(notation.to_string());
        let execution = self
            .executions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(Execution::accepted);
        if execution.success() {
            self.accepted.fetch_add(1, Ordering::SeqCst);
        }
        Ok(execution)
    }
    async fn finished(&self) -> Result<bool, EngineError> {
        let poll = self.polls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.flaky.is_some_and(|n| poll % n == 0) {
            return Err(EngineError::Transport("target window already closed".into()));
        }
        Ok(self
            .finish_after
            .is_some_and(|n| self.accepted.load(Ordering::SeqCst) >= n))
    }
    async fn release(&self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

/// Replays canned answers; unavailable once they run out.
#[derive(Debug, Default)]
pub struct FakeAdvisor {
    answers: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
    hang: bool,
}

impl FakeAdvisor {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            ..Self::default()
        }
    }
    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::default()
        }
    }
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Advisor for FakeAdvisor {
    async fn propose(&self, prompt: &str, preamble: &str) -> Result<String, AdvisoryError> {
        assert!(prompt.starts_with("CURRENT POSITION:"));
        assert!(!preamble.is_empty());
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hang {
            std::future::pending::<()>().await;
        }
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(AdvisoryError::Empty)
    }
}

/// Answers from queues (defaulting to proceed) and records every event.
#[derive(Debug, Default)]
pub struct FakeOperator {
    decisions: VecDeque<Decision>,
    acks: VecDeque<Decision>,
    hang: bool,
    pub asked: usize,
    pub events: Vec<Event>,
}

impl FakeOperator {
    pub fn deciding(decisions: &[Decision]) -> Self {
        Self {
            decisions: decisions.iter().copied().collect(),
            ..Self::default()
        }
    }
    pub fn acknowledging(acks: &[Decision]) -> Self {
        Self {
            acks: acks.iter().copied().collect(),
            ..Self::default()
        }
    }
    /// Never answers a question.
    pub fn absent() -> Self {
        Self {
            hang: true,
            ..Self::default()
        }
    }
    pub fn faults(&self) -> Vec<&Failure> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Faulted(failure) => Some(failure),
                _ => None,
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl Operator for FakeOperator {
    async fn decide(&mut self, _: &Failure) -> Decision {
        self.asked += 1;
        if self.hang {
            std::future::pending::<()>().await;
        }
        self.decisions.pop_front().unwrap_or(Decision::Proceed)
    }
    async fn acknowledge(&mut self) -> Decision {
        if self.hang {
            std::future::pending::<()>().await;
        }
        self.acks.pop_front().unwrap_or(Decision::Proceed)
    }
    async fn notify(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
