use super::*;
use crate::advisor::Advisor;
use crate::board::*;
use crate::operator::Decision;
use crate::operator::Operator;
use crate::remote::Engine;
use std::future::Future;
use std::time::Duration;

/// The turn-arbitration loop.
///
/// Owns the engine connection, the advisor and the operator for the length
/// of one game. Runs [`Phase`] to [`Phase`] until the game ends or someone
/// stops it, and releases the engine on every way out.
///
/// One acting cycle is strictly ordered:
/// - extract position and legal moves
/// - optionally fetch the engine's analysis (best-effort)
/// - render the prompt and ask the advisor
/// - resolve the answer against the legal set
/// - submit once, or report the move for the human to play
///
/// Every remote call is raced against the [`Interrupt`] and bounded by the
/// matching timeout in [`ArbiterConfig`].
pub struct Arbiter<E, A, O> {
    engine: E,
    advisor: A,
    operator: O,
    config: ArbiterConfig,
    interrupt: Interrupt,
    moves: usize,
    fallbacks: usize,
    faults: usize,
    announced: Option<u32>,
    /// Position of the last advise-only suggestion, until the human plays it.
    suggested: Option<Snapshot>,
}

impl<E, A, O> Arbiter<E, A, O>
where
    E: Engine,
    A: Advisor,
    O: Operator,
{
    pub fn new(
        engine: E,
        advisor: A,
        operator: O,
        config: ArbiterConfig,
        interrupt: Interrupt,
    ) -> Self {
        Self {
            engine,
            advisor,
            operator,
            config,
            interrupt,
            moves: 0,
            fallbacks: 0,
            faults: 0,
            announced: None,
            suggested: None,
        }
    }

    /// Play until game over or stop. The engine is released before returning.
    pub async fn run(&mut self) -> Outcome {
        log::info!("[arbiter] playing {}", self.config.side);
        let side = self.config.side;
        self.operator.notify(&Event::Started { side }).await;
        let mut phase = Phase::WaitTurn;
        while !phase.is_terminal() {
            log::trace!("[arbiter] {}", phase);
            phase = self.step(phase).await;
        }
        self.engine.release().await;
        let outcome = Outcome {
            ending: match phase {
                Phase::GameOver => Ending::GameOver,
                _ => Ending::Stopped,
            },
            moves: self.moves,
            fallbacks: self.fallbacks,
        };
        log::info!("[arbiter] {}", outcome);
        let moves = self.moves;
        let event = match outcome.ending {
            Ending::GameOver => Event::GameOver { moves },
            Ending::Stopped => Event::Stopped { moves },
        };
        self.operator.notify(&event).await;
        outcome
    }

    /// Advance one transition.
    pub async fn step(&mut self, phase: Phase) -> Phase {
        match phase {
            Phase::WaitTurn => self.wait_turn().await.unwrap_or_else(Self::fail),
            Phase::Act => self.act().await.unwrap_or_else(Self::fail),
            Phase::WaitHumanAck => self.wait_ack().await,
            Phase::ErrorRetry(failure) => self.retry(failure).await,
            terminal @ (Phase::GameOver | Phase::Stopped) => terminal,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
    pub fn advisor(&self) -> &A {
        &self.advisor
    }
    pub fn operator(&self) -> &O {
        &self.operator
    }
    pub fn moves(&self) -> usize {
        self.moves
    }
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }
}

impl<E, A, O> Arbiter<E, A, O>
where
    E: Engine,
    A: Advisor,
    O: Operator,
{
    async fn wait_turn(&mut self) -> Result<Phase, Failure> {
        let limit = self.config.engine_timeout;
        if self.guard(Stage::Poll, limit, self.engine.finished()).await? {
            return Ok(Phase::GameOver);
        }
        let snapshot = self.guard(Stage::Poll, limit, self.engine.state()).await?;
        let played = self.suggested.as_ref() != Some(&snapshot);
        if snapshot.player() == self.config.side && played {
            return Ok(Phase::Act);
        }
        self.faults = 0;
        if snapshot.player() == self.config.side {
            log::trace!("[arbiter] suggestion for turn {} not played yet", snapshot.turn());
        } else if self.announced != Some(snapshot.turn()) {
            self.announced = Some(snapshot.turn());
            let (turn, player) = (snapshot.turn(), snapshot.player());
            self.operator.notify(&Event::Waiting { turn, player }).await;
        }
        self.pause(self.config.poll).await?;
        Ok(Phase::WaitTurn)
    }

    async fn act(&mut self) -> Result<Phase, Failure> {
        self.announced = None;
        let limit = self.config.engine_timeout;
        let Extraction { snapshot, legal } =
            self.guard(Stage::Extract, limit, extract(&self.engine)).await?;
        if snapshot.player() != self.config.side {
            log::debug!("[arbiter] side changed to {} before acting", snapshot.player());
            return Ok(Phase::WaitTurn);
        }
        let analysis = match self.config.analysis {
            true => self.analysis().await?,
            false => None,
        };
        let prompt = Prompt::format(&snapshot, &legal, analysis.as_ref());
        log::debug!("[arbiter] prompt\n{}", prompt);
        let (turn, count) = (snapshot.turn(), legal.len());
        self.operator.notify(&Event::Thinking { turn, legal: count }).await;
        let proposed = self
            .guard(
                Stage::Advise,
                self.config.advisor_timeout,
                self.advisor.propose(&prompt, &self.config.preamble),
            )
            .await?;
        self.operator.notify(&Event::Proposed(proposed.clone())).await;
        let resolution = resolve(&proposed, &legal)
            .ok_or_else(|| Failure::new(Stage::Extract, Fault::NoLegalMoves))?;
        if resolution.fallback {
            self.fallbacks += 1;
            log::warn!(
                "[arbiter] {:?} is not a legal notation, falling back to {}",
                resolution.proposed,
                resolution.notation
            );
            let event = Event::Fallback {
                proposed: resolution.proposed.clone(),
                chosen: resolution.notation.clone(),
            };
            self.operator.notify(&event).await;
        }
        match self.config.submission {
            Submission::Execute => self.submit(resolution.notation).await,
            Submission::Advise => {
                self.suggested = Some(snapshot);
                self.moves += 1;
                self.faults = 0;
                log::info!("[arbiter] move {} · suggested {}", self.moves, resolution.notation);
                let event = Event::Suggested {
                    number: self.moves,
                    notation: resolution.notation,
                };
                self.operator.notify(&event).await;
                Ok(Phase::WaitHumanAck)
            }
        }
    }

    /// Exactly one submission; a refusal is reported, never resubmitted.
    async fn submit(&mut self, notation: String) -> Result<Phase, Failure> {
        let limit = self.config.engine_timeout;
        let execution = self
            .guard(Stage::Submit, limit, self.engine.execute(&notation))
            .await?;
        if !execution.success() {
            let message = execution.message().unwrap_or("move rejected").to_string();
            return Err(Failure::new(Stage::Submit, Fault::Rejected(message)));
        }
        self.moves += 1;
        self.faults = 0;
        log::info!("[arbiter] move {} · {}", self.moves, notation);
        let event = Event::Moved {
            number: self.moves,
            notation,
        };
        self.operator.notify(&event).await;
        Ok(match self.config.acknowledge {
            Acknowledge::EachMove => Phase::WaitHumanAck,
            Acknowledge::Never => Phase::WaitTurn,
        })
    }

    /// Analysis failures only cost the prompt some context.
    async fn analysis(&self) -> Result<Option<Analysis>, Failure> {
        let limit = self.config.engine_timeout;
        match self.guard(Stage::Extract, limit, self.engine.analysis()).await {
            Ok(analysis) => Ok(Some(analysis)),
            Err(failure) if failure.fault == Fault::Interrupted => Err(failure),
            Err(failure) => {
                log::warn!("[arbiter] analysis skipped: {}", failure);
                Ok(None)
            }
        }
    }

    async fn retry(&mut self, failure: Failure) -> Phase {
        self.faults += 1;
        log::warn!(
            "[arbiter] {} ({} of {} consecutive)",
            failure,
            self.faults,
            self.config.max_faults
        );
        self.operator.notify(&Event::Faulted(failure.clone())).await;
        if self.faults >= self.config.max_faults {
            log::error!("[arbiter] too many consecutive failures, stopping");
            return Phase::Stopped;
        }
        let interrupt = &self.interrupt;
        let operator = &mut self.operator;
        let decision = tokio::select! {
            biased;
            _ = interrupt.wait() => Decision::Stop,
            decision = operator.decide(&failure) => decision,
        };
        match decision {
            Decision::Proceed => Phase::WaitTurn,
            Decision::Stop => Phase::Stopped,
        }
    }

    async fn wait_ack(&mut self) -> Phase {
        let limit = self.config.ack_timeout;
        let interrupt = &self.interrupt;
        let operator = &mut self.operator;
        let acknowledged = async move {
            match limit {
                None => operator.acknowledge().await,
                Some(limit) => tokio::time::timeout(limit, operator.acknowledge())
                    .await
                    .unwrap_or_else(|_| {
                        log::info!("[arbiter] no acknowledgment after {:?}, continuing", limit);
                        Decision::Proceed
                    }),
            }
        };
        let decision = tokio::select! {
            biased;
            _ = interrupt.wait() => Decision::Stop,
            decision = acknowledged => decision,
        };
        match decision {
            Decision::Proceed => Phase::WaitTurn,
            Decision::Stop => Phase::Stopped,
        }
    }
}

impl<E, A, O> Arbiter<E, A, O>
where
    E: Engine,
    A: Advisor,
    O: Operator,
{
    /// Race a remote call against the interrupt and its time limit.
    async fn guard<T, X, F>(&self, stage: Stage, limit: Duration, call: F) -> Result<T, Failure>
    where
        F: Future<Output = Result<T, X>>,
        X: Into<Fault>,
    {
        tokio::select! {
            biased;
            _ = self.interrupt.wait() => Err(Failure::new(stage, Fault::Interrupted)),
            result = tokio::time::timeout(limit, call) => match result {
                Ok(result) => result.map_err(|e| Failure::new(stage, e.into())),
                Err(_) => Err(Failure::new(stage, Fault::Timeout(limit))),
            },
        }
    }

    async fn pause(&self, duration: Duration) -> Result<(), Failure> {
        tokio::select! {
            biased;
            _ = self.interrupt.wait() => Err(Failure::new(Stage::Poll, Fault::Interrupted)),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }

    fn fail(failure: Failure) -> Phase {
        match failure.fault {
            Fault::Interrupted => Phase::Stopped,
            Fault::NoLegalMoves => Phase::GameOver,
            _ => Phase::ErrorRetry(failure),
        }
    }
}

impl<E, A, O> std::fmt::Debug for Arbiter<E, A, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arbiter")
            .field("side", &self.config.side)
            .field("moves", &self.moves)
            .field("fallbacks", &self.fallbacks)
            .field("faults", &self.faults)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::AdvisoryError;
    use crate::bridge::fakes::*;
    use crate::remote::Execution;

    const LEGAL: [&str; 2] = ["3-6→3-5", "4-1→4-2"];

    fn arbiter(
        engine: FakeEngine,
        advisor: FakeAdvisor,
        operator: FakeOperator,
        config: ArbiterConfig,
    ) -> Arbiter<FakeEngine, FakeAdvisor, FakeOperator> {
        Arbiter::new(engine, advisor, operator, config, Interrupt::default())
    }

    #[tokio::test]
    async fn plays_an_exact_answer() {
        let engine = FakeEngine::new(&[Color::Black], &LEGAL).finish_after(1);
        let advisor = FakeAdvisor::new(&["4-1→4-2"]);
        let mut arbiter = arbiter(engine, advisor, FakeOperator::default(), ArbiterConfig::default());
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::GameOver);
        assert_eq!(outcome.moves, 1);
        assert_eq!(outcome.fallbacks, 0);
        assert_eq!(arbiter.engine().executed(), vec!["4-1→4-2"]);
        assert!(arbiter.engine().released());
        assert!(arbiter.operator().events.contains(&Event::Moved {
            number: 1,
            notation: String::from("4-1→4-2"),
        }));
        assert_eq!(arbiter.operator().events.last(), Some(&Event::GameOver { moves: 1 }));
    }

    #[tokio::test]
    async fn falls_back_to_first_legal_move() {
        let engine = FakeEngine::new(&[Color::Black], &LEGAL).finish_after(1);
        let advisor = FakeAdvisor::new(&["I would play 4-1→4-2"]);
        let mut arbiter = arbiter(engine, advisor, FakeOperator::default(), ArbiterConfig::default());
        let outcome = arbiter.run().await;
        assert_eq!(outcome.fallbacks, 1);
        assert_eq!(arbiter.engine().executed(), vec!["3-6→3-5"]);
        assert!(arbiter.operator().events.contains(&Event::Fallback {
            proposed: String::from("I would play 4-1→4-2"),
            chosen: String::from("3-6→3-5"),
        }));
    }

    #[tokio::test]
    async fn no_legal_moves_ends_the_game_before_advising() {
        let engine = FakeEngine::new(&[Color::Black], &[]);
        let mut arbiter = arbiter(
            engine,
            FakeAdvisor::new(&["3-6→3-5"]),
            FakeOperator::default(),
            ArbiterConfig::default(),
        );
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::GameOver);
        assert_eq!(arbiter.advisor().calls(), 0);
        assert!(arbiter.engine().executed().is_empty());
        assert!(arbiter.engine().released());
    }

    #[tokio::test]
    async fn finished_game_is_never_read() {
        let engine = FakeEngine::new(&[Color::Black], &LEGAL).finish_after(0);
        let mut arbiter = arbiter(
            engine,
            FakeAdvisor::default(),
            FakeOperator::default(),
            ArbiterConfig::default(),
        );
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::GameOver);
        assert_eq!(arbiter.engine().states(), 0);
        assert_eq!(arbiter.advisor().calls(), 0);
    }

    #[tokio::test]
    async fn rejection_is_reported_and_not_resubmitted() {
        let engine = FakeEngine::new(&[Color::Black], &LEGAL)
            .answering(Execution::rejected("occupied by own piece"));
        let operator = FakeOperator::deciding(&[Decision::Stop]);
        let mut arbiter = arbiter(
            engine,
            FakeAdvisor::new(&["3-6→3-5"]),
            operator,
            ArbiterConfig::default(),
        );
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::Stopped);
        assert_eq!(outcome.moves, 0);
        assert_eq!(arbiter.engine().executed(), vec!["3-6→3-5"]);
        assert_eq!(
            arbiter.operator().faults(),
            vec![&Failure::new(
                Stage::Submit,
                Fault::Rejected(String::from("occupied by own piece"))
            )]
        );
        assert_eq!(arbiter.operator().asked, 1);
        assert!(arbiter.engine().released());
    }

    #[tokio::test(start_paused = true)]
    async fn waits_while_the_human_thinks() {
        let engine = FakeEngine::new(&[Color::White, Color::White, Color::Black], &LEGAL)
            .finish_after(1);
        let mut arbiter = arbiter(
            engine,
            FakeAdvisor::new(&["3-6→3-5"]),
            FakeOperator::default(),
            ArbiterConfig::default(),
        );
        let start = tokio::time::Instant::now();
        let outcome = arbiter.run().await;
        assert_eq!(outcome.moves, 1);
        assert!(start.elapsed() >= Duration::from_secs(4));
        assert_eq!(arbiter.engine().states(), 4);
        let waits = arbiter
            .operator()
            .events
            .iter()
            .filter(|e| matches!(e, Event::Waiting { .. }))
            .count();
        assert_eq!(waits, 1);
    }

    #[tokio::test]
    async fn interrupt_stops_and_releases() {
        let interrupt = Interrupt::default();
        interrupt.trip();
        let engine = FakeEngine::new(&[Color::Black], &LEGAL);
        let mut arbiter = Arbiter::new(
            engine,
            FakeAdvisor::new(&["3-6→3-5"]),
            FakeOperator::default(),
            ArbiterConfig::default(),
            interrupt,
        );
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::Stopped);
        assert!(arbiter.engine().executed().is_empty());
        assert!(arbiter.engine().released());
        assert_eq!(arbiter.operator().events.last(), Some(&Event::Stopped { moves: 0 }));
    }

    #[tokio::test]
    async fn consecutive_faults_are_capped() {
        let engine = FakeEngine::new(&[Color::Black], &LEGAL);
        let config = ArbiterConfig {
            max_faults: 3,
            ..ArbiterConfig::default()
        };
        let mut arbiter = arbiter(engine, FakeAdvisor::default(), FakeOperator::default(), config);
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::Stopped);
        assert_eq!(arbiter.advisor().calls(), 3);
        assert_eq!(arbiter.operator().asked, 2);
        assert!(
            arbiter
                .operator()
                .faults()
                .iter()
                .all(|f| f.stage == Stage::Advise
                    && f.fault == Fault::AdvisoryUnavailable(AdvisoryError::Empty))
        );
    }

    fn trip_after(interrupt: &Interrupt, delay: Duration) {
        let interrupt = interrupt.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            interrupt.trip();
        });
    }

    #[tokio::test(start_paused = true)]
    async fn advise_only_never_submits() {
        let engine = FakeEngine::new(&[Color::Black], &LEGAL).turns(&[12, 12, 12, 14]);
        let config = ArbiterConfig {
            submission: Submission::Advise,
            ..ArbiterConfig::default()
        };
        let operator = FakeOperator::acknowledging(&[Decision::Proceed, Decision::Stop]);
        let advisor = FakeAdvisor::new(&["4-1→4-2", "bogus"]);
        let mut arbiter = arbiter(engine, advisor, operator, config);
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::Stopped);
        assert_eq!(outcome.moves, 2);
        assert!(arbiter.engine().executed().is_empty());
        assert!(arbiter.operator().events.contains(&Event::Suggested {
            number: 2,
            notation: String::from("3-6→3-5"),
        }));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_advisor_times_out() {
        let engine = FakeEngine::new(&[Color::Black], &LEGAL);
        let config = ArbiterConfig {
            advisor_timeout: Duration::from_secs(5),
            ..ArbiterConfig::default()
        };
        let operator = FakeOperator::deciding(&[Decision::Stop]);
        let mut arbiter = arbiter(engine, FakeAdvisor::hanging(), operator, config);
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::Stopped);
        assert_eq!(
            arbiter.operator().faults(),
            vec![&Failure::new(Stage::Advise, Fault::Timeout(Duration::from_secs(5)))]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unanswered_acknowledgment_expires() {
        let engine = FakeEngine::new(&[Color::Black], &LEGAL).finish_after(1);
        let config = ArbiterConfig {
            acknowledge: Acknowledge::EachMove,
            ack_timeout: Some(Duration::from_secs(10)),
            ..ArbiterConfig::default()
        };
        let mut arbiter = arbiter(engine, FakeAdvisor::new(&["3-6→3-5"]), FakeOperator::absent(), config);
        let start = tokio::time::Instant::now();
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::GameOver);
        assert_eq!(outcome.moves, 1);
        assert!(start.elapsed() >= Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn unplayed_suggestion_is_not_advised_again() {
        let interrupt = Interrupt::default();
        let config = ArbiterConfig {
            submission: Submission::Advise,
            ..ArbiterConfig::default()
        };
        let mut arbiter = Arbiter::new(
            FakeEngine::new(&[Color::Black], &LEGAL),
            FakeAdvisor::new(&["4-1→4-2", "4-1→4-2"]),
            FakeOperator::default(),
            config,
            interrupt.clone(),
        );
        trip_after(&interrupt, Duration::from_secs(60));
        let start = tokio::time::Instant::now();
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::Stopped);
        assert_eq!(outcome.moves, 1);
        assert_eq!(arbiter.advisor().calls(), 1);
        assert!(start.elapsed() >= Duration::from_secs(60));
        assert!(arbiter.operator().faults().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn successful_polls_clear_the_fault_count() {
        let interrupt = Interrupt::default();
        let mut arbiter = Arbiter::new(
            FakeEngine::new(&[Color::White], &LEGAL).flaky(3),
            FakeAdvisor::default(),
            FakeOperator::default(),
            ArbiterConfig::default(),
            interrupt.clone(),
        );
        trip_after(&interrupt, Duration::from_secs(60));
        let start = tokio::time::Instant::now();
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::Stopped);
        assert!(start.elapsed() >= Duration::from_secs(60));
        let faults = arbiter.operator().faults().len();
        assert!(faults > ArbiterConfig::default().max_faults);
        assert_eq!(arbiter.operator().asked, faults);
        assert!(arbiter.engine().polls() >= 3 * faults);
    }

    #[tokio::test]
    async fn blank_answer_falls_back() {
        let engine = FakeEngine::new(&[Color::Black], &LEGAL).finish_after(1);
        let advisor = FakeAdvisor::new(&[""]);
        let mut arbiter = arbiter(engine, advisor, FakeOperator::default(), ArbiterConfig::default());
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::GameOver);
        assert_eq!(outcome.fallbacks, 1);
        assert_eq!(arbiter.engine().executed(), vec!["3-6→3-5"]);
        assert!(arbiter.operator().faults().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn interrupt_during_advice_stops_and_releases() {
        let interrupt = Interrupt::default();
        let mut arbiter = Arbiter::new(
            FakeEngine::new(&[Color::Black], &LEGAL),
            FakeAdvisor::hanging(),
            FakeOperator::default(),
            ArbiterConfig::default(),
            interrupt.clone(),
        );
        trip_after(&interrupt, Duration::from_secs(5));
        let start = tokio::time::Instant::now();
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::Stopped);
        assert!(start.elapsed() < ArbiterConfig::default().advisor_timeout);
        assert_eq!(arbiter.advisor().calls(), 1);
        assert!(arbiter.operator().faults().is_empty());
        assert!(arbiter.engine().executed().is_empty());
        assert!(arbiter.engine().released());
    }

    #[tokio::test(start_paused = true)]
    async fn interrupt_during_retry_question_stops_and_releases() {
        let interrupt = Interrupt::default();
        let mut arbiter = Arbiter::new(
            FakeEngine::new(&[Color::Black], &LEGAL),
            FakeAdvisor::default(),
            FakeOperator::absent(),
            ArbiterConfig::default(),
            interrupt.clone(),
        );
        trip_after(&interrupt, Duration::from_secs(5));
        let outcome = arbiter.run().await;
        assert_eq!(outcome.ending, Ending::Stopped);
        assert_eq!(arbiter.operator().asked, 1);
        assert_eq!(arbiter.operator().faults().len(), 1);
        assert!(arbiter.engine().released());
        assert_eq!(arbiter.operator().events.last(), Some(&Event::Stopped { moves: 0 }));
    }
}
