use crate::advisor::Advisor;
use crate::advisor::ChatClient;
use crate::advisor::Credentials;
use crate::bridge::Arbiter;
use crate::bridge::ArbiterConfig;
use crate::bridge::Interrupt;
use crate::bridge::Outcome;
use crate::config::Args;
use crate::operator::Console;
use crate::operator::Decision;
use crate::operator::Operator;
use crate::operator::Unattended;
use crate::remote::Diagnosis;
use crate::remote::Engine;
use crate::remote::Scripted;
use crate::webdriver::Session;
use anyhow::Context;
use clap::Parser;
use std::time::Duration;

/// Operator-facing entry points.
pub struct Cli;

impl Cli {
    /// Open the game, wait for the human, then play the configured side.
    pub async fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        let credentials = Credentials::from_env()?;
        let interrupt = Interrupt::ctrl_c();
        let engine = Self::open(&args).await?;
        if !Self::ready(&engine, &args.game, args.load_delay(), &interrupt).await? {
            return Ok(());
        }
        let advisor = ChatClient::new(&args.advisor(), &credentials);
        let outcome = match args.unattended {
            true => Self::play(engine, advisor, Unattended, args.arbiter(), interrupt).await,
            false => Self::play(engine, advisor, Console, args.arbiter(), interrupt).await,
        };
        log::info!("[cli] {}", outcome);
        Ok(())
    }

    /// Check the engine's script API without playing.
    pub async fn probe() -> anyhow::Result<()> {
        let args = Args::parse();
        let interrupt = Interrupt::ctrl_c();
        let engine = Self::open(&args).await?;
        let diagnosis = tokio::select! {
            biased;
            _ = interrupt.wait() => None,
            diagnosis = async {
                tokio::time::sleep(args.load_delay()).await;
                Diagnosis::run(&engine).await
            } => Some(diagnosis),
        };
        engine.release().await;
        let Some(diagnosis) = diagnosis else {
            return Ok(());
        };
        println!("{}", diagnosis);
        match diagnosis.present() {
            true => Ok(()),
            false => anyhow::bail!("{} not found on {}", crate::ENGINE_GLOBAL, args.game),
        }
    }
}

impl Cli {
    async fn open(args: &Args) -> anyhow::Result<Scripted<Session>> {
        let session = Session::open(&args.webdriver())
            .await
            .with_context(|| format!("opening a browser through {}", args.webdriver))?;
        let engine = Scripted::new(session);
        if let Err(e) = engine.script().navigate(&args.game).await {
            engine.release().await;
            return Err(e).with_context(|| format!("loading {}", args.game));
        }
        Ok(engine)
    }

    /// Load wait and script check, raced against the interrupt. `false` means
    /// the operator stopped first. The engine is released unless it is ready.
    async fn ready<E: Engine>(
        engine: &E,
        game: &str,
        delay: Duration,
        interrupt: &Interrupt,
    ) -> anyhow::Result<bool> {
        let prepared = tokio::select! {
            biased;
            _ = interrupt.wait() => None,
            prepared = Self::prepare(engine, game, delay) => Some(prepared),
        };
        match prepared {
            Some(Ok(())) => Ok(true),
            Some(Err(e)) => {
                engine.release().await;
                Err(e)
            }
            None => {
                log::warn!("[cli] stopped before the game loaded");
                engine.release().await;
                Ok(false)
            }
        }
    }

    async fn prepare<E: Engine>(engine: &E, game: &str, delay: Duration) -> anyhow::Result<()> {
        log::info!("[cli] letting the game load for {:?}", delay);
        tokio::time::sleep(delay).await;
        let present = engine
            .probe()
            .await
            .context("checking for the engine script API")?;
        match present {
            true => {
                log::info!("[cli] engine script API detected");
                Ok(())
            }
            false => anyhow::bail!(
                "{} not found on {}; is the page serving romgon-engine-api.js?",
                crate::ENGINE_GLOBAL,
                game
            ),
        }
    }

    /// Startup acknowledgment, then the loop. The engine is released either way.
    async fn play<A, O>(
        engine: Scripted<Session>,
        advisor: A,
        mut operator: O,
        config: ArbiterConfig,
        interrupt: Interrupt,
    ) -> Outcome
    where
        A: Advisor,
        O: Operator,
    {
        println!(
            "Start a game in the browser and play {}. The bridge plays {}.",
            config.side.opponent(),
            config.side
        );
        let started = tokio::select! {
            biased;
            _ = interrupt.wait() => Decision::Stop,
            decision = operator.acknowledge() => decision,
        };
        if started == Decision::Stop {
            interrupt.trip();
        }
        Arbiter::new(engine, advisor, operator, config, interrupt)
            .run()
            .await
    }
}
