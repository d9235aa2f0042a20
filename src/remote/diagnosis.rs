use super::*;
use colored::Colorize;

/// One line of a probe report.
#[derive(Debug, Clone)]
pub struct Check {
    label: &'static str,
    verdict: Result<String, String>,
}

impl Check {
    pub fn label(&self) -> &'static str {
        self.label
    }
    pub fn passed(&self) -> bool {
        self.verdict.is_ok()
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.verdict {
            Ok(detail) => write!(f, "{} {:<16} {}", "PASS".green(), self.label, detail),
            Err(detail) => write!(f, "{} {:<16} {}", "FAIL".red(), self.label, detail),
        }
    }
}

/// Walk through the script API the way the bridge will use it and
/// report what answers. Stops after the first check if the API is absent.
#[derive(Debug, Clone, Default)]
pub struct Diagnosis {
    checks: Vec<Check>,
}

impl Diagnosis {
    pub async fn run<S>(engine: &Scripted<S>) -> Self
    where
        S: Script,
    {
        let mut diagnosis = Self::default();
        diagnosis.record(
            "engine api",
            match engine.probe().await {
                Ok(true) => Ok(String::from("present")),
                Ok(false) => Err(format!("{} is undefined", crate::ENGINE_GLOBAL)),
                Err(e) => Err(e.to_string()),
            },
        );
        if !diagnosis.present() {
            return diagnosis;
        }
        diagnosis.record(
            "methods",
            engine
                .methods()
                .await
                .map(|names| format!("{} found: {}", names.len(), names.join(", "))),
        );
        diagnosis.record("game state", engine.state().await.map(|s| s.to_string()));
        diagnosis.record(
            "legal moves",
            engine.legal().await.map(|moves| match moves.first() {
                Some(m) => format!("{} available, e.g. {}", moves.len(), m),
                None => String::from("none available"),
            }),
        );
        diagnosis.record(
            "analysis",
            engine
                .analysis()
                .await
                .map(|a| format!("evaluation {}", a.evaluation())),
        );
        diagnosis
    }
    /// Whether the script API exists at all.
    pub fn present(&self) -> bool {
        self.checks.first().is_some_and(Check::passed)
    }
    pub fn passed(&self) -> bool {
        !self.checks.is_empty() && self.checks.iter().all(Check::passed)
    }
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }
    fn record<E>(&mut self, label: &'static str, verdict: Result<String, E>)
    where
        E: std::fmt::Display,
    {
        self.checks.push(Check {
            label,
            verdict: verdict.map_err(|e| e.to_string()),
        });
    }
}

impl std::fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.checks
            .iter()
            .enumerate()
            .try_for_each(|(i, check)| writeln!(f, "{}. {}", i + 1, check))
    }
}
