use super::*;
use crate::bridge::Event;
use crate::bridge::Failure;
use dialoguer::Confirm;
use dialoguer::Select;

/// Operator at the terminal. Prompts run on the blocking pool so the loop's
/// interrupt can still win the race against them.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    fn retry(failure: String) -> Decision {
        Select::new()
            .with_prompt(format!("{}", failure))
            .report(false)
            .items(&["Retry", "Stop"])
            .default(0)
            .interact()
            .map(|choice| match choice {
                0 => Decision::Proceed,
                _ => Decision::Stop,
            })
            .unwrap_or(Decision::Stop)
    }
    fn ready() -> Decision {
        Confirm::new()
            .with_prompt("Ready for the bridge to continue?")
            .default(true)
            .interact()
            .map(|ready| match ready {
                true => Decision::Proceed,
                false => Decision::Stop,
            })
            .unwrap_or(Decision::Stop)
    }
}

#[async_trait::async_trait]
impl Operator for Console {
    async fn decide(&mut self, failure: &Failure) -> Decision {
        let failure = failure.to_string();
        tokio::task::spawn_blocking(move || Self::retry(failure))
            .await
            .unwrap_or(Decision::Stop)
    }
    async fn acknowledge(&mut self) -> Decision {
        tokio::task::spawn_blocking(Self::ready)
            .await
            .unwrap_or(Decision::Stop)
    }
    async fn notify(&mut self, event: &Event) {
        log::debug!("[bridge] {:?}", event);
        println!("{}", event);
    }
}
