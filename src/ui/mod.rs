use crate::models::{REPAIR_STEPS, STEP_COUNT, StepStatus, UiEvent};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// The two sink interfaces the repair worker reports through: a free-text
/// log and per-step status transitions. Send failures are ignored so the
/// worker never dies because the presentation side went away.
#[derive(Clone)]
pub struct Reporter {
    tx: UnboundedSender<UiEvent>,
}

impl Reporter {
    pub fn new(tx: UnboundedSender<UiEvent>) -> Self {
        Self { tx }
    }

    pub fn log(&self, message: impl Into<String>) {
        let _ = self.tx.send(UiEvent::Log(message.into()));
    }

    pub fn set_step(&self, index: usize, status: StepStatus) {
        if index >= STEP_COUNT {
            return;
        }
        let _ = self.tx.send(UiEvent::Step { index, status });
    }

    pub fn finished(&self) {
        let _ = self.tx.send(UiEvent::Finished);
    }
}

/// Console renderer. Prints the initial all-waiting tracker, then consumes
/// events until the worker signals completion.
pub async fn render_events(mut rx: UnboundedReceiver<UiEvent>) {
    for (index, name) in REPAIR_STEPS.iter().enumerate() {
        println!(
            "[{}/{}] {} {}",
            index + 1,
            STEP_COUNT,
            status_marker(StepStatus::Waiting),
            name
        );
    }

    while let Some(event) = rx.recv().await {
        match event {
            UiEvent::Log(line) => println!("{}", line),
            UiEvent::Step { index, status } => {
                println!(
                    "[{}/{}] {} {}",
                    index + 1,
                    STEP_COUNT,
                    status_marker(status),
                    REPAIR_STEPS[index]
                );
            }
            UiEvent::Finished => break,
        }
    }
}

fn status_marker(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Waiting | StepStatus::Running => "⏳",
        StepStatus::Completed => "✅",
        StepStatus::Error => "❌",
    }
}
