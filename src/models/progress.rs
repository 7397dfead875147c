use serde::{Deserialize, Serialize};

/// Display names for the step tracker, in execution order.
pub const REPAIR_STEPS: [&str; 5] = [
    "Get Adapters",
    "Reset Network Adapter",
    "Reset DNS",
    "Reconnect Network",
    "Complete",
];

pub const STEP_COUNT: usize = REPAIR_STEPS.len();

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Waiting,
    Running,
    Completed,
    Error,
}

/// Message-queue payload between the repair worker and the presentation loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Log(String),
    Step { index: usize, status: StepStatus },
    Finished,
}
