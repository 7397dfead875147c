pub mod adapter;
pub mod progress;

pub use adapter::AdapterRecord;
pub use progress::{REPAIR_STEPS, STEP_COUNT, StepStatus, UiEvent};
