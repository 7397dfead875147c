//! Shared fakes for exercising the repair sequence without a real OS.

use crate::error::{AppError, Result};
use crate::models::UiEvent;
use crate::net::dns::{DnsAdapterConfig, DnsProvider, DnsSession};
use crate::runner::{CommandOutput, CommandRunner};
use crate::ui::Reporter;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub fn reporter_pair() -> (Reporter, UnboundedReceiver<UiEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Reporter::new(tx), rx)
}

pub fn drain_events(rx: &mut UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Command runner returning canned output, keyed by the full command line.
/// Unknown commands succeed with empty output; `failing_spawns` makes every
/// invocation fail the way a missing binary would.
#[derive(Default)]
pub struct FakeRunner {
    calls: Mutex<Vec<String>>,
    outputs: Mutex<HashMap<String, CommandOutput>>,
    fail_spawns: bool,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_spawns() -> Self {
        Self {
            fail_spawns: true,
            ..Self::default()
        }
    }

    pub fn with_output(self, command_line: &str, output: CommandOutput) -> Self {
        self.outputs
            .lock()
            .unwrap()
            .insert(command_line.to_string(), output);
        self
    }

    pub fn with_stdout(self, command_line: &str, stdout: &str) -> Self {
        self.with_output(
            command_line,
            CommandOutput {
                exit_code: Some(0),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        )
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let command_line = if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        };
        self.calls.lock().unwrap().push(command_line.clone());

        if self.fail_spawns {
            return Err(AppError::Command(format!("Failed to run {}", program)));
        }

        Ok(self
            .outputs
            .lock()
            .unwrap()
            .get(&command_line)
            .cloned()
            .unwrap_or(CommandOutput {
                exit_code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            }))
    }
}

/// Management-interface fake: a fixed set of live adapter configurations
/// and a fixed result code for every reset call.
pub struct FakeDnsProvider {
    configs: Vec<DnsAdapterConfig>,
    return_code: u32,
    fail_open: bool,
    resets: Arc<Mutex<Vec<u32>>>,
}

impl FakeDnsProvider {
    pub fn new(configs: Vec<DnsAdapterConfig>) -> Self {
        Self {
            configs,
            return_code: 0,
            fail_open: false,
            resets: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn refusing_session() -> Self {
        Self {
            fail_open: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn with_return_code(mut self, code: u32) -> Self {
        self.return_code = code;
        self
    }

    pub fn resets(&self) -> Vec<u32> {
        self.resets.lock().unwrap().clone()
    }
}

pub struct FakeDnsSession {
    configs: Vec<DnsAdapterConfig>,
    return_code: u32,
    resets: Arc<Mutex<Vec<u32>>>,
}

impl DnsProvider for FakeDnsProvider {
    type Session = FakeDnsSession;

    fn open(&self) -> Result<Self::Session> {
        if self.fail_open {
            return Err(AppError::Session("fake session refused".to_string()));
        }
        Ok(FakeDnsSession {
            configs: self.configs.clone(),
            return_code: self.return_code,
            resets: self.resets.clone(),
        })
    }
}

impl DnsSession for FakeDnsSession {
    fn ip_enabled_configurations(&mut self) -> Result<Vec<DnsAdapterConfig>> {
        Ok(self.configs.clone())
    }

    fn reset_search_order(&mut self, index: u32) -> Result<u32> {
        self.resets.lock().unwrap().push(index);
        Ok(self.return_code)
    }
}
