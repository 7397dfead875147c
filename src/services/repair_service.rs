use crate::models::{STEP_COUNT, StepStatus};
use crate::net::dns::DnsProvider;
use crate::net::{configure, dns, enumerate, info, refresh};
use crate::runner::CommandRunner;
use crate::ui::Reporter;
use std::time::Duration;

const STEP_GET_ADAPTERS: usize = 0;
const STEP_CONFIGURE: usize = 1;
const STEP_RESET_DNS: usize = 2;
const STEP_RECONNECT: usize = 3;
const STEP_REPORT: usize = 4;

/// Drives the repair sequence: strictly linear steps 0..4, each mirrored to
/// the step sink, with the first failed step marking the run as errored and
/// skipping straight to the finish. Exactly one `Finished` event per run,
/// on every path.
pub struct RepairService<R, D> {
    runner: R,
    dns: D,
    settle_delay: Duration,
}

impl<R: CommandRunner, D: DnsProvider> RepairService<R, D> {
    pub fn new(runner: R, dns: D, settle_delay: Duration) -> Self {
        Self {
            runner,
            dns,
            settle_delay,
        }
    }

    pub async fn run(&self, reporter: &Reporter) {
        reporter.log("Starting network repair...");

        match self.run_steps(reporter).await {
            Ok(()) => {
                // Idempotent flush so the tracker shows a fully green run.
                for index in 0..STEP_COUNT {
                    reporter.set_step(index, StepStatus::Completed);
                }
                reporter.log("");
                reporter.log("Done. The network should be back to normal now.");
                reporter.log(
                    "If it still fails you may be on a TUN adapter, or the problem is not on \
                     this machine; check your proxy tooling or contact your network administrator.",
                );
            }
            Err(step) => {
                reporter.set_step(step, StepStatus::Error);
            }
        }

        reporter.finished();
    }

    async fn run_steps(&self, reporter: &Reporter) -> std::result::Result<(), usize> {
        reporter.log("Getting network adapter information...");
        reporter.set_step(STEP_GET_ADAPTERS, StepStatus::Running);
        let adapters = enumerate::enumerate_adapters(&self.runner, reporter).await;
        if adapters.is_empty() {
            reporter.log("No Ethernet adapters found");
            return Err(STEP_GET_ADAPTERS);
        }
        reporter.log(format!("Found {} Ethernet adapter(s)", adapters.len()));
        reporter.set_step(STEP_GET_ADAPTERS, StepStatus::Completed);

        reporter.log("Configuring network settings...");
        reporter.set_step(STEP_CONFIGURE, StepStatus::Running);
        configure::configure_dhcp(&adapters, &self.runner, reporter).await;
        reporter.set_step(STEP_CONFIGURE, StepStatus::Completed);

        reporter.log("Setting DNS to DHCP...");
        reporter.set_step(STEP_RESET_DNS, StepStatus::Running);
        dns::reset_dns(&adapters, &self.dns, reporter);
        reporter.set_step(STEP_RESET_DNS, StepStatus::Completed);

        reporter.log("Refreshing network configuration...");
        reporter.set_step(STEP_RECONNECT, StepStatus::Running);
        refresh::refresh(&self.runner, reporter, self.settle_delay).await;
        reporter.set_step(STEP_RECONNECT, StepStatus::Completed);

        reporter.log("Getting network configuration information...");
        reporter.set_step(STEP_REPORT, StepStatus::Running);
        info::report_info(&self.runner, reporter).await;
        reporter.set_step(STEP_REPORT, StepStatus::Completed);

        Ok(())
    }
}
