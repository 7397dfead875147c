use crate::runner::CommandRunner;
use crate::ui::Reporter;

/// Re-runs the network-info dump and forwards the raw output to the log.
pub async fn report_info<R: CommandRunner>(runner: &R, reporter: &Reporter) {
    reporter.log("——————Current Network Configuration——————");

    match runner.run("ipconfig", &["/all"]).await {
        Ok(output) if output.success() => reporter.log(output.stdout),
        Ok(_) => reporter.log("Failed to get network configuration information"),
        Err(e) => reporter.log(format!("Error displaying network information: {}", e)),
    }

    reporter.log("————————————");
}
