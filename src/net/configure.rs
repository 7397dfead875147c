use crate::models::AdapterRecord;
use crate::runner::CommandRunner;
use crate::ui::Reporter;

/// Switches every adapter's IP and DNS source to DHCP, by adapter name.
/// Best-effort: a failing command is logged and the loop moves on, so this
/// always issues exactly two commands per adapter.
pub async fn configure_dhcp<R: CommandRunner>(
    adapters: &[AdapterRecord],
    runner: &R,
    reporter: &Reporter,
) {
    reporter.log("Starting network configuration...");

    for adapter in adapters {
        reporter.log(format!("  Configuring adapter: {}", adapter.name));

        set_to_dhcp(runner, reporter, "address", "IP address", &adapter.name).await;
        set_to_dhcp(runner, reporter, "dnsservers", "DNS", &adapter.name).await;
    }
}

async fn set_to_dhcp<R: CommandRunner>(
    runner: &R,
    reporter: &Reporter,
    subcommand: &str,
    label: &str,
    adapter_name: &str,
) {
    let result = runner
        .run(
            "netsh",
            &["interface", "ip", "set", subcommand, adapter_name, "source=dhcp"],
        )
        .await;

    match result {
        // netsh reports "already DHCP" with a non-zero exit and nothing on
        // stderr; treat that as success.
        Ok(output) if output.success() || output.stderr.is_empty() => {
            reporter.log(format!("    Set {} to DHCP successfully", label));
        }
        Ok(output) => {
            reporter.log(format!("    Failed to set {}: {}", label, output.stderr.trim()));
        }
        Err(e) => {
            reporter.log(format!("    Failed to set {}: {}", label, e));
        }
    }
}
