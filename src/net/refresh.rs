use crate::runner::CommandRunner;
use crate::ui::Reporter;
use std::time::Duration;

const INTERNET_SETTINGS_KEY: &str =
    r"HKCU\Software\Microsoft\Windows\CurrentVersion\Internet Settings";

/// Fixed connectivity-refresh sequence: flush DNS, release the IP lease,
/// settle, renew, flush again, reset Winsock, disable the persisted proxy
/// configuration, then flush and reset once more. Pure best-effort: the
/// order never changes and no exit code is branched on.
pub async fn refresh<R: CommandRunner>(runner: &R, reporter: &Reporter, settle_delay: Duration) {
    reporter.log("Refreshing DNS cache...");
    run_quiet(runner, "ipconfig", &["/flushdns"]).await;

    reporter.log("Releasing IP address...");
    // Release is flaky on some stacks; the triple invocation is kept as
    // observed in the field.
    run_quiet(runner, "ipconfig", &["/release"]).await;
    run_quiet(runner, "ipconfig", &["/release"]).await;
    run_quiet(runner, "ipconfig", &["/release"]).await;

    tokio::time::sleep(settle_delay).await;

    reporter.log("Renewing IP address...");
    reporter.log("Running, please wait patiently...");
    reporter.log(
        "Computers with complex network environments may take several minutes to load, \
         please wait patiently...",
    );
    reporter.log("This is a Windows feature, not a bug, please wait patiently");
    run_quiet(runner, "ipconfig", &["/renew"]).await;

    reporter.log("Refreshing DNS cache again...");
    run_quiet(runner, "ipconfig", &["/flushdns"]).await;

    reporter.log("Resetting Winsock...");
    run_quiet(runner, "netsh", &["winsock", "reset"]).await;

    reporter.log("Disabling proxy settings...");
    run_quiet(
        runner,
        "reg",
        &["add", INTERNET_SETTINGS_KEY, "/v", "AutoConfigURL", "/t", "REG_SZ", "/d", "", "/f"],
    )
    .await;
    run_quiet(
        runner,
        "reg",
        &["add", INTERNET_SETTINGS_KEY, "/v", "UseAutoDetect", "/t", "REG_DWORD", "/d", "0", "/f"],
    )
    .await;
    run_quiet(
        runner,
        "reg",
        &["add", INTERNET_SETTINGS_KEY, "/v", "ProxyEnable", "/t", "REG_DWORD", "/d", "0", "/f"],
    )
    .await;
    run_quiet(
        runner,
        "reg",
        &["add", INTERNET_SETTINGS_KEY, "/v", "ProxyServer", "/d", "", "/f"],
    )
    .await;
    reporter.log("Proxy settings disabled");

    reporter.log("Repeating DNS refresh...");
    run_quiet(runner, "ipconfig", &["/flushdns"]).await;
    run_quiet(runner, "netsh", &["winsock", "reset"]).await;
}

async fn run_quiet<R: CommandRunner>(runner: &R, program: &str, args: &[&str]) {
    if let Err(e) = runner.run(program, args).await {
        tracing::debug!("{} failed to run: {}", program, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeRunner, reporter_pair};

    fn assert_fixed_order(calls: &[String]) {
        assert_eq!(calls.len(), 13);
        assert_eq!(calls[0], "ipconfig /flushdns");
        assert_eq!(calls[1], "ipconfig /release");
        assert_eq!(calls[2], "ipconfig /release");
        assert_eq!(calls[3], "ipconfig /release");
        assert_eq!(calls[4], "ipconfig /renew");
        assert_eq!(calls[5], "ipconfig /flushdns");
        assert_eq!(calls[6], "netsh winsock reset");
        for (call, value) in calls[7..11].iter().zip([
            "AutoConfigURL",
            "UseAutoDetect",
            "ProxyEnable",
            "ProxyServer",
        ]) {
            assert!(call.starts_with("reg add"), "unexpected call: {}", call);
            assert!(call.contains("Internet Settings"), "unexpected call: {}", call);
            assert!(call.contains(value), "expected {} in: {}", value, call);
            assert!(call.ends_with("/f"), "unexpected call: {}", call);
        }
        assert_eq!(calls[11], "ipconfig /flushdns");
        assert_eq!(calls[12], "netsh winsock reset");
    }

    #[tokio::test]
    async fn commands_run_in_a_fixed_order() {
        let runner = FakeRunner::new();
        let (reporter, _rx) = reporter_pair();

        refresh(&runner, &reporter, Duration::ZERO).await;

        assert_fixed_order(&runner.calls());
    }

    #[tokio::test]
    async fn order_is_unchanged_when_every_command_fails() {
        let runner = FakeRunner::failing_spawns();
        let (reporter, _rx) = reporter_pair();

        refresh(&runner, &reporter, Duration::ZERO).await;

        assert_fixed_order(&runner.calls());
    }
}
