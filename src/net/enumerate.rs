use crate::models::AdapterRecord;
use crate::runner::CommandRunner;
use crate::ui::Reporter;

const ETHERNET_HEADER: &str = "以太网适配器";
const WLAN_HEADER: &str = "无线局域网适配器";
const DESCRIPTION_LABEL: &str = "描述";

/// Substrings identifying Ethernet/wireless adapters worth repairing.
const ADAPTER_FILTERS: [&str; 5] = ["以太网", "Eth", "eth", "WLAN", "wlan"];

/// Runs the OS network-info dump and parses it into adapter records.
/// Returns an empty list (never an error) when the command fails or nothing
/// matches; the caller treats empty as a hard stop for the run.
pub async fn enumerate_adapters<R: CommandRunner>(
    runner: &R,
    reporter: &Reporter,
) -> Vec<AdapterRecord> {
    reporter.log("Getting Ethernet adapter information...");

    let output = match runner.run("ipconfig", &["/all"]).await {
        Ok(output) => output,
        Err(e) => {
            reporter.log(format!("Failed to get adapter information: {}", e));
            return Vec::new();
        }
    };

    let adapters = parse_ipconfig(&output.stdout);
    for adapter in &adapters {
        reporter.log(format!(
            "  Found adapter: {} ({})",
            adapter.name, adapter.description
        ));
    }
    adapters
}

/// Line-by-line state machine over the zh-CN `ipconfig /all` dump: an
/// adapter-header line opens a context and captures the display name, a
/// following description label completes the record. Description lines with
/// no open context are ignored; an adapter is retained only once its
/// description lands and its header passes the Ethernet/WLAN filter.
pub fn parse_ipconfig(output: &str) -> Vec<AdapterRecord> {
    let mut adapters = Vec::new();
    let mut current: Option<OpenAdapter> = None;

    for line in output.lines() {
        let line = line.trim();
        if let Some(open) = open_header(line) {
            current = Some(open);
        } else if line.starts_with(DESCRIPTION_LABEL) {
            let Some(open) = current.as_ref() else {
                continue;
            };
            if !open.retain {
                continue;
            }
            let description = line
                .split_once(':')
                .map(|(_, rest)| rest.trim())
                .unwrap_or("")
                .to_string();
            adapters.push(AdapterRecord {
                name: open.name.clone(),
                description,
            });
        }
    }

    adapters
}

struct OpenAdapter {
    name: String,
    retain: bool,
}

fn open_header(line: &str) -> Option<OpenAdapter> {
    let rest = line
        .strip_prefix(ETHERNET_HEADER)
        .or_else(|| line.strip_prefix(WLAN_HEADER))?;
    Some(OpenAdapter {
        name: rest.replace(':', "").trim().to_string(),
        // The filter runs against the whole header line: the locale prefix
        // already marks the adapter as Ethernet/WLAN-like, and names such
        // as "本地连接" carry no marker of their own.
        retain: matches_adapter_filter(line),
    })
}

fn matches_adapter_filter(header: &str) -> bool {
    ADAPTER_FILTERS.iter().any(|f| header.contains(f))
}
