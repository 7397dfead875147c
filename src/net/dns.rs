use crate::error::Result;
use crate::models::AdapterRecord;
use crate::ui::Reporter;

/// One live, IP-enabled adapter configuration as seen by the management
/// interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAdapterConfig {
    pub description: String,
    pub index: u32,
}

/// An open management session. Teardown happens on drop, on every exit path.
pub trait DnsSession {
    fn ip_enabled_configurations(&mut self) -> Result<Vec<DnsAdapterConfig>>;

    /// Forces the adapter's DNS server search order back to automatic.
    /// Returns the management interface's result code; 0 means success.
    fn reset_search_order(&mut self, index: u32) -> Result<u32>;
}

pub trait DnsProvider: Send + Sync {
    type Session: DnsSession;

    fn open(&self) -> Result<Self::Session>;
}

impl<T: DnsProvider> DnsProvider for &T {
    type Session = T::Session;

    fn open(&self) -> Result<Self::Session> {
        (**self).open()
    }
}

/// Resets the DNS server search order for every enumerated adapter, matched
/// against the live configurations by description. A session failure skips
/// the whole step; a non-zero result code is logged and the remaining
/// adapters are still processed.
pub fn reset_dns<D: DnsProvider>(adapters: &[AdapterRecord], provider: &D, reporter: &Reporter) {
    reporter.log("Setting DNS to DHCP...");

    let mut session = match provider.open() {
        Ok(session) => session,
        Err(e) => {
            reporter.log(format!("Error setting DNS: {}", e));
            return;
        }
    };

    for adapter in adapters {
        reporter.log(format!("  Setting DNS for adapter: {}", adapter.name));

        let configs = match session.ip_enabled_configurations() {
            Ok(configs) => configs,
            Err(e) => {
                reporter.log(format!("Error setting DNS: {}", e));
                return;
            }
        };

        for config in configs {
            if config.description != adapter.description {
                continue;
            }
            match session.reset_search_order(config.index) {
                Ok(0) => reporter.log("    Successfully set DNS to automatic acquisition"),
                Ok(code) => reporter.log(format!(
                    "    Failed to set DNS to automatic acquisition, error code: {}",
                    code
                )),
                Err(e) => reporter.log(format!("    Error setting DNS: {}", e)),
            }
            // First description match wins; ignore duplicates.
            break;
        }
    }
}

#[cfg(target_os = "windows")]
mod wmi_provider {
    use super::{DnsAdapterConfig, DnsProvider, DnsSession};
    use crate::error::{AppError, Result};
    use serde::{Deserialize, Serialize};
    use wmi::{COMLibrary, WMIConnection};

    pub struct WmiDnsProvider;

    /// WMI connection over a per-thread COM apartment; both are torn down
    /// when the session drops.
    pub struct WmiDnsSession {
        connection: WMIConnection,
    }

    #[derive(Deserialize)]
    #[serde(rename = "Win32_NetworkAdapterConfiguration")]
    #[serde(rename_all = "PascalCase")]
    struct NetworkAdapterConfiguration {
        description: String,
        index: u32,
    }

    // SetDNSServerSearchOrder with no server list reverts the adapter to DHCP.
    #[derive(Serialize)]
    struct SetDnsServerSearchOrderInput {}

    #[derive(Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct MethodResult {
        return_value: u32,
    }

    impl DnsProvider for WmiDnsProvider {
        type Session = WmiDnsSession;

        fn open(&self) -> Result<Self::Session> {
            let com = COMLibrary::new().map_err(|e| AppError::Session(e.to_string()))?;
            let connection =
                WMIConnection::new(com).map_err(|e| AppError::Session(e.to_string()))?;
            Ok(WmiDnsSession { connection })
        }
    }

    impl DnsSession for WmiDnsSession {
        fn ip_enabled_configurations(&mut self) -> Result<Vec<DnsAdapterConfig>> {
            let rows: Vec<NetworkAdapterConfiguration> = self
                .connection
                .raw_query(
                    "SELECT Description, Index FROM Win32_NetworkAdapterConfiguration \
                     WHERE IPEnabled = TRUE",
                )
                .map_err(|e| AppError::Session(e.to_string()))?;
            Ok(rows
                .into_iter()
                .map(|row| DnsAdapterConfig {
                    description: row.description,
                    index: row.index,
                })
                .collect())
        }

        fn reset_search_order(&mut self, index: u32) -> Result<u32> {
            let path = format!("Win32_NetworkAdapterConfiguration.Index={}", index);
            let result: Option<MethodResult> = self
                .connection
                .exec_method(
                    &path,
                    "SetDNSServerSearchOrder",
                    &SetDnsServerSearchOrderInput {},
                )
                .map_err(|e| AppError::Session(e.to_string()))?;
            Ok(result.map(|r| r.return_value).unwrap_or(0))
        }
    }
}

#[cfg(target_os = "windows")]
pub use wmi_provider::WmiDnsProvider;

#[cfg(not(target_os = "windows"))]
mod unsupported {
    use super::{DnsAdapterConfig, DnsProvider, DnsSession};
    use crate::error::{AppError, Result};

    pub struct UnsupportedDnsProvider;

    pub struct UnsupportedDnsSession;

    impl DnsProvider for UnsupportedDnsProvider {
        type Session = UnsupportedDnsSession;

        fn open(&self) -> Result<Self::Session> {
            Err(AppError::Session(
                "the network management interface is only available on Windows".to_string(),
            ))
        }
    }

    impl DnsSession for UnsupportedDnsSession {
        fn ip_enabled_configurations(&mut self) -> Result<Vec<DnsAdapterConfig>> {
            Err(AppError::Session("no session".to_string()))
        }

        fn reset_search_order(&mut self, _index: u32) -> Result<u32> {
            Err(AppError::Session("no session".to_string()))
        }
    }
}

#[cfg(not(target_os = "windows"))]
pub use unsupported::UnsupportedDnsProvider;

#[cfg(target_os = "windows")]
pub fn system_provider() -> WmiDnsProvider {
    WmiDnsProvider
}

#[cfg(not(target_os = "windows"))]
pub fn system_provider() -> UnsupportedDnsProvider {
    UnsupportedDnsProvider
}
