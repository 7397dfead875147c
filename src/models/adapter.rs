use serde::{Deserialize, Serialize};

/// A network adapter as reported by the OS diagnostic dump. Transient:
/// produced by enumeration, consumed by the configuration and DNS-reset
/// stages, discarded after the run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdapterRecord {
    pub name: String,
    pub description: String,
}
