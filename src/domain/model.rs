use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::IpAddr;

/// Outcome of a hostname lookup. A lookup either produces an address or it
/// does not; socket-level failures and NXDOMAIN both surface as `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Resolved(IpAddr),
    NotFound,
}

impl Resolution {
    pub fn address(&self) -> Option<IpAddr> {
        match self {
            Resolution::Resolved(addr) => Some(*addr),
            Resolution::NotFound => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Recognized directives of a `log-forward` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LogForwardOptions {
    /// Log targets, one `log` line each ("global", "ring@lb1 local0", ...).
    pub log: Vec<String>,
    pub maxconn: Option<u32>,
    pub backlog: Option<u32>,
    pub timeout_client: Option<String>,
}

/// Recognized directives of a `ring` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RingOptions {
    pub description: Option<String>,
    pub format: Option<String>,
    pub maxlen: Option<u32>,
    pub size: Option<String>,
    pub timeout_connect: Option<String>,
    pub timeout_server: Option<String>,
    /// Forward targets, one `server` line each ("s1 10.0.0.1:6514", ...).
    pub servers: Vec<String>,
}

/// Everything needed to produce the fragments of one log-forward section.
///
/// `ports`/`bind` and `ipaddress`/`bind` are mutually exclusive pairs; the
/// assembler rejects a spec that sets both before producing any output.
#[derive(Debug, Clone, Default)]
pub struct FragmentSpec {
    pub section_name: String,
    /// Named HAProxy instance; `None` means the default instance.
    pub instance: Option<String>,
    /// Explicit destination file, overriding any derived default.
    pub target_override: Option<String>,
    /// Hostname to resolve into `ipaddress` before assembly.
    pub host: Option<String>,
    pub ipaddress: Option<String>,
    pub ports: Option<String>,
    /// "address:port" -> bind options.
    pub bind: BTreeMap<String, Vec<String>>,
    pub options: LogForwardOptions,
    pub ring_options: RingOptions,
    pub sort_alphabetic: bool,
    pub collect_exported: bool,
    pub configure_ring: bool,
}

impl FragmentSpec {
    /// Sort key shared by every fragment of this section. The fixed prefix
    /// and suffix mean relative order across sections is lexicographic on
    /// the section name alone.
    pub fn order_key(&self) -> String {
        format!("15-{}-00", self.section_name)
    }

    /// Destination file identifier, relative to the sink's base directory.
    /// An explicit override always wins; a named instance derives a
    /// per-instance path; otherwise the configured default is used.
    pub fn resolve_target(&self, default_target: &str) -> String {
        if let Some(target) = &self.target_override {
            target.clone()
        } else if let Some(instance) = &self.instance {
            format!("haproxy-{instance}/haproxy-{instance}.cfg")
        } else {
            default_target.to_string()
        }
    }
}

/// One rendered block of text, positioned within its target file by
/// `(order_key, seq)`. `seq` breaks ties between fragments that share an
/// order key (a section's log-forward block and its ring block).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedFragment {
    pub order_key: String,
    pub seq: u32,
    pub target: String,
    pub content: String,
}

/// A backend server entry registered by another node and collected by tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancerMember {
    pub name: String,
    pub address: String,
    pub port: u16,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Destination file identifier; defaults to the collector's target.
    #[serde(default)]
    pub target: Option<String>,
}
