//! # Scan Target Model
//!
//! Defines the probe targets and how user input becomes a list of them.
//!
//! Two input modes exist, chosen on the command line:
//! * A subnet in CIDR notation (e.g. `192.168.1.0/24`), expanded to every
//!   address of the block in ascending order.
//! * An rhosts file with one address or hostname per line.
//!
//! A target is nothing more than the base URL the probe will GET. File-mode
//! entries are not validated here; a hostname that does not resolve simply
//! fails inside the probe like any unreachable address.

use std::fs;
use std::net::Ipv4Addr;
use std::path::Path;

use ipnet::{Ipv4AddrRange, Ipv4Net};

use crate::error::TargetError;
use crate::info;

/// A single probe endpoint, held as a fully formed base URL.
///
/// Immutable once built; the probe layer only ever reads it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    /// Wraps a trimmed host (or raw line) into an `http://` base URL.
    pub fn from_host(host: &str) -> Self {
        Self(format!("http://{}", host.trim()))
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Expands a CIDR subnet into one target per address, ascending.
///
/// The whole block is enumerated, network and broadcast addresses included,
/// so a `/24` yields 256 targets. Input with host bits set (`192.168.1.1/24`)
/// is rejected the same way a syntax error is.
pub fn targets_from_subnet(subnet: &str) -> Result<Vec<Target>, TargetError> {
    let net: Ipv4Net = subnet
        .parse()
        .map_err(|e: ipnet::AddrParseError| TargetError::InvalidSubnet {
            subnet: subnet.to_string(),
            reason: e.to_string(),
        })?;

    if net.addr() != net.network() {
        return Err(TargetError::InvalidSubnet {
            subnet: subnet.to_string(),
            reason: "host bits set".to_string(),
        });
    }

    info!("Generating target list from subnet {subnet}");

    let targets = Ipv4AddrRange::new(net.network(), net.broadcast())
        .map(|addr: Ipv4Addr| Target::from_host(&addr.to_string()))
        .collect();

    Ok(targets)
}

/// Reads an rhosts file into one target per line, preserving file order.
///
/// Lines are trimmed of surrounding whitespace and line endings but are
/// otherwise taken as-is: no DNS lookup, no address validation, and blank
/// lines still become the degenerate target `http://`. Malformed entries
/// are left for the probe to fail on.
pub fn targets_from_rhosts(path: &Path) -> Result<Vec<Target>, TargetError> {
    let contents = fs::read_to_string(path).map_err(|source| TargetError::Rhosts {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Generating target list from {}", path.display());

    let targets = contents.lines().map(Target::from_host).collect();

    Ok(targets)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
