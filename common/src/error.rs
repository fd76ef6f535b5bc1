use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning user input into a target list.
///
/// These are the only fatal errors of a run: they surface before any
/// probing starts. Everything that goes wrong on the wire later is
/// absorbed by the probe itself.
#[derive(Debug, Error)]
pub enum TargetError {
    /// The subnet argument is not a valid IPv4 network in CIDR notation.
    #[error("invalid subnet '{subnet}': {reason}")]
    InvalidSubnet { subnet: String, reason: String },

    /// The rhosts file could not be opened or read.
    #[error("failed to read rhosts file '{}'", path.display())]
    Rhosts {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
