//! The fingerprint every probe compares against.

/// The stock login page served by the ATEN-based SuperMicro BMC firmware,
/// byte for byte as the controller delivers it (CRLF line endings included).
///
/// Shared read-only by every concurrent probe for the lifetime of the
/// process. A response body must be identical to this to count as a match;
/// rebranded or updated firmware pages will not be detected.
pub static SIGNATURE: &[u8] = include_bytes!("../assets/login_page.html");
