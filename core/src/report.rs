//! Writes the final match list to a timestamped report file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use bmchunt_common::target::Target;

/// Serializes the matches as an indented JSON array of URLs into
/// `bmchunt_<HH>_<MM>_<DD>_<MM>_<YYYY>.log` under `dir`, returning the
/// path. A run with zero matches still produces a file containing `[]`.
pub fn write_report(matches: &[Target], dir: &Path) -> anyhow::Result<PathBuf> {
    let filename = Local::now().format("bmchunt_%H_%M_%d_%m_%Y.log").to_string();
    let path = dir.join(filename);

    let urls: Vec<&str> = matches.iter().map(Target::url).collect();
    let document = serde_json::to_string_pretty(&urls)?;
    fs::write(&path, document)?;

    Ok(path)
}
