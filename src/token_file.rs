use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use time::OffsetDateTime;

pub const OUT_DIR_ENV: &str = "ITEMPRINT_OUT_DIR";

const DELIMITER: &str = ",";

pub fn resolve_out_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }

    if let Some(dir) = env::var_os(OUT_DIR_ENV) {
        return PathBuf::from(dir);
    }

    PathBuf::from(".")
}

/// `<prefix>-<unix-epoch-millis>.txt`
pub fn export_file_name(prefix: &str, now: OffsetDateTime) -> String {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    format!("{prefix}-{millis}.txt")
}

pub fn encode_tokens(tokens: &[String]) -> String {
    tokens.join(DELIMITER)
}

/// Splits on the delimiter only. Whitespace is kept, so a stray newline makes
/// the last token unmatchable.
pub fn parse_tokens(contents: &str) -> Vec<String> {
    contents.split(DELIMITER).map(str::to_string).collect()
}

pub fn write_tokens(path: &Path, tokens: &[String]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(path, encode_tokens(tokens))
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!("wrote {} tokens to {}", tokens.len(), path.display());

    Ok(())
}

pub fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let tokens = parse_tokens(&contents);
    debug!("loaded {} tokens from {}", tokens.len(), path.display());
    if contents.contains(char::is_whitespace) {
        debug!(
            "{} contains whitespace; affected tokens will not match",
            path.display()
        );
    }

    Ok(tokens)
}
