//! Where shelfwise keeps per-user files.

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the default `~/.shelfwise` location.
pub const HOME_ENV: &str = "SHELFWISE_HOME";

pub fn shelfwise_home() -> Result<PathBuf> {
    resolve_home(std::env::var_os(HOME_ENV), std::env::var_os("HOME"))
}

fn resolve_home(
    explicit: Option<std::ffi::OsString>,
    user_home: Option<std::ffi::OsString>,
) -> Result<PathBuf> {
    if let Some(dir) = explicit.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = user_home
        .filter(|h| !h.is_empty())
        .ok_or_else(|| anyhow!("neither {HOME_ENV} nor HOME is set"))?;
    Ok(Path::new(&home).join(".shelfwise"))
}

pub fn ensure_shelfwise_home() -> Result<PathBuf> {
    let dir = shelfwise_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_home(Some("/srv/shelf".into()), Some("/home/ana".into())).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/shelf"));
    }

    #[test]
    fn test_falls_back_to_user_home() {
        let dir = resolve_home(Some("".into()), Some("/home/ana".into())).unwrap();
        assert_eq!(dir, PathBuf::from("/home/ana/.shelfwise"));
        assert!(resolve_home(None, None).is_err());
    }
}
