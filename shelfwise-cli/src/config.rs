use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shelfwise_core::{DEFAULT_TOP_N, KeywordMatcher, MATCH_INCREMENT, MATCH_THRESHOLD};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_shelfwise_home, shelfwise_home};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogSection,
    pub ranking: RankingSection,
    pub matching: MatchingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// Semicolon-separated inventory file.
    pub inventory: PathBuf,
    /// Directory holding `<Genre>_Keywords.txt` files.
    pub keywords_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingSection {
    pub top_n: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingSection {
    /// Minimum 0-100 similarity for a keyword hit.
    pub threshold: u8,
    /// Grade bonus per hit.
    pub increment: u32,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            inventory: PathBuf::from("data/Bookstore_Inventory.txt"),
            keywords_dir: PathBuf::from("data"),
        }
    }
}

impl Default for RankingSection {
    fn default() -> Self {
        Self { top_n: DEFAULT_TOP_N }
    }
}

impl Default for MatchingSection {
    fn default() -> Self {
        Self {
            threshold: MATCH_THRESHOLD,
            increment: MATCH_INCREMENT,
        }
    }
}

impl MatchingSection {
    pub fn matcher(&self) -> KeywordMatcher {
        KeywordMatcher::new(self.threshold.min(100), self.increment)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(shelfwise_home()?.join("config.toml"))
}

/// Load `explicit` if given, else `~/.shelfwise/config.toml`. A missing file means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    load_config_from(&p)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        tracing::debug!(path = %p.display(), "no config file; using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = ensure_shelfwise_home()?.join("config.toml");
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.ranking.top_n, 5);
        assert_eq!(cfg.matching.threshold, 65);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[ranking]\ntop_n = 3\n").unwrap();

        let cfg = load_config_from(&p).unwrap();
        assert_eq!(cfg.ranking.top_n, 3);
        assert_eq!(cfg.catalog, CatalogSection::default());
        assert_eq!(cfg.matching.increment, 15);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.catalog.keywords_dir = PathBuf::from("/srv/keywords");
        save_config(&cfg, &p).unwrap();
        assert_eq!(load_config_from(&p).unwrap(), cfg);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[ranking\n").unwrap();
        assert!(load_config_from(&p).is_err());
    }
}
