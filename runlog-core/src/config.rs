use anyhow::{Context, Result, bail};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Number of runs shown by the "recent" view unless configured otherwise.
pub const DEFAULT_RECENT_COUNT: usize = 7;

/// Date format used when rendering runs unless configured otherwise.
pub const DEFAULT_DATE_FORMAT: &str = "%a, %d %b %Y";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Run file (`distance,time[,date]` per line) loaded at startup. Optional; `--file` overrides it.
    pub runs_file: Option<PathBuf>,
    /// How many runs the "recent" view shows. Default is 7.
    pub recent_count: usize,
    /// chrono format string for dates in rendered output.
    pub date_format: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    runs_file: Option<PathBuf>,
    recent_count: Option<usize>,
    date_format: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runs_file: None,
            recent_count: DEFAULT_RECENT_COUNT,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Self::from_file_config(file_config)
    }

    /// Parses a TOML string into a `Config`, applying defaults for missing keys.
    pub fn from_toml(s: &str) -> Result<Self> {
        Self::from_file_config(Self::parse_file(s)?)
    }

    fn from_file_config(file_config: FileConfig) -> Result<Self> {
        let recent_count = file_config.recent_count.unwrap_or(DEFAULT_RECENT_COUNT);
        if recent_count == 0 {
            bail!("recent_count must be at least 1");
        }

        Ok(Self {
            runs_file: file_config.runs_file,
            recent_count,
            date_format: file_config
                .date_format
                .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
        })
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("runlog")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("runlog").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
