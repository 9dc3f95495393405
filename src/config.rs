use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::tree::SortMode;

/// Defaults loaded from config files and merged with CLI flags.
///
/// Config files hold plain flag tokens, one or more per line, exactly as
/// they would appear on the command line. CLI flags win over file flags.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub ascii: bool,
    pub sort: Option<SortMode>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            ascii: self.ascii || other.ascii,
            sort: other.sort.or(self.sort),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("duvi").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("duvi")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("duvi").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("duvi").join("config");
        }
    }

    PathBuf::from(".duvirc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".duvirc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# duvi defaults (saved with --save)".to_string());
    if flags.ascii {
        lines.push("--ascii".to_string());
    }
    if let Some(sort) = flags.sort {
        lines.push(format!("--sort {}", sort_token(sort)));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--ascii" {
            flags.ascii = true;
        } else if token == "--sort" || token == "-s" {
            if let Some(next) = tokens.get(i + 1) {
                flags.sort = parse_sort(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--sort=") {
            flags.sort = parse_sort(value);
        }
        i += 1;
    }
    flags
}

fn parse_sort(s: &str) -> Option<SortMode> {
    match s {
        "size-desc" => Some(SortMode::SizeDesc),
        "size-asc" => Some(SortMode::SizeAsc),
        "name-asc" => Some(SortMode::NameAsc),
        "name-desc" => Some(SortMode::NameDesc),
        _ => None,
    }
}

const fn sort_token(mode: SortMode) -> &'static str {
    match mode {
        SortMode::SizeDesc => "size-desc",
        SortMode::SizeAsc => "size-asc",
        SortMode::NameAsc => "name-asc",
        SortMode::NameDesc => "name-desc",
    }
}
