use dirs::config_dir;
use once_cell::sync::Lazy;
use std::path::PathBuf;

static CONFIG_ROOT: Lazy<PathBuf> = Lazy::new(|| {
    let base = config_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    base.join("agenda")
});

pub fn config_root() -> PathBuf {
    CONFIG_ROOT.clone()
}

pub fn config_path() -> PathBuf {
    config_root().join("config.json")
}
