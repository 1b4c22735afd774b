use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::core::language::Language;

pub const APP_NAME: &str = "Multi-Opener";
pub const LAUNCHER_NAME: &str = "LauncherU";
pub const APP_VERSION: &str = "2.0";

pub const CONFIG_DIR: &str = "data";
pub const CONFIG_FILE: &str = "Language_Config.txt";
pub const LANGUAGE_KEY: &str = "language";
pub const DEFAULT_LANGUAGE: Language = Language::Chinese;

pub const OPENER_BINARY: &str = "multi-opener";
pub const DEFAULT_INTERPRETER: &str = "python";
pub const SCRIPT_EXTENSIONS: &[&str] = &["py"];
pub const EXECUTABLE_EXTENSIONS: &[&str] = &["exe"];

pub const MAX_INSTANCES: u32 = 99;

pub const ENV_FAST_START: &str = "MULTI_OPENER_FAST_START";
pub const ENV_INTERPRETER: &str = "LAUNCHER_PYTHON";

/// Directory holding the running executable, or `.` if it cannot be found.
pub fn app_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn config_file_path() -> PathBuf {
    app_dir().join(CONFIG_DIR).join(CONFIG_FILE)
}

pub fn sibling_executable(name: &str) -> PathBuf {
    app_dir().join(format!("{}{}", name, env::consts::EXE_SUFFIX))
}

pub fn script_interpreter() -> OsString {
    env::var_os(ENV_INTERPRETER)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| OsString::from(DEFAULT_INTERPRETER))
}

pub fn fast_start() -> bool {
    env::var(ENV_FAST_START)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
