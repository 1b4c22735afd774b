//! Label keys shared by the config file sections and the built-in tables.

pub const TITLE: &str = "title";
pub const WECHAT_PATH_LABEL: &str = "wechat_path_label";
pub const SELECT_PATH_BUTTON: &str = "select_path_button";
pub const COUNT_LABEL: &str = "count_label";
pub const START_BUTTON: &str = "start_button";
pub const LOADING_FILE: &str = "loading_file";
pub const LOADING_SOURCE: &str = "loading_source";
pub const COMPILING: &str = "compiling";
pub const STARTING: &str = "starting";
pub const ERROR_MSG: &str = "error_msg";

pub const LAUNCHER_TITLE: &str = "launcher_title";
pub const VERSION_LABEL: &str = "version_label";
pub const LAUNCH_OPENER_BUTTON: &str = "launch_opener_button";
pub const SELECT_SCRIPT_BUTTON: &str = "select_script_button";
pub const SELECT_SCRIPT_TITLE: &str = "select_script_title";
pub const SCRIPT_FILTER: &str = "script_filter";
pub const ALL_FILES_FILTER: &str = "all_files_filter";
pub const EXECUTABLE_FILTER: &str = "executable_filter";
pub const LAUNCH_OPENER_FAILED: &str = "launch_opener_failed";
pub const LAUNCH_SCRIPT_FAILED: &str = "launch_script_failed";
pub const ERROR_SUMMARY: &str = "error_summary";
pub const ERROR_DETAILS: &str = "error_details";
pub const COPY_ERROR: &str = "copy_error";
pub const CLOSE: &str = "close";
pub const TOGGLE_LANGUAGE: &str = "toggle_language";
pub const LAUNCH_REPORT: &str = "launch_report";

pub const OPENER_KEYS: &[&str] = &[
    TITLE,
    WECHAT_PATH_LABEL,
    SELECT_PATH_BUTTON,
    COUNT_LABEL,
    START_BUTTON,
    LOADING_FILE,
    LOADING_SOURCE,
    COMPILING,
    STARTING,
    ERROR_MSG,
    EXECUTABLE_FILTER,
    TOGGLE_LANGUAGE,
    LAUNCH_REPORT,
];
