use super::keys::*;

pub const ENTRIES: &[(&str, &str)] = &[
    (TITLE, "WeChat Multi-Opener"),
    (WECHAT_PATH_LABEL, "WeChat Program Path:"),
    (SELECT_PATH_BUTTON, "Select Path"),
    (COUNT_LABEL, "Instance Count:"),
    (START_BUTTON, "Start"),
    (LOADING_FILE, "Loading files"),
    (LOADING_SOURCE, "Loading resources"),
    (COMPILING, "Compiling"),
    (STARTING, "Starting"),
    (ERROR_MSG, "Failed to start: {}"),
    (LAUNCHER_TITLE, "LauncherU"),
    (VERSION_LABEL, "Version: {}"),
    (LAUNCH_OPENER_BUTTON, "Launch Multi-Opener"),
    (SELECT_SCRIPT_BUTTON, "Select Script"),
    (SELECT_SCRIPT_TITLE, "Select Python Script"),
    (SCRIPT_FILTER, "Python files"),
    (ALL_FILES_FILTER, "All files"),
    (EXECUTABLE_FILTER, "Executables"),
    (LAUNCH_OPENER_FAILED, "Could not start program"),
    (LAUNCH_SCRIPT_FAILED, "Could not start script"),
    (ERROR_SUMMARY, "Summary:"),
    (ERROR_DETAILS, "Details:"),
    (COPY_ERROR, "Copy error"),
    (CLOSE, "Close"),
    (TOGGLE_LANGUAGE, "中/En"),
    (LAUNCH_REPORT, "Started {} of {}"),
];
