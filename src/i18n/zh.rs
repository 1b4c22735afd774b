use super::keys::*;

pub const ENTRIES: &[(&str, &str)] = &[
    (TITLE, "微信多开器"),
    (WECHAT_PATH_LABEL, "微信主程序路径:"),
    (SELECT_PATH_BUTTON, "选择路径"),
    (COUNT_LABEL, "多开数量:"),
    (START_BUTTON, "开始多开"),
    (LOADING_FILE, "正在加载文件"),
    (LOADING_SOURCE, "正在加载资源"),
    (COMPILING, "正在编译"),
    (STARTING, "正在启动"),
    (ERROR_MSG, "启动失败: {}"),
    (LAUNCHER_TITLE, "LauncherU"),
    (VERSION_LABEL, "版本: {}"),
    (LAUNCH_OPENER_BUTTON, "启动微信多开器"),
    (SELECT_SCRIPT_BUTTON, "手动选择脚本"),
    (SELECT_SCRIPT_TITLE, "选择Python脚本"),
    (SCRIPT_FILTER, "Python文件"),
    (ALL_FILES_FILTER, "所有文件"),
    (EXECUTABLE_FILTER, "可执行文件"),
    (LAUNCH_OPENER_FAILED, "无法启动程序"),
    (LAUNCH_SCRIPT_FAILED, "无法启动脚本"),
    (ERROR_SUMMARY, "错误摘要:"),
    (ERROR_DETAILS, "错误详情:"),
    (COPY_ERROR, "复制错误信息"),
    (CLOSE, "关闭"),
    (TOGGLE_LANGUAGE, "中/En"),
    (LAUNCH_REPORT, "已启动 {} / {}"),
];
