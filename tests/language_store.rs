use std::fs;

use multi_opener::core::config_store::ConfigStore;
use multi_opener::core::language::Language;
use multi_opener::i18n::keys;
use tempfile::tempdir;

const SAMPLE: &str = "\
[DEFAULT]
language = en

[zh]
title = 微信多开器
start_button = 开始多开

[en]
title = WeChat Multi-Opener
start_button = Start
";

#[test]
fn resolves_present_keys_for_each_language() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Language_Config.txt");
    fs::write(&path, SAMPLE).unwrap();

    let mut store = ConfigStore::load(&path);
    assert_eq!(store.current_language(), Language::English);
    assert_eq!(store.resolve(keys::TITLE), "WeChat Multi-Opener");
    assert_eq!(store.resolve(keys::START_BUTTON), "Start");

    store.set_language(Language::Chinese).unwrap();
    assert_eq!(store.resolve(keys::TITLE), "微信多开器");
    assert_eq!(store.resolve(keys::START_BUTTON), "开始多开");
}

#[test]
fn missing_keys_resolve_to_themselves() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Language_Config.txt");
    fs::write(&path, SAMPLE).unwrap();

    let store = ConfigStore::load(&path);
    assert_eq!(store.resolve(keys::COUNT_LABEL), keys::COUNT_LABEL);
    assert_eq!(store.resolve("not_a_label"), "not_a_label");
}

#[test]
fn toggling_twice_restores_language_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Language_Config.txt");
    fs::write(&path, SAMPLE).unwrap();

    let mut store = ConfigStore::load(&path);
    assert_eq!(store.toggle().unwrap(), Language::Chinese);
    assert_eq!(ConfigStore::load(&path).current_language(), Language::Chinese);

    assert_eq!(store.toggle().unwrap(), Language::English);
    assert_eq!(ConfigStore::load(&path).current_language(), Language::English);
}

#[test]
fn save_is_visible_to_a_fresh_store_and_keeps_labels() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("Language_Config.txt");

    let mut store = ConfigStore::load(&path);
    assert_eq!(store.current_language(), Language::Chinese);
    store.set_language(Language::English).unwrap();

    let reloaded = ConfigStore::load(&path);
    assert_eq!(reloaded.current_language(), Language::English);

    fs::write(&path, SAMPLE.replace("language = en", "language = zh")).unwrap();
    let mut edited = ConfigStore::load(&path);
    edited.toggle().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("language = en"));
    assert!(contents.contains("title = 微信多开器"));
    assert!(contents.contains("start_button = Start"));
}

const LEGACY: &str = "\
[DEFAULT]
language = zh

[zh]
title = 微信多开器
wechat_path_label = 微信主程序路径:
select_path_button = 选择路径
count_label = 多开数量:
start_button = 开始多开
loading_file = 加载文件
loading_source = 加载源码
compiling = 编译中
starting = 启动中
error_msg = 错误: {}

[en]
title = WeChat Multi-Opener
wechat_path_label = WeChat Program Path:
select_path_button = Select Path
count_label = Instance Count:
start_button = Start
loading_file = Loading file
loading_source = Loading source
compiling = Compiling
starting = Starting
error_msg = Error: {}
";

#[test]
fn ten_key_file_gains_the_newer_labels_on_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Language_Config.txt");
    fs::write(&path, LEGACY).unwrap();

    let mut store = ConfigStore::open_or_bootstrap(&path);
    assert_eq!(store.resolve(keys::TOGGLE_LANGUAGE), "中/En");
    assert_eq!(store.resolve(keys::LAUNCHER_TITLE), "LauncherU");
    assert_eq!(store.resolve(keys::LAUNCH_REPORT), "已启动 {} / {}");
    assert_eq!(store.resolve(keys::ERROR_MSG), "错误: {}");

    store.toggle().unwrap();
    assert_eq!(store.resolve(keys::EXECUTABLE_FILTER), "Executables");
    assert_eq!(store.resolve(keys::LOADING_SOURCE), "Loading source");
}

#[test]
fn launcher_labels_resolve_when_no_file_exists_yet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("Language_Config.txt");

    let store = ConfigStore::open_or_bootstrap(&path);
    for key in [
        keys::LAUNCHER_TITLE,
        keys::LAUNCH_OPENER_BUTTON,
        keys::SELECT_SCRIPT_BUTTON,
        keys::VERSION_LABEL,
        keys::TOGGLE_LANGUAGE,
    ] {
        assert_ne!(store.resolve(key), key);
    }
    assert_eq!(
        multi_opener::i18n::fill(store.resolve(keys::VERSION_LABEL), &["2.0"]),
        "版本: 2.0"
    );
}
