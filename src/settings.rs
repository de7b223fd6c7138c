//! 可选设置文件模块
//!
//! 基准目录下的 `seal_stamp.json` 可覆盖两个工具的默认参数：
//!
//! ```json
//! { "generator": { "font_size": 36.0 }, "extractor": { "min_dominance": 50 } }
//! ```
//!
//! 文件不存在时使用默认值；文件无法解析时记录警告并回退默认值，不会中断运行。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::extractor::ExtractConfig;
use crate::generator::StampConfig;

/// 设置文件名。
pub const SETTINGS_FILE_NAME: &str = "seal_stamp.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generator: StampConfig,
    pub extractor: ExtractConfig,
}

pub fn settings_file_path(base: &Path) -> PathBuf {
    base.join(SETTINGS_FILE_NAME)
}

/// 读取基准目录下的设置文件。
pub fn load_settings(base: &Path) -> Settings {
    load_settings_from_path(&settings_file_path(base))
}

pub fn load_settings_from_path(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log::warn!("⚠️ 读取设置文件失败，使用默认参数: {} - {}", path.display(), err);
            return Settings::default();
        }
    };

    match serde_json::from_str::<Settings>(&content) {
        Ok(settings) => {
            log::info!("⚙️ 已加载设置文件: {}", path.display());
            settings
        }
        Err(err) => {
            log::warn!("⚠️ 解析设置文件失败，使用默认参数: {} - {}", path.display(), err);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("seal-stamp-settings-test-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = unique_temp_dir();
        assert_eq!(load_settings(&dir), Settings::default());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let dir = unique_temp_dir();
        std::fs::write(
            settings_file_path(&dir),
            r#"{ "generator": { "second_line": "专用章" }, "extractor": { "min_dominance": 50 } }"#,
        )
        .expect("write settings");

        let settings = load_settings(&dir);
        assert_eq!(settings.generator.second_line, "专用章");
        assert_eq!(settings.generator.first_line, "注塑");
        assert_eq!(settings.extractor.min_dominance, 50);
        assert_eq!(settings.extractor.min_alpha, 30);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn bad_file_falls_back_to_defaults() {
        let dir = unique_temp_dir();
        std::fs::write(settings_file_path(&dir), "not-json").expect("write invalid settings");

        assert_eq!(load_settings(&dir), Settings::default());
        let _ = std::fs::remove_dir_all(dir);
    }
}
