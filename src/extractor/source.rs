//! # 源图定位模块
//!
//! ## 设计思路
//!
//! 源图按固定顺序定位：
//! 1. 默认路径：基准目录下的 `.cursor/projects/<项目>/assets/<资源文件>`
//! 2. 默认路径不存在时：用户主目录下的同名路径
//! 3. 命令行给出路径时，直接覆盖前两者
//!
//! 选定的路径不存在时返回 `ExtractError::SourceNotFound`，不再继续尝试。

use std::fmt;
use std::path::{Path, PathBuf};

use super::ExtractError;

/// 资源所在的项目目录（相对 `.cursor/projects`）。
const ASSET_PROJECT: &str = "Users-czd-zssystem";

/// 默认源图文件名。
const ASSET_FILE_NAME: &str = "_cgi-bin_mmwebwx-bin_webwxgetmsgimg___MsgID_8486665879372198142_skey__crypt_1f3b7bb8_4f400deb187b7f2143024b9707e5aa3f_mmweb_appid_wx_webfilehelper-02bed406-713c-4be8-abda-5cda79d22b6b.png";

/// 源图路径的来源。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOrigin {
    Default,
    Alternate,
    CommandLine,
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Default => "default",
            Self::Alternate => "alternate",
            Self::CommandLine => "command-line",
        };
        f.write_str(label)
    }
}

/// 已定位且确认存在的源图。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    pub path: PathBuf,
    pub origin: SourceOrigin,
}

/// 源图候选路径。
#[derive(Debug, Clone)]
pub struct SourceCandidates {
    pub default: PathBuf,
    pub alternate: Option<PathBuf>,
    pub override_path: Option<PathBuf>,
}

impl SourceCandidates {
    /// 基于基准目录、用户主目录与命令行参数构建候选。
    pub fn new(base: &Path, home: Option<&Path>, override_path: Option<PathBuf>) -> Self {
        Self {
            default: asset_path(base),
            alternate: home.map(asset_path),
            override_path,
        }
    }

    /// 使用系统主目录（`dirs::home_dir`）构建候选。
    pub fn from_environment(base: &Path, override_path: Option<PathBuf>) -> Self {
        let home = dirs::home_dir();
        Self::new(base, home.as_deref(), override_path)
    }

    /// 按顺序定位源图。
    pub fn resolve(&self) -> Result<ResolvedSource, ExtractError> {
        let (path, origin) = if let Some(path) = &self.override_path {
            (path.clone(), SourceOrigin::CommandLine)
        } else if self.default.exists() {
            (self.default.clone(), SourceOrigin::Default)
        } else if let Some(alternate) = &self.alternate {
            (alternate.clone(), SourceOrigin::Alternate)
        } else {
            (self.default.clone(), SourceOrigin::Default)
        };

        if !path.exists() {
            return Err(ExtractError::SourceNotFound(path));
        }

        log::info!("📁 源图片 - 来源: {} 路径: {}", origin, path.display());
        Ok(ResolvedSource { path, origin })
    }
}

fn asset_path(root: &Path) -> PathBuf {
    root.join(".cursor")
        .join("projects")
        .join(ASSET_PROJECT)
        .join("assets")
        .join(ASSET_FILE_NAME)
}
