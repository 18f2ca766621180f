//! 项目根目录查找
//!
//! 从调用目录开始逐级向上查找 mod-name.yaml，第一个包含它的目录即项目根目录。
//! 只向上走，不会进入子目录或兄弟目录；到达文件系统根目录（父目录等于自身）即停止。

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::config::{ModConfig, CONFIG_FILE_NAME};
use crate::error::{Result, SetModError};
use crate::utils::{read_file, ProjectFs};

/// 查找结果：配置 + 配置文件所在目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub config: ModConfig,
    /// 项目根目录，必定是起始目录本身或其祖先
    pub project_root: PathBuf,
}

impl SearchResult {
    pub fn config_path(&self) -> PathBuf {
        self.project_root.join(CONFIG_FILE_NAME)
    }
}

/// 向上查找包含配置文件的目录
///
/// # Returns
///
/// 返回包含 mod-name.yaml 的目录，直到根目录都找不到返回 None
pub fn find_config_dir(start: &Path, fs: &impl ProjectFs) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        trace!("Probing {}", candidate.display());
        if fs.is_file(&candidate) {
            return Some(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// 定位并解析配置文件
///
/// 找不到时返回 [`SetModError::ConfigNotFound`]，解析失败返回 [`SetModError::ConfigParse`]。
/// `pre-set` 为空不在这里检查。
pub fn locate_config(start: &Path, fs: &impl ProjectFs) -> Result<SearchResult> {
    let project_root = find_config_dir(start, fs).ok_or_else(|| SetModError::ConfigNotFound {
        file_name: CONFIG_FILE_NAME,
        start: start.to_path_buf(),
    })?;

    let config_path = project_root.join(CONFIG_FILE_NAME);
    debug!("Found {}", config_path.display());

    let content = read_file(fs, &config_path)?;
    let config = ModConfig::parse(&content, &config_path)?;

    Ok(SearchResult {
        config,
        project_root,
    })
}
