//! 项目初始化
//!
//! 首次运行时找不到 mod-name.yaml，询问用户 `pre-set` 并在当前目录创建配置文件

use colored::*;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{ModConfig, CONFIG_FILE_NAME, PRE_SET_KEY};
use crate::error::{Result, SetModError};
use crate::utils::write_new_file;

/// 提示用户输入 `pre-set`，空输入（或 EOF）使用默认值
pub fn prompt_pre_set<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    default: &str,
) -> Result<String> {
    write!(
        writer,
        "Please enter a value for '{}' (default: {}): ",
        PRE_SET_KEY, default
    )
    .and_then(|_| writer.flush())
    .map_err(|e| SetModError::io("Failed to write prompt", e))?;

    let mut input = String::new();
    reader
        .read_line(&mut input)
        .map_err(|e| SetModError::io("Failed to read input", e))?;

    let input = input.trim();
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input.to_string())
    }
}

/// 在 `dir` 下创建配置文件，已存在时报错
pub fn create_default_config(dir: &Path, pre_set: &str) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    let content = ModConfig::new(pre_set).to_yaml()?;

    write_new_file(&path, &content)?;
    info!("Created {}", path.display());

    Ok(path)
}

/// 交互式首次初始化：提示、写入配置，返回配置文件路径
pub fn init_config_interactive<R: BufRead, W: Write>(
    dir: &Path,
    reader: R,
    mut writer: W,
    default: &str,
) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    writeln!(
        writer,
        "{} not found. Creating a new one at {}",
        CONFIG_FILE_NAME,
        path.display().to_string().cyan()
    )
    .map_err(|e| SetModError::io("Failed to write prompt", e))?;

    let pre_set = prompt_pre_set(reader, &mut writer, default)?;
    create_default_config(dir, &pre_set)
}
