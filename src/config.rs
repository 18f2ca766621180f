//! mod-name.yaml 配置
//!
//! 配置文件只有一个有意义的字段：`pre-set`，即模块路径前缀（例如 `github.com/acme`）

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::error::{Result, SetModError};

/// 锚点配置文件名
pub const CONFIG_FILE_NAME: &str = "mod-name.yaml";

/// 首次创建配置时的默认前缀
pub const DEFAULT_PRE_SET: &str = "github.com/your-username";

/// `pre-set` 字段的 key
pub const PRE_SET_KEY: &str = "pre-set";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModConfig {
    /// 模块路径前缀；缺失时为空字符串，由 [`ModConfig::pre_set`] 拒绝
    #[serde(rename = "pre-set", default, deserialize_with = "null_as_empty")]
    pub pre_set: String,
}

/// `pre-set: ~` / `pre-set: null` 视为空值
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ModConfig {
    pub fn new(pre_set: impl Into<String>) -> Self {
        Self {
            pre_set: pre_set.into(),
        }
    }

    /// 解析配置内容；`path` 仅用于错误信息
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        // 空文件在 serde_yaml 中是 null，按缺少字段处理
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|source| SetModError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|source| SetModError::ConfigParse {
            path: Path::new(CONFIG_FILE_NAME).to_path_buf(),
            source,
        })
    }

    /// 返回去掉首尾空白的前缀，为空时报 MissingValue
    pub fn pre_set(&self) -> Result<&str> {
        let value = self.pre_set.trim();
        if value.is_empty() {
            return Err(SetModError::MissingValue(PRE_SET_KEY));
        }
        Ok(value)
    }
}
