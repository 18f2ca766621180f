//! 错误类型
//!
//! 库内部统一使用 [`SetModError`]，二进制入口再用 anyhow 附加上下文

use std::path::PathBuf;
use thiserror::Error;

/// set-mod 的所有失败情形
#[derive(Debug, Error)]
pub enum SetModError {
    /// 一直走到文件系统根目录都没找到配置文件
    #[error("{file_name} not found in {} or any parent directory", .start.display())]
    ConfigNotFound {
        file_name: &'static str,
        start: PathBuf,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Config '{0}' value is missing")]
    MissingValue(&'static str),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot compute path of {} relative to project root {}", .cwd.display(), .root.display())]
    RelativePath { cwd: PathBuf, root: PathBuf },

    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: &'static str },

    #[error("Failed to start '{program}': {source}")]
    ToolchainSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed with {}", describe_status(.code))]
    ToolchainFailed { command: String, code: Option<i32> },
}

impl SetModError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        SetModError::Io {
            context: context.into(),
            source,
        }
    }

    /// 只有 not-found 可以在边界处恢复（创建默认配置）
    pub fn is_config_not_found(&self) -> bool {
        matches!(self, SetModError::ConfigNotFound { .. })
    }

    /// 进程退出码：外部工具失败时透传其退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            SetModError::ToolchainFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, SetModError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinguishable() {
        let err = SetModError::ConfigNotFound {
            file_name: "mod-name.yaml",
            start: PathBuf::from("/work/proj"),
        };
        assert!(err.is_config_not_found());
        assert!(err.to_string().contains("mod-name.yaml not found"));

        let err = SetModError::MissingValue("pre-set");
        assert!(!err.is_config_not_found());
        assert_eq!(err.to_string(), "Config 'pre-set' value is missing");
    }

    #[test]
    fn test_exit_code_passthrough() {
        let err = SetModError::ToolchainFailed {
            command: "go mod init x".to_string(),
            code: Some(3),
        };
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("exit status 3"));

        let err = SetModError::ToolchainFailed {
            command: "go mod init x".to_string(),
            code: None,
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(SetModError::MissingValue("pre-set").exit_code(), 1);
    }
}
