//! Go 工具链调用
//!
//! 以计算出的工作目录执行 `go mod init <module>`，输出直接透传到终端

use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use crate::error::{Result, SetModError};

/// 默认的 go 可执行文件
pub const DEFAULT_GO: &str = "go";

/// 模块初始化的外部协作者
pub trait ModuleInitializer {
    fn init_module(&self, module_path: &str, work_dir: &Path) -> Result<()>;
}

/// 执行 `<go> mod init <module>`
#[derive(Debug, Clone)]
pub struct GoModInit {
    program: String,
}

impl Default for GoModInit {
    fn default() -> Self {
        Self::new(DEFAULT_GO)
    }
}

impl GoModInit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command_line(&self, module_path: &str) -> String {
        format!("{} mod init {}", self.program(), module_path)
    }
}

impl ModuleInitializer for GoModInit {
    fn init_module(&self, module_path: &str, work_dir: &Path) -> Result<()> {
        debug!(
            "Running '{}' in {}",
            self.command_line(module_path),
            work_dir.display()
        );

        let status = Command::new(self.program())
            .args(["mod", "init", module_path])
            .current_dir(work_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| SetModError::ToolchainSpawn {
                program: self.program().to_string(),
                source,
            })?;

        if !status.success() {
            return Err(SetModError::ToolchainFailed {
                command: self.command_line(module_path),
                code: status.code(),
            });
        }

        Ok(())
    }
}
