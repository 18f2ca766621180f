//! 工具模块
//!
//! 提供文件系统访问和路径处理等常用工具函数

pub mod fs;
pub mod paths;

// 重导出
pub use fs::*;
pub use paths::*;
