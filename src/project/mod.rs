//! 项目管理模块
//!
//! 提供配置文件（项目根目录）查找和首次初始化功能

pub mod initializer;
pub mod root_finder;

// 重导出
pub use initializer::*;
pub use root_finder::{find_config_dir, locate_config, SearchResult};
