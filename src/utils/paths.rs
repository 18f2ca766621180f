//! 路径工具
//!
//! 模块路径总是用 '/' 分隔，与平台无关

use std::path::{Component, Path};

/// 将相对路径转换为 '/' 分隔的字符串，丢弃所有 `.` 组件
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// 目录的最后一个组件名，根目录返回 None
pub fn dir_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
