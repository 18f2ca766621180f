//! 文件系统工具
//!
//! 核心逻辑只通过 [`ProjectFs`] 访问文件系统，测试时可以换成内存实现

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, SetModError};

/// 定位配置与创建模块目录所需的文件系统能力
pub trait ProjectFs {
    /// 路径是否为普通文件
    fn is_file(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// 递归创建目录，目录已存在时成功
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// 真实文件系统
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl ProjectFs for RealFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}

/// 安全读取文件内容
pub fn read_file(fs: &impl ProjectFs, path: &Path) -> Result<String> {
    fs.read_to_string(path)
        .map_err(|e| SetModError::io(format!("Failed to read file: {}", path.display()), e))
}

/// 创建目录（包括父目录）
pub fn create_dir_all(fs: &impl ProjectFs, path: &Path) -> Result<()> {
    fs.create_dir_all(path).map_err(|e| {
        SetModError::io(
            format!("Failed to create directory: {}", path.display()),
            e,
        )
    })
}

/// 写入新文件，文件已存在时报错而不是覆盖
pub fn write_new_file(path: &Path, content: &str) -> Result<()> {
    use std::fs::OpenOptions;
    use std::io::Write;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| SetModError::io(format!("Failed to create file: {}", path.display()), e))?;

    file.write_all(content.as_bytes())
        .map_err(|e| SetModError::io(format!("Failed to write file: {}", path.display()), e))
}

#[cfg(test)]
pub(crate) mod memory {
    use super::ProjectFs;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};
    use std::io;
    use std::path::{Path, PathBuf};

    /// 内存文件系统，记录每次 is_file 查询，便于断言遍历路径
    #[derive(Debug, Default)]
    pub struct MemoryFs {
        files: BTreeMap<PathBuf, String>,
        dirs: RefCell<BTreeSet<PathBuf>>,
        pub probes: RefCell<Vec<PathBuf>>,
    }

    impl MemoryFs {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
            self.files.insert(path.into(), content.to_string());
            self
        }

        pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
            self.dirs.borrow_mut().insert(path.into());
            self
        }

        pub fn created_dirs(&self) -> Vec<PathBuf> {
            self.dirs.borrow().iter().cloned().collect()
        }
    }

    impl ProjectFs for MemoryFs {
        fn is_file(&self, path: &Path) -> bool {
            self.probes.borrow_mut().push(path.to_path_buf());
            self.files.contains_key(path)
        }

        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }

        fn create_dir_all(&self, path: &Path) -> io::Result<()> {
            if self.files.contains_key(path) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "file exists at path",
                ));
            }
            self.dirs.borrow_mut().insert(path.to_path_buf());
            Ok(())
        }
    }
}
