//! 模块路径计算
//!
//! 由 `pre-set` 前缀、当前目录相对项目根目录的路径以及（可选的）新模块名
//! 拼出完整的 Go 模块路径，并确定 `go mod init` 的工作目录。
//!
//! 两种模式：
//! - [`InitMode::Named`]：在当前目录下新建子目录，模块路径为 `pre-set/相对路径/模块名`
//! - [`InitMode::CurrentDir`]：原地初始化，模块路径为 `pre-set/当前目录名`

use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::config::ModConfig;
use crate::error::{Result, SetModError};
use crate::utils::{create_dir_all, dir_name, to_slash, ProjectFs};

/// 模块路径分隔符
pub const SEPARATOR: char = '/';

/// 调用模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitMode {
    /// 新建名为该值的子模块
    Named(String),
    /// 使用当前目录名，不创建目录
    CurrentDir,
}

/// 计算结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePlan {
    pub module_path: String,
    /// `go mod init` 的执行目录
    pub work_dir: PathBuf,
    /// 需要创建的目录（仅 Named 模式）
    pub create_dir: Option<PathBuf>,
}

/// 计算 `cwd` 相对 `project_root` 的路径（纯词法），二者相同时为空字符串
pub fn relative_path(project_root: &Path, cwd: &Path) -> Result<String> {
    let rel = cwd
        .strip_prefix(project_root)
        .map_err(|_| SetModError::RelativePath {
            cwd: cwd.to_path_buf(),
            root: project_root.to_path_buf(),
        })?;

    Ok(normalize_relative(&to_slash(rel)))
}

/// 去掉开头的 `.` / `./` 标记，统一成 '/' 分隔
///
/// 只去掉独立的 `.` 组件，`.config` 这类目录名保持不变
pub fn normalize_relative(rel: &str) -> String {
    #[cfg(windows)]
    let rel = rel.replace('\\', "/");

    rel.split(SEPARATOR)
        .filter(|part| !part.is_empty() && *part != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// 用单个 '/' 拼接各段，忽略空段，结果不含首尾或重复的分隔符
pub fn join_module_path(segments: &[&str]) -> String {
    segments
        .iter()
        .flat_map(|segment| segment.split(SEPARATOR))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// 校验模块名：不能为空、不能以 `-` 开头、不能是绝对路径、不能含 `.` / `..`
fn validate_module_name(name: &str) -> Result<()> {
    let invalid = |reason| SetModError::InvalidModuleName {
        name: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }

    // `-c` 是保留的模式选择符，`set-mod -- -c` 也不能把它当模块名
    if name.starts_with('-') {
        return Err(invalid("name must not start with '-'"));
    }

    let path = Path::new(name);
    if path.is_absolute() || name.starts_with(SEPARATOR) {
        return Err(invalid("name must be relative"));
    }

    // Path::components 会吞掉中间的 `.`，这里按分隔符逐段检查
    if name
        .split(|c| c == SEPARATOR || c == '\\')
        .any(|part| part == "." || part == "..")
        || path
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(invalid("name must not contain '.' or '..' components"));
    }

    Ok(())
}

/// 计算模块路径与工作目录，不触碰文件系统
pub fn plan(
    config: &ModConfig,
    project_root: &Path,
    cwd: &Path,
    mode: &InitMode,
) -> Result<ModulePlan> {
    // 前缀为空必须在任何路径计算之前失败
    let pre_set = config.pre_set()?;

    let rel = relative_path(project_root, cwd)?;
    debug!("Relative path from {}: {:?}", project_root.display(), rel);

    let plan = match mode {
        InitMode::CurrentDir => {
            let name = dir_name(cwd).ok_or_else(|| SetModError::InvalidPath(cwd.to_path_buf()))?;
            ModulePlan {
                module_path: join_module_path(&[pre_set, &name]),
                work_dir: cwd.to_path_buf(),
                create_dir: None,
            }
        }
        InitMode::Named(name) => {
            validate_module_name(name)?;
            let target = cwd.join(name);
            ModulePlan {
                module_path: join_module_path(&[pre_set, &rel, name]),
                work_dir: target.clone(),
                create_dir: Some(target),
            }
        }
    };

    debug!("Module path: {}", plan.module_path);
    Ok(plan)
}

/// 计算模块路径，并在 Named 模式下创建模块目录（已存在时不报错）
pub fn compose(
    config: &ModConfig,
    project_root: &Path,
    cwd: &Path,
    mode: &InitMode,
    fs: &impl ProjectFs,
) -> Result<ModulePlan> {
    let plan = plan(config, project_root, cwd, mode)?;

    if let Some(dir) = &plan.create_dir {
        create_dir_all(fs, dir)?;
        debug!("Ensured module directory {}", dir.display());
    }

    Ok(plan)
}
