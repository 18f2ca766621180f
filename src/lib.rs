// set-mod - Library Root
//
// 查找 mod-name.yaml，推导 Go 模块路径，再交给 `go mod init`

pub mod config;
pub mod error;
pub mod logging;
pub mod module_path;
pub mod project;
pub mod toolchain;
pub mod utils;

// 重新导出常用类型
pub use config::{ModConfig, CONFIG_FILE_NAME, DEFAULT_PRE_SET};
pub use error::{Result, SetModError};
pub use module_path::{compose, plan, InitMode, ModulePlan};
pub use project::{locate_config, SearchResult};
pub use toolchain::{GoModInit, ModuleInitializer};
pub use utils::{ProjectFs, RealFs};
