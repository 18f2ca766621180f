use anyhow::{Context, Result};
use clap::{ArgAction, ArgGroup, Parser};
use colored::*;
use std::env;
use std::io;

use set_mod::project::init_config_interactive;
use set_mod::toolchain::DEFAULT_GO;
use set_mod::{
    compose, locate_config, logging, plan, GoModInit, InitMode, ModuleInitializer, RealFs,
    SearchResult, SetModError, CONFIG_FILE_NAME, DEFAULT_PRE_SET,
};

/// set-mod - Go 模块初始化助手
///
/// 根据 mod-name.yaml 中的 pre-set 和当前目录位置推导模块路径，然后执行 `go mod init`
#[derive(Parser, Debug)]
#[command(name = "set-mod")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Initialize a Go module whose path is derived from mod-name.yaml.\n\n\
                  set-mod walks up from the current directory to the nearest mod-name.yaml,\n\
                  joins its 'pre-set' prefix with your position in the project tree and runs\n\
                  `go mod init` with the result.\n\n\
                  Examples:\n  \
                  set-mod widget     # creates ./widget, module <pre-set>/<rel-path>/widget\n  \
                  set-mod -c         # module <pre-set>/<current dir name>, in place"
)]
#[command(group(ArgGroup::new("mode").required(true).args(["module", "current"])))]
struct Cli {
    /// 新模块名（在当前目录下创建同名子目录）
    #[arg(value_name = "MODULE")]
    module: Option<String>,

    /// 在当前目录原地初始化，模块名取当前目录名
    #[arg(short = 'c', long)]
    current: bool,

    /// 只打印模块路径和工作目录，不创建目录也不执行 go
    #[arg(long)]
    dry_run: bool,

    /// 找不到 mod-name.yaml 时直接报错，不提示创建
    #[arg(long)]
    no_init: bool,

    /// go 可执行文件
    #[arg(long, env = "SET_MOD_GO", default_value = DEFAULT_GO, value_name = "PROGRAM")]
    go: String,

    /// 输出诊断日志（-v debug，-vv trace）
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn mode(&self) -> InitMode {
        match &self.module {
            Some(name) if !self.current => InitMode::Named(name.clone()),
            _ => InitMode::CurrentDir,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// 配置加载
// ═══════════════════════════════════════════════════════════════════

fn load_config(cwd: &std::path::Path, allow_init: bool) -> Result<SearchResult> {
    match locate_config(cwd, &RealFs) {
        Ok(result) => Ok(result),
        Err(err) if err.is_config_not_found() && allow_init => {
            let stdin = io::stdin();
            init_config_interactive(cwd, stdin.lock(), io::stdout(), DEFAULT_PRE_SET)
                .with_context(|| format!("Error creating {}", CONFIG_FILE_NAME))?;

            locate_config(cwd, &RealFs)
                .with_context(|| format!("Error loading newly created {}", CONFIG_FILE_NAME))
        }
        Err(err) => {
            Err(anyhow::Error::new(err).context(format!("Error loading {}", CONFIG_FILE_NAME)))
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════

fn run(cli: &Cli) -> Result<()> {
    let cwd = env::current_dir().context("Error getting current directory")?;
    let search = load_config(&cwd, !cli.no_init)?;
    let mode = cli.mode();

    if cli.dry_run {
        let plan = plan(&search.config, &search.project_root, &cwd, &mode)?;
        println!("Config: {}", search.config_path().display());
        println!("Module path: {}", plan.module_path.cyan());
        println!("Working directory: {}", plan.work_dir.display());
        return Ok(());
    }

    let plan = compose(&search.config, &search.project_root, &cwd, &mode, &RealFs)?;

    println!("Initializing Go module at {}", plan.module_path.cyan());
    GoModInit::new(cli.go.clone()).init_module(&plan.module_path, &plan.work_dir)?;

    println!("{}", "Go module initialized successfully!".green());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        let code = err
            .downcast_ref::<SetModError>()
            .map(SetModError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
