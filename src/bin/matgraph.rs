//! matgraph 命令行工具
//!
//! 读取邻接矩阵文件，打印各种图表示以及 BFS/DFS 遍历结果

use anyhow::Context;
use clap::Parser;
use matgraph::cli::run_session;
use matgraph::config::{ReportConfig, ReportFormat, DEFAULT_MATRIX_PATH};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "matgraph")]
#[command(version = matgraph::VERSION, about = "邻接矩阵转换与图遍历工具")]
struct Args {
    /// 邻接矩阵文件路径
    #[arg(short, long, default_value = DEFAULT_MATRIX_PATH)]
    matrix: PathBuf,

    /// 起始顶点（不指定则交互式输入）
    #[arg(short, long)]
    start: Option<usize>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Plain)]
    format: ReportFormat,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> ReportConfig {
        let color = self.format != ReportFormat::Json && io::stdout().is_terminal();
        ReportConfig {
            matrix_path: self.matrix,
            start: self.start,
            format: self.format,
            color,
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(config: &ReportConfig) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();

    run_session(config, stdin.lock(), &mut stdout, &mut stderr)
        .with_context(|| format!("处理 {} 失败", config.matrix_path.display()))?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = args.into_config();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("错误: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
