//! # 印章提取工具入口
//!
//! 从文档图片中提取红色印章（红框 + 红字），保存为透明背景 PNG。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use seal_stamp::error::AppError;
use seal_stamp::extractor::{SourceCandidates, StampExtractor};
use seal_stamp::{settings, storage};

#[derive(Parser)]
#[command(version, about = "从文档图片中提取红色印章为透明背景 PNG")]
struct Cli {
    #[arg(help = "源图片路径，省略时使用默认路径或备用路径")]
    source: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<PathBuf, AppError> {
    let base = storage::base_dir()?;
    let settings = settings::load_settings(&base);
    let candidates = SourceCandidates::from_environment(&base, cli.source);
    StampExtractor::new(settings.extractor).run(&base, &candidates)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(path) => {
            println!("已保存: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("印章提取失败: {err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
