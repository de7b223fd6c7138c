//! # 印章生成工具入口
//!
//! 按参考格式生成印章：红矩形边框、黑色内底、红色两行文字居中，
//! 结果写到基准目录下的 `印章.png`。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use seal_stamp::error::AppError;
use seal_stamp::generator::StampGenerator;
use seal_stamp::{settings, storage};

#[derive(Parser)]
#[command(version, about = "生成横版红框印章 PNG")]
struct Cli {}

fn run() -> Result<PathBuf, AppError> {
    let base = storage::base_dir()?;
    let settings = settings::load_settings(&base);
    let generator = StampGenerator::new(settings.generator)?;
    generator.run(&base)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let _cli = Cli::parse();

    match run() {
        Ok(path) => {
            println!("已保存: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("印章生成失败: {err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
