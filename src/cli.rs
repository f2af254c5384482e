//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。
//! 标记字符串在解析阶段即完成校验，编解码核心拿到的参数总是合法的。

use crate::constants::MARKER_MAX_LEN;
use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在未压缩的 24 位 BMP 图像中隐藏或提取任意文件。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在未压缩的 24 位 BMP 图像中隐藏或提取任意文件。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (嵌入) 和 decode (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 把秘密文件嵌入 24 位 BMP 载体图像。
    Encode(EncodeArgs),

    /// 从隐写图像中提取秘密文件。
    Decode(DecodeArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 作为载体的输入 BMP 图像路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的秘密文件路径。
    #[arg(short, long)]
    pub secret: PathBuf,

    /// 嵌入的标记字符串 (1-99 字节，不含 NUL)，提取时必须提供相同的值。
    #[arg(short, long, value_parser = parse_marker)]
    pub marker: String,

    /// 隐写完成后，保存结果图像的输出路径。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已嵌入秘密文件的隐写图像路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 编码时使用的标记字符串。
    #[arg(short, long, value_parser = parse_marker)]
    pub marker: String,

    /// 提取完成后，保存秘密文件内容的输出路径。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 校验标记字符串：非空、不超过上限、不含 NUL 字节。
fn parse_marker(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("marker must not be empty".to_string());
    }
    if value.len() > MARKER_MAX_LEN {
        return Err(format!("marker must be at most {MARKER_MAX_LEN} bytes"));
    }
    if value.contains('\0') {
        return Err("marker must not contain NUL bytes".to_string());
    }
    Ok(value.to_string())
}
