//! # 命令处理逻辑模块
//!
//! 包含处理 `encode` 和 `decode` 子命令的高级业务逻辑。
//! 本模块负责推导默认输出路径、执行覆盖保护、调用编解码核心，
//! 以及向用户报告结果。

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::decoder::decode;
use crate::encoder::encode;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责确定输出路径、检查覆盖保护，然后调用编码核心把秘密文件
/// 嵌入载体图像，最后向用户报告结果。
///
/// # Arguments
///
/// * `args` - 包含载体、秘密文件路径与标记的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 载体或秘密文件无法打开。
/// * 载体容量不足，或秘密文件扩展名超过上限。
/// * 编码过程中发生读写错误。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| default_stego_path(&args.image));

    anyhow::ensure!(
        args.force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    let summary = encode(&args.image, &args.secret, &args.marker, &dest).with_context(|| {
        format!(
            "Unable to embed {} into {}",
            args.secret.to_string_lossy().red().bold(),
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The secret file has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    println!(
        "Embedded {} payload bytes (extension: {})",
        summary.payload_size.to_string().green().bold(),
        if summary.extension.is_empty() {
            "none".yellow().to_string()
        } else {
            summary.extension.green().bold().to_string()
        }
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 负责确定输出路径、检查覆盖保护，然后调用解码核心校验标记并
/// 提取秘密载荷，最后报告恢复的字节数与原始扩展名。
/// 解码出的扩展名只做提示，输出文件不会被自动重命名。
///
/// # Arguments
///
/// * `args` - 包含隐写图像路径与标记的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 隐写图像无法打开。
/// * 标记不匹配，或图像不含嵌入数据。
/// * 声明的扩展名长度超过上限，或图像数据被截断。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| default_output_path(&args.image));

    anyhow::ensure!(
        args.force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    let summary = decode(&args.image, &args.marker, &dest).with_context(|| {
        format!(
            "Unable to extract hidden data from {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The secret file has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    println!(
        "Recovered {} bytes (original extension: {})",
        summary.payload_size.to_string().green().bold(),
        if summary.extension.is_empty() {
            "none".yellow().to_string()
        } else {
            summary.extension.green().bold().to_string()
        }
    );

    Ok(())
}

/// 为 encode 推导默认输出路径：载体同目录下的 `stego_<原文件名>.bmp`。
fn default_stego_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "carrier".to_string());
    image.with_file_name(format!("stego_{stem}.bmp"))
}

/// 为 decode 推导默认输出路径：隐写图像同目录下的 `decoded_<原文件名>.bin`。
fn default_output_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stego".to_string());
    image.with_file_name(format!("decoded_{stem}.bin"))
}
