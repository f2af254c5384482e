//! # 编码器模块
//!
//! 把秘密文件按 LSB 替换法嵌入 BMP 载体图像的像素数据中。
//!
//! 容器布局 (按写入顺序)：标记字符串 + NUL 终止符、扩展名长度 (32 位)、
//! 扩展名、载荷大小 (32 位)、载荷字节，之后的像素字节原样复制。
//! 每个嵌入字节占用 8 个载体字节，每个 32 位字段占用 32 个载体字节。

use crate::bitpack::{pack_byte, pack_u32};
use crate::constants::{
    BMP_HEADER_SIZE, CARRIER_BYTES_PER_BYTE, CARRIER_BYTES_PER_U32, EXTENSION_MAX_LEN,
    HEIGHT_OFFSET, WIDTH_OFFSET,
};
use crate::error::CodecError;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// 一次编码调用的汇总信息，供上层报告结果。
#[derive(Debug)]
pub struct EncodeSummary {
    /// 嵌入的载荷字节数。
    pub payload_size: u64,
    /// 嵌入的扩展名 (含前导点，可能为空)。
    pub extension: String,
}

/// 单次编码调用的会话状态。
///
/// 读写流在会话内独占持有，调用结束 (无论成败) 随会话一起释放。
struct Encoder {
    carrier: BufReader<File>,
    output: BufWriter<File>,
}

impl Encoder {
    /// 读取 8 个载体字节，嵌入一个字节后写入输出。
    fn embed_byte(&mut self, value: u8) -> Result<(), CodecError> {
        let mut group = [0u8; CARRIER_BYTES_PER_BYTE];
        self.carrier.read_exact(&mut group)?;
        pack_byte(value, &mut group);
        self.output.write_all(&group)?;
        Ok(())
    }

    /// 读取 32 个载体字节，嵌入一个 32 位长度字段后写入输出。
    fn embed_u32(&mut self, value: u32) -> Result<(), CodecError> {
        let mut group = [0u8; CARRIER_BYTES_PER_U32];
        self.carrier.read_exact(&mut group)?;
        pack_u32(value, &mut group);
        self.output.write_all(&group)?;
        Ok(())
    }

    /// 逐字节嵌入一段数据。
    fn embed_bytes(&mut self, data: &[u8]) -> Result<(), CodecError> {
        for &byte in data {
            self.embed_byte(byte)?;
        }
        Ok(())
    }
}

/// 把秘密文件嵌入载体图像，生成隐写图像。
///
/// 容量检查在写入任何像素字节之前完成；一旦开始写入，中途失败会留下
/// 不完整的输出文件，编码器不做回滚。
///
/// # Errors
///
/// * [`CodecError::FileOpen`] - 载体、秘密文件或输出文件无法打开。
/// * [`CodecError::ExtensionOverflow`] - 秘密文件扩展名超过上限。
/// * [`CodecError::Capacity`] - 载体像素数据容纳不下元数据与载荷。
/// * [`CodecError::Io`] - 读写失败，包括载体头部或像素数据被截断。
pub fn encode(
    carrier_path: &Path,
    payload_path: &Path,
    marker: &str,
    output_path: &Path,
) -> Result<EncodeSummary, CodecError> {
    let carrier_file = File::open(carrier_path).map_err(|source| CodecError::FileOpen {
        path: carrier_path.to_path_buf(),
        source,
    })?;
    let mut payload_file = File::open(payload_path).map_err(|source| CodecError::FileOpen {
        path: payload_path.to_path_buf(),
        source,
    })?;
    let output_file = File::create(output_path).map_err(|source| CodecError::FileOpen {
        path: output_path.to_path_buf(),
        source,
    })?;

    let mut carrier = BufReader::new(carrier_file);
    let mut header = [0u8; BMP_HEADER_SIZE];
    carrier.read_exact(&mut header)?;

    let extension = dot_extension(payload_path);
    if extension.len() > EXTENSION_MAX_LEN {
        return Err(CodecError::ExtensionOverflow {
            declared: extension.len() as u32,
            max: EXTENSION_MAX_LEN,
        });
    }

    let payload_size = payload_file.metadata()?.len();
    let available_bits = pixel_capacity_bits(&header);
    let required_bits = required_bits(marker.len(), extension.len(), payload_size);

    // 载荷大小必须能放进 32 位长度字段
    if available_bits <= required_bits || payload_size > u64::from(u32::MAX) {
        return Err(CodecError::Capacity {
            required_bits,
            available_bits,
        });
    }

    let mut session = Encoder {
        carrier,
        output: BufWriter::new(output_file),
    };

    session.output.write_all(&header)?;
    session.embed_bytes(marker.as_bytes())?;
    session.embed_byte(0)?;
    session.embed_u32(extension.len() as u32)?;
    session.embed_bytes(extension.as_bytes())?;
    session.embed_u32(payload_size as u32)?;

    let mut payload = Vec::with_capacity(payload_size as usize);
    payload_file.read_to_end(&mut payload)?;
    session.embed_bytes(&payload)?;

    io::copy(&mut session.carrier, &mut session.output)?;
    session.output.flush()?;

    Ok(EncodeSummary {
        payload_size,
        extension,
    })
}

/// 从 BMP 头部读取宽高，计算像素数据的嵌入容量 (bit 数)。
///
/// 宽 × 高 × 3 即像素数据字节数，每个字节可承载 1 bit。
fn pixel_capacity_bits(header: &[u8; BMP_HEADER_SIZE]) -> u64 {
    let width = header_field_u32(header, WIDTH_OFFSET);
    let height = header_field_u32(header, HEIGHT_OFFSET);
    u64::from(width)
        .saturating_mul(u64::from(height))
        .saturating_mul(3)
}

/// 读取头部中给定偏移处的 4 字节小端整数。
fn header_field_u32(header: &[u8; BMP_HEADER_SIZE], offset: usize) -> u32 {
    u32::from_le_bytes([
        header[offset],
        header[offset + 1],
        header[offset + 2],
        header[offset + 3],
    ])
}

/// 计算嵌入全部元数据与载荷所需的 bit 数。
///
/// 标记字节 + NUL 终止符各占 8 bit，两个 32 位长度字段各占 32 bit，
/// 扩展名与载荷每字节占 8 bit。饱和运算保证容量比较不会溢出。
fn required_bits(marker_len: usize, extension_len: usize, payload_size: u64) -> u64 {
    (marker_len as u64 + 1 + extension_len as u64)
        .saturating_add(payload_size)
        .saturating_mul(8)
        .saturating_add(2 * CARRIER_BYTES_PER_U32 as u64)
}

/// 取出文件名的扩展名 (含前导点)；没有扩展名时返回空串。
fn dot_extension(path: &Path) -> String {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| format!(".{extension}"))
        .unwrap_or_default()
}
