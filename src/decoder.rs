//! # 解码器模块
//!
//! 从隐写图像中按编码时的顺序恢复标记、元数据与秘密载荷。
//! 标记 (连同 NUL 终止符) 是解码路径唯一的认证关卡：标记不匹配或图像
//! 根本不含嵌入数据时，在读取任何后续字段之前拒绝。
//! 载荷逐字节流式写入输出文件，不要求整个载荷装入内存。

use crate::bitpack::{unpack_byte, unpack_u32};
use crate::constants::{
    BMP_HEADER_SIZE, CARRIER_BYTES_PER_BYTE, CARRIER_BYTES_PER_U32, EXTENSION_MAX_LEN,
};
use crate::error::CodecError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// 一次解码调用的汇总信息。
///
/// 解码出的扩展名只做报告，解码器不会据此重命名输出文件。
#[derive(Debug)]
pub struct DecodeSummary {
    /// 编码时记录的扩展名 (含前导点，可能为空)。
    pub extension: String,
    /// 恢复的载荷字节数。
    pub payload_size: u32,
}

/// 单次解码调用的会话状态。
struct Decoder {
    stego: BufReader<File>,
    output: BufWriter<File>,
}

impl Decoder {
    /// 读取 8 个载体字节，恢复一个嵌入字节。
    fn extract_byte(&mut self) -> Result<u8, CodecError> {
        let mut group = [0u8; CARRIER_BYTES_PER_BYTE];
        self.stego.read_exact(&mut group)?;
        Ok(unpack_byte(&group))
    }

    /// 读取 32 个载体字节，恢复一个 32 位长度字段。
    fn extract_u32(&mut self) -> Result<u32, CodecError> {
        let mut group = [0u8; CARRIER_BYTES_PER_U32];
        self.stego.read_exact(&mut group)?;
        Ok(unpack_u32(&group))
    }

    /// 解码并校验标记字符串及其 NUL 终止符。
    fn verify_marker(&mut self, marker: &str) -> Result<(), CodecError> {
        let mut candidate = Vec::with_capacity(marker.len());
        for _ in 0..marker.len() {
            candidate.push(self.extract_byte()?);
        }
        let terminator = self.extract_byte()?;
        if candidate != marker.as_bytes() || terminator != 0 {
            return Err(CodecError::MarkerMismatch);
        }
        Ok(())
    }
}

/// 从隐写图像中提取秘密载荷并写入输出文件。
///
/// 提取顺序与编码写入顺序严格一致：标记、扩展名长度、扩展名、
/// 载荷大小、载荷字节。每个长度字段决定下一字段消耗多少载体字节。
///
/// # Errors
///
/// * [`CodecError::FileOpen`] - 隐写图像或输出文件无法打开。
/// * [`CodecError::MarkerMismatch`] - 标记不匹配或终止符不是 NUL。
/// * [`CodecError::ExtensionOverflow`] - 声明的扩展名长度超过上限。
/// * [`CodecError::Io`] - 读写失败，包括图像数据提前结束。
pub fn decode(
    stego_path: &Path,
    marker: &str,
    output_path: &Path,
) -> Result<DecodeSummary, CodecError> {
    let stego_file = File::open(stego_path).map_err(|source| CodecError::FileOpen {
        path: stego_path.to_path_buf(),
        source,
    })?;
    let output_file = File::create(output_path).map_err(|source| CodecError::FileOpen {
        path: output_path.to_path_buf(),
        source,
    })?;

    let mut stego = BufReader::new(stego_file);
    // 跳过 BMP 头部，不校验其内容
    stego.seek(SeekFrom::Start(BMP_HEADER_SIZE as u64))?;

    let mut session = Decoder {
        stego,
        output: BufWriter::new(output_file),
    };

    session.verify_marker(marker)?;

    let extension_len = session.extract_u32()?;
    if extension_len as usize > EXTENSION_MAX_LEN {
        return Err(CodecError::ExtensionOverflow {
            declared: extension_len,
            max: EXTENSION_MAX_LEN,
        });
    }

    let mut extension_bytes = Vec::with_capacity(extension_len as usize);
    for _ in 0..extension_len {
        extension_bytes.push(session.extract_byte()?);
    }
    let extension = String::from_utf8_lossy(&extension_bytes).into_owned();

    let payload_size = session.extract_u32()?;
    for _ in 0..payload_size {
        let byte = session.extract_byte()?;
        session.output.write_all(&[byte])?;
    }
    session.output.flush()?;

    Ok(DecodeSummary {
        extension,
        payload_size,
    })
}
