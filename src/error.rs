//! # 错误类型模块
//!
//! 定义编解码核心的错误枚举。每个编解码操作都返回可区分具体失败种类的
//! `Result`，由上层 (handler) 负责把失败转换为面向用户的提示信息。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 编解码核心可能产生的错误。
#[derive(Debug, Error)]
pub enum CodecError {
    /// 无法打开输入或输出文件。
    #[error("unable to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 载体容量不足以容纳元数据与有效载荷。
    #[error(
        "not enough capacity in the carrier image: required {required_bits} bits, available {available_bits} bits"
    )]
    Capacity {
        required_bits: u64,
        available_bits: u64,
    },

    /// 解码出的标记与期望不符，或终止符不是 NUL。
    /// 这是解码路径唯一的认证关卡。
    #[error("marker mismatch: the image does not contain data embedded with this marker")]
    MarkerMismatch,

    /// 扩展名长度超出固定上限。
    #[error("extension length {declared} exceeds the maximum of {max} bytes")]
    ExtensionOverflow { declared: u32, max: usize },

    /// 其余 I/O 错误 (读写失败、图像数据被截断等)。
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
