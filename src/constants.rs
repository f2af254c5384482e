/// BMP 文件的标准头部大小 (字节)。
/// 编码时原样复制到输出，解码时直接跳过。
pub const BMP_HEADER_SIZE: usize = 54;

/// BMP 头部中图像宽度字段的偏移量 (4 字节小端整数)。
pub const WIDTH_OFFSET: usize = 18;

/// BMP 头部中图像高度字段的偏移量 (4 字节小端整数)。
pub const HEIGHT_OFFSET: usize = 22;

/// 嵌入单个字节所需的载体字节数。
/// 每个载体字节的最低有效位存储 1 bit，因此 8 bits 需要 8 个载体字节。
pub const CARRIER_BYTES_PER_BYTE: usize = 8;

/// 嵌入一个 32 位长度字段所需的载体字节数。
pub const CARRIER_BYTES_PER_U32: usize = 32;

/// 标记字符串的最大长度 (字节)。
pub const MARKER_MAX_LEN: usize = 99;

/// 秘密文件扩展名的最大长度 (字节，含前导点)。
pub const EXTENSION_MAX_LEN: usize = 9;
