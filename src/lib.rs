//! # bmp_stego 库
//!
//! 本库包含 BMP LSB 隐写工具的核心逻辑：位打包原语、编码器、解码器，
//! 以及薄薄的一层命令行胶水。

// 声明库包含的所有模块。

pub mod bitpack;
pub mod cli;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod handler;
