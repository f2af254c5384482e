//! # 位打包模块
//!
//! 在有效载荷与载体字节之间进行 bit 级转换：把一个字节或 32 位整数的
//! 每一位写入连续载体字节的最低有效位 (LSB)，或者反向恢复。
//! 除最低位外，载体字节的其余 7 位保持不变。

use crate::constants::{CARRIER_BYTES_PER_BYTE, CARRIER_BYTES_PER_U32};

/// 把 `value` 的 8 个 bit 依次写入 8 个载体字节的最低有效位。
///
/// bit i 写入 `carrier[i]`，低位在前。纯变换，无任何错误条件。
pub fn pack_byte(value: u8, carrier: &mut [u8; CARRIER_BYTES_PER_BYTE]) {
    for (i, byte) in carrier.iter_mut().enumerate() {
        *byte = (*byte & 0xFE) | ((value >> i) & 1);
    }
}

/// 从 8 个载体字节的最低有效位恢复一个字节。
///
/// `pack_byte` 的精确逆操作 (只有 LSB 参与运算)。
pub fn unpack_byte(carrier: &[u8; CARRIER_BYTES_PER_BYTE]) -> u8 {
    carrier
        .iter()
        .enumerate()
        .fold(0u8, |acc, (i, &byte)| acc | ((byte & 1) << i))
}

/// 把 32 位整数的每一位依次写入 32 个载体字节的最低有效位，低位在前。
pub fn pack_u32(value: u32, carrier: &mut [u8; CARRIER_BYTES_PER_U32]) {
    for (i, byte) in carrier.iter_mut().enumerate() {
        *byte = (*byte & 0xFE) | (((value >> i) & 1) as u8);
    }
}

/// 从 32 个载体字节的最低有效位恢复一个 32 位整数。`pack_u32` 的逆操作。
pub fn unpack_u32(carrier: &[u8; CARRIER_BYTES_PER_U32]) -> u32 {
    carrier
        .iter()
        .enumerate()
        .fold(0u32, |acc, (i, &byte)| acc | (((byte & 1) as u32) << i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_byte_round_trip() {
        // 任意初始载体内容都不影响恢复结果
        for pattern in [0x00u8, 0xFF, 0xFE, 0x01, 0xA5] {
            for value in 0..=u8::MAX {
                let mut carrier = [pattern; CARRIER_BYTES_PER_BYTE];
                pack_byte(value, &mut carrier);
                assert_eq!(unpack_byte(&carrier), value);
            }
        }
    }

    #[test]
    fn pack_byte_only_touches_lsb() {
        let original = [0b1010_1010u8; CARRIER_BYTES_PER_BYTE];
        let mut carrier = original;
        pack_byte(0b0110_0101, &mut carrier);
        for (before, after) in original.iter().zip(carrier.iter()) {
            assert_eq!(before & 0xFE, after & 0xFE);
        }
    }

    #[test]
    fn pack_byte_is_lsb_first() {
        let mut carrier = [0u8; CARRIER_BYTES_PER_BYTE];
        pack_byte(0b0000_0001, &mut carrier);
        assert_eq!(carrier[0] & 1, 1);
        assert!(carrier[1..].iter().all(|&b| b & 1 == 0));
    }

    #[test]
    fn pack_unpack_u32_round_trip() {
        for pattern in [0x00u8, 0xFF, 0x5A] {
            for value in [0u32, 1, 42, 0x1234_5678, 0x8000_0000, u32::MAX] {
                let mut carrier = [pattern; CARRIER_BYTES_PER_U32];
                pack_u32(value, &mut carrier);
                assert_eq!(unpack_u32(&carrier), value);
            }
        }
    }

    #[test]
    fn pack_u32_only_touches_lsb() {
        let original = [0b0101_0110u8; CARRIER_BYTES_PER_U32];
        let mut carrier = original;
        pack_u32(0xDEAD_BEEF, &mut carrier);
        for (before, after) in original.iter().zip(carrier.iter()) {
            assert_eq!(before & 0xFE, after & 0xFE);
        }
    }
}
