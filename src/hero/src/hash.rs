//src/hero/src/hash.rs

/// 32位滚动哈希：`acc = acc * 31 + code_unit`（有符号32位回绕），返回绝对值。
///
/// 按 UTF-16 编码单元迭代，与浏览器端铸造时的结果保持一致。
/// 仅用作属性生成的种子，不具备任何安全性。
pub fn hash_string(text: &str) -> u32 {
    text.encode_utf16()
        .fold(0i32, |acc, unit| {
            acc.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_values() {
        assert_eq!(hash_string(""), 0);
        assert_eq!(hash_string("a"), 97);
        assert_eq!(hash_string("hello"), 99_162_322);
        assert_eq!(hash_string("Blaze Guardian"), 1_274_098_031);
    }

    #[test]
    fn test_i32_min_wraps_to_positive() {
        // 累加器恰好落在 i32::MIN
        assert_eq!(hash_string("polygenelubricants"), 2_147_483_648);
    }

    #[test]
    fn test_utf16_units() {
        assert_eq!(hash_string("héros"), 103_100_597);
        // 代理对按两个编码单元计算
        assert_eq!(hash_string("🔥"), 1_772_680);
    }

    proptest! {
        #[test]
        fn prop_deterministic(text in ".*") {
            prop_assert_eq!(hash_string(&text), hash_string(&text));
        }
    }
}
