//! 统计计算用的小工具

/// 四舍五入到指定小数位
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// `part ÷ whole × 100`，`whole` 为 0 时返回 0
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(66.666_666, 2), 66.67);
        assert_eq!(round_to(12.344, 2), 12.34);
        assert_eq!(round_to(12.5, 0), 13.0);
    }

    #[test]
    fn test_percentage_handles_zero_whole() {
        assert_eq!(percentage(3.0, 0.0), 0.0);
        assert_eq!(percentage(45.0, 50.0), 90.0);
    }
}
