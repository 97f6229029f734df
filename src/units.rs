//! Unit conversions for slide geometry.
//!
//! All OOXML drawing coordinates are EMUs (English Metric Units),
//! 914400 EMU = 1 inch.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pt_to_emu() {
        assert_eq!(pt_to_emu(50.0), 635_000);
        assert_eq!(pt_to_emu(100.0), 1_270_000);
        assert_eq!(pt_to_emu(800.0), 10_160_000);
    }

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(inches_to_emu(10.0), 9_144_000);
        assert_eq!(inches_to_emu(7.5), 6_858_000);
    }
}
