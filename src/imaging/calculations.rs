//! Pure calculation functions for variant dimensions.
//!
//! All functions here are pure and testable without any I/O or pixels.

/// Height that preserves the source aspect ratio at an exact target width.
///
/// Standard f64 rounding, clamped to at least 1 pixel so extreme aspect
/// ratios never produce a zero-height image. The same rounding rule is used
/// for every variant, which keeps repeated runs byte-identical.
pub fn scaled_height(source: (u32, u32), target_width: u32) -> u32 {
    let (src_w, src_h) = source;
    let height = (src_h as f64 * target_width as f64 / src_w as f64).round() as u32;
    height.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_height_landscape() {
        // 2000x1500 at width 1000 → 750
        assert_eq!(scaled_height((2000, 1500), 1000), 750);
    }

    #[test]
    fn scaled_height_portrait_upscale() {
        // 300x400 at width 600 → 800
        assert_eq!(scaled_height((300, 400), 600), 800);
    }

    #[test]
    fn scaled_height_rounds_to_nearest() {
        // 3x2 at width 100 → 66.67 → 67
        assert_eq!(scaled_height((3, 2), 100), 67);
        // 3x1 at width 100 → 33.33 → 33
        assert_eq!(scaled_height((3, 1), 100), 33);
    }

    #[test]
    fn scaled_height_never_zero() {
        // 1000x1 at width 10 → 0.01 → clamped to 1
        assert_eq!(scaled_height((1000, 1), 10), 1);
    }

    #[test]
    fn scaled_height_identity_at_source_width() {
        assert_eq!(scaled_height((2000, 1500), 2000), 1500);
    }
}
