//! Small 2D vector helpers used to build edge quads.
use glam::Vec2;

/// Unit vector in the direction of `v`, or `None` when `v` has zero length.
#[inline]
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let len = v.length();
    if len > 0.0 && len.is_finite() {
        Some(v / len)
    } else {
        None
    }
}

/// `v` rotated a quarter turn counter-clockwise.
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

#[inline]
pub fn scale(v: Vec2, factor: f32) -> Vec2 {
    v * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_yields_unit_length() {
        let n = normalize(Vec2::new(3.0, 4.0)).unwrap();
        assert_eq!(n, Vec2::new(0.6, 0.8));
    }

    #[test]
    fn normalize_rejects_zero_vector() {
        assert!(normalize(Vec2::ZERO).is_none());
        assert!(normalize(Vec2::new(f32::NAN, 1.0)).is_none());
    }

    #[test]
    fn perpendicular_is_counter_clockwise_quarter_turn() {
        assert_eq!(perpendicular(Vec2::X), Vec2::Y);
        assert_eq!(perpendicular(Vec2::Y), -Vec2::X);
        let v = Vec2::new(2.0, -5.0);
        assert_eq!(perpendicular(v).dot(v), 0.0);
    }

    #[test]
    fn scale_multiplies_both_components() {
        assert_eq!(scale(Vec2::new(1.5, -2.0), 2.0), Vec2::new(3.0, -4.0));
    }
}
