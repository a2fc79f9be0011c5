use crate::analysis::color::Color;

/// Minimum contrast ratio for WCAG AA conformance (normal text).
pub const AA_MINIMUM: f64 = 4.5;
/// Minimum contrast ratio for WCAG AAA conformance (normal text).
pub const AAA_MINIMUM: f64 = 7.0;

/// WCAG 2.x contrast ratio between two colors, in [1.0, 21.0].
///
/// ratio = (L_lighter + 0.05) / (L_darker + 0.05), so the result is the
/// same regardless of argument order.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Round a ratio to 2 decimal places for reporting. Threshold checks use
/// the unrounded value; rounding first would misclassify ratios that sit
/// just below a boundary.
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

/// Pass/fail against the AA/AAA thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceVerdict {
    pub passes_aa: bool,
    pub passes_aaa: bool,
}

impl ComplianceVerdict {
    /// Classify an unrounded ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            passes_aa: ratio >= AA_MINIMUM,
            passes_aaa: ratio >= AAA_MINIMUM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9, "B/W contrast: {ratio}");
    }

    #[test]
    fn same_color_is_exactly_1() {
        for color in [Color::BLACK, Color::WHITE, Color::new(90, 14, 200)] {
            assert_eq!(contrast_ratio(color, color), 1.0);
        }
    }

    #[test]
    fn ratio_is_symmetric() {
        let pairs = [
            (Color::new(200, 50, 70), Color::new(25, 25, 100)),
            (Color::new(255, 0, 0), Color::WHITE),
            (Color::new(3, 200, 40), Color::new(250, 250, 0)),
        ];
        for (a, b) in pairs {
            assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }
    }

    #[test]
    fn ratio_stays_in_bounds() {
        for r in (0..=255).step_by(85) {
            for g in (0..=255).step_by(85) {
                let a = Color::new(r as u8, g as u8, 30);
                let b = Color::new(g as u8, 200, r as u8);
                let ratio = contrast_ratio(a, b);
                assert!((1.0..=21.0).contains(&ratio), "ratio out of bounds: {ratio}");
            }
        }
    }

    #[test]
    fn gray_on_white_matches_reference() {
        // colord reports 4.54 for #767676 on white
        let ratio = contrast_ratio(Color::new(0x76, 0x76, 0x76), Color::WHITE);
        assert!((ratio - 4.54).abs() < 0.01, "gray contrast: {ratio}");
    }

    #[test]
    fn aa_boundary_is_inclusive() {
        assert!(ComplianceVerdict::from_ratio(4.5).passes_aa);
        assert!(!ComplianceVerdict::from_ratio(4.49999).passes_aa);
    }

    #[test]
    fn aaa_boundary_is_inclusive() {
        let verdict = ComplianceVerdict::from_ratio(7.0);
        assert!(verdict.passes_aa);
        assert!(verdict.passes_aaa);
        assert!(!ComplianceVerdict::from_ratio(6.99999).passes_aaa);
    }

    #[test]
    fn thresholds_apply_before_display_rounding() {
        // 4.49999 displays as 4.5 but must still fail AA
        let ratio = 4.49999;
        assert_eq!(round_ratio(ratio), 4.5);
        assert!(!ComplianceVerdict::from_ratio(ratio).passes_aa);
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round_ratio(3.9494), 3.95);
        assert_eq!(round_ratio(5.3172), 5.32);
        assert_eq!(round_ratio(21.0), 21.0);
    }
}
