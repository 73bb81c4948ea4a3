/// Values closer than this to zero, or to their nearest integer, print
/// without a fractional part.
pub const CHANNEL_EPSILON: f64 = 1e-12;

/// Number of fractional digits kept for non-integral channel values.
const CHANNEL_DECIMALS: usize = 6;

/// Canonical text for a single channel value.
///
/// Zero (of either sign) prints as `0`, integral values print without a
/// decimal point, and everything else keeps up to six decimals with
/// trailing zeros removed.
pub fn format_channel_value(value: f64) -> String {
    if value.abs() < CHANNEL_EPSILON {
        return "0".to_string();
    }

    let rounded = value.round();
    if (value - rounded).abs() < CHANNEL_EPSILON {
        return format!("{rounded:.0}");
    }

    let fixed = format!("{value:.prec$}", prec = CHANNEL_DECIMALS);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Plain decimal text for the `Frame Time:` header. Whole numbers keep a
/// single fractional zero (`1.0`), so the header always reads as a float.
pub fn format_frame_time(seconds: f64) -> String {
    if seconds.is_finite() && seconds.fract() == 0.0 {
        format!("{seconds:.1}")
    } else {
        seconds.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_prints_bare() {
        assert_eq!(format_channel_value(0.0), "0");
        assert_eq!(format_channel_value(-0.0), "0");
        assert_eq!(format_channel_value(1e-13), "0");
    }

    #[test]
    fn integral_values_drop_the_fraction() {
        assert_eq!(format_channel_value(90.0), "90");
        assert_eq!(format_channel_value(-12.0), "-12");
        assert_eq!(format_channel_value(1e20), "100000000000000000000");
    }

    #[test]
    fn fractions_keep_six_decimals_at_most() {
        assert_eq!(format_channel_value(1.5), "1.5");
        assert_eq!(format_channel_value(1.000001), "1.000001");
        assert_eq!(format_channel_value(1.0000001), "1");
        assert_eq!(format_channel_value(-35.4705), "-35.4705");
        assert_eq!(format_channel_value(0.1234567), "0.123457");
    }

    #[test]
    fn frame_time_uses_plain_decimal_text() {
        assert_eq!(format_frame_time(0.0083333), "0.0083333");
        assert_eq!(format_frame_time(0.5), "0.5");
        assert_eq!(format_frame_time(1.0), "1.0");
        assert_eq!(format_frame_time(0.0), "0.0");
        assert_eq!(format_frame_time(0.00001), "0.00001");
    }
}
