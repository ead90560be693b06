use crate::payload::Rgb;
use std::f32::consts::PI;

/// Clamp a normalized channel to [0, 1] and scale it to an 8 bit value
pub fn clamp_and_scale(value: f32) -> u8 {
    // NaN falls through clamp and saturates to 0 on the cast.
    (value.clamp(0.0, 1.0) * 255.0).floor() as u8
}

impl Rgb {
    /// Build a color out of normalized channels, clamping each one independently
    pub fn from_unit([r, g, b]: [f32; 3]) -> Self {
        Self::new(clamp_and_scale(r), clamp_and_scale(g), clamp_and_scale(b))
    }
}

/// Convert HSV to normalized RGB channels
/// H: hue in sectors (0-6), S: saturation (0-1), V: value (0-1)
pub fn hsv_to_unit(h: f32, s: f32, v: f32) -> [f32; 3] {
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Convert HSV to an 8 bit color
/// H: hue in sectors (0-6), S: saturation (0-1), V: value (0-1)
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    Rgb::from_unit(hsv_to_unit(h, s, v))
}

/// Map an angle to three phase shifted sines, a smooth cyclic palette
pub fn sine_palette(hue: f32) -> [f32; 3] {
    [
        hue.sin() * 0.5 + 0.5,
        (hue + 2.0 * PI / 3.0).sin() * 0.5 + 0.5,
        (hue + 4.0 * PI / 3.0).sin() * 0.5 + 0.5,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-0.5, 0)]
    #[case(0.0, 0)]
    #[case(0.5, 127)]
    #[case(0.999, 254)]
    #[case(1.0, 255)]
    #[case(1.5, 255)]
    #[case(f32::NAN, 0)]
    #[case(f32::INFINITY, 255)]
    fn clamp_scale(#[case] input: f32, #[case] expected: u8) {
        assert_eq!(clamp_and_scale(input), expected);
    }

    #[test]
    fn clamp_scale_covers_range() {
        for i in -200..=400 {
            let value = clamp_and_scale(i as f32 / 200.0);
            assert!(i > 0 || value == 0);
            assert!(i < 200 || value == 255);
        }
    }

    #[rstest]
    #[case(0.0, 0.0, 1.0, Rgb::new(255, 255, 255))]
    #[case(0.0, 1.0, 1.0, Rgb::new(255, 0, 0))]
    #[case(2.0, 1.0, 1.0, Rgb::new(0, 255, 0))]
    #[case(4.0, 1.0, 1.0, Rgb::new(0, 0, 255))]
    #[case(1.0, 1.0, 1.0, Rgb::new(255, 255, 0))]
    #[case(5.0, 1.0, 0.0, Rgb::new(0, 0, 0))]
    fn hsv_sector_boundaries(#[case] h: f32, #[case] s: f32, #[case] v: f32, #[case] expected: Rgb) {
        assert_eq!(hsv_to_rgb(h, s, v), expected);
    }

    #[test]
    fn hsv_hue_wraps() {
        assert_eq!(hsv_to_rgb(6.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-1.0, 1.0, 1.0), hsv_to_rgb(5.0, 1.0, 1.0));
    }

    #[test]
    fn hsv_channels_in_unit_range() {
        for step in 0..60 {
            let h = step as f32 * 0.1;
            for channel in hsv_to_unit(h, 0.8, 1.0) {
                assert!((0.0..=1.0).contains(&channel), "h={h} channel={channel}");
            }
        }
    }
}
