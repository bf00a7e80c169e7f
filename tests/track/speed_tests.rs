//! Tests for speed banding and band colors.

use strum::IntoEnumIterator;
use traceline::track::SpeedBand;

#[test]
fn test_seven_bands_exist() {
    assert_eq!(SpeedBand::iter().count(), 7);
}

#[test]
fn test_band_thresholds() {
    // Session range 0..100 km/h, so speed equals the ratio in percent
    let classify = |speed: f64| SpeedBand::classify(speed, 0.0, 100.0);

    assert_eq!(classify(100.0), SpeedBand::Fastest);
    assert_eq!(classify(91.0), SpeedBand::Fastest);
    assert_eq!(classify(90.0), SpeedBand::VeryFast, "Thresholds are exclusive");
    assert_eq!(classify(76.0), SpeedBand::VeryFast);
    assert_eq!(classify(61.0), SpeedBand::Fast);
    assert_eq!(classify(46.0), SpeedBand::Medium);
    assert_eq!(classify(31.0), SpeedBand::Slow);
    assert_eq!(classify(16.0), SpeedBand::VerySlow);
    assert_eq!(classify(10.0), SpeedBand::Slowest);
    assert_eq!(classify(0.0), SpeedBand::Slowest);
}

#[test]
fn test_classification_uses_session_range() {
    // 200..220 km/h session: 218 sits at ratio 0.9+
    assert_eq!(SpeedBand::classify(219.0, 200.0, 220.0), SpeedBand::Fastest);
    assert_eq!(SpeedBand::classify(201.0, 200.0, 220.0), SpeedBand::Slowest);
}

#[test]
fn test_flat_session_maps_to_slowest() {
    assert_eq!(
        SpeedBand::classify(150.0, 150.0, 150.0),
        SpeedBand::Slowest,
        "A zero-span session must not divide by zero"
    );
}

#[test]
fn test_bands_are_ordered() {
    let bands: Vec<SpeedBand> = SpeedBand::iter().collect();
    let mut sorted = bands.clone();
    sorted.sort();
    assert_eq!(bands, sorted, "Declaration order is slowest to fastest");
    assert_eq!(bands[0], SpeedBand::Slowest);
    assert_eq!(bands[6], SpeedBand::Fastest);
}

#[test]
fn test_band_colors_are_distinct() {
    let colors: Vec<[u8; 3]> = SpeedBand::iter().map(|b| b.color()).collect();
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b, "Each band needs a distinguishable color");
        }
    }
}
