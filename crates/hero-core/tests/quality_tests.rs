// Classification of device signals into quality tiers.

use hero_core::{DeviceProfile, QualityTier};

fn profile(cores: Option<u32>, mobile: bool, tablet: bool) -> DeviceProfile {
    DeviceProfile {
        cpu_cores: cores,
        is_mobile: mobile,
        is_tablet: tablet,
    }
}

#[test]
fn eight_cores_is_high_regardless_of_form_factor() {
    assert_eq!(
        QualityTier::classify(&profile(Some(8), false, false)),
        QualityTier::High
    );
    assert_eq!(
        QualityTier::classify(&profile(Some(16), true, false)),
        QualityTier::High
    );
    assert_eq!(
        QualityTier::classify(&profile(Some(8), false, true)),
        QualityTier::High
    );
}

#[test]
fn four_cores_on_desktop_is_medium() {
    assert_eq!(
        QualityTier::classify(&profile(Some(4), false, false)),
        QualityTier::Medium
    );
    assert_eq!(
        QualityTier::classify(&profile(Some(6), false, false)),
        QualityTier::Medium
    );
}

#[test]
fn handhelds_below_eight_cores_are_low() {
    assert_eq!(
        QualityTier::classify(&profile(Some(6), true, false)),
        QualityTier::Low
    );
    assert_eq!(
        QualityTier::classify(&profile(Some(6), false, true)),
        QualityTier::Low
    );
}

#[test]
fn few_cores_is_low() {
    assert_eq!(
        QualityTier::classify(&profile(Some(2), false, false)),
        QualityTier::Low
    );
    assert_eq!(
        QualityTier::classify(&profile(Some(3), false, false)),
        QualityTier::Low
    );
}

#[test]
fn missing_core_count_falls_back_to_low() {
    // Unreadable signal is treated as a 2-core device.
    assert_eq!(
        QualityTier::classify(&profile(None, false, false)),
        QualityTier::Low
    );
}
