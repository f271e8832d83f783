use super::{or_neutral, round_tenth};

pub const DISTANCE_NEUTRAL: f64 = 2.0;
pub const QUALITY_NEUTRAL: f64 = 2.0;
pub const FACILITIES_NEUTRAL: f64 = 1.0;

/// Coastal access from the distance to the nearest beach in km, a 1-10 beach
/// quality rating and a 1-10 facilities rating.
///
/// The distance is missing when `None` or negative; zero km is a real
/// distance and scores the top band.
pub fn beach_access_score(distance_km: Option<f64>, quality: f64, facilities: f64) -> f64 {
    round_tenth(
        distance_component(distance_km)
            + quality_component(quality)
            + facilities_component(facilities),
    )
}

/// 0-4, closer scores higher.
pub fn distance_component(distance_km: Option<f64>) -> f64 {
    match distance_km {
        Some(km) if km >= 0.0 => {
            if km <= 1.0 {
                4.0
            } else if km <= 5.0 {
                3.0
            } else if km <= 20.0 {
                2.0
            } else if km <= 50.0 {
                1.0
            } else {
                0.0
            }
        }
        _ => DISTANCE_NEUTRAL,
    }
}

/// 0-4.
pub fn quality_component(quality: f64) -> f64 {
    or_neutral(quality, QUALITY_NEUTRAL, |rating| {
        (rating * 0.4).clamp(0.0, 4.0)
    })
}

/// 0-2.
pub fn facilities_component(facilities: f64) -> f64 {
    or_neutral(facilities, FACILITIES_NEUTRAL, |rating| {
        (rating * 0.2).clamp(0.0, 2.0)
    })
}
