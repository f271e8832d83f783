use super::{or_neutral, round_tenth};

pub const RANK_NEUTRAL: f64 = 2.5;
pub const BEDS_NEUTRAL: f64 = 1.5;
pub const DOCTORS_NEUTRAL: f64 = 1.0;

/// Healthcare quality from a national system rank (lower is better), hospital
/// beds per 1000 people and doctors per 1000 people.
pub fn healthcare_score(rank: f64, beds_per_1000: f64, doctors_per_1000: f64) -> f64 {
    round_tenth(
        rank_component(rank)
            + beds_component(beds_per_1000)
            + doctors_component(doctors_per_1000),
    )
}

/// 0-5, assuming ranks run roughly 1-200.
pub fn rank_component(rank: f64) -> f64 {
    or_neutral(rank, RANK_NEUTRAL, |rank| (5.0 - rank / 40.0).clamp(0.0, 5.0))
}

/// 0-3; three beds per 1000 is close to the worldwide average.
pub fn beds_component(beds_per_1000: f64) -> f64 {
    or_neutral(beds_per_1000, BEDS_NEUTRAL, |beds| (beds / 1.5).clamp(0.0, 3.0))
}

/// 0-2.
pub fn doctors_component(doctors_per_1000: f64) -> f64 {
    or_neutral(doctors_per_1000, DOCTORS_NEUTRAL, |doctors| {
        doctors.clamp(0.0, 2.0)
    })
}
