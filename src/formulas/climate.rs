use super::{or_neutral, round_tenth};

pub const SUNNY_NEUTRAL: f64 = 2.0;
pub const TEMPERATURE_NEUTRAL: f64 = 2.0;
pub const RAINFALL_NEUTRAL: f64 = 1.0;

/// Climate and sunlight from sunny days per year, average annual temperature
/// in Celsius and annual rainfall in millimetres.
pub fn climate_score(sunny_days: f64, avg_temp_c: f64, rainfall_mm: f64) -> f64 {
    round_tenth(
        sunny_component(sunny_days)
            + temperature_component(avg_temp_c)
            + rainfall_component(rainfall_mm),
    )
}

/// 0-4; a quarter of the year sunny earns one point.
pub fn sunny_component(sunny_days: f64) -> f64 {
    or_neutral(sunny_days, SUNNY_NEUTRAL, |days| {
        (days / 91.25).clamp(0.0, 4.0)
    })
}

/// 1-4, best between 20 and 25 degrees.
pub fn temperature_component(avg_temp_c: f64) -> f64 {
    or_neutral(avg_temp_c, TEMPERATURE_NEUTRAL, |temp| {
        if (20.0..=25.0).contains(&temp) {
            4.0
        } else if (15.0..20.0).contains(&temp) || (temp > 25.0 && temp <= 30.0) {
            3.0
        } else if (10.0..15.0).contains(&temp) || (temp > 30.0 && temp <= 35.0) {
            2.0
        } else {
            1.0
        }
    })
}

/// 1-2, moderate rainfall preferred.
pub fn rainfall_component(rainfall_mm: f64) -> f64 {
    or_neutral(rainfall_mm, RAINFALL_NEUTRAL, |rain| {
        if (500.0..=1200.0).contains(&rain) {
            2.0
        } else if (250.0..500.0).contains(&rain) || (rain > 1200.0 && rain <= 2000.0) {
            1.5
        } else {
            1.0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn climate_score_rounds_sum() {
        // 180 / 91.25 = 1.97..
        approx(climate_score(180.0, 22.0, 800.0), 8.0);
    }

    #[test]
    fn sunny_component_is_capped() {
        approx(sunny_component(365.0), 4.0);
        approx(sunny_component(10_000.0), 4.0);
    }

    #[test]
    fn temperature_bands_have_inclusive_edges() {
        approx(temperature_component(20.0), 4.0);
        approx(temperature_component(25.0), 4.0);
        approx(temperature_component(19.9), 3.0);
        approx(temperature_component(30.0), 3.0);
        approx(temperature_component(15.0), 3.0);
        approx(temperature_component(14.9), 2.0);
        approx(temperature_component(35.0), 2.0);
        approx(temperature_component(35.1), 1.0);
        approx(temperature_component(-5.0), 1.0);
    }

    #[test]
    fn zero_temperature_reads_as_missing() {
        approx(temperature_component(0.0), TEMPERATURE_NEUTRAL);
    }

    #[test]
    fn rainfall_bands() {
        approx(rainfall_component(500.0), 2.0);
        approx(rainfall_component(1200.0), 2.0);
        approx(rainfall_component(250.0), 1.5);
        approx(rainfall_component(2000.0), 1.5);
        approx(rainfall_component(2500.0), 1.0);
        approx(rainfall_component(100.0), 1.0);
        approx(rainfall_component(0.0), RAINFALL_NEUTRAL);
    }
}
