use super::{or_neutral, round_tenth};

pub const COST_NEUTRAL: f64 = 2.0;
pub const PURCHASING_POWER_NEUTRAL: f64 = 1.5;
pub const HOUSING_NEUTRAL: f64 = 1.5;

/// Affordability from monthly single-person costs in USD, local purchasing
/// power relative to New York (= 100) and the housing price to income ratio.
/// Higher means more affordable.
pub fn cost_of_living_score(
    monthly_cost_usd: f64,
    purchasing_power: f64,
    housing_ratio: f64,
) -> f64 {
    round_tenth(
        monthly_cost_component(monthly_cost_usd)
            + purchasing_power_component(purchasing_power)
            + housing_component(housing_ratio),
    )
}

/// 1-4, cheaper scores higher.
pub fn monthly_cost_component(monthly_cost_usd: f64) -> f64 {
    or_neutral(monthly_cost_usd, COST_NEUTRAL, |cost| {
        if cost <= 700.0 {
            4.0
        } else if cost <= 1200.0 {
            3.0
        } else if cost <= 2000.0 {
            2.0
        } else {
            1.0
        }
    })
}

/// 0-3.
pub fn purchasing_power_component(purchasing_power: f64) -> f64 {
    or_neutral(purchasing_power, PURCHASING_POWER_NEUTRAL, |power| {
        (power / 33.33).clamp(0.0, 3.0)
    })
}

/// 0.5-3, a lower price to income ratio scores higher.
pub fn housing_component(housing_ratio: f64) -> f64 {
    or_neutral(housing_ratio, HOUSING_NEUTRAL, |ratio| {
        if ratio <= 3.0 {
            3.0
        } else if ratio <= 6.0 {
            2.0
        } else if ratio <= 10.0 {
            1.0
        } else {
            0.5
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
    fn cost_of_living_score_sums_components() {
        // 3 + 60 / 33.33 + 2
        approx(cost_of_living_score(1000.0, 60.0, 5.0), 6.8);
    }

    #[test]
    fn monthly_cost_bands() {
        approx(monthly_cost_component(700.0), 4.0);
        approx(monthly_cost_component(700.01), 3.0);
        approx(monthly_cost_component(1200.0), 3.0);
        approx(monthly_cost_component(2000.0), 2.0);
        approx(monthly_cost_component(2000.5), 1.0);
        approx(monthly_cost_component(0.0), COST_NEUTRAL);
    }

    #[test]
    fn housing_bands() {
        approx(housing_component(3.0), 3.0);
        approx(housing_component(6.0), 2.0);
        approx(housing_component(10.0), 1.0);
        approx(housing_component(25.0), 0.5);
        approx(housing_component(0.0), HOUSING_NEUTRAL);
    }

    #[test]
    fn purchasing_power_is_capped() {
        approx(purchasing_power_component(250.0), 3.0);
        approx(purchasing_power_component(0.0), PURCHASING_POWER_NEUTRAL);
    }
}
