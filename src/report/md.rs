use crate::types::comparison::{Comparison, FactorProfile};

pub fn comparison_to_markdown(comparison: &Comparison, precision: usize) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", comparison.metric));
    if comparison.rows.is_empty() {
        output.push_str("- no locations\n");
        return output;
    }

    output.push_str(&format!(
        "| Location | Country | Type | {} |\n",
        comparison.metric
    ));
    output.push_str("|---|---|---|---:|\n");
    for row in &comparison.rows {
        output.push_str(&format!(
            "| {} | {} | {} | {:.*} |\n",
            row.location, row.country, row.location_type, precision, row.value
        ));
    }
    output
}

pub fn profile_to_markdown(profile: &FactorProfile, precision: usize) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", profile.title));
    if profile.is_empty() {
        output.push_str("- no factors with data\n");
        return output;
    }

    output.push_str("| Factor |");
    for series in &profile.series {
        output.push_str(&format!(" {} |", series.location));
    }
    output.push('\n');
    output.push_str("|---|");
    output.push_str(&"---:|".repeat(profile.series.len()));
    output.push('\n');

    for (index, factor) in profile.factors.iter().enumerate() {
        output.push_str(&format!("| {factor} |"));
        for series in &profile.series {
            let value = series.values.get(index).copied().unwrap_or(0.0);
            output.push_str(&format!(" {value:.precision$} |"));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::comparison::{ComparisonRow, ProfileSeries};

    #[test]
    fn markdown_comparison_renders_table() {
        let comparison = Comparison {
            metric: "Cost of Living".to_string(),
            rows: vec![ComparisonRow {
                location: "Brasov".to_string(),
                country: "Romania".to_string(),
                location_type: "Small Town".to_string(),
                value: 8.0,
            }],
        };

        let rendered = comparison_to_markdown(&comparison, 1);
        assert!(rendered.contains("# Cost of Living"));
        assert!(rendered.contains("| Location | Country | Type | Cost of Living |"));
        assert!(rendered.contains("| Brasov | Romania | Small Town | 8.0 |"));
    }

    #[test]
    fn markdown_comparison_handles_empty() {
        let comparison = Comparison {
            metric: "Overall Score".to_string(),
            rows: Vec::new(),
        };
        assert!(comparison_to_markdown(&comparison, 1).contains("no locations"));
    }

    #[test]
    fn markdown_profile_has_one_column_per_location() {
        let profile = FactorProfile {
            title: "Wellness Factor Comparison".to_string(),
            factors: vec!["Healthcare Quality".to_string()],
            series: vec![
                ProfileSeries {
                    location: "Athens".to_string(),
                    values: vec![7.0],
                },
                ProfileSeries {
                    location: "Penang".to_string(),
                    values: vec![0.0],
                },
            ],
        };

        let rendered = profile_to_markdown(&profile, 2);
        assert!(rendered.contains("| Factor | Athens | Penang |"));
        assert!(rendered.contains("|---|---:|---:|"));
        assert!(rendered.contains("| Healthcare Quality | 7.00 | 0.00 |"));
    }

    #[test]
    fn markdown_profile_pads_short_series_with_zero() {
        let profile = FactorProfile {
            title: "Wellness Factor Comparison".to_string(),
            factors: vec!["Healthcare Quality".to_string(), "Cost of Living".to_string()],
            series: vec![ProfileSeries {
                location: "Athens".to_string(),
                values: vec![7.0],
            }],
        };

        let rendered = profile_to_markdown(&profile, 1);
        assert!(rendered.contains("| Healthcare Quality | 7.0 |"));
        assert!(rendered.contains("| Cost of Living | 0.0 |"));
    }
}
