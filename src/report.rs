use crate::{
    compose::{ComputationResult, ScoreTier},
    dataset::ProfessionRecord,
};
use std::fmt::Write as _;

const RULE_WIDTH: usize = 60;

/// Human-readable breakdown of one composed result.
pub fn format_breakdown(
    record: &ProfessionRecord,
    result: &ComputationResult,
    tier: ScoreTier,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "[{}] true pass rate", result.name);
    let _ = writeln!(out, "{rule}");

    let defaulted = if tier.score_of(record).is_none() {
        ", default"
    } else {
        ""
    };
    let _ = writeln!(out, "\n1. Admission selection");
    let _ = writeln!(
        out,
        "   - selectivity score: {} ({tier}{defaulted})",
        result.selectivity_score
    );
    let _ = writeln!(out, "   - population top: {:.2}%", result.top_percentile);
    let _ = writeln!(
        out,
        "   - admission probability: {:.4} ({:.2}%)",
        result.admission_probability,
        result.admission_probability * 100.0
    );

    let _ = writeln!(out, "\n2. Training attrition");
    let _ = writeln!(
        out,
        "   - straight graduation rate: {:.3} ({:.1}%)",
        result.graduation_rate,
        result.graduation_rate * 100.0
    );
    let _ = writeln!(
        out,
        "   - repeat/withdrawal rate: {:.3} ({:.1}%)",
        1.0 - result.graduation_rate,
        (1.0 - result.graduation_rate) * 100.0
    );
    if let Some(years) = training_route(record) {
        let _ = writeln!(out, "   - training period: {years}");
    }

    let _ = writeln!(out, "\n3. National exam");
    let _ = writeln!(
        out,
        "   - overall pass rate: {:.3} ({:.1}%)",
        record.exam_pass_rate,
        record.exam_pass_rate * 100.0
    );
    if let Some(rate) = record.new_graduate_pass_rate {
        let _ = writeln!(out, "   - new-graduate pass rate: {rate:.3} ({:.1}%)", rate * 100.0);
    }
    if let Some(rate) = record.repeater_pass_rate {
        let _ = writeln!(out, "   - repeater pass rate: {rate:.3} ({:.1}%)", rate * 100.0);
    }

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "Result");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "true pass rate = admission x straight graduation x exam pass"
    );
    let _ = writeln!(
        out,
        "               = {:.4} x {:.3} x {:.3}",
        result.admission_probability, result.graduation_rate, result.exam_pass_rate
    );
    let _ = writeln!(out, "               = {:.6}", result.true_pass_probability);
    let _ = writeln!(out, "               = {:.3}%", result.true_pass_percentage);
    if let Some(published) = record.published_on_schedule_rate {
        let _ = writeln!(
            out,
            "(published on-schedule pass figure: {:.1}%)",
            published * 100.0
        );
    }
    let _ = writeln!(
        out,
        "\n-> about 1 in {} people in the general population becomes a {}",
        format_one_in(result.one_in_n),
        result.name
    );
    let _ = writeln!(out, "{rule}");

    out
}

/// Rarity figure with one decimal, `inf` for the zero-probability sentinel.
pub fn format_one_in(n: f64) -> String {
    if n.is_finite() {
        format!("{n:.1}")
    } else {
        "inf".to_string()
    }
}

fn training_route(record: &ProfessionRecord) -> Option<String> {
    match (record.training_years, record.training_years_vocational) {
        (Some(uni), Some(voc)) => Some(format!(
            "{voc} years (vocational) / {uni} years (university)"
        )),
        (Some(uni), None) => Some(format!("{uni} years")),
        (None, Some(voc)) => Some(format!("{voc} years (vocational)")),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compose::compose_true_pass_rate, dataset};

    #[test]
    fn breakdown_mentions_every_stage() {
        let record = dataset::find("医師").unwrap();
        let result = compose_true_pass_rate(record, ScoreTier::Average);
        let text = format_breakdown(record, &result, ScoreTier::Average);
        assert!(text.contains("[医師]"));
        assert!(text.contains("selectivity score: 70 (average)"));
        assert!(text.contains("new-graduate pass rate: 0.950"));
        assert!(text.contains("6 years"));
        assert!(text.contains("1 in 54.5"));
    }

    #[test]
    fn defaulted_score_is_marked() {
        let record = ProfessionRecord::base("X", 0.9);
        let result = compose_true_pass_rate(&record, ScoreTier::High);
        let text = format_breakdown(&record, &result, ScoreTier::High);
        assert!(text.contains("(high, default)"));
        assert!(!text.contains("new-graduate"));
    }

    #[test]
    fn infinite_rarity_renders_as_inf() {
        assert_eq!(format_one_in(f64::INFINITY), "inf");
        assert_eq!(format_one_in(54.46), "54.5");
    }
}
