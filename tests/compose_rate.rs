use license_odds::{
    compose::{compose_true_pass_rate, one_in, ComputationResult, ScoreTier},
    dataset::{self, ProfessionRecord},
};

fn physician_like() -> ProfessionRecord {
    ProfessionRecord {
        admission_score_average: Some(70.0),
        straight_graduation_rate: Some(0.849),
        new_graduate_pass_rate: Some(0.95),
        ..ProfessionRecord::base("X", 0.924)
    }
}

#[test]
fn end_to_end_figures() {
    let r = compose_true_pass_rate(&physician_like(), ScoreTier::Average);
    assert_eq!(r.selectivity_score, 70.0);
    assert!((r.top_percentile - 2.275).abs() < 1e-3);
    assert!((r.admission_probability - 0.02275).abs() < 1e-5);
    assert_eq!(r.exam_pass_rate, 0.95);
    assert!((r.true_pass_probability - 0.01836).abs() < 1e-5);
    assert!((r.true_pass_percentage - 1.836).abs() < 1e-3);
    assert!((r.one_in_n - 54.5).abs() < 0.05);
}

#[test]
fn probability_is_product_of_factors() {
    for record in dataset::all().iter().filter(|r| !r.is_dependent()) {
        for tier in ScoreTier::ALL {
            let r = compose_true_pass_rate(record, tier);
            let product = r.admission_probability * r.graduation_rate * r.exam_pass_rate;
            assert!((r.true_pass_probability - product).abs() < 1e-9, "{}", r.name);
            assert!((r.one_in_n * r.true_pass_probability - 1.0).abs() < 1e-9);
        }
    }
}

#[test]
fn composing_twice_is_identical() {
    let record = physician_like();
    let a = compose_true_pass_rate(&record, ScoreTier::Average);
    let b = compose_true_pass_rate(&record, ScoreTier::Average);
    assert_eq!(a, b);
}

#[test]
fn missing_fields_use_defaults() {
    let record = ProfessionRecord::base("Y", 0.8);
    let r = compose_true_pass_rate(&record, ScoreTier::Average);
    assert_eq!(r.selectivity_score, 50.0);
    assert_eq!(r.top_percentile, 50.0);
    assert_eq!(r.graduation_rate, 0.85);
    assert_eq!(r.exam_pass_rate, 0.8);
    assert!((r.true_pass_probability - 0.5 * 0.85 * 0.8).abs() < 1e-12);
}

#[test]
fn dentist_uses_overall_exam_rate() {
    let record = dataset::find("歯科医師").expect("dentist record");
    let r = compose_true_pass_rate(record, ScoreTier::Average);
    assert_eq!(r.exam_pass_rate, 0.703);
    assert_eq!(r.graduation_rate, 0.75);
}

#[test]
fn tier_selects_score() {
    let record = dataset::find("薬剤師").expect("pharmacist record");
    let scores: Vec<f64> = ScoreTier::ALL
        .iter()
        .map(|&t| compose_true_pass_rate(record, t).selectivity_score)
        .collect();
    assert_eq!(scores, vec![44.0, 57.0, 65.0]);
}

#[test]
fn zero_probability_gives_infinite_rarity() {
    let record = ProfessionRecord {
        new_graduate_pass_rate: Some(0.0),
        ..ProfessionRecord::base("Z", 0.5)
    };
    let r = compose_true_pass_rate(&record, ScoreTier::Average);
    assert_eq!(r.true_pass_probability, 0.0);
    assert!(r.one_in_n.is_infinite());
    assert_eq!(one_in(0.0), f64::INFINITY);
}

#[test]
fn columns_match_serialized_fields() {
    let r = compose_true_pass_rate(&physician_like(), ScoreTier::Low);
    let value = serde_json::to_value(&r).expect("serialize");
    let keys: Vec<&str> = value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    let mut expected = ComputationResult::COLUMNS.to_vec();
    expected.sort_unstable();
    let mut keys = keys;
    keys.sort_unstable();
    assert_eq!(keys, expected);
}
