use crate::{
    dataset::{ProfessionRecord, DEFAULT_ADMISSION_SCORE},
    normal::{percentage_to_probability, score_to_top_percentile},
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Low,
    #[default]
    Average,
    High,
}

impl ScoreTier {
    pub const ALL: [ScoreTier; 3] = [ScoreTier::Low, ScoreTier::Average, ScoreTier::High];

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreTier::Low => "low",
            ScoreTier::Average => "average",
            ScoreTier::High => "high",
        }
    }

    /// The record's score for this tier, if it carries one.
    pub fn score_of(self, record: &ProfessionRecord) -> Option<f64> {
        match self {
            ScoreTier::Low => record.admission_score_low,
            ScoreTier::Average => record.admission_score_average,
            ScoreTier::High => record.admission_score_high,
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One profession's composed figures. Field names double as the export header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputationResult {
    pub name: String,
    pub selectivity_score: f64,
    pub top_percentile: f64,
    pub admission_probability: f64,
    pub graduation_rate: f64,
    pub exam_pass_rate: f64,
    pub true_pass_probability: f64,
    pub true_pass_percentage: f64,
    /// `1 / true_pass_probability`; infinite when the probability is zero.
    pub one_in_n: f64,
}

impl ComputationResult {
    /// Field names in declaration order.
    pub const COLUMNS: [&'static str; 9] = [
        "name",
        "selectivity_score",
        "top_percentile",
        "admission_probability",
        "graduation_rate",
        "exam_pass_rate",
        "true_pass_probability",
        "true_pass_percentage",
        "one_in_n",
    ];
}

/// Admission probability x graduation rate x exam pass rate for `record`.
///
/// A missing tier score counts as 50, a missing graduation rate as 0.85, and the
/// new-graduate pass rate is preferred over the overall one.
pub fn compose_true_pass_rate(record: &ProfessionRecord, tier: ScoreTier) -> ComputationResult {
    let selectivity_score = tier.score_of(record).unwrap_or(DEFAULT_ADMISSION_SCORE);
    let top_percentile = score_to_top_percentile(selectivity_score);
    let admission_probability = percentage_to_probability(top_percentile);
    let graduation_rate = record.graduation_rate();
    let exam_pass_rate = record.effective_pass_rate();

    let true_pass_probability = admission_probability * graduation_rate * exam_pass_rate;

    ComputationResult {
        name: record.name.to_string(),
        selectivity_score,
        top_percentile,
        admission_probability,
        graduation_rate,
        exam_pass_rate,
        true_pass_probability,
        true_pass_percentage: true_pass_probability * 100.0,
        one_in_n: one_in(true_pass_probability),
    }
}

/// Population rarity of a probability. Zero maps to infinity instead of failing.
pub fn one_in(probability: f64) -> f64 {
    if probability == 0.0 {
        f64::INFINITY
    } else {
        1.0 / probability
    }
}
