use crate::{
    compose::{ComputationResult, ScoreTier},
    dataset::ProfessionRecord,
    report::format_one_in,
};
use comfy_table::{presets::ASCII_MARKDOWN, Cell, CellAlignment, ContentArrangement, Row, Table};

/// Results ranked by true pass probability, highest first.
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    pub rows: Vec<ComputationResult>,
}

impl ResultTable {
    /// Ties keep their input order.
    pub fn ranked(mut rows: Vec<ComputationResult>) -> Self {
        rows.sort_by(|a, b| b.true_pass_probability.total_cmp(&a.true_pass_probability));
        Self { rows }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut table = new_table(vec![
            "rank",
            "name",
            "score",
            "top %",
            "admission",
            "graduation",
            "exam pass",
            "true pass",
            "true pass %",
            "1 in N",
        ]);

        for (i, r) in self.rows.iter().enumerate() {
            let mut row = Row::new();
            row.add_cell(right(format!("{}", i + 1)));
            row.add_cell(Cell::new(&r.name).set_alignment(CellAlignment::Left));
            row.add_cell(right(format!("{}", r.selectivity_score)));
            row.add_cell(right(format!("{:.2}", r.top_percentile)));
            row.add_cell(right(format!("{:.4}", r.admission_probability)));
            row.add_cell(right(format!("{:.3}", r.graduation_rate)));
            row.add_cell(right(format!("{:.3}", r.exam_pass_rate)));
            row.add_cell(right(format!("{:.6}", r.true_pass_probability)));
            row.add_cell(right(format!("{:.3}", r.true_pass_percentage)));
            row.add_cell(right(format_one_in(r.one_in_n)));
            table.add_row(row);
        }

        table.to_string()
    }
}

/// True pass percentage per tier, one row per record.
pub fn render_tier_spread(rows: &[(&str, [ComputationResult; 3])]) -> String {
    let mut header = vec!["name".to_string()];
    header.extend(ScoreTier::ALL.iter().map(|t| format!("{t} %")));
    header.push("low/high ratio".into());
    let mut table = new_table(header);

    for (name, by_tier) in rows {
        let mut row = Row::new();
        row.add_cell(Cell::new(name).set_alignment(CellAlignment::Left));
        for r in by_tier {
            row.add_cell(right(format!("{:.3}", r.true_pass_percentage)));
        }
        let ratio = by_tier[0].true_pass_probability / by_tier[2].true_pass_probability;
        row.add_cell(right(if ratio.is_finite() {
            format!("{ratio:.1}")
        } else {
            "inf".to_string()
        }));
        table.add_row(row);
    }

    table.to_string()
}

/// The embedded dataset, dependent licenses included.
pub fn render_dataset(records: &[ProfessionRecord]) -> String {
    let mut table = new_table(vec![
        "name",
        "exam pass",
        "new grad",
        "scores (low/avg/high)",
        "graduation",
        "years",
        "requires",
    ]);

    for r in records {
        let scores = [
            r.admission_score_low,
            r.admission_score_average,
            r.admission_score_high,
        ]
        .iter()
        .map(|s| opt(*s, |v| format!("{v}")))
        .collect::<Vec<_>>()
        .join("/");
        let years = match (r.training_years_vocational, r.training_years) {
            (Some(v), Some(u)) => format!("{v}-{u}"),
            (v, u) => opt(u.or(v), |y| y.to_string()),
        };
        let requires = match (r.prerequisite_license, r.admission_score_bonus) {
            (Some(base), Some(bonus)) => format!("{base} (+{bonus})"),
            (Some(base), None) => base.to_string(),
            (None, _) => String::new(),
        };

        let mut row = Row::new();
        row.add_cell(Cell::new(r.name).set_alignment(CellAlignment::Left));
        row.add_cell(right(format!("{:.3}", r.exam_pass_rate)));
        row.add_cell(right(opt(r.new_graduate_pass_rate, |v| format!("{v:.3}"))));
        row.add_cell(right(scores));
        row.add_cell(right(opt(r.straight_graduation_rate, |v| format!("{v:.3}"))));
        row.add_cell(right(years));
        row.add_cell(Cell::new(requires).set_alignment(CellAlignment::Left));
        table.add_row(row);
    }

    table.to_string()
}

fn new_table<T: ToString>(header: Vec<T>) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.iter().map(|h| h.to_string()).collect::<Vec<_>>());
    table
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn opt<T: Copy>(value: Option<T>, f: impl Fn(T) -> String) -> String {
    value.map(f).unwrap_or_else(|| "-".to_string())
}
