use license_odds::normal::{cdf, percentage_to_probability, score_to_top_percentile};

#[test]
fn mean_score_is_exactly_half() {
    assert_eq!(score_to_top_percentile(50.0), 50.0);
}

#[test]
fn known_quantiles() {
    // z = 1, 2, 3
    assert!((score_to_top_percentile(60.0) - 15.865_525_393).abs() < 1e-7);
    assert!((score_to_top_percentile(70.0) - 2.275_013_195).abs() < 1e-7);
    assert!((score_to_top_percentile(80.0) - 0.134_989_803).abs() < 1e-7);
    assert!((score_to_top_percentile(30.0) - 97.724_986_805).abs() < 1e-7);
    assert!((cdf(1.959_963_985) - 0.975).abs() < 1e-9);
}

#[test]
fn non_increasing_in_score() {
    let mut prev = f64::INFINITY;
    let mut s = -50.0;
    while s <= 150.0 {
        let p = score_to_top_percentile(s);
        assert!(p <= prev, "score {s}: {p} > {prev}");
        assert!((0.0..=100.0).contains(&p));
        prev = p;
        s += 0.5;
    }
}

#[test]
fn extreme_scores_saturate() {
    assert!(score_to_top_percentile(200.0) < 1e-12);
    assert!(score_to_top_percentile(-100.0) > 100.0 - 1e-12);
}

#[test]
fn percentage_is_divided_by_hundred() {
    for p in [0.0, 2.275, 50.0, 99.9, 100.0] {
        assert_eq!(percentage_to_probability(p), p / 100.0);
    }
    // No clamping.
    assert_eq!(percentage_to_probability(-5.0), -0.05);
}
