use license_odds::{compose::ScoreTier, config::Config};

#[test]
fn parse_example_config() {
    let raw = include_str!("../license-odds.example.toml");
    let cfg: Config = toml::from_str(raw).expect("parse TOML");
    assert_eq!(cfg.report.tier, ScoreTier::Average);
    assert!(cfg.export.utf8_bom);
    assert!(!cfg.export.csv_path.is_empty());
}

#[test]
fn partial_config_keeps_defaults() {
    let cfg: Config = toml::from_str("[report]\ntier = \"high\"\n").expect("parse TOML");
    assert_eq!(cfg.report.tier, ScoreTier::High);
    assert!(cfg.report.print_table);
    assert_eq!(cfg.export.index_filename, "index.json");
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn unknown_tier_is_rejected() {
    assert!(toml::from_str::<Config>("[report]\ntier = \"top\"\n").is_err());
}
