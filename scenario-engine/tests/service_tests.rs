use common::{Basis, BasisSelection, Error, Preset};
use scenario_engine::{presets_from_list, ScenarioConfig, ScenarioRequest, ScenarioService};

fn create_test_request(basis: BasisSelection) -> ScenarioRequest {
    ScenarioRequest {
        invest: 100.0,
        buy_market_cap: 1_000_000.0,
        targets: vec![100_000_000.0, 70_000_000_000.0],
        total_supply: 1_000_000_000.0,
        circulating_supply: 200_000_000.0,
        basis,
    }
}

#[test]
fn test_both_bases_interleave_per_target() {
    let service = ScenarioService::new();
    let results = service.run(&create_test_request(BasisSelection::Both)).unwrap();

    assert_eq!(results.len(), 4);
    let order: Vec<(Basis, f64)> = results.iter().map(|r| (r.basis, r.sell_market_cap)).collect();
    assert_eq!(
        order,
        vec![
            (Basis::Circulating, 100_000_000.0),
            (Basis::Fdv, 100_000_000.0),
            (Basis::Circulating, 70_000_000_000.0),
            (Basis::Fdv, 70_000_000_000.0),
        ]
    );

    assert_eq!(results[0].supply_used, 200_000_000.0);
    assert_eq!(results[1].supply_used, 1_000_000_000.0);
    assert_eq!(results[0].buy_market_cap, 1_000_000.0);
}

#[test]
fn test_single_basis() {
    let service = ScenarioService::new();

    let circulating = service.run(&create_test_request(BasisSelection::Circulating)).unwrap();
    assert_eq!(circulating.len(), 2);
    assert!(circulating.iter().all(|r| r.basis == Basis::Circulating));

    let fdv = service.run(&create_test_request(BasisSelection::Fdv)).unwrap();
    assert_eq!(fdv.len(), 2);
    assert!(fdv.iter().all(|r| r.basis == Basis::Fdv));
}

#[test]
fn test_multiplier_is_independent_of_basis() {
    // both prices scale with the same supply, so the multiple only depends on the caps
    let service = ScenarioService::new();
    let results = service.run(&create_test_request(BasisSelection::Both)).unwrap();

    assert!((results[2].multiplier - 70_000.0).abs() < 1e-6);
    assert!((results[3].multiplier - 70_000.0).abs() < 1e-6);
    assert!(results[2].tokens_acquired < results[3].tokens_acquired);
}

#[test]
fn test_invalid_circulating_supply_is_surfaced() {
    let service = ScenarioService::new();
    let mut request = create_test_request(BasisSelection::Both);
    request.circulating_supply = 0.0;

    assert!(matches!(service.run(&request), Err(Error::InvalidSupply(_))));

    // FDV alone never touches the circulating supply
    request.basis = BasisSelection::Fdv;
    assert_eq!(service.run(&request).unwrap().len(), 2);
}

#[test]
fn test_no_targets() {
    let service = ScenarioService::new();
    let mut request = create_test_request(BasisSelection::Both);
    request.targets.clear();

    assert!(service.run(&request).unwrap().is_empty());
}

#[test]
fn test_configured_presets() {
    let mut config = ScenarioConfig::default();
    config.presets = vec![Preset::new("5m", 5_000_000.0), Preset::new("1t", 1e12)];
    let service = ScenarioService::with_config(&config);

    assert_eq!(service.menu().select("2").unwrap(), 1e12);
    let selection = service.resolve_targets("#1, 5m, 3");
    assert_eq!(selection.market_caps(), vec![5_000_000.0, 5_000_000.0, 3.0]);
}

#[test]
fn test_presets_from_list() {
    let presets = presets_from_list("5m, 50 million ,1b").unwrap();
    assert_eq!(
        presets,
        vec![
            Preset::new("5m", 5_000_000.0),
            Preset::new("50 million", 50_000_000.0),
            Preset::new("1b", 1_000_000_000.0),
        ]
    );

    assert!(matches!(presets_from_list("5m, huge"), Err(Error::ConfigurationError(_))));
    assert!(matches!(presets_from_list(" , "), Err(Error::ConfigurationError(_))));
}

#[test]
fn test_default_config() {
    let config = ScenarioConfig::default();
    assert_eq!(config.output_path.to_str(), Some("memecoin_smart_results.csv"));
    assert_eq!(config.default_invest, "100");
    assert_eq!(config.default_total_supply, "1000000000");
    assert_eq!(config.presets.len(), 6);
}
