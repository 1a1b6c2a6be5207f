// tests/semantics_tests.rs

use cf_cell_methods::{
    is_conventional, is_conventional_1, is_conventional_climatology, is_ensemble_percentile,
    is_extended_1, is_streamflow_climatology, is_streamflow_raw, parse,
};

// ============================================================================
// Single-method conventionality
// ============================================================================

#[test]
fn test_conventional_and_extended_single_methods() {
    let cases = [
        // (input, conventional, extended)
        ("time: mean", true, true),
        ("time: mean[3]", false, false),
        ("time: unconventional", false, false),
        ("time: percentile[3]", false, true),
        ("time: percentile[3,5]", false, false),
    ];
    for (input, conventional, extended) in cases {
        let cms = parse(input).unwrap();
        assert_eq!(is_conventional_1(&cms[0]), conventional, "{input:?}");
        assert_eq!(is_extended_1(&cms[0]), extended, "{input:?}");
    }
}

#[test]
fn test_every_conventional_statistic_parses_bare() {
    for stat in cf_cell_methods::semantics::CONVENTIONAL_METHODS {
        let cms = parse(&format!("time: {stat}")).unwrap();
        assert_eq!(cms.len(), 1);
        assert_eq!(cms[0].method.name, *stat);
        assert!(cms[0].method.params.is_none());
        assert!(cms[0].where_.is_none() && cms[0].over.is_none() && cms[0].within.is_none());
        assert!(cms[0].extra_info.is_none());
        assert!(is_conventional_1(&cms[0]));
    }
}

// ============================================================================
// Climatology recognition
// ============================================================================

#[test]
fn test_recognized_climatologies() {
    let valid = [
        "time: mean within years time: median over years",
        "time: mean within days time: median over days",
        "time: mean within days time: median over days time: standard_deviation over years",
    ];
    for input in valid {
        assert!(is_conventional_climatology(&parse(input).unwrap()), "{input:?}");
    }
}

#[test]
fn test_rejected_climatologies() {
    let invalid = [
        "time: mean",
        "time: mean within days time: median over years",
        "time: mean within years time: median over days",
        "time: mean within days time: median over days time: standard_deviation over centuries",
        // right shape, wrong axis
        "lon: mean within days lon: median over days",
        // right shape, non-conventional statistic
        "time: mean within days time: percentile[5] over days",
    ];
    for input in invalid {
        assert!(!is_conventional_climatology(&parse(input).unwrap()), "{input:?}");
    }
}

// ============================================================================
// Sequence conventionality
// ============================================================================

#[test]
fn test_is_conventional() {
    let cases = [
        // The three climatological templates
        ("time: mean within years time: median over years", true),
        ("time: mean within days time: median over days", true),
        (
            "time: mean within days time: median over days time: standard_deviation over years",
            true,
        ),
        // Non-climatological conventional cases
        ("time: mean", true),
        ("area: mean where land", true),
        ("area: mean where sea_ice over sea", true),
        // `over` without `where`, outside a recognized climatology
        ("area: mean over sea", false),
        // `within` outside a recognized climatology
        ("area: mean within years", false),
    ];
    for (input, expected) in cases {
        assert_eq!(is_conventional(&parse(input).unwrap()), expected, "{input:?}");
    }
}

// ============================================================================
// Named comparators
// ============================================================================

#[test]
fn test_is_streamflow_raw() {
    assert!(is_streamflow_raw("time: mean within days"));
    assert!(!is_streamflow_raw("lon: mean within days"));
    assert!(!is_streamflow_raw("time: mean within years"));
    assert!(!is_streamflow_raw("not even cell methods:"));
}

#[test]
fn test_is_streamflow_climatology() {
    assert!(!is_streamflow_climatology("time: mean within days"));
    assert!(is_streamflow_climatology(
        "time: mean within days time: mean over days"
    ));
}

#[test]
fn test_comparators_accept_parsed_input() {
    let cms = parse("time: mean within days").unwrap();
    assert!(is_streamflow_raw(&cms));
    assert!(!is_streamflow_climatology(&cms));
}

#[test]
fn test_is_ensemble_percentile() {
    assert!(is_ensemble_percentile("models: percentile[5]"));
    assert!(is_ensemble_percentile("models: percentile[95]"));
    assert!(!is_ensemble_percentile("models: mean"));
    assert!(!is_ensemble_percentile("time: percentile[5]"));
    assert!(!is_ensemble_percentile(
        "time: mean models: percentile[5]"
    ));
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_predicates_do_not_mutate_their_input() {
    let cms = parse("time: mean within days time: median over days").unwrap();
    let before = cms.clone();

    for _ in 0..2 {
        assert!(is_conventional_climatology(&cms));
        assert!(is_conventional(&cms));
        assert!(cms.iter().all(is_conventional_1));
        assert!(cms.iter().all(is_extended_1));
        assert!(!is_streamflow_raw(&cms));
    }
    assert_eq!(cms, before);
}
