use qhub_domain::catalog::CoverageKind;

#[test]
fn kinds_have_stable_identifiers() {
    assert_eq!(CoverageKind::Surgery.id(), 1);
    assert_eq!(CoverageKind::Dentistry.id(), 2);
    assert_eq!(CoverageKind::Hospitalization.id(), 3);

    for kind in CoverageKind::ALL {
        assert_eq!(CoverageKind::from_id(kind.id()), Some(kind));
    }
    assert_eq!(CoverageKind::from_id(0), None);
    assert_eq!(CoverageKind::from_id(4), None);
}

#[test]
fn enumeration_order_is_fixed() {
    let titles: Vec<&str> = CoverageKind::ALL.iter().map(|k| k.title()).collect();
    assert_eq!(titles, ["Surgery", "Dentistry", "Hospitalization"]);
}

#[test]
fn bounds_are_inclusive_at_both_ends() {
    let bounds = CoverageKind::Surgery.budget_bounds();
    assert!(bounds.contains(5_000.0));
    assert!(bounds.contains(500_000_000.0));
    assert!(!bounds.contains(4_999.99));
    assert!(!bounds.contains(500_000_000.01));

    assert_eq!(CoverageKind::Dentistry.budget_bounds().min, 4_000);
    assert_eq!(CoverageKind::Dentistry.budget_bounds().max, 400_000_000);
    assert_eq!(CoverageKind::Hospitalization.budget_bounds().min, 2_000);
    assert_eq!(CoverageKind::Hospitalization.budget_bounds().max, 200_000_000);
}

#[test]
fn display_matches_catalog_title() {
    assert_eq!(CoverageKind::Hospitalization.to_string(), "Hospitalization");
}
