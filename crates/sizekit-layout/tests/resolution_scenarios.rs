#![forbid(unsafe_code)]

//! End-to-end resolution scenarios over the default tables.
//!
//! Run:
//!   cargo test -p sizekit-layout --test resolution_scenarios

use std::sync::Arc;

use sizekit_layout::{
    Breakpoint, BreakpointTable, ConfigError, GranularBreakpoint, Orientation,
    OrientationResponsive, Resolver, Responsive, ResponsiveConfig, ValueSlots,
};

// ============================================================================
// Classification at the default thresholds
// ============================================================================

#[test]
fn medium_boundary_is_inclusive() {
    let table = BreakpointTable::<Breakpoint>::default();
    assert_eq!(table.classify(600.0), Breakpoint::Medium);
    assert_eq!(table.classify(599.9), Breakpoint::Small);
}

#[test]
fn granular_jumbo_small_boundary_is_inclusive() {
    let table = BreakpointTable::<GranularBreakpoint>::default();
    assert_eq!(table.classify(1920.0), GranularBreakpoint::JumboSmall);
}

#[test]
fn every_default_threshold_belongs_to_its_category() {
    let standard = BreakpointTable::<Breakpoint>::default();
    for (c, t) in standard.iter().take(4) {
        assert_eq!(standard.classify(t), c, "{c} at {t}");
    }
    let granular = BreakpointTable::<GranularBreakpoint>::default();
    for (c, t) in granular.iter().take(12) {
        assert_eq!(granular.classify(t), c, "{c} at {t}");
    }
}

// ============================================================================
// Fallback
// ============================================================================

#[test]
fn desktop_mobile_fallback() {
    let values = ValueSlots::new()
        .at(Breakpoint::Large, "Desktop")
        .at(Breakpoint::Small, "Mobile");
    let values = Responsive::try_from(values).unwrap();

    assert_eq!(values.resolve(Breakpoint::Medium), &"Mobile");
    assert_eq!(values.resolve(Breakpoint::ExtraLarge), &"Desktop");
    assert_eq!(values.resolve(Breakpoint::ExtraSmall), &"Mobile");
}

#[test]
fn tiny_only_answers_jumbo_extra_large() {
    let values = Responsive::try_from(ValueSlots::new().at(GranularBreakpoint::Tiny, "X")).unwrap();
    assert_eq!(values.resolve(GranularBreakpoint::JumboExtraLarge), &"X");
    assert_eq!(
        values.resolved_category(GranularBreakpoint::JumboExtraLarge),
        GranularBreakpoint::Tiny
    );
}

#[test]
fn resolver_end_to_end() {
    let table = Arc::new(BreakpointTable::<Breakpoint>::default());
    let columns = Resolver::new(
        Arc::clone(&table),
        Responsive::new(Breakpoint::ExtraSmall, 1)
            .at(Breakpoint::Medium, 2)
            .at(Breakpoint::ExtraLarge, 4),
    );

    let widths_and_columns = [
        (120.0, 1),
        (390.0, 1),
        (600.0, 2),
        (1024.0, 2),
        (1199.0, 2),
        (1200.0, 4),
        (2560.0, 4),
    ];
    for (width, expected) in widths_and_columns {
        assert_eq!(columns.resolve(width).value, &expected, "width {width}");
    }
}

// ============================================================================
// Orientation
// ============================================================================

#[test]
fn empty_portrait_uses_landscape() {
    let values = OrientationResponsive::new(
        ValueSlots::new(),
        ValueSlots::new().at(Breakpoint::Medium, "L"),
    );
    let table = BreakpointTable::<Breakpoint>::default();
    let category = table.classify(700.0);
    assert_eq!(category, Breakpoint::Medium);
    assert_eq!(values.resolve(Orientation::Portrait, category), Ok(&"L"));
}

#[test]
fn both_orientations_empty_is_a_configuration_error() {
    let values: OrientationResponsive<GranularBreakpoint, ()> =
        OrientationResponsive::new(ValueSlots::new(), ValueSlots::new());
    let err = values
        .resolve(Orientation::Landscape, GranularBreakpoint::Tiny)
        .unwrap_err();
    assert_eq!(err, ConfigError::EmptyOrientationValues);
}

// ============================================================================
// Construction guard
// ============================================================================

#[test]
fn all_empty_values_are_rejected() {
    let err = Responsive::from_slots(
        ValueSlots::<Breakpoint, String>::new(),
        "screen type layout",
    )
    .unwrap_err();
    assert!(
        err.to_string()
            .starts_with("at least one size argument must be filled")
    );
}

#[test]
fn config_tables_feed_resolvers() {
    let config: ResponsiveConfig =
        serde_json::from_str(r#"{ "standard": { "extra_large": 1440, "large": 1024 } }"#).unwrap();
    let table = Arc::new(config.standard_table().unwrap());
    let r = Resolver::new(table, Responsive::new(Breakpoint::Large, "wide"));
    assert_eq!(r.classify(1200.0), Breakpoint::Large);
    assert_eq!(r.classify(1440.0), Breakpoint::ExtraLarge);
}
