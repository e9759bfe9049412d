//! The prelude covers a full responsive build.

use sizekit::prelude::*;

#[test]
fn prelude_builds_a_screen_type_layout() {
    let config: ResponsiveConfig = serde_json::from_str("{}").unwrap();
    let scope = BreakpointScope::from_config(&config).unwrap();
    let label = ScreenTypeBuilder::try_new(
        &scope,
        ValueSlots::new()
            .at(Breakpoint::Large, "Desktop")
            .at(Breakpoint::Small, "Mobile"),
    )
    .unwrap();

    let mut screen = ScreenState::new(ScreenMetrics::new(1280.0, 800.0));
    assert_eq!(label.value(&screen), &"Desktop");
    screen.apply(MeasurementEvent::Resize {
        width: 640.0,
        height: 800.0,
    });
    let text = label.build(&screen, |cx: &BuildContext<Breakpoint>, v| {
        format!("{v} ({})", cx.category)
    });
    assert_eq!(text, "Mobile (medium)");
}

#[test]
fn prelude_reports_orientation_errors() {
    let scope = BreakpointScope::new();
    let b: OrientationBuilder<GranularBreakpoint, ()> = OrientationBuilder::new(
        &scope,
        OrientationResponsive::new(ValueSlots::new(), ValueSlots::new()),
    );
    let err = b
        .value(&ScreenMetrics::new(800.0, 600.0))
        .unwrap_err();
    assert_eq!(err, ConfigError::EmptyOrientationValues);
    assert_eq!(
        err.to_string(),
        "at least one breakpoint value must be provided for portrait or landscape"
    );
}
