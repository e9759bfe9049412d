#![no_main]

use libfuzzer_sys::fuzz_target;
use sizekit_layout::{Breakpoint, Category, GranularBreakpoint, ResponsiveConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(config) = serde_json::from_slice::<ResponsiveConfig>(data) else {
        return;
    };

    // Anything that deserializes has already been validated.
    let standard = config.standard_table().expect("validated standard table");
    let granular = config.granular_table().expect("validated granular table");
    assert_eq!(standard.thresholds().len(), Breakpoint::count() - 1);
    assert_eq!(granular.thresholds().len(), GranularBreakpoint::count() - 1);
    assert!(config.validate().is_ok());

    let round_trip = serde_json::to_vec(&config).expect("serialize config");
    let again: ResponsiveConfig = serde_json::from_slice(&round_trip).expect("reparse config");
    assert_eq!(again, config);
});
