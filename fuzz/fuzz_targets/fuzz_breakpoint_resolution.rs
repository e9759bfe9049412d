#![no_main]

use std::sync::Arc;

use libfuzzer_sys::fuzz_target;
use sizekit_layout::{
    BreakpointTable, Category, GranularBreakpoint, Resolver, Responsive, ValueSlots,
};

fuzz_target!(|data: &[u8]| {
    // First 24 bytes: twelve u16 thresholds. Next 2 bytes: filled-slot mask.
    // Remainder: measurements as u16 pairs.
    if data.len() < 26 {
        return;
    }
    let thresholds: Vec<f64> = data[..24]
        .chunks_exact(2)
        .map(|c| f64::from(u16::from_le_bytes([c[0], c[1]])))
        .collect();
    let mask = u16::from_le_bytes([data[24], data[25]]);
    let payload = &data[26..];

    let Ok(table) = BreakpointTable::<GranularBreakpoint>::new(&thresholds) else {
        // Rejected tables must be the non-descending ones.
        assert!(thresholds.windows(2).any(|w| w[0] <= w[1]));
        return;
    };
    let table = Arc::new(table);

    let slots: ValueSlots<GranularBreakpoint, usize> = GranularBreakpoint::ALL
        .iter()
        .filter(|c| mask & (1 << c.ordinal()) != 0)
        .map(|&c| (c, c.ordinal()))
        .collect();
    let Ok(values) = Responsive::try_from(slots) else {
        assert_eq!(mask & 0x1FFF, 0, "non-empty slots rejected");
        return;
    };
    let resolver = Resolver::new(Arc::clone(&table), values);

    for chunk in payload.chunks_exact(2) {
        let m = f64::from(u16::from_le_bytes([chunk[0], chunk[1]]));
        let res = resolver.resolve(m);

        // Post-conditions that must always hold:
        assert!(res.threshold <= m, "measurement below category");
        if let Some(larger) = res.category.larger() {
            assert!(table.threshold(larger) > m, "measurement above category");
        }
        assert!(mask & (1 << res.source.ordinal()) != 0, "source slot empty");
        assert_eq!(*res.value, res.source.ordinal());
        if res.source > res.category {
            // Upward fallback only when nothing smaller is filled.
            let below = (1u16 << res.category.ordinal()) - 1;
            assert_eq!(mask & below, 0, "skipped a smaller value");
        }
    }
});
