#![no_main]

use libfuzzer_sys::fuzz_target;

use bodycomp_core::calculator::{compute, compute_with_options};
use bodycomp_core::display::DisplayFields;
use bodycomp_core::inputs::RawInputs;
use bodycomp_core::options::Options;

fuzz_target!(|data: &[u8]| {
    // Split the input on NUL into up to ten form fields
    let text = String::from_utf8_lossy(data);
    let mut parts = text.split('\0').map(str::to_owned);
    let mut next = || parts.next().unwrap_or_default();

    let mut raw = RawInputs {
        name: next(),
        age: next(),
        height: next(),
        weight: next(),
        ..RawInputs::default()
    };
    for slot in &mut raw.skinfolds {
        *slot = next();
    }

    // Should not panic, in either policy
    let lenient = compute(&raw);
    let _ = DisplayFields::from_outcome(&lenient);
    let strict = compute_with_options(&raw, &Options::strict());
    if strict.is_ok() {
        assert!(lenient.is_ok());
    }
});
