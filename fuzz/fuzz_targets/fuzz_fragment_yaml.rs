#![no_main]

use libfuzzer_sys::fuzz_target;

use moddelta::category::Category;
use moddelta::schema::parse_fragment;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Schema validation of arbitrary fragments must never panic
        for category in Category::ALL {
            let _ = parse_fragment(category, text);
        }
    }
});
