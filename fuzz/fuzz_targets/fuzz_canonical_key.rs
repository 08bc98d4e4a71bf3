#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Key derivation must never panic and always returns a prefix of
        // the file name (the whole name for exempt or markerless files)
        let key = moddelta::canonical_key(Path::new(name));
        if let Some(file_name) = Path::new(name).file_name() {
            assert!(file_name.to_string_lossy().starts_with(&key));
        }
    }
});
