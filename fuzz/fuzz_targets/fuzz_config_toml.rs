#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz TOML config parsing and validation - this should never panic
        if let Ok((config, _warnings)) =
            assetline::config::parse_with_warnings(content, Path::new("assetline.toml"))
        {
            let _ = config.validate();
            let _ = config.concat_specs();
        }
    }
});
