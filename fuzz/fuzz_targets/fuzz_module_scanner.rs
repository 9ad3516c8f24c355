#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use assetline::domain::ports::ModuleScanner;
use assetline::ImportScanner;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let scanner = ImportScanner::new("my-app");
        // Wrapped and plain paths take different scanning routes
        let _ = scanner.scan(Path::new("my-app/fuzz.js"), source);
        let _ = scanner.scan(Path::new("vendor/fuzz.js"), source);
    }
});
