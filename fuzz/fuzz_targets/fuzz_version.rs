// SPDX-License-Identifier: MIT
#![no_main]

use libfuzzer_sys::fuzz_target;
use swlibtidy::Version;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(parsed) = input.parse::<Version>() {
            // Anything that parses must render back to an equivalent triple.
            let rendered = parsed.to_string();
            assert_eq!(rendered.parse::<Version>().unwrap(), parsed);
        }
    }
});
