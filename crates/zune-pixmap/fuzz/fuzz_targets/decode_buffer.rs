#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(image) = zune_pixmap::Pixmap::parse(data) {
        let pixels = image.to_rgba8888();
        assert_eq!(pixels.len(), image.rgba8888_len());
    }
});
