#![no_main]

use libfuzzer_sys::fuzz_target;

use fileformat::container::{ContainerProbe, Ole2Probe, ZipProbe, first_entry_name};

fuzz_target!(|data: &[u8]| {
    if let Some(name) = first_entry_name(data) {
        assert!(name.len() <= data.len());
    }
    let _ = ZipProbe.refine(data);
    let _ = Ole2Probe.refine(data);
});
