#![no_main]

use std::io;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut output = Vec::new();
    let config = mp4fastopt::Config::default();
    let mut listener = mp4fastopt::NullListener;
    let cancel = mp4fastopt::Cancel::new();

    #[cfg_attr(not(fuzzing_repro), allow(unused))]
    match mp4fastopt::optimize_io(io::Cursor::new(data), &mut output, &config, &mut listener, &cancel) {
        Ok(()) => {
            #[cfg(fuzzing_repro)]
            eprintln!("optimize succeeded: {len} bytes out", len = output.len());
        }
        Err(error) => {
            #[cfg(fuzzing_repro)]
            eprintln!("optimize returned an error: {error}");
        }
    }
});
