//! A minimal, read-only inspection tool: prints the top-level box layout of an MP4 file, and, for
//! `moov`, the chunk-offset tables `mp4fastopt` would rewrite. Never writes anything.
//!
//! Not a general-purpose MP4 dumper — only useful for the handful of boxes this crate cares about.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;

fn main() {
    env_logger::init();

    let path = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("usage: mp4fastopt-dump <file>");
            std::process::exit(2);
        }
    };

    if let Err(err) = dump(&path) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn dump(path: &PathBuf) -> Result<(), mp4fastopt::Error> {
    let mut file = File::open(path).map_err(|source| mp4fastopt::Error::Io { op: mp4fastopt::IoOp::Read, source })?;
    let len = file
        .seek(SeekFrom::End(0))
        .map_err(|source| mp4fastopt::Error::Io { op: mp4fastopt::IoOp::Seek, source })?;
    file.seek(SeekFrom::Start(0))
        .map_err(|source| mp4fastopt::Error::Io { op: mp4fastopt::IoOp::Seek, source })?;

    let records = mp4fastopt::scan(&mut file, len)?;
    println!("{path}: {n} top-level boxes", path = path.display(), n = records.len());
    for record in &records {
        println!(
            "  {fourcc} @ 0x{offset:08x}  header={header_len}B payload={payload_len}B",
            fourcc = record.fourcc,
            offset = record.header_offset,
            header_len = record.header_len,
            payload_len = record.payload_len,
        );
    }

    let plan = mp4fastopt::compute_layout(&records)?;
    println!(
        "fast-start: {}",
        if plan.is_already_fast_start() { "yes" } else { "no" }
    );

    let mut moov_payload = vec![0u8; plan.moov.payload_len as usize];
    file.seek(SeekFrom::Start(plan.moov.payload_offset))
        .map_err(|source| mp4fastopt::Error::Io { op: mp4fastopt::IoOp::Seek, source })?;
    file.read_exact(&mut moov_payload)
        .map_err(|source| mp4fastopt::Error::Io { op: mp4fastopt::IoOp::Read, source })?;

    let offsets = mp4fastopt::list_chunk_offsets(&moov_payload)?;
    println!("{n} chunk-offset table entries:", n = offsets.len());
    for (fourcc, offset) in offsets {
        println!("  {fourcc}: 0x{offset:08x}");
    }

    Ok(())
}
