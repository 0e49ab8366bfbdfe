use std::io::Read;
use std::process::ExitCode;

use scratchkit::{crc32, format_dec, format_hex};

fn main() -> ExitCode {
    let mut data = Vec::new();
    if let Err(err) = std::io::stdin().read_to_end(&mut data) {
        eprintln!("failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }
    let sum = crc32(&data) as u64;
    println!("0x{} {}", format_hex(sum), format_dec(sum));
    ExitCode::SUCCESS
}
