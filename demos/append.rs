//! Incremental text assembly with a growable buffer.
//!
//! Run with:
//!     RUST_LOG=bbuf=trace cargo run --example append

use std::fmt::Write;

use bbuf::{Buf, BufConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Start tiny so the doubling is visible in the trace output
    let mut buf = Buf::new(1);
    for i in 0..1000 {
        buf.put(&(i % 10).to_string());
    }
    println!("{} bytes, cap {}", buf.len(), buf.cap());
    println!("first digits: {}", buf.slice(0, Some(20)));
    println!("last digits:  {}", buf.slice(-20, None));

    // Formatted output
    let mut report = Buf::with_config(BufConfig::new(16)?.with_max_size(1024))?;
    for (name, value) in [("alpha", 1), ("beta", 22), ("gamma", 333)] {
        writeln!(report, "{:<8}{:>5}", name, value)?;
    }
    print!("{}", report);
    println!("{:?}", report.slice(0, Some(8)));

    // Writes past the ceiling are refused
    let big = "x".repeat(2048);
    println!("put past ceiling wrote {} bytes", report.put(big.as_str()));
    if let Err(err) = report.try_put(big.as_str()) {
        println!("try_put: {}", err);
    }

    // Byte-indexed search
    let mut text = Buf::new(8);
    text.put("明天 hello");
    if let Some(offset) = text.index_of("hello") {
        println!("'hello' starts at byte {}", offset);
    }

    Ok(())
}
