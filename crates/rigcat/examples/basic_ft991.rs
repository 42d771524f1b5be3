//! Basic FT-991 control example.
//!
//! Demonstrates connecting to a Yaesu FT-991A over its USB virtual COM
//! port, reading the current frequency and mode, and tuning to the
//! 20 m FT8 frequency.
//!
//! # Requirements
//!
//! - A Yaesu FT-991 or FT-991A connected via USB
//! - The serial port path adjusted for your system (e.g., `/dev/ttyUSB0`
//!   on Linux, `COM3` on Windows)
//! - Rig menu CAT RATE set to 38400 baud (the crate default)
//!
//! # Usage
//!
//! ```sh
//! cargo run -p rigcat --features ft991 --example basic_ft991
//! ```

use std::time::Duration;

use rigcat::ft991::Ft991Builder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Adjust this to match your system's serial port.
    let serial_port = "/dev/ttyUSB0";

    println!("Connecting to FT-991 on {}...", serial_port);

    let session = Ft991Builder::new()
        .serial_port(serial_port)
        .baud_rate(38_400)
        .command_timeout(Duration::from_millis(500))
        .build()
        .await?;

    println!("Connected: {}", session.rig_name());

    // Read current frequency and mode.
    let freq = session.execute("FREQ", &[]).await;
    println!("Frequency: {} Hz", freq);

    let mode = session.execute("MODE", &[]).await;
    println!("Mode: {}", mode);

    // Tune to 14.074 MHz FT8.
    println!("Tuning to 14.074 MHz DATA-USB...");
    let result = session.execute("FREQ", &["14074000"]).await;
    println!("FREQ set: {}", result);

    let result = session.execute("MODE", &["DATA-USB"]).await;
    println!("MODE set: {}", result);

    // Drop power to 10 W.
    let result = session.execute("POWER", &["10"]).await;
    println!("POWER set: {}", result);

    session.close().await?;
    Ok(())
}
