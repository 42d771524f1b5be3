//! Basic FT-817 control example.
//!
//! Demonstrates connecting to a Yaesu FT-817 over a CAT interface cable,
//! reading the current frequency and mode, and setting up a 2 m FM
//! repeater with CTCSS.
//!
//! # Requirements
//!
//! - A Yaesu FT-817 with a CAT cable on the ACC jack
//! - The serial port path adjusted for your system
//! - Rig menu #14 (CAT RATE) set to 4800 baud (the crate default)
//!
//! # Usage
//!
//! ```sh
//! cargo run -p rigcat --features ft817 --example basic_ft817
//! ```

use rigcat::ft817::Ft817Builder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Adjust this to match your system's serial port.
    let serial_port = "/dev/ttyUSB0";

    println!("Connecting to FT-817 on {}...", serial_port);

    let session = Ft817Builder::new().serial_port(serial_port).build().await?;

    println!("Connected: {}", session.rig_name());

    // Read current frequency and mode.
    let freq = session.execute("FREQ", &[]).await;
    println!("Frequency: {} Hz", freq);

    let mode = session.execute("MODE", &[]).await;
    println!("Mode: {}", mode);

    // Set up a 2 m repeater: 146.940 MHz, -600 kHz offset, 103.5 Hz tone.
    println!("Setting up 146.940- with 103.5 Hz tone...");
    println!("FREQ: {}", session.execute("FREQ", &["146940000"]).await);
    println!("MODE: {}", session.execute("MODE", &["FM"]).await);
    println!(
        "RPT-OFFSET: {}",
        session.execute("RPT-OFFSET", &["-600000"]).await
    );
    println!(
        "TONE: {}",
        session.execute("TONE", &["ENC", "1035"]).await
    );

    session.close().await?;
    Ok(())
}
