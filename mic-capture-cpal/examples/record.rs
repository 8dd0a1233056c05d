//! Record three seconds from the default microphone and report the
//! captured sample count, using the two-phase stop protocol: size query
//! first, then retrieval into a correctly sized buffer.

use std::thread;
use std::time::Duration;

use mic_capture_core::{CaptureSession, DeviceConfig};
use mic_capture_cpal::CpalBackend;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DeviceConfig::default();
    let mut session = CaptureSession::new(CpalBackend::new(), config)?;

    println!("recording for 3 seconds...");
    session.start()?;
    thread::sleep(Duration::from_secs(3));

    let needed = session.stop();
    let mut samples = vec![0.0f32; needed];
    session.stop_into(&mut samples);

    println!(
        "captured {} samples ({:.2} s), {} callbacks",
        needed,
        needed as f64 / config.sample_rate as f64,
        session.callback_count()
    );
    Ok(())
}
