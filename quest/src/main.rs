//! Detective Quest: explore the mansion, collect clues, accuse a suspect.
//!
//! Plays the reference case over stdin/stdout. Set `RUST_LOG=debug` (in the
//! environment or a `.env` file) to trace moves and collected clues on
//! stderr.

use quest_core::headless::{self, LineInput};
use quest_core::SessionConfig;
use std::io;

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    match headless::run(SessionConfig::new(), LineInput::new(stdin.lock()), stdout.lock()) {
        Ok(judgment) => log::info!("game finished: {:?}", judgment.verdict),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
