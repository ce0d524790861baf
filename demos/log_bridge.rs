use log::{debug, error, info, trace, warn};
use tiny_logger::{logging, Options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(path)?,
        None => Options::with_prompt("[{sev}] "),
    };
    tiny_logger::initialise(options);
    logging::init()?;

    // Records from the log crate come out through the same prompt
    trace!("This is a trace message");
    debug!("This is a debug message");
    info!("This is an info message");
    warn!("This is a warning message");
    error!("This is an error message");

    println!("Pass a JSON options file to change the prompt");
    println!("Example: cargo run --example log_bridge -- options.json");
    Ok(())
}
