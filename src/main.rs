use clap::Parser;
use kid_tutor::{Tutor, TutorConfig, telemetry};

fn main() {
    let config = TutorConfig::parse();

    if let Some(path) = &config.log_file {
        if let Err(e) = telemetry::init_tracing(path) {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let tutor = match Tutor::from_config(&config) {
        Ok(tutor) => tutor,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = tutor.run() {
        eprintln!("Error running tutor: {}", e);
        std::process::exit(1);
    }
}
