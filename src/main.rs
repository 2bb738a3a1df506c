// Diagnoses a single leaf photo from the command line.
//
//   leafmedic path/to/leaf.jpg
//
// Model and class-index locations come from LEAFMEDIC_* environment
// variables (see `Settings::from_env`). For the browser UI run the studio:
//   cargo run --bin studio --release
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use leafmedic::{diagnose_bytes, readable_label, Classifier, Settings};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Some(image_path) = std::env::args().nth(1) else {
        eprintln!("usage: leafmedic <leaf-image>");
        return ExitCode::from(2);
    };

    let settings = Settings::from_env();
    if let Err(e) = settings.validate() {
        error!("invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    let classifier = match Classifier::load(&settings.model_path, &settings.class_index_path) {
        Ok(c) => c,
        Err(e) => {
            error!("cannot start: {e}");
            return ExitCode::FAILURE;
        }
    };

    let bytes = match std::fs::read(&image_path) {
        Ok(b) => b,
        Err(e) => {
            error!("cannot read {image_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let diagnosis = match diagnose_bytes(&classifier, &bytes) {
        Ok((_, d)) => d,
        Err(e) => {
            error!("diagnosis failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}\n", diagnosis.report);
    println!("Spots detected: {}", diagnosis.spots.len());
    let ranked = diagnosis.prediction.top_k(classifier.labels(), settings.top_k);
    println!("Top {} classes:", ranked.len());
    for ranked in ranked {
        println!("  {:>5.1}%  {}", ranked.score * 100.0, readable_label(&ranked.label));
    }
    ExitCode::SUCCESS
}
