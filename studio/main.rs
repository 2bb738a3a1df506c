/// LeafMedic Studio
///
/// Browser front-end for leaf diagnosis: upload a photo, see the enhanced
/// image, the spot overlay, the prediction, the report and a confidence
/// explorer. Served by a synchronous tiny_http server; no JavaScript
/// frameworks required.
///
/// Run with:
///   cargo run --bin studio --release
/// Then open http://127.0.0.1:7878 (override with LEAFMEDIC_BIND_ADDR).

mod state;
mod render;
mod routes;
mod handlers;
mod util;

use std::process::ExitCode;

use tiny_http::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use leafmedic::{Classifier, Settings};
use state::StudioState;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env();
    if let Err(e) = settings.validate() {
        error!("invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    // The model is loaded exactly once; a failure here means nothing can be served.
    let classifier = match Classifier::load(&settings.model_path, &settings.class_index_path) {
        Ok(c) => c,
        Err(e) => {
            error!("cannot start studio: {e}");
            return ExitCode::FAILURE;
        }
    };

    let server = match Server::http(settings.bind_addr.as_str()) {
        Ok(s) => s,
        Err(e) => {
            error!("failed to bind {}: {e}", settings.bind_addr);
            return ExitCode::FAILURE;
        }
    };

    println!("╔══════════════════════════════════════════════╗");
    println!("║          LeafMedic Studio                    ║");
    println!("╠══════════════════════════════════════════════╣");
    println!("║  Open in your browser:                       ║");
    println!("║  http://{:<37}║", settings.bind_addr);
    println!("╚══════════════════════════════════════════════╝");
    info!(addr = %settings.bind_addr, classes = classifier.labels().len(), "studio listening");

    let state = StudioState::new(classifier, settings);

    // One request at a time: each upload runs to completion before the
    // next one is accepted.
    for request in server.incoming_requests() {
        routes::dispatch(request, &state);
    }
    ExitCode::SUCCESS
}
