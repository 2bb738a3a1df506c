use std::io::Cursor;
use serde_json::json;
use tiny_http::{Request, Response};
use tracing::warn;

use leafmedic::pipeline::diagnose_bytes;
use leafmedic::readable_label;

use crate::handlers::read_upload;
use crate::routes::json_response;
use crate::state::StudioState;

// ---------------------------------------------------------------------------
// POST /api/diagnose
// ---------------------------------------------------------------------------

/// Same upload form as `/diagnose`, answered with JSON instead of a page.
pub fn handle_post(request: &mut Request, state: &StudioState) -> Response<Cursor<Vec<u8>>> {
    let upload = match read_upload(request) {
        Ok(u) => u,
        Err(msg) => return json_response(400, &json!({ "error": msg })),
    };
    let top_k = state.clamp_top_k(upload.top_k);

    let diagnosis = match diagnose_bytes(&state.classifier, &upload.image) {
        Ok((_, d)) => d,
        Err(e) => {
            warn!("diagnosis failed: {e}");
            return json_response(400, &json!({ "error": e.to_string() }));
        }
    };

    let prediction = &diagnosis.prediction;
    let ranked: Vec<_> = prediction.top_k(state.classifier.labels(), top_k)
        .into_iter()
        .map(|c| json!({ "label": c.label, "score": c.score }))
        .collect();

    let body = json!({
        "label":          prediction.label,
        "readable_label": readable_label(&prediction.label),
        "confidence":     prediction.confidence,
        "severity":       diagnosis.severity,
        "spots":          diagnosis.spots,
        "top_k":          ranked,
        "report":         diagnosis.report,
    });
    json_response(200, &body)
}
