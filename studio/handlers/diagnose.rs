use std::io::Cursor;
use tiny_http::{Request, Response};
use tracing::warn;

use leafmedic::classify::{LabelVector, Prediction};
use leafmedic::pipeline::diagnose_bytes;
use leafmedic::readable_label;

use crate::handlers::read_upload;
use crate::render::{html_escape, render_page};
use crate::state::{FlashMessage, StudioState};
use crate::util::image::{png_data_uri, rgb_data_uri, text_data_uri};

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub fn handle_get(state: &StudioState) -> Response<Cursor<Vec<u8>>> {
    let page = render_page(
        Some(FlashMessage::info("Upload a leaf image to begin.")),
        state.classifier.labels().len(),
        state.clamp_top_k(None),
        |tmpl| tmpl,
    );
    crate::routes::html_response(page)
}

// ---------------------------------------------------------------------------
// POST /diagnose
// ---------------------------------------------------------------------------

pub fn handle_post(request: &mut Request, state: &StudioState) -> Response<Cursor<Vec<u8>>> {
    let class_count = state.classifier.labels().len();

    let upload = match read_upload(request) {
        Ok(u) => u,
        Err(msg) => return error_page(state, &msg, None),
    };
    let top_k = state.clamp_top_k(upload.top_k);

    let (original, diagnosis) = match diagnose_bytes(&state.classifier, &upload.image) {
        Ok(r) => r,
        Err(e) => {
            warn!("diagnosis failed: {e}");
            return error_page(state, &e.to_string(), Some(top_k));
        }
    };

    let images = format!(
        r#"<div class="card"><h2>Images</h2>
<div class="image-row">
  <figure><img src="{original}" alt="original"><figcaption>Original</figcaption></figure>
  <figure><img src="{enhanced}" alt="enhanced"><figcaption>Enhanced</figcaption></figure>
  <figure><img src="{overlay}" alt="spots"><figcaption>Detected spots: {count}</figcaption></figure>
</div></div>"#,
        original = png_data_uri(&original).unwrap_or_default(),
        enhanced = rgb_data_uri(&diagnosis.enhanced).unwrap_or_default(),
        overlay  = rgb_data_uri(&diagnosis.overlay).unwrap_or_default(),
        count    = diagnosis.spots.len(),
    );

    let prediction = format_prediction(&diagnosis.prediction, diagnosis.severity.as_str());
    let explorer   = format_top_k(&diagnosis.prediction, state.classifier.labels(), top_k);

    let report = format!(
        r#"<div class="card"><h2>Report</h2>
<textarea class="report" rows="18" readonly>{text}</textarea>
<div class="mt"><a class="btn btn-secondary" href="{uri}" download="disease_report.txt">Download report</a></div>
</div>"#,
        text = html_escape(&diagnosis.report),
        uri  = text_data_uri(&diagnosis.report),
    );

    let result = format!("{}\n{}\n{}\n{}", prediction, images, explorer, report);
    let page = render_page(None, class_count, top_k, |tmpl| {
        tmpl.replace("{{RESULT_SECTION}}", &result)
    });
    crate::routes::html_response(page)
}

// ---------------------------------------------------------------------------
// Result fragments
// ---------------------------------------------------------------------------

fn format_prediction(prediction: &Prediction, severity: &str) -> String {
    format!(
        r#"<div class="result-card"><h2>Diagnosis</h2>
<div class="prediction-hero">{hero}</div>
<div class="prediction-sub">Confidence: {conf:.1}% &middot; Severity: <span class="severity severity-{sev_class}">{sev}</span></div>
</div>"#,
        hero      = html_escape(&readable_label(&prediction.label)),
        conf      = prediction.confidence * 100.0,
        sev_class = severity.to_ascii_lowercase(),
        sev       = severity,
    )
}

fn format_top_k(prediction: &Prediction, labels: &LabelVector, k: usize) -> String {
    let ranked = prediction.top_k(labels, k);
    let rows: String = ranked.iter().enumerate().map(|(rank, class)| {
        let width = (class.score * 260.0) as u32;
        let dim   = if rank != 0 { " dim" } else { "" };
        format!(
            r#"<tr><td class="prob-label">{}</td><td><div class="bar-wrap"><div class="bar-fill{}" style="width:{}px"></div></div></td><td class="prob-pct">{:.1}%</td></tr>"#,
            html_escape(&readable_label(&class.label)), dim, width, class.score * 100.0
        )
    }).collect();

    format!(
        r#"<div class="result-card"><h2>Top {k} classes</h2>
<table class="prob-table">
  <thead><tr><th>Class</th><th>Confidence</th><th></th></tr></thead>
  <tbody>{rows}</tbody>
</table></div>"#,
        k = ranked.len(), rows = rows
    )
}

fn error_page(state: &StudioState, msg: &str, top_k: Option<usize>) -> Response<Cursor<Vec<u8>>> {
    let page = render_page(
        Some(FlashMessage::error(msg)),
        state.classifier.labels().len(),
        top_k.unwrap_or_else(|| state.clamp_top_k(None)),
        |tmpl| tmpl,
    );
    crate::routes::html_response(page)
}
