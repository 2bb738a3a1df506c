//! One upload, start to finish: enhance → detect spots → classify → report.

use image::{DynamicImage, RgbImage};
use tracing::info;

use crate::classify::{Classifier, Prediction};
use crate::decode::decode_image_bytes;
use crate::enhance::{detect_spots, draw_overlay, enhance_to, SpotBox};
use crate::error::{ClassifyError, DiagnoseError};
use crate::report::{compose_report, Severity};

/// Everything a host displays for one image.
#[derive(Debug, Clone)]
pub struct Diagnosis {
    pub enhanced: RgbImage,
    pub overlay: RgbImage,
    pub spots: Vec<SpotBox>,
    pub prediction: Prediction,
    pub severity: Severity,
    pub report: String,
}

/// Runs the full chain on a decoded image.
///
/// Enhancement happens at the classifier's working resolution and feeds
/// the spot overlay; the classifier sees the original image.
pub fn diagnose(classifier: &Classifier, image: &DynamicImage) -> Result<Diagnosis, ClassifyError> {
    let (size, _) = classifier.input_size();
    let enhanced = enhance_to(image, size);
    let spots = detect_spots(&enhanced);
    let overlay = draw_overlay(&enhanced, &spots);

    let prediction = classifier.classify(image)?;
    let severity = Severity::from_confidence(prediction.confidence);
    let report = compose_report(&prediction.label, prediction.confidence);

    info!(
        label = %prediction.label,
        confidence = prediction.confidence,
        %severity,
        spots = spots.len(),
        "diagnosis complete"
    );
    Ok(Diagnosis { enhanced, overlay, spots, prediction, severity, report })
}

/// Decodes upload bytes, then [`diagnose`]s them.
pub fn diagnose_bytes(classifier: &Classifier, bytes: &[u8]) -> Result<(DynamicImage, Diagnosis), DiagnoseError> {
    let image = decode_image_bytes(bytes)?;
    let diagnosis = diagnose(classifier, &image)?;
    Ok((image, diagnosis))
}
