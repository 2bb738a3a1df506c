use std::collections::BTreeMap;

use image::{DynamicImage, Rgb, RgbImage};

use leafmedic::{
    diagnose, diagnose_bytes, encode_png, readable_label, ActivationFunction, ClassIndex,
    Classifier, DiagnoseError, ImageError, InputType, Layer, LoadError, Matrix, Network, Severity,
    DEFAULT_INPUT_SIZE,
};

const CLASSES: [&str; 4] = [
    "Apple___Apple_scab",
    "Corn_(maize)___healthy",
    "Tomato_Leaf_Mold",
    "Tomato_healthy",
];

fn class_index() -> ClassIndex {
    let map: BTreeMap<String, usize> =
        CLASSES.iter().enumerate().map(|(i, c)| (c.to_string(), i)).collect();
    ClassIndex::new(map).unwrap()
}

/// Single softmax layer with zero weights: the biases alone decide the scores.
fn bias_only(side: u32, biases: Vec<f64>) -> Network {
    let inputs = (side * side * 3) as usize;
    Network {
        layers: vec![Layer {
            size: biases.len(),
            weights: Matrix::zeros(inputs, biases.len()),
            biases,
            activator: ActivationFunction::Softmax,
        }],
        metadata: None,
    }
    .with_input_type(InputType::ImageRgb { width: side, height: side })
}

fn gray_leaf() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 300, Rgb([128, 128, 128])))
}

#[test]
fn end_to_end_on_a_gray_image() {
    let network = bias_only(DEFAULT_INPUT_SIZE, vec![0.0; 4]);
    let classifier = Classifier::new(network, class_index()).unwrap();
    let d = diagnose(&classifier, &gray_leaf()).unwrap();

    assert_eq!(d.enhanced.dimensions(), (224, 224));
    assert_eq!(d.enhanced.as_raw().len(), 224 * 224 * 3);
    assert_eq!(d.overlay.dimensions(), (224, 224));

    assert!(classifier.labels().contains(&d.prediction.label));
    assert!((0.0..=1.0).contains(&d.prediction.confidence));
    assert_eq!(d.severity, Severity::Low);

    assert!(d.report.contains(&readable_label(&d.prediction.label)));
    assert!(d.report.contains(&format!("{:.1}%", d.prediction.confidence * 100.0)));
    assert!(d.report.contains("low confidence"));
}

#[test]
fn confident_prediction_is_high_severity() {
    let network = bias_only(DEFAULT_INPUT_SIZE, vec![0.0, 0.0, 8.0, 0.0]);
    let classifier = Classifier::new(network, class_index()).unwrap();
    let d = diagnose(&classifier, &gray_leaf()).unwrap();

    assert_eq!(d.prediction.label, "Tomato_Leaf_Mold");
    assert!(d.prediction.confidence > 0.85);
    assert_eq!(d.severity, Severity::High);
    assert!(d.report.contains("Predicted Condition: Tomato Leaf Mold"));
    assert!(d.report.contains("Severity Level: High"));
    assert!(!d.report.contains("low confidence"));
}

#[test]
fn diagnose_bytes_decodes_png_uploads() {
    let classifier = Classifier::new(bias_only(16, vec![0.0, 2.0, 0.0, 0.0]), class_index()).unwrap();
    let png = encode_png(&gray_leaf()).unwrap();

    let (original, d) = diagnose_bytes(&classifier, &png).unwrap();
    assert_eq!((original.width(), original.height()), (300, 300));
    assert_eq!(d.prediction.label, "Corn_(maize)___healthy");
    assert_eq!(d.severity, Severity::Medium);
    assert!(d.report.contains("Corn (maize) – healthy"));
}

#[test]
fn diagnose_bytes_rejects_garbage() {
    let classifier = Classifier::new(bias_only(16, vec![0.0; 4]), class_index()).unwrap();

    let err = diagnose_bytes(&classifier, b"definitely not an image").unwrap_err();
    assert!(matches!(err, DiagnoseError::Image(ImageError::UnsupportedFormat)));

    let err = diagnose_bytes(&classifier, &[]).unwrap_err();
    assert!(matches!(err, DiagnoseError::Image(ImageError::EmptyData)));
}

#[test]
fn classifier_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("disease_model.json");
    let index_path = dir.path().join("class_indices.json");

    bias_only(8, vec![0.0, 0.0, 0.0, 1.5]).save_json(&model_path).unwrap();
    let indices: BTreeMap<&str, usize> = CLASSES.iter().enumerate().map(|(i, c)| (*c, i)).collect();
    std::fs::write(&index_path, serde_json::to_string(&indices).unwrap()).unwrap();

    let classifier = Classifier::load(&model_path, &index_path).unwrap();
    assert_eq!(classifier.input_size(), (8, 8));

    let d = diagnose(&classifier, &gray_leaf()).unwrap();
    assert_eq!(d.prediction.label, "Tomato_healthy");
    assert_eq!(d.enhanced.dimensions(), (8, 8));
}

#[test]
fn missing_model_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = Classifier::load(dir.path().join("nope.json"), dir.path().join("also_nope.json"))
        .unwrap_err();
    assert!(matches!(err, LoadError::ModelNotFound(_)));
}
