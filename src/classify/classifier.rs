use std::path::Path;

use image::DynamicImage;
use serde::Serialize;
use tracing::{debug, info};

use crate::classify::class_index::{ClassIndex, LabelVector};
use crate::classify::input::image_to_rgb_input;
use crate::error::{ClassifyError, LoadError};
use crate::network::Network;

/// Smallest top-K view a caller can ask for.
pub const MIN_TOP_K: usize = 3;

/// Frozen model plus its label mapping, loaded once at startup and shared
/// by reference with every caller.
#[derive(Debug)]
pub struct Classifier {
    network: Network,
    class_index: ClassIndex,
}

/// Outcome of one forward pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub label: String,
    pub index: usize,
    pub confidence: f64,
    pub distribution: Vec<f64>,
}

/// One row of a top-K view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedClass {
    pub label: String,
    pub score: f64,
}

impl Classifier {
    /// Pairs a network with its class index. The network must be valid and
    /// produce exactly one score per class.
    pub fn new(network: Network, class_index: ClassIndex) -> Result<Classifier, LoadError> {
        network.validate()?;
        let (outputs, classes) = (network.output_len(), class_index.len());
        if outputs != classes {
            return Err(LoadError::LabelCountMismatch { outputs, classes });
        }
        Ok(Classifier { network, class_index })
    }

    /// Loads the model and class index from disk. Any failure is fatal.
    pub fn load(
        model_path: impl AsRef<Path>,
        class_index_path: impl AsRef<Path>,
    ) -> Result<Classifier, LoadError> {
        let network = Network::load_json(model_path)?;
        let class_index = ClassIndex::load_json(class_index_path)?;
        let classifier = Classifier::new(network, class_index)?;

        let (width, height) = classifier.input_size();
        info!(classes = classifier.labels().len(), width, height, "classifier ready");
        Ok(classifier)
    }

    pub fn labels(&self) -> &LabelVector {
        self.class_index.labels()
    }

    /// Model input resolution `(width, height)`.
    pub fn input_size(&self) -> (u32, u32) {
        self.network.input_type().dimensions()
    }

    pub fn classify(&self, image: &DynamicImage) -> Result<Prediction, ClassifyError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(ClassifyError::EmptyImage { width: image.width(), height: image.height() });
        }
        let (width, height) = self.input_size();
        let input = image_to_rgb_input(image, width, height);
        let distribution = self.network.forward(&input);

        if let Some(index) = distribution.iter().position(|s| !s.is_finite()) {
            return Err(ClassifyError::NonFiniteScore { index });
        }

        // first maximum wins on ties
        let (index, confidence) = distribution.iter().copied().enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, s)| if s > best.1 { (i, s) } else { best });

        let label = self.labels().get(index).unwrap_or_default().to_owned();
        debug!(%label, confidence, "classified image");
        Ok(Prediction { label, index, confidence, distribution })
    }
}

impl Prediction {
    /// The `k` highest-scoring classes, best first. `k` is clamped to
    /// `[3, N]` (or to `N` when there are fewer than three classes).
    pub fn top_k(&self, labels: &LabelVector, k: usize) -> Vec<RankedClass> {
        let n = self.distribution.len();
        let k = k.clamp(MIN_TOP_K.min(n), n);

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| self.distribution[b].total_cmp(&self.distribution[a]));
        order.into_iter()
            .take(k)
            .map(|i| RankedClass {
                label: labels.get(i).unwrap_or_default().to_owned(),
                score: self.distribution[i],
            })
            .collect()
    }
}
