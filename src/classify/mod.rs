pub mod class_index;
pub mod classifier;
pub mod input;

pub use class_index::{ClassIndex, LabelVector};
pub use classifier::{Classifier, Prediction, RankedClass, MIN_TOP_K};
