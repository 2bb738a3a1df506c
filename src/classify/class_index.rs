use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::{ClassIndexError, LoadError};

/// Immutable class name → output index mapping.
///
/// Construction guarantees the index set is exactly `0..len()`, which is
/// what lets [`LabelVector`] be total.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassIndex {
    indices: BTreeMap<String, usize>,
    labels: LabelVector,
}

/// Class names ordered by output index: `labels[i]` is the class whose index is `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelVector(Vec<String>);

impl ClassIndex {
    pub fn new(indices: BTreeMap<String, usize>) -> Result<ClassIndex, ClassIndexError> {
        if indices.is_empty() {
            return Err(ClassIndexError::Empty);
        }
        let len = indices.len();
        let mut slots: Vec<Option<&String>> = vec![None; len];
        for (class, &index) in &indices {
            if index >= len {
                return Err(ClassIndexError::OutOfRange { class: class.clone(), index, len });
            }
            if let Some(first) = slots[index] {
                return Err(ClassIndexError::Duplicate {
                    index,
                    first: first.clone(),
                    second: class.clone(),
                });
            }
            slots[index] = Some(class);
        }

        let labels = slots.into_iter()
            .enumerate()
            .map(|(index, class)| class.cloned().ok_or(ClassIndexError::Gap { index }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ClassIndex { indices, labels: LabelVector(labels) })
    }

    /// Builds the index from a parsed JSON object of `"class": index`
    /// pairs. Indices must be non-negative integers.
    pub fn from_json_map(raw: BTreeMap<String, Value>) -> Result<ClassIndex, ClassIndexError> {
        let indices = raw.into_iter()
            .map(|(class, value)| match value.as_u64() {
                Some(index) => Ok((class, index as usize)),
                None => Err(ClassIndexError::InvalidIndex { class, value: value.to_string() }),
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        ClassIndex::new(indices)
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<ClassIndex, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::ClassIndexNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)
            .map_err(|source| LoadError::ClassIndexRead { path: path.to_path_buf(), source })?;
        let raw: BTreeMap<String, Value> = serde_json::from_str(&text)
            .map_err(|source| LoadError::ClassIndexDecode { path: path.to_path_buf(), source })?;
        let index = ClassIndex::from_json_map(raw)?;

        info!(path = %path.display(), classes = index.len(), "loaded class index");
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn labels(&self) -> &LabelVector {
        &self.labels
    }
}

impl LabelVector {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn label_vector_inverts_the_index() {
        let pairs = [
            ("Tomato___Early_blight", 2),
            ("Potato___healthy", 0),
            ("Apple___Black_rot", 1),
        ];
        let index = ClassIndex::new(map(&pairs)).unwrap();

        let labels = index.labels();
        assert_eq!(labels.len(), 3);
        for (name, i) in pairs {
            assert_eq!(labels.get(i), Some(name));
        }
        assert_eq!(labels.get(0), Some("Potato___healthy"));
    }

    #[test]
    fn gap_is_rejected() {
        // with N entries, any gap forces some index out of 0..N
        let err = ClassIndex::new(map(&[("a", 0), ("b", 2)])).unwrap_err();
        assert_eq!(err, ClassIndexError::OutOfRange { class: "b".into(), index: 2, len: 2 });
    }

    #[test]
    fn duplicate_is_rejected() {
        let err = ClassIndex::new(map(&[("a", 1), ("b", 1)])).unwrap_err();
        assert_eq!(
            err,
            ClassIndexError::Duplicate { index: 1, first: "a".into(), second: "b".into() }
        );
    }

    #[test]
    fn duplicate_detection_is_deterministic() {
        let pairs = [("z", 0), ("m", 0), ("a", 1)];
        let first = ClassIndex::new(map(&pairs)).unwrap_err();
        let second = ClassIndex::new(map(&pairs)).unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_mapping_is_rejected() {
        assert_eq!(ClassIndex::new(BTreeMap::new()).unwrap_err(), ClassIndexError::Empty);
    }

    fn parse(json: &str) -> Result<ClassIndex, ClassIndexError> {
        ClassIndex::from_json_map(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn json_requires_non_negative_integers() {
        assert!(parse(r#"{"a": 0, "b": 1}"#).is_ok());
        assert_eq!(
            parse(r#"{"a": 0, "b": -1}"#).unwrap_err(),
            ClassIndexError::InvalidIndex { class: "b".into(), value: "-1".into() }
        );
        assert!(matches!(parse(r#"{"a": 0, "b": 1.5}"#), Err(ClassIndexError::InvalidIndex { .. })));
        assert!(matches!(parse(r#"{"a": 0, "b": "1"}"#), Err(ClassIndexError::InvalidIndex { .. })));
    }

    #[test]
    fn load_json_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("class_indices.json");
        std::fs::write(&path, r#"["a", "b"]"#).unwrap();
        assert!(matches!(ClassIndex::load_json(&path), Err(LoadError::ClassIndexDecode { .. })));
    }

    #[test]
    fn load_json_names_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClassIndex::load_json(dir.path().join("class_indices.json")).unwrap_err();
        assert!(matches!(err, LoadError::ClassIndexNotFound(_)));
        assert!(err.to_string().contains("class_indices.json"));
    }

    #[test]
    fn load_json_surfaces_invariant_violations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("class_indices.json");
        std::fs::write(&path, r#"{"a": 0, "b": 0}"#).unwrap();
        assert!(matches!(
            ClassIndex::load_json(&path),
            Err(LoadError::InvalidClassIndex(ClassIndexError::Duplicate { .. }))
        ));
    }
}
