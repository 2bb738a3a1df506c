use std::fmt;

use serde::Serialize;

use crate::report::knowledge::lookup_or_placeholder;

const HIGH_THRESHOLD: f64 = 0.85;
const MEDIUM_THRESHOLD: f64 = 0.70;

/// Below this confidence the report opens with an advisory block.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.70;

const LOW_CONFIDENCE_WARNING: &str = "⚠️ Note: This prediction has low confidence. Consider:\n\
    • Taking clearer photos in good lighting\n\
    • Capturing multiple angles of the affected leaves\n\
    • Consulting with a plant pathologist for confirmation\n\n";

const PREVENTION_TIPS: &str = "🌱 PREVENTION TIPS\n\
    • Practice crop rotation to break disease cycles\n\
    • Ensure proper plant spacing for good air circulation\n\
    • Use drip irrigation to keep foliage dry\n\
    • Remove plant debris at the end of the growing season\n\
    • Monitor plants regularly for early detection of problems";

/// Qualitative bucket derived from classifier confidence alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Thresholds are strict: exactly 0.85 is Medium, exactly 0.70 is Low.
    pub fn from_confidence(confidence: f64) -> Severity {
        if confidence > HIGH_THRESHOLD {
            Severity::High
        } else if confidence > MEDIUM_THRESHOLD {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Folder-style class name → display name.
/// `Tomato___Early_blight` becomes `Tomato – Early blight`.
pub fn readable_label(label: &str) -> String {
    label.replace("___", " – ").replace('_', " ")
}

pub fn is_low_confidence(confidence: f64) -> bool {
    confidence < LOW_CONFIDENCE_THRESHOLD
}

/// Renders the plain-text diagnosis report for `label` at `confidence`.
///
/// Never fails: labels missing from the knowledge table get placeholder text.
pub fn compose_report(label: &str, confidence: f64) -> String {
    let name = readable_label(label);
    let info = lookup_or_placeholder(label);
    let severity = Severity::from_confidence(confidence);
    let warning = if is_low_confidence(confidence) { LOW_CONFIDENCE_WARNING } else { "" };

    format!(
        "📝 DISEASE REPORT\n\
         {rule}\n\
         🔍 DIAGNOSIS\n  \
         Predicted Condition: {name}\n  \
         Confidence: {pct:.1}%\n  \
         Severity Level: {severity}\n\n\
         {warning}\
         📖 DESCRIPTION\n\
         {description}\n\n\
         💊 RECOMMENDED TREATMENT\n\
         {treatment}\n\n\
         {tips}",
        rule = "═".repeat(38),
        pct = confidence * 100.0,
        description = info.description,
        treatment = info.treatment,
        tips = PREVENTION_TIPS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::knowledge::PLACEHOLDER;

    #[test]
    fn readable_label_replaces_separators() {
        assert_eq!(readable_label("Tomato___Early_blight"), "Tomato – Early blight");
        assert_eq!(readable_label("Pepper__bell___Bacterial_spot"), "Pepper  bell – Bacterial spot");
        assert_eq!(readable_label("Tomato_healthy"), "Tomato healthy");
    }

    #[test]
    fn severity_bands_are_strict() {
        assert_eq!(Severity::from_confidence(0.90), Severity::High);
        assert_eq!(Severity::from_confidence(0.85), Severity::Medium);
        assert_eq!(Severity::from_confidence(0.80), Severity::Medium);
        assert_eq!(Severity::from_confidence(0.70), Severity::Low);
        assert_eq!(Severity::from_confidence(0.50), Severity::Low);
    }

    #[test]
    fn confident_report_has_no_warning() {
        let report = compose_report("Tomato_Early_blight", 0.90);
        assert!(report.contains("Severity Level: High"));
        assert!(report.contains("Confidence: 90.0%"));
        assert!(!report.contains("low confidence"));
    }

    #[test]
    fn boundary_confidence_falls_to_lower_band() {
        // 0.70 is neither above the Medium threshold nor below the warning one
        let report = compose_report("Tomato_Early_blight", 0.70);
        assert!(report.contains("Severity Level: Low"));
        assert!(!report.contains("low confidence"));

        let report = compose_report("Tomato_Early_blight", 0.7001);
        assert!(report.contains("Severity Level: Medium"));
    }

    #[test]
    fn low_confidence_report_warns_before_description() {
        let report = compose_report("Potato_healthy", 0.50);
        assert!(report.contains("Severity Level: Low"));
        let warning = report.find("This prediction has low confidence").unwrap();
        let description = report.find("📖 DESCRIPTION").unwrap();
        assert!(warning < description);
    }

    #[test]
    fn unknown_label_gets_placeholder_sections() {
        let report = compose_report("Unknown___Class", 0.95);
        assert!(report.contains("Predicted Condition: Unknown – Class"));
        assert!(report.contains(PLACEHOLDER.description));
        assert!(report.contains(PLACEHOLDER.treatment));
    }

    #[test]
    fn sections_appear_in_order() {
        let report = compose_report("Tomato_mosaic_virus", 0.99);
        let order = [
            "📝 DISEASE REPORT",
            "🔍 DIAGNOSIS",
            "📖 DESCRIPTION",
            "Tomato mosaic virus (ToMV)",
            "💊 RECOMMENDED TREATMENT",
            "🌱 PREVENTION TIPS",
            "• Monitor plants regularly",
        ];
        let positions: Vec<usize> = order.iter().map(|s| report.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(report.ends_with("early detection of problems"));
    }
}
