//! Text width measurement
//!
//! The rotator sizes its container to the widest title so the layout does not
//! shift as text changes. Measurement goes through [`TextMeasurer`] so hosts
//! with real font shaping can plug it in; [`EstimatingMeasurer`] is a
//! deterministic fallback based on grapheme counts.

use unicode_segmentation::UnicodeSegmentation;

/// Font used for measurement
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// CSS font-family list, e.g. `"Fira Code", monospace`
    pub family: String,
    pub size_px: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size_px: f32) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }

    /// True when the family list names a monospace face
    pub fn is_monospace(&self) -> bool {
        let family = self.family.to_ascii_lowercase();
        ["mono", "courier", "consolas", "menlo"]
            .iter()
            .any(|needle| family.contains(needle))
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Inter, system-ui, sans-serif", 48.0)
    }
}

pub trait TextMeasurer {
    /// Rendered width of `text` in pixels
    fn measure(&self, text: &str, font: &FontSpec) -> f32;

    /// Widest rendering among `texts`
    fn max_width(&self, texts: &[String], font: &FontSpec) -> f32 {
        texts
            .iter()
            .map(|t| self.measure(t, font))
            .fold(0.0, f32::max)
    }
}

/// Average-advance estimate: graphemes x font size x advance ratio
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimatingMeasurer {
    pub proportional_advance: f32,
    pub monospace_advance: f32,
}

impl Default for EstimatingMeasurer {
    fn default() -> Self {
        Self {
            proportional_advance: 0.55,
            monospace_advance: 0.6,
        }
    }
}

impl TextMeasurer for EstimatingMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        let graphemes = text.graphemes(true).count() as f32;
        let advance = if font.is_monospace() {
            self.monospace_advance
        } else {
            self.proportional_advance
        };
        graphemes * font.size_px * advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_counts_graphemes_not_bytes() {
        let m = EstimatingMeasurer::default();
        let font = FontSpec::new("monospace", 10.0);
        // "e" + combining acute is one grapheme
        assert!(approx(m.measure("e\u{301}", &font), 6.0));
        assert!(approx(m.measure("abc", &font), 18.0));
    }

    #[test]
    fn test_monospace_detection() {
        assert!(FontSpec::new("\"Fira Mono\", monospace", 16.0).is_monospace());
        assert!(FontSpec::new("Courier New", 16.0).is_monospace());
        assert!(!FontSpec::new("Inter, sans-serif", 16.0).is_monospace());
    }

    #[test]
    fn test_max_width_picks_longest() {
        let m = EstimatingMeasurer::default();
        let font = FontSpec::new("monospace", 10.0);
        let titles = vec!["ab".to_string(), "abcd".to_string(), "a".to_string()];
        assert!(approx(m.max_width(&titles, &font), 24.0));
        assert_eq!(m.max_width(&[], &font), 0.0);
    }
}
