use crate::error::{Result, SurveyError};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Positive,
    Neutral,
    Negative,
}

impl Emotion {
    /// Display order on the emotion page.
    pub const ALL: [Emotion; 3] = [Emotion::Positive, Emotion::Neutral, Emotion::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Positive => "positive",
            Emotion::Neutral => "neutral",
            Emotion::Negative => "negative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Positive => "积极",
            Emotion::Neutral => "中性",
            Emotion::Negative => "消极",
        }
    }

    /// 1-based option number, as bound to the digit keys.
    pub fn from_option(n: u8) -> Option<Self> {
        match n {
            1 => Some(Emotion::Positive),
            2 => Some(Emotion::Neutral),
            3 => Some(Emotion::Negative),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Emotion::Positive => 0,
            Emotion::Neutral => 1,
            Emotion::Negative => 2,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intensity score, always in 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SurveyError::InvalidIntensity(value))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Intensity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// One committed answer. Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Judgment {
    pub word: String,
    pub emotion: Emotion,
    pub intensity: Intensity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Emotion,
    Intensity,
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_bounds() {
        assert!(Intensity::new(0).is_err());
        assert_eq!(Intensity::new(1).unwrap().get(), 1);
        assert_eq!(Intensity::new(5).unwrap().get(), 5);
        assert!(matches!(
            Intensity::new(6),
            Err(SurveyError::InvalidIntensity(6))
        ));
    }

    #[test]
    fn test_emotion_options_match_display_order() {
        for (i, emotion) in Emotion::ALL.iter().enumerate() {
            assert_eq!(emotion.index(), i);
            assert_eq!(Emotion::from_option(i as u8 + 1), Some(*emotion));
        }
        assert_eq!(Emotion::from_option(0), None);
        assert_eq!(Emotion::from_option(4), None);
    }

    #[test]
    fn test_emotion_wire_names() {
        assert_eq!(Emotion::Positive.to_string(), "positive");
        assert_eq!(Emotion::Neutral.as_str(), "neutral");
        assert_eq!(Emotion::Negative.label(), "消极");
    }
}
