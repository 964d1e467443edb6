use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Trustworthiness rating returned by the service, nominally 0-100.
///
/// `Display` prints the number the way it arrived (`85`, `42.5`) without
/// rounding or padding. Integral values serialize back as JSON integers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn band(self) -> ScoreBand {
        ScoreBand::classify(self.0)
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl ScoreBand {
    pub const MEDIUM_FLOOR: f64 = 30.0;
    pub const HIGH_FLOOR: f64 = 70.0;

    /// Lower bounds are inclusive. A NaN falls through both comparisons and
    /// lands in `High`.
    pub fn classify(score: f64) -> Self {
        if score < Self::MEDIUM_FLOOR {
            ScoreBand::Low
        } else if score < Self::HIGH_FLOOR {
            ScoreBand::Medium
        } else {
            ScoreBand::High
        }
    }

    pub fn color(self) -> ScoreColor {
        match self {
            ScoreBand::Low => ScoreColor::RED,
            ScoreBand::Medium => ScoreColor::ORANGE,
            ScoreBand::High => ScoreColor::GREEN,
        }
    }
}

/// Swatch color applied behind the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ScoreColor {
    pub const RED: ScoreColor = ScoreColor::rgb(0xe7, 0x4c, 0x3c);
    pub const ORANGE: ScoreColor = ScoreColor::rgb(0xf3, 0x9c, 0x12);
    pub const GREEN: ScoreColor = ScoreColor::rgb(0x2e, 0xcc, 0x71);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for ScoreColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Document types the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Txt,
}

impl DocumentKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::Txt),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Txt => "text/plain",
        }
    }
}

/// Lowercased text after the final `.` of `file_name`, or `None` when the
/// name has no dot at all.
pub fn file_extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
}
