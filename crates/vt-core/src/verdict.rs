//! Label tallies and the agree/contradict verdict reduced from them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Label;
use crate::errors::DegenerateVerdict;

/// Per-label counts over one classified evidence set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub agree: usize,
    pub neutral: usize,
    pub contradict: usize,
}

impl LabelCounts {
    pub fn record(&mut self, label: Label) {
        match label {
            Label::Agree => self.agree += 1,
            Label::Neutral => self.neutral += 1,
            Label::Contradict => self.contradict += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.agree + self.neutral + self.contradict
    }
}

impl FromIterator<Label> for LabelCounts {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut counts = Self::default();
        for label in iter {
            counts.record(label);
        }
        counts
    }
}

/// Which side the evidence leans towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dominant {
    Agree,
    Contradict,
}

impl Dominant {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agree => "agree",
            Self::Contradict => "contradict",
        }
    }
}

impl fmt::Display for Dominant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reduced verdict: the dominant side and its share of non-neutral labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerdictSummary {
    pub dominant: Dominant,
    /// Percentage in `[50, 100]`.
    pub strength: f64,
}

impl VerdictSummary {
    /// Reduce label counts. Neutral labels are excluded from the denominator.
    /// Contradict dominates only when strictly more frequent.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateVerdict`] when there are no agree and no contradict
    /// labels; the verdict sentence must then be suppressed.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_counts(counts: &LabelCounts) -> Result<Self, DegenerateVerdict> {
        let decisive = counts.agree + counts.contradict;
        if decisive == 0 {
            return Err(DegenerateVerdict);
        }

        let (dominant, count) = if counts.contradict > counts.agree {
            (Dominant::Contradict, counts.contradict)
        } else {
            (Dominant::Agree, counts.agree)
        };

        Ok(Self {
            dominant,
            strength: count as f64 / decisive as f64 * 100.0,
        })
    }

    /// One-line summary for display.
    #[must_use]
    pub fn sentence(&self) -> String {
        format!(
            "The claim seems to {} with the found sources (extent: {:.0}%)",
            self.dominant, self.strength
        )
    }
}
