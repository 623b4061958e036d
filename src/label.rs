//! Sentiment labels assigned to tweets.

// ============================================================================
// Sentiment Label
// ============================================================================

/// One of the four sentiment categories an annotator can assign.
///
/// The declaration order is the canonical order used everywhere a label set
/// is iterated (matrix rows and columns, marginal sums, rendering), so
/// output is reproducible from run to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SentimentLabel {
    /// Positive
    Pos,
    /// Neutral
    Neu,
    /// Negative
    Neg,
    /// Irrelevant (off-topic or not assessable)
    Irr,
}

impl SentimentLabel {
    /// All labels in canonical order.
    pub const ALL: [SentimentLabel; 4] = [
        SentimentLabel::Pos,
        SentimentLabel::Neu,
        SentimentLabel::Neg,
        SentimentLabel::Irr,
    ];

    /// Number of distinct labels.
    pub const COUNT: usize = Self::ALL.len();

    /// Token used in corpus files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Pos => "pos",
            SentimentLabel::Neu => "neu",
            SentimentLabel::Neg => "neg",
            SentimentLabel::Irr => "irr",
        }
    }

    /// Position in [`SentimentLabel::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a corpus token. Matching is exact: `POS` is not `pos`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "pos" => Some(SentimentLabel::Pos),
            "neu" => Some(SentimentLabel::Neu),
            "neg" => Some(SentimentLabel::Neg),
            "irr" => Some(SentimentLabel::Irr),
            _ => None,
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("unknown sentiment label {:?}", s))
    }
}
