/// Result alias that carries the custom [`BvhError`] type.
pub type Result<T> = std::result::Result<T, BvhError>;

/// Common error type for the core crate.
///
/// Variants fall into three families: structural problems with the
/// `MOTION` section, numbers that fail to parse, and frames with the wrong
/// channel count. The remaining variants are raised on behalf of callers
/// that address frames and groups, or wrap IO and JSON failures.
#[derive(Debug, thiserror::Error)]
pub enum BvhError {
    #[error("BVH file has no MOTION block")]
    MissingMotion,
    /// A required header line after `MOTION` was absent or malformed.
    /// `line` is 1-based, or `None` when the input ended early.
    #[error("expected `{expected}` line after MOTION{}", describe_line(.line))]
    MissingHeader {
        expected: &'static str,
        line: Option<usize>,
    },
    #[error("expected {declared} frame lines, but found {found}")]
    FrameCountMismatch { declared: usize, found: usize },
    #[error("invalid number `{token}` on line {line}")]
    InvalidNumber { line: usize, token: String },
    /// `frame` is 1-based.
    #[error("frame {frame}: expected {expected} channels, got {found}", expected = crate::CHANNELS_PER_FRAME)]
    ChannelCount { frame: usize, found: usize },
    #[error("frame {frame} is out of range (1..={frames})")]
    FrameOutOfRange { frame: usize, frames: usize },
    #[error("unknown channel group `{0}`")]
    UnknownGroup(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl BvhError {
    /// Missing or malformed `MOTION`, `Frames:` or `Frame Time:` markers,
    /// or a declared frame count that disagrees with the data.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MissingMotion | Self::MissingHeader { .. } | Self::FrameCountMismatch { .. }
        )
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::InvalidNumber { .. })
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, Self::ChannelCount { .. })
    }
}

fn describe_line(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" (line {line})"),
        None => " (end of input)".to_string(),
    }
}
