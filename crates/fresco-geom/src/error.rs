use std::fmt;

/// A domain-validation error from shape tessellation.
///
/// Tessellation fails fast on parameters that would produce degenerate or
/// unuploadable geometry; draw-call vertex counts downstream assume
/// well-formed output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GeomError {
    /// Circle fan with fewer than 3 segments. A 1–2 segment fan is not a
    /// meaningful circle approximation.
    TooFewSegments { segments: u32 },
    /// Zero, negative, or non-finite circle radius.
    InvalidRadius { radius: f32 },
    /// Zero, negative, or non-finite spiral growth rate.
    InvalidGrowth { growth: f32 },
    /// Zero, negative, or non-finite spiral turn count.
    InvalidTurns { turns: f32 },
    /// Rectangle with zero area.
    EmptyRect,
    /// A shape coordinate was NaN or infinite.
    NonFinite { shape: &'static str },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GeomError::TooFewSegments { segments } => {
                write!(f, "circle needs at least 3 segments, got {segments}")
            }
            GeomError::InvalidRadius { radius } => {
                write!(f, "circle radius must be positive and finite, got {radius}")
            }
            GeomError::InvalidGrowth { growth } => {
                write!(f, "spiral growth rate must be positive and finite, got {growth}")
            }
            GeomError::InvalidTurns { turns } => {
                write!(f, "spiral turn count must be positive and finite, got {turns}")
            }
            GeomError::EmptyRect => write!(f, "rectangle has zero area"),
            GeomError::NonFinite { shape } => {
                write!(f, "{shape} has a NaN or infinite coordinate")
            }
        }
    }
}

impl std::error::Error for GeomError {}
