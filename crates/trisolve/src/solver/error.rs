use std::fmt;

/// Why a request could not be solved as given.
///
/// All kinds are recoverable: the solver always returns a renderable triangle
/// and carries the first error it hit. `Display` yields the user-facing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleError {
    /// A present value is NaN or infinite.
    InvalidNumber,
    /// A present value is negative.
    NegativeValue,
    /// A present value is exactly zero.
    ZeroValue,
    /// No side length was provided.
    NoSideGiven,
    /// Not exactly three measurements were provided.
    WrongCount,
    /// An angle is `>= π`.
    AngleTooLarge,
    /// Two given angles sum to exactly `π`.
    DegenerateAngleSum,
    /// Three sides that do not form a triangle (within ε).
    TriangleInequalityViolated,
    /// The solved triangle is degenerate (NaN, non-positive, coincident points).
    DegenerateGeometry,
}

impl TriangleError {
    /// True for kinds raised by validation, before any solving.
    /// `DegenerateGeometry` is the only kind raised after solving.
    #[inline]
    pub fn is_input_error(self) -> bool {
        !matches!(self, TriangleError::DegenerateGeometry)
    }
}

impl fmt::Display for TriangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            TriangleError::InvalidNumber | TriangleError::ZeroValue => {
                "Please enter valid non-zero numbers."
            }
            TriangleError::NegativeValue => "Please enter positive numbers.",
            TriangleError::NoSideGiven => "Please enter at least one side length.",
            TriangleError::WrongCount => "Please enter exactly three values.",
            TriangleError::AngleTooLarge => "Angles must be less than 180 degrees.",
            TriangleError::DegenerateAngleSum => {
                "Sum of angles must be less than 180 degrees, with no angles of 0 degrees."
            }
            TriangleError::TriangleInequalityViolated => {
                "Sum of two sides must not be greater than or equal to the third side."
            }
            TriangleError::DegenerateGeometry => "Invalid triangle, please check your values.",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for TriangleError {}
