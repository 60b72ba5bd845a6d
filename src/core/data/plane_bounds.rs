use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneBoundsError {
    InvalidSize { width: f64, height: f64 },
    OriginOutside { x_start: f64, x_end: f64, y_start: f64, y_end: f64 },
}

impl fmt::Display for PlaneBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "plane bounds size must be positive: {}x{}",
                    width, height
                )
            }
            Self::OriginOutside {
                x_start,
                x_end,
                y_start,
                y_end,
            } => {
                write!(
                    f,
                    "plane bounds must contain the origin: x {}..{}, y {}..{}",
                    x_start, x_end, y_start, y_end
                )
            }
        }
    }
}

impl Error for PlaneBoundsError {}

/// The window of the complex plane spanned by the unzoomed, unpanned view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneBounds {
    x_start: f64,
    x_end: f64,
    y_start: f64,
    y_end: f64,
}

impl Default for PlaneBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PlaneBounds {
    pub const DEFAULT: Self = Self {
        x_start: -2.0,
        x_end: 1.0,
        y_start: -1.0,
        y_end: 1.0,
    };

    /// Both axes must pass through the window (`start <= 0 <= end`), since the
    /// spans are measured from the origin.
    pub fn new(x_start: f64, x_end: f64, y_start: f64, y_end: f64) -> Result<Self, PlaneBoundsError> {
        let width = x_end - x_start;
        let height = y_end - y_start;

        // Written negated so NaN edges are rejected too.
        if !(width > 0.0 && height > 0.0) {
            return Err(PlaneBoundsError::InvalidSize { width, height });
        }
        if x_start > 0.0 || x_end < 0.0 || y_start > 0.0 || y_end < 0.0 {
            return Err(PlaneBoundsError::OriginOutside {
                x_start,
                x_end,
                y_start,
                y_end,
            });
        }

        Ok(Self {
            x_start,
            x_end,
            y_start,
            y_end,
        })
    }

    #[must_use]
    pub fn x_start(&self) -> f64 {
        self.x_start
    }

    #[must_use]
    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    #[must_use]
    pub fn y_start(&self) -> f64 {
        self.y_start
    }

    #[must_use]
    pub fn y_end(&self) -> f64 {
        self.y_end
    }

    /// Horizontal span as `|x_end| + |x_start|`, which equals
    /// `x_end - x_start` for any window containing the origin.
    #[must_use]
    pub fn x_span(&self) -> f64 {
        self.x_end.abs() + self.x_start.abs()
    }

    /// Vertical span as `|y_end| + |y_start|`.
    #[must_use]
    pub fn y_span(&self) -> f64 {
        self.y_end.abs() + self.y_start.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let bounds = PlaneBounds::default();

        assert_eq!(bounds.x_start(), -2.0);
        assert_eq!(bounds.x_end(), 1.0);
        assert_eq!(bounds.y_start(), -1.0);
        assert_eq!(bounds.y_end(), 1.0);
        assert_eq!(bounds.x_span(), 3.0);
        assert_eq!(bounds.y_span(), 2.0);
    }

    #[test]
    fn test_new_valid() {
        let bounds = PlaneBounds::new(-2.5, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(bounds.x_span(), 3.5);
        assert_eq!(bounds.y_span(), 2.0);
    }

    #[test]
    fn test_dimensions_must_be_positive() {
        assert_eq!(
            PlaneBounds::new(0.0, 0.0, -1.0, 1.0),
            Err(PlaneBoundsError::InvalidSize {
                width: 0.0,
                height: 2.0
            })
        );
        assert_eq!(
            PlaneBounds::new(1.0, -1.0, 1.0, -1.0),
            Err(PlaneBoundsError::InvalidSize {
                width: -2.0,
                height: -2.0
            })
        );
    }

    #[test]
    fn test_window_must_contain_origin() {
        assert_eq!(
            PlaneBounds::new(1.0, 3.0, -1.0, 1.0),
            Err(PlaneBoundsError::OriginOutside {
                x_start: 1.0,
                x_end: 3.0,
                y_start: -1.0,
                y_end: 1.0
            })
        );
        assert!(PlaneBounds::new(-2.0, 1.0, -3.0, -1.0).is_err());

        let touching = PlaneBounds::new(0.0, 2.0, -1.0, 0.0).unwrap();
        assert_eq!(touching.x_span(), 2.0);
        assert_eq!(touching.y_span(), 1.0);
    }

    #[test]
    fn test_nan_edges_are_rejected() {
        assert!(PlaneBounds::new(f64::NAN, 1.0, -1.0, 1.0).is_err());
    }
}
