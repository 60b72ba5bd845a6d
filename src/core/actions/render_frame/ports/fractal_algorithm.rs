use crate::core::data::point::Point;

/// Computes one sample per viewport pixel.
///
/// Implementations must be total: every pixel, in range or not, yields a
/// sample.
pub trait FractalAlgorithm {
    type Sample;

    fn compute(&self, pixel: Point) -> Self::Sample;
}
