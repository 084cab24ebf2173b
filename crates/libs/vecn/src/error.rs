/// Errors returned by the fallible accessors and conversions of [`Vector`].
///
/// Arithmetic never fails; these only come out of the explicitly checked
/// entry points such as [`Vector::try_get`] or `TryFrom<&[T]>`.
///
/// [`Vector`]: crate::Vector
/// [`Vector::try_get`]: crate::Vector::try_get
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// The requested component does not exist.
    #[error("index {index} is out of range for a {dim}-dimensional vector")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Dimension of the vector.
        dim: usize,
    },

    /// The number of provided components does not match the dimension.
    #[error("expected {expected} components, got {actual}")]
    LengthMismatch {
        /// Dimension of the vector.
        expected: usize,
        /// Number of components provided.
        actual: usize,
    },
}
