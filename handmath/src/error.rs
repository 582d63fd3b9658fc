/// Failure modes shared by every fallible routine in the crate.
#[derive(Debug, PartialEq)]
pub enum MathError {
    /// Input outside the mathematically valid range.
    Domain(String),
    /// An iterative refinement hit its step cap without meeting tolerance.
    Convergence(String),
    /// The exact result does not fit the native integer width.
    Overflow(String),
}
