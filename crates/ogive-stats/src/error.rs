/// Invalid input passed to one of the statistical transforms.
///
/// Every variant describes input the transforms refuse to turn into a curve or
/// table; none of them is recoverable by retrying with the same data.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum OgiveError {
    #[display("sample must contain at least one value")]
    EmptySample,
    #[display("sample value at index {index} is not finite ({value})")]
    NonFiniteValue { index: usize, value: f64 },
    #[display("bin count must be at least 1")]
    ZeroBinCount,
    #[display("expected {expected} bin edges for {bins} bins, got {actual}")]
    EdgeCountMismatch {
        bins: usize,
        expected: usize,
        actual: usize,
    },
    #[display("bin counts sum to zero, percentages are undefined")]
    ZeroTotal,
    #[display("value range cannot be split into {bins} bins with distinct finite edges")]
    IndistinctEdges { bins: usize },
}
