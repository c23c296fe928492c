/// What to do with a wire field that has no entry in the field schema.
///
/// Such fields appear when the remote schema gained a field since the caller
/// last fetched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnexpectedFieldPolicy {
    /// Record an unexpected field error, failing the record read.
    Throw,

    /// Carry on, optionally logging a warning and optionally keeping the raw
    /// value keyed by its wire id.
    Tolerate { warn: bool, keep: bool },
}

impl Default for UnexpectedFieldPolicy {
    fn default() -> Self {
        UnexpectedFieldPolicy::Tolerate {
            warn: true,
            keep: false,
        }
    }
}
