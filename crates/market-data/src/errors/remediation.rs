/// What a caller has to do before the same valuation can succeed.
///
/// Nothing in this crate retries on its own; the classification only tells
/// the caller (and the HTTP layer) which side of the system is at fault.
///
/// | Class | Cause | Fix |
/// |-------|-------|-----|
/// | `FixAssetData` | The stored asset references an unsupported ticker | Edit the asset |
/// | `RetryFeed` | The price feed failed or returned an unexpected shape | Try again later |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Remediation {
    /// Local data-quality problem. Asking the feed again will not help.
    FixAssetData,

    /// Upstream problem with the price feed (transport, status, body or
    /// missing entry). The asset data itself is fine.
    RetryFeed,
}
