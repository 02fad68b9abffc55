/// Classification for source fallback.
///
/// Used by the source chain to decide what to do after a source fails.
///
/// | Class | Try Next Source? | Surfaced to caller? |
/// |-------|------------------|---------------------|
/// | `Terminal` | No | Yes |
/// | `NextSource` | Yes | No (recorded in diagnostics only) |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FallbackClass {
    /// Stop immediately. The data is forbidden, not missing, and every
    /// other source would hit the same wall.
    Terminal,

    /// Treat the failure as "no data" from this source and move on.
    NextSource,
}
