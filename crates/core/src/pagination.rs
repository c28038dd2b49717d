/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: i64 = 20;

/// Upper bound on any single page.
pub const MAX_LIMIT: i64 = 100;

/// Clamp a user-provided limit into `[1, max]`.
///
/// An absent limit or `0` ("no explicit limit") yields `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    match limit {
        None | Some(0) => default.min(max),
        Some(n) => n.max(1).min(max),
    }
}
