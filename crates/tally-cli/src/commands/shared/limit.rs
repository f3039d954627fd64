/// Number of rows to show: `--limit` on the subcommand, then the global
/// `--limit`, then `general.default_limit` from config. Zero means no limit.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, configured: u32) -> usize {
    let limit = local.or(global).unwrap_or(configured);
    match limit {
        0 => usize::MAX,
        n => usize::try_from(n).unwrap_or(usize::MAX),
    }
}
