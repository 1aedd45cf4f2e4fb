use tracing::debug;

/// Fetch numbered pages 1..=max_pages and accumulate their items.
///
/// An empty page ends the loop successfully. The first failing page ends it
/// with that error and the items gathered so far are dropped.
pub fn fetch_pages<T, E, F>(max_pages: usize, mut fetch_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(usize) -> Result<Vec<T>, E>,
{
    let mut all_results = Vec::new();

    for page in 1..=max_pages {
        let page_results = fetch_page(page)?;
        let page_len = page_results.len();
        debug!(page, items = page_len, "fetched page");

        if page_len == 0 {
            break;
        }

        all_results.extend(page_results);
    }

    Ok(all_results)
}
