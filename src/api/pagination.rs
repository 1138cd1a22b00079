// src/api/pagination.rs
//! Cursor-following collection of paginated endpoints.

use super::responses::PaginatedResponse;
use crate::error::AppError;

/// Fetches pages until the API reports no more results.
///
/// `fetch_fn` receives the cursor of the next page (`None` for the first).
/// Stops after `max_pages` when given.
pub async fn fetch_all_pages<T, F, Fut>(
    mut fetch_fn: F,
    max_pages: Option<u32>,
) -> Result<Vec<T>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        if let Some(max) = max_pages {
            if pages_fetched >= max {
                log::debug!("Reached maximum page limit: {}", max);
                break;
            }
        }

        let response = fetch_fn(cursor).await?;

        let has_more = response.has_more;
        cursor = response.next_cursor;
        all_items.extend(response.results);
        pages_fetched += 1;

        if !has_more || cursor.is_none() {
            break;
        }
    }

    log::debug!(
        "Collected {} items over {} pages",
        all_items.len(),
        pages_fetched
    );
    Ok(all_items)
}
