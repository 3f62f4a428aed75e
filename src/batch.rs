//! Splitting update lists into request-sized chunks.

use crate::error::{Result, SyncError};

/// Split `items` into chunks of at most `size` elements, in order.
///
/// The returned iterator borrows `items` and can be recreated by calling
/// `split` again. An empty slice yields no chunks.
pub fn split<T>(items: &[T], size: usize) -> Result<std::slice::Chunks<'_, T>> {
    if size == 0 {
        return Err(SyncError::InvalidArgument(
            "batch size must be greater than zero".to_string(),
        ));
    }
    Ok(items.chunks(size))
}
