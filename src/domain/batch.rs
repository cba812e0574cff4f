use crate::error::ErrorKind;

/// Folds per-item results of a batch response into one result.
///
/// Succeeds only when every item succeeded, yielding the first item. Otherwise
/// yields the first failure in submission order. An empty batch means a
/// transfer was submitted and nothing came back, which is an internal error.
pub fn collapse<T>(items: Vec<Result<T, ErrorKind>>) -> Result<T, ErrorKind> {
    let mut first = None;
    for item in items {
        let value = item?;
        if first.is_none() {
            first = Some(value);
        }
    }
    first.ok_or_else(|| ErrorKind::Internal("empty batch response".to_string()))
}
