//! Percent-complete accounting.

/// Percentage of the declared length received so far.
///
/// Returns `None` when the length is unknown or zero: progress is then
/// indeterminate and the controller leaves the published value untouched.
/// Over-delivery clamps to 100.
///
/// ```rust
/// use streamsave::progress::percent_complete;
///
/// assert_eq!(percent_complete(500, Some(2000)), Some(25));
/// assert_eq!(percent_complete(1, Some(3)), Some(33));
/// assert_eq!(percent_complete(2, Some(3)), Some(67));
/// assert_eq!(percent_complete(10, None), None);
/// ```
pub fn percent_complete(received: u64, declared: Option<u64>) -> Option<u8> {
    let total = declared.filter(|&total| total > 0)?;
    let percent = (received as f64 / total as f64 * 100.0).round();
    Some(percent.min(100.0) as u8)
}
