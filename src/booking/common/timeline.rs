use time::OffsetDateTime;

/// The one definition of the upcoming/past split. Query-side filters mirror
/// this with `shows::start_time.ge(now)`; keep the two in sync.
pub fn is_upcoming(start_time: OffsetDateTime, now: OffsetDateTime) -> bool {
    start_time >= now
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_is_upcoming() {
        let now = datetime!(2026-08-04 20:00:00 UTC);
        assert!(is_upcoming(datetime!(2026-08-05 20:00:00 UTC), now));
        assert!(!is_upcoming(datetime!(2026-08-03 20:00:00 UTC), now));
    }

    #[test]
    fn test_show_starting_now_is_upcoming() {
        let now = datetime!(2026-08-04 20:00:00 UTC);
        assert!(is_upcoming(now, now));
    }
}
