/* 📖 # PAL Test Suite

Tests run against both MockPal and RealPal to ensure the clock behaves consistently
across implementations.
*/

#[cfg(test)]
mod pal_trait_tests {
    use std::time::Duration;

    use chrono::{Local, NaiveDate, NaiveDateTime};

    use crate::pal::{MockPal, Pal, PalHandle, RealPal};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_pal_handle_deref() {
        let handle = PalHandle::new(MockPal::at(at(2024, 1, 2, 3, 4, 5)));
        assert_eq!(handle.now(), at(2024, 1, 2, 3, 4, 5));
    }

    #[test]
    fn test_pal_handle_clone_shares_implementation() {
        let mock = MockPal::new();
        let handle = PalHandle::new(mock.clone());
        let clone = handle.clone();

        mock.set_now(at(2030, 6, 1, 12, 0, 0));
        assert_eq!(clone.now(), at(2030, 6, 1, 12, 0, 0));
    }

    #[test]
    fn test_mock_default_time() {
        assert_eq!(MockPal::default().now(), at(2000, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_mock_sleep_advances_clock_and_records() {
        let mock = MockPal::at(at(2024, 1, 2, 3, 4, 5));
        mock.sleep(Duration::from_millis(1500));
        mock.sleep(Duration::from_secs(2));

        assert_eq!(
            mock.sleeps(),
            vec![Duration::from_millis(1500), Duration::from_secs(2)]
        );
        assert_eq!(mock.now().to_string(), "2024-01-02 03:04:08.500");
    }

    #[test]
    fn test_mock_advance_saturates() {
        let mock = MockPal::at(NaiveDateTime::MAX);
        mock.advance(Duration::from_secs(1));
        assert_eq!(mock.now(), NaiveDateTime::MAX);
    }

    #[test]
    fn test_real_pal_reads_local_clock() {
        let pal = RealPal::new();
        let before = Local::now().naive_local();
        let now = pal.now();
        let after = Local::now().naive_local();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn test_real_pal_sleeps() {
        let pal = RealPal::new();
        let start = std::time::Instant::now();
        pal.sleep(Duration::from_millis(10));
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
