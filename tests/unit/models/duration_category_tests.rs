// Parameterized tests for the duration thresholds

use test_case::test_case;

use observance_calendar::models::duration_category::DurationCategory;
use observance_calendar::models::event::Event;
use observance_calendar::services::classifier::classify;

fn classify_span(start: &str, end: &str) -> (i64, DurationCategory) {
    let event = Event::new("t", "Threshold", start, end).unwrap();
    let classification = classify(&event).unwrap();
    (classification.duration_days, classification.category)
}

#[test_case("2024-05-22", "2024-05-22", 1, DurationCategory::Short; "single day")]
#[test_case("2024-03-10", "2024-03-14", 5, DurationCategory::Short; "five days")]
#[test_case("2024-03-10", "2024-03-15", 6, DurationCategory::Extended; "six days")]
#[test_case("2024-11-25", "2024-12-10", 16, DurationCategory::Extended; "sixteen days across months")]
#[test_case("2024-04-01", "2024-04-30", 30, DurationCategory::MonthLong; "thirty day month")]
#[test_case("2024-02-01", "2024-02-29", 29, DurationCategory::MonthLong; "leap february")]
#[test_case("2023-02-01", "2023-02-28", 28, DurationCategory::MonthLong; "common february")]
#[test_case("2024-03-01", "2024-03-28", 28, DurationCategory::MonthLong; "end day twenty eight")]
#[test_case("2024-03-01", "2024-03-27", 27, DurationCategory::Extended; "end day twenty seven")]
#[test_case("2024-03-01", "2024-03-05", 5, DurationCategory::Short; "starts on first but short")]
#[test_case("2024-01-01", "2024-02-29", 60, DurationCategory::Extended; "two months")]
#[test_case("2024-12-30", "2025-01-02", 4, DurationCategory::Short; "across new year")]
fn test_duration_category(
    start: &str,
    end: &str,
    expected_days: i64,
    expected_category: DurationCategory,
) {
    assert_eq!(classify_span(start, end), (expected_days, expected_category));
}

#[test_case("2024-03-10T00:00:00", "2024-03-14T23:59:59"; "naive timestamps")]
#[test_case("2024-03-10T00:00:00Z", "2024-03-14T00:00:00Z"; "utc timestamps")]
#[test_case("2024-03-10T04:00:00+04:00", "2024-03-14T18:00:00-05:00"; "offset timestamps")]
fn test_serializations_agree(start: &str, end: &str) {
    assert_eq!(classify_span(start, end), (5, DurationCategory::Short));
}

#[test]
fn test_category_display() {
    assert_eq!(DurationCategory::Short.to_string(), "short");
    assert_eq!(DurationCategory::Extended.to_string(), "extended");
    assert_eq!(DurationCategory::MonthLong.to_string(), "month-long");
}
