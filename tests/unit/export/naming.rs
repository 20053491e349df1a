use chrono::TimeZone as _;

use super::*;

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap() + chrono::Duration::milliseconds(42)
}

#[test]
fn timestamp_replaces_colons_and_dots() {
    assert_eq!(file_timestamp(at()), "2024-03-05T14-07-09-042Z");
}

#[test]
fn names_follow_the_pattern() {
    assert_eq!(
        export_file_name("spirograph", ExportFormat::Svg, at()),
        "spirograph-2024-03-05T14-07-09-042Z.svg"
    );
    assert_eq!(
        export_file_name("spirograph", ExportFormat::AnimatedSvg, at()),
        "spirograph-animated-2024-03-05T14-07-09-042Z.svg"
    );
    assert_eq!(
        export_file_name("neon-star", ExportFormat::Mp4, at()),
        "neon-star-2024-03-05T14-07-09-042Z.mp4"
    );
}

#[test]
fn names_never_escape_the_output_directory() {
    assert_eq!(
        export_file_name("../a/b", ExportFormat::Png, at()),
        "..-a-b-2024-03-05T14-07-09-042Z.png"
    );
    assert!(export_file_name("  ", ExportFormat::Gif, at()).starts_with("spirograph-"));
}
