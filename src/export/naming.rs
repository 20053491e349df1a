use chrono::{DateTime, Utc};

/// Output formats and their file extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Svg,
    AnimatedSvg,
    Png,
    Gif,
    Mp4,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg | Self::AnimatedSvg => "svg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Mp4 => "mp4",
        }
    }
}

/// ISO-8601 UTC with millisecond precision, `:` and `.` replaced by `-`:
/// `2024-03-05T14-07-09-042Z`.
pub fn file_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H-%M-%S-%3fZ").to_string()
}

/// `{name}[-animated]-{timestamp}.{ext}`; the suffix tells the two SVG flavours apart. Path
/// separators in `name` are replaced so the result is always a bare file name.
pub fn export_file_name(name: &str, format: ExportFormat, at: DateTime<Utc>) -> String {
    let name: String = name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '-' } else { c })
        .collect();
    let name = if name.is_empty() { "spirograph" } else { &name };
    let animated = if format == ExportFormat::AnimatedSvg { "-animated" } else { "" };
    format!(
        "{name}{animated}-{}.{}",
        file_timestamp(at),
        format.extension()
    )
}

#[cfg(test)]
#[path = "../../tests/unit/export/naming.rs"]
mod tests;
