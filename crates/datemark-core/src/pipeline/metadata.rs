//! EXIF capture-date extraction.

use chrono::{Datelike, NaiveDateTime};
use exif::{In, Reader, Tag};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// EXIF timestamp fields scanned in priority order, first parseable wins.
const DATE_TAGS: [Tag; 3] = [Tag::DateTimeOriginal, Tag::DateTimeDigitized, Tag::DateTime];

/// A calendar date parsed from an EXIF timestamp. Time-of-day is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CaptureDate {
    /// Parse a raw EXIF timestamp value into a calendar date.
    ///
    /// Accepts the standard `"YYYY:MM:DD HH:MM:SS"` layout and the
    /// dash-separated `"YYYY-MM-DD HH:MM:SS"` variant some writers emit.
    /// Calendar validity is enforced, so `2024:02:30` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let dt = NaiveDateTime::parse_from_str(raw, "%Y:%m:%d %H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
            .ok()?;
        Some(Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
        })
    }
}

impl fmt::Display for CaptureDate {
    /// Localized calendar-date rendering, e.g. `2024年03月07日`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}年{:02}月{:02}日", self.year, self.month, self.day)
    }
}

/// Extracts capture dates from image EXIF metadata.
pub struct DateExtractor;

impl DateExtractor {
    /// Extract the capture date from an image file.
    ///
    /// Returns `None` when the container has no EXIF block, cannot be read,
    /// or no recognized field holds a parseable timestamp. Extraction is
    /// intentionally lenient and never fails the caller.
    pub fn extract(path: &Path) -> Option<CaptureDate> {
        let file = File::open(path).ok()?;
        let mut reader = BufReader::new(file);
        let exif = Reader::new().read_from_container(&mut reader).ok()?;

        Self::scan(DATE_TAGS.iter().map(|&tag| {
            exif.get_field(tag, In::PRIMARY)
                .map(|f| f.display_value().to_string().trim_matches('"').to_string())
        }))
    }

    /// Scan raw field values in priority order and return the first that
    /// parses. A field that is present but unparseable does not end the
    /// scan; lower-priority fields are still tried.
    fn scan<I>(values: I) -> Option<CaptureDate>
    where
        I: IntoIterator<Item = Option<String>>,
    {
        values
            .into_iter()
            .flatten()
            .find_map(|raw| CaptureDate::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colon_layout() {
        let date = CaptureDate::parse("2024:03:07 10:22:31").unwrap();
        assert_eq!(
            date,
            CaptureDate {
                year: 2024,
                month: 3,
                day: 7
            }
        );
    }

    #[test]
    fn test_parse_dash_layout_is_equivalent() {
        let colon = CaptureDate::parse("2024:03:07 10:22:31").unwrap();
        let dash = CaptureDate::parse("2024-03-07 10:22:31").unwrap();
        assert_eq!(colon, dash);
    }

    #[test]
    fn test_display_zero_pads() {
        let date = CaptureDate::parse("2024:03:07 10:22:31").unwrap();
        assert_eq!(date.to_string(), "2024年03月07日");
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_date() {
        assert!(CaptureDate::parse("2024:02:30 00:00:00").is_none());
        assert!(CaptureDate::parse("2024:13:01 00:00:00").is_none());
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        assert!(CaptureDate::parse("2024/03/07 10:22:31").is_none());
        assert!(CaptureDate::parse("2024:03:07").is_none());
        assert!(CaptureDate::parse("").is_none());
        assert!(CaptureDate::parse("yesterday").is_none());
    }

    #[test]
    fn test_scan_takes_first_parseable_field() {
        let date = DateExtractor::scan([
            Some("2020:01:01 00:00:00".to_string()),
            Some("2021:01:01 00:00:00".to_string()),
        ])
        .unwrap();
        assert_eq!(date.year, 2020);
    }

    #[test]
    fn test_scan_falls_through_unparseable_field() {
        // A corrupt high-priority field must not mask a valid lower one
        let date = DateExtractor::scan([
            Some("corrupted".to_string()),
            None,
            Some("2023:12:01 08:15:00".to_string()),
        ])
        .unwrap();
        assert_eq!((date.year, date.month, date.day), (2023, 12, 1));
    }

    #[test]
    fn test_scan_all_absent_or_invalid_yields_none() {
        assert!(DateExtractor::scan([None, None, None]).is_none());
        assert!(DateExtractor::scan([Some("junk".to_string()), None]).is_none());
    }

    #[test]
    fn test_extract_missing_file() {
        assert!(DateExtractor::extract(Path::new("/nonexistent/file.jpg")).is_none());
    }

    /// Build a real JPEG with an APP1 EXIF segment holding one ASCII field.
    fn jpeg_with_field(path: &Path, tag: Tag, value: &str) {
        use exif::experimental::Writer;
        use exif::{Field, Value};

        let mut jpeg = Vec::new();
        let rgb = image::RgbImage::from_pixel(8, 8, image::Rgb([128, 128, 128]));
        image::codecs::jpeg::JpegEncoder::new(&mut std::io::Cursor::new(&mut jpeg))
            .encode_image(&rgb)
            .unwrap();

        let field = Field {
            tag,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![value.as_bytes().to_vec()]),
        };
        let mut writer = Writer::new();
        writer.push_field(&field);
        let mut tiff = std::io::Cursor::new(Vec::new());
        writer.write(&mut tiff, false).unwrap();
        let tiff = tiff.into_inner();

        // Splice the EXIF payload in as APP1, right after SOI
        let mut payload = b"Exif\0\0".to_vec();
        payload.extend_from_slice(&tiff);
        let len = (payload.len() + 2) as u16;
        let mut out = Vec::new();
        out.extend_from_slice(&jpeg[..2]);
        out.extend_from_slice(&[0xFF, 0xE1]);
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(&payload);
        out.extend_from_slice(&jpeg[2..]);
        std::fs::write(path, out).unwrap();
    }

    #[test]
    fn test_extract_jpeg_with_datetime_original() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dated.jpg");
        jpeg_with_field(&path, Tag::DateTimeOriginal, "2024:03:07 10:22:31");

        let date = DateExtractor::extract(&path).unwrap();
        assert_eq!(date.to_string(), "2024年03月07日");
    }

    #[test]
    fn test_extract_falls_back_to_generic_datetime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modified.jpg");
        jpeg_with_field(&path, Tag::DateTime, "2019:06:15 23:59:59");

        let date = DateExtractor::extract(&path).unwrap();
        assert_eq!((date.year, date.month, date.day), (2019, 6, 15));
    }

    #[test]
    fn test_extract_image_without_exif() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.png");
        image::RgbaImage::from_pixel(8, 8, image::Rgba([0, 0, 0, 255]))
            .save(&path)
            .unwrap();

        assert!(DateExtractor::extract(&path).is_none());
    }
}
