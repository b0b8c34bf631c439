use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};

// Patterns carrying a numeric UTC offset. The offset is dropped after
// parsing, keeping the written wall clock.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M %z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

// Chrono parsing patterns, tried in order. `%B` and `%A` accept both the
// abbreviated and the full names when parsing.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %I:%M %p",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%y %H:%M",
    "%m/%d/%y %I:%M %p",
    "%B %d, %Y %H:%M",
    "%B %d, %Y %I:%M %p",
    "%B %d, %Y %I:%M:%S %p",
    "%d %B %Y %H:%M",
    "%d %B %Y, %H:%M",
    "%A, %B %d, %Y %H:%M",
    // ANSI C `asctime`, day space-padded
    "%a %b %e %H:%M:%S %Y",
    "%a %b %d %I:%M:%S%.3f %P %Y",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y-%B-%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%Y %B %d",
    "%A, %B %d, %Y",
    "%A %B %d, %Y",
    "%A %B %d %Y",
    "%A, %d %B %Y",
    // two-digit years, read as 1970..=2069
    "%m/%d/%y",
    "%m-%d-%y",
    "%d.%m.%y",
    "%d %B %y",
    "%B %d, %y",
];

// Years below this are a two-digit year misread by a `%Y` pattern.
const MIN_YEAR: i32 = 100;

/// Best-effort parse of a human-written date or date-time.
///
/// Accepts RFC 3339, RFC 2822, the patterns above and compact `YYYYMMDD`.
/// Ordinal day suffixes (`3rd`) and a trailing zone name (`UTC`) are
/// tolerated. Date-only inputs land at midnight. Offsets are dropped, keeping
/// the wall clock that was written down. Anything else yields `None`.
pub fn parse_any(text: &str) -> Option<NaiveDateTime> {
    let text: &str = text.trim();
    if text.is_empty() {
        return None;
    }

    parse_exact(text)
        .or_else(|| strip_ordinals(text).and_then(|t| parse_exact(&t)))
        .or_else(|| strip_zone_name(text).and_then(parse_exact))
}

fn plausible(dt: &NaiveDateTime) -> bool {
    dt.year() >= MIN_YEAR
}

fn parse_exact(text: &str) -> Option<NaiveDateTime> {
    let with_offset = DateTime::<FixedOffset>::parse_from_rfc3339(text)
        .or_else(|_| DateTime::<FixedOffset>::parse_from_rfc2822(text))
        .ok()
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::<FixedOffset>::parse_from_str(text, fmt).ok())
        })
        .map(|dt| dt.naive_local())
        .filter(plausible);
    if with_offset.is_some() {
        return with_offset;
    }

    if let Some(dt) = DATETIME_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(text, fmt)
            .ok()
            .filter(plausible)
    }) {
        return Some(dt);
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| {
            NaiveDate::parse_from_str(text, fmt)
                .ok()
                .filter(|d| d.year() >= MIN_YEAR)
        })
        .or_else(|| compact_date(text))?
        .and_hms_opt(0, 0, 0)
}

/// `January 3rd, 2022` becomes `January 3, 2022`; `None` when nothing changed.
fn strip_ordinals(text: &str) -> Option<String> {
    let mut changed: bool = false;
    let words: Vec<String> = text
        .split(' ')
        .map(|word| {
            let core: &str = word.trim_end_matches(',');
            let tail: &str = &word[core.len()..];
            if core.len() > 2 && core.is_ascii() {
                let (num, suffix) = core.split_at(core.len() - 2);
                let suffix: String = suffix.to_ascii_lowercase();
                if num.bytes().all(|b| b.is_ascii_digit())
                    && matches!(suffix.as_str(), "st" | "nd" | "rd" | "th")
                {
                    changed = true;
                    return format!("{num}{tail}");
                }
            }
            word.to_string()
        })
        .collect();
    changed.then(|| words.join(" "))
}

/// Drops a trailing zone abbreviation such as `UTC` or `CET`.
fn strip_zone_name(text: &str) -> Option<&str> {
    let (head, zone) = text.rsplit_once(' ')?;
    let is_zone: bool = (2..=5).contains(&zone.len())
        && zone.bytes().all(|b| b.is_ascii_uppercase())
        && !matches!(zone, "AM" | "PM");
    is_zone.then(|| head.trim_end())
}

/// `20220131` style dates.
fn compact_date(text: &str) -> Option<NaiveDate> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = text[0..4].parse::<i32>().ok().filter(|y| *y >= MIN_YEAR)?;
    let month: u32 = text[4..6].parse().ok()?;
    let day: u32 = text[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Date carried by a header line.
///
/// Returns `None` when `line` does not start with `marker`, or when what
/// follows the run of markers is not a date. In both cases the caller treats
/// the line as body text.
pub(crate) fn from_line(line: &str, marker: char) -> Option<NaiveDateTime> {
    // check header marker
    if !line.starts_with(marker) {
        return None;
    }

    // `## 2022-01-01` and `#2022-01-01` both carry a date
    let rest: &str = line.trim_start_matches(marker);
    parse_any(rest)
}
