use chrono::{FixedOffset, NaiveDate, NaiveTime};

const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Converts an ISO-8601 date or timestamp into `DD.MM.YYYY`.
///
/// Accepts `YYYY-MM-DD` optionally followed by `T` or a space and
/// `HH[:MM[:SS[.f]]]` with an optional `Z` or `±HH:MM` offset. Field widths
/// are exact and surrounding whitespace is not allowed. Returns an empty
/// string when the input is missing or does not have that shape.
/// Timestamps carrying an offset keep the calendar date as written.
pub fn parse_date(date: Option<&str>) -> String {
    match date.and_then(parse_iso) {
        Some(d) => d.format(DISPLAY_FORMAT).to_string(),
        None => {
            log::debug!("Unparseable date {date:?}, leaving it empty");
            String::new()
        }
    }
}

fn parse_iso(s: &str) -> Option<NaiveDate> {
    let (date, rest) = s.split_at_checked(10)?;
    let date = parse_calendar_date(date)?;
    if rest.is_empty() {
        return Some(date);
    }

    let time = rest.strip_prefix(['T', ' '])?;
    let (clock, offset) = match time.strip_suffix('Z') {
        Some(clock) => (clock, Some("Z")),
        None => match time.rfind(['+', '-']) {
            Some(i) => (&time[..i], Some(&time[i..])),
            None => (time, None),
        },
    };

    parse_clock(clock)?;
    if let Some(offset) = offset {
        parse_offset(offset)?;
    }

    Some(date)
}

// Exactly `width` ASCII digits.
fn fixed_digits(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// `YYYY-MM-DD`, year 0001 and later.
fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let mut fields = s.split('-');
    let year = fixed_digits(fields.next()?, 4)?;
    let month = fixed_digits(fields.next()?, 2)?;
    let day = fixed_digits(fields.next()?, 2)?;
    if fields.next().is_some() || year == 0 {
        return None;
    }

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// `HH[:MM[:SS[.f]]]`, the fraction only after seconds.
fn parse_clock(s: &str) -> Option<NaiveTime> {
    let (hms, fraction) = match s.split_once('.') {
        Some((hms, fraction)) => (hms, Some(fraction)),
        None => (s, None),
    };

    let mut fields = hms.split(':');
    let hour = fixed_digits(fields.next()?, 2)?;
    let minute = fields.next();
    let second = fields.next();
    if fields.next().is_some() || (fraction.is_some() && second.is_none()) {
        return None;
    }

    let minute = minute.map_or(Some(0), |m| fixed_digits(m, 2))?;
    let second = second.map_or(Some(0), |s| fixed_digits(s, 2))?;
    let nano = match fraction {
        None => 0,
        Some(f) if !f.is_empty() && f.len() <= 9 && f.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{f:0<9}").parse().ok()?
        }
        Some(_) => return None,
    };

    NaiveTime::from_hms_nano_opt(hour, minute, second, nano)
}

/// `Z` or `±HH:MM`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    if s == "Z" {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match s.strip_prefix('+') {
        Some(rest) => (1, rest),
        None => (-1, s.strip_prefix('-')?),
    };
    let (hours, minutes) = rest.split_once(':')?;
    let hours = fixed_digits(hours, 2)?;
    let minutes = fixed_digits(minutes, 2)?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }

    let seconds = i32::try_from(hours * 3600 + minutes * 60).ok()?;
    FixedOffset::east_opt(sign * seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_that_timestamp_is_formatted() {
        assert_eq!(parse_date(Some("2022-01-30T12:30:45.678901")), "30.01.2022");
        assert_eq!(parse_date(Some("2019-07-03T18:35:29.512364")), "03.07.2019");
        assert_eq!(parse_date(Some("2018-06-30T02:08:58")), "30.06.2018");
        assert_eq!(parse_date(Some("2018-06-30 02:08")), "30.06.2018");
    }

    #[test]
    fn test_that_plain_date_is_formatted() {
        assert_eq!(parse_date(Some("2023-03-02")), "02.03.2023");
        assert_eq!(parse_date(Some("0001-01-01")), "01.01.0001");
    }

    #[test]
    fn test_that_short_iso_times_are_accepted() {
        assert_eq!(parse_date(Some("2022-01-30T12")), "30.01.2022");
        assert_eq!(parse_date(Some("2022-01-30 12")), "30.01.2022");
        assert_eq!(parse_date(Some("2022-01-30T12:30+03:00")), "30.01.2022");
        assert_eq!(parse_date(Some("2022-01-30T12Z")), "30.01.2022");
        assert_eq!(parse_date(Some("2022-01-30T12:30:45.1-05:30")), "30.01.2022");
    }

    #[test]
    fn test_that_offset_keeps_its_calendar_date() {
        assert_eq!(parse_date(Some("2021-12-31T23:30:00+03:00")), "31.12.2021");
        assert_eq!(parse_date(Some("2021-12-31T23:30:00Z")), "31.12.2021");
        assert_eq!(parse_date(Some("2021-12-31T01:00:00-08:00")), "31.12.2021");
    }

    #[test]
    fn test_that_invalid_input_gives_empty_string() {
        assert_eq!(parse_date(None), "");
        assert_eq!(parse_date(Some("")), "");
        assert_eq!(parse_date(Some("30.01.2022")), "");
        assert_eq!(parse_date(Some("yesterday")), "");
        assert_eq!(parse_date(Some("2022-02-30T10:00:00")), "");
        assert_eq!(parse_date(Some("2022-01-30T12:30:45.678901 junk")), "");
    }

    #[test]
    fn test_that_field_widths_must_be_exact() {
        assert_eq!(parse_date(Some("2022-1-30")), "");
        assert_eq!(parse_date(Some("2022-01-3")), "");
        assert_eq!(parse_date(Some("22-01-30")), "");
        assert_eq!(parse_date(Some("2022-01-30T1:2")), "");
        assert_eq!(parse_date(Some("2022-01-30T12:3")), "");
        assert_eq!(parse_date(Some("2022-01-30T12:30:4")), "");
    }

    #[test]
    fn test_that_signs_whitespace_and_year_zero_are_rejected() {
        assert_eq!(parse_date(Some("+2022-01-30")), "");
        assert_eq!(parse_date(Some("-2022-01-30")), "");
        assert_eq!(parse_date(Some("0000-01-01")), "");
        assert_eq!(parse_date(Some(" 2022-01-30")), "");
        assert_eq!(parse_date(Some("2022-01-30 ")), "");
        assert_eq!(parse_date(Some("2022-01-30\n")), "");
    }

    #[test]
    fn test_that_malformed_times_and_offsets_are_rejected() {
        assert_eq!(parse_date(Some("2022-01-30T")), "");
        assert_eq!(parse_date(Some("2022-01-30T24:00")), "");
        assert_eq!(parse_date(Some("2022-01-30T12:60")), "");
        assert_eq!(parse_date(Some("2022-01-30T12.5")), "");
        assert_eq!(parse_date(Some("2022-01-30T12:30:45.")), "");
        assert_eq!(parse_date(Some("2022-01-30T12:30+3:00")), "");
        assert_eq!(parse_date(Some("2022-01-30T12:30+24:00")), "");
        assert_eq!(parse_date(Some("2022-01-30+03:00")), "");
        assert_eq!(parse_date(Some("2022-01-30X12:30")), "");
    }
}
