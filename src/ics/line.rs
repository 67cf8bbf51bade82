use super::Mode;

pub const UID: &str = "UID:";
pub const DESCRIPTION: &str = "DESCRIPTION:";
pub const SUMMARY: &str = "SUMMARY:";
pub const DTSTART: &str = "DTSTART;TZID=";
pub const DTEND: &str = "DTEND;TZID=";
pub const LOCATION: &str = "LOCATION:";
pub const END_VEVENT: &str = "END:VEVENT";

/// What a single trimmed, decoded line means to the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Uid(&'a str),
    /// Remainder after the `DESCRIPTION:` prefix.
    BeginDescription(&'a str),
    /// The whole line, already inside a description.
    ContinueDescription(&'a str),
    Title(&'a str),
    Start(&'a str),
    End(&'a str),
    Location(&'a str),
    EndBlock,
    Other,
}

/// Rules are checked in priority order: `UID:` wins over everything, and an
/// open description swallows any other line, including field lines.
pub fn classify(line: &str, mode: Mode) -> LineKind<'_> {
    if let Some(uid) = line.strip_prefix(UID) {
        return LineKind::Uid(uid);
    }
    if mode.in_description() {
        return LineKind::ContinueDescription(line);
    }
    if let Some(rest) = line.strip_prefix(DESCRIPTION) {
        return LineKind::BeginDescription(rest);
    }
    if let Some(title) = line.strip_prefix(SUMMARY) {
        return LineKind::Title(title);
    }
    if let Some(rest) = line.strip_prefix(DTSTART) {
        return LineKind::Start(timestamp_after_tzid(rest));
    }
    if let Some(rest) = line.strip_prefix(DTEND) {
        return LineKind::End(timestamp_after_tzid(rest));
    }
    if let Some(location) = line.strip_prefix(LOCATION) {
        return LineKind::Location(location);
    }
    if line == END_VEVENT {
        return LineKind::EndBlock;
    }
    LineKind::Other
}

/// `Europe/Berlin:20300101T090000` -> `20300101T090000`. Missing colon yields "".
fn timestamp_after_tzid(rest: &str) -> &str {
    rest.split(':').nth(1).unwrap_or("")
}
