//! Line-oriented extraction of `VEVENT` blocks.
//!
//! This is not an RFC 5545 parser. Only a handful of properties are picked up
//! and everything else is skipped; nothing in here can fail.

pub mod escape;
pub mod line;

use tracing::{debug, trace};

use crate::models::Event;
use line::LineKind;

/// Seeded when `DESCRIPTION:` is immediately followed by an escaped newline.
const EMPTY_DESCRIPTION: &str = "---";
const TRUNCATION_MARKER: &str = "...";
/// Continuation lines kept after the first description line.
const MAX_CONTINUATION_LINES: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    InDescription {
        continued: u8,
    },
}

impl Mode {
    pub fn in_description(self) -> bool {
        matches!(self, Mode::InDescription { .. })
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    working: Event,
    mode: Mode,
    events: Vec<Event>,
}

impl Accumulator {
    fn step(mut self, line: &str) -> Self {
        let kind = line::classify(line, self.mode);
        trace!(?kind, mode = ?self.mode, "classified line");

        match (self.mode, kind) {
            (_, LineKind::Uid(uid)) => {
                self.working.uid = uid.to_string();
                self.mode = Mode::Normal;
            }
            (_, LineKind::BeginDescription(rest)) if rest.starts_with('\n') => {
                // The rest of the line is dropped and no description is opened.
                self.working.description = EMPTY_DESCRIPTION.to_string();
            }
            (_, LineKind::BeginDescription(rest)) => {
                self.working.description = rest.to_string();
                self.mode = Mode::InDescription { continued: 0 };
            }
            (Mode::InDescription { continued }, LineKind::ContinueDescription(text))
                if continued < MAX_CONTINUATION_LINES =>
            {
                self.working.description.push('\n');
                self.working.description.push_str(text);
                self.mode = Mode::InDescription {
                    continued: continued + 1,
                };
            }
            (Mode::InDescription { .. }, LineKind::ContinueDescription(_)) => {
                let description = &mut self.working.description;
                if description.ends_with('\n') {
                    description.pop();
                }
                description.push_str(TRUNCATION_MARKER);
                self.mode = Mode::Normal;
            }
            (_, LineKind::Title(title)) => self.working.title = title.to_string(),
            (_, LineKind::Start(start)) => self.working.start_time = start.to_string(),
            (_, LineKind::End(end)) => self.working.end_time = end.to_string(),
            (_, LineKind::Location(location)) => self.working.location = location.to_string(),
            (_, LineKind::EndBlock) => {
                self.events.push(std::mem::take(&mut self.working));
                self.mode = Mode::Normal;
            }
            (_, LineKind::ContinueDescription(_)) | (_, LineKind::Other) => {
                self.mode = Mode::Normal;
            }
        }
        self
    }

    fn finish(self) -> Vec<Event> {
        if self.working != Event::default() {
            debug!(uid = %self.working.uid, "dropping unterminated event block");
        }
        self.events
    }
}

/// Extracts every `END:VEVENT`-terminated block, in feed order.
pub fn parse_events(data: &str) -> Vec<Event> {
    let events = data
        .lines()
        .map(|raw| escape::decode(raw.trim()))
        .fold(Accumulator::default(), |acc, line| acc.step(&line))
        .finish();
    debug!(count = events.len(), "parsed events");
    events
}
