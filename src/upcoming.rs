use chrono::NaiveDateTime;
use tracing::debug;

use crate::models::Event;
use crate::timestamp;

#[derive(Debug)]
pub struct Selection<'a> {
    pub events: Vec<&'a Event>,
    pub limit: usize,
}

impl Selection<'_> {
    pub fn shown(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn is_short(&self) -> bool {
        self.shown() < self.limit
    }
}

/// Keeps events that have not ended yet, in feed order, stopping after `limit`.
/// An event ending exactly at `now` counts as over.
pub fn select(events: &[Event], now: NaiveDateTime, limit: usize) -> Selection<'_> {
    let selected: Vec<&Event> = events
        .iter()
        .filter(|event| timestamp::parse_or_min(&event.end_time) > now)
        .take(limit)
        .collect();
    debug!(
        total = events.len(),
        shown = selected.len(),
        limit,
        "selected upcoming events"
    );
    Selection {
        events: selected,
        limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(uid: &str, end_time: &str) -> Event {
        Event {
            uid: uid.to_string(),
            end_time: end_time.to_string(),
            ..Event::default()
        }
    }

    fn now() -> NaiveDateTime {
        timestamp::parse_or_min("20260101T120000")
    }

    fn uids(selection: &Selection<'_>) -> Vec<String> {
        selection.events.iter().map(|e| e.uid.clone()).collect()
    }

    #[test]
    fn keeps_future_events_in_feed_order() {
        let events = vec![
            event("a", "20990101T000000"),
            event("b", "20010101T000000"),
            event("c", "20980101T000000"),
        ];
        let selection = select(&events, now(), 5);
        assert_eq!(uids(&selection), vec!["a", "c"]);
        assert_eq!(selection.shown(), 2);
        assert!(selection.is_short());
    }

    #[test]
    fn stops_at_limit() {
        let events = vec![
            event("a", "20990101T000000"),
            event("b", "20010101T000000"),
            event("c", "20990101T000000"),
        ];
        let selection = select(&events, now(), 1);
        assert_eq!(uids(&selection), vec!["a"]);
        assert_eq!(selection.shown(), 1);
        assert!(!selection.is_short());
    }

    #[test]
    fn event_ending_exactly_now_is_excluded() {
        let events = vec![event("edge", "20260101T120000"), event("next", "20260101T120001")];
        let selection = select(&events, now(), 5);
        assert_eq!(uids(&selection), vec!["next"]);
    }

    #[test]
    fn unparsable_end_time_counts_as_past() {
        let events = vec![event("bad", "tomorrow"), event("empty", "")];
        let selection = select(&events, now(), 5);
        assert!(selection.is_empty());
        assert_eq!(selection.shown(), 0);
    }

    #[test]
    fn zero_limit_selects_nothing() {
        let events = vec![event("a", "20990101T000000")];
        let selection = select(&events, now(), 0);
        assert!(selection.is_empty());
        assert!(!selection.is_short());
    }
}
