/// One `VEVENT` block from the feed, fully escape-decoded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Event {
    pub uid: String,
    pub title: String,
    pub description: String,
    pub start_time: String, // YYYYMMDDThhmmss, tz qualifier dropped
    pub end_time: String,
    pub location: String,
}
