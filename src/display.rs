use colored::{Color, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::Event;
use crate::timestamp;
use crate::upcoming::Selection;

const HEADERS: [&str; 5] = ["TITLE", "DESCRIPTION", "START TIME", "END TIME", "LOCATION"];
/// Outer cell widths, horizontal padding included.
const WIDTHS: [usize; 5] = [20, 40, 15, 15, 20];
const ALIGNS: [Align; 5] = [
    Align::Left,
    Align::Left,
    Align::Center,
    Align::Center,
    Align::Left,
];
const PADDING: usize = 1;

// xterm 245, 241 and 236
const GRAY: Color = Color::TrueColor {
    r: 138,
    g: 138,
    b: 138,
};
const LIGHT_GRAY: Color = Color::TrueColor {
    r: 98,
    g: 98,
    b: 98,
};
const DARK_GRAY: Color = Color::TrueColor {
    r: 48,
    g: 48,
    b: 48,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStyle {
    pub foreground: Color,
    pub background: Option<Color>,
}

/// Table styling, handed in by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub enabled: bool,
    pub odd_row: RowStyle,
    pub even_row: RowStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            enabled: true,
            odd_row: RowStyle {
                foreground: GRAY,
                background: Some(DARK_GRAY),
            },
            even_row: RowStyle {
                foreground: LIGHT_GRAY,
                background: None,
            },
        }
    }
}

impl Theme {
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn header(&self, text: String) -> String {
        if self.enabled {
            text.as_str().bold().to_string()
        } else {
            text
        }
    }

    /// Body rows are numbered from 1, so the first one is odd.
    fn row(&self, row: usize, text: String) -> String {
        if !self.enabled {
            return text;
        }
        let style = if row % 2 == 0 {
            self.even_row
        } else {
            self.odd_row
        };
        let colored = text.as_str().color(style.foreground);
        match style.background {
            Some(background) => colored.on_color(background).to_string(),
            None => colored.to_string(),
        }
    }
}

/// Renders the boxed five-column table.
pub fn render_table(selection: &Selection<'_>, theme: &Theme) -> String {
    let mut lines = vec![border('┌', '┬', '┐')];

    let header = HEADERS
        .iter()
        .zip(WIDTHS)
        .map(|(title, width)| theme.header(pad(title, width, Align::Center)))
        .collect::<Vec<_>>();
    lines.push(join_cells(&header));

    if !selection.is_empty() {
        lines.push(border('├', '┼', '┤'));
    }
    for (index, event) in selection.events.iter().enumerate() {
        lines.extend(render_row(index + 1, event, theme));
    }

    lines.push(border('└', '┴', '┘'));
    lines.join("\n")
}

/// Fallback lines printed under the table.
pub fn footer(selection: &Selection<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    if selection.is_empty() {
        lines.push("No upcoming events".to_string());
    }
    if selection.is_short() {
        lines.push(format!("Only {} events available", selection.shown()));
    }
    lines
}

pub fn print(selection: &Selection<'_>, theme: &Theme) {
    println!("{}", render_table(selection, theme));
    for line in footer(selection) {
        println!("{line}");
    }
}

fn render_row(row: usize, event: &Event, theme: &Theme) -> Vec<String> {
    let values = [
        event.title.clone(),
        event.description.clone(),
        timestamp::display(&event.start_time),
        timestamp::display(&event.end_time),
        event.location.clone(),
    ];
    let wrapped = values
        .iter()
        .zip(WIDTHS)
        .map(|(value, width)| wrap(value, width - 2 * PADDING))
        .collect::<Vec<_>>();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(0) + 2 * PADDING;

    (0..height)
        .map(|line| {
            let cells = wrapped
                .iter()
                .zip(WIDTHS.iter().zip(ALIGNS))
                .map(|(cell, (&width, align))| {
                    let text = line
                        .checked_sub(PADDING)
                        .and_then(|index| cell.get(index))
                        .map(String::as_str)
                        .unwrap_or("");
                    let inner = pad(text, width - 2 * PADDING, align);
                    let padding = " ".repeat(PADDING);
                    theme.row(row, format!("{padding}{inner}{padding}"))
                })
                .collect::<Vec<_>>();
            join_cells(&cells)
        })
        .collect()
}

fn border(left: char, middle: char, right: char) -> String {
    let segments = WIDTHS
        .iter()
        .map(|width| "─".repeat(*width))
        .collect::<Vec<_>>();
    format!("{left}{}{right}", segments.join(&middle.to_string()))
}

fn join_cells(cells: &[String]) -> String {
    format!("│{}│", cells.join("│"))
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(text.width());
    match align {
        Align::Left => format!("{text}{}", " ".repeat(fill)),
        Align::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}

/// Word-wraps to `width` columns, keeping explicit newlines and hard-breaking
/// words that do not fit on a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if current.is_empty() {
                word.width()
            } else {
                current.width() + 1 + word.width()
            };
            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current.width() + ch_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_WIDTH: usize = 116;

    fn standup() -> Event {
        Event {
            uid: "1".to_string(),
            title: "Standup".to_string(),
            description: String::new(),
            start_time: "20300101T090000".to_string(),
            end_time: "20300101T093000".to_string(),
            location: "Room A".to_string(),
        }
    }

    fn selection_of(events: &[Event], limit: usize) -> Selection<'_> {
        Selection {
            events: events.iter().collect(),
            limit,
        }
    }

    #[test]
    fn renders_boxed_row_with_padding() {
        let events = vec![standup()];
        let table = render_table(&selection_of(&events, 5), &Theme::plain());
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 7, "top, header, rule, 3 row lines, bottom");
        assert!(lines.iter().all(|line| line.width() == TABLE_WIDTH));
        assert!(lines[0].starts_with('┌') && lines[6].starts_with('└'));
        assert!(lines[1].contains("TITLE") && lines[1].contains("START TIME"));
        assert!(lines[3].trim_matches(['│', ' ']).is_empty());
        assert!(lines[4].starts_with("│ Standup "));
        assert!(lines[4].contains("  01.01 09:00  "));
        assert!(lines[4].contains("01.01 09:30"));
        assert!(lines[4].contains("│ Room A "));
    }

    #[test]
    fn long_description_wraps_inside_its_column() {
        let mut event = standup();
        event.description = "word ".repeat(20).trim_end().to_string() + "\nsecond line...";
        let events = vec![event];
        let table = render_table(&selection_of(&events, 5), &Theme::plain());

        assert!(table.lines().all(|line| line.width() == TABLE_WIDTH));
        assert!(table.contains("second line..."));
        // Twenty words fill three 38-column lines, then the explicit second line.
        let row_height = 3 + 1 + 2;
        assert_eq!(table.lines().count(), 3 + row_height + 1);
    }

    #[test]
    fn empty_title_renders_an_empty_cell() {
        let mut event = standup();
        event.title = String::new();
        let events = vec![event];
        let table = render_table(&selection_of(&events, 5), &Theme::plain());
        let text_line = table.lines().nth(4).expect("row text line");

        assert!(text_line.starts_with(&format!("│{}│", " ".repeat(20))));
        assert!(!table.contains("Untitled"));
    }

    #[test]
    fn empty_selection_renders_header_only() {
        let table = render_table(&selection_of(&[], 5), &Theme::plain());
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn footer_reports_missing_and_short_selections() {
        let events = vec![standup()];
        assert_eq!(
            footer(&selection_of(&[], 5)),
            vec!["No upcoming events", "Only 0 events available"]
        );
        assert_eq!(
            footer(&selection_of(&events, 5)),
            vec!["Only 1 events available"]
        );
        assert!(footer(&selection_of(&events, 1)).is_empty());
    }

    #[test]
    fn wrap_breaks_on_words_and_hard_breaks_long_ones() {
        assert_eq!(wrap("alpha beta gamma", 10), vec!["alpha beta", "gamma"]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn colored_theme_styles_rows() {
        colored::control::set_override(true);
        let events = vec![standup(), standup()];
        let table = render_table(&selection_of(&events, 5), &Theme::default());
        assert!(table.contains("\u{1b}["));
        colored::control::unset_override();
    }
}
