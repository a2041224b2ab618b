use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;
use widgetbox_core::{Accordion, SelectionMode};

use crate::ui::style::Theme;

/// Shown instead of the item list when there are no questions.
pub const EMPTY_MESSAGE: &str = "No data found !";

const ANSWER_INDENT: &str = "   ";

pub fn render_accordion(frame: &mut Frame, area: Rect, accordion: &Accordion, theme: &Theme) {
    let [toggle_area, body_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);

    let multi = accordion.mode() == SelectionMode::Multi;
    let toggle = Line::from(vec![
        Span::styled("[m] Enable Multi Selection", theme.prompt_style()),
        Span::raw("  "),
        Span::styled(
            if multi { "on" } else { "off" },
            if multi {
                theme.accent_style()
            } else {
                theme.empty_style()
            },
        ),
    ]);
    frame.render_widget(Paragraph::new(toggle), toggle_area);

    if accordion.is_empty() {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .alignment(Alignment::Center)
            .style(theme.empty_style());
        frame.render_widget(empty, body_area);
        return;
    }

    let answer_width = usize::from(body_area.width)
        .saturating_sub(ANSWER_INDENT.len())
        .max(1);
    let entries: Vec<ListItem> = accordion
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let open = accordion.is_open(&item.id);
            let marker = if open { "-" } else { "+" };
            let style = if index == accordion.cursor() {
                theme.row_highlight_style()
            } else {
                theme.header_style()
            };
            let mut lines = vec![Line::from(vec![
                Span::styled(format!(" {marker} "), theme.accent_style()),
                Span::styled(item.question.clone(), style),
            ])];
            if open {
                lines.extend(
                    wrap_words(&item.answer, answer_width)
                        .into_iter()
                        .map(|row| Line::from(format!("{ANSWER_INDENT}{row}"))),
                );
            }
            lines.push(Line::default());
            ListItem::new(Text::from(lines))
        })
        .collect();

    // The list scrolls just far enough to keep the cursor entry on screen.
    let mut state = ListState::default().with_selected(Some(accordion.cursor()));
    frame.render_stateful_widget(List::new(entries), body_area, &mut state);
}

/// Greedy word wrap by display width. Words wider than `width` keep a row
/// to themselves.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    for word in text.split_whitespace() {
        if !row.is_empty() && row.width() + 1 + word.width() > width {
            rows.push(std::mem::take(&mut row));
        }
        if !row.is_empty() {
            row.push(' ');
        }
        row.push_str(word);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}
