use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Tabs;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::Tab;
use crate::ui::style::Theme;

/// Progress information for the loading indicator on the tab row.
pub struct ProgressState<'a> {
    pub progress_text: &'a str,
    pub progress_complete: bool,
    pub throbber_state: &'a ThrobberState,
}

/// Render the tab strip with the loading indicator at the right.
pub fn render_tab_strip(
    frame: &mut ratatui::Frame,
    area: Rect,
    active: Tab,
    theme: &Theme,
    progress: ProgressState<'_>,
) {
    let titles = build_tab_titles(theme, active);
    let tabs = Tabs::new(titles)
        .select(active.index())
        .divider("")
        .padding("", " ")
        .highlight_style(theme.tab_highlight_style());
    frame.render_widget(tabs, area);

    render_progress(frame, area, progress, theme);
}

fn build_tab_titles(theme: &Theme, active: Tab) -> Vec<Line<'static>> {
    let selected = theme.header_style();
    let inactive = theme.tab_inactive_style();
    Tab::ALL
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            let label = format!(" {} {} ", index + 1, tab.label());
            let style = if *tab == active { selected } else { inactive };
            Line::from(label).style(style)
        })
        .collect()
}

fn render_progress(
    frame: &mut ratatui::Frame,
    area: Rect,
    progress: ProgressState<'_>,
    theme: &Theme,
) {
    let ProgressState {
        progress_text,
        progress_complete,
        throbber_state,
    } = progress;
    if area.width == 0 || area.height == 0 || progress_text.is_empty() {
        return;
    }

    let muted_style = theme.empty_style();
    let mut line = Line::default();
    if !progress_complete {
        let spinner = Throbber::default()
            .style(muted_style)
            .throbber_style(muted_style);
        line.spans.push(spinner.to_symbol_span(throbber_state));
    }
    line.spans
        .push(Span::styled(progress_text.to_string(), muted_style));

    let line_width = line.width() as u16;
    if line_width == 0 {
        return;
    }

    let buffer = frame.buffer_mut();
    let mut start_x = area.right().saturating_sub(line_width).max(area.left());

    // Never draw over the tab labels.
    let row = area.top();
    let last_label_x = (area.left()..area.right())
        .rev()
        .find(|&x| {
            buffer
                .cell((x, row))
                .is_some_and(|cell| !cell.symbol().trim().is_empty())
        });
    if let Some(last_x) = last_label_x {
        start_x = start_x.max(last_x.saturating_add(3));
    }

    if start_x >= area.right() {
        return;
    }
    let max_width = area.right().saturating_sub(start_x).min(line_width);
    buffer.set_line(start_x, row, &line, max_width);
}
