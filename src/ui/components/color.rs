use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;
use widgetbox_core::{ColorMode, ColorPicker};

use crate::ui::style::Theme;

/// Fill `area` with the current colour and centre its label and value.
pub fn render_color(frame: &mut Frame, area: Rect, picker: &ColorPicker, theme: &Theme) {
    let [buttons_area, swatch_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);

    let button = |mode: ColorMode, key: &str| {
        let style = if picker.mode() == mode {
            theme.tab_highlight_style()
        } else {
            theme.tab_inactive_style()
        };
        Span::styled(format!(" [{key}] Create {} ", mode.label()), style)
    };
    let buttons = Line::from(vec![
        button(ColorMode::Hex, "h"),
        Span::raw(" "),
        button(ColorMode::Rgb, "r"),
        Span::raw(" "),
        Span::styled(" [space] Generate Random Color ", theme.prompt_style()),
    ]);
    frame.render_widget(Paragraph::new(buttons), buttons_area);

    let (r, g, b) = picker.value().to_rgb();
    let background = Color::Rgb(r, g, b);
    frame.render_widget(Block::default().style(Style::default().bg(background)), swatch_area);

    let foreground = contrasting(r, g, b);
    let label = picker.mode().label();
    let value = picker.value().to_string();
    let middle = swatch_area.y + swatch_area.height / 2;
    for (offset, text) in [(0u16, label), (1, value.as_str())] {
        let y = middle.saturating_sub(1).saturating_add(offset);
        if y >= swatch_area.bottom() {
            continue;
        }
        let width = (text.width() as u16).min(swatch_area.width);
        let x = swatch_area.x + (swatch_area.width - width) / 2;
        frame.buffer_mut().set_stringn(
            x,
            y,
            text,
            width as usize,
            Style::default().fg(foreground).bg(background),
        );
    }
}

fn contrasting(r: u8, g: u8, b: u8) -> Color {
    let luma = u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114;
    if luma > 128_000 { Color::Black } else { Color::White }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render(picker: &ColorPicker) -> (String, Color) {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| render_color(frame, frame.area(), picker, &Theme::default()))
            .unwrap();
        let backend = terminal.backend();
        let corner = backend.buffer()[(0, 9)].bg;
        (backend.to_string(), corner)
    }

    #[test]
    fn initial_colour_is_black_hex() {
        let (rendered, corner) = render(&ColorPicker::default());
        assert!(rendered.contains("HEX Color"), "{rendered}");
        assert!(rendered.contains("#000000"));
        assert_eq!(corner, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn swatch_follows_rgb_value() {
        let mut picker = ColorPicker::default();
        picker.set_mode(ColorMode::Rgb, &mut StdRng::seed_from_u64(3));
        let (r, g, b) = picker.value().to_rgb();
        let (rendered, corner) = render(&picker);
        assert!(rendered.contains("RGB Color"));
        assert!(rendered.contains(&picker.value().to_string()), "{rendered}");
        assert_eq!(corner, Color::Rgb(r, g, b));
    }

    #[test]
    fn contrast_flips_on_bright_colours() {
        assert_eq!(contrasting(255, 255, 255), Color::Black);
        assert_eq!(contrasting(0, 0, 0), Color::White);
    }
}
