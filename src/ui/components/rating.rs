use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use widgetbox_core::StarRating;

use crate::ui::style::Theme;

const ACTIVE_STAR: &str = "★";
const INACTIVE_STAR: &str = "☆";

pub fn render_rating(frame: &mut Frame, area: Rect, rating: &StarRating, theme: &Theme) {
    let [_, stars_area, caption_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);

    let stars: Vec<Span> = (1..=rating.stars())
        .map(|index| {
            if rating.is_active(index) {
                Span::styled(format!("{ACTIVE_STAR} "), theme.accent_style())
            } else {
                Span::styled(format!("{INACTIVE_STAR} "), theme.empty_style())
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(stars)).alignment(Alignment::Center),
        stars_area,
    );

    let caption = if rating.rating() == 0 {
        "Not rated yet".to_string()
    } else {
        format!("Rated {} of {}", rating.rating(), rating.stars())
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(caption, theme.empty_style())))
            .alignment(Alignment::Center),
        caption_area,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render(rating: &StarRating) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 7)).unwrap();
        terminal
            .draw(|frame| render_rating(frame, frame.area(), rating, &Theme::default()))
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn unrated_shows_empty_stars() {
        let rendered = render(&StarRating::default());
        assert_eq!(rendered.matches(INACTIVE_STAR).count(), 5);
        assert!(rendered.contains("Not rated yet"));
    }

    #[test]
    fn hover_preview_wins_over_rating() {
        let mut rating = StarRating::new(5);
        rating.set_rating(2);
        rating.preview_hover(4);
        let rendered = render(&rating);
        assert_eq!(rendered.matches(ACTIVE_STAR).count(), 4);
        assert!(rendered.contains("Rated 2 of 5"), "{rendered}");
    }

    #[test]
    fn star_count_is_configurable() {
        let rendered = render(&StarRating::new(8));
        assert_eq!(rendered.matches(INACTIVE_STAR).count(), 8);
    }
}
