use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use widgetbox_core::{Carousel, CarouselStatus, Image};

use crate::ui::style::Theme;

pub const LOADING_MESSAGE: &str = "Please wait its loading";
pub const EMPTY_MESSAGE: &str = "No images to show";

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

pub fn render_carousel(frame: &mut Frame, area: Rect, carousel: &Carousel, theme: &Theme) {
    match carousel.status() {
        CarouselStatus::Loading => render_message(frame, area, LOADING_MESSAGE, theme.empty_style()),
        CarouselStatus::Failed(error) => render_message(
            frame,
            area,
            &format!("there is an error {error}"),
            theme.error_style(),
        ),
        CarouselStatus::Empty => render_message(frame, area, EMPTY_MESSAGE, theme.empty_style()),
        CarouselStatus::Showing {
            image,
            index,
            total,
        } => render_slide(frame, area, carousel, image, (index, total), theme),
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, style: ratatui::style::Style) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    let paragraph = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(paragraph, middle);
}

fn render_slide(
    frame: &mut Frame,
    area: Rect,
    carousel: &Carousel,
    image: &Image,
    (index, total): (usize, usize),
    theme: &Theme,
) {
    let [slide_area, dots_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.empty_style())
        .title(Line::from(format!(" ‹ {}/{} › ", index + 1, total)).centered())
        .title_bottom(
            Line::from(format!(" page {} · {} ", carousel.page(), carousel.url())).centered(),
        );

    let mut lines = vec![
        Line::from(Span::styled(image.downloads.clone(), theme.highlight_style())),
        Line::default(),
    ];
    if let Some(author) = image.author.as_deref() {
        lines.push(Line::from(vec![
            Span::styled("by ", theme.empty_style()),
            Span::styled(author.to_string(), theme.header_style()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("id {}", image.id),
        theme.empty_style(),
    )));

    let slide = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(slide, slide_area);

    let dots: Vec<Span> = (0..total)
        .flat_map(|dot| {
            let span = if dot == index {
                Span::styled(ACTIVE_DOT, theme.accent_style())
            } else {
                Span::styled(INACTIVE_DOT, theme.empty_style())
            };
            [span, Span::raw(" ")]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(dots)).centered(), dots_area);
}
