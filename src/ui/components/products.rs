use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use widgetbox_core::{PageState, Product};

use crate::ui::style::Theme;

pub const LOADING_MESSAGE: &str = "Loading data ! Please wait.";
const BUTTON_LABEL: &str = "[ Load More Products ]";

/// Argument bundle for the load-more list.
pub struct ProductsContext<'a> {
    pub state: &'a PageState<Product>,
    pub list_state: &'a mut ListState,
    pub area: Rect,
    pub theme: &'a Theme,
}

pub fn render_products(frame: &mut Frame, ctx: ProductsContext<'_>) {
    let ProductsContext {
        state,
        list_state,
        area,
        theme,
    } = ctx;
    let [list_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(area);

    if state.items().is_empty() && state.is_loading() {
        let loading = Paragraph::new(LOADING_MESSAGE)
            .alignment(Alignment::Center)
            .style(theme.empty_style());
        frame.render_widget(loading, list_area);
    } else {
        let items: Vec<ListItem> = state
            .items()
            .iter()
            .map(|product| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>4} ", product.id), theme.empty_style()),
                    Span::styled(product.title.clone(), theme.header_style()),
                    Span::raw("  "),
                    Span::styled(product.thumbnail.clone(), theme.empty_style()),
                ]))
            })
            .collect();
        let title = format!(" {} of {} ", state.items().len(), state.ceiling());
        let list = List::new(items)
            .block(Block::default().borders(Borders::BOTTOM).title(title))
            .highlight_style(theme.row_highlight_style());
        frame.render_stateful_widget(list, list_area, list_state);
    }

    frame.render_widget(footer(state, theme), footer_area);
}

fn footer<'a>(state: &PageState<Product>, theme: &Theme) -> Paragraph<'a> {
    let button_style = if state.can_load_more() {
        theme.highlight_style()
    } else {
        theme.empty_style()
    };
    let mut lines = vec![Line::from(Span::styled(BUTTON_LABEL, button_style))];
    if state.is_exhausted() {
        lines.push(Line::from(Span::styled(
            format!("You have reached to {} products", state.items().len()),
            theme.prompt_style(),
        )));
    } else if let Some(error) = state.error() {
        lines.push(Line::from(Span::styled(
            format!("Error occurred ! {error}"),
            theme.error_style(),
        )));
    } else if state.is_loading() && !state.items().is_empty() {
        lines.push(Line::from(Span::styled(LOADING_MESSAGE, theme.empty_style())));
    }
    Paragraph::new(lines).alignment(Alignment::Center)
}
