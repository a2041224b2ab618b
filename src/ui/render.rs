use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    text::Line,
    widgets::Paragraph,
};

use super::App;
use super::Tab;
use super::components::{
    ProductsContext, ProgressState, render_accordion, render_carousel, render_color,
    render_products, render_rating, render_tab_strip,
};

impl App {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let area = area.inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let progress_text = self.progress_text();
        let progress = ProgressState {
            progress_text: &progress_text,
            progress_complete: !self.is_loading(),
            throbber_state: &self.throbber_state,
        };
        render_tab_strip(frame, layout[0], self.tab, &self.theme, progress);
        self.render_body(frame, layout[2]);

        let hint = format!("{} · Tab switch · q quit", self.tab.hint());
        frame.render_widget(
            Paragraph::new(Line::from(hint)).style(self.theme.empty_style()),
            layout[3],
        );
    }

    fn progress_text(&self) -> String {
        match (self.products.is_loading(), self.carousel.is_loading()) {
            (true, true) => " loading products and images".to_string(),
            (true, false) => " loading products".to_string(),
            (false, true) => " loading images".to_string(),
            (false, false) => String::new(),
        }
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        match self.tab {
            Tab::Accordion => render_accordion(frame, area, &self.accordion, &self.theme),
            Tab::Carousel => render_carousel(frame, area, &self.carousel, &self.theme),
            Tab::Products => render_products(
                frame,
                ProductsContext {
                    state: &self.products,
                    list_state: &mut self.product_list,
                    area,
                    theme: &self.theme,
                },
            ),
            Tab::Color => render_color(frame, area, &self.color, &self.theme),
            Tab::Rating => render_rating(frame, area, &self.rating, &self.theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::ui::UiConfig;

    use super::*;

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn every_tab_renders_with_hint() {
        let mut app = App::new(UiConfig::offline()).unwrap();
        app.wait_for_fetches();
        for tab in Tab::ALL {
            app.set_tab(tab);
            let rendered = draw(&mut app);
            assert!(rendered.contains(tab.hint()), "{rendered}");
        }
    }

    #[test]
    fn products_tab_lists_loaded_items() {
        let mut app = App::new(UiConfig::offline()).unwrap();
        app.wait_for_fetches();
        app.set_tab(Tab::Products);
        let rendered = draw(&mut app);
        assert!(rendered.contains("Sample product 1"), "{rendered}");
        assert!(rendered.contains("20 of 100"));
    }
}
