use std::ops::ControlFlow;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use widgetbox_core::ColorMode;

use super::{App, Tab};

impl App {
    /// Route a key press. `Break` ends the session.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return ControlFlow::Break(()),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return ControlFlow::Break(());
            }
            KeyCode::Tab => self.set_tab(self.tab.next()),
            KeyCode::BackTab => self.set_tab(self.tab.previous()),
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                if let Some(tab) = Tab::ALL.get(index) {
                    self.set_tab(*tab);
                }
            }
            _ => self.handle_tab_key(key.code),
        }
        ControlFlow::Continue(())
    }

    fn handle_tab_key(&mut self, code: KeyCode) {
        match self.tab {
            Tab::Accordion => match code {
                KeyCode::Up | KeyCode::Char('k') => self.accordion.move_up(),
                KeyCode::Down | KeyCode::Char('j') => self.accordion.move_down(),
                KeyCode::Enter | KeyCode::Char(' ') => self.accordion.toggle_at_cursor(),
                KeyCode::Char('m') => self.accordion.toggle_mode(),
                _ => {}
            },
            Tab::Carousel => match code {
                KeyCode::Left | KeyCode::Char('h') => self.carousel.previous(),
                KeyCode::Right | KeyCode::Char('l') => self.carousel.next(),
                KeyCode::Home => self.carousel.select(0),
                KeyCode::End => {
                    let last = self.carousel.images().len().saturating_sub(1);
                    self.carousel.select(last);
                }
                KeyCode::Char(']') => self.turn_image_page(true),
                KeyCode::Char('[') => self.turn_image_page(false),
                KeyCode::Char('r') => self.reload_images(),
                _ => {}
            },
            Tab::Products => match code {
                KeyCode::Up | KeyCode::Char('k') => self.scroll_products(-1),
                KeyCode::Down | KeyCode::Char('j') => self.scroll_products(1),
                KeyCode::PageUp => self.scroll_products(-10),
                KeyCode::PageDown => self.scroll_products(10),
                KeyCode::Enter | KeyCode::Char('l') => self.request_products(),
                _ => {}
            },
            Tab::Color => match code {
                KeyCode::Char('h') => self.set_color_mode(ColorMode::Hex),
                KeyCode::Char('r') => self.set_color_mode(ColorMode::Rgb),
                KeyCode::Enter | KeyCode::Char(' ') => self.regenerate_color(),
                _ => {}
            },
            Tab::Rating => match code {
                KeyCode::Left | KeyCode::Char('h') => self.rating.hover_previous(),
                KeyCode::Right | KeyCode::Char('l') => self.rating.hover_next(),
                KeyCode::Enter | KeyCode::Char(' ') => self.rating.commit_hover(),
                KeyCode::Char('c') => self.rating.clear_hover(),
                _ => {}
            },
        }
    }
}
