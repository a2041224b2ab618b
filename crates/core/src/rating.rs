//! Star rating input with a hover preview.

/// Stars shown unless configured otherwise.
pub const DEFAULT_STARS: u8 = 5;

/// Committed rating plus the transient hover preview.
///
/// `hover == 0` means nothing is being previewed and the committed rating is
/// displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    stars: u8,
    rating: u8,
    hover: u8,
}

impl Default for StarRating {
    fn default() -> Self {
        Self::new(DEFAULT_STARS)
    }
}

impl StarRating {
    #[must_use]
    pub fn new(stars: u8) -> Self {
        Self {
            stars,
            rating: 0,
            hover: 0,
        }
    }

    #[must_use]
    pub fn stars(&self) -> u8 {
        self.stars
    }

    #[must_use]
    pub fn rating(&self) -> u8 {
        self.rating
    }

    #[must_use]
    pub fn hover(&self) -> u8 {
        self.hover
    }

    /// Commit `value` (expected in `1..=stars`).
    pub fn set_rating(&mut self, value: u8) {
        self.rating = value;
        log::debug!("rating set to {value}/{}", self.stars);
    }

    /// Preview `value` without committing it.
    pub fn preview_hover(&mut self, value: u8) {
        self.hover = value;
    }

    /// Drop the preview back to the committed rating.
    pub fn clear_hover(&mut self) {
        self.hover = self.rating;
    }

    /// Value currently driving the display.
    #[must_use]
    pub fn displayed(&self) -> u8 {
        if self.hover > 0 {
            self.hover
        } else {
            self.rating
        }
    }

    /// Whether star `index` (1-based) renders as active.
    #[must_use]
    pub fn is_active(&self, index: u8) -> bool {
        index <= self.displayed()
    }

    /// Move the preview one star right, starting from what is displayed.
    pub fn hover_next(&mut self) {
        let next = self.displayed().saturating_add(1).min(self.stars);
        self.preview_hover(next);
    }

    /// Move the preview one star left, never below the first star.
    pub fn hover_previous(&mut self) {
        let previous = self.displayed().saturating_sub(1).max(1);
        self.preview_hover(previous.min(self.stars));
    }

    /// Commit whatever the preview currently shows.
    pub fn commit_hover(&mut self) {
        let value = self.displayed();
        if value > 0 {
            self.set_rating(value);
        }
    }
}
