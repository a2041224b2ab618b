/// The widgets shown as tabs, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Accordion,
    Carousel,
    Products,
    Color,
    Rating,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Accordion,
        Tab::Carousel,
        Tab::Products,
        Tab::Color,
        Tab::Rating,
    ];

    /// Identifier used on the command line and in config files.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Tab::Accordion => "accordion",
            Tab::Carousel => "carousel",
            Tab::Products => "products",
            Tab::Color => "color",
            Tab::Rating => "rating",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Accordion => "Accordion",
            Tab::Carousel => "Carousel",
            Tab::Products => "Load more",
            Tab::Color => "Colour",
            Tab::Rating => "Rating",
        }
    }

    /// Key hints shown in the footer while the tab is active.
    #[must_use]
    pub fn hint(self) -> &'static str {
        match self {
            Tab::Accordion => "↑/↓ move · Enter toggle · m multi selection",
            Tab::Carousel => "←/→ slide · Home/End first/last · [/] page · r reload",
            Tab::Products => "↑/↓ scroll · Enter load more",
            Tab::Color => "h HEX · r RGB · Space generate",
            Tab::Rating => "←/→ preview · Enter rate · c clear preview",
        }
    }

    /// Resolve an identifier or label, ignoring ASCII case.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Tab> {
        let id = id.trim();
        match id.to_ascii_lowercase().as_str() {
            "colour" => Some(Tab::Color),
            "load-more" | "load_more" => Some(Tab::Products),
            "stars" | "star-rating" => Some(Tab::Rating),
            "images" | "image-slider" => Some(Tab::Carousel),
            other => Tab::ALL.into_iter().find(|tab| tab.id() == other),
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Tab::ALL
            .iter()
            .position(|tab| *tab == self)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_in_both_directions() {
        assert_eq!(Tab::Rating.next(), Tab::Accordion);
        assert_eq!(Tab::Accordion.previous(), Tab::Rating);
        assert_eq!(Tab::Carousel.next().previous(), Tab::Carousel);
    }

    #[test]
    fn identifiers_and_aliases_resolve() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_id("Colour"), Some(Tab::Color));
        assert_eq!(Tab::from_id("load-more"), Some(Tab::Products));
        assert_eq!(Tab::from_id("unknown"), None);
    }
}
