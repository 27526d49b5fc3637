use crate::domain::model::NavEntry;
use crate::domain::ports::Page;
use url::Url;

/// Route suffixes checked in order after the home test.
const ROUTE_SUFFIXES: [(&str, NavEntry); 5] = [
    ("/beverage/crate", NavEntry::Crates),
    ("/beverage/bottle", NavEntry::Bottles),
    ("/cart", NavEntry::Cart),
    ("/order", NavEntry::Order),
    ("/customer", NavEntry::Customer),
];

/// Returns the navigation entry that belongs to `location`, if any.
///
/// Matching runs against the full href, so a query string or fragment
/// after a known route means no match.
pub fn active_entry(location: &Url) -> Option<NavEntry> {
    let href = location.as_str();

    if location.path() == "/" || href.ends_with("/home") {
        return Some(NavEntry::Home);
    }

    ROUTE_SUFFIXES
        .iter()
        .find(|(suffix, _)| href.ends_with(suffix))
        .map(|(_, entry)| *entry)
}

pub fn highlight_active_link<P: Page + ?Sized>(page: &P, location: &Url) -> Option<NavEntry> {
    page.clear_nav_active();

    let entry = active_entry(location);
    match entry {
        Some(entry) => {
            tracing::debug!("Marking nav entry '{}' active", entry.element_id());
            page.mark_nav_active(entry);
        }
        None => tracing::debug!("No nav entry matches {}", location),
    }

    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::page::MemoryPage;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_known_routes() {
        let cases = [
            ("http://shop.local/", NavEntry::Home),
            ("http://shop.local", NavEntry::Home),
            ("http://shop.local/home", NavEntry::Home),
            ("http://shop.local/beverage/crate", NavEntry::Crates),
            ("http://shop.local/beverage/bottle", NavEntry::Bottles),
            ("http://shop.local/cart", NavEntry::Cart),
            ("http://shop.local/order", NavEntry::Order),
            ("http://shop.local/customer", NavEntry::Customer),
        ];

        for (location, expected) in cases {
            assert_eq!(active_entry(&url(location)), Some(expected), "{}", location);
        }
    }

    #[test]
    fn test_unknown_routes() {
        assert_eq!(active_entry(&url("http://shop.local/login")), None);
        assert_eq!(active_entry(&url("http://shop.local/cart?step=2")), None);
        assert_eq!(active_entry(&url("http://shop.local/order/ORD-1")), None);
    }

    #[test]
    fn test_highlight_marks_exactly_one_entry() {
        let page = MemoryPage::new();

        for entry in NavEntry::ALL {
            let location = match entry {
                NavEntry::Home => url("http://shop.local/home"),
                NavEntry::Crates => url("http://shop.local/beverage/crate"),
                NavEntry::Bottles => url("http://shop.local/beverage/bottle"),
                NavEntry::Cart => url("http://shop.local/cart"),
                NavEntry::Order => url("http://shop.local/order"),
                NavEntry::Customer => url("http://shop.local/customer"),
            };

            highlight_active_link(&page, &location);
            assert_eq!(page.active_nav_entries(), vec![entry]);
        }
    }

    #[test]
    fn test_highlight_clears_previous_marking() {
        let page = MemoryPage::new();

        highlight_active_link(&page, &url("http://shop.local/cart"));
        assert_eq!(page.active_nav_entries(), vec![NavEntry::Cart]);

        let entry = highlight_active_link(&page, &url("http://shop.local/login"));
        assert_eq!(entry, None);
        assert!(page.active_nav_entries().is_empty());
    }
}
