use crate::domain::model::{DisplayTarget, NavEntry, Notification, NotificationLevel};
use crate::domain::ports::Page;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Blocked,
    Unblocked,
    Notified(Notification),
    LogoutSubmitted,
}

#[derive(Debug, Default)]
struct PageState {
    active_nav: HashSet<NavEntry>,
    texts: HashMap<DisplayTarget, String>,
    blocked: bool,
    events: Vec<PageEvent>,
}

/// Page held entirely in memory. Used by tests and by anything that
/// wants to inspect what the controller rendered.
#[derive(Debug, Default)]
pub struct MemoryPage {
    state: Mutex<PageState>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn text(&self, target: DisplayTarget) -> Option<String> {
        self.state().texts.get(&target).cloned()
    }

    /// Active entries in navbar order.
    pub fn active_nav_entries(&self) -> Vec<NavEntry> {
        let state = self.state();
        NavEntry::ALL
            .into_iter()
            .filter(|entry| state.active_nav.contains(entry))
            .collect()
    }

    pub fn is_blocked(&self) -> bool {
        self.state().blocked
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.state().events.clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.state()
            .events
            .iter()
            .filter_map(|event| match event {
                PageEvent::Notified(n) => Some(n.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Page for MemoryPage {
    fn clear_nav_active(&self) {
        self.state().active_nav.clear();
    }

    fn mark_nav_active(&self, entry: NavEntry) {
        self.state().active_nav.insert(entry);
    }

    fn set_text(&self, target: DisplayTarget, text: &str) {
        self.state().texts.insert(target, text.to_string());
    }

    fn block_screen(&self) {
        let mut state = self.state();
        state.blocked = true;
        state.events.push(PageEvent::Blocked);
    }

    fn unblock_screen(&self) {
        let mut state = self.state();
        state.blocked = false;
        state.events.push(PageEvent::Unblocked);
    }

    fn notify(&self, notification: Notification) {
        self.state().events.push(PageEvent::Notified(notification));
    }

    fn submit_logout_form(&self) {
        self.state().events.push(PageEvent::LogoutSubmitted);
    }
}

/// Page rendered to the terminal by the CLI.
#[derive(Debug, Default)]
pub struct ConsolePage;

impl Page for ConsolePage {
    fn clear_nav_active(&self) {
        tracing::debug!("Clearing active nav entries");
    }

    fn mark_nav_active(&self, entry: NavEntry) {
        println!("🧭 Active nav entry: #{}", entry.element_id());
    }

    fn set_text(&self, target: DisplayTarget, text: &str) {
        println!("   {} = {}", target.selector(), text);
    }

    fn block_screen(&self) {
        tracing::debug!("Screen blocked");
    }

    fn unblock_screen(&self) {
        tracing::debug!("Screen unblocked");
    }

    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => println!("✅ {}", notification.message),
            NotificationLevel::Error => eprintln!("❌ {}", notification.message),
        }
    }

    fn submit_logout_form(&self) {
        println!("🚪 Logout form submitted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_page_tracks_blocker() {
        let page = MemoryPage::new();

        page.block_screen();
        assert!(page.is_blocked());
        page.unblock_screen();
        assert!(!page.is_blocked());

        assert_eq!(page.events(), vec![PageEvent::Blocked, PageEvent::Unblocked]);
    }

    #[test]
    fn test_memory_page_overwrites_text() {
        let page = MemoryPage::new();

        page.set_text(DisplayTarget::CartCountText, "1");
        page.set_text(DisplayTarget::CartCountText, "2");

        assert_eq!(page.text(DisplayTarget::CartCountText).as_deref(), Some("2"));
        assert_eq!(page.text(DisplayTarget::CartTotalText), None);
    }

    #[test]
    fn test_active_entries_in_navbar_order() {
        let page = MemoryPage::new();

        page.mark_nav_active(NavEntry::Customer);
        page.mark_nav_active(NavEntry::Home);
        assert_eq!(page.active_nav_entries(), vec![NavEntry::Home, NavEntry::Customer]);

        page.clear_nav_active();
        assert!(page.active_nav_entries().is_empty());
    }
}
