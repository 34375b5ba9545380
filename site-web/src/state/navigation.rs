//! Navigation bar state

/// Mobile menu visibility and the path used to highlight the active link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationViewState {
    is_menu_open: bool,
    current_path: String,
}

impl NavigationViewState {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            is_menu_open: false,
            current_path: current_path.into(),
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.is_menu_open
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn toggle_menu(&mut self) {
        self.is_menu_open = !self.is_menu_open;
    }

    /// A navigation link was followed. Always leaves the menu closed.
    pub fn select_link(&mut self, path: &str) {
        self.is_menu_open = false;
        self.set_current_path(path);
    }

    /// The location changed by other means (history, footer links).
    pub fn set_current_path(&mut self, path: &str) {
        if self.current_path != path {
            self.current_path = path.to_string();
        }
    }

    /// Exact match only: `/support` is not active on `/support/faq`.
    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = NavigationViewState::new("/privacy");
        assert!(!nav.is_menu_open());
        assert!(nav.is_active("/privacy"));
        assert!(!nav.is_active("/"));
    }

    #[test]
    fn test_toggle_parity() {
        for toggles in 0..7 {
            let mut nav = NavigationViewState::new("/");
            for _ in 0..toggles {
                nav.toggle_menu();
            }
            assert_eq!(nav.is_menu_open(), toggles % 2 == 1, "after {} toggles", toggles);
        }
    }

    #[test]
    fn test_selecting_link_closes_menu() {
        let mut nav = NavigationViewState::new("/");
        nav.toggle_menu();
        assert!(nav.is_menu_open());

        nav.select_link("/support");
        assert!(!nav.is_menu_open());
        assert_eq!(nav.current_path(), "/support");

        // Selecting with the menu already closed keeps it closed.
        nav.select_link("/");
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_active_link_is_exact() {
        let nav = NavigationViewState::new("/support/faq");
        assert!(!nav.is_active("/support"));
        assert!(!nav.is_active("/"));

        let nav = NavigationViewState::new("/");
        assert!(nav.is_active("/"));
        assert!(!nav.is_active("/support"));
    }

    #[test]
    fn test_exactly_one_nav_link_active_on_each_nav_page() {
        use crate::routes::NAV_LINKS;

        for (route, _) in NAV_LINKS {
            let nav = NavigationViewState::new(route.path());
            let active = NAV_LINKS
                .iter()
                .filter(|(other, _)| nav.is_active(other.path()))
                .count();
            assert_eq!(active, 1);
        }
    }
}
