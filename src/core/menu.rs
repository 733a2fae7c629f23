//! Mobile navigation menu state.

/// Where a click landed relative to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuClick {
    /// The hamburger toggle button
    Toggle,
    /// A link inside the navigation
    NavLink,
    /// Inside the navigation, but not on a link
    Nav,
    /// Anywhere else on the page
    Outside,
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply a page click.
    pub fn on_click(&mut self, target: MenuClick) {
        match target {
            MenuClick::Toggle => {
                self.toggle();
            }
            MenuClick::NavLink | MenuClick::Outside => self.close(),
            MenuClick::Nav => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut menu = MobileMenu::default();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
    }

    #[test]
    fn test_link_click_closes() {
        let mut menu = MobileMenu::default();
        menu.on_click(MenuClick::Toggle);
        menu.on_click(MenuClick::NavLink);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut menu = MobileMenu::default();
        menu.on_click(MenuClick::Toggle);
        menu.on_click(MenuClick::Outside);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_click_inside_nav_keeps_open() {
        let mut menu = MobileMenu::default();
        menu.on_click(MenuClick::Toggle);
        menu.on_click(MenuClick::Nav);
        assert!(menu.is_open());
    }
}
