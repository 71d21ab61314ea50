/// A scroll-addressable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    /// Entries shown in the navigation menu, in display order.
    pub const MENU: [Section; 3] = [Section::About, Section::Projects, Section::Contact];

    pub const fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

/// Something that can bring a page element into view.
pub trait SectionScroller {
    /// Requests a smooth scroll to the element with `section_id`.
    ///
    /// Returns `false` when no such element exists.
    fn scroll_into_view(&self, section_id: &str) -> bool;
}

/// Owns the mobile menu flag and drives section scrolling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationController {
    menu: MenuState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Scrolls to `section_id` and closes the menu.
    ///
    /// A missing target is not an error: the menu is left as it was and
    /// `false` is returned.
    pub fn scroll_to_section<S>(&mut self, scroller: &S, section_id: &str) -> bool
    where
        S: SectionScroller + ?Sized,
    {
        if !scroller.scroll_into_view(section_id) {
            log::debug!("no section with id {section_id:?}, ignoring scroll request");
            return false;
        }
        self.menu.close();
        true
    }
}
