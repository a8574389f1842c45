//! Page Routes
//!
//! Every screen has a hash path so reloads and bookmarks land on the same
//! page.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Region,
    State,
    City,
    Category,
    Item,
    Type,
    Description,
    SearchWorkOrder,
    AdminDashboard,
    AdminLogin,
}

/// Sidebar groups in display order
pub const SECTIONS: &[(&str, &[Page])] = &[
    ("Locations", &[Page::Region, Page::State, Page::City]),
    ("Catalog", &[Page::Category, Page::Item, Page::Type, Page::Description]),
    ("Work Orders", &[Page::SearchWorkOrder]),
    ("Admin", &[Page::AdminDashboard]),
];

impl Page {
    const ALL: [Page; 10] = [
        Page::Region,
        Page::State,
        Page::City,
        Page::Category,
        Page::Item,
        Page::Type,
        Page::Description,
        Page::SearchWorkOrder,
        Page::AdminDashboard,
        Page::AdminLogin,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Region => "/region",
            Page::State => "/state",
            Page::City => "/city",
            Page::Category => "/category",
            Page::Item => "/item",
            Page::Type => "/type",
            Page::Description => "/description",
            Page::SearchWorkOrder => "/search-workorder",
            Page::AdminDashboard => "/admin/dashboard",
            Page::AdminLogin => "/admin/login",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Region => "Regions",
            Page::State => "States",
            Page::City => "Cities",
            Page::Category => "Categories",
            Page::Item => "Items",
            Page::Type => "Types",
            Page::Description => "Descriptions",
            Page::SearchWorkOrder => "Search Work Order",
            Page::AdminDashboard => "Approvals",
            Page::AdminLogin => "Admin Sign-in",
        }
    }

    /// Screens behind the admin session flag
    pub fn requires_admin(&self) -> bool {
        matches!(self, Page::AdminDashboard)
    }

    /// Parse `#/region`, `/region` or `region`; unknown paths fall back to
    /// the default page
    pub fn from_hash(hash: &str) -> Page {
        let path = hash.trim_start_matches('#').trim_end_matches('/');
        let path = if path.starts_with('/') { path.to_string() } else { format!("/{}", path) };
        Page::ALL
            .into_iter()
            .find(|page| page.path() == path)
            .unwrap_or_default()
    }
}

/// Page named by the current `location.hash`
pub fn read_hash() -> Page {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Page::from_hash(&hash))
        .unwrap_or_default()
}

pub fn write_hash(page: Page) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(page.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hash_round_trips_every_page() {
        for page in Page::ALL {
            assert_eq!(Page::from_hash(&format!("#{}", page.path())), page);
        }
    }

    #[test]
    fn test_from_hash_tolerates_shapes() {
        assert_eq!(Page::from_hash("#/city/"), Page::City);
        assert_eq!(Page::from_hash("description"), Page::Description);
        assert_eq!(Page::from_hash(""), Page::Region);
        assert_eq!(Page::from_hash("#/nowhere"), Page::Region);
    }

    #[test]
    fn test_sections_cover_navigable_pages() {
        let listed: Vec<Page> = SECTIONS.iter().flat_map(|(_, pages)| pages.iter().copied()).collect();
        assert_eq!(listed.len(), 9);
        assert!(!listed.contains(&Page::AdminLogin));
        assert!(Page::AdminDashboard.requires_admin());
        assert!(!Page::City.requires_admin());
    }
}
