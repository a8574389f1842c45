//! Cascading Selects
//!
//! Selection state for the category → item → type and region → state
//! chains. Changing a parent clears everything below it and names the one
//! dependent list that has to be loaded next.

/// A dependent option list to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsFetch {
    States { region_id: String },
    Items { category_id: String },
    Types { category_id: String, item_id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSelection {
    pub category_id: String,
    pub item_id: String,
    pub type_id: String,
}

impl CatalogSelection {
    /// Selection restored from a stored row
    pub fn from_row(category_id: &str, item_id: &str, type_id: &str) -> Self {
        Self {
            category_id: category_id.to_string(),
            item_id: item_id.to_string(),
            type_id: type_id.to_string(),
        }
    }

    pub fn select_category(&mut self, category_id: &str) -> Option<OptionsFetch> {
        self.category_id = category_id.to_string();
        self.item_id.clear();
        self.type_id.clear();
        self.items_fetch()
    }

    pub fn select_item(&mut self, item_id: &str) -> Option<OptionsFetch> {
        self.item_id = item_id.to_string();
        self.type_id.clear();
        self.types_fetch()
    }

    pub fn select_type(&mut self, type_id: &str) {
        self.type_id = type_id.to_string();
    }

    pub fn item_enabled(&self) -> bool {
        !self.category_id.is_empty()
    }

    pub fn type_enabled(&self) -> bool {
        !self.item_id.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        !self.category_id.is_empty() && !self.item_id.is_empty() && !self.type_id.is_empty()
    }

    /// Lists an edit row needs before its selects can show stored values
    pub fn restore_fetches(&self) -> Vec<OptionsFetch> {
        self.items_fetch().into_iter().chain(self.types_fetch()).collect()
    }

    /// A response is only applied if the selection has not moved on
    pub fn wants(&self, fetch: &OptionsFetch) -> bool {
        match fetch {
            OptionsFetch::Items { category_id } => *category_id == self.category_id,
            OptionsFetch::Types { category_id, item_id } => {
                *category_id == self.category_id && *item_id == self.item_id
            }
            OptionsFetch::States { .. } => false,
        }
    }

    fn items_fetch(&self) -> Option<OptionsFetch> {
        (!self.category_id.is_empty()).then(|| OptionsFetch::Items {
            category_id: self.category_id.clone(),
        })
    }

    fn types_fetch(&self) -> Option<OptionsFetch> {
        (!self.category_id.is_empty() && !self.item_id.is_empty()).then(|| OptionsFetch::Types {
            category_id: self.category_id.clone(),
            item_id: self.item_id.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSelection {
    pub region_id: String,
    pub state_id: String,
}

impl LocationSelection {
    pub fn select_region(&mut self, region_id: &str) -> Option<OptionsFetch> {
        self.region_id = region_id.to_string();
        self.state_id.clear();
        (!self.region_id.is_empty()).then(|| OptionsFetch::States {
            region_id: self.region_id.clone(),
        })
    }

    pub fn select_state(&mut self, state_id: &str) {
        self.state_id = state_id.to_string();
    }

    pub fn state_enabled(&self) -> bool {
        !self.region_id.is_empty()
    }

    pub fn wants(&self, fetch: &OptionsFetch) -> bool {
        matches!(fetch, OptionsFetch::States { region_id } if *region_id == self.region_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_change_clears_children_and_fetches_items_once() {
        let mut sel = CatalogSelection::from_row("C1", "I1", "T1");
        let fetch = sel.select_category("C2");
        assert_eq!(fetch, Some(OptionsFetch::Items { category_id: "C2".into() }));
        assert_eq!(sel.item_id, "");
        assert_eq!(sel.type_id, "");
        assert!(sel.item_enabled());
        assert!(!sel.type_enabled());
    }

    #[test]
    fn test_item_change_clears_type_and_fetches_types_once() {
        let mut sel = CatalogSelection::default();
        sel.select_category("C1");
        sel.select_item("I1");
        sel.select_type("T1");

        let fetch = sel.select_item("I2");
        assert_eq!(
            fetch,
            Some(OptionsFetch::Types { category_id: "C1".into(), item_id: "I2".into() })
        );
        assert_eq!(sel.type_id, "");
        assert_eq!(sel.category_id, "C1");
    }

    #[test]
    fn test_clearing_parent_fetches_nothing() {
        let mut sel = CatalogSelection::from_row("C1", "I1", "T1");
        assert_eq!(sel.select_category(""), None);
        assert!(!sel.item_enabled());
        assert_eq!(sel.select_item(""), None);
    }

    #[test]
    fn test_restore_fetches_for_edit_row() {
        let sel = CatalogSelection::from_row("C1", "I1", "T1");
        assert_eq!(
            sel.restore_fetches(),
            vec![
                OptionsFetch::Items { category_id: "C1".into() },
                OptionsFetch::Types { category_id: "C1".into(), item_id: "I1".into() },
            ]
        );
        assert!(sel.is_complete());
        assert!(CatalogSelection::from_row("C1", "", "").restore_fetches().len() == 1);
    }

    #[test]
    fn test_stale_responses_are_ignored() {
        let mut sel = CatalogSelection::default();
        let first = sel.select_category("C1").unwrap();
        let second = sel.select_category("C2").unwrap();
        assert!(!sel.wants(&first));
        assert!(sel.wants(&second));
    }

    #[test]
    fn test_region_change_clears_state() {
        let mut loc = LocationSelection::default();
        loc.select_region("R1");
        loc.select_state("S1");
        let fetch = loc.select_region("R2");
        assert_eq!(fetch, Some(OptionsFetch::States { region_id: "R2".into() }));
        assert_eq!(loc.state_id, "");
        assert!(loc.wants(&OptionsFetch::States { region_id: "R2".into() }));
        assert!(!loc.wants(&OptionsFetch::States { region_id: "R1".into() }));
        assert_eq!(loc.select_region(""), None);
        assert!(!loc.state_enabled());
    }
}
