//! List/detail session state machine.
//!
//! ```text
//!   List ──open_add_form──► AddForm ──submit_add / cancel_add──► List
//!    │  ▲
//!    │  └──────────── close_detail / last record deleted ─────┐
//!    ▼                                                        │
//!   Detail { id, edit: None } ──begin_edit──► Detail { edit: Some(draft) }
//!      ▲  │ first/previous/next/last                │ save_edit / cancel_edit
//!      └──┘                                         ▼
//!                                        Detail { edit: None }
//! ```
//!
//! Screens hold product ids only. All product data lives in the
//! [`CatalogStore`] owned by the session.

use tracing::debug;

use crate::catalog::{CatalogStore, Product, ProductDraft, ProductField, SortKey};
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::navigation::{self, Direction};

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The product list.
    List,
    /// The add-product form over the list.
    AddForm(ProductDraft),
    /// One product, optionally with its edit form open.
    Detail {
        id: ProductId,
        edit: Option<ProductDraft>,
    },
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::List => "list",
            Screen::AddForm(_) => "add form",
            Screen::Detail { edit: None, .. } => "detail",
            Screen::Detail { edit: Some(_), .. } => "edit",
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Screen::List)
    }

    /// The product open on a detail screen.
    pub fn detail_id(&self) -> Option<ProductId> {
        match self {
            Screen::Detail { id, .. } => Some(*id),
            _ => None,
        }
    }
}

/// A catalog together with the screen a user is looking at.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    store: CatalogStore,
    screen: Screen,
}

impl CatalogSession {
    /// Start on the list screen.
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            screen: Screen::List,
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The product on the detail screen.
    pub fn current_product(&self) -> Option<&Product> {
        self.screen.detail_id().and_then(|id| self.store.get(id))
    }

    /// Open a blank add form.
    pub fn open_add_form(&mut self) -> Result<(), CatalogError> {
        self.require_list("open the add form")?;
        self.transition(Screen::AddForm(ProductDraft::new()));
        Ok(())
    }

    /// Change one field of the open add form.
    pub fn set_add_field(
        &mut self,
        field: ProductField,
        value: impl Into<String>,
    ) -> Result<(), CatalogError> {
        match &mut self.screen {
            Screen::AddForm(draft) => {
                draft.set(field, value);
                Ok(())
            }
            other => Err(invalid(other, "fill in the add form")),
        }
    }

    /// Add the product described by the form and return to the list.
    ///
    /// On failure the form stays open with its text intact.
    pub fn submit_add(&mut self) -> Result<ProductId, CatalogError> {
        let Screen::AddForm(draft) = &self.screen else {
            return Err(invalid(&self.screen, "submit the add form"));
        };
        let product = draft.parse()?;
        let id = product.id;
        self.store.add(product)?;
        self.transition(Screen::List);
        Ok(id)
    }

    pub fn cancel_add(&mut self) -> Result<(), CatalogError> {
        if !matches!(self.screen, Screen::AddForm(_)) {
            return Err(invalid(&self.screen, "cancel the add form"));
        }
        self.transition(Screen::List);
        Ok(())
    }

    /// Delete a product from the list or detail screen.
    ///
    /// If the open detail shows the deleted product, it moves to the product
    /// that took its place (or the new last one), or back to the list when
    /// nothing is left.
    pub fn delete(&mut self, id: ProductId) -> Result<Product, CatalogError> {
        if matches!(self.screen, Screen::AddForm(_)) {
            return Err(invalid(&self.screen, "delete"));
        }

        let position = self.store.position(id);
        let removed = self.store.remove(id)?;

        if self.screen.detail_id() == Some(id) {
            let products = self.store.products();
            let next = position
                .and_then(|i| products.get(i.min(products.len().saturating_sub(1))))
                .map(|p| p.id);
            match next {
                Some(next) => self.transition(Screen::Detail {
                    id: next,
                    edit: None,
                }),
                None => self.transition(Screen::List),
            }
        }
        Ok(removed)
    }

    /// Reorder the catalog. Allowed from any screen.
    pub fn sort(&mut self, key: SortKey) -> &[Product] {
        self.store.sort_by(key)
    }

    /// Open the detail screen for `id`.
    pub fn open_detail(&mut self, id: ProductId) -> Result<&Product, CatalogError> {
        self.require_list("open a product")?;
        if !self.store.contains(id) {
            return Err(CatalogError::NotFound(id));
        }
        self.transition(Screen::Detail { id, edit: None });
        self.store.get(id).ok_or(CatalogError::NotFound(id))
    }

    /// Return to the list, discarding any unsaved edit.
    pub fn close_detail(&mut self) -> Result<(), CatalogError> {
        if self.screen.detail_id().is_none() {
            return Err(invalid(&self.screen, "close the detail"));
        }
        self.transition(Screen::List);
        Ok(())
    }

    /// Move the detail screen to another product.
    ///
    /// An unsaved edit is discarded.
    pub fn navigate(&mut self, direction: Direction) -> Result<&Product, CatalogError> {
        let Some(current) = self.screen.detail_id() else {
            return Err(invalid(&self.screen, "navigate"));
        };
        let target = navigation::navigate(self.store.products(), direction, Some(current))
            .unwrap_or(current);
        self.transition(Screen::Detail {
            id: target,
            edit: None,
        });
        self.store.get(target).ok_or(CatalogError::NotFound(target))
    }

    /// Open the edit form pre-filled with the shown product.
    pub fn begin_edit(&mut self) -> Result<(), CatalogError> {
        match &self.screen {
            Screen::Detail { id, edit: None } => {
                let id = *id;
                let product = self.store.get(id).ok_or(CatalogError::NotFound(id))?;
                let draft = ProductDraft::from(product);
                self.transition(Screen::Detail {
                    id,
                    edit: Some(draft),
                });
                Ok(())
            }
            Screen::Detail { edit: Some(_), .. } => Ok(()),
            other => Err(invalid(other, "edit")),
        }
    }

    /// Change one field of the open edit form.
    pub fn set_edit_field(
        &mut self,
        field: ProductField,
        value: impl Into<String>,
    ) -> Result<(), CatalogError> {
        match &mut self.screen {
            Screen::Detail {
                edit: Some(draft), ..
            } => {
                draft.set(field, value);
                Ok(())
            }
            other => Err(invalid(other, "fill in the edit form")),
        }
    }

    /// Replace the shown product with the edit form's contents.
    ///
    /// Returns the product's id after the save, which differs from the old
    /// one when the id field was edited. On failure the form stays open.
    pub fn save_edit(&mut self) -> Result<ProductId, CatalogError> {
        let Screen::Detail {
            id,
            edit: Some(draft),
        } = &self.screen
        else {
            return Err(invalid(&self.screen, "save an edit"));
        };
        let id = *id;
        let product = draft.parse()?;
        let new_id = product.id;
        self.store.update(id, product)?;
        self.transition(Screen::Detail {
            id: new_id,
            edit: None,
        });
        Ok(new_id)
    }

    pub fn cancel_edit(&mut self) -> Result<(), CatalogError> {
        match &self.screen {
            Screen::Detail { id, edit: Some(_) } => {
                let id = *id;
                self.transition(Screen::Detail { id, edit: None });
                Ok(())
            }
            other => Err(invalid(other, "cancel an edit")),
        }
    }

    fn require_list(&self, action: &'static str) -> Result<(), CatalogError> {
        if self.screen.is_list() {
            Ok(())
        } else {
            Err(invalid(&self.screen, action))
        }
    }

    fn transition(&mut self, next: Screen) {
        debug!(from = self.screen.name(), to = next.name(), "screen transition");
        self.screen = next;
    }
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new(CatalogStore::with_default_seed())
    }
}

fn invalid(screen: &Screen, action: &'static str) -> CatalogError {
    CatalogError::InvalidTransition {
        from: screen.name(),
        action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_add_flow() {
        let mut session = CatalogSession::default();
        session.open_add_form().unwrap();
        assert_eq!(session.screen().name(), "add form");

        for (field, value) in [
            (ProductField::Id, "6"),
            (ProductField::Name, "Product 6"),
            (ProductField::Category, "Category 2"),
            (ProductField::Price, "3.50"),
        ] {
            session.set_add_field(field, value).unwrap();
        }

        assert_eq!(session.submit_add().unwrap(), id(6));
        assert!(session.screen().is_list());
        assert_eq!(session.store().len(), 6);
    }

    #[test]
    fn test_failed_submit_keeps_form() {
        let mut session = CatalogSession::default();
        session.open_add_form().unwrap();
        session.set_add_field(ProductField::Id, "2").unwrap();
        session.set_add_field(ProductField::Name, "Clash").unwrap();
        session.set_add_field(ProductField::Price, "1").unwrap();

        let err = session.submit_add().unwrap_err();
        assert_eq!(err.fields(), vec![ProductField::Id]);
        match session.screen() {
            Screen::AddForm(draft) => assert_eq!(draft.name, "Clash"),
            other => panic!("expected add form, got {other:?}"),
        }
        assert_eq!(session.store().len(), 5);

        session.cancel_add().unwrap();
        assert!(session.screen().is_list());
    }

    #[test]
    fn test_detail_navigation() {
        let mut session = CatalogSession::default();
        session.open_detail(id(4)).unwrap();

        assert_eq!(session.navigate(Direction::Next).unwrap().id, id(5));
        assert_eq!(session.navigate(Direction::Next).unwrap().id, id(5));
        assert_eq!(session.navigate(Direction::First).unwrap().id, id(1));
        assert_eq!(session.navigate(Direction::Previous).unwrap().id, id(1));
        assert_eq!(session.navigate(Direction::Last).unwrap().id, id(5));
    }

    #[test]
    fn test_navigation_follows_sort() {
        let mut session = CatalogSession::default();
        session.open_detail(id(1)).unwrap();
        session.sort(SortKey::Price);
        // Price order is 4, 1, 5, 3, 2.
        assert_eq!(session.navigate(Direction::Next).unwrap().id, id(5));
        assert_eq!(session.navigate(Direction::Previous).unwrap().id, id(1));
    }

    #[test]
    fn test_open_missing_detail() {
        let mut session = CatalogSession::default();
        let err = session.open_detail(id(99)).unwrap_err();
        assert!(err.is_not_found());
        assert!(session.screen().is_list());
    }

    #[test]
    fn test_delete_open_record_rebinds_detail() {
        let mut session = CatalogSession::default();
        session.open_detail(id(3)).unwrap();

        session.delete(id(3)).unwrap();
        assert_eq!(session.current_product().unwrap().id, id(4));

        session.navigate(Direction::Last).unwrap();
        session.delete(id(5)).unwrap();
        assert_eq!(session.current_product().unwrap().id, id(4));
    }

    #[test]
    fn test_delete_last_record_returns_to_list() {
        let only = Product::new(id(1), "Only", crate::price::Price::zero());
        let store = CatalogStore::new(vec![only]).unwrap();
        let mut session = CatalogSession::new(store);
        session.open_detail(id(1)).unwrap();
        session.delete(id(1)).unwrap();
        assert!(session.screen().is_list());
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_delete_other_record_keeps_detail() {
        let mut session = CatalogSession::default();
        session.open_detail(id(2)).unwrap();
        session.delete(id(5)).unwrap();
        assert_eq!(session.screen().detail_id(), Some(id(2)));
    }

    #[test]
    fn test_edit_flow() {
        let mut session = CatalogSession::default();
        session.open_detail(id(2)).unwrap();
        session.begin_edit().unwrap();
        assert_eq!(session.screen().name(), "edit");

        session.set_edit_field(ProductField::Price, "21.00").unwrap();
        session.set_edit_field(ProductField::Id, "20").unwrap();
        assert_eq!(session.save_edit().unwrap(), id(20));

        let product = session.current_product().unwrap();
        assert_eq!(product.price.cents(), 2100);
        assert_eq!(product.name, "Product 2");
        assert_eq!(session.store().position(id(20)), Some(1));
        assert!(session.store().get(id(2)).is_none());
    }

    #[test]
    fn test_invalid_edit_keeps_form_and_record() {
        let mut session = CatalogSession::default();
        session.open_detail(id(2)).unwrap();
        session.begin_edit().unwrap();
        session.set_edit_field(ProductField::Price, "NaN").unwrap();

        let err = session.save_edit().unwrap_err();
        assert_eq!(err.fields(), vec![ProductField::Price]);
        assert_eq!(session.screen().name(), "edit");
        assert_eq!(session.store().get(id(2)).unwrap().price.cents(), 1999);

        session.cancel_edit().unwrap();
        assert_eq!(session.screen().name(), "detail");
    }

    #[test]
    fn test_navigate_discards_edit() {
        let mut session = CatalogSession::default();
        session.open_detail(id(1)).unwrap();
        session.begin_edit().unwrap();
        session.set_edit_field(ProductField::Name, "Changed").unwrap();
        session.navigate(Direction::Next).unwrap();

        assert_eq!(session.screen().name(), "detail");
        assert_eq!(session.store().get(id(1)).unwrap().name, "Product 1");
    }

    #[test]
    fn test_invalid_transitions() {
        let mut session = CatalogSession::default();
        assert!(matches!(
            session.navigate(Direction::Next),
            Err(CatalogError::InvalidTransition { from: "list", .. })
        ));
        assert!(session.begin_edit().is_err());
        assert!(session.submit_add().is_err());

        session.open_add_form().unwrap();
        assert!(session.open_detail(id(1)).is_err());
        assert!(session.delete(id(1)).is_err());
        assert_eq!(session.store().len(), 5);
    }
}
