use super::models::{Draft, StatusFilter, User};
use super::store::UserStore;

/// Which form the modal is showing, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    OpenForAdd,
    OpenForEdit,
}

/// Transient UI session: the modal state machine plus the current search
/// term and status filter.
///
/// Draft and search edits only ever touch session state; the store is not
/// involved until [`ManagerSession::save`]. The machine has no terminal
/// state and cycles indefinitely.
#[derive(Debug, Default)]
pub struct ManagerSession {
    modal: ModalState,
    draft: Draft,
    search: String,
    status_filter: StatusFilter,
}

impl ManagerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal != ModalState::Closed
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// Open the modal with an empty draft.
    pub fn open_add(&mut self) {
        self.draft = Draft::new();
        self.modal = ModalState::OpenForAdd;
    }

    /// Open the modal with a copy of `user`.
    pub fn open_edit(&mut self, user: &User) {
        self.draft = Draft::for_user(user);
        self.modal = ModalState::OpenForEdit;
    }

    /// Commit the draft through the store and close the modal.
    ///
    /// Closes regardless of whether the store accepted the draft; returns
    /// whether the collection changed.
    pub fn save(&mut self, store: &mut UserStore) -> bool {
        let changed = match self.modal {
            ModalState::OpenForAdd => store.add_user(&self.draft),
            ModalState::OpenForEdit => store.update_user(&self.draft),
            ModalState::Closed => false,
        };
        self.close();
        changed
    }

    /// Close the modal without touching the collection.
    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.draft = Draft::new();
        self.modal = ModalState::Closed;
    }

    pub fn push_draft_name(&mut self, ch: char) {
        self.draft.name.push(ch);
    }

    pub fn pop_draft_name(&mut self) {
        self.draft.name.pop();
    }

    pub fn toggle_draft_status(&mut self) {
        self.draft.status = !self.draft.status;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn push_search(&mut self, ch: char) {
        self.search.push(ch);
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> UserStore {
        let mut store = UserStore::new();
        for name in names {
            store.add_user(&Draft {
                id: None,
                name: name.to_string(),
                status: false,
            });
        }
        store
    }

    #[test]
    fn open_add_resets_the_draft() {
        let mut session = ManagerSession::new();
        session.push_draft_name('x');

        session.open_add();

        assert_eq!(session.modal(), ModalState::OpenForAdd);
        assert_eq!(session.draft(), &Draft::new());
    }

    #[test]
    fn open_edit_copies_the_user() {
        let mut session = ManagerSession::new();
        let user = User {
            id: 7,
            name: "Sara".to_string(),
            status: true,
        };

        session.open_edit(&user);

        assert_eq!(session.modal(), ModalState::OpenForEdit);
        let draft = session.draft();
        assert_eq!(draft.id, Some(7));
        assert_eq!(draft.name, "Sara");
        assert!(draft.status);
    }

    #[test]
    fn save_in_add_mode_appends_and_closes() {
        let mut store = store_with(&[]);
        let mut session = ManagerSession::new();

        session.open_add();
        for ch in "Neo".chars() {
            session.push_draft_name(ch);
        }
        let changed = session.save(&mut store);

        assert!(changed);
        assert_eq!(session.modal(), ModalState::Closed);
        assert_eq!(session.draft(), &Draft::new());
        assert_eq!(store.users().len(), 1);
        assert_eq!(store.users()[0].name, "Neo");
    }

    #[test]
    fn save_closes_even_when_the_store_rejects_the_draft() {
        let mut store = store_with(&["Ali"]);
        let mut session = ManagerSession::new();

        session.open_add();
        session.push_draft_name(' ');
        let changed = session.save(&mut store);

        assert!(!changed);
        assert_eq!(session.modal(), ModalState::Closed);
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn save_in_edit_mode_updates_the_target() {
        let mut store = store_with(&["Ali"]);
        let mut session = ManagerSession::new();
        let user = store.users()[0].clone();

        session.open_edit(&user);
        session.toggle_draft_status();
        session.push_draft_name('!');
        let changed = session.save(&mut store);

        assert!(changed);
        assert_eq!(session.modal(), ModalState::Closed);
        let updated = &store.users()[0];
        assert_eq!(updated.id, user.id);
        assert_eq!(updated.name, "Ali!");
        assert!(updated.status);
    }

    #[test]
    fn save_while_closed_is_a_noop() {
        let mut store = store_with(&["Ali"]);
        let mut session = ManagerSession::new();

        assert!(!session.save(&mut store));
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn cancel_discards_the_draft_without_mutating_the_store() {
        let mut store = store_with(&["Ali"]);
        let mut session = ManagerSession::new();
        let before = store.users().to_vec();

        session.open_edit(&store.users()[0].clone());
        session.push_draft_name('x');
        session.toggle_draft_status();
        session.cancel();

        assert_eq!(session.modal(), ModalState::Closed);
        assert_eq!(session.draft(), &Draft::new());
        assert_eq!(store.users(), before.as_slice());
    }

    #[test]
    fn draft_edits_never_touch_the_store_before_save() {
        let mut store = store_with(&["Ali"]);
        let session_store = store.users().to_vec();
        let mut session = ManagerSession::new();

        session.open_edit(&store.users()[0].clone());
        for ch in "son".chars() {
            session.push_draft_name(ch);
        }
        session.toggle_draft_status();

        assert_eq!(store.users(), session_store.as_slice());
        session.save(&mut store);
        assert_eq!(store.users()[0].name, "Alison");
    }

    #[test]
    fn search_edits_round_trip() {
        let mut session = ManagerSession::new();

        session.push_search('S');
        session.push_search('a');
        assert_eq!(session.search(), "Sa");

        session.pop_search();
        assert_eq!(session.search(), "S");

        session.set_search("");
        assert_eq!(session.search(), "");
        session.pop_search();
        assert_eq!(session.search(), "");
    }

    #[test]
    fn status_filter_cycles_through_all_states() {
        let mut session = ManagerSession::new();
        assert_eq!(session.status_filter(), StatusFilter::All);

        session.set_status_filter(session.status_filter().cycle());
        assert_eq!(session.status_filter(), StatusFilter::Active);

        session.set_status_filter(session.status_filter().cycle());
        assert_eq!(session.status_filter(), StatusFilter::Inactive);

        session.set_status_filter(session.status_filter().cycle());
        assert_eq!(session.status_filter(), StatusFilter::All);
    }
}
