use super::models::{Draft, StatusFilter, User};

/// Owner of the authoritative user collection.
///
/// The only component permitted to mutate the list. Ids come from a
/// monotonic counter, so they stay unique for the lifetime of the store and
/// are never reused after a delete. Every mutation degrades to a silent
/// no-op when its precondition fails and reports whether the collection
/// changed.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-filled with the demo roster.
    pub fn with_seed_users() -> Self {
        let users = vec![
            User {
                id: 1,
                name: "Ali".to_string(),
                status: false,
            },
            User {
                id: 2,
                name: "Sara".to_string(),
                status: true,
            },
            User {
                id: 3,
                name: "John".to_string(),
                status: false,
            },
        ];
        let next_id = users.iter().map(|user| user.id).max().unwrap_or(0) + 1;
        Self { users, next_id }
    }

    /// All users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn active_count(&self) -> usize {
        self.users.iter().filter(|user| user.status).count()
    }

    /// Append a new user built from the draft, assigning a fresh id.
    ///
    /// The draft's status is ignored; new users start inactive. No-op when
    /// the trimmed name is empty.
    pub fn add_user(&mut self, draft: &Draft) -> bool {
        if !draft.has_name() {
            return false;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.users.push(User {
            id,
            name: draft.name.clone(),
            status: false,
        });
        true
    }

    /// Replace the fields of the user matching the draft's id.
    ///
    /// The id itself is unchanged. No-op when the trimmed name is empty,
    /// the draft carries no id, or no user with that id exists.
    pub fn update_user(&mut self, draft: &Draft) -> bool {
        if !draft.has_name() {
            return false;
        }
        let Some(id) = draft.id else {
            return false;
        };

        match self.users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.name = draft.name.clone();
                user.status = draft.status;
                true
            }
            None => false,
        }
    }

    /// Remove the user with the given id, if present.
    pub fn delete_user(&mut self, id: u64) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        self.users.len() != before
    }

    /// Flip the status of the user with the given id, if present.
    /// Independent of modal state.
    pub fn toggle_status(&mut self, id: u64) -> bool {
        match self.users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.status = !user.status;
                true
            }
            None => false,
        }
    }
}

/// Ordered subsequence of `users` whose name contains `search` as a
/// case-insensitive substring and whose status matches `filter`.
///
/// An empty search term matches every name. Derived fresh on every call;
/// nothing is cached.
pub fn filter_users<'a>(users: &'a [User], search: &str, filter: StatusFilter) -> Vec<&'a User> {
    let needle = search.to_lowercase();
    users
        .iter()
        .filter(|user| user.name.to_lowercase().contains(&needle) && filter.matches(user.status))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, status: bool) -> Draft {
        Draft {
            id: None,
            name: name.to_string(),
            status,
        }
    }

    fn two_user_store() -> UserStore {
        let mut store = UserStore::new();
        store.add_user(&draft("Ali", false));
        store.add_user(&draft("Sara", false));
        store.toggle_status(2);
        store
    }

    #[test]
    fn add_rejects_empty_and_whitespace_names() {
        let mut store = UserStore::new();

        assert!(!store.add_user(&draft("", false)));
        assert!(!store.add_user(&draft("  ", true)));
        assert!(store.users().is_empty());
    }

    #[test]
    fn add_assigns_fresh_id_and_starts_inactive() {
        let mut store = UserStore::new();

        assert!(store.add_user(&draft("Neo", true)));

        let user = &store.users()[0];
        assert_eq!(user.name, "Neo");
        assert!(!user.status, "draft status must be ignored on add");

        assert!(store.add_user(&draft("Trinity", false)));
        let ids: Vec<u64> = store.users().iter().map(|user| user.id).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = UserStore::new();
        store.add_user(&draft("Ali", false));
        let first_id = store.users()[0].id;

        assert!(store.delete_user(first_id));
        store.add_user(&draft("Sara", false));

        assert_ne!(store.users()[0].id, first_id);
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let mut store = two_user_store();
        let id = store.users()[0].id;

        let changed = store.update_user(&Draft {
            id: Some(id),
            name: "Alison".to_string(),
            status: true,
        });

        assert!(changed);
        assert_eq!(store.users().len(), 2);
        let user = &store.users()[0];
        assert_eq!(user.id, id);
        assert_eq!(user.name, "Alison");
        assert!(user.status);
    }

    #[test]
    fn update_ignores_whitespace_name_missing_id_and_unknown_id() {
        let mut store = two_user_store();
        let before = store.users().to_vec();

        assert!(!store.update_user(&Draft {
            id: Some(1),
            name: "   ".to_string(),
            status: true,
        }));
        assert!(!store.update_user(&draft("Ghost", true)));
        assert!(!store.update_user(&Draft {
            id: Some(999),
            name: "Ghost".to_string(),
            status: true,
        }));

        assert_eq!(store.users(), before.as_slice());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = two_user_store();

        assert!(store.delete_user(1));
        assert!(!store.delete_user(1));
        assert_eq!(store.users().len(), 1);
        assert_eq!(store.users()[0].name, "Sara");
    }

    #[test]
    fn toggle_twice_restores_status() {
        let mut store = two_user_store();
        let original = store.users()[0].status;

        assert!(store.toggle_status(1));
        assert_ne!(store.users()[0].status, original);
        assert!(store.toggle_status(1));
        assert_eq!(store.users()[0].status, original);

        assert!(!store.toggle_status(999));
    }

    #[test]
    fn empty_search_and_all_filter_return_everything_in_order() {
        let store = two_user_store();

        let visible = filter_users(store.users(), "", StatusFilter::All);

        let names: Vec<&str> = visible.iter().map(|user| user.name.as_str()).collect();
        assert_eq!(names, ["Ali", "Sara"]);
    }

    #[test]
    fn search_matches_case_insensitive_substrings() {
        let store = two_user_store();

        let visible = filter_users(store.users(), "sa", StatusFilter::All);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Sara");
    }

    #[test]
    fn status_filter_restricts_by_status() {
        let store = two_user_store();

        let active = filter_users(store.users(), "", StatusFilter::Active);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Sara");

        let inactive = filter_users(store.users(), "", StatusFilter::Inactive);
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].name, "Ali");
    }

    #[test]
    fn search_and_status_filter_combine() {
        let store = two_user_store();

        assert!(filter_users(store.users(), "sa", StatusFilter::Inactive).is_empty());
        assert_eq!(
            filter_users(store.users(), "sa", StatusFilter::Active).len(),
            1
        );
    }

    #[test]
    fn seed_roster_matches_the_demo_data() {
        let store = UserStore::with_seed_users();

        let names: Vec<&str> = store.users().iter().map(|user| user.name.as_str()).collect();
        assert_eq!(names, ["Ali", "Sara", "John"]);
        assert_eq!(store.active_count(), 1);

        // The counter must continue past the seed ids.
        let mut store = store;
        store.add_user(&draft("Neo", false));
        assert_eq!(store.users().last().map(|user| user.id), Some(4));
    }
}
