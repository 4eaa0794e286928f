use serde::{Deserialize, Serialize};

/// A managed account in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub status: bool,
}

impl User {
    pub fn status_label(&self) -> &'static str {
        if self.status { "Active" } else { "Inactive" }
    }
}

/// Uncommitted form state for the user currently being created or edited.
///
/// Same shape as [`User`], but the id is absent until the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub id: Option<u64>,
    pub name: String,
    pub status: bool,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing user for editing.
    pub fn for_user(user: &User) -> Self {
        Self {
            id: Some(user.id),
            name: user.name.clone(),
            status: user.status,
        }
    }

    /// Whether the draft names someone. Only the trimmed value is checked;
    /// the name itself is committed as typed.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Restricts the displayed subset by the `status` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(self, status: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status,
            StatusFilter::Inactive => !status,
        }
    }

    /// Next filter in the Tab cycle.
    pub fn cycle(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Inactive,
            StatusFilter::Inactive => StatusFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }
}
