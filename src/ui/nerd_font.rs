/// Curated NerdFont glyphs used by the roster UI.
///
/// A small, consistent set rather than a full icon crate; every variant has
/// a call site in the view or the output events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NerdFont {
    // Status and feedback
    Check,   // 
    Warning, // 

    // User and social
    User,  // 
    Users, // 

    // Actions and controls
    Plus,   // 
    Edit,   // 
    Search, // 
    Filter, // 

    // Toggles
    ToggleOn,  // 
    ToggleOff, // 
}

impl From<NerdFont> for char {
    fn from(icon: NerdFont) -> Self {
        match icon {
            NerdFont::Check => '\u{f00c}',     // fa-check
            NerdFont::Warning => '\u{f071}',   // fa-exclamation-triangle
            NerdFont::User => '\u{f007}',      // fa-user
            NerdFont::Users => '\u{f0c0}',     // fa-users
            NerdFont::Plus => '\u{f067}',      // fa-plus
            NerdFont::Edit => '\u{f044}',      // fa-edit
            NerdFont::Search => '\u{f002}',    // fa-search
            NerdFont::Filter => '\u{f0b0}',    // fa-filter
            NerdFont::ToggleOn => '\u{f205}',  // fa-toggle-on
            NerdFont::ToggleOff => '\u{f204}', // fa-toggle-off
        }
    }
}
