use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Switch,
    Item,
}

/// An open selection menu. `entries` are roster indices (creatures for
/// [`MenuKind::Switch`], items for [`MenuKind::Item`]) captured when the menu
/// opened.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PendingMenu {
    pub kind: MenuKind,
    pub entries: Vec<usize>,
    pub cursor: usize,
}

impl PendingMenu {
    /// Opens a menu, or returns `None` when there is nothing to choose.
    pub fn open(kind: MenuKind, entries: Vec<usize>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            entries,
            cursor: 0,
        })
    }

    pub fn move_up(&mut self) {
        let len = self.entries.len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % self.entries.len();
    }

    /// Roster index under the cursor.
    pub fn selected(&self) -> Option<usize> {
        self.entries.get(self.cursor).copied()
    }
}
