/// Keyboard commands the editor core understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorShortcut {
    Undo,
    Redo,
}

impl EditorShortcut {
    /// Map a key press to a command
    ///
    /// `ctrl` covers both Ctrl and Cmd. Ctrl+Z undoes, Ctrl+Y and
    /// Ctrl+Shift+Z redo.
    pub fn from_key(key: &str, ctrl: bool, shift: bool) -> Option<Self> {
        if !ctrl {
            return None;
        }
        match (key.to_ascii_lowercase().as_str(), shift) {
            ("z", false) => Some(EditorShortcut::Undo),
            ("z", true) | ("y", false) => Some(EditorShortcut::Redo),
            _ => None,
        }
    }
}
