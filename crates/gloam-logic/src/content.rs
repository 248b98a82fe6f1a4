//! Manor content records and validation.
//!
//! Everything the rooms display (panel copy, archive entries, the skill
//! list, gallery pieces) is plain data handed to the scene builders and
//! never mutated by them. Validation runs before any session is built and
//! reports every problem found, not just the first.

use serde::{Deserialize, Serialize};

use crate::color::Rgb8;

/// The rooms a visitor can stand in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKey {
    /// The yard and facade outside the manor.
    Exterior,
    /// The entrance hall with the doors and the staircase.
    Hall,
    /// Education, behind the left blue door.
    Archive,
    /// Skills, behind the back green door.
    Library,
    /// Works, up the stairs.
    Gallery,
    /// Experience, behind the right amber door.
    Vault,
}

impl RoomKey {
    pub const ALL: [RoomKey; 6] = [
        RoomKey::Exterior,
        RoomKey::Hall,
        RoomKey::Archive,
        RoomKey::Library,
        RoomKey::Gallery,
        RoomKey::Vault,
    ];

    /// Where "exit" from this room leads.
    pub fn parent(&self) -> Option<RoomKey> {
        match self {
            RoomKey::Exterior => None,
            RoomKey::Hall => Some(RoomKey::Exterior),
            _ => Some(RoomKey::Hall),
        }
    }
}

/// Overlay panels the viewer can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelKey {
    Resident,
    Archive,
    Library,
    Vault,
    Gallery,
}

impl PanelKey {
    /// The room a double activation on this panel's prop leads to.
    pub fn room(&self) -> Option<RoomKey> {
        match self {
            PanelKey::Resident => None,
            PanelKey::Archive => Some(RoomKey::Archive),
            PanelKey::Library => Some(RoomKey::Library),
            PanelKey::Vault => Some(RoomKey::Vault),
            PanelKey::Gallery => Some(RoomKey::Gallery),
        }
    }
}

/// Copy for one overlay panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelCopy {
    pub title: String,
    pub subtitle: String,
    /// Hex accent, e.g. "#44aaee".
    pub accent: String,
    pub body: String,
}

impl PanelCopy {
    pub fn accent_color(&self) -> Rgb8 {
        Rgb8::parse_or(&self.accent, Rgb8::new(0x88, 0x88, 0x88))
    }
}

/// One slide in the archive projector (and one plaque in the vault).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub heading: String,
    pub years: String,
    pub body: String,
}

/// One framed piece in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub name: String,
    pub caption: String,
}

/// Everything the manor displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManorContent {
    pub resident: PanelCopy,
    pub archive_panel: PanelCopy,
    pub archive: Vec<ArchiveEntry>,
    pub library_panel: PanelCopy,
    pub library: Vec<String>,
    pub vault_panel: PanelCopy,
    pub vault: Vec<ArchiveEntry>,
    pub gallery_panel: PanelCopy,
    pub gallery: Vec<WorkItem>,
}

impl ManorContent {
    pub fn panel(&self, key: PanelKey) -> &PanelCopy {
        match key {
            PanelKey::Resident => &self.resident,
            PanelKey::Archive => &self.archive_panel,
            PanelKey::Library => &self.library_panel,
            PanelKey::Vault => &self.vault_panel,
            PanelKey::Gallery => &self.gallery_panel,
        }
    }
}

impl Default for ManorContent {
    fn default() -> Self {
        let copy = |title: &str, subtitle: &str, accent: &str, body: &str| PanelCopy {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            accent: accent.to_string(),
            body: body.to_string(),
        };
        let entry = |heading: &str, years: &str, body: &str| ArchiveEntry {
            heading: heading.to_string(),
            years: years.to_string(),
            body: body.to_string(),
        };
        Self {
            resident: copy(
                "E. Blackwood",
                "Resident of the Manor",
                "#c49850",
                "An engineer haunting the boundary between software and \
                 scenery. Builds walkable worlds, procedural rooms, and \
                 interfaces that creak pleasantly when used.",
            ),
            archive_panel: copy(
                "Education",
                "The Archive",
                "#44aaee",
                "Years catalogued in the upstairs archive: formal study of \
                 computation, mathematics, and the quieter arts of systems \
                 that keep running after midnight.",
            ),
            archive: vec![
                entry(
                    "Candlewick Institute",
                    "2014 - 2018",
                    "Degree in computer science. Thesis on real-time \
                     rendering of procedurally generated interiors, examined \
                     by lamplight.",
                ),
                entry(
                    "The Night College",
                    "2018 - 2020",
                    "Graduate work in graphics and simulation. Taught the \
                     introductory course on geometry that refuses to stay \
                     still.",
                ),
                entry(
                    "Self-Directed Wing",
                    "2020 - present",
                    "A standing study of engines, compilers, and whatever \
                     else the library delivers through the dumbwaiter.",
                ),
            ],
            library_panel: copy(
                "Skills",
                "The Library",
                "#88ee44",
                "Shelved by the resident: real-time rendering, procedural \
                 texture work, scene graph surgery, input systems, and the \
                 patience to profile all of it.",
            ),
            library: vec![
                "Real-Time Rendering".to_string(),
                "Procedural Textures".to_string(),
                "Scene Graphs".to_string(),
                "Raycast Interaction".to_string(),
                "Animation Systems".to_string(),
                "ECS Architecture".to_string(),
                "Creative Coding".to_string(),
                "Shader Sketching".to_string(),
                "Performance Tuning".to_string(),
            ],
            vault_panel: copy(
                "Experience",
                "The Vault",
                "#ee9944",
                "Engagements kept under lock: product teams led, renderers \
                 rescued, and interfaces shipped to visitors who never saw \
                 the machinery behind the wallpaper.",
            ),
            vault: vec![
                entry(
                    "Keeper of Interfaces",
                    "2022 - present",
                    "Leads the front-of-house engineering at a studio of \
                     modest renown. Responsible for everything a visitor can \
                     click.",
                ),
                entry(
                    "Journeyman Renderer",
                    "2019 - 2022",
                    "Built visualization tools and kept the frame times \
                     respectable. On call for any scene that started \
                     flickering without permission.",
                ),
            ],
            gallery_panel: copy(
                "Works",
                "The Gallery",
                "#cc3333",
                "Hung upstairs: immersive rooms, browser toys, and renderers \
                 of questionable necessity but undeniable atmosphere.",
            ),
            gallery: vec![
                WorkItem {
                    name: "The Drowned Atlas".to_string(),
                    caption: "A navigable map that floods as you browse it.".to_string(),
                },
                WorkItem {
                    name: "Stairwell No. 9".to_string(),
                    caption: "An endless procedural stairwell with one exit.".to_string(),
                },
                WorkItem {
                    name: "Lantern Protocol".to_string(),
                    caption: "Real-time lighting toy driven by handwriting.".to_string(),
                },
                WorkItem {
                    name: "The Quiet Engine".to_string(),
                    caption: "A renderer that degrades gracefully to prose.".to_string(),
                },
            ],
        }
    }
}

/// Content validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A panel's title is empty.
    EmptyTitle(PanelKey),
    /// A panel's accent string does not parse as a hex color.
    BadAccent(PanelKey, String),
    /// A room's entry list is empty.
    NoEntries(RoomKey),
    /// An archive or vault entry has no heading.
    EmptyHeading(RoomKey, usize),
    /// A gallery piece has no name.
    UnnamedWork(usize),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::EmptyTitle(key) => write!(f, "panel {key:?} has an empty title"),
            ContentError::BadAccent(key, s) => {
                write!(f, "panel {key:?} accent {s:?} is not a hex color")
            }
            ContentError::NoEntries(room) => write!(f, "room {room:?} has no entries"),
            ContentError::EmptyHeading(room, idx) => {
                write!(f, "room {room:?} entry {idx} has an empty heading")
            }
            ContentError::UnnamedWork(idx) => write!(f, "gallery piece {idx} has no name"),
        }
    }
}

impl std::error::Error for ContentError {}

/// Validate content, returning all errors found.
pub fn validate_content(content: &ManorContent) -> Vec<ContentError> {
    let mut errors = Vec::new();

    let panels = [
        (PanelKey::Resident, &content.resident),
        (PanelKey::Archive, &content.archive_panel),
        (PanelKey::Library, &content.library_panel),
        (PanelKey::Vault, &content.vault_panel),
        (PanelKey::Gallery, &content.gallery_panel),
    ];
    for (key, copy) in panels {
        if copy.title.trim().is_empty() {
            errors.push(ContentError::EmptyTitle(key));
        }
        if Rgb8::parse(&copy.accent).is_none() {
            errors.push(ContentError::BadAccent(key, copy.accent.clone()));
        }
    }

    if content.archive.is_empty() {
        errors.push(ContentError::NoEntries(RoomKey::Archive));
    }
    if content.library.is_empty() {
        errors.push(ContentError::NoEntries(RoomKey::Library));
    }
    if content.vault.is_empty() {
        errors.push(ContentError::NoEntries(RoomKey::Vault));
    }
    if content.gallery.is_empty() {
        errors.push(ContentError::NoEntries(RoomKey::Gallery));
    }

    for (room, entries) in [(RoomKey::Archive, &content.archive), (RoomKey::Vault, &content.vault)] {
        for (idx, entry) in entries.iter().enumerate() {
            if entry.heading.trim().is_empty() {
                errors.push(ContentError::EmptyHeading(room, idx));
            }
        }
    }

    for (idx, piece) in content.gallery.iter().enumerate() {
        if piece.name.trim().is_empty() {
            errors.push(ContentError::UnnamedWork(idx));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_validates_clean() {
        assert!(validate_content(&ManorContent::default()).is_empty());
    }

    #[test]
    fn test_validation_collects_every_error() {
        let mut content = ManorContent::default();
        content.resident.title = "  ".to_string();
        content.archive_panel.accent = "midnight".to_string();
        content.gallery.clear();
        let errors = validate_content(&content);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ContentError::EmptyTitle(PanelKey::Resident)));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ContentError::BadAccent(PanelKey::Archive, _))));
        assert!(errors.contains(&ContentError::NoEntries(RoomKey::Gallery)));
    }

    #[test]
    fn test_entry_headings_are_checked() {
        let mut content = ManorContent::default();
        content.vault[0].heading = String::new();
        let errors = validate_content(&content);
        assert_eq!(errors, vec![ContentError::EmptyHeading(RoomKey::Vault, 0)]);
    }

    #[test]
    fn test_room_parents_form_two_levels() {
        assert_eq!(RoomKey::Exterior.parent(), None);
        assert_eq!(RoomKey::Hall.parent(), Some(RoomKey::Exterior));
        for room in [RoomKey::Archive, RoomKey::Library, RoomKey::Gallery, RoomKey::Vault] {
            assert_eq!(room.parent(), Some(RoomKey::Hall));
        }
    }
}
