use crate::{MediaId, MediaItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Selection state for the full-screen viewer: either closed, or viewing one
/// media item identified by id. Navigation re-resolves the position in the
/// list passed at call time, never through a cached index, so a re-sorted
/// list is picked up transparently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryNavigator {
    selected: Option<MediaId>,
}

impl GalleryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, id: MediaId) {
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<MediaId> {
        self.selected
    }

    pub fn selected_item<'a>(&self, medias: &'a [MediaItem]) -> Option<&'a MediaItem> {
        let id = self.selected?;
        medias.iter().find(|media| media.id == id)
    }

    /// Steps the selection one item forward or back, wrapping at both ends.
    /// A no-op when closed or when the selected id is no longer in `medias`.
    pub fn navigate(&mut self, medias: &[MediaItem], direction: Direction) {
        let Some(current) = self.selected else {
            return;
        };
        let Some(position) = medias.iter().position(|media| media.id == current) else {
            return;
        };

        let next = match direction {
            Direction::Previous => position.checked_sub(1).unwrap_or(medias.len() - 1),
            Direction::Next => {
                if position + 1 >= medias.len() {
                    0
                } else {
                    position + 1
                }
            }
        };
        self.selected = Some(medias[next].id);
    }
}
