//! Types for the pipeline module.

use std::path::{Path, PathBuf};

use crate::catalog::CatalogEntry;

/// Lifecycle of one item through its task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Pending,
    Downloading,
    Converting,
    Tagging,
    Done,
    Failed,
}

/// A catalog entry stamped with its stable position and retry budget.
///
/// Positions form a contiguous 1-based range in catalog order. After
/// dispatch, each item is exclusively owned by its task; nothing else
/// mutates it.
#[derive(Debug, Clone)]
pub struct OrderedItem {
    pub entry: CatalogEntry,
    /// 1-based position in the catalog, never reassigned.
    pub position: u32,
    /// Extra download attempts left; decremented only by a failed attempt.
    pub retries_remaining: u32,
    pub state: ItemState,
}

impl OrderedItem {
    pub fn new(entry: CatalogEntry, position: u32, retry_budget: u32) -> Self {
        Self {
            entry,
            position,
            retries_remaining: retry_budget,
            state: ItemState::Pending,
        }
    }

    /// Filename stem shared by the intermediate and final artifacts.
    fn file_stem(&self) -> String {
        format!("{} - {}", self.position, sanitize_title(&self.entry.title))
    }

    /// Path of the raw downloaded file.
    pub fn raw_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.m4a", self.file_stem()))
    }

    /// Path of the converted final artifact.
    pub fn final_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.mp3", self.file_stem()))
    }
}

/// Strip characters that would break the deterministic output path.
fn sanitize_title(title: &str) -> String {
    title.replace(['/', '\0'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(position: u32, title: &str) -> OrderedItem {
        OrderedItem::new(
            CatalogEntry {
                video_id: "id".to_string(),
                title: title.to_string(),
            },
            position,
            1,
        )
    }

    #[test]
    fn test_new_item_is_pending_with_budget() {
        let item = item(1, "Track");
        assert_eq!(item.state, ItemState::Pending);
        assert_eq!(item.retries_remaining, 1);
    }

    #[test]
    fn test_paths_derive_from_position_and_title() {
        let item = item(3, "Fancy Track");
        let dir = Path::new("/out");
        assert_eq!(item.raw_path(dir), PathBuf::from("/out/3 - Fancy Track.m4a"));
        assert_eq!(
            item.final_path(dir),
            PathBuf::from("/out/3 - Fancy Track.mp3")
        );
    }

    #[test]
    fn test_paths_are_deterministic() {
        let a = item(7, "Same Title");
        let b = item(7, "Same Title");
        let dir = Path::new("/out");
        assert_eq!(a.raw_path(dir), b.raw_path(dir));
        assert_eq!(a.final_path(dir), b.final_path(dir));
    }

    #[test]
    fn test_title_path_separators_sanitized() {
        let item = item(1, "AC/DC - Back In Black");
        let raw = item.raw_path(Path::new("/out"));
        assert_eq!(raw, PathBuf::from("/out/1 - AC_DC - Back In Black.m4a"));
    }
}
