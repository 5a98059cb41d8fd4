use super::*;
use crate::doc::{ElementFields, ElementId, ElementKind};

fn element(seq: u64) -> Element {
    let fields = ElementFields::default();
    Element {
        id: ElementId::from_seq(seq),
        kind: ElementKind::Label,
        top: fields.top,
        left: fields.left,
        text: fields.text,
        font_size: fields.font_size,
        font_weight: fields.font_weight,
    }
}

#[test]
fn new_repository_loads_none() {
    let repo = MemoryRepository::new();
    assert!(repo.load().unwrap().is_none());
    assert!(repo.raw().is_none());
    assert_eq!(repo.save_count(), 0);
}

#[test]
fn save_then_load() {
    let mut repo = MemoryRepository::new();
    repo.save(&[element(0), element(1)]).unwrap();
    let loaded = repo.load().unwrap().unwrap();
    assert_eq!(loaded, vec![element(0), element(1)]);
    assert_eq!(repo.save_count(), 1);
}

#[test]
fn clones_share_the_slot() {
    let repo = MemoryRepository::new();
    let mut writer = repo.clone();
    writer.save(&[element(3)]).unwrap();
    assert_eq!(repo.load().unwrap().unwrap(), vec![element(3)]);
    assert_eq!(repo.save_count(), 1);
}

#[test]
fn saved_text_is_compact_json() {
    let mut repo = MemoryRepository::new();
    repo.save(&[]).unwrap();
    assert_eq!(repo.raw().as_deref(), Some("[]"));
}

#[test]
fn corrupt_text_reports_snapshot_error() {
    let repo = MemoryRepository::with_raw("[1, 2");
    let err = repo.load().unwrap_err();
    assert!(matches!(err, StorageError::Snapshot(SnapshotError::Decode(_))));
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(StorageError::Read("denied".to_owned()).to_string(), "storage read failed: denied");
    assert_eq!(StorageError::Write("quota".to_owned()).to_string(), "storage write failed: quota");
}
