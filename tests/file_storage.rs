use promptforge::random::ScriptedRandom;
use promptforge::storage::FileStorage;
use promptforge::store::{DropdownStore, OptionField, STORAGE_KEY};

#[test]
fn test_state_persists_across_sessions() {
    let dir = tempfile::tempdir().unwrap();

    let dropdown_id = {
        let mut store = DropdownStore::load(FileStorage::new(dir.path()), ScriptedRandom::seeded(7));
        let dropdown_id = store.dropdowns()[0].id.clone();
        let option_id = store.dropdowns()[0].options[0].id.clone();
        store.rename_dropdown(&dropdown_id, "Characters");
        store.update_option_field(&dropdown_id, &option_id, OptionField::Phrase, "Curious fox");
        dropdown_id
    };

    let stored = std::fs::read_to_string(FileStorage::new(dir.path()).path_for(STORAGE_KEY)).unwrap();
    assert!(stored.contains("Characters"));
    assert!(stored.contains("Curious fox"));

    let store = DropdownStore::load(FileStorage::new(dir.path()), ScriptedRandom::seeded(8));
    assert_eq!(store.dropdowns().len(), 1);
    assert_eq!(store.dropdowns()[0].id, dropdown_id);
    assert_eq!(store.preview_text(), "Curious fox");
}

#[test]
fn test_corrupt_file_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    std::fs::write(storage.path_for(STORAGE_KEY), "not json at all").unwrap();

    let store = DropdownStore::load(storage.clone(), ScriptedRandom::seeded(7));

    assert_eq!(store.dropdowns().len(), 1);
    let stored = std::fs::read_to_string(storage.path_for(STORAGE_KEY)).unwrap();
    assert!(stored.starts_with('['));
}

#[test]
fn test_unwritable_directory_does_not_break_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "file, not directory").unwrap();

    let mut store = DropdownStore::load(FileStorage::new(&blocker), ScriptedRandom::seeded(7));
    assert!(store.last_save_error().is_some());

    let added = store.add_dropdown();
    assert_eq!(store.dropdowns().len(), 2);
    assert_eq!(store.dropdowns()[1].id, added);
}
