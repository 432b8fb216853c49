use promptforge::random::ScriptedRandom;
use promptforge::storage::{KeyValueStorage, MemoryStorage};
use promptforge::store::{Dropdown, DropdownStore, OptionField, STORAGE_KEY};

/// Every selection is either empty or points at one of the dropdown's own options
fn assert_selections_valid(dropdowns: &[Dropdown]) {
    assert!(!dropdowns.is_empty(), "store must never be empty");
    for dropdown in dropdowns {
        if let Some(selected) = &dropdown.selected_option_id {
            assert!(
                dropdown.options.iter().any(|option| &option.id == selected),
                "dropdown {} selects unknown option {}",
                dropdown.id,
                selected
            );
        }
    }
}

/// One dropdown holding options "Alpha" (selected) and "Beta"
fn alpha_beta_store(storage: &MemoryStorage) -> (DropdownStore<&MemoryStorage, ScriptedRandom>, String, String, String) {
    let mut store = DropdownStore::load(storage, ScriptedRandom::seeded(2024));
    let dropdown_id = store.dropdowns()[0].id.clone();
    let alpha = store.dropdowns()[0].options[0].id.clone();
    store.update_option_field(&dropdown_id, &alpha, OptionField::Phrase, "Alpha");
    store.update_option_field(&dropdown_id, &alpha, OptionField::Language, "en");

    let beta = store.add_option(&dropdown_id).unwrap();
    store.update_option_field(&dropdown_id, &beta, OptionField::Phrase, "Beta");
    store.update_option_field(&dropdown_id, &beta, OptionField::Language, "en");

    (store, dropdown_id, alpha, beta)
}

#[test]
fn test_fresh_store_has_one_selected_option() {
    let storage = MemoryStorage::new();
    let store = DropdownStore::load(&storage, ScriptedRandom::seeded(1));

    let dropdowns = store.dropdowns();
    assert_eq!(dropdowns.len(), 1);
    assert_eq!(dropdowns[0].options.len(), 1);
    assert_eq!(
        dropdowns[0].selected_option_id.as_deref(),
        Some(dropdowns[0].options[0].id.as_str())
    );
    assert_eq!(store.unlocked_count(), 1);
    assert!(storage.get(STORAGE_KEY).is_some());
}

#[test]
fn test_deleting_original_keeps_added_dropdown() {
    let storage = MemoryStorage::new();
    let mut store = DropdownStore::load(&storage, ScriptedRandom::seeded(1));
    let original = store.dropdowns()[0].id.clone();

    let added = store.add_dropdown();
    assert_eq!(store.dropdowns().len(), 2);

    store.delete_dropdown(&original);
    assert_eq!(store.dropdowns().len(), 1);
    assert_eq!(store.dropdowns()[0].id, added);

    store.delete_dropdown(&added);
    assert_eq!(store.dropdowns().len(), 1);
    assert_ne!(store.dropdowns()[0].id, added);
    assert_selections_valid(store.dropdowns());
}

#[test]
fn test_randomize_respects_locked_selection() {
    let storage = MemoryStorage::new();
    let (mut store, dropdown_id, alpha, beta) = alpha_beta_store(&storage);
    assert_eq!(store.preview_text(), "Alpha");

    store.toggle_option_lock(&dropdown_id, &alpha);
    assert_eq!(store.unlocked_count(), 0);
    store.random_mut().script([0.9]);
    store.randomize_unlocked();
    assert_eq!(store.preview_text(), "Alpha");

    store.toggle_option_lock(&dropdown_id, &alpha);
    store.random_mut().script([0.9]);
    store.randomize_unlocked();
    assert_eq!(store.preview_text(), "Beta");
    assert_eq!(store.selected_option(&dropdown_id).map(|o| o.id.clone()), Some(beta));
}

#[test]
fn test_randomize_never_selects_locked_option() {
    let storage = MemoryStorage::new();
    let (mut store, dropdown_id, alpha, beta) = alpha_beta_store(&storage);
    let gamma = store.add_option(&dropdown_id).unwrap();
    store.toggle_option_lock(&dropdown_id, &alpha);
    store.select_option(&dropdown_id, &beta);

    for _ in 0..100 {
        store.randomize_unlocked();
        let selected = store.selected_option(&dropdown_id).unwrap().id.clone();
        assert!(selected == beta || selected == gamma);
    }
}

#[test]
fn test_locked_selection_survives_many_randomizations() {
    let storage = MemoryStorage::new();
    let (mut store, dropdown_id, alpha, _) = alpha_beta_store(&storage);
    store.add_option(&dropdown_id);
    store.add_option(&dropdown_id);
    store.toggle_option_lock(&dropdown_id, &alpha);

    for _ in 0..50 {
        store.randomize_unlocked();
        assert_eq!(store.selected_option(&dropdown_id).unwrap().id, alpha);
    }
}

#[test]
fn test_deleting_selected_options_moves_then_clears_selection() {
    let storage = MemoryStorage::new();
    let (mut store, dropdown_id, alpha, beta) = alpha_beta_store(&storage);
    let other = store.add_dropdown();
    let other_option = store.dropdown(&other).unwrap().options[0].id.clone();
    store.update_option_field(&other, &other_option, OptionField::Phrase, "tail");

    store.delete_option(&dropdown_id, &alpha);
    assert_eq!(store.dropdown(&dropdown_id).unwrap().selected_option_id, Some(beta.clone()));
    assert_eq!(store.preview_text(), "Beta tail");

    store.delete_option(&dropdown_id, &beta);
    let dropdown = store.dropdown(&dropdown_id).unwrap();
    assert!(dropdown.options.is_empty());
    assert_eq!(dropdown.selected_option_id, None);
    assert_eq!(store.preview_text(), "tail");
    assert_selections_valid(store.dropdowns());
}

#[test]
fn test_load_with_missing_fields() {
    let storage = MemoryStorage::with_value(STORAGE_KEY, r#"[{"id":"d1","name":"Style"}]"#);
    let store = DropdownStore::load(&storage, ScriptedRandom::seeded(1));

    let dropdowns = store.dropdowns();
    assert_eq!(dropdowns.len(), 1);
    assert_eq!(dropdowns[0].id, "d1");
    assert!(dropdowns[0].options.is_empty());
    assert_eq!(dropdowns[0].selected_option_id, None);
    assert_eq!(store.unlocked_count(), 1);
    assert_eq!(store.preview_text(), "");
}

#[test]
fn test_malformed_state_starts_fresh() {
    let storage = MemoryStorage::with_value(STORAGE_KEY, r#"{"dropdowns": []}"#);
    let store = DropdownStore::load(&storage, ScriptedRandom::seeded(1));

    assert_eq!(store.dropdowns().len(), 1);
    assert_eq!(store.dropdowns()[0].options.len(), 1);
    assert!(storage.get(STORAGE_KEY).unwrap().starts_with('['));
}

#[test]
fn test_empty_array_is_repaired() {
    let storage = MemoryStorage::with_value(STORAGE_KEY, "[]");
    let store = DropdownStore::load(&storage, ScriptedRandom::seeded(1));

    assert_eq!(store.dropdowns().len(), 1);
    assert_eq!(storage.save_count(), 1);
}

#[test]
fn test_state_survives_reload() {
    let storage = MemoryStorage::new();
    let (mut store, dropdown_id, alpha, beta) = alpha_beta_store(&storage);
    store.rename_dropdown(&dropdown_id, "Characters");
    store.toggle_option_lock(&dropdown_id, &beta);
    store.select_option(&dropdown_id, &beta);
    let before = store.dropdowns().to_vec();
    drop(store);

    let reloaded = DropdownStore::load(&storage, ScriptedRandom::seeded(99));

    assert_eq!(reloaded.dropdowns(), before.as_slice());
    assert_eq!(reloaded.dropdown(&dropdown_id).unwrap().option(&alpha).unwrap().phrase, "Alpha");
}

#[test]
fn test_every_change_is_written() {
    let storage = MemoryStorage::new();
    let (mut store, dropdown_id, _, _) = alpha_beta_store(&storage);
    let saves = storage.save_count();

    store.rename_dropdown(&dropdown_id, "Characters");
    assert_eq!(storage.save_count(), saves + 1);
    assert!(storage.load(STORAGE_KEY).unwrap().unwrap().contains("Characters"));

    store.rename_dropdown(&dropdown_id, "Characters");
    assert_eq!(storage.save_count(), saves + 1);
}

#[test]
fn test_toggle_lock_twice_changes_nothing_else() {
    let storage = MemoryStorage::new();
    let (mut store, dropdown_id, alpha, _) = alpha_beta_store(&storage);
    let before = store.dropdowns().to_vec();

    store.toggle_option_lock(&dropdown_id, &alpha);
    store.toggle_option_lock(&dropdown_id, &alpha);

    assert_eq!(store.dropdowns(), before.as_slice());
}

#[test]
fn test_mutations_leave_siblings_untouched() {
    let storage = MemoryStorage::new();
    let (mut store, dropdown_id, alpha, _) = alpha_beta_store(&storage);
    let other = store.add_dropdown();
    let sibling = store.dropdown(&other).unwrap().clone();

    store.update_option_field(&dropdown_id, &alpha, OptionField::Phrase, "Changed");
    store.toggle_option_lock(&dropdown_id, &alpha);
    store.rename_dropdown(&dropdown_id, "Renamed");

    assert_eq!(store.dropdown(&other), Some(&sibling));
}
