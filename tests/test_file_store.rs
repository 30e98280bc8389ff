mod helpers;

use anyhow::Result;
use helpers::TestStore;
use jotter::application::NoteRepository;
use std::fs;

#[test]
fn given_saved_note_when_listing_then_round_trips_title_and_body() -> Result<()> {
    // Arrange
    let store = TestStore::new()?;
    let mut repository = store.open_repository();

    // Act
    repository.save_note("Groceries", "Milk, eggs, bread")?;
    let notes = repository.list_notes()?;

    // Assert
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Groceries");
    assert_eq!(notes[0].body, "Milk, eggs, bread");
    Ok(())
}

#[test]
fn given_absent_directory_when_listing_then_returns_empty_collection() -> Result<()> {
    // Arrange
    let store = TestStore::new()?;
    let mut repository = store.open_repository();

    // Act
    let notes = repository.list_notes()?;

    // Assert
    assert!(notes.is_empty());
    assert!(!store.notes_dir.exists(), "Listing must not create the directory");
    Ok(())
}

#[test]
fn given_same_title_saved_twice_when_listing_then_overwrites_instead_of_duplicating() -> Result<()> {
    // Arrange
    let store = TestStore::new()?;
    let mut repository = store.open_repository();

    // Act
    repository.save_note("Groceries", "Milk, eggs, bread")?;
    repository.save_note("Groceries", "Just milk")?;
    let notes = repository.list_notes()?;

    // Assert
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].body, "Just milk");
    Ok(())
}

#[test]
fn given_saved_note_when_inspecting_disk_then_file_has_exact_storage_form() -> Result<()> {
    // Arrange
    let store = TestStore::new()?;
    let mut repository = store.open_repository();

    // Act
    let path = repository.save_note("Groceries", "Milk")?;

    // Assert
    assert_eq!(path, store.notes_dir.join("Groceries.txt"));
    let content = fs::read_to_string(&path)?;
    assert_eq!(content, "Title: Groceries\n\nNote: Milk");
    Ok(())
}

#[test]
fn given_body_containing_separator_when_reloading_then_body_is_truncated() -> Result<()> {
    // Arrange
    let store = TestStore::new()?;
    let mut repository = store.open_repository();

    // Act
    repository.save_note("A", "line1\n\nNote: line2")?;
    let notes = repository.list_notes()?;

    // Assert: the format cannot represent the separator inside a body
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].body, "line1");
    Ok(())
}

#[test]
fn given_malformed_file_when_listing_then_skips_it_and_keeps_others() -> Result<()> {
    // Arrange
    let store = TestStore::new()?;
    store.write_raw("garbage.txt", "no header, no separator")?;
    let mut repository = store.open_repository();
    repository.save_note("Groceries", "Milk")?;

    // Act
    let notes = repository.list_notes()?;

    // Assert
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Groceries");
    Ok(())
}

#[test]
fn given_unreadable_entry_when_listing_then_skips_it_and_keeps_others() -> Result<()> {
    // Arrange: a subdirectory cannot be read as a text file
    let store = TestStore::new()?;
    let mut repository = store.open_repository();
    repository.save_note("Groceries", "Milk")?;
    fs::create_dir(store.notes_dir.join("not-a-note"))?;

    // Act
    let notes = repository.list_notes()?;

    // Assert
    assert_eq!(notes.len(), 1);
    Ok(())
}

#[test]
fn given_nested_notes_directory_when_saving_then_creates_intermediate_segments() -> Result<()> {
    // Arrange
    let store = TestStore::new()?;
    let nested = store.notes_dir.join("deep").join("noteApp");
    let mut repository = jotter::infrastructure::FileNoteRepository::new(&nested);

    // Act
    repository.save_note("Groceries", "Milk")?;

    // Assert
    assert!(nested.join("Groceries.txt").exists());
    Ok(())
}
