//! The collection store: sole owner of the book list.
//!
//! Every successful mutation is mirrored to the durable slot as one JSON
//! snapshot. A failed write is logged and kept as the store's error state;
//! the in-memory change stands and keeps serving reads.

use crate::config::LibraryConfig;
use crate::db::SnapshotSlot;
use crate::error::{Result, StoreError};
use crate::models::{new_book_id, Book, BookDraft};
use crate::query::{self, FilterOptions, SearchFilters, SortKey, SortOrder};
use crate::seed;
use crate::stats::{self, LibraryStats};
use crate::transfer;
use chrono::Utc;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub struct BookStore<S: SnapshotSlot> {
    books: Vec<Book>,
    slot: S,
    config: LibraryConfig,
    error: Option<StoreError>,
}

impl<S: SnapshotSlot> BookStore<S> {
    /// Load the snapshot, or seed a fresh library when none exists.
    ///
    /// Never fails: an unreadable snapshot leaves an empty, usable store
    /// with a load error recorded.
    pub fn open(slot: S, config: LibraryConfig) -> Self {
        let mut store = BookStore {
            books: Vec::new(),
            slot,
            config,
            error: None,
        };

        match store.load_snapshot() {
            Ok(Some((books, reassigned))) => {
                log::info!("loaded {} books from {}", books.len(), store.config.storage_key);
                store.books = books;
                if reassigned > 0 {
                    store.persist();
                }
            }
            Ok(None) if store.config.seed_when_empty => {
                store.books = seed::sample_books(Utc::now());
                log::info!("no saved library found, seeded {} sample books", store.books.len());
                store.persist();
            }
            Ok(None) => {
                log::info!("no saved library found, starting empty");
            }
            Err(err) => {
                log::error!("Error loading books: {}", err);
                store.error = Some(StoreError::load(err));
            }
        }
        store
    }

    /// Loaded books plus how many duplicate ids had to be reassigned.
    fn load_snapshot(&self) -> Result<Option<(Vec<Book>, usize)>> {
        let Some(raw) = self.slot.read(&self.config.storage_key)? else {
            return Ok(None);
        };
        let drafts: Vec<BookDraft> = serde_json::from_str(&raw)?;
        let now = Utc::now();
        let mut books: Vec<Book> = drafts
            .into_iter()
            .map(|draft| Book::from_draft(draft, now))
            .collect();

        let mut seen = HashSet::new();
        let mut reassigned = 0;
        for book in books.iter_mut() {
            if !seen.insert(book.id.clone()) {
                let replacement = new_book_id();
                log::warn!("duplicate book id {} on load, reassigned {}", book.id, replacement);
                book.id = replacement.clone();
                seen.insert(replacement);
                reassigned += 1;
            }
        }
        Ok(Some((books, reassigned)))
    }

    fn persist(&mut self) -> bool {
        let result = serde_json::to_string(&self.books)
            .map_err(StoreError::from)
            .and_then(|snapshot| self.slot.write(&self.config.storage_key, &snapshot));
        match result {
            Ok(()) => true,
            Err(err) => {
                log::error!("Error saving books: {}", err);
                self.error = Some(StoreError::save(err));
                false
            }
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Drop a caller-chosen id that is blank or already taken.
    fn claim_id(&self, draft: &mut BookDraft, reserved: &HashSet<String>) {
        let taken = match draft.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => self.contains(id) || reserved.contains(id),
            _ => true,
        };
        if taken {
            draft.id = Some(new_book_id());
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut S {
        &mut self.slot
    }

    /// Last load or save failure, kept until cleared.
    pub fn error(&self) -> Option<&StoreError> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<StoreError> {
        self.error.take()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn create(&mut self, mut draft: BookDraft) -> Book {
        self.claim_id(&mut draft, &HashSet::new());
        draft.created_at = None;
        draft.updated_at = None;
        let book = Book::from_draft(draft, Utc::now());
        self.books.push(book.clone());
        self.persist();
        log::info!("added book {} ({})", book.id, book.title);
        book
    }

    /// `None` when no record has this id; nothing is written then.
    pub fn update(&mut self, id: &str, patch: BookDraft) -> Option<Book> {
        let index = self.position(id)?;
        self.books[index].apply(patch, Utc::now());
        let book = self.books[index].clone();
        self.persist();
        Some(book)
    }

    /// Returns whether the collection was saved. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        self.delete_many(&[id])
    }

    pub fn delete_many<T: AsRef<str>>(&mut self, ids: &[T]) -> bool {
        let targets: HashSet<&str> = ids.iter().map(|id| id.as_ref()).collect();
        let before = self.books.len();
        self.books.retain(|book| !targets.contains(book.id.as_str()));
        let removed = before - self.books.len();
        if removed == 0 {
            return true;
        }
        log::info!("deleted {} books", removed);
        self.persist()
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Option<Book> {
        let index = self.position(id)?;
        let book = &mut self.books[index];
        book.is_favorite = !book.is_favorite;
        book.touch(Utc::now());
        let book = book.clone();
        self.persist();
        Some(book)
    }

    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<Book> {
        query::search(&self.books, query, filters)
    }

    pub fn sort(&self, records: Vec<Book>, key: SortKey, order: SortOrder) -> Vec<Book> {
        query::sort_books(records, key, order)
    }

    pub fn filter_options(&self) -> FilterOptions {
        query::filter_options(&self.books)
    }

    pub fn stats(&self) -> LibraryStats {
        stats::compute(&self.books, Utc::now())
    }

    pub fn export(&self) -> Result<String> {
        transfer::export_json(&self.books)
    }

    /// Write the export next to other downloads, named by today's date.
    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let file_name =
            transfer::export_file_name(&self.config.export_prefix, Utc::now().date_naive());
        let path = dir.join(file_name);
        std::fs::write(&path, self.export()?)?;
        log::info!("exported {} books to {}", self.books.len(), path.display());
        Ok(path)
    }

    /// Append every usable entry of a JSON array. Returns how many were added.
    pub fn import(&mut self, blob: &str) -> Result<usize> {
        let parsed = transfer::parse_import(blob)?;
        let now = Utc::now();
        let mut reserved = HashSet::new();
        let mut added = Vec::with_capacity(parsed.drafts.len());
        for mut draft in parsed.drafts {
            self.claim_id(&mut draft, &reserved);
            let book = Book::from_draft(draft, now);
            reserved.insert(book.id.clone());
            added.push(book);
        }

        let count = added.len();
        self.books.extend(added);
        self.persist();
        log::info!("imported {} books, dropped {}", count, parsed.dropped);
        Ok(count)
    }

    pub fn import_from_path(&mut self, path: &Path) -> Result<usize> {
        let blob = std::fs::read_to_string(path)?;
        self.import(&blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemorySlot;
    use crate::models::{BookStatus, Genre};
    use chrono::Datelike;
    use std::collections::HashSet;

    fn config() -> LibraryConfig {
        LibraryConfig {
            seed_when_empty: false,
            ..LibraryConfig::default()
        }
    }

    fn empty_store() -> BookStore<MemorySlot> {
        BookStore::open(MemorySlot::new(), config())
    }

    fn stored_snapshot(store: &BookStore<MemorySlot>) -> String {
        store
            .slot()
            .read(&store.config().storage_key)
            .unwrap()
            .expect("snapshot written")
    }

    #[test]
    fn seeds_and_persists_when_slot_is_empty() {
        let store = BookStore::open(MemorySlot::new(), LibraryConfig::default());
        assert_eq!(store.len(), 8);
        assert!(store.error().is_none());
        assert!(stored_snapshot(&store).contains("To Kill a Mockingbird"));
    }

    #[test]
    fn loads_partial_records_with_defaults() {
        let slot = MemorySlot::new().with_entry(
            "bookshelf_books",
            r#"[{"id":"a","title":"Emma","author":"Jane Austen","obsolete":1},
                {"id":"a","title":"Dune","author":"Frank Herbert","pages":"412"}]"#,
        );
        let store = BookStore::open(slot, config());
        assert_eq!(store.len(), 2);
        let first = &store.books()[0];
        assert_eq!(first.id, "a");
        assert_eq!(first.status, BookStatus::Available);
        assert_eq!(first.language, "English");
        assert_ne!(store.books()[1].id, "a");
        assert_eq!(store.books()[1].pages, Some(412));
    }

    #[test]
    fn reassigned_ids_survive_a_reload() {
        let slot = MemorySlot::new().with_entry(
            "bookshelf_books",
            r#"[{"id":"a","title":"Emma","author":"Jane Austen"},
                {"id":"a","title":"Dune","author":"Frank Herbert"}]"#,
        );
        let store = BookStore::open(slot, config());
        let ids: Vec<String> = store.books().iter().map(|book| book.id.clone()).collect();

        let reopened = BookStore::open(store.slot().clone(), config());
        let reloaded: Vec<String> = reopened.books().iter().map(|book| book.id.clone()).collect();
        assert_eq!(reloaded, ids);
    }

    #[test]
    fn far_future_stamp_does_not_break_toggling() {
        let mut store = empty_store();
        store
            .import(r#"[{"title":"T","author":"A","updatedAt":8210266876799999}]"#)
            .unwrap();
        let id = store.books()[0].id.clone();
        assert!(store.books()[0].updated_at.year() <= 9999);

        let toggled = store.toggle_favorite(&id).unwrap();
        assert!(toggled.is_favorite);
        assert!(store.error().is_none());

        let reopened = BookStore::open(store.slot().clone(), config());
        assert_eq!(reopened.get(&id).map(|book| book.updated_at), Some(toggled.updated_at));
    }

    #[test]
    fn typed_prices_survive_export_and_import() {
        let mut source = empty_store();
        let prices = [
            "190.0000970600332612",
            "0.1000000000000000055",
            "12.3456789012345678",
            "9.999999999999999",
            "2.2250738585072011e-308",
        ];
        for (index, price) in prices.iter().enumerate() {
            let draft = BookDraft::from_json(&format!(
                r#"{{"title":"Book {}","author":"A","price":"{}"}}"#,
                index, price
            ))
            .unwrap();
            let book = source.create(draft);
            assert_eq!(book.price, price.parse::<f64>().ok());
        }

        let mut target = empty_store();
        target.import(&source.export().unwrap()).unwrap();
        assert_eq!(target.books(), source.books());

        let reopened = BookStore::open(source.slot().clone(), config());
        assert_eq!(reopened.books(), source.books());
    }

    #[test]
    fn corrupt_snapshot_opens_empty_with_load_error() {
        let slot = MemorySlot::new().with_entry("bookshelf_books", "{not json");
        let mut store = BookStore::open(slot, LibraryConfig::default());
        assert!(store.is_empty());
        assert!(matches!(store.error(), Some(StoreError::Load(_))));

        store.create(BookDraft::new("Emma", "Jane Austen"));
        assert_eq!(store.len(), 1);
        assert!(matches!(store.take_error(), Some(StoreError::Load(_))));
        assert!(store.error().is_none());
    }

    #[test]
    fn create_assigns_unique_ids_and_equal_stamps() {
        let mut store = empty_store();
        let mut ids = HashSet::new();
        for index in 0..20 {
            let book = store.create(BookDraft::new(format!("Book {}", index), "Author"));
            assert_eq!(book.created_at, book.updated_at);
            assert!(ids.insert(book.id));
        }
        assert_eq!(store.len(), 20);
    }

    #[test]
    fn create_replaces_a_taken_id() {
        let mut store = empty_store();
        let first = store.create(BookDraft {
            id: Some("fixed".to_string()),
            ..BookDraft::new("A", "a")
        });
        let second = store.create(BookDraft {
            id: Some("fixed".to_string()),
            ..BookDraft::new("B", "b")
        });
        assert_eq!(first.id, "fixed");
        assert_ne!(second.id, "fixed");
    }

    #[test]
    fn create_persists_the_new_record() {
        let mut store = empty_store();
        let book = store.create(
            BookDraft::new("1984", "George Orwell")
                .with_genre(Genre::ScienceFiction)
                .with_rating(5),
        );
        let snapshot = stored_snapshot(&store);
        assert!(snapshot.contains(&book.id));
        assert!(snapshot.contains("\"genre\":\"science_fiction\""));
    }

    #[test]
    fn empty_update_only_advances_updated_at() {
        let mut store = empty_store();
        let book = store.create(BookDraft::new("Emma", "Jane Austen").with_pages(474));
        let updated = store.update(&book.id, BookDraft::default()).unwrap();

        assert!(updated.updated_at > book.updated_at);
        let mut expected = book.clone();
        expected.updated_at = updated.updated_at;
        assert_eq!(updated, expected);
    }

    #[test]
    fn update_merges_patch_and_keeps_identity() {
        let mut store = empty_store();
        let book = store.create(BookDraft::new("Emma", "Jane Austen"));
        let patch = BookDraft::from_json(r#"{"status":"read","rating":"4","id":"hijack"}"#).unwrap();
        let updated = store.update(&book.id, patch).unwrap();

        assert_eq!(updated.id, book.id);
        assert_eq!(updated.created_at, book.created_at);
        assert_eq!(updated.status, BookStatus::Read);
        assert_eq!(updated.rating, Some(4));
        assert_eq!(store.get(&book.id), Some(&updated));
    }

    #[test]
    fn delete_then_update_is_a_no_op() {
        let mut store = empty_store();
        let book = store.create(BookDraft::new("Emma", "Jane Austen"));
        assert!(store.delete(&book.id));
        assert!(store.update(&book.id, BookDraft::default()).is_none());
        assert!(store.toggle_favorite(&book.id).is_none());
        assert!(store.delete(&book.id));
        assert!(store.delete(&book.id));
        assert!(store.is_empty());
    }

    #[test]
    fn bulk_delete_removes_only_listed_ids() {
        let mut store = empty_store();
        let a = store.create(BookDraft::new("A", "a"));
        let b = store.create(BookDraft::new("B", "b"));
        let c = store.create(BookDraft::new("C", "c"));
        assert!(store.delete_many(&[a.id.clone(), c.id.clone(), "missing".to_string()]));
        let remaining: Vec<&str> = store.books().iter().map(|book| book.id.as_str()).collect();
        assert_eq!(remaining, vec![b.id.as_str()]);
    }

    #[test]
    fn toggle_favorite_flips_and_stamps() {
        let mut store = empty_store();
        let book = store.create(BookDraft::new("Emma", "Jane Austen"));
        let toggled = store.toggle_favorite(&book.id).unwrap();
        assert!(toggled.is_favorite);
        assert!(toggled.updated_at > book.updated_at);
        assert!(!store.toggle_favorite(&book.id).unwrap().is_favorite);
    }

    #[test]
    fn search_does_not_touch_the_collection() {
        let mut store = empty_store();
        store.create(BookDraft::new("1984", "George Orwell").with_genre(Genre::ScienceFiction));
        store.create(BookDraft::new("Emma", "Jane Austen").with_genre(Genre::Romance));
        let before = store.books().to_vec();

        let hits = store.search("orwell", &SearchFilters::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(store.search("", &SearchFilters::default()), before);

        let sorted = store.sort(hits, SortKey::Title, SortOrder::Desc);
        assert_eq!(sorted[0].title, "1984");
        assert_eq!(store.books(), before.as_slice());
    }

    #[test]
    fn save_failure_keeps_mutation_and_reports_error() {
        let mut store = empty_store();
        store.create(BookDraft::new("Emma", "Jane Austen"));
        store.slot_mut().set_quota(Some(8));

        let book = store.create(BookDraft::new("Dune", "Frank Herbert"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&book.id).map(|book| book.title.as_str()), Some("Dune"));
        match store.error() {
            Some(StoreError::Save(inner)) => {
                assert!(matches!(**inner, StoreError::QuotaExceeded { .. }))
            }
            other => panic!("expected save error, got {:?}", other),
        }
        assert!(!store.delete(&book.id));
        assert!(store.get(&book.id).is_none());
    }

    #[test]
    fn import_export_round_trip() {
        let mut source = BookStore::open(MemorySlot::new(), LibraryConfig::default());
        source.toggle_favorite("3");
        let blob = source.export().unwrap();

        let mut target = empty_store();
        let added = target.import(&blob).unwrap();
        assert_eq!(added, source.len());
        assert_eq!(target.books(), source.books());
    }

    #[test]
    fn import_into_same_store_keeps_ids_unique() {
        let mut store = BookStore::open(MemorySlot::new(), LibraryConfig::default());
        let blob = store.export().unwrap();
        assert_eq!(store.import(&blob).unwrap(), 8);

        let ids: HashSet<&str> = store.books().iter().map(|book| book.id.as_str()).collect();
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn import_rejects_non_array_without_changes() {
        let mut store = empty_store();
        store.create(BookDraft::new("Emma", "Jane Austen"));
        let err = store.import(r#"{"books":[]}"#).unwrap_err();
        assert!(matches!(err, StoreError::InvalidImportFormat));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn import_counts_only_usable_entries() {
        let mut store = empty_store();
        let added = store
            .import(r#"[{"title":"Emma","author":"Jane Austen"},{"title":"No author"}]"#)
            .unwrap();
        assert_eq!(added, 1);
        assert_eq!(store.books()[0].title, "Emma");
    }

    #[test]
    fn stats_follow_the_collection() {
        let mut store = empty_store();
        let empty = store.stats();
        assert_eq!(empty.total, 0);
        assert_eq!(empty.favorite_genre, "");

        store.create(BookDraft::new("A", "a").with_genre(Genre::Fiction).with_rating(4));
        store.create(BookDraft::new("B", "b").with_genre(Genre::Fiction).with_rating(2));
        let stats = store.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.average_rating, 3.0);
        assert_eq!(stats.books_this_year, 2);
        assert_eq!(stats.favorite_genre, "fiction");
    }
}
