use std::future::Future;

use bookshelf_common_types::BookDetails;
use bookshelf_store::Store;
use quickcheck_macros::quickcheck;

fn block_on<F: Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(fut)
}

fn details_of(store: &Store) -> Vec<BookDetails> {
    block_on(store.books())
        .iter()
        .map(|book| book.details())
        .collect()
}

#[tokio::test]
async fn empty_store_has_no_books() {
    let store = Store::new();

    assert!(store.is_empty().await);
    assert!(store.books().await.is_empty());
}

#[tokio::test]
async fn seeded_store_lists_seed() {
    let store = Store::with_books([BookDetails::new("My book", "Lachlan", 1990)]);

    let books = store.books().await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title(), "My book");
    assert_eq!(books[0].author(), "Lachlan");
    assert_eq!(books[0].year(), 1990);
}

#[tokio::test]
async fn append_to_seeded_store() {
    let store = Store::with_books([BookDetails::new("My book", "Lachlan", 1990)]);
    let new_book = BookDetails::new("New title", "Lachlan", 1990);

    let added = store.append(new_book.clone()).await;
    assert_eq!(added.details(), new_book);

    let books = store.books().await;
    assert_eq!(books.len(), 2);
    assert_eq!(books[1].details(), new_book);
}

#[tokio::test]
async fn duplicates_are_kept() {
    let store = Store::new();
    let details = BookDetails::new("Twice", "Someone", 2000);

    store.append(details.clone()).await;
    store.append(details.clone()).await;

    assert_eq!(store.len().await, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_are_not_lost() {
    let store = Store::new();

    let tasks = (0..100).map(|i| {
        let store = store.clone();
        tokio::spawn(async move {
            store
                .append(BookDetails::new(format!("Book {i}"), "Author", i))
                .await
        })
    });
    for res in futures::future::join_all(tasks).await {
        res.unwrap();
    }

    let mut years: Vec<i32> = store.books().await.iter().map(|b| b.year()).collect();
    years.sort();
    assert_eq!(years, (0..100).collect::<Vec<_>>());
}

#[quickcheck]
fn added_book_is_listed_last(seed: Vec<BookDetails>, details: BookDetails) -> bool {
    let store = Store::with_books(seed);
    block_on(store.append(details.clone()));

    details_of(&store).last() == Some(&details)
}

#[quickcheck]
fn listing_is_idempotent(seed: Vec<BookDetails>) -> bool {
    let store = Store::with_books(seed);

    details_of(&store) == details_of(&store)
}

#[quickcheck]
fn appends_keep_insertion_order(books: Vec<BookDetails>) -> bool {
    let store = Store::new();
    for details in books.iter().cloned() {
        block_on(store.append(details));
    }

    details_of(&store) == books
}
