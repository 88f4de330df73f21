//! Tests for `relay::watchlist`.

use std::sync::Arc;

use reactwatch::relay::WatchList;
use reactwatch::types::ChannelId;

#[test]
fn starts_empty() {
    let list = WatchList::new();
    assert!(list.is_empty());
    assert!(!list.contains(ChannelId(1)));
}

#[test]
fn add_twice_does_not_duplicate() {
    let list = WatchList::new();
    assert!(list.add(ChannelId(123)));
    assert!(!list.add(ChannelId(123)));
    assert_eq!(list.len(), 1);
    assert!(list.contains(ChannelId(123)));
}

#[test]
fn remove_absent_is_noop() {
    let list = WatchList::new();
    list.add(ChannelId(5));
    assert!(!list.remove(ChannelId(999)));
    assert_eq!(list.snapshot(), vec![ChannelId(5)]);
}

#[test]
fn contains_reflects_last_mutation() {
    let list = WatchList::new();
    let id = ChannelId(-1001);

    list.add(id);
    assert!(list.contains(id));
    assert!(list.remove(id));
    assert!(!list.contains(id));
    assert!(!list.remove(id));
    assert!(list.add(id));
    assert!(list.contains(id));
}

#[test]
fn snapshot_is_sorted() {
    let list = WatchList::new();
    for id in [30, -10, 20] {
        list.add(ChannelId(id));
    }
    assert_eq!(
        list.snapshot(),
        vec![ChannelId(-10), ChannelId(20), ChannelId(30)]
    );
}

#[test]
fn concurrent_adds_and_removes_keep_set_consistent() {
    let list = Arc::new(WatchList::new());

    let spawn = |remove: bool| {
        let list = Arc::clone(&list);
        std::thread::spawn(move || {
            for n in 0..200_i64 {
                let id = ChannelId(n);
                if remove {
                    list.remove(id);
                } else {
                    list.add(id);
                }
                let _ = list.contains(id);
            }
        })
    };

    let handles: Vec<_> = [false, true, false, true, false, true]
        .into_iter()
        .map(spawn)
        .collect();
    for handle in handles {
        handle.join().expect("worker should not panic");
    }

    let snapshot = list.snapshot();
    assert_eq!(snapshot.len(), list.len());
    assert!(snapshot.iter().all(|id| (0..200).contains(&id.0)));

    // Every id is either present or absent; one more round makes it present.
    for n in 0..200_i64 {
        list.add(ChannelId(n));
    }
    assert_eq!(list.len(), 200);
}
