//! Undo/redo sequences over persistent list snapshots
//!
//! This tests:
//! - Linear undo/redo through committed list versions
//! - Discarding the redo branch on commit
//! - Old versions staying intact while the timeline moves

use strata_history::{History, HistoryError, Snapshot};
use strata_list::PersistentList;

/// List version compared by identity
#[derive(Debug, Clone)]
struct Version(PersistentList<i32>);

impl Snapshot for Version {
    fn same_snapshot(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

fn contents(list: &PersistentList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_linear_undo_redo() {
    let mut history = History::new("s0");
    history.commit("s1");
    history.commit("s2");

    assert_eq!(history.undo(), Ok(&"s1"));
    assert_eq!(history.undo(), Ok(&"s0"));
    assert_eq!(history.undo(), Err(HistoryError::NoHistory));

    history.commit("s3");
    assert_eq!(history.redo(), Err(HistoryError::NoFuture));
    assert_eq!(history.current(), &"s3");

    // s2 is gone for good
    assert!(history.iter().all(|(state, _)| *state != "s2"));
}

#[test]
fn test_list_walkthrough() {
    let mut tree = PersistentList::new().add(1).add(2).add(3);
    let mut history = History::new(tree.clone());
    assert_eq!(contents(history.current()), vec![3, 2, 1]);

    tree = tree.add(4);
    history.commit(tree.clone());
    tree = tree.add(5);
    history.commit(tree.clone());
    assert_eq!(contents(history.current()), vec![5, 4, 3, 2, 1]);

    history.undo().unwrap();
    assert_eq!(contents(history.current()), vec![4, 3, 2, 1]);

    history.redo().unwrap();
    assert_eq!(contents(history.current()), vec![5, 4, 3, 2, 1]);

    tree = tree.remove(0).unwrap();
    history.commit(tree.clone());
    assert_eq!(contents(history.current()), vec![4, 3, 2, 1]);

    history.undo().unwrap();
    assert_eq!(contents(history.current()), vec![5, 4, 3, 2, 1]);

    // The remove is redoable and every committed version is intact
    assert!(history.can_redo());
    let versions: Vec<_> = history.iter().map(|(list, _)| contents(list)).collect();
    assert_eq!(
        versions,
        vec![
            vec![3, 2, 1],
            vec![4, 3, 2, 1],
            vec![5, 4, 3, 2, 1],
            vec![4, 3, 2, 1],
        ]
    );
}

#[test]
fn test_go_to_list_version_by_identity() {
    let v0 = Version(PersistentList::new().add(1));
    let v1 = Version(v0.0.add(2));
    let v2 = Version(v1.0.remove(0).unwrap());

    let mut history = History::new(v0.clone());
    history.commit(v1.clone());
    history.commit(v2.clone());

    // v2 holds the same elements as v0 but is a different version
    assert_eq!(contents(&v2.0), contents(&v0.0));
    assert!(history.go_to(&v0));
    assert_eq!(history.cursor(), 0);

    assert!(!history.go_to(&v2));
    assert_eq!(history.cursor(), 0);

    history.redo().unwrap();
    assert!(history.current().same_snapshot(&v1));
}

#[test]
fn test_discarded_branch_never_comes_back() {
    let base = PersistentList::new().add("a");
    let mut history = History::new(base.clone());

    for word in ["b", "c", "d"] {
        let next = history.current().add(word);
        history.commit_labeled(next, format!("add {word}"));
    }
    assert_eq!(history.len(), 4);

    history.undo().unwrap();
    history.undo().unwrap();
    assert_eq!(history.redo_description(), Some("add c"));

    let replacement = history.current().set(0, "z").unwrap();
    history.commit_labeled(replacement, "replace b");

    assert_eq!(history.len(), 3);
    assert_eq!(history.redo(), Err(HistoryError::NoFuture));
    assert_eq!(history.undo_description(), Some("replace b"));
    assert_eq!(
        history.current().iter().copied().collect::<Vec<_>>(),
        vec!["z", "a"]
    );
    assert_eq!(base.len(), 1);
}
