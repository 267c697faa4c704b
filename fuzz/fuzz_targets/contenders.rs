#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use container_race::{ArenaList, Contender, SortedArray, TreeSet};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Action {
    Insert(u8),
    Remove(u8),
    RemoveNth(u8),
}

fn replay<C: Contender>(actions: &[Action]) -> Vec<usize> {
    let mut model: BTreeSet<usize> = BTreeSet::new();
    let mut c = C::with_capacity(0).unwrap();
    for action in actions {
        match *action {
            Action::Insert(key) => {
                let key = key as usize;
                if model.insert(key) {
                    c.insert(key).unwrap();
                }
            }
            Action::Remove(key) => {
                let key = key as usize;
                assert_eq!(c.remove(key), model.remove(&key));
            }
            Action::RemoveNth(n) => {
                if let Some(&key) = model.iter().nth(n as usize) {
                    model.remove(&key);
                    let pos = c.locate(key);
                    assert_eq!(c.remove_at(pos), Some(key));
                }
            }
        }
        assert_eq!(c.len(), model.len());
    }

    let keys: Vec<usize> = c.iter().collect();
    assert_eq!(keys, model.iter().copied().collect::<Vec<_>>());
    keys
}

fuzz_target!(|actions: Vec<Action>| {
    let array = replay::<SortedArray>(&actions);
    let tree = replay::<TreeSet>(&actions);
    let list = replay::<ArenaList>(&actions);
    assert_eq!(array, tree);
    assert_eq!(tree, list);
});
