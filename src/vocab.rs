use std::sync::Mutex;

use fnv::FnvHashMap;
use itertools::Itertools;

use crate::types::Token;


/// The shared token -> index map, mutated concurrently by pool workers.
/// One mutex guards every mutation and snapshot read; the map is only
/// trustworthy as a whole once the pool coordinator has drained.
///
/// Indices are dense: the set of assigned indices is always exactly
/// `0..len`, and a token keeps its first-assigned index forever.
pub struct Vocabulary {
    map: Mutex<FnvHashMap<Token, u32>>,
}

impl Vocabulary {
    pub fn new() -> Vocabulary {
        Vocabulary {
            map: Mutex::new(FnvHashMap::default()),
        }
    }

    /// Registers `token` with the next free index if it has not been seen
    /// before. Repeat calls for a known token are no-ops, so processing a
    /// chunk twice cannot corrupt the map.
    // XXX: raw_entry would avoid hashing twice on the miss path once stable
    pub fn register_if_absent(&self, token: &str) {
        let mut map = self.map.lock().unwrap();
        if !map.contains_key(token) {
            let index = map.len() as u32;
            map.insert(Box::from(token), index);
        }
    }

    /// Count of distinct registered tokens. Mid-scan this is a snapshot
    /// that may already be stale by the time the caller looks at it.
    pub fn len(&self) -> usize {
        self.map.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index_of(&self, token: &str) -> Option<u32> {
        self.map.lock().unwrap().get(token).copied()
    }

    /// All registered tokens in lexicographic order. A derived reporting
    /// view; storage order is the index assignment order.
    pub fn sorted_tokens(&self) -> Vec<Token> {
        self.map.lock().unwrap().keys().cloned().sorted().collect_vec()
    }
}
