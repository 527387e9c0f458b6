//! Hash collections using AHash.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert(7u64, "mousemove");
        assert_eq!(map.remove(&7), Some("mousemove"));
        assert!(map.is_empty());
    }
}
