use std::collections::HashMap;

/// Partition `records` into buckets keyed by `key_fn`, preserving the order
/// in which keys first appear in the input. Records inside a bucket keep
/// their relative input order. Records whose key is absent land in the `""`
/// bucket rather than being dropped.
///
/// The empty-collection fallback (substituting a default table of groups)
/// belongs to the caller; this function just reports what it was given.
pub fn group_by_key<T, F>(records: &[T], key_fn: F) -> Vec<(String, Vec<T>)>
where
    T: Clone,
    F: Fn(&T) -> Option<String>,
{
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = key_fn(record).unwrap_or_default();
        match index.get(&key) {
            Some(&i) => groups[i].1.push(record.clone()),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![record.clone()]));
            }
        }
    }

    groups
}
