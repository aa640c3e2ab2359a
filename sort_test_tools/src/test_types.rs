use std::cmp::Ordering;

/// Value that is only ordered by `key`, `id` tells otherwise equal elements apart.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Keyed {
    pub key: i32,
    pub id: u32,
}

impl Keyed {
    pub fn from_keys(keys: &[i32]) -> Vec<Self> {
        keys.iter()
            .enumerate()
            .map(|(i, key)| Self {
                key: *key,
                id: i as u32,
            })
            .collect()
    }

    pub fn cmp_key(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
