use crate::domain::models::ResolvedItem;
use sha2::{Digest, Sha256};

/// Short stable id for a resolved wheel: first 12 hex chars of the SHA-256
/// over every `name\0share` pair, in wheel order.
pub fn wheel_id(items: &[ResolvedItem]) -> String {
    let mut hasher = Sha256::new();
    for i in items {
        hasher.update(i.name.as_bytes());
        hasher.update([0u8]);
        hasher.update(i.share.to_bits().to_le_bytes());
    }
    let full = hex::encode(hasher.finalize());
    full[..12].to_string()
}

/// Turns a free-form phrase into an RNG seed.
pub fn seed_from_phrase(phrase: &str) -> u64 {
    let digest = Sha256::digest(phrase.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_id_tracks_order_and_shares() {
        let a = vec![ResolvedItem::new("A", 50.0), ResolvedItem::new("B", 50.0)];
        let b = vec![ResolvedItem::new("B", 50.0), ResolvedItem::new("A", 50.0)];
        let c = vec![ResolvedItem::new("A", 60.0), ResolvedItem::new("B", 40.0)];
        assert_eq!(wheel_id(&a), wheel_id(&a.clone()));
        assert_ne!(wheel_id(&a), wheel_id(&b));
        assert_ne!(wheel_id(&a), wheel_id(&c));
        assert_eq!(wheel_id(&a).len(), 12);
    }

    #[test]
    fn name_boundaries_matter() {
        let a = vec![ResolvedItem::new("ab", 50.0), ResolvedItem::new("c", 50.0)];
        let b = vec![ResolvedItem::new("a", 50.0), ResolvedItem::new("bc", 50.0)];
        assert_ne!(wheel_id(&a), wheel_id(&b));
    }

    #[test]
    fn phrase_seed_is_stable() {
        assert_eq!(seed_from_phrase("friday lunch"), seed_from_phrase("friday lunch"));
        assert_ne!(seed_from_phrase("friday lunch"), seed_from_phrase("monday lunch"));
    }
}
