use crate::compatibility::scorer::{compute_compatibility, CompatibilityEntry};
use crate::sky::DailySky;
use crate::western::ZodiacSign;
use std::collections::BTreeMap;

/// Matrix key: the sign name for a self pair, `"A-B"` otherwise.
pub fn pair_key(a: ZodiacSign, b: ZodiacSign) -> String {
    if a == b {
        a.name().to_string()
    } else {
        format!("{}-{}", a, b)
    }
}

/// Every unordered pair `i <= j` in canonical sign order (78 entries).
pub fn compatibility_matrix(sky: &DailySky) -> BTreeMap<String, CompatibilityEntry> {
    let mut matrix = BTreeMap::new();
    for (i, a) in ZodiacSign::all().enumerate() {
        for b in ZodiacSign::ALL[i..].iter().copied() {
            matrix.insert(pair_key(a, b), compute_compatibility(a, b, sky));
        }
    }
    log::debug!("scored {} sign pairings for {}", matrix.len(), sky.date_label());
    matrix
}

/// Look up a pair in either order.
pub fn lookup<'a>(
    matrix: &'a BTreeMap<String, CompatibilityEntry>,
    a: ZodiacSign,
    b: ZodiacSign,
) -> Option<&'a CompatibilityEntry> {
    matrix
        .get(&pair_key(a, b))
        .or_else(|| matrix.get(&pair_key(b, a)))
}
