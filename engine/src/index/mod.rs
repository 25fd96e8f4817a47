use serde::{Deserialize, Serialize};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// How a key is mapped to a bucket.
///
/// `SumOfCodes` adds up the key's bytes as signed chars into an unsigned
/// 32-bit accumulator and reduces modulo the bucket count. This reproduces
/// the bucket placement of the old course planner exactly, anagram
/// collisions included. `Fnv1a` spreads short codes better and changes
/// nothing a caller can observe through `find` or the sorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashPolicy {
    #[default]
    SumOfCodes,
    Fnv1a,
}

impl HashPolicy {
    /// Bucket index for `key`. `bucket_count` must be non-zero.
    pub fn bucket_for(&self, key: &str, bucket_count: usize) -> usize {
        debug_assert!(bucket_count > 0);
        match self {
            HashPolicy::SumOfCodes => {
                let sum = key
                    .bytes()
                    .fold(0u32, |acc, b| acc.wrapping_add(b as i8 as u32));
                sum as usize % bucket_count
            }
            HashPolicy::Fnv1a => {
                let hash = key.bytes().fold(FNV_OFFSET_BASIS, |acc, b| {
                    (acc ^ u64::from(b)).wrapping_mul(FNV_PRIME)
                });
                (hash % bucket_count as u64) as usize
            }
        }
    }
}
