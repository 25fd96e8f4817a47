pub mod record;

use log::debug;

use crate::error::{Error, Result};
use crate::index::HashPolicy;
use crate::storage::record::Course;

/// Largest bucket count a table accepts.
pub const MAX_BUCKET_COUNT: usize = 1 << 20;

/// Fixed-size hash table with separate chaining.
///
/// Courses live in an arena in insertion order. Each bucket is a chain of
/// arena indices, so chain order is insertion order within that bucket.
/// Nothing is ever removed and the bucket count never changes.
#[derive(Debug)]
pub struct ChainedHashTable {
    courses: Vec<Course>,
    buckets: Vec<Vec<usize>>,
    policy: HashPolicy,
}

impl ChainedHashTable {
    pub fn new(bucket_count: usize, policy: HashPolicy) -> Result<Self> {
        if !(1..=MAX_BUCKET_COUNT).contains(&bucket_count) {
            return Err(Error::Config(format!(
                "bucket count must be between 1 and {}, got {}",
                MAX_BUCKET_COUNT, bucket_count
            )));
        }

        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count).map_err(|e| {
            Error::Config(format!("cannot allocate {} buckets: {}", bucket_count, e))
        })?;
        buckets.resize_with(bucket_count, Vec::new);

        Ok(Self {
            courses: Vec::new(),
            buckets,
            policy,
        })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn policy(&self) -> HashPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn bucket_of(&self, key: &str) -> usize {
        self.policy.bucket_for(key, self.buckets.len())
    }

    /// Appends `course` to the tail of its bucket's chain. Duplicate keys are
    /// kept; the earlier one keeps winning lookups.
    pub fn insert(&mut self, course: Course) {
        let bucket = self.bucket_of(&course.key);
        debug!("Placing {} in bucket {}", course.key, bucket);

        let slot = self.courses.len();
        self.courses.push(course);
        self.buckets[bucket].push(slot);
    }

    /// First course in chain order whose key equals `key` exactly.
    pub fn find(&self, key: &str) -> Option<&Course> {
        let bucket = self.bucket_of(key);
        self.buckets[bucket]
            .iter()
            .map(|&slot| &self.courses[slot])
            .find(|course| course.key == key)
    }

    /// Every course, bucket by bucket, each bucket in chain order.
    /// This is not key order.
    pub fn all_records(&self) -> Vec<&Course> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|&slot| &self.courses[slot]))
            .collect()
    }

    /// Courses chained in `bucket`, in chain order. Empty for an out of range bucket.
    pub fn chain(&self, bucket: usize) -> Vec<&Course> {
        self.buckets
            .get(bucket)
            .map(|chain| chain.iter().map(|&slot| &self.courses[slot]).collect())
            .unwrap_or_default()
    }

    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }
}
