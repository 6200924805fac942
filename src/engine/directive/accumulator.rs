/// Running totals for one aggregation run, kept in canonical units only
/// (bytes and nanoseconds).
///
/// `merge` is associative and commutative with `default()` as identity, so
/// partials folded over disjoint slices of a stream combine into the same
/// totals regardless of split or order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsAccumulator {
    total_size_bytes: i64,
    total_time_nanos: i64,
    count: u64,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one row's canonical values into the totals.
    pub fn update(&mut self, size_bytes: i64, time_nanos: i64) {
        self.total_size_bytes += size_bytes;
        self.total_time_nanos += time_nanos;
        self.count += 1;
    }

    /// Fold a partial computed elsewhere into this one.
    pub fn merge(&mut self, other: &StatsAccumulator) {
        self.total_size_bytes += other.total_size_bytes;
        self.total_time_nanos += other.total_time_nanos;
        self.count += other.count;
    }

    pub fn total_size_bytes(&self) -> i64 {
        self.total_size_bytes
    }

    pub fn total_time_nanos(&self) -> i64 {
        self.total_time_nanos
    }

    /// Rows folded in so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
