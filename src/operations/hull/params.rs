/// Parameters controlling hull enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HullParams {
    /// Scan anchor indices on the rayon thread pool.
    ///
    /// Results are gathered in index order, so the output is identical to a
    /// sequential run. Default: false
    pub parallel: bool,

    /// Keep only the first face of each geometric triangle, compared by
    /// point value. Default: false
    pub dedup: bool,
}

impl HullParams {
    /// Set parallel enumeration.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set face deduplication.
    #[must_use]
    pub const fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }
}
