use serde::Serialize;

/// Cache observability for a single solver.
///
/// - `states` — distinct subgames stored in the memo tables
/// - `hits` — lookups answered from the tables
/// - `misses` — lookups that had to be computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    states: usize,
    hits: usize,
    misses: usize,
}

impl Stats {
    pub fn hit(&mut self) {
        self.hits += 1;
    }
    pub fn miss(&mut self) {
        self.misses += 1;
    }
    pub fn store(&mut self) {
        self.states += 1;
    }
    pub fn states(&self) -> usize {
        self.states
    }
    pub fn hits(&self) -> usize {
        self.hits
    }
    pub fn misses(&self) -> usize {
        self.misses
    }
    pub fn lookups(&self) -> usize {
        self.hits + self.misses
    }
    /// Share of lookups answered from cache.
    pub fn rate(&self) -> f64 {
        self.hits as f64 / self.lookups().max(1) as f64
    }
    /// Formats stats as aligned columns.
    pub fn format(&self) -> String {
        format!(
            "{:<20}{:<20}{:<20}{:<20}",
            format!("states {}", self.states),
            format!("hits {}", self.hits),
            format!("misses {}", self.misses),
            format!("hit% {:.1}", 100. * self.rate()),
        )
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rate_is_zero() {
        assert_eq!(Stats::default().rate(), 0.);
    }

    #[test]
    fn counts() {
        let mut stats = Stats::default();
        stats.miss();
        stats.store();
        stats.hit();
        stats.hit();
        stats.miss();
        assert_eq!(stats.lookups(), 4);
        assert_eq!(stats.states(), 1);
        assert_eq!(stats.rate(), 0.5);
        assert!(stats.format().contains("hit% 50.0"));
    }
}
