use std::cmp::Ordering;
use std::fmt;

/// Header of a summary file: how long the simulation ran.
///
/// Both values are kept exactly as written. They are only ever shown to the
/// reader, so a producer that writes `1e6` still gets a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    iterations: String,
    total_hands: String,
}

impl RunMetadata {
    pub fn new(iterations: impl Into<String>, total_hands: impl Into<String>) -> Self {
        Self { iterations: iterations.into(), total_hands: total_hands.into() }
    }

    pub fn iterations(&self) -> &str {
        &self.iterations
    }

    pub fn total_hands(&self) -> &str {
        &self.total_hands
    }
}

/// Aggregated results for one hand bucket.
///
/// ```
/// use poker_winrates::stats::HandStat;
///
/// let flush = HandStat::new("Flush", 100, 40);
/// assert_eq!(flush.win_ratio(), 0.4);
///
/// let never_dealt = HandStat::new("Royal Flush", 0, 0);
/// assert_eq!(never_dealt.win_ratio(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HandStat {
    name: String,
    times_played: u64,
    times_won: u64,
    win_ratio: f64,
}

impl HandStat {
    /// Build a stat and compute its win ratio. `times_won <= times_played` is
    /// expected but not checked.
    pub fn new(name: impl Into<String>, times_played: u64, times_won: u64) -> Self {
        Self {
            name: name.into(),
            times_played,
            times_won,
            win_ratio: win_ratio(times_played, times_won),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn times_played(&self) -> u64 {
        self.times_played
    }

    pub fn times_won(&self) -> u64 {
        self.times_won
    }

    pub fn win_ratio(&self) -> f64 {
        self.win_ratio
    }

    /// Descending by ratio. Used with a stable sort so equal ratios keep
    /// their file order.
    fn cmp_by_ratio_desc(&self, other: &Self) -> Ordering {
        other.win_ratio.total_cmp(&self.win_ratio)
    }
}

/// Displays as a `(name, ratio)` pair, e.g. `("Pair", 0.5)`.
impl fmt::Display for HandStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.name, self.win_ratio)
    }
}

/// `won / played`, or `0.0` for a hand that was never played.
pub fn win_ratio(times_played: u64, times_won: u64) -> f64 {
    if times_played == 0 {
        0.0
    } else {
        times_won as f64 / times_played as f64
    }
}

/// Stable sort, highest win ratio first.
pub fn sort_by_win_ratio(hands: &mut [HandStat]) {
    hands.sort_by(HandStat::cmp_by_ratio_desc);
}
