//! Pipeline configuration.

/// Configuration for an optimization run.
///
/// # Examples
///
/// ```
/// use gearopt::pipeline::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_top_n(20)
///     .with_time_limit_ms(5_000);
/// assert_eq!(config.top_n, Some(20));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerConfig {
    /// Keep only the best N builds after ranking.
    ///
    /// Truncation happens after the full sort, so the cut is global.
    /// `None` returns every surviving build.
    pub top_n: Option<usize>,

    /// Optional wall-clock limit in milliseconds.
    ///
    /// Checked between evaluation batches; an exceeded limit aborts the
    /// run with a timeout error and no partial results. `None` disables
    /// the limit (the default).
    pub time_limit_ms: Option<u64>,

    /// Whether to evaluate builds in parallel using rayon.
    ///
    /// Only effective with the `parallel` cargo feature; ignored
    /// otherwise. The ranking is identical either way.
    pub parallel: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            top_n: None,
            time_limit_ms: None,
            parallel: false,
        }
    }
}

impl OptimizerConfig {
    /// Keeps only the best `n` builds.
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    /// Sets the wall-clock limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
