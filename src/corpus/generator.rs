//! Synthetic corpus generation.

use super::error::{CorpusError, CorpusResult};
use super::segment::{RouteSpec, Segment};
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of the random literal tokens bracketing each route.
const TOKEN_LEN: usize = 10;

/// Probe path that never matches a generated route: generated routes always
/// have at least two segments with randomized literals, this has one.
const UNKNOWN_PROBE: &str = "/not-even-real";

/// A generated benchmark corpus: the route set plus the three probe paths
/// exercised by the standard scenarios. Immutable after generation and
/// shared read-only across all scenarios of one configuration.
#[derive(Debug, Clone)]
pub struct Corpus {
    routes: Vec<RouteSpec>,
    arg_count: usize,
    first_probe: String,
    last_probe: String,
    unknown_probe: String,
}

impl Corpus {
    /// Generated routes, in generation order.
    #[must_use]
    pub fn routes(&self) -> &[RouteSpec] {
        &self.routes
    }

    /// Number of generated routes.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Parameter segments per route.
    #[must_use]
    pub fn arg_count(&self) -> usize {
        self.arg_count
    }

    /// Concrete path matching the first generated route.
    #[must_use]
    pub fn first_probe(&self) -> &str {
        &self.first_probe
    }

    /// Concrete path matching the last generated route.
    #[must_use]
    pub fn last_probe(&self) -> &str {
        &self.last_probe
    }

    /// Path matching no generated route.
    #[must_use]
    pub fn unknown_probe(&self) -> &str {
        &self.unknown_probe
    }
}

/// Generates corpora of randomized routes with a fixed shape.
///
/// Tokens come from a uniqueness-oriented pseudo-random source; collision
/// probability is negligible but this is not a security property. Tests
/// inject a fixed seed via [`CorpusGenerator::with_seed`] for reproducible
/// corpora.
#[derive(Debug)]
pub struct CorpusGenerator {
    rng: StdRng,
}

impl CorpusGenerator {
    /// Generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator for reproducible corpora.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `route_count` routes, each shaped
    /// `/<token>/<arg_count parameter segments>/<token>` with fresh random
    /// tokens per route. The first and last routes' concrete paths are
    /// retained as probes.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::InvalidRouteCount`] when `route_count` is zero.
    pub fn generate(&mut self, route_count: usize, arg_count: usize) -> CorpusResult<Corpus> {
        if route_count == 0 {
            return Err(CorpusError::InvalidRouteCount);
        }

        let mut routes = Vec::with_capacity(route_count);
        for _ in 0..route_count {
            let mut segments = Vec::with_capacity(arg_count + 2);
            segments.push(Segment::Literal(self.token()));
            for i in 1..=arg_count {
                segments.push(Segment::Param(format!("arg{i}")));
            }
            segments.push(Segment::Literal(self.token()));
            routes.push(RouteSpec::new(segments));
        }

        let first_probe = routes[0].probe_path();
        let last_probe = routes[route_count - 1].probe_path();

        Ok(Corpus {
            routes,
            arg_count,
            first_probe,
            last_probe,
            unknown_probe: UNKNOWN_PROBE.to_string(),
        })
    }

    fn token(&mut self) -> String {
        (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect()
    }
}

impl Default for CorpusGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::segment::Braced;

    #[test]
    fn test_generate_counts() {
        let corpus = CorpusGenerator::with_seed(1).generate(3, 2).unwrap();
        assert_eq!(corpus.route_count(), 3);
        assert_eq!(corpus.arg_count(), 2);
        for route in corpus.routes() {
            assert_eq!(route.param_count(), 2);
            assert_eq!(route.literal_count(), 2);
        }
    }

    #[test]
    fn test_generate_zero_args() {
        let corpus = CorpusGenerator::with_seed(1).generate(5, 0).unwrap();
        for route in corpus.routes() {
            assert_eq!(route.param_count(), 0);
            assert_eq!(route.literal_count(), 2);
        }
    }

    #[test]
    fn test_generate_zero_routes_rejected() {
        let err = CorpusGenerator::with_seed(1).generate(0, 2).unwrap_err();
        assert_eq!(err, CorpusError::InvalidRouteCount);
    }

    #[test]
    fn test_probes_match_their_routes() {
        let corpus = CorpusGenerator::with_seed(2).generate(10, 3).unwrap();
        assert!(corpus.routes()[0].matches(corpus.first_probe()));
        assert!(corpus.routes()[9].matches(corpus.last_probe()));
    }

    #[test]
    fn test_unknown_probe_matches_nothing() {
        for (routes, args) in [(1, 0), (3, 2), (50, 9)] {
            let corpus = CorpusGenerator::with_seed(3).generate(routes, args).unwrap();
            for route in corpus.routes() {
                assert!(!route.matches(corpus.unknown_probe()));
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = CorpusGenerator::with_seed(42).generate(5, 2).unwrap();
        let b = CorpusGenerator::with_seed(42).generate(5, 2).unwrap();
        for (ra, rb) in a.routes().iter().zip(b.routes()) {
            assert_eq!(ra.render(&Braced), rb.render(&Braced));
        }
    }

    #[test]
    fn test_distinct_seeds_differ_in_content_not_shape() {
        let a = CorpusGenerator::with_seed(1).generate(5, 2).unwrap();
        let b = CorpusGenerator::with_seed(2).generate(5, 2).unwrap();
        let mut any_difference = false;
        for (ra, rb) in a.routes().iter().zip(b.routes()) {
            assert_eq!(ra.segments().len(), rb.segments().len());
            if ra.render(&Braced) != rb.render(&Braced) {
                any_difference = true;
            }
        }
        assert!(any_difference);
    }

    #[test]
    fn test_example_shape_three_routes_two_args() {
        let corpus = CorpusGenerator::with_seed(9).generate(3, 2).unwrap();
        let rendered = corpus.routes()[0].render(&Braced);
        let parts: Vec<&str> = rendered.trim_start_matches('/').split('/').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[1], "{arg1}");
        assert_eq!(parts[2], "{arg2}");
        assert_eq!(parts[0].len(), 10);
        assert_eq!(parts[3].len(), 10);
    }
}
