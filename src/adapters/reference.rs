//! Reference adapter backed by a linear scan over the corpus.
//!
//! Serves as the baseline and as end-to-end validation of the harness; it
//! delegates matching to [`RouteSpec::matches`] rather than implementing a
//! routing algorithm of its own.

use super::{AdapterError, MatchOutcome, RouterAdapter};
use crate::corpus::{Braced, Corpus, PlaceholderStyle, RouteSpec};

/// Baseline adapter that scans routes in registration order until one
/// matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScanAdapter;

/// The "lookup structure" is simply the routes in corpus order.
#[derive(Debug)]
pub struct LinearTable {
    routes: Vec<RouteSpec>,
}

impl RouterAdapter for LinearScanAdapter {
    type Router = LinearTable;

    fn name(&self) -> &str {
        "linear-scan"
    }

    fn style(&self) -> &dyn PlaceholderStyle {
        &Braced
    }

    fn build(&self, corpus: &Corpus) -> Result<Self::Router, AdapterError> {
        Ok(LinearTable {
            routes: corpus.routes().to_vec(),
        })
    }

    fn lookup(&self, router: &Self::Router, path: &str) -> Result<MatchOutcome, AdapterError> {
        for (i, route) in router.routes.iter().enumerate() {
            if route.matches(path) {
                return Ok(MatchOutcome::Matched { handler: i });
            }
        }
        Ok(MatchOutcome::NotFound)
    }
}
