//! Whole-table validation.
//!
//! [`Resolver::validate`](crate::resolver::Resolver::validate) walks every
//! binding ahead of time and reports the first missing binding or cycle,
//! the same errors `resolve()` would hit later.

use std::collections::{HashMap, HashSet};

use mawrid_support::rendering::suggest_similar;
use tracing::{debug, instrument, warn};

use crate::error::{CyclicDependencyError, MawridError, UnresolvedTypeError};
use crate::key::DependencyKey;

/// Constructor parameters of every bound abstract type.
pub(crate) type DependencyGraph = HashMap<DependencyKey, Vec<DependencyKey>>;

/// Depth-first validator over a [`DependencyGraph`].
///
/// Keeps the keys on the current DFS path (`visiting` + `path`) to detect
/// cycles, and the keys already proven sound (`validated`) so shared
/// subtrees are checked once.
pub(crate) struct GraphValidator {
    graph: DependencyGraph,
    visiting: HashSet<DependencyKey>,
    validated: HashSet<DependencyKey>,
    path: Vec<DependencyKey>,
    max_suggestions: usize,
}

impl GraphValidator {
    pub fn new(graph: DependencyGraph, max_suggestions: usize) -> Self {
        Self {
            graph,
            visiting: HashSet::new(),
            validated: HashSet::new(),
            path: Vec::new(),
            max_suggestions,
        }
    }

    /// Validates every binding.
    ///
    /// Roots are visited in type-name order so the reported error does not
    /// depend on hash order.
    ///
    /// # Errors
    /// - [`MawridError::CyclicDependency`]
    /// - [`MawridError::UnresolvedType`]
    #[instrument(skip(self), name = "graph_validation")]
    pub fn validate(&mut self) -> Result<(), MawridError> {
        let mut roots: Vec<DependencyKey> = self.graph.keys().copied().collect();
        roots.sort_by_key(|k| k.type_name());

        debug!(bindings = roots.len(), "Validating binding table");

        for key in roots {
            self.validate_key(&key)?;
        }

        debug!("Binding table is valid");
        Ok(())
    }

    fn validate_key(&mut self, key: &DependencyKey) -> Result<(), MawridError> {
        if self.validated.contains(key) {
            return Ok(());
        }

        if self.visiting.contains(key) {
            let start = self.path.iter().position(|k| k == key).unwrap_or(0);
            let mut chain = self.path[start..].to_vec();
            chain.push(*key);

            warn!(cycle = ?chain, "Cyclic dependency in binding table");
            return Err(MawridError::CyclicDependency(CyclicDependencyError { chain }));
        }

        let parameters = match self.graph.get(key) {
            Some(parameters) => parameters.clone(),
            None => {
                return Err(MawridError::UnresolvedType(UnresolvedTypeError {
                    requested: *key,
                    required_by: self.path.last().copied(),
                    suggestions: self.suggestions_for(key),
                }));
            }
        };

        self.visiting.insert(*key);
        self.path.push(*key);

        for parameter in &parameters {
            self.validate_key(parameter)?;
        }

        self.path.pop();
        self.visiting.remove(key);
        self.validated.insert(*key);
        Ok(())
    }

    fn suggestions_for(&self, key: &DependencyKey) -> Vec<String> {
        let names: Vec<&str> = self.graph.keys().map(|k| k.type_name()).collect();
        suggest_similar(key.type_name(), &names, self.max_suggestions)
    }
}
