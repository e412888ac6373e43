//! Extraction state tracking.
//!
//! Per-run score records and candidate set, keyed by `NodeId` in a side
//! table rather than stored on the nodes themselves.

use std::collections::HashMap;

use dom_query::{NodeId, NodeRef};

use crate::classifier::Classifier;
use crate::dom;
use crate::link_density::link_density;
use crate::scoring::base_tag_score;

/// Score records and candidate set for one extraction run.
///
/// # Invariants
///
/// - A node has at most one score record; it is created by
///   [`initialize_node`](Self::initialize_node) and afterwards only grows by
///   addition until [`apply_link_density`](Self::apply_link_density) scales
///   it once.
/// - Candidates keep discovery order and never repeat.
pub struct ExtractionState<'a> {
    /// Content score per evaluated node
    scores: HashMap<NodeId, f64>,

    /// Nodes scored by the paragraph scorer, in discovery order
    candidates: Vec<NodeRef<'a>>,

    /// Set once the link-density multiplier has been applied
    link_density_applied: bool,
}

impl<'a> ExtractionState<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
            candidates: Vec::new(),
            link_density_applied: false,
        }
    }

    /// Check if a node has a score record
    #[must_use]
    pub fn has_score(&self, node: &NodeRef) -> bool {
        self.scores.contains_key(&node.id)
    }

    /// Current score of a node, if it was ever evaluated
    #[must_use]
    pub fn score(&self, node: &NodeRef) -> Option<f64> {
        self.scores.get(&node.id).copied()
    }

    /// Create the score record for a node: tag base score plus class weight.
    ///
    /// Callers check [`has_score`](Self::has_score) first; a node is
    /// initialized at most once.
    pub fn initialize_node(&mut self, node: &NodeRef, classifier: &Classifier) -> f64 {
        debug_assert!(!self.has_score(node), "score record initialized twice");

        let weight = classifier.weight(&dom::class_name(node), &dom::id(node));
        let score = base_tag_score(&dom::tag_name(node)) + f64::from(weight);
        self.scores.insert(node.id, score);
        score
    }

    /// Initialize a node and add it to the candidate set, unless it already
    /// has a score record.
    pub fn ensure_candidate(&mut self, node: &NodeRef<'a>, classifier: &Classifier) {
        if self.has_score(node) {
            return;
        }
        self.initialize_node(node, classifier);
        self.candidates.push(*node);
    }

    /// Add to an existing score record. Nodes without a record are ignored.
    pub fn add_score(&mut self, node: &NodeRef, delta: f64) {
        debug_assert!(!self.link_density_applied, "score updated after selection");

        if let Some(score) = self.scores.get_mut(&node.id) {
            *score += delta;
        }
    }

    /// Candidates in discovery order
    #[must_use]
    pub fn candidates(&self) -> &[NodeRef<'a>] {
        &self.candidates
    }

    /// Scale every candidate's score by `1 - link_density`.
    ///
    /// Applied at most once per run; later calls are no-ops and return
    /// `false`.
    pub fn apply_link_density(&mut self) -> bool {
        if self.link_density_applied {
            return false;
        }
        for candidate in &self.candidates {
            let density = link_density(candidate);
            if let Some(score) = self.scores.get_mut(&candidate.id) {
                *score *= 1.0 - density;
            }
        }
        self.link_density_applied = true;
        true
    }
}

impl Default for ExtractionState<'_> {
    fn default() -> Self {
        Self::new()
    }
}
