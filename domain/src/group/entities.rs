//! Group entity — the hierarchical knob namespace
//!
//! A [`Group`] owns an ordered mapping of local knobs and an ordered
//! mapping of child groups, forming a tree with no sharing and no cycles.
//! Both mappings are `BTreeMap`s, so iteration is lexicographic and
//! deterministic, and with it lookup tie-breaking and visit order.
//!
//! # Lifecycle
//!
//! Assemble → finalize → read/parse-against. Structural insertion
//! ([`add_knob`](Group::add_knob), [`subgroup`](Group::subgroup)) is
//! unconditional; the mutability flag gates only post-assembly *value*
//! changes through [`change_value`](Group::change_value).
//! [`finalize`](Group::finalize) freezes one node,
//! [`finalize_tree`](Group::finalize_tree) freezes a subtree; neither can
//! be undone.
//!
//! The tree is single-threaded by design: no interior synchronization.

use crate::core::error::DomainError;
use crate::group::value_objects::KnobMatch;
use crate::knob::entities::Knob;
use crate::knob::value_objects::KnobValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named node in the knob tree; the unit of mutability gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    name: String,
    knobs: BTreeMap<String, Knob>,
    subgroups: BTreeMap<String, Group>,
    mutable: bool,
}

impl Group {
    /// Create an empty, mutable group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            knobs: BTreeMap::new(),
            subgroups: BTreeMap::new(),
            mutable: true,
        }
    }

    /// Create an empty group that is immutable from the start.
    pub fn new_frozen(name: impl Into<String>) -> Self {
        Self {
            mutable: false,
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    // ==================== Assembly ====================

    /// Insert a knob, replacing any existing knob of the same name
    /// (last write wins at assembly time; the mutability flag does not
    /// apply to structural insertion).
    pub fn insert(&mut self, knob: Knob) -> &mut Self {
        self.knobs.insert(knob.name().to_string(), knob);
        self
    }

    /// Insert a new knob built from `name` and `value`; chains fluently.
    pub fn add_knob(&mut self, name: impl Into<String>, value: impl Into<KnobValue>) -> &mut Self {
        self.insert(Knob::new(name, value))
    }

    /// Like [`add_knob`](Group::add_knob), with a description.
    pub fn add_knob_with(
        &mut self,
        name: impl Into<String>,
        value: impl Into<KnobValue>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.insert(Knob::new(name, value).with_description(description))
    }

    /// The child group named `name`, lazily created (mutable) if absent.
    ///
    /// Creation is a single map-entry operation; repeated calls with the
    /// same name return the same child.
    pub fn subgroup(&mut self, name: impl Into<String>) -> &mut Group {
        let name = name.into();
        self.subgroups
            .entry(name.clone())
            .or_insert_with(|| Group::new(name))
    }

    // ==================== Local Access ====================

    /// The local knob named `name`, if any. Does not recurse.
    pub fn knob(&self, name: &str) -> Option<&Knob> {
        self.knobs.get(name)
    }

    /// The existing child group named `name`, if any. Does not create.
    pub fn child(&self, name: &str) -> Option<&Group> {
        self.subgroups.get(name)
    }

    /// Local knobs in name order.
    pub fn knobs(&self) -> impl Iterator<Item = &Knob> {
        self.knobs.values()
    }

    /// Child groups in name order.
    pub fn subgroups(&self) -> impl Iterator<Item = &Group> {
        self.subgroups.values()
    }

    // ==================== Lookup ====================

    /// Find a knob by name, depth-first, returning its colon-joined path.
    ///
    /// The local knob map is searched first; otherwise subgroups are tried
    /// in lexicographic name order and the first hit wins. Duplicate leaf
    /// names in different subtrees are legal — the earliest subgroup in
    /// iteration order shadows the rest, deterministically.
    pub fn find_knob(&self, name: &str) -> Option<KnobMatch<'_>> {
        if let Some(knob) = self.knobs.get(name) {
            return Some(KnobMatch {
                path: format!("{}:{}", self.name, name),
                knob,
            });
        }
        for subgroup in self.subgroups.values() {
            if let Some(hit) = subgroup.find_knob(name) {
                return Some(KnobMatch {
                    path: format!("{}:{}", self.name, hit.path),
                    knob: hit.knob,
                });
            }
        }
        None
    }

    // ==================== Traversal ====================

    /// Depth-first, read-only traversal: every local knob (in name order)
    /// before each subgroup (in name order).
    pub fn visit<F: FnMut(&Knob)>(&self, visitor: &mut F) {
        for knob in self.knobs.values() {
            visitor(knob);
        }
        for subgroup in self.subgroups.values() {
            subgroup.visit(visitor);
        }
    }

    // ==================== Mutation Gating ====================

    /// Change a knob's value from text, resolving `name` exactly like
    /// [`find_knob`](Group::find_knob).
    ///
    /// The text is parsed against the knob's kind, so every kind mutates —
    /// and a knob's kind can never change, only its payload. Returns the
    /// path of the changed knob on success. Fails with
    /// [`DomainError::FrozenGroup`] when the knob's *owning* group is
    /// finalized (ancestors do not gate), [`DomainError::UnknownKnob`]
    /// when nothing resolves, and [`DomainError::InvalidValue`] when the
    /// text does not parse — in which case the knob is left untouched.
    pub fn change_value(&mut self, name: &str, input: &str) -> Result<String, DomainError> {
        self.change_value_inner(name, input)
            .unwrap_or_else(|| {
                Err(DomainError::UnknownKnob {
                    name: name.to_string(),
                })
            })
    }

    /// `None` means "not in this subtree"; `Some(Err(..))` is a definitive
    /// failure that stops the search, mirroring first-match-wins lookup.
    fn change_value_inner(&mut self, name: &str, input: &str) -> Option<Result<String, DomainError>> {
        if let Some(knob) = self.knobs.get_mut(name) {
            let path = format!("{}:{}", self.name, name);
            if !self.mutable {
                return Some(Err(DomainError::FrozenGroup { path }));
            }
            return Some(knob.assign_text(input).map(|()| path));
        }
        for subgroup in self.subgroups.values_mut() {
            if let Some(outcome) = subgroup.change_value_inner(name, input) {
                return Some(match outcome {
                    Ok(path) => Ok(format!("{}:{}", self.name, path)),
                    Err(DomainError::FrozenGroup { path }) => Err(DomainError::FrozenGroup {
                        path: format!("{}:{}", self.name, path),
                    }),
                    Err(other) => Err(other),
                });
            }
        }
        None
    }

    /// One-way transition to immutable. Acts on this node only; children
    /// keep their own flags.
    pub fn finalize(&mut self) {
        self.mutable = false;
    }

    /// Freeze this node and every descendant.
    pub fn finalize_tree(&mut self) {
        self.mutable = false;
        for subgroup in self.subgroups.values_mut() {
            subgroup.finalize_tree();
        }
    }
}
