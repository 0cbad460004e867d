use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::restriction::{Category, RestrictionRule, Scope};
use crate::rule_matcher::RuleMatcher;

type ScopeRules = BTreeMap<Scope, Vec<CompiledRule>>;

/// A rule paired with its matcher, compiled once when the set is built.
///
/// Serializes as the bare rule; the matcher is rebuilt on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RestrictionRule", into = "RestrictionRule")]
pub struct CompiledRule {
    rule: RestrictionRule,
    matcher: RuleMatcher,
}

impl CompiledRule {
    pub fn rule(&self) -> &RestrictionRule {
        &self.rule
    }

    pub fn matcher(&self) -> &RuleMatcher {
        &self.matcher
    }
}

impl From<RestrictionRule> for CompiledRule {
    fn from(rule: RestrictionRule) -> Self {
        let matcher = RuleMatcher::compile(rule.scope, &rule.value);
        Self { rule, matcher }
    }
}

impl From<CompiledRule> for RestrictionRule {
    fn from(compiled: CompiledRule) -> Self {
        compiled.rule
    }
}

impl Deref for CompiledRule {
    type Target = RestrictionRule;

    fn deref(&self) -> &Self::Target {
        &self.rule
    }
}

/// Snapshot of every enabled rule, grouped by category then scope.
///
/// Immutable once built; a reload produces a new value instead of patching
/// this one. Rules inside a scope keep store load order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleSet {
    revision: u64,
    rules: BTreeMap<Category, ScopeRules>,
}

impl RuleSet {
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = RestrictionRule>,
    {
        let mut grouped: BTreeMap<Category, ScopeRules> = BTreeMap::new();
        let mut hasher = FxHasher::default();

        for rule in rules {
            rule.hash(&mut hasher);
            grouped
                .entry(rule.category)
                .or_default()
                .entry(rule.scope)
                .or_default()
                .push(CompiledRule::from(rule));
        }

        Self {
            revision: hasher.finish(),
            rules: grouped,
        }
    }

    pub fn empty() -> Self {
        Self::from_rules(std::iter::empty())
    }

    /// Content fingerprint: equal for rule sets built from the same rows in the same order.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn rules_for(&self, category: Category, scope: Scope) -> &[CompiledRule] {
        self.rules
            .get(&category)
            .and_then(|scopes| scopes.get(&scope))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rules
            .values()
            .flat_map(|scopes| scopes.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn category_len(&self, category: Category) -> usize {
        self.rules
            .get(&category)
            .map(|scopes| scopes.values().map(Vec::len).sum())
            .unwrap_or(0)
    }
}
