//! Alternative slug generation.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::domain::content_filter::ContentChecker;
use crate::domain::repositories::LinkRegistry;
use crate::utils::canonicalize::canonicalize;

/// Maximum number of suggestions returned for one slug.
pub const MAX_SUGGESTIONS: usize = 5;

/// Shortest slug ever suggested.
pub const MIN_SUGGESTION_LENGTH: usize = 3;

/// Largest numeric suffix appended to a slug.
const MAX_NUMERIC_SUFFIX: u32 = 9999;

const PREFIXES: &[&str] = &["my-", "the-", "new-", "my", "the", "new"];

const SUFFIXES: &[&str] = &["-link", "link", "-url", "url", "-page"];

/// Letter → look-alike digit swaps used for the substituted candidate.
const SUBSTITUTIONS: &[(char, char)] = &[
    ('o', '0'),
    ('i', '1'),
    ('a', '4'),
    ('e', '3'),
    ('t', '7'),
    ('s', '5'),
    ('b', '8'),
    ('g', '6'),
];

/// Produces available, clean alternatives to a rejected slug.
///
/// Candidate families, tried in order while fewer than [`MAX_SUGGESTIONS`]
/// have been accepted:
///
/// 1. `<slug>-<0..=9999>`, a random number of times
/// 2. a random prefix from `my-`, `the-`, `new-` (with and without hyphen)
/// 3. a random suffix from `-link`, `link`, `-url`, `url`, `-page`
/// 4. the slug with its vowels removed
/// 5. the slug with one random letter swapped for a look-alike digit
///
/// A candidate is kept only if it is at least [`MIN_SUGGESTION_LENGTH`]
/// characters, differs from the base slug and every earlier suggestion, is
/// not prohibited and is not registered. Fewer than five suggestions is a
/// legitimate result.
///
/// Registry checks take the read path only. A suggestion can therefore be
/// claimed by a concurrent insert right after it is returned; suggestions are
/// advisory and re-checked on creation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuggestionEngine;

impl SuggestionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Generates up to [`MAX_SUGGESTIONS`] alternatives for `base`.
    pub fn generate<L, C, R>(
        &self,
        base: &str,
        registry: &L,
        filter: &C,
        rng: &mut R,
    ) -> Vec<String>
    where
        L: LinkRegistry + ?Sized,
        C: ContentChecker + ?Sized,
        R: Rng + ?Sized,
    {
        let mut pool = CandidatePool::new(base, registry, filter);

        let count = rng.random_range(1..=pool.remaining());
        for _ in 0..count {
            let n = rng.random_range(0..=MAX_NUMERIC_SUFFIX);
            pool.offer(format!("{base}-{n}"));
        }

        if pool.remaining() > 0 {
            let count = rng.random_range(1..=pool.remaining());
            for _ in 0..count {
                let prefix = PREFIXES[rng.random_range(0..PREFIXES.len())];
                pool.offer(format!("{prefix}{base}"));
            }
        }

        if pool.remaining() > 0 {
            let count = rng.random_range(1..=pool.remaining());
            for _ in 0..count {
                let suffix = SUFFIXES[rng.random_range(0..SUFFIXES.len())];
                pool.offer(format!("{base}{suffix}"));
            }
        }

        // Dropping vowels can leave "x-a-y" as "x--y" or "a-b" as "-b".
        pool.offer(canonicalize(&strip_vowels(base)));

        if let Some(candidate) = substitute_one(base, rng) {
            pool.offer(candidate);
        }

        debug!(
            "Generated {} suggestions for \"{}\"",
            pool.accepted.len(),
            base
        );
        pool.accepted
    }
}

/// Accepted suggestions plus everything already seen.
struct CandidatePool<'a, L: ?Sized, C: ?Sized> {
    registry: &'a L,
    filter: &'a C,
    seen: HashSet<String>,
    accepted: Vec<String>,
}

impl<'a, L, C> CandidatePool<'a, L, C>
where
    L: LinkRegistry + ?Sized,
    C: ContentChecker + ?Sized,
{
    fn new(base: &str, registry: &'a L, filter: &'a C) -> Self {
        Self {
            registry,
            filter,
            seen: HashSet::from([base.to_string()]),
            accepted: Vec::with_capacity(MAX_SUGGESTIONS),
        }
    }

    fn remaining(&self) -> usize {
        MAX_SUGGESTIONS - self.accepted.len()
    }

    fn offer(&mut self, candidate: String) {
        if self.remaining() == 0
            || candidate.len() < MIN_SUGGESTION_LENGTH
            || self.seen.contains(&candidate)
            || self.filter.contains(&candidate)
            || self.registry.exists(&candidate)
        {
            return;
        }

        self.seen.insert(candidate.clone());
        self.accepted.push(candidate);
    }
}

/// Removes the ASCII vowels `a e i o u`.
pub fn strip_vowels(slug: &str) -> String {
    slug.chars()
        .filter(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .collect()
}

/// Swaps one randomly chosen substitutable letter for its look-alike digit.
///
/// Returns `None` when `slug` has no substitutable letter.
pub fn substitute_one<R: Rng + ?Sized>(slug: &str, rng: &mut R) -> Option<String> {
    let eligible: Vec<(usize, char)> = slug
        .char_indices()
        .filter_map(|(i, c)| {
            SUBSTITUTIONS
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| (i, *to))
        })
        .collect();

    if eligible.is_empty() {
        return None;
    }

    let (at, replacement) = eligible[rng.random_range(0..eligible.len())];
    let mut result = String::with_capacity(slug.len());
    for (i, c) in slug.char_indices() {
        result.push(if i == at { replacement } else { c });
    }
    Some(result)
}
