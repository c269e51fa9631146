//! Catalogue normalization.
//!
//! Turns raw items into a [`NormalizedCatalogue`] in five passes:
//!
//! 1. **Repair and reject**: trim spellings, strip enclosing backticks,
//!    split paired delimiters, drop entries that cannot be repaired.
//! 2. **Partition**: anchor-marker descriptions become redirect stubs.
//! 3. **Canonical ids**: a raw id shared by differently spelled entries is
//!    rewritten to `{raw_id}{separator}{spelling}` for every member.
//! 4. **Collisions**: a later entry whose canonical id is taken is dropped.
//! 5. **Redirects**: stubs are followed (through chains) to a real entry
//!    and merged into its aliases.
//!
//! A final check reports spellings defined twice within one category.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use cdict_diagnostic::Diagnostic;

use crate::anchor::parse_anchor;
use crate::{
    Alias, Category, Entry, MalformedReason, NormalizeIssue, NormalizedCatalogue, RawEntry,
};

/// Knobs for normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Treat anchor-marker descriptions as redirect stubs. When off, such
    /// items are kept as ordinary entries with the marker as description.
    pub recognize_anchors: bool,
    /// Split operator spellings like `[ ]` into a spelling plus aliases.
    pub split_paired_delimiters: bool,
    /// Joins raw id and spelling when a shared raw id is split.
    pub id_separator: char,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            recognize_anchors: true,
            split_paired_delimiters: true,
            id_separator: '/',
        }
    }
}

/// Result of normalization: a best-effort catalogue plus every issue found.
#[derive(Clone, Debug)]
pub struct Normalized {
    pub catalogue: NormalizedCatalogue,
    pub report: Vec<NormalizeIssue>,
}

impl Normalized {
    /// The report rendered as warning diagnostics, in report order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.report.iter().map(NormalizeIssue::to_diagnostic).collect()
    }
}

/// Normalize with default options.
pub fn normalize(raw: &[RawEntry]) -> Normalized {
    normalize_with(raw, &NormalizeOptions::default())
}

/// A repaired, accepted item before canonical ids are assigned.
struct Candidate<'r> {
    index: usize,
    raw_id: &'r str,
    spelling: String,
    category: Category,
    description: &'r str,
    example: Option<&'r str>,
    aliases: Vec<Alias>,
}

/// A continuation item whose description only points at another id.
struct RedirectStub<'r> {
    index: usize,
    raw_id: &'r str,
    spelling: String,
    category: Category,
    target: &'r str,
}

enum RawRecord<'r> {
    Entry(Candidate<'r>),
    Redirect(RedirectStub<'r>),
}

/// Where a stub's chain of targets ended.
enum Resolution {
    Entry(usize),
    Dangling(String),
    Cycle(Vec<String>),
}

/// Normalize a raw catalogue. Never fails; see [`Normalized::report`].
#[tracing::instrument(level = "debug", skip_all, fields(raw = raw.len()))]
pub fn normalize_with(raw: &[RawEntry], options: &NormalizeOptions) -> Normalized {
    let mut report = Vec::new();
    let mut candidates = Vec::new();
    let mut stubs = Vec::new();

    for (index, item) in raw.iter().enumerate() {
        match repair(index, item, options) {
            Ok(RawRecord::Entry(candidate)) => candidates.push(candidate),
            Ok(RawRecord::Redirect(stub)) => stubs.push(stub),
            Err(issue) => {
                trace!(index, id = %item.id, "dropping malformed entry");
                report.push(issue);
            }
        }
    }

    let mut kept = assign_canonical_ids(candidates, options.id_separator, &mut report);
    resolve_redirects(&stubs, &mut kept, &mut report);
    check_shadowed_spellings(&kept, &mut report);

    let entries: Vec<Entry> = kept
        .into_iter()
        .map(|(canonical_id, c)| Entry {
            canonical_id,
            raw_id: c.raw_id.to_owned(),
            spelling: c.spelling,
            category: c.category,
            description: c.description.to_owned(),
            example: c.example.map(str::to_owned),
            aliases: c.aliases,
        })
        .collect();

    debug!(
        entries = entries.len(),
        stubs = stubs.len(),
        issues = report.len(),
        "normalized catalogue"
    );

    Normalized {
        catalogue: NormalizedCatalogue::from_entries(entries),
        report,
    }
}

// ─── Repair ────────────────────────────────────────────────────

fn repair<'r>(
    index: usize,
    item: &'r RawEntry,
    options: &NormalizeOptions,
) -> Result<RawRecord<'r>, NormalizeIssue> {
    let raw_id = item.id.trim();
    let mut spelling = strip_backticks(item.token.trim()).to_owned();
    let malformed = |spelling: &str, reason| NormalizeIssue::MalformedEntry {
        index,
        raw_id: raw_id.to_owned(),
        spelling: spelling.to_owned(),
        reason,
    };

    if raw_id.is_empty() {
        return Err(malformed(&spelling, MalformedReason::MissingId));
    }

    let mut aliases = Vec::new();
    if options.split_paired_delimiters && item.category == Category::Operator {
        if let Some((first, rest)) = split_paired(&spelling) {
            aliases = rest
                .into_iter()
                .map(|part| Alias::new(part, Category::Operator))
                .collect();
            spelling = first;
        }
    }

    if spelling.is_empty() {
        return Err(malformed(&spelling, MalformedReason::EmptySpelling));
    }
    if !item.category.accepts(&spelling) {
        return Err(malformed(&spelling, MalformedReason::InvalidSpelling));
    }

    let description = item.description.trim();
    if options.recognize_anchors {
        if let Some(target) = parse_anchor(description) {
            return Ok(RawRecord::Redirect(RedirectStub {
                index,
                raw_id,
                spelling,
                category: item.category,
                target,
            }));
        }
    }
    if description.is_empty() {
        return Err(malformed(&spelling, MalformedReason::EmptyDescription));
    }

    Ok(RawRecord::Entry(Candidate {
        index,
        raw_id,
        spelling,
        category: item.category,
        description,
        example: item.example.as_deref().filter(|e| !e.trim().is_empty()),
        aliases,
    }))
}

/// `` `->` `` becomes `->`. A lone backtick is left alone.
fn strip_backticks(spelling: &str) -> &str {
    spelling
        .strip_prefix('`')
        .and_then(|s| s.strip_suffix('`'))
        .map_or(spelling, str::trim)
}

/// Split `"[ ]"` into `"["` plus alias `"]"`.
///
/// Returns `None` unless the spelling has whitespace-separated parts that
/// are each valid operator spellings.
fn split_paired(spelling: &str) -> Option<(String, Vec<String>)> {
    let mut parts = spelling.split_whitespace();
    let first = parts.next()?;
    let rest: Vec<String> = parts
        .filter(|part| *part != first)
        .map(str::to_owned)
        .collect();
    if rest.is_empty() {
        return None;
    }
    let all_valid = std::iter::once(first)
        .chain(rest.iter().map(String::as_str))
        .all(|part| Category::Operator.accepts(part));
    all_valid.then(|| (first.to_owned(), rest))
}

// ─── Canonical Ids ─────────────────────────────────────────────

/// Assign canonical ids and drop entries whose id is already taken.
fn assign_canonical_ids<'r>(
    candidates: Vec<Candidate<'r>>,
    separator: char,
    report: &mut Vec<NormalizeIssue>,
) -> Vec<(String, Candidate<'r>)> {
    let mut spellings_by_id: FxHashMap<&str, FxHashSet<&str>> = FxHashMap::default();
    for c in &candidates {
        spellings_by_id
            .entry(c.raw_id)
            .or_default()
            .insert(c.spelling.as_str());
    }
    let shared: FxHashSet<&str> = spellings_by_id
        .into_iter()
        .filter(|(_, spellings)| spellings.len() > 1)
        .map(|(id, _)| id)
        .collect();

    let ids: Vec<String> = candidates
        .iter()
        .map(|c| {
            if shared.contains(c.raw_id) {
                format!("{}{separator}{}", c.raw_id, c.spelling)
            } else {
                c.raw_id.to_owned()
            }
        })
        .collect();

    let mut taken: FxHashMap<String, usize> = FxHashMap::default();
    let mut kept: Vec<(String, Candidate<'r>)> = Vec::with_capacity(candidates.len());
    for (canonical_id, candidate) in ids.into_iter().zip(candidates) {
        if let Some(&pos) = taken.get(&canonical_id) {
            let first = &kept[pos].1;
            trace!(index = candidate.index, %canonical_id, "dropping duplicate entry");
            report.push(NormalizeIssue::ConflictingDuplicate {
                index: candidate.index,
                kept_index: first.index,
                canonical_id,
                spelling: candidate.spelling,
                kept_spelling: first.spelling.clone(),
            });
            continue;
        }
        if canonical_id != candidate.raw_id {
            trace!(raw_id = candidate.raw_id, %canonical_id, "split shared raw id");
        }
        taken.insert(canonical_id.clone(), kept.len());
        kept.push((canonical_id, candidate));
    }
    kept
}

// ─── Redirects ─────────────────────────────────────────────────

fn resolve_redirects(
    stubs: &[RedirectStub<'_>],
    kept: &mut [(String, Candidate<'_>)],
    report: &mut Vec<NormalizeIssue>,
) {
    let resolutions: Vec<Resolution> = {
        let mut by_id: FxHashMap<&str, usize> = FxHashMap::default();
        for (pos, (canonical_id, _)) in kept.iter().enumerate() {
            by_id.insert(canonical_id.as_str(), pos);
        }
        // Raw ids answer only where no canonical id already does.
        for (pos, (_, c)) in kept.iter().enumerate() {
            by_id.entry(c.raw_id).or_insert(pos);
        }
        let mut stub_by_id: FxHashMap<&str, &RedirectStub<'_>> = FxHashMap::default();
        for stub in stubs {
            stub_by_id.entry(stub.raw_id).or_insert(stub);
        }
        stubs
            .iter()
            .map(|stub| follow(stub, &by_id, &stub_by_id))
            .collect()
    };

    for (stub, resolution) in stubs.iter().zip(resolutions) {
        match resolution {
            Resolution::Entry(pos) => {
                let (canonical_id, target) = &mut kept[pos];
                trace!(stub = stub.raw_id, target = %canonical_id, "merged redirect");
                // The alias keeps the stub's category, so an identifier stub
                // naming an operator never becomes an operator spelling.
                let alias = Alias::new(stub.spelling.clone(), stub.category);
                let is_own =
                    target.category == alias.category && target.spelling == alias.spelling;
                if !is_own && !target.aliases.contains(&alias) {
                    target.aliases.push(alias);
                }
            }
            Resolution::Dangling(target) => {
                report.push(NormalizeIssue::DanglingRedirect {
                    index: stub.index,
                    stub_id: stub.raw_id.to_owned(),
                    spelling: stub.spelling.clone(),
                    target,
                });
            }
            Resolution::Cycle(chain) => {
                report.push(NormalizeIssue::RedirectCycle {
                    index: stub.index,
                    spelling: stub.spelling.clone(),
                    chain,
                });
            }
        }
    }
}

/// Follow a stub through any chain of stubs to a real entry.
fn follow<'r>(
    stub: &RedirectStub<'r>,
    by_id: &FxHashMap<&str, usize>,
    stub_by_id: &FxHashMap<&str, &RedirectStub<'r>>,
) -> Resolution {
    let mut chain = vec![stub.raw_id.to_owned()];
    let mut target = stub.target;
    loop {
        if let Some(&pos) = by_id.get(target) {
            return Resolution::Entry(pos);
        }
        let Some(next) = stub_by_id.get(target) else {
            return Resolution::Dangling(target.to_owned());
        };
        let seen = chain.iter().any(|id| id == target);
        chain.push(target.to_owned());
        if seen {
            return Resolution::Cycle(chain);
        }
        target = next.target;
    }
}

// ─── Spelling Uniqueness ───────────────────────────────────────

fn check_shadowed_spellings(kept: &[(String, Candidate<'_>)], report: &mut Vec<NormalizeIssue>) {
    let mut first: FxHashMap<(Category, &str), &str> = FxHashMap::default();
    for (canonical_id, c) in kept {
        match first.get(&(c.category, c.spelling.as_str())) {
            Some(&winner) => report.push(NormalizeIssue::ShadowedSpelling {
                category: c.category,
                spelling: c.spelling.clone(),
                winner: winner.to_owned(),
                shadowed: canonical_id.clone(),
            }),
            None => {
                first.insert((c.category, c.spelling.as_str()), canonical_id.as_str());
            }
        }
    }
}
