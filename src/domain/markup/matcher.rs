use super::term::Term;
use regex::{Regex, RegexBuilder};
use std::cmp::Reverse;
use std::collections::HashMap;

/// One piece of a narration, in document order.
///
/// Concatenating the borrowed text of `Text` and `Term` segments yields the
/// original content exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Raw narration text, not yet escaped
    Text(&'a str),
    /// A glossary term occurrence carrying its IPA override
    Term { text: &'a str, phonetic: &'a str },
    /// A timed pause added by the pause inserter
    Pause { millis: u32 },
}

impl Segment<'_> {
    pub fn source_text(&self) -> &str {
        match self {
            Segment::Text(text) | Segment::Term { text, .. } => text,
            Segment::Pause { .. } => "",
        }
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Alternatives compiled into one pattern before the set is split further
const TERMS_PER_PATTERN: usize = 64;
/// Compiled size allowed per pattern; long non-Latin terms grow quickly once
/// case folding is applied
const PATTERN_SIZE_LIMIT: usize = 32 * (1 << 20);

/// Terms that can claim a span: trimmed non-empty text, a transcription, one
/// entry per lowercased text (the first one wins), longest first.
fn override_candidates(terms: &[Term]) -> Vec<(&str, &str)> {
    let mut by_key: HashMap<String, (&str, &str)> = HashMap::new();
    for term in terms {
        let text = term.text.trim();
        if text.is_empty() {
            continue;
        }
        let Some(phonetic) = term.transcription() else {
            continue;
        };
        by_key
            .entry(text.to_lowercase())
            .or_insert((text, phonetic));
    }

    let mut candidates: Vec<(String, (&str, &str))> = by_key.into_iter().collect();
    candidates.sort_by(|(a_key, _), (b_key, _)| {
        (Reverse(a_key.chars().count()), a_key).cmp(&(Reverse(b_key.chars().count()), b_key))
    });
    candidates.into_iter().map(|(_, candidate)| candidate).collect()
}

/// Whole-word alternative: `\b` only on sides that begin or end with a word
/// character, otherwise a term like "St. Gregory" could never match.
fn alternative(text: &str) -> String {
    let starts_with_word = text.chars().next().is_some_and(is_word_char);
    let ends_with_word = text.chars().next_back().is_some_and(is_word_char);
    format!(
        "({}{}{})",
        if starts_with_word { r"\b" } else { "" },
        regex::escape(text),
        if ends_with_word { r"\b" } else { "" }
    )
}

fn build_pattern(candidates: &[(&str, &str)], size_limit: usize) -> Result<Regex, regex::Error> {
    let alternation = candidates
        .iter()
        .map(|(text, _)| alternative(text))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .size_limit(size_limit)
        .build()
}

#[derive(Debug, Clone, Copy)]
struct Hit {
    start: usize,
    end: usize,
    candidate: usize,
}

/// Compiled glossary, ready to split any number of texts.
///
/// Candidates are compiled in chunks that keep the longest-first order. A
/// chunk that exceeds the size limit is halved until it compiles; a single
/// term that still does not compile is rejected and reported through
/// [`TermMatcher::rejected`] instead of taking the other terms down with it.
#[derive(Debug)]
pub struct TermMatcher<'t> {
    candidates: Vec<(&'t str, &'t str)>,
    /// Compiled chunk and the index of its first candidate
    patterns: Vec<(Regex, usize)>,
    rejected: Vec<&'t str>,
}

impl<'t> TermMatcher<'t> {
    pub fn new(terms: &'t [Term]) -> Self {
        Self::with_size_limit(terms, PATTERN_SIZE_LIMIT)
    }

    fn with_size_limit(terms: &'t [Term], size_limit: usize) -> Self {
        let mut matcher = Self {
            candidates: override_candidates(terms),
            patterns: Vec::new(),
            rejected: Vec::new(),
        };

        let mut offset = 0;
        while offset < matcher.candidates.len() {
            let end = (offset + TERMS_PER_PATTERN).min(matcher.candidates.len());
            matcher.compile(offset, end, size_limit);
            offset = end;
        }

        if !matcher.rejected.is_empty() {
            tracing::warn!(
                rejected_count = matcher.rejected.len(),
                term_count = matcher.candidates.len(),
                "Some glossary terms could not be compiled and will not be overridden"
            );
        }

        matcher
    }

    fn compile(&mut self, start: usize, end: usize, size_limit: usize) {
        let built = build_pattern(&self.candidates[start..end], size_limit);
        match built {
            Ok(pattern) => self.patterns.push((pattern, start)),
            Err(e) if end - start == 1 => {
                tracing::debug!(error = %e, "Term pattern exceeds the size limit");
                self.rejected.push(self.candidates[start].0);
            }
            Err(_) => {
                let middle = start + (end - start) / 2;
                self.compile(start, middle, size_limit);
                self.compile(middle, end, size_limit);
            }
        }
    }

    /// Term texts left without an override because they could not be compiled
    pub fn rejected(&self) -> &[&'t str] {
        &self.rejected
    }

    fn find_at(&self, chunk: usize, content: &str, at: usize) -> Option<Hit> {
        let (pattern, first) = &self.patterns[chunk];
        let caps = pattern.captures_at(content, at)?;
        let group = (1..caps.len()).find(|&group| caps.get(group).is_some())?;
        let mat = caps.get(group)?;
        Some(Hit {
            start: mat.start(),
            end: mat.end(),
            candidate: first + group - 1,
        })
    }

    /// Split `content` into text and term segments in a single left-to-right
    /// pass.
    ///
    /// At any position the longest term claims the span and shorter terms can
    /// never match inside it: within a chunk alternatives are tried longest
    /// first, and across chunks the earliest start wins with ties going to the
    /// chunk holding longer terms. The matched segment keeps the content's own
    /// casing.
    pub fn segments<'a>(&self, content: &'a str) -> Vec<Segment<'a>>
    where
        't: 'a,
    {
        if content.is_empty() || self.patterns.is_empty() {
            return whole(content);
        }

        let mut pending: Vec<Option<Hit>> = (0..self.patterns.len())
            .map(|chunk| self.find_at(chunk, content, 0))
            .collect();
        let mut segments = Vec::new();
        let mut last_end = 0;

        loop {
            let next = pending
                .iter()
                .enumerate()
                .filter_map(|(chunk, hit)| hit.map(|hit| (chunk, hit)))
                .min_by_key(|(chunk, hit)| (hit.start, *chunk));
            let Some((_, hit)) = next else {
                break;
            };

            if hit.start > last_end {
                segments.push(Segment::Text(&content[last_end..hit.start]));
            }
            segments.push(Segment::Term {
                text: &content[hit.start..hit.end],
                phonetic: self.candidates[hit.candidate].1,
            });
            last_end = hit.end;

            for (chunk, slot) in pending.iter_mut().enumerate() {
                if slot.is_some_and(|next| next.start < last_end) {
                    *slot = self.find_at(chunk, content, last_end);
                }
            }
        }

        if last_end < content.len() {
            segments.push(Segment::Text(&content[last_end..]));
        }

        tracing::debug!(
            candidate_count = self.candidates.len(),
            match_count = segments
                .iter()
                .filter(|segment| matches!(segment, Segment::Term { .. }))
                .count(),
            "Glossary terms matched"
        );

        segments
    }
}

/// Split `content` into text and term segments, see [`TermMatcher::segments`]
pub fn match_terms<'a>(content: &'a str, terms: &'a [Term]) -> Vec<Segment<'a>> {
    TermMatcher::new(terms).segments(content)
}

/// The whole content as a single text segment (no overrides)
pub fn whole(content: &str) -> Vec<Segment<'_>> {
    if content.is_empty() {
        Vec::new()
    } else {
        vec![Segment::Text(content)]
    }
}
