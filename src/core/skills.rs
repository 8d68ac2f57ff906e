use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

/// Built-in short-form → expansion table
const DEFAULT_ACRONYMS: &[(&str, &[&str])] = &[
    ("aws", &["amazon web services"]),
    ("gcp", &["google cloud platform"]),
    ("azure", &["microsoft azure"]),
    ("js", &["javascript"]),
    ("ts", &["typescript"]),
    ("ml", &["machine learning"]),
    ("ai", &["artificial intelligence"]),
    ("ui", &["user interface"]),
    ("ux", &["user experience"]),
    ("ci/cd", &["continuous integration", "continuous deployment"]),
    ("k8s", &["kubernetes"]),
    ("react", &["reactjs", "react.js"]),
    ("node", &["nodejs", "node.js"]),
    ("vue", &["vuejs", "vue.js"]),
    ("dotnet", &[".net"]),
    ("c#", &["c sharp"]),
    ("cpp", &["c++", "c plus plus"]),
    ("qa", &["quality assurance"]),
    ("seo", &["search engine optimization"]),
    ("llm", &["large language model"]),
    ("nlp", &["natural language processing"]),
    ("db", &["database"]),
    ("sql", &["structured query language"]),
    ("nosql", &["non relational", "non-relational"]),
    ("rest", &["restful"]),
    ("api", &["application programming interface"]),
];

/// Immutable acronym dictionary, keyed and valued by normalized forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymTable {
    entries: HashMap<String, Vec<String>>,
}

impl AcronymTable {
    /// Empty table (no acronym expansion at all)
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, Vec<V>)>,
    {
        let mut table = Self::empty();
        for (short, expansions) in pairs {
            table.insert(short.as_ref(), expansions.iter().map(|e| e.as_ref()));
        }
        table
    }

    /// Return a copy with extra entries merged in (expansions are appended)
    pub fn extended_with(&self, extra: &HashMap<String, Vec<String>>) -> Self {
        let mut table = self.clone();
        // Sorted so the merge order never depends on hash iteration
        let mut keys: Vec<&String> = extra.keys().collect();
        keys.sort();
        for key in keys {
            table.insert(key, extra[key].iter().map(String::as_str));
        }
        table
    }

    fn insert<'a>(&mut self, short: &str, expansions: impl Iterator<Item = &'a str>) {
        let key = normalize_skill(short);
        if key.is_empty() {
            return;
        }
        let entry = self.entries.entry(key).or_default();
        for expansion in expansions {
            let normalized = normalize_skill(expansion);
            if !normalized.is_empty() && !entry.contains(&normalized) {
                entry.push(normalized);
            }
        }
    }

    pub fn expansions(&self, short: &str) -> Option<&[String]> {
        self.entries.get(short).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AcronymTable {
    fn default() -> Self {
        Self::from_pairs(
            DEFAULT_ACRONYMS
                .iter()
                .map(|(short, expansions)| (*short, expansions.to_vec())),
        )
    }
}

/// Normalize a skill for comparison
///
/// Lowercases, replaces everything except letters, digits, `+`, `#` and `.`
/// with spaces, then collapses whitespace. "C++", "C#" and "Node.js" survive.
pub fn normalize_skill(skill: &str) -> String {
    let replaced: String = skill
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '+' | '#' | '.') {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A required skill bound to the candidate skill that satisfied it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPair {
    pub required: String,
    pub candidate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillListMatch {
    pub matched: Vec<SkillPair>,
    pub missing: Vec<String>,
}

/// Fuzzy skill comparison backed by an injected acronym table
#[derive(Debug, Clone, Default)]
pub struct SkillMatcher {
    acronyms: AcronymTable,
}

impl SkillMatcher {
    pub fn new(acronyms: AcronymTable) -> Self {
        Self { acronyms }
    }

    pub fn acronyms(&self) -> &AcronymTable {
        &self.acronyms
    }

    pub fn normalize(&self, skill: &str) -> String {
        normalize_skill(skill)
    }

    /// Decide whether two skill names refer to the same skill
    ///
    /// Checks, first hit wins:
    /// 1. normalized equality
    /// 2. acronym expansion on either side
    /// 3. substring containment (both longer than 2 chars)
    /// 4. a single edit (length gap ≤ 2, shorter side longer than 3 chars)
    pub fn are_skills_match(&self, a: &str, b: &str) -> bool {
        let s1 = normalize_skill(a);
        let s2 = normalize_skill(b);

        if s1 == s2 {
            return true;
        }

        // Past equality, an empty side would contain-match everything
        if s1.is_empty() || s2.is_empty() {
            return false;
        }

        if self.acronym_match(&s1, &s2) {
            return true;
        }

        let len1 = s1.chars().count();
        let len2 = s2.chars().count();

        if len1 > 2 && len2 > 2 && (s1.contains(&s2) || s2.contains(&s1)) {
            return true;
        }

        if len1.abs_diff(len2) <= 2 && len1.min(len2) > 3 {
            return levenshtein(&s1, &s2) <= 1;
        }

        false
    }

    /// Acronym hits have no length guard: "ml" matches "r" because
    /// "machine learning" contains it.
    fn acronym_match(&self, s1: &str, s2: &str) -> bool {
        let expands_to = |short: &str, other: &str| {
            self.acronyms.expansions(short).is_some_and(|expansions| {
                expansions
                    .iter()
                    .any(|full| full.contains(other) || other.contains(full.as_str()))
            })
        };

        expands_to(s1, s2) || expands_to(s2, s1)
    }

    /// Greedy list matching
    ///
    /// Each required skill binds to the first candidate (in the given order)
    /// that matches. Searches are independent, so one candidate may satisfy
    /// several requirements.
    pub fn match_skill_lists<R, C>(&self, required: &[R], candidates: &[C]) -> SkillListMatch
    where
        R: AsRef<str>,
        C: AsRef<str>,
    {
        let mut result = SkillListMatch::default();

        for req in required {
            let req = req.as_ref();
            match candidates
                .iter()
                .map(|cand| cand.as_ref())
                .find(|cand| self.are_skills_match(req, cand))
            {
                Some(cand) => result.matched.push(SkillPair {
                    required: req.to_string(),
                    candidate: cand.to_string(),
                }),
                None => result.missing.push(req.to_string()),
            }
        }

        result
    }

    /// Greedy matching that removes a candidate from the pool once bound
    pub fn match_skill_lists_exclusive<R, C>(&self, required: &[R], candidates: &[C]) -> SkillListMatch
    where
        R: AsRef<str>,
        C: AsRef<str>,
    {
        let mut result = SkillListMatch::default();
        let mut taken = vec![false; candidates.len()];

        for req in required {
            let req = req.as_ref();
            let hit = candidates
                .iter()
                .enumerate()
                .find(|(i, cand)| !taken[*i] && self.are_skills_match(req, cand.as_ref()));

            match hit {
                Some((i, cand)) => {
                    taken[i] = true;
                    result.matched.push(SkillPair {
                        required: req.to_string(),
                        candidate: cand.as_ref().to_string(),
                    });
                }
                None => result.missing.push(req.to_string()),
            }
        }

        result
    }
}
