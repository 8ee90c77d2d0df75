use crate::disease::DiseaseDefinition;
use crate::symptoms::{SymptomRule, SymptomRuleTable};

/// Relates a reported symptom id to a disease's canonical symptom phrases.
///
/// A keyword matches a phrase when either contains the other, case-insensitively.
/// This tolerates the gap between the short form token (`diarrhea`) and the
/// clinical phrase (`severe diarrhea`).
#[derive(Debug, Clone, Default)]
pub struct SymptomMatcher {
    rules: SymptomRuleTable,
}

impl SymptomMatcher {
    pub fn new(rules: SymptomRuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &SymptomRuleTable {
        &self.rules
    }

    pub fn rule(&self, symptom_id: &str) -> Option<&SymptomRule> {
        self.rules.get(symptom_id)
    }

    pub fn is_known(&self, symptom_id: &str) -> bool {
        self.rules.get(symptom_id).is_some()
    }

    /// Clinical weight of a symptom. Unknown ids weigh nothing.
    pub fn weight_of(&self, symptom_id: &str) -> f64 {
        self.rules.get(symptom_id).map_or(0.0, |r| r.weight)
    }

    /// First canonical phrase of `disease` that any keyword of `symptom_id` matches.
    ///
    /// `None` for unknown ids. A symptom counts at most once per disease, so
    /// callers only ever need the first hit.
    pub fn matched_phrase<'d>(
        &self,
        symptom_id: &str,
        disease: &'d DiseaseDefinition,
    ) -> Option<&'d str> {
        let rule = self.rules.get(symptom_id)?;
        disease
            .canonical_symptoms
            .iter()
            .find(|phrase| {
                let phrase = phrase.to_lowercase();
                rule.keywords.iter().any(|k| keyword_matches(k, &phrase))
            })
            .map(String::as_str)
    }

    pub fn matches_disease(&self, symptom_id: &str, disease: &DiseaseDefinition) -> bool {
        self.matched_phrase(symptom_id, disease).is_some()
    }
}

/// Bidirectional substring test on already-lowercased strings.
pub fn keyword_matches(keyword: &str, phrase: &str) -> bool {
    !keyword.is_empty() && !phrase.is_empty() && (phrase.contains(keyword) || keyword.contains(phrase))
}
