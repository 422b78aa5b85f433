use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::options::{SkillOption, COGNITIVE, DEVELOP, EMOTIONAL, INTERESTS, SOCIAL};

/// At most 5 strengths across the three categories.
pub const MAX_STRENGTHS: usize = 5;
/// At most 3 skills to develop.
pub const MAX_DEVELOP: usize = 3;
/// At most 3 interests.
pub const MAX_INTERESTS: usize = 3;
/// The form offers five job inputs.
pub const JOB_SLOTS: usize = 5;
/// Three words describe the avatar.
pub const WORD_SLOTS: usize = 3;

/// The complete set of user-entered form responses at a point in time.
///
/// Selection ceilings are enforced at the moment of toggling: toggling "on"
/// a label when the category is already at its ceiling leaves the set
/// unchanged. Nothing here is an error; validation against step requirements
/// lives in the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    strengths: HashSet<String>,
    develop: HashSet<String>,
    interests: HashSet<String>,
    postures: HashSet<String>,
    styles: HashSet<String>,
    jobs: [String; JOB_SLOTS],
    pub exploring: bool,
    pub gender: String,
    pub expression: String,
    pub hair: String,
    pub skin_tone: String,
    words: [String; WORD_SLOTS],
}

fn toggle_capped(set: &mut HashSet<String>, label: &str, ceiling: usize) {
    if set.contains(label) {
        set.remove(label);
    } else if set.len() < ceiling {
        set.insert(label.to_string());
    }
}

fn toggle(set: &mut HashSet<String>, label: &str) {
    if !set.remove(label) {
        set.insert(label.to_string());
    }
}

/// Catalog labels currently selected, in declaration order.
fn selected_in<'a>(catalog: &'a [SkillOption], set: &HashSet<String>) -> Vec<&'a str> {
    catalog
        .iter()
        .filter(|option| set.contains(option.label))
        .map(|option| option.label)
        .collect()
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every answer, as when the user returns to the generator.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_strength(&mut self, label: &str) {
        toggle_capped(&mut self.strengths, label, MAX_STRENGTHS);
    }

    pub fn toggle_develop(&mut self, label: &str) {
        toggle_capped(&mut self.develop, label, MAX_DEVELOP);
    }

    pub fn toggle_interest(&mut self, label: &str) {
        toggle_capped(&mut self.interests, label, MAX_INTERESTS);
    }

    pub fn toggle_posture(&mut self, label: &str) {
        toggle(&mut self.postures, label);
    }

    pub fn toggle_style(&mut self, label: &str) {
        toggle(&mut self.styles, label);
    }

    pub fn set_job(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.jobs.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn set_word(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.words.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Strengths across the three categories, cognitive then emotional then
    /// social, each in declaration order.
    #[must_use]
    pub fn selected_strengths(&self) -> Vec<&str> {
        let mut labels = selected_in(&COGNITIVE, &self.strengths);
        labels.extend(selected_in(&EMOTIONAL, &self.strengths));
        labels.extend(selected_in(&SOCIAL, &self.strengths));
        labels
    }

    #[must_use]
    pub fn selected_develop(&self) -> Vec<&str> {
        selected_in(&DEVELOP, &self.develop)
    }

    #[must_use]
    pub fn selected_interests(&self) -> Vec<&str> {
        selected_in(&INTERESTS, &self.interests)
    }

    #[must_use]
    pub fn selected_postures(&self) -> Vec<&str> {
        crate::options::AVATAR_POSTURES
            .iter()
            .copied()
            .filter(|label| self.postures.contains(*label))
            .collect()
    }

    #[must_use]
    pub fn selected_styles(&self) -> Vec<&str> {
        crate::options::AVATAR_STYLES
            .iter()
            .copied()
            .filter(|label| self.styles.contains(*label))
            .collect()
    }

    #[must_use]
    pub fn cognitive_count(&self) -> usize {
        selected_in(&COGNITIVE, &self.strengths).len()
    }

    #[must_use]
    pub fn emotional_count(&self) -> usize {
        selected_in(&EMOTIONAL, &self.strengths).len()
    }

    #[must_use]
    pub fn social_count(&self) -> usize {
        selected_in(&SOCIAL, &self.strengths).len()
    }

    #[must_use]
    pub fn strength_count(&self) -> usize {
        self.strengths.len()
    }

    #[must_use]
    pub fn develop_count(&self) -> usize {
        self.develop.len()
    }

    #[must_use]
    pub fn interest_count(&self) -> usize {
        self.interests.len()
    }

    #[must_use]
    pub fn jobs(&self) -> &[String; JOB_SLOTS] {
        &self.jobs
    }

    /// Job entries the user actually filled in, in slot order.
    #[must_use]
    pub fn non_empty_jobs(&self) -> Vec<&str> {
        self.jobs
            .iter()
            .map(String::as_str)
            .filter(|job| !job.trim().is_empty())
            .collect()
    }

    #[must_use]
    pub fn words(&self) -> &[String; WORD_SLOTS] {
        &self.words
    }

    #[must_use]
    pub fn non_empty_words(&self) -> Vec<&str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|word| !word.trim().is_empty())
            .collect()
    }
}
