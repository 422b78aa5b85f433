use serde::{Deserialize, Serialize};

use crate::answers::AnswerSet;

/// The ordered logical steps of the form. Order is fixed; validity of a step
/// never depends on later steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepId {
    Strengths,
    Develop,
    Interests,
    Jobs,
    Avatar,
    Preview,
}

pub const STEP_ORDER: [StepId; 6] = [
    StepId::Strengths,
    StepId::Develop,
    StepId::Interests,
    StepId::Jobs,
    StepId::Avatar,
    StepId::Preview,
];

/// The two strengths-step validity rules that have shipped. Neither is
/// canonical; integrators pick one per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthPolicy {
    /// At least one selection in each of the three categories.
    AtLeastOnePerCategory,
    /// Total selections across the categories within an inclusive range.
    TotalRange { min: usize, max: usize },
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        Self::TotalRange { min: 3, max: 5 }
    }
}

/// Avatar fields a deployment may require before leaving the avatar step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvatarField {
    Gender,
    Expression,
    Posture,
    Hair,
    Style,
    SkinTone,
    Words,
}

/// Configuration of the wizard's validity predicates.
/// # Default Values
/// - `strength_policy`: `TotalRange { min: 3, max: 5 }`
/// - `required_avatar_fields`: gender, expression, posture, hair, style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    pub strength_policy: StrengthPolicy,
    pub required_avatar_fields: Vec<AvatarField>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            strength_policy: StrengthPolicy::default(),
            required_avatar_fields: vec![
                AvatarField::Gender,
                AvatarField::Expression,
                AvatarField::Posture,
                AvatarField::Hair,
                AvatarField::Style,
            ],
        }
    }
}

/// Tracks which step the user is on and gates forward navigation on the
/// current step's validity. Refused transitions raise a validation-message
/// flag that clears whenever the step index changes.
#[derive(Debug, Clone, Default)]
pub struct FormWizard {
    config: WizardConfig,
    step_index: usize,
    show_validation: bool,
}

impl FormWizard {
    #[must_use]
    pub fn new(config: WizardConfig) -> Self {
        Self {
            config,
            step_index: 0,
            show_validation: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    #[must_use]
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    #[must_use]
    pub fn current_step(&self) -> StepId {
        STEP_ORDER[self.step_index]
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.step_index == STEP_ORDER.len() - 1
    }

    /// Whether the refused-transition message should currently be shown.
    #[must_use]
    pub fn show_validation(&self) -> bool {
        self.show_validation
    }

    fn avatar_field_satisfied(field: AvatarField, answers: &AnswerSet) -> bool {
        match field {
            AvatarField::Gender => !answers.gender.trim().is_empty(),
            AvatarField::Expression => !answers.expression.trim().is_empty(),
            AvatarField::Posture => !answers.selected_postures().is_empty(),
            AvatarField::Hair => !answers.hair.trim().is_empty(),
            AvatarField::Style => !answers.selected_styles().is_empty(),
            AvatarField::SkinTone => !answers.skin_tone.trim().is_empty(),
            AvatarField::Words => !answers.non_empty_words().is_empty(),
        }
    }

    #[must_use]
    pub fn is_step_valid(&self, step: StepId, answers: &AnswerSet) -> bool {
        match step {
            StepId::Strengths => match self.config.strength_policy {
                StrengthPolicy::AtLeastOnePerCategory => {
                    answers.cognitive_count() >= 1
                        && answers.emotional_count() >= 1
                        && answers.social_count() >= 1
                }
                StrengthPolicy::TotalRange { min, max } => {
                    (min..=max).contains(&answers.strength_count())
                }
            },
            StepId::Develop => answers.develop_count() >= 1,
            StepId::Interests => answers.interest_count() >= 1,
            StepId::Jobs => !answers.non_empty_jobs().is_empty() || answers.exploring,
            StepId::Avatar => self
                .config
                .required_avatar_fields
                .iter()
                .all(|field| Self::avatar_field_satisfied(*field, answers)),
            StepId::Preview => true,
        }
    }

    /// Advance to the next step if the current one is valid. Returns whether
    /// the transition happened; a refusal raises the validation flag.
    pub fn next(&mut self, answers: &AnswerSet) -> bool {
        if self.is_last_step() {
            return false;
        }
        if self.is_step_valid(self.current_step(), answers) {
            self.step_index += 1;
            self.show_validation = false;
            true
        } else {
            self.show_validation = true;
            false
        }
    }

    /// Step back. Always succeeds above step 0; a no-op at step 0.
    pub fn prev(&mut self) -> bool {
        if self.step_index == 0 {
            return false;
        }
        self.step_index -= 1;
        self.show_validation = false;
        true
    }

    /// Return to the first step unconditionally.
    pub fn jump_to_start(&mut self) {
        self.step_index = 0;
        self.show_validation = false;
    }
}
