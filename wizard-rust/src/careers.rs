use avenir_sdk::CareersRequest;
use serde::{Deserialize, Serialize};

use crate::answers::AnswerSet;

/// Job entry sent when the user checked "still exploring" and wrote nothing.
pub const EXPLORING_SENTINEL: &str = "en exploration";

/// Which body shape the career suggestion call uses. The deployed service
/// families disagree: the original family reads the raw answers, the
/// Google-backed one reads the full prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CareersVariant {
    /// `{ prompt }` — the service mines the image prompt itself.
    #[default]
    Prompt,
    /// `{ metiers, centresInteret }` — the service gets the raw answers.
    Profile,
}

/// Build the career suggestion request for the chosen variant. `prompt` is
/// the already-built image prompt; pure, no I/O.
#[must_use]
pub fn build_careers_request(
    answers: &AnswerSet,
    variant: CareersVariant,
    prompt: &str,
) -> CareersRequest {
    match variant {
        CareersVariant::Prompt => CareersRequest::Prompt {
            prompt: prompt.to_string(),
        },
        CareersVariant::Profile => {
            let mut metiers: Vec<String> = answers
                .non_empty_jobs()
                .into_iter()
                .map(str::to_string)
                .collect();
            if metiers.is_empty() && answers.exploring {
                metiers.push(EXPLORING_SENTINEL.to_string());
            }
            CareersRequest::Profile {
                metiers,
                centres_interet: answers
                    .selected_interests()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::INTERESTS;

    #[test]
    fn profile_variant_carries_jobs_and_interests() {
        let mut answers = AnswerSet::new();
        answers.set_job(1, "Vétérinaire");
        answers.toggle_interest(INTERESTS[0].label);

        let request = build_careers_request(&answers, CareersVariant::Profile, "unused");
        match request {
            CareersRequest::Profile {
                metiers,
                centres_interet,
            } => {
                assert_eq!(metiers, vec!["Vétérinaire"]);
                assert_eq!(centres_interet, vec![INTERESTS[0].label]);
            }
            CareersRequest::Prompt { .. } => panic!("wrong variant"),
        }
    }

    #[test]
    fn exploring_without_jobs_falls_back_to_the_sentinel() {
        let mut answers = AnswerSet::new();
        answers.exploring = true;

        let request = build_careers_request(&answers, CareersVariant::Profile, "unused");
        match request {
            CareersRequest::Profile { metiers, .. } => {
                assert_eq!(metiers, vec![EXPLORING_SENTINEL]);
            }
            CareersRequest::Prompt { .. } => panic!("wrong variant"),
        }
    }

    #[test]
    fn not_exploring_without_jobs_sends_an_empty_list() {
        let answers = AnswerSet::new();
        let request = build_careers_request(&answers, CareersVariant::Profile, "unused");
        match request {
            CareersRequest::Profile { metiers, .. } => assert!(metiers.is_empty()),
            CareersRequest::Prompt { .. } => panic!("wrong variant"),
        }
    }

    #[test]
    fn prompt_variant_forwards_the_prompt() {
        let answers = AnswerSet::new();
        let request = build_careers_request(&answers, CareersVariant::Prompt, "le prompt");
        match request {
            CareersRequest::Prompt { prompt } => assert_eq!(prompt, "le prompt"),
            CareersRequest::Profile { .. } => panic!("wrong variant"),
        }
    }
}
