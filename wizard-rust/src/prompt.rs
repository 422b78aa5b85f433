use crate::answers::AnswerSet;

fn list_or<'a>(labels: &[&'a str], placeholder: &'a str) -> String {
    if labels.is_empty() {
        placeholder.to_string()
    } else {
        labels.join(", ")
    }
}

fn field_or(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Assemble the image-generation prompt from the answers.
///
/// Deterministic and total: every field left empty by the user is replaced
/// by its placeholder, so an entirely empty answer set still produces the
/// full template. Deciding whether an all-empty submission should go out at
/// all is the orchestrator's call, not this function's.
#[must_use]
pub fn build_prompt(answers: &AnswerSet) -> String {
    let strengths = answers.selected_strengths();
    let develop = answers.selected_develop();
    let interests = answers.selected_interests();
    let postures = answers.selected_postures();
    let styles = answers.selected_styles();
    let words = answers.non_empty_words();
    let jobs = answers.non_empty_jobs();

    let job_line = if jobs.is_empty() {
        if answers.exploring {
            "à explorer".to_string()
        } else {
            "à déterminer".to_string()
        }
    } else {
        jobs.join(", ")
    };

    let mut lines = vec![
        "Crée un avatar inspirant représentant une personne jeune adulte (environ 30 ans) pour un public d'enfants.".to_string(),
        "Tous les mots dans l'image doivent être en français simple. Pas d'anglais. Si tu hésites, privilégie un pictogramme plutôt que du texte.".to_string(),
        "Illustrer chaque compétence, centre d'intérêt et métier uniquement par des pictogrammes/icônes/symboles clairs et faciles à comprendre par des enfants.".to_string(),
        "Place 5 à 6 pictogrammes de métiers autour de l'avatar (sans texte).".to_string(),
        format!("Genre : {}", field_or(&answers.gender, "peu importe")),
        format!("Cheveux : {}", field_or(&answers.hair, "non précisé")),
        format!("Teint : {}", field_or(&answers.skin_tone, "peu importe")),
        format!(
            "Expression du visage : {}",
            field_or(&answers.expression, "calme ou inspiré")
        ),
        format!("Posture : {}", list_or(&postures, "non précisée")),
        format!("Style vestimentaire : {}", list_or(&styles, "non précisé")),
        format!("3 mots pour décrire l’avatar : {}", list_or(&words, "non précisés")),
        String::new(),
        "Compétences et qualités :".to_string(),
        format!(
            "Compétences montrées pendant le sport : {}",
            list_or(&strengths, "non précisées")
        ),
        format!(
            "Compétences à développer : {}",
            list_or(&develop, "non précisées")
        ),
        format!("Centres d’intérêt : {}", list_or(&interests, "non précisés")),
        String::new(),
        format!("Métiers possibles : {job_line}"),
        "Les pictogrammes doivent rester accueillants, positifs et adaptés pour des enfants.".to_string(),
    ];

    if answers.exploring && jobs.is_empty() {
        lines.push(
            "La personne est encore en exploration : proposer des pictogrammes de métiers variés adaptés aux enfants."
                .to_string(),
        );
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{AVATAR_POSTURES, AVATAR_STYLES, COGNITIVE, DEVELOP, EMOTIONAL, INTERESTS, SOCIAL};

    fn filled_answers() -> AnswerSet {
        let mut answers = AnswerSet::new();
        answers.toggle_strength(COGNITIVE[0].label);
        answers.toggle_strength(COGNITIVE[1].label);
        answers.toggle_strength(EMOTIONAL[0].label);
        answers.toggle_strength(SOCIAL[0].label);
        answers.toggle_develop(DEVELOP[3].label);
        answers.toggle_interest(INTERESTS[3].label);
        answers.set_job(0, "Vétérinaire");
        answers.gender = "Féminin".to_string();
        answers.expression = "Curieux".to_string();
        answers.toggle_posture(AVATAR_POSTURES[0]);
        answers.hair = "mi-longs, ondulés".to_string();
        answers.toggle_style(AVATAR_STYLES[1]);
        answers.skin_tone = "Moyen".to_string();
        answers.set_word(0, "créative");
        answers
    }

    #[test]
    fn output_is_deterministic() {
        let answers = filled_answers();
        assert_eq!(build_prompt(&answers), build_prompt(&answers));
    }

    #[test]
    fn filled_fields_appear_and_their_placeholders_do_not() {
        let prompt = build_prompt(&filled_answers());
        assert!(prompt.contains("Vétérinaire"));
        assert!(prompt.contains(COGNITIVE[0].label));
        assert!(prompt.contains(COGNITIVE[1].label));
        assert!(prompt.contains(EMOTIONAL[0].label));
        assert!(prompt.contains(SOCIAL[0].label));
        assert!(prompt.contains(DEVELOP[3].label));
        assert!(prompt.contains(INTERESTS[3].label));
        assert!(prompt.contains("Genre : Féminin"));
        assert!(prompt.contains("Cheveux : mi-longs, ondulés"));
        assert!(!prompt.contains("non précisées"));
        assert!(!prompt.contains("à déterminer"));
    }

    #[test]
    fn empty_answers_still_produce_the_full_template() {
        let prompt = build_prompt(&AnswerSet::new());
        assert!(!prompt.trim().is_empty());
        assert!(prompt.contains("Genre : peu importe"));
        assert!(prompt.contains("Cheveux : non précisé\n"));
        assert!(prompt.contains("Expression du visage : calme ou inspiré"));
        assert!(prompt.contains("Posture : non précisée"));
        assert!(prompt.contains("Style vestimentaire : non précisé\n"));
        assert!(prompt.contains("3 mots pour décrire l’avatar : non précisés"));
        assert!(prompt.contains("Compétences montrées pendant le sport : non précisées"));
        assert!(prompt.contains("Compétences à développer : non précisées"));
        assert!(prompt.contains("Centres d’intérêt : non précisés"));
        assert!(prompt.contains("Métiers possibles : à déterminer"));
    }

    #[test]
    fn exploring_without_jobs_adds_the_exploration_line() {
        let mut answers = AnswerSet::new();
        answers.exploring = true;
        let prompt = build_prompt(&answers);
        assert!(prompt.contains("Métiers possibles : à explorer"));
        assert!(prompt.contains("La personne est encore en exploration"));

        answers.set_job(0, "Pilote");
        let prompt = build_prompt(&answers);
        assert!(prompt.contains("Métiers possibles : Pilote"));
        assert!(!prompt.contains("La personne est encore en exploration"));
    }

    #[test]
    fn strengths_emit_in_catalog_order_not_selection_order() {
        let mut answers = AnswerSet::new();
        answers.toggle_strength(SOCIAL[0].label);
        answers.toggle_strength(COGNITIVE[0].label);
        let prompt = build_prompt(&answers);
        let line = prompt
            .lines()
            .find(|line| line.starts_with("Compétences montrées pendant le sport"))
            .unwrap();
        assert_eq!(
            line,
            format!(
                "Compétences montrées pendant le sport : {}, {}",
                COGNITIVE[0].label, SOCIAL[0].label
            )
        );
    }
}
