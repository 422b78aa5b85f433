//! The fixed option catalogs of the form. Declaration order is contractual:
//! selected labels are always emitted in catalog order, never in selection
//! order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillOption {
    pub label: &'static str,
    pub helper: Option<&'static str>,
}

const fn option(label: &'static str, helper: &'static str) -> SkillOption {
    SkillOption {
        label,
        helper: Some(helper),
    }
}

const fn bare(label: &'static str) -> SkillOption {
    SkillOption {
        label,
        helper: None,
    }
}

pub const COGNITIVE: [SkillOption; 4] = [
    option(
        "Prise de décision",
        "choisir rapidement à qui passer le ballon",
    ),
    option(
        "Résolution de problèmes",
        "adapter une stratégie quand la situation change",
    ),
    option(
        "Pensée stratégique",
        "décider qui attaque ou défend selon le contexte",
    ),
    option(
        "Attention et concentration",
        "rester focus malgré le bruit ou la pression",
    ),
];

pub const EMOTIONAL: [SkillOption; 4] = [
    option("Gestion du stress", "rester calme quand le point est décisif"),
    option(
        "Maîtrise de soi",
        "ne pas se laisser emporter par l'échec ou la frustration",
    ),
    option("Confiance en soi", "oser prendre une initiative"),
    option("Persévérance", "continuer l'effort même après une erreur"),
];

pub const SOCIAL: [SkillOption; 4] = [
    option("Communication", "« Passe ! À gauche ! »"),
    option("Coopération", "se placer, se relayer, aider un coéquipier"),
    option(
        "Leadership",
        "encourager, motiver, donner une impulsion positive au groupe",
    ),
    option(
        "Empathie",
        "tenir compte du niveau et de l'état des autres joueurs",
    ),
];

pub const DEVELOP: [SkillOption; 12] = [
    bare("Prise de décision"),
    bare("Résolution de problèmes"),
    bare("Pensée stratégique"),
    bare("Attention et concentration"),
    bare("Gestion du stress"),
    bare("Maîtrise de soi"),
    bare("Confiance en soi"),
    bare("Persévérance"),
    bare("Communication"),
    bare("Coopération"),
    bare("Leadership"),
    bare("Empathie"),
];

pub const INTERESTS: [SkillOption; 5] = [
    bare("Numérique / technologie"),
    bare("Création (design, vidéo, écriture, musique…)"),
    bare("Organisation / gestion de projets"),
    bare("Sciences / logique / recherche"),
    bare("Activités manuelles / terrain"),
];

pub const AVATAR_POSTURES: [&str; 5] = [
    "Confiant / droit",
    "Relax / décontracté",
    "En action / prêt à bouger",
    "Pensif / concentré",
    "Explorateur / aventurier",
];

pub const AVATAR_STYLES: [&str; 5] = [
    "Décontracté",
    "Sport",
    "Créatif",
    "Professionnel",
    "Futuriste",
];

pub const AVATAR_TEINTS: [&str; 5] = ["Clair", "Moyen", "Foncé", "Stylisé", "Peu importe"];

pub const AVATAR_GENDERS: [&str; 3] = ["Féminin", "Masculin", "Peu importe"];

pub const AVATAR_EXPRESSIONS: [&str; 4] = ["Confiant", "Calme", "Inspiré", "Curieux"];
