use serde::{Deserialize, Serialize};

/// Classifier outcome. Each category carries exactly one canned clarifying
/// reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    Work,
    Family,
    Couple,
    Cafe,
    Restaurant,
    Location,
    Generic,
}

/// Keyword rules in priority order. Earlier rows shadow later ones when a
/// message matches several keyword sets.
const RULES: &[(&[&str], ResponseCategory)] = &[
    (
        &["trabajo", "trabajar", "oficina", "wifi"],
        ResponseCategory::Work,
    ),
    (
        &["familia", "niños", "hijos", "parque"],
        ResponseCategory::Family,
    ),
    (
        &["pareja", "cita", "romántico", "novio", "novia"],
        ResponseCategory::Couple,
    ),
    (&["cafetería", "café"], ResponseCategory::Cafe),
    (
        &["restaurante", "comer", "comida"],
        ResponseCategory::Restaurant,
    ),
    (&["cerca", "barrio", "zona"], ResponseCategory::Location),
];

/// Words that mark a message as a concrete search request.
const SEARCH_TRIGGERS: &[&str] = &["busco", "quiero", "necesito"];

/// Map free-form chat input to a response category. Rule-based, ordered,
/// first-match-wins over the lowercased input; substring containment, not
/// tokenized, so a keyword embedded in a longer word also matches. Total:
/// anything unmatched falls back to `Generic`.
pub fn classify(text: &str) -> ResponseCategory {
    let lower = text.to_lowercase();

    for (keywords, category) in RULES {
        if contains_any(&lower, keywords) {
            return *category;
        }
    }

    ResponseCategory::Generic
}

/// Whether a submitted message reads as a concrete search the assistant
/// should offer to run: longer than 10 characters and containing one of the
/// trigger words. The check is lowercase-normalized, matching the
/// classifier.
pub fn wants_search(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.chars().count() > 10 && contains_any(&trimmed.to_lowercase(), SEARCH_TRIGGERS)
}

impl ResponseCategory {
    /// The category's fixed clarifying reply.
    pub fn canned_reply(self) -> &'static str {
        match self {
            Self::Work => {
                "¡Perfecto! Veo que buscas un lugar para trabajar. ¿Necesitas algo específico como wifi, enchufes, ambiente silencioso? ¿En qué zona te gustaría? Te puedo sugerir cafeterías y coworkings ideales."
            }
            Self::Family => {
                "¡Genial! Para salidas familiares tengo varias opciones. ¿Prefieres actividades al aire libre como parques, o lugares cerrados como centros comerciales? ¿Qué edades tienen los niños?"
            }
            Self::Couple => {
                "¡Qué lindo! Para una cita romántica puedo recomendarte desde restaurantes íntimos hasta bares con terraza. ¿Prefieres algo más formal o casual? ¿Interior o al aire libre?"
            }
            Self::Cafe => {
                "¡Excelente elección! ¿La cafetería es para trabajar, reunirte con amigos o relajarte? ¿Prefieres ambiente más animado o tranquilo? ¿En qué barrio?"
            }
            Self::Restaurant => {
                "¡Perfecto! ¿Qué tipo de comida te gusta? ¿Es para una ocasión especial o algo casual? ¿Cuál es tu presupuesto aproximado?"
            }
            Self::Location => {
                "Entiendo que buscas algo cerca. ¿Me puedes decir en qué barrio o zona estás? Así te puedo dar recomendaciones más precisas."
            }
            Self::Generic => {
                "Entiendo que buscas un lugar especial. ¿Podrías darme más detalles? Por ejemplo: ¿es para trabajar, familia o pareja? ¿En qué zona? ¿Tienes alguna preferencia específica?"
            }
        }
    }
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
