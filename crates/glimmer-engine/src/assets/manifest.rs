use serde::{Deserialize, Serialize};

/// Content manifest for a deployment of the page: the letter text, the
/// memory-card messages, and the quiz deck. Loaded from a JSON file at
/// runtime — the host fetches it and hands the string to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentManifest {
    /// Full letter body revealed by the typewriter.
    pub letter: String,
    /// Messages and icons for the memory-card grid.
    #[serde(default)]
    pub memory_cards: Vec<MemoryCardContent>,
    /// Quiz questions in presentation order.
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

/// One memory card: hidden message plus the icon shown on its face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryCardContent {
    pub message: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

/// One quiz question with its options and the index of the right answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
}

fn default_icon() -> String {
    "💕".to_string()
}

impl ContentManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let json = r#"{
            "letter": "Mi amor...",
            "memory_cards": [
                { "message": "La primera vez que te vi.", "icon": "💖" },
                { "message": "Tu risa." }
            ],
            "quiz": [
                {
                    "prompt": "¿Cuál es mi flor favorita?",
                    "options": ["Rosas", "Gerberas", "Tulipanes", "Girasoles"],
                    "correct": 1
                }
            ]
        }"#;
        let manifest = ContentManifest::from_json(json).unwrap();
        assert_eq!(manifest.letter, "Mi amor...");
        assert_eq!(manifest.memory_cards.len(), 2);
        assert_eq!(manifest.memory_cards[0].icon, "💖");
        assert_eq!(manifest.memory_cards[1].icon, "💕"); // default
        assert_eq!(manifest.quiz[0].correct, 1);
        assert_eq!(manifest.quiz[0].options.len(), 4);
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = ContentManifest::from_json(r#"{ "letter": "hola" }"#).unwrap();
        assert!(manifest.memory_cards.is_empty());
        assert!(manifest.quiz.is_empty());
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        assert!(ContentManifest::from_json("{").is_err());
        assert!(ContentManifest::from_json(r#"{ "quiz": [] }"#).is_err()); // letter missing
    }
}
