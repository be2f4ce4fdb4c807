//! Phonetic correction of speech transcriptions

use tracing::debug;

/// Domain terms the speech recognizer tends to mangle.
///
/// Correction snaps each transcribed word to the closest of these when the
/// similarity is high enough, leaving everything else untouched.
const EXPECTED_WORDS: &[&str] = &[
    "automatización",
    "ventas",
    "procesos",
    "GLAIN",
    "empresa",
    "auditoría",
    "soporte",
    "recursos",
    "diagnóstico",
    "inteligencia",
    "software",
    "hardware",
    "sistema",
    "plataforma",
    "tecnología",
    "optimización",
    "integración",
    "cliente",
    "proveedor",
    "finanzas",
    "marketing",
    "operaciones",
    "logística",
    "inventario",
    "compras",
    "cadena",
    "atención",
    "facturación",
    "nómina",
    "API",
    "nube",
    "servidor",
    "aplicación",
    "backend",
    "frontend",
    "seguridad",
    "criptografía",
    "blockchain",
    "IoT",
    "analítica",
    "machine",
    "modelo",
    "dashboard",
    "reporte",
    "KPI",
    "ERP",
    "CRM",
];

/// Minimum normalized similarity for a word to snap to a vocabulary term
const SIMILARITY_CUTOFF: f64 = 0.8;

/// Corrects likely mis-transcribed words against a fixed vocabulary.
///
/// Operates word-by-word on whitespace splits, so the token count of the
/// input is always preserved.
#[derive(Debug, Clone)]
pub struct PhoneticCorrector {
    vocabulary: Vec<String>,
    cutoff: f64,
}

impl Default for PhoneticCorrector {
    fn default() -> Self {
        Self::with_extra(&[], SIMILARITY_CUTOFF)
    }
}

impl PhoneticCorrector {
    /// Build a corrector over a custom vocabulary and cutoff
    pub fn new(vocabulary: Vec<String>, cutoff: f64) -> Self {
        Self { vocabulary, cutoff }
    }

    /// Built-in vocabulary extended with deployment-specific terms
    pub fn with_extra(extra: &[String], cutoff: f64) -> Self {
        let vocabulary = EXPECTED_WORDS
            .iter()
            .map(|w| (*w).to_string())
            .chain(extra.iter().cloned())
            .collect();
        Self::new(vocabulary, cutoff)
    }

    /// Correct each word in `text`, keeping word order and count
    pub fn correct(&self, text: &str) -> String {
        let corrected: Vec<&str> = text
            .split_whitespace()
            .map(|word| self.closest_match(word).unwrap_or(word))
            .collect();
        let result = corrected.join(" ");
        if result != text.split_whitespace().collect::<Vec<_>>().join(" ") {
            debug!(original = text, corrected = %result, "Phonetic correction applied");
        }
        result
    }

    /// Best vocabulary match at or above the cutoff, if any
    fn closest_match(&self, word: &str) -> Option<&str> {
        self.vocabulary
            .iter()
            .map(|candidate| (candidate, strsim::normalized_levenshtein(word, candidate)))
            .filter(|(_, score)| *score >= self.cutoff)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(candidate, _)| candidate.as_str())
    }
}
