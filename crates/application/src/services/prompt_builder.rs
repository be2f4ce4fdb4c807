//! Prompt rendering from persona and session history

use domain::Conversation;

/// Fixed persona block that opens every prompt
const PERSONA: &str = "Eres Glain, una asistente de inteligencia artificial desarrollada por Glein S.A.S. \
para enseñar, dar ideas e incentivar la creatividad del usuario, de modo que le sea más fácil entender la IA en general.\n\
Tu rol es ser una guía experta en inteligencia artificial: responder dudas, explicar conceptos y orientar sobre herramientas y tendencias. \
No recolectas información del usuario; solo conversas de forma natural y fluida.\n\
Responde en 150 palabras nada más.";

/// Renders the single prompt sent to the model: persona, history block,
/// current user text, and the reply marker.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    /// Render the full prompt for one exchange.
    ///
    /// History lines come oldest-first with `U:` / `A:` prefixes; an empty
    /// history leaves the `[HISTORIAL]` block blank rather than omitting it.
    pub fn render(&self, conversation: &Conversation, user_text: &str) -> String {
        format!(
            "{PERSONA}\n[HISTORIAL]\n{}\n\n[USUARIO]\n{}\n\n[RESPUESTA]\n",
            conversation.history_lines(),
            user_text
        )
    }
}

#[cfg(test)]
mod tests {
    use domain::SessionId;

    use super::*;

    #[test]
    fn prompt_contains_all_sections() {
        let conv = Conversation::new(SessionId::new("s"));
        let prompt = PromptBuilder.render(&conv, "Hola");
        assert!(prompt.starts_with("Eres Glain"));
        assert!(prompt.contains("[HISTORIAL]\n\n"));
        assert!(prompt.contains("[USUARIO]\nHola"));
        assert!(prompt.ends_with("[RESPUESTA]\n"));
    }

    #[test]
    fn history_renders_oldest_first() {
        let mut conv = Conversation::new(SessionId::new("s"));
        conv.append_exchange("primera", "r1").unwrap();
        conv.append_exchange("segunda", "r2").unwrap();
        let prompt = PromptBuilder.render(&conv, "tercera");
        assert!(prompt.contains("[HISTORIAL]\nU: primera\nA: r1\nU: segunda\nA: r2\n\n"));
        let first = prompt.find("primera").unwrap();
        let second = prompt.find("segunda").unwrap();
        assert!(first < second);
    }

    #[test]
    fn current_text_is_not_in_history_block() {
        let conv = Conversation::new(SessionId::new("s"));
        let prompt = PromptBuilder.render(&conv, "pregunta actual");
        let historial = prompt.find("[HISTORIAL]").unwrap();
        let usuario = prompt.find("[USUARIO]").unwrap();
        let question = prompt.find("pregunta actual").unwrap();
        assert!(historial < usuario);
        assert!(question > usuario);
    }
}
