//! Remote text-suggestion call tracking and prompt composition.
//!
//! The studio can ask an external text service for a cover subtitle or
//! a product description. This module tracks one in-flight call per
//! trigger and builds the prompts; transport lives with the UI shell.

use crate::error::StudioError;
use vitrine_commerce::catalog::Product;

/// Lifecycle of a single remote suggestion call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CallState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl CallState {
    pub fn is_pending(&self) -> bool {
        matches!(self, CallState::Pending)
    }
}

/// Tracks one remote call slot. A trigger that is already pending
/// rejects a second begin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoteCall {
    state: CallState,
}

impl RemoteCall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CallState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Mark the call as in flight.
    pub fn begin(&mut self) -> Result<(), StudioError> {
        if self.state.is_pending() {
            return Err(StudioError::CallInFlight);
        }
        self.state = CallState::Pending;
        Ok(())
    }

    /// The call returned text; the caller applies it to the store.
    pub fn succeed(&mut self) {
        self.state = CallState::Succeeded;
    }

    /// The call failed; keep the message for the UI.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = CallState::Failed(message.into());
    }
}

/// Prompt for a cover subtitle suggestion.
pub fn subtitle_prompt(shop_name: &str) -> String {
    format!(
        "Crie uma frase curta, afetiva, poética e elegante para servir de \
         slogan/subtítulo de um ateliê de papelaria artesanal chamado \"{shop_name}\". \
         A frase deve transmitir carinho, exclusividade e memórias. \
         Máximo de 12 palavras. Responda apenas com a frase."
    )
}

/// Prompt for a product description suggestion.
///
/// Placeholder-named products are rejected; the service needs a real
/// name to write about.
pub fn description_prompt(product: &Product) -> Result<String, StudioError> {
    if product.has_placeholder_name() || product.name.trim().is_empty() {
        return Err(StudioError::UnnamedProduct);
    }
    Ok(format!(
        "Você é um especialista em marketing para papelaria personalizada \
         artesanal. Escreva uma descrição atraente, curta (máximo 3 frases) e \
         vendedora para um produto chamado: \"{}\". Use um tom de voz delicado, \
         afetivo e profissional. Destaque o carinho e a exclusividade.",
        product.name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_commerce::Money;

    #[test]
    fn test_call_guard() {
        let mut call = RemoteCall::new();
        call.begin().unwrap();
        assert_eq!(call.begin(), Err(StudioError::CallInFlight));
        call.succeed();
        // A finished slot accepts a new call.
        call.begin().unwrap();
        call.fail("network down");
        assert_eq!(
            call.state(),
            &CallState::Failed("network down".to_string())
        );
        call.begin().unwrap();
    }

    #[test]
    fn test_subtitle_prompt_embeds_name() {
        let prompt = subtitle_prompt("Sonhos de Papel");
        assert!(prompt.contains("\"Sonhos de Papel\""));
        assert!(prompt.contains("Máximo de 12 palavras"));
    }

    #[test]
    fn test_description_prompt_rejects_placeholder() {
        let placeholder = Product::placeholder("Papelaria");
        assert_eq!(
            description_prompt(&placeholder),
            Err(StudioError::UnnamedProduct)
        );

        let named = Product::new("Planner Floral", "", Money::from_reais(89.9), "Papelaria");
        let prompt = description_prompt(&named).unwrap();
        assert!(prompt.contains("\"Planner Floral\""));
    }
}
