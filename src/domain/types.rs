// ==========================================
// QMS Retorno - Tipos do domínio
// ==========================================
// Destino é um conjunto aberto: as quatro categorias
// padrão mais qualquer rótulo livre criado pelo usuário.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Destino (disposição do item retornado)
// ==========================================
// Formato persistido: rótulo textual (compatível com
// conjuntos de regras editados livremente).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Destination {
    Estoque,    // Retorna ao estoque utilizável
    UsoInterno, // Consumo interno
    Garantia,   // Acionamento de garantia
    Descarte,   // Descarte / reciclagem
    Outro(String),
}

impl Destination {
    /// Única categoria que gera valor recuperado: retorno ao estoque.
    pub fn is_estoque(&self) -> bool {
        matches!(self, Destination::Estoque)
    }

    /// Rótulo exibido ao usuário (e persistido).
    pub fn label(&self) -> &str {
        match self {
            Destination::Estoque => "Estoque",
            Destination::UsoInterno => "Uso Interno",
            Destination::Garantia => "Garantia",
            Destination::Descarte => "Descarte",
            Destination::Outro(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for Destination {
    fn from(s: String) -> Self {
        // Rótulos conhecidos são normalizados; qualquer outro
        // rótulo é preservado como veio (conjunto aberto).
        match s.trim().to_lowercase().as_str() {
            "estoque" | "stock" => Destination::Estoque,
            "uso interno" | "uso_interno" | "internal use" => Destination::UsoInterno,
            "garantia" | "warranty" => Destination::Garantia,
            "descarte" | "discard" => Destination::Descarte,
            _ => Destination::Outro(s.trim().to_string()),
        }
    }
}

impl From<&str> for Destination {
    fn from(s: &str) -> Self {
        Destination::from(s.to_string())
    }
}

impl From<Destination> for String {
    fn from(d: Destination) -> Self {
        d.label().to_string()
    }
}
