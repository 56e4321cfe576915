//! # Erros do Motor Fuzzy
//!
//! Todos os erros do motor são **estruturais** — resultam de uma definição
//! mal formada (formas, termos, regras) ou de uma chamada com aridade errada.
//! Nenhum erro depende do valor numérico das entradas: uma entrada fora do
//! universo simplesmente produz pertinência 0.
//!
//! | Erro | Quando ocorre |
//! |------|---------------|
//! | `InvalidShape` | Parâmetros de forma fora de ordem (a ≤ b ≤ c ≤ d) |
//! | `UnknownTerm` | Regra ou consulta cita termo inexistente |
//! | `UnknownVariable` | Regra cita variável que o motor não conhece |
//! | `DuplicateVariable` | Duas entradas com o mesmo nome |
//! | `DuplicateTerm` | Dois termos com o mesmo nome na mesma variável |
//! | `EmptyRule` | Regra sem antecedentes |
//! | `InvalidResolution` | Menos de 2 pontos de amostragem |
//! | `InvalidDomain` | Universo vazio, invertido ou não-finito |
//! | `InputArity` | Número de entradas ≠ número de variáveis de entrada |
//! | `Config` | JSON de definição do controlador inválido |
//!
//! A defuzzificação com denominador zero **não** é erro — retorna o fallback 0.

use thiserror::Error;

use crate::core::Shape;

/// Erro do motor de inferência fuzzy.
#[derive(Debug, Error)]
pub enum FuzzyError {
    /// Parâmetros da forma violam a ordem exigida.
    #[error("forma inválida {0}: os parâmetros devem respeitar a ≤ b ≤ c (≤ d)")]
    InvalidShape(Shape),

    /// Termo ausente no conjunto de termos da variável.
    #[error("termo desconhecido '{term}' na variável '{variable}'")]
    UnknownTerm { variable: String, term: String },

    /// Variável não definida no motor (ou sem fuzzificação fornecida).
    #[error("variável desconhecida '{0}'")]
    UnknownVariable(String),

    /// Duas variáveis de entrada com o mesmo nome.
    #[error("variável duplicada '{0}'")]
    DuplicateVariable(String),

    /// Nome de termo repetido dentro de uma variável.
    #[error("termo duplicado '{term}' na variável '{variable}'")]
    DuplicateTerm { variable: String, term: String },

    /// Regra sem nenhum antecedente (o min de um conjunto vazio não é definido aqui).
    #[error("regra {0} não possui antecedentes")]
    EmptyRule(usize),

    /// Resolução de amostragem menor que 2.
    #[error("resolução {0} inválida: são necessários pelo menos 2 pontos")]
    InvalidResolution(usize),

    /// Universo de discurso inválido.
    #[error("domínio inválido [{low}, {high}]")]
    InvalidDomain { low: f64, high: f64 },

    /// Quantidade de entradas crisp diferente da quantidade de variáveis.
    #[error("esperadas {expected} entradas, recebidas {actual}")]
    InputArity { expected: usize, actual: usize },

    /// Definição JSON do controlador mal formada.
    #[error("definição de controlador inválida: {0}")]
    Config(#[from] serde_json::Error),
}

/// Alias de `Result` usado em toda a biblioteca.
pub type Result<T> = std::result::Result<T, FuzzyError>;
