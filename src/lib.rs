//! # Controle Fuzzy — Motor de Inferência Mamdani
//!
//! Biblioteca que calcula uma **saída de controle crisp** (velocidade do
//! ventilador, brilho da lâmpada) a partir de **entradas crisp** (sensores,
//! preferências do usuário), usando inferência fuzzy no estilo Mamdani.
//!
//! ## Pipeline
//!
//! ```text
//! entrada crisp
//!   ├── 1. Fuzzificação      LinguisticVariable::fuzzify → grau por termo
//!   ├── 2. Disparo           RuleBase::evaluate          → min dos antecedentes
//!   ├── 3. Agregação         max ponto a ponto dos termos de saída cortados
//!   └── 4. Defuzzificação    centroide sobre a grade amostrada
//! saída crisp
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use fuzzy_control::presets;
//!
//! let engine = presets::fan_controller()?.build()?;
//! let speed = engine.infer(&[78.0, 78.0])?;
//! assert!((70.0..=85.0).contains(&speed));
//! # Ok::<(), fuzzy_control::FuzzyError>(())
//! ```
//!
//! O mesmo motor atende qualquer controlador: basta trocar as variáveis e a
//! base de regras (veja [`config::ControllerSpec`]).

/// Módulo `core` — tipos de valor: MembershipFunction, LinguisticVariable, Rule, RuleBase.
pub mod core;

/// Módulo `inference` — motor Mamdani, agregação, centroide e relatórios.
pub mod inference;

/// Módulo `config` — definição declarativa (serde) de controladores e ajustes.
pub mod config;

/// Módulo `presets` — controladores de referência (ventilador e iluminação).
pub mod presets;

/// Módulo `error` — taxonomia de erros estruturais.
pub mod error;

pub use config::{ControllerSpec, InferenceSettings};
pub use error::{FuzzyError, Result};
pub use inference::{InferenceEngine, InferenceReport};
