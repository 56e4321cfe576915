//! # Módulo Inference — Motor de Inferência Fuzzy Mamdani
//!
//! Este módulo contém o **motor de inferência** que transforma leituras
//! crisp de sensores em uma saída crisp de controle.
//!
//! ## Etapas
//!
//! | Etapa | Operação | Resultado |
//! |-------|----------|-----------|
//! | **Fuzzificação** | Avaliar cada termo de cada entrada | Graus por termo |
//! | **Disparo** | min dos antecedentes de cada regra | Força por regra |
//! | **Agregação** | max dos cortes das formas de saída | Curva amostrada |
//! | **Defuzzificação** | Centroide da curva | Número crisp |
//!
//! ## Exemplo
//!
//! ```text
//! Temperature = 78, Humidity = 78
//! Regra 7: SE Temperature é High ENTÃO FanSpeed é High   ⟨0.56⟩
//! Curva: High cortado em 0.56 → centroide ≈ 81.12
//! ```
//!
//! Veja [`InferenceEngine`] para detalhes.

/// Sub-módulo com a amostragem, agregação e centroide.
pub mod defuzzify;

/// Sub-módulo com o [`InferenceEngine`].
pub mod engine;

/// Sub-módulo com o [`InferenceReport`] — trilha de auditoria de uma inferência.
pub mod report;

pub use defuzzify::CENTROID_FALLBACK;
pub use engine::InferenceEngine;
pub use report::{FiredRule, InferenceReport, InputReading};
