//! # Configuração — Definição Declarativa de Controladores
//!
//! Um controlador fuzzy é **dado**, não código: variáveis, termos, regras e
//! parâmetros numéricos. Este módulo descreve essa definição como structs
//! serializáveis, de modo que o mesmo motor sirva ao ventilador, à luz ou a
//! qualquer outro controlador.
//!
//! ## Formato JSON
//!
//! ```json
//! {
//!   "inputs": [
//!     { "name": "Temperature", "universe": [0, 100], "terms": [
//!         { "name": "Low", "membership": { "kind": "triangular", "a": 0, "b": 0, "c": 50 } }
//!     ] }
//!   ],
//!   "output": { "name": "FanSpeed", "universe": [0, 100], "terms": [ ... ] },
//!   "rules": [
//!     { "antecedents": [ { "variable": "Temperature", "term": "Low" } ],
//!       "consequent": { "variable": "FanSpeed", "term": "Low" } }
//!   ],
//!   "settings": { "resolution": 1000 }
//! }
//! ```
//!
//! `settings` é opcional (padrão: resolução 1000). Formas fora de ordem já
//! falham na desserialização; as demais verificações acontecem em
//! [`ControllerSpec::build`].

use serde::{Deserialize, Serialize};

use crate::core::{LinguisticVariable, RuleBase};
use crate::error::{FuzzyError, Result};
use crate::inference::InferenceEngine;

/// Resolução padrão da grade de defuzzificação.
pub const DEFAULT_RESOLUTION: usize = 1000;

/// Parâmetros numéricos da inferência.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceSettings {
    /// Número de pontos amostrados no domínio de saída (≥ 2).
    pub resolution: usize,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl InferenceSettings {
    /// # Erros
    ///
    /// [`FuzzyError::InvalidResolution`] se `resolution < 2`.
    pub fn validate(&self) -> Result<()> {
        if self.resolution < 2 {
            return Err(FuzzyError::InvalidResolution(self.resolution));
        }
        Ok(())
    }
}

/// Definição completa de um controlador: entradas, saída, regras e ajustes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerSpec {
    /// Variáveis de entrada, na ordem posicional usada por `infer`.
    pub inputs: Vec<LinguisticVariable>,
    pub output: LinguisticVariable,
    pub rules: RuleBase,
    #[serde(default)]
    pub settings: InferenceSettings,
}

impl ControllerSpec {
    /// Lê uma definição em JSON.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::Config`] se o JSON é inválido ou contém formas fora de ordem.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializa a definição em JSON legível.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Ajusta a resolução (estilo builder).
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.settings.resolution = resolution;
        self
    }

    /// Valida a definição e constrói o motor.
    ///
    /// # Erros
    ///
    /// Qualquer erro estrutural de [`InferenceEngine::new`].
    pub fn build(self) -> Result<InferenceEngine> {
        InferenceEngine::new(self.inputs, self.output, self.rules, self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    const MINIMAL: &str = r#"{
        "inputs": [
            { "name": "Level", "universe": [0, 10], "terms": [
                { "name": "Low",  "membership": { "kind": "trapezoidal", "a": 0, "b": 0, "c": 2, "d": 5 } },
                { "name": "High", "membership": { "kind": "trapezoidal", "a": 5, "b": 8, "c": 10, "d": 10 } }
            ] }
        ],
        "output": { "name": "Valve", "universe": [0, 100], "terms": [
            { "name": "Closed", "membership": { "kind": "triangular", "a": 0, "b": 0, "c": 50 } },
            { "name": "Open",   "membership": { "kind": "triangular", "a": 50, "b": 100, "c": 100 } }
        ] },
        "rules": [
            { "antecedents": [ { "variable": "Level", "term": "Low" } ],
              "consequent": { "variable": "Valve", "term": "Open" } },
            { "antecedents": [ { "variable": "Level", "term": "High" } ],
              "consequent": { "variable": "Valve", "term": "Closed" } }
        ]
    }"#;

    /// Definição JSON sem `settings` usa resolução padrão e constrói um motor
    #[test]
    fn test_from_json_minimal() {
        let spec = ControllerSpec::from_json(MINIMAL).unwrap();
        assert_eq!(spec.settings.resolution, DEFAULT_RESOLUTION);
        let engine = spec.build().unwrap();
        assert!(engine.infer(&[1.0]).unwrap() > 50.0);
        assert!(engine.infer(&[9.0]).unwrap() < 50.0);
    }

    /// Forma fora de ordem no JSON vira FuzzyError::Config
    #[test]
    fn test_from_json_invalid_shape() {
        let json = MINIMAL.replace(r#""a": 50, "b": 100"#, r#""a": 150, "b": 100"#);
        assert!(matches!(ControllerSpec::from_json(&json), Err(FuzzyError::Config(_))));
    }

    /// Regra citando termo inexistente falha no build, não na inferência
    #[test]
    fn test_build_unknown_term() {
        let json = MINIMAL.replace(r#""term": "Closed""#, r#""term": "Ajar""#);
        let spec = ControllerSpec::from_json(&json).unwrap();
        assert!(matches!(spec.build(), Err(FuzzyError::UnknownTerm { .. })));
    }

    /// Um preset exportado em JSON e relido produz o mesmo motor
    #[test]
    fn test_preset_json_reload() {
        let spec = presets::light_controller().unwrap();
        let reloaded = ControllerSpec::from_json(&spec.to_json().unwrap()).unwrap();
        assert_eq!(reloaded, spec);
        let a = spec.build().unwrap().infer(&[45.0, 25.0]).unwrap();
        let b = reloaded.build().unwrap().infer(&[45.0, 25.0]).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
