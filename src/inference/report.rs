//! # Relatório de Inferência
//!
//! Trilha de auditoria de **uma** chamada de inferência: o que cada entrada
//! virou após a fuzzificação, quanto cada regra disparou e qual foi a saída.
//!
//! ```text
//! Temperature = 23  → Low 0.54 · Medium 0.00 · High 0.00   (dominante: Low)
//! Humidity    = 56  → Low 0.00 · Medium 0.76 · High 0.12   (dominante: Medium)
//! #2 SE Temperature é Low E Humidity é Medium ENTÃO FanSpeed é Low   ⟨0.54⟩
//! #3 SE Temperature é Low E Humidity é High ENTÃO FanSpeed é Medium  ⟨0.12⟩
//! FanSpeed = 24.77
//! ```
//!
//! Serializável em JSON — o binário emite o relatório em nível `debug`.

use std::fmt;

use serde::Serialize;

/// Leitura fuzzificada de uma variável de entrada.
#[derive(Clone, Debug, Serialize)]
pub struct InputReading {
    pub variable: String,
    pub value: f64,
    /// `(termo, grau)` na ordem dos termos.
    pub memberships: Vec<(String, f64)>,
    /// Termo de maior grau (primeiro em empate).
    pub dominant: Option<String>,
}

/// Regra com força de disparo > 0.
#[derive(Clone, Debug, Serialize)]
pub struct FiredRule {
    pub rule: usize,
    /// Regra em forma legível (`SE … ENTÃO …`).
    pub description: String,
    pub output_term: String,
    pub strength: f64,
}

/// Relatório completo de uma inferência.
#[derive(Clone, Debug, Serialize)]
pub struct InferenceReport {
    pub inputs: Vec<InputReading>,
    /// Apenas regras que dispararam (força > 0), na ordem da base.
    pub fired: Vec<FiredRule>,
    pub output_variable: String,
    pub output: f64,
    /// `true` se nenhuma regra disparou e a saída é o fallback.
    pub fallback: bool,
}

impl fmt::Display for InferenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for input in &self.inputs {
            write!(f, "{} = {} →", input.variable, input.value)?;
            for (term, degree) in &input.memberships {
                write!(f, " {} {:.2}", term, degree)?;
            }
            writeln!(f)?;
        }
        for fired in &self.fired {
            writeln!(f, "#{} {} ⟨{:.2}⟩", fired.rule + 1, fired.description, fired.strength)?;
        }
        write!(f, "{} = {:.2}", self.output_variable, self.output)?;
        if self.fallback {
            write!(f, " (fallback)")?;
        }
        Ok(())
    }
}
