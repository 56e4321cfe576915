//! # Motor de Inferência Mamdani
//!
//! O [`InferenceEngine`] orquestra o pipeline completo de controle fuzzy
//! sobre uma configuração fixa (variáveis + base de regras):
//!
//! ```text
//! entradas crisp ──► fuzzify ──► evaluate ──► aggregate ──► centroid ──► saída crisp
//!   [23, 56]        graus por     força por     max dos      Σx·μ/Σμ       24.77
//!                     termo         regra        cortes
//! ```
//!
//! ## Validação Antecipada
//!
//! Toda a configuração é verificada em [`InferenceEngine::new`]: formas,
//! termos duplicados, universos, resolução e todas as referências das regras.
//! Um motor construído com sucesso nunca encontra um termo desconhecido no
//! meio de um lote.
//!
//! ## Sem Estado
//!
//! Todos os métodos recebem `&self`. Cada chamada é uma função pura de
//! (entradas, configuração) — chamadas repetidas produzem saídas bit a bit
//! idênticas, e lotes podem ser processados em paralelo sem sincronização
//! (veja [`infer_batch`](InferenceEngine::infer_batch)).

use rayon::prelude::*;

use super::defuzzify::{self, CENTROID_FALLBACK};
use super::report::{FiredRule, InferenceReport, InputReading};
use crate::config::InferenceSettings;
use crate::core::{FiringResult, Fuzzified, LinguisticVariable, RuleBase};
use crate::error::{FuzzyError, Result};

/// Motor de inferência fuzzy Mamdani com defuzzificação por centroide.
#[derive(Clone, Debug)]
pub struct InferenceEngine {
    inputs: Vec<LinguisticVariable>,
    output: LinguisticVariable,
    rules: RuleBase,
    settings: InferenceSettings,
}

impl InferenceEngine {
    /// Constrói e valida um motor.
    ///
    /// `inputs` define a ordem posicional das entradas crisp em
    /// [`infer`](Self::infer).
    ///
    /// # Erros
    ///
    /// - [`FuzzyError::InvalidDomain`] / [`FuzzyError::DuplicateTerm`] — variável mal formada
    /// - [`FuzzyError::DuplicateVariable`] — duas entradas com o mesmo nome
    /// - [`FuzzyError::InvalidResolution`] — resolução < 2
    /// - [`FuzzyError::EmptyRule`] / [`FuzzyError::UnknownVariable`] /
    ///   [`FuzzyError::UnknownTerm`] — regra inconsistente com as variáveis
    pub fn new(
        inputs: Vec<LinguisticVariable>,
        output: LinguisticVariable,
        rules: RuleBase,
        settings: InferenceSettings,
    ) -> Result<Self> {
        for (i, variable) in inputs.iter().enumerate() {
            variable.validate()?;
            if inputs[..i].iter().any(|v| v.name() == variable.name()) {
                return Err(FuzzyError::DuplicateVariable(variable.name().to_string()));
            }
        }
        output.validate()?;
        settings.validate()?;
        rules.validate(&inputs, &output)?;

        tracing::info!(
            inputs = ?inputs.iter().map(|v| v.name()).collect::<Vec<_>>(),
            output = %output.name(),
            rules = rules.len(),
            resolution = settings.resolution,
            "Motor fuzzy construído"
        );

        Ok(Self {
            inputs,
            output,
            rules,
            settings,
        })
    }

    pub fn inputs(&self) -> &[LinguisticVariable] {
        &self.inputs
    }

    pub fn output(&self) -> &LinguisticVariable {
        &self.output
    }

    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    pub fn settings(&self) -> &InferenceSettings {
        &self.settings
    }

    /// Fuzzifica as entradas crisp, uma por variável de entrada, na ordem
    /// em que as variáveis foram definidas.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::InputArity`] se `values.len()` difere do número de entradas.
    pub fn fuzzify(&self, values: &[f64]) -> Result<Vec<Fuzzified<'_>>> {
        if values.len() != self.inputs.len() {
            return Err(FuzzyError::InputArity {
                expected: self.inputs.len(),
                actual: values.len(),
            });
        }
        Ok(self
            .inputs
            .iter()
            .zip(values)
            .map(|(variable, &x)| variable.fuzzify(x))
            .collect())
    }

    /// Forças de disparo de todas as regras, na ordem da base.
    pub fn evaluate(&self, fuzzified: &[Fuzzified<'_>]) -> Result<Vec<FiringResult>> {
        self.rules.evaluate(fuzzified)
    }

    /// Agrega as regras disparadas e calcula o centroide sobre `domain`.
    ///
    /// Quando nenhuma regra dispara com força > 0 (ou os termos disparados não
    /// têm suporte no domínio), retorna [`CENTROID_FALLBACK`] (0) — não é erro.
    ///
    /// # Erros
    ///
    /// - [`FuzzyError::InvalidResolution`] / [`FuzzyError::InvalidDomain`]
    /// - [`FuzzyError::UnknownTerm`] se um termo disparado não existe em `output`
    pub fn defuzzify(
        fired: &[FiringResult],
        output: &LinguisticVariable,
        resolution: usize,
        domain: (f64, f64),
    ) -> Result<f64> {
        Ok(Self::centroid_of(fired, output, resolution, domain)?.unwrap_or(CENTROID_FALLBACK))
    }

    fn centroid_of(
        fired: &[FiringResult],
        output: &LinguisticVariable,
        resolution: usize,
        domain: (f64, f64),
    ) -> Result<Option<f64>> {
        let samples = defuzzify::sample_domain(resolution, domain)?;
        let curve = defuzzify::aggregate(fired, output, &samples)?;
        let centroid = defuzzify::centroid(&samples, &curve);
        if centroid.is_none() {
            tracing::debug!(output = %output.name(), "Nenhuma regra disparou, usando fallback");
        }
        Ok(centroid)
    }

    /// Inferência completa: fuzzify → evaluate → aggregate → centroid.
    ///
    /// O domínio da defuzzificação é o universo da variável de saída e a
    /// resolução vem de [`InferenceSettings`].
    ///
    /// # Erros
    ///
    /// [`FuzzyError::InputArity`] se o número de entradas está errado. Uma
    /// falha não altera o motor — basta corrigir a entrada e chamar de novo.
    pub fn infer(&self, values: &[f64]) -> Result<f64> {
        let fuzzified = self.fuzzify(values)?;
        let fired = self.evaluate(&fuzzified)?;
        let crisp = Self::defuzzify(
            &fired,
            &self.output,
            self.settings.resolution,
            self.output.universe(),
        )?;
        tracing::debug!(inputs = ?values, output = crisp, "Inferência concluída");
        Ok(crisp)
    }

    /// Como [`infer`](Self::infer), mas devolve a trilha de auditoria completa.
    pub fn infer_with_report(&self, values: &[f64]) -> Result<InferenceReport> {
        let fuzzified = self.fuzzify(values)?;
        let fired = self.evaluate(&fuzzified)?;
        let centroid = Self::centroid_of(
            &fired,
            &self.output,
            self.settings.resolution,
            self.output.universe(),
        )?;

        let inputs = fuzzified
            .iter()
            .map(|fz| InputReading {
                variable: fz.variable().name().to_string(),
                value: fz.value(),
                memberships: fz.iter().map(|(term, degree)| (term.to_string(), degree)).collect(),
                dominant: fz.variable().dominant_term(fz.value()).map(|(term, _)| term.to_string()),
            })
            .collect();

        let rules = self.rules.rules();
        let fired = fired
            .into_iter()
            .filter(|f| f.strength > 0.0)
            .map(|f| FiredRule {
                rule: f.rule,
                description: rules[f.rule].to_string(),
                output_term: f.output_term,
                strength: f.strength,
            })
            .collect();

        Ok(InferenceReport {
            inputs,
            fired,
            output_variable: self.output.name().to_string(),
            output: centroid.unwrap_or(CENTROID_FALLBACK),
            fallback: centroid.is_none(),
        })
    }

    /// Inferência em lote, em paralelo (rayon).
    ///
    /// Os resultados saem na mesma ordem das entradas; uma entrada com erro
    /// não afeta as demais.
    pub fn infer_batch<V>(&self, batch: &[V]) -> Vec<Result<f64>>
    where
        V: AsRef<[f64]> + Sync,
    {
        batch.par_iter().map(|values| self.infer(values.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MembershipFunction, Rule};
    use crate::presets;

    fn fan() -> InferenceEngine {
        presets::fan_controller().unwrap().build().unwrap()
    }

    /// Motor é compartilhável entre threads
    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InferenceEngine>();
    }

    /// Mesma entrada, mesma saída — bit a bit
    #[test]
    fn test_infer_deterministic() {
        let engine = fan();
        let a = engine.infer(&[45.0, 45.0]).unwrap();
        let b = engine.infer(&[45.0, 45.0]).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    /// Entradas fora de todos os suportes devolvem exatamente o fallback 0
    #[test]
    fn test_infer_fallback() {
        let engine = fan();
        assert_eq!(engine.infer(&[150.0, -20.0]).unwrap(), 0.0);
        let report = engine.infer_with_report(&[150.0, -20.0]).unwrap();
        assert!(report.fallback);
        assert!(report.fired.is_empty());
        assert_eq!(report.output, 0.0);
    }

    /// Aridade errada falha sem afetar chamadas seguintes
    #[test]
    fn test_infer_arity() {
        let engine = fan();
        assert!(matches!(
            engine.infer(&[10.0]),
            Err(FuzzyError::InputArity { expected: 2, actual: 1 })
        ));
        assert!(engine.infer(&[10.0, 10.0]).is_ok());
    }

    /// Lote paralelo concorda com chamadas sequenciais, na mesma ordem
    #[test]
    fn test_infer_batch_matches_sequential() {
        let engine = fan();
        let batch: Vec<Vec<f64>> = vec![
            vec![23.0, 56.0],
            vec![45.0, 45.0],
            vec![56.0, 78.0],
            vec![78.0],
            vec![78.0, 78.0],
        ];
        let results = engine.infer_batch(&batch);
        assert_eq!(results.len(), batch.len());
        for (values, result) in batch.iter().zip(&results) {
            match engine.infer(values) {
                Ok(expected) => {
                    assert_eq!(result.as_ref().unwrap().to_bits(), expected.to_bits())
                }
                Err(_) => assert!(result.is_err()),
            }
        }
        assert!(results[3].is_err());
    }

    /// Relatório lista só as regras disparadas e concorda com infer
    #[test]
    fn test_infer_with_report() {
        let engine = fan();
        let report = engine.infer_with_report(&[23.0, 56.0]).unwrap();
        assert_eq!(report.output.to_bits(), engine.infer(&[23.0, 56.0]).unwrap().to_bits());
        assert!(!report.fallback);
        assert_eq!(report.output_variable, "FanSpeed");

        let fired: Vec<usize> = report.fired.iter().map(|f| f.rule).collect();
        assert_eq!(fired, vec![1, 2]);
        assert_eq!(
            report.fired[0].description,
            "SE Temperature é Low E Humidity é Medium ENTÃO FanSpeed é Low"
        );
        assert_eq!(report.inputs[0].dominant.as_deref(), Some("Low"));
        assert_eq!(report.inputs[1].dominant.as_deref(), Some("Medium"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["fired"].as_array().unwrap().len(), 2);
    }

    /// defuzzify usa o domínio e a resolução recebidos
    #[test]
    fn test_defuzzify_explicit_domain() {
        let engine = fan();
        let fired = vec![FiringResult {
            rule: 0,
            output_term: "Medium".to_string(),
            strength: 1.0,
        }];
        let c = InferenceEngine::defuzzify(&fired, engine.output(), 1001, (0.0, 100.0)).unwrap();
        assert!((c - 50.0).abs() < 1e-9);
        // Domínio que não cobre o suporte do termo → fallback
        let c = InferenceEngine::defuzzify(&fired, engine.output(), 100, (80.0, 100.0)).unwrap();
        assert_eq!(c, 0.0);
        assert!(InferenceEngine::defuzzify(&fired, engine.output(), 1, (0.0, 100.0)).is_err());
    }

    /// Construção rejeita configurações inconsistentes
    #[test]
    fn test_new_validates() {
        let var = |name: &str| {
            LinguisticVariable::new(name, (0.0, 10.0))
                .with_term("A", MembershipFunction::triangular(0.0, 5.0, 10.0).unwrap())
                .unwrap()
        };
        let rules = RuleBase::new(vec![Rule::when("X", "A").then("Y", "A")]);
        let defaults = InferenceSettings::default();

        assert!(InferenceEngine::new(vec![var("X")], var("Y"), rules.clone(), defaults).is_ok());
        assert!(matches!(
            InferenceEngine::new(vec![var("X"), var("X")], var("Y"), rules.clone(), defaults),
            Err(FuzzyError::DuplicateVariable(_))
        ));
        let zero = InferenceSettings { resolution: 0 };
        assert!(matches!(
            InferenceEngine::new(vec![var("X")], var("Y"), rules.clone(), zero),
            Err(FuzzyError::InvalidResolution(0))
        ));
        let bad = RuleBase::new(vec![Rule::when("X", "B").then("Y", "A")]);
        assert!(matches!(
            InferenceEngine::new(vec![var("X")], var("Y"), bad, defaults),
            Err(FuzzyError::UnknownTerm { .. })
        ));
        let wide = LinguisticVariable::new("Y", (-1e308, 1e308))
            .with_term("A", MembershipFunction::triangular(0.0, 5.0, 10.0).unwrap())
            .unwrap();
        assert!(matches!(
            InferenceEngine::new(vec![var("X")], wide, rules.clone(), defaults),
            Err(FuzzyError::InvalidDomain { .. })
        ));
    }
}
