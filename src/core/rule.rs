//! # Regras Fuzzy e Base de Regras
//!
//! Cada [`Rule`] codifica uma peça de **conhecimento especialista** no
//! formato `SE … E … ENTÃO …`:
//!
//! ```text
//! SE Temperature é Medium E Humidity é High ENTÃO FanSpeed é High
//! SE Temperature é High                     ENTÃO FanSpeed é High
//! ```
//!
//! ## Força de Disparo
//!
//! A força de disparo de uma regra é o **mínimo** dos graus dos seus
//! antecedentes (a t-norma min, o "E" fuzzy). Regras podem ter qualquer
//! número de antecedentes a partir de 1 — a regra de dominância
//! "Temperature High força FanSpeed High" ignora a umidade.
//!
//! ## Ordem
//!
//! A [`RuleBase`] preserva a ordem de inserção e devolve os
//! [`FiringResult`]s nessa ordem, para auditoria. O resultado final não
//! depende da ordem: a agregação posterior usa max, que é comutativo e
//! associativo.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Fuzzified, LinguisticVariable};
use crate::error::{FuzzyError, Result};

/// Proposição `variável é termo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub variable: String,
    pub term: String,
}

impl Clause {
    pub fn new(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            term: term.into(),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} é {}", self.variable, self.term)
    }
}

/// Regra fuzzy: conjunção de antecedentes → um consequente.
///
/// Imutável depois de construída. Use o builder:
///
/// ```rust
/// use fuzzy_control::core::Rule;
///
/// let rule = Rule::when("Temperature", "Medium")
///     .and("Humidity", "High")
///     .then("FanSpeed", "High");
/// assert_eq!(
///     rule.to_string(),
///     "SE Temperature é Medium E Humidity é High ENTÃO FanSpeed é High"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    antecedents: Vec<Clause>,
    consequent: Clause,
}

/// Regra parcialmente construída — só antecedentes.
#[derive(Clone, Debug)]
pub struct RuleBuilder {
    antecedents: Vec<Clause>,
}

impl Rule {
    /// Inicia uma regra com o primeiro antecedente.
    pub fn when(variable: impl Into<String>, term: impl Into<String>) -> RuleBuilder {
        RuleBuilder {
            antecedents: vec![Clause::new(variable, term)],
        }
    }

    pub fn antecedents(&self) -> &[Clause] {
        &self.antecedents
    }

    pub fn consequent(&self) -> &Clause {
        &self.consequent
    }

    /// Força de disparo: min dos graus dos antecedentes.
    ///
    /// Cada antecedente busca, em `inputs`, a fuzzificação da sua variável.
    ///
    /// # Erros
    ///
    /// - [`FuzzyError::UnknownVariable`] se não há fuzzificação para a variável
    /// - [`FuzzyError::UnknownTerm`] se o termo não existe na variável
    pub fn strength(&self, inputs: &[Fuzzified<'_>]) -> Result<f64> {
        let mut strength = 1.0_f64;
        for clause in &self.antecedents {
            let fuzzified = inputs
                .iter()
                .find(|f| f.variable().name() == clause.variable)
                .ok_or_else(|| FuzzyError::UnknownVariable(clause.variable.clone()))?;
            strength = strength.min(fuzzified.degree(&clause.term)?);
        }
        Ok(strength)
    }
}

impl RuleBuilder {
    /// Adiciona mais um antecedente (conjunção).
    pub fn and(mut self, variable: impl Into<String>, term: impl Into<String>) -> Self {
        self.antecedents.push(Clause::new(variable, term));
        self
    }

    /// Fecha a regra com o consequente.
    pub fn then(self, variable: impl Into<String>, term: impl Into<String>) -> Rule {
        Rule {
            antecedents: self.antecedents,
            consequent: Clause::new(variable, term),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SE ")?;
        for (i, clause) in self.antecedents.iter().enumerate() {
            if i > 0 {
                write!(f, " E ")?;
            }
            write!(f, "{}", clause)?;
        }
        write!(f, " ENTÃO {}", self.consequent)
    }
}

/// Resultado do disparo de uma regra — intermediário de uma única inferência.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FiringResult {
    /// Índice da regra na base (ordem de inserção).
    pub rule: usize,
    /// Termo da variável de saída que a regra conclui.
    pub output_term: String,
    /// Força de disparo em `[0, 1]`.
    pub strength: f64,
}

/// Sequência ordenada e imutável de regras.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Verifica todas as referências das regras contra as variáveis do motor.
    ///
    /// Chamado na construção do motor, antes de qualquer inferência, para
    /// que um motor mal configurado nunca produza resultados no meio de um lote.
    ///
    /// # Erros
    ///
    /// - [`FuzzyError::EmptyRule`] — regra sem antecedentes
    /// - [`FuzzyError::UnknownVariable`] — antecedente fora das entradas, ou
    ///   consequente que não é a variável de saída
    /// - [`FuzzyError::UnknownTerm`] — termo ausente na variável citada
    pub fn validate(
        &self,
        inputs: &[LinguisticVariable],
        output: &LinguisticVariable,
    ) -> Result<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.antecedents.is_empty() {
                return Err(FuzzyError::EmptyRule(index));
            }
            for clause in &rule.antecedents {
                let variable = inputs
                    .iter()
                    .find(|v| v.name() == clause.variable)
                    .ok_or_else(|| FuzzyError::UnknownVariable(clause.variable.clone()))?;
                variable.term(&clause.term)?;
            }
            if rule.consequent.variable != output.name() {
                return Err(FuzzyError::UnknownVariable(rule.consequent.variable.clone()));
            }
            output.term(&rule.consequent.term)?;
        }
        Ok(())
    }

    /// Calcula a força de disparo de cada regra, na ordem da base.
    ///
    /// `inputs` traz uma fuzzificação por variável de entrada (em qualquer
    /// ordem — a busca é pelo nome da variável).
    ///
    /// # Erros
    ///
    /// Propaga [`FuzzyError::UnknownVariable`] e [`FuzzyError::UnknownTerm`]
    /// de [`Rule::strength`]; também [`FuzzyError::EmptyRule`].
    pub fn evaluate(&self, inputs: &[Fuzzified<'_>]) -> Result<Vec<FiringResult>> {
        self.rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                if rule.antecedents.is_empty() {
                    return Err(FuzzyError::EmptyRule(index));
                }
                let strength = rule.strength(inputs)?;
                tracing::trace!(rule = index, strength, "Regra avaliada");
                Ok(FiringResult {
                    rule: index,
                    output_term: rule.consequent.term.clone(),
                    strength,
                })
            })
            .collect()
    }
}

impl FromIterator<Rule> for RuleBase {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
