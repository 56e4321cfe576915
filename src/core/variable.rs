//! # LinguisticVariable — Variável Linguística
//!
//! Uma variável linguística é uma **dimensão nomeada** (ex: "Temperature")
//! particionada em termos fuzzy que se sobrepõem (ex: Low, Medium, High).
//!
//! ```text
//! Temperature  [0, 100]
//!   1 ┤\        /\        /
//!     │ \  Low /  \ High /
//!     │  \    /Med \    /
//!   0 ┼───\──/──────\──/────
//!     0   25  50    75  100
//! ```
//!
//! A ordem de inserção dos termos é preservada — a fuzzificação devolve os
//! graus nessa mesma ordem, o que torna relatórios e logs determinísticos.
//!
//! ## Fuzzificação
//!
//! [`LinguisticVariable::fuzzify`] avalia **todos** os termos no valor crisp.
//! Os graus são independentes: termos podem se sobrepor e não precisam
//! somar 1. Valores fora do universo não são erro — apenas resultam em
//! grau 0 para os termos cujo suporte não os cobre.

use serde::{Deserialize, Serialize};

use super::MembershipFunction;
use crate::error::{FuzzyError, Result};

/// Um termo linguístico: nome + função de pertinência.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Nome do termo, único dentro da variável (ex: "Medium").
    pub name: String,
    /// Forma do termo.
    pub membership: MembershipFunction,
}

/// Variável linguística com universo de discurso e termos ordenados.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinguisticVariable {
    name: String,
    universe: (f64, f64),
    terms: Vec<Term>,
}

impl LinguisticVariable {
    /// Cria uma variável sem termos sobre o universo `(low, high)`.
    ///
    /// Para a variável de saída, o universo é o domínio da defuzzificação.
    pub fn new(name: impl Into<String>, universe: (f64, f64)) -> Self {
        Self {
            name: name.into(),
            universe,
            terms: Vec::new(),
        }
    }

    /// Adiciona um termo (estilo builder).
    ///
    /// # Erros
    ///
    /// [`FuzzyError::DuplicateTerm`] se já existir um termo com esse nome.
    pub fn with_term(
        mut self,
        name: impl Into<String>,
        membership: MembershipFunction,
    ) -> Result<Self> {
        let name = name.into();
        if self.term_index(&name).is_some() {
            return Err(FuzzyError::DuplicateTerm {
                variable: self.name,
                term: name,
            });
        }
        self.terms.push(Term { name, membership });
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> (f64, f64) {
        self.universe
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Posição do termo na ordem de inserção.
    pub fn term_index(&self, name: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.name == name)
    }

    /// Função de pertinência de um termo.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::UnknownTerm`] se o termo não existe nesta variável.
    pub fn term(&self, name: &str) -> Result<&MembershipFunction> {
        self.terms
            .iter()
            .find(|t| t.name == name)
            .map(|t| &t.membership)
            .ok_or_else(|| FuzzyError::UnknownTerm {
                variable: self.name.clone(),
                term: name.to_string(),
            })
    }

    /// Fuzzifica um valor crisp — um grau por termo, na ordem dos termos.
    pub fn fuzzify(&self, x: f64) -> Fuzzified<'_> {
        Fuzzified {
            variable: self,
            value: x,
            degrees: self.terms.iter().map(|t| t.membership.evaluate(x)).collect(),
        }
    }

    /// Termo com maior grau em `x`. Em empate, vence o primeiro termo.
    ///
    /// Retorna `None` se a variável não tem termos.
    pub fn dominant_term(&self, x: f64) -> Option<(&str, f64)> {
        self.terms
            .iter()
            .map(|t| (t.name.as_str(), t.membership.evaluate(x)))
            .fold(None, |best, (name, degree)| match best {
                Some((_, best_degree)) if best_degree >= degree => best,
                _ => Some((name, degree)),
            })
    }

    /// Revalida invariantes — usado para definições vindas de JSON,
    /// que não passam por [`with_term`](Self::with_term).
    ///
    /// # Erros
    ///
    /// - [`FuzzyError::InvalidDomain`] se o universo não é finito com `low < high`
    ///   ou se sua largura transborda
    /// - [`FuzzyError::DuplicateTerm`] se há nomes de termos repetidos
    pub fn validate(&self) -> Result<()> {
        let (low, high) = self.universe;
        if !(low < high && (high - low).is_finite()) {
            return Err(FuzzyError::InvalidDomain { low, high });
        }
        for (i, term) in self.terms.iter().enumerate() {
            if self.terms[..i].iter().any(|t| t.name == term.name) {
                return Err(FuzzyError::DuplicateTerm {
                    variable: self.name.clone(),
                    term: term.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Resultado da fuzzificação de um valor crisp em uma variável.
///
/// Mapeia cada termo ao seu grau. Guarda uma referência à variável de
/// origem, o que permite à base de regras localizar o mapeamento certo
/// pelo nome da variável.
#[derive(Clone, Debug)]
pub struct Fuzzified<'a> {
    variable: &'a LinguisticVariable,
    value: f64,
    degrees: Vec<f64>,
}

impl<'a> Fuzzified<'a> {
    pub fn variable(&self) -> &'a LinguisticVariable {
        self.variable
    }

    /// Valor crisp que originou os graus.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Grau de um termo pelo nome.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::UnknownTerm`] se o termo não existe na variável.
    pub fn degree(&self, term: &str) -> Result<f64> {
        self.variable
            .term_index(term)
            .map(|i| self.degrees[i])
            .ok_or_else(|| FuzzyError::UnknownTerm {
                variable: self.variable.name.clone(),
                term: term.to_string(),
            })
    }

    /// Pares `(termo, grau)` na ordem dos termos.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.variable
            .terms
            .iter()
            .map(|t| t.name.as_str())
            .zip(self.degrees.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }
}
