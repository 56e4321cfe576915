//! # Módulo Core — Tipos Fundamentais da Lógica Fuzzy
//!
//! Este módulo agrupa os **tipos de valor** sobre os quais o motor de
//! inferência opera. Todos são imutáveis depois de construídos e podem ser
//! compartilhados entre threads sem sincronização:
//!
//! - [`MembershipFunction`] — Forma de pertinência validada (triangular, trapezoidal)
//! - [`Shape`] — Parâmetros brutos de uma forma
//! - [`LinguisticVariable`] — Dimensão nomeada com termos (ex: Temperature → Low/Medium/High)
//! - [`Fuzzified`] — Graus de pertinência de um valor crisp, por termo
//! - [`Rule`] / [`RuleBase`] — Conhecimento especialista `SE … ENTÃO …`
//! - [`FiringResult`] — Força de disparo de uma regra em uma inferência
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use fuzzy_control::core::{LinguisticVariable, MembershipFunction, Rule, RuleBase};
//!
//! let temperature = LinguisticVariable::new("Temperature", (0.0, 100.0))
//!     .with_term("Low", MembershipFunction::triangular(0.0, 0.0, 50.0)?)?
//!     .with_term("High", MembershipFunction::triangular(50.0, 100.0, 100.0)?)?;
//!
//! let rules = RuleBase::new(vec![
//!     Rule::when("Temperature", "High").then("FanSpeed", "High"),
//! ]);
//!
//! let fired = rules.evaluate(&[temperature.fuzzify(78.0)])?;
//! assert!((fired[0].strength - 0.56).abs() < 1e-9);
//! # Ok::<(), fuzzy_control::FuzzyError>(())
//! ```

/// Sub-módulo com [`MembershipFunction`] e [`Shape`].
pub mod membership;

/// Sub-módulo com [`LinguisticVariable`], [`Term`] e [`Fuzzified`].
pub mod variable;

/// Sub-módulo com [`Rule`], [`RuleBase`] e [`FiringResult`].
pub mod rule;

pub use membership::{MembershipFunction, Shape};
pub use rule::{Clause, FiringResult, Rule, RuleBase, RuleBuilder};
pub use variable::{Fuzzified, LinguisticVariable, Term};
