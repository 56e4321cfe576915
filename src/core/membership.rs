//! # MembershipFunction — Funções de Pertinência
//!
//! Uma função de pertinência mapeia um valor crisp `x` para um **grau de
//! pertinência** em `[0, 1]` — "quanto `x` pertence a este termo?".
//!
//! ## Formas Suportadas
//!
//! | Forma | Parâmetros | Topo (grau 1) | Suporte (grau > 0) |
//! |-------|------------|---------------|---------------------|
//! | **Triangular** | `(a, b, c)` | `x = b` | `(a, c)` |
//! | **Trapezoidal** | `(a, b, c, d)` | `[b, c]` | `(a, d)` |
//!
//! ```text
//!  Triangular(a,b,c)            Trapezoidal(a,b,c,d)
//!        1 ┤    /\                   1 ┤    ______
//!          │   /  \                    │   /      \
//!        0 ┼──/────\──               0 ┼──/────────\──
//!            a  b   c                    a  b     c  d
//! ```
//!
//! ## Bordas Degeneradas
//!
//! Quando `a = b` (ou `c = d`), a rampa vira uma **borda vertical** — nunca
//! há divisão por zero:
//!
//! - **Triangular**: o pico é avaliado primeiro, então `x = a = b` tem grau 1
//!   e qualquer `x < a` tem grau 0 (triângulo truncado à esquerda).
//! - **Trapezoidal**: a borda vertical vira um **ombro** — com `a = b`, todo
//!   `x ≤ a` tem grau 1; com `c = d`, todo `x ≥ d` tem grau 1. É assim que os
//!   termos extremos ("Dark", "Bright") cobrem entradas acima do universo.
//!
//! ## Exemplo
//!
//! ```rust
//! use fuzzy_control::core::MembershipFunction;
//!
//! let medium = MembershipFunction::triangular(25.0, 50.0, 75.0)?;
//! assert_eq!(medium.evaluate(50.0), 1.0);
//! assert_eq!(medium.evaluate(37.5), 0.5);
//! # Ok::<(), fuzzy_control::FuzzyError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};

/// Parâmetros brutos de uma forma de pertinência.
///
/// `Shape` é apenas dado — pode estar fora de ordem. A validação acontece
/// ao converter para [`MembershipFunction`].
///
/// Em JSON usa o campo `kind` como discriminador:
///
/// ```json
/// { "kind": "triangular", "a": 25, "b": 50, "c": 75 }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Triângulo com pés em `a` e `c` e pico em `b`.
    Triangular { a: f64, b: f64, c: f64 },
    /// Trapézio com pés em `a` e `d` e platô em `[b, c]`.
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
}

impl Shape {
    /// `true` se os parâmetros são finitos e respeitam `a ≤ b ≤ c (≤ d)`.
    pub fn is_ordered(&self) -> bool {
        match *self {
            Shape::Triangular { a, b, c } => {
                [a, b, c].iter().all(|p| p.is_finite()) && a <= b && b <= c
            }
            Shape::Trapezoidal { a, b, c, d } => {
                [a, b, c, d].iter().all(|p| p.is_finite()) && a <= b && b <= c && c <= d
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Triangular { a, b, c } => write!(f, "tri({}, {}, {})", a, b, c),
            Shape::Trapezoidal { a, b, c, d } => write!(f, "trap({}, {}, {}, {})", a, b, c, d),
        }
    }
}

/// Função de pertinência validada.
///
/// Só pode ser construída a partir de uma [`Shape`] ordenada — via
/// [`triangular`](MembershipFunction::triangular),
/// [`trapezoidal`](MembershipFunction::trapezoidal) ou `TryFrom<Shape>`.
/// A desserialização passa pela mesma validação.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Shape", into = "Shape")]
pub struct MembershipFunction {
    shape: Shape,
}

impl MembershipFunction {
    /// Cria um triângulo `(a, b, c)`.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::InvalidShape`] se `a ≤ b ≤ c` não vale ou há parâmetro
    /// não finito.
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self> {
        Self::try_from(Shape::Triangular { a, b, c })
    }

    /// Cria um trapézio `(a, b, c, d)`.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::InvalidShape`] se `a ≤ b ≤ c ≤ d` não vale ou há parâmetro
    /// não finito.
    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        Self::try_from(Shape::Trapezoidal { a, b, c, d })
    }

    /// Parâmetros da forma.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Avalia o grau de pertinência de `x`, sempre em `[0, 1]`.
    ///
    /// NaN avalia para 0, assim como uma rampa cujo quociente transborda
    /// (`inf / inf`) em formas com parâmetros próximos de `f64::MAX`.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        let degree = match self.shape {
            Shape::Triangular { a, b, c } => triangular(x, a, b, c),
            Shape::Trapezoidal { a, b, c, d } => trapezoidal(x, a, b, c, d),
        };
        if degree.is_nan() {
            return 0.0;
        }
        degree.clamp(0.0, 1.0)
    }

    /// Avalia uma sequência de pontos — um grau por ponto, mesma ordem.
    ///
    /// Semântica idêntica a chamar [`evaluate`](Self::evaluate) ponto a ponto;
    /// é a forma usada na defuzzificação sobre a grade de amostragem.
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Suporte nominal `(a, c)` ou `(a, d)` — fora dele o grau é 0,
    /// exceto nos ombros verticais do trapézio.
    pub fn support(&self) -> (f64, f64) {
        match self.shape {
            Shape::Triangular { a, c, .. } => (a, c),
            Shape::Trapezoidal { a, d, .. } => (a, d),
        }
    }

    /// Núcleo — intervalo onde o grau é 1.
    pub fn core(&self) -> (f64, f64) {
        match self.shape {
            Shape::Triangular { b, .. } => (b, b),
            Shape::Trapezoidal { b, c, .. } => (b, c),
        }
    }
}

impl TryFrom<Shape> for MembershipFunction {
    type Error = FuzzyError;

    fn try_from(shape: Shape) -> Result<Self> {
        if shape.is_ordered() {
            Ok(Self { shape })
        } else {
            Err(FuzzyError::InvalidShape(shape))
        }
    }
}

impl From<MembershipFunction> for Shape {
    fn from(mf: MembershipFunction) -> Self {
        mf.shape
    }
}

impl fmt::Display for MembershipFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.shape.fmt(f)
    }
}

// O pico vem antes do teste de pés: com a = b, x = a avalia para 1.
fn triangular(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x == b {
        1.0
    } else if x <= a || x >= c {
        0.0
    } else if x < b {
        (x - a) / (b - a)
    } else {
        (c - x) / (c - b)
    }
}

// Rampa, platô e queda aplicados nessa ordem; cada região sobrescreve a
// anterior nos pontos de fronteira compartilhados.
fn trapezoidal(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut degree = 0.0;

    if a != b {
        if a <= x && x <= b {
            degree = (x - a) / (b - a);
        }
    } else if x <= a {
        degree = 1.0;
    }

    if b <= x && x <= c {
        degree = 1.0;
    }

    if c != d {
        if c <= x && x <= d {
            degree = (d - x) / (d - c);
        }
    } else if x >= d {
        degree = 1.0;
    }

    degree
}
