//! # Agregação Mamdani e Defuzzificação por Centroide
//!
//! Converte as conclusões fuzzy das regras disparadas em **um único número**.
//!
//! ## Algoritmo
//!
//! ```text
//! 1. Amostrar o domínio de saída: n pontos igualmente espaçados em [low, high]
//! 2. Para cada regra disparada: cortar a forma do termo de saída na força
//!       clipped(x) = min(força, μ_termo(x))
//! 3. Agregar por máximo ponto a ponto (as conclusões não somam, se envelopam)
//!       μ(x) = max_regras clipped(x)
//! 4. Centroide:  Σ x·μ(x) / Σ μ(x)
//! 5. Se Σ μ(x) = 0 → fallback 0 (nenhuma regra disparou)
//! ```
//!
//! ## Grade de Amostragem
//!
//! `x_i = low + i · step`, com `step = (high − low) / (n − 1)` e o último
//! ponto forçado a `high`. A mesma grade, com a mesma ordem de soma, produz
//! resultados bit a bit reprodutíveis.
//!
//! A resolução controla o erro de discretização: resoluções maiores reduzem
//! o viés perto de quinas agudas das formas, mas não mudam o contrato.

use crate::core::{FiringResult, LinguisticVariable};
use crate::error::{FuzzyError, Result};

/// Valor retornado quando a curva agregada é identicamente zero.
///
/// Coincide com o mínimo do domínio de saída dos controladores de referência.
pub const CENTROID_FALLBACK: f64 = 0.0;

/// Gera `resolution` pontos igualmente espaçados de `low` a `high`, inclusive.
///
/// # Erros
///
/// - [`FuzzyError::InvalidResolution`] se `resolution < 2`
/// - [`FuzzyError::InvalidDomain`] se o domínio não é finito com `low < high`,
///   ou se a largura `high - low` transborda
pub fn sample_domain(resolution: usize, (low, high): (f64, f64)) -> Result<Vec<f64>> {
    if resolution < 2 {
        return Err(FuzzyError::InvalidResolution(resolution));
    }
    if !(low < high && (high - low).is_finite()) {
        return Err(FuzzyError::InvalidDomain { low, high });
    }
    let step = (high - low) / (resolution - 1) as f64;
    let mut xs: Vec<f64> = (0..resolution).map(|i| low + i as f64 * step).collect();
    xs[resolution - 1] = high;
    Ok(xs)
}

/// Curva agregada Mamdani sobre os pontos `samples`.
///
/// Regras com força 0 não contribuem (o corte delas é identicamente 0).
///
/// # Erros
///
/// [`FuzzyError::UnknownTerm`] se algum `output_term` não existe em `output`.
pub fn aggregate(
    fired: &[FiringResult],
    output: &LinguisticVariable,
    samples: &[f64],
) -> Result<Vec<f64>> {
    let mut curve = vec![0.0_f64; samples.len()];
    for firing in fired {
        let membership = output.term(&firing.output_term)?;
        if firing.strength <= 0.0 {
            continue;
        }
        let shape = membership.evaluate_many(samples);
        for (agg, degree) in curve.iter_mut().zip(shape) {
            *agg = agg.max(firing.strength.min(degree));
        }
        tracing::trace!(
            rule = firing.rule,
            term = %firing.output_term,
            strength = firing.strength,
            "Regra agregada"
        );
    }
    Ok(curve)
}

/// Centroide `Σ x·μ / Σ μ`, ou `None` se `Σ μ = 0`.
pub fn centroid(samples: &[f64], curve: &[f64]) -> Option<f64> {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (x, mu) in samples.iter().zip(curve) {
        numerator += x * mu;
        denominator += mu;
    }
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MembershipFunction;

    fn fan_speed() -> LinguisticVariable {
        LinguisticVariable::new("FanSpeed", (0.0, 100.0))
            .with_term("Low", MembershipFunction::triangular(0.0, 0.0, 50.0).unwrap())
            .unwrap()
            .with_term("Medium", MembershipFunction::triangular(25.0, 50.0, 75.0).unwrap())
            .unwrap()
            .with_term("High", MembershipFunction::triangular(50.0, 100.0, 100.0).unwrap())
            .unwrap()
    }

    fn fired(rule: usize, term: &str, strength: f64) -> FiringResult {
        FiringResult {
            rule,
            output_term: term.to_string(),
            strength,
        }
    }

    /// Grade inclui as duas extremidades e tem espaçamento uniforme
    #[test]
    fn test_sample_domain() {
        let xs = sample_domain(5, (0.0, 100.0)).unwrap();
        assert_eq!(xs, vec![0.0, 25.0, 50.0, 75.0, 100.0]);

        let xs = sample_domain(1000, (0.0, 100.0)).unwrap();
        assert_eq!(xs.len(), 1000);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[999], 100.0);
    }

    /// Resolução < 2 e domínio invertido são rejeitados
    #[test]
    fn test_sample_domain_errors() {
        assert!(matches!(sample_domain(1, (0.0, 1.0)), Err(FuzzyError::InvalidResolution(1))));
        assert!(matches!(sample_domain(10, (5.0, 5.0)), Err(FuzzyError::InvalidDomain { .. })));
        assert!(matches!(
            sample_domain(10, (0.0, f64::INFINITY)),
            Err(FuzzyError::InvalidDomain { .. })
        ));
    }

    /// Domínio cuja largura transborda é rejeitado; o maior domínio aceito
    /// gera apenas pontos finitos
    #[test]
    fn test_sample_domain_overflowing_width() {
        assert!(matches!(
            sample_domain(5, (-1e308, 1e308)),
            Err(FuzzyError::InvalidDomain { .. })
        ));
        assert!(matches!(
            sample_domain(5, (f64::MIN, f64::MAX)),
            Err(FuzzyError::InvalidDomain { .. })
        ));
        let xs = sample_domain(5, (-8e307, 8e307)).unwrap();
        assert!(xs.iter().all(|x| x.is_finite()));
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    /// A curva agregada domina cada curva cortada individual
    #[test]
    fn test_aggregate_is_envelope() {
        let out = fan_speed();
        let xs = sample_domain(200, out.universe()).unwrap();
        let rules = vec![fired(0, "Low", 0.54), fired(1, "Medium", 0.12), fired(2, "High", 0.3)];
        let curve = aggregate(&rules, &out, &xs).unwrap();
        for r in &rules {
            let mf = out.term(&r.output_term).unwrap();
            for (i, &x) in xs.iter().enumerate() {
                assert!(curve[i] >= r.strength.min(mf.evaluate(x)));
            }
        }
        assert!(curve.iter().all(|&mu| (0.0..=0.54).contains(&mu)));
    }

    /// Forma simétrica cortada tem centroide no eixo de simetria
    #[test]
    fn test_centroid_symmetric() {
        let out = fan_speed();
        let xs = sample_domain(101, out.universe()).unwrap();
        let curve = aggregate(&[fired(0, "Medium", 0.7)], &out, &xs).unwrap();
        let c = centroid(&xs, &curve).unwrap();
        assert!((c - 50.0).abs() < 1e-9);
    }

    /// Sem disparo, a curva é zero e o centroide não existe
    #[test]
    fn test_centroid_empty() {
        let out = fan_speed();
        let xs = sample_domain(50, out.universe()).unwrap();
        let curve = aggregate(&[fired(0, "High", 0.0), fired(1, "Low", 0.0)], &out, &xs).unwrap();
        assert!(curve.iter().all(|&mu| mu == 0.0));
        assert_eq!(centroid(&xs, &curve), None);
    }

    /// Termo de saída inexistente gera UnknownTerm
    #[test]
    fn test_aggregate_unknown_term() {
        let out = fan_speed();
        let xs = sample_domain(10, out.universe()).unwrap();
        assert!(matches!(
            aggregate(&[fired(0, "Turbo", 0.5)], &out, &xs),
            Err(FuzzyError::UnknownTerm { .. })
        ));
    }
}
