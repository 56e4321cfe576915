//! # Controladores de Referência
//!
//! Duas definições prontas que reproduzem numericamente os controladores
//! de referência. São apenas **dados** para o motor genérico — nenhum
//! código de inferência vive aqui.
//!
//! ## Ventilador (`fan_controller`)
//!
//! Temperature, Humidity e FanSpeed compartilham as mesmas três formas
//! triangulares sobre `[0, 100]`:
//!
//! | Termo | Forma |
//! |-------|-------|
//! | Low | `tri(0, 0, 50)` |
//! | Medium | `tri(25, 50, 75)` |
//! | High | `tri(50, 100, 100)` |
//!
//! | # | Temperature | Humidity | FanSpeed |
//! |---|-------------|----------|----------|
//! | 1 | Low | Low | Low |
//! | 2 | Low | Medium | Low |
//! | 3 | Low | High | Medium |
//! | 4 | Medium | Low | Low |
//! | 5 | Medium | Medium | Medium |
//! | 6 | Medium | High | High |
//! | 7 | High | — | High |
//!
//! A regra 7 é a regra de **dominância**: temperatura alta força o
//! ventilador ao máximo, independentemente da umidade.
//!
//! ## Iluminação (`light_controller`)
//!
//! Ambient (lux, `[0, 500]`), UserPref (`[0, 100]`) e Brightness
//! (`[0, 100]`) com formas trapezoidais; cinco regras:
//!
//! | # | Ambient | UserPref | Brightness |
//! |---|---------|----------|------------|
//! | 1 | Dark | Dim | Dim |
//! | 2 | Dark | Low | Low |
//! | 3 | Dim | Low | Dim |
//! | 4 | Dim | Medium | Medium |
//! | 5 | Bright | Bright | Bright |

use crate::config::{ControllerSpec, InferenceSettings};
use crate::core::{LinguisticVariable, MembershipFunction, Rule, RuleBase, Shape};
use crate::error::Result;

fn variable(
    name: &str,
    universe: (f64, f64),
    terms: &[(&str, Shape)],
) -> Result<LinguisticVariable> {
    terms.iter().try_fold(LinguisticVariable::new(name, universe), |variable, (term, shape)| {
        variable.with_term(*term, MembershipFunction::try_from(*shape)?)
    })
}

const fn tri(a: f64, b: f64, c: f64) -> Shape {
    Shape::Triangular { a, b, c }
}

const fn trap(a: f64, b: f64, c: f64, d: f64) -> Shape {
    Shape::Trapezoidal { a, b, c, d }
}

const LOW_MEDIUM_HIGH: [(&str, Shape); 3] = [
    ("Low", tri(0.0, 0.0, 50.0)),
    ("Medium", tri(25.0, 50.0, 75.0)),
    ("High", tri(50.0, 100.0, 100.0)),
];

/// Controlador de ventilador: `(Temperature, Humidity) → FanSpeed`.
pub fn fan_controller() -> Result<ControllerSpec> {
    let rules = RuleBase::new(vec![
        Rule::when("Temperature", "Low").and("Humidity", "Low").then("FanSpeed", "Low"),
        Rule::when("Temperature", "Low").and("Humidity", "Medium").then("FanSpeed", "Low"),
        Rule::when("Temperature", "Low").and("Humidity", "High").then("FanSpeed", "Medium"),
        Rule::when("Temperature", "Medium").and("Humidity", "Low").then("FanSpeed", "Low"),
        Rule::when("Temperature", "Medium").and("Humidity", "Medium").then("FanSpeed", "Medium"),
        Rule::when("Temperature", "Medium").and("Humidity", "High").then("FanSpeed", "High"),
        Rule::when("Temperature", "High").then("FanSpeed", "High"),
    ]);

    Ok(ControllerSpec {
        inputs: vec![
            variable("Temperature", (0.0, 100.0), &LOW_MEDIUM_HIGH)?,
            variable("Humidity", (0.0, 100.0), &LOW_MEDIUM_HIGH)?,
        ],
        output: variable("FanSpeed", (0.0, 100.0), &LOW_MEDIUM_HIGH)?,
        rules,
        settings: InferenceSettings::default(),
    })
}

/// Controlador de iluminação: `(Ambient, UserPref) → Brightness`.
pub fn light_controller() -> Result<ControllerSpec> {
    let ambient = variable(
        "Ambient",
        (0.0, 500.0),
        &[
            ("Dark", trap(0.0, 0.0, 40.0, 50.0)),
            ("Dim", trap(40.0, 50.0, 150.0, 150.0)),
            ("Bright", trap(100.0, 150.0, 500.0, 500.0)),
        ],
    )?;
    let user_pref = variable(
        "UserPref",
        (0.0, 100.0),
        &[
            ("Dim", trap(0.0, 0.0, 20.0, 30.0)),
            ("Low", trap(20.0, 30.0, 50.0, 50.0)),
            ("Medium", trap(40.0, 50.0, 70.0, 70.0)),
            ("High", trap(60.0, 70.0, 90.0, 90.0)),
            ("Bright", trap(80.0, 90.0, 100.0, 100.0)),
        ],
    )?;
    let brightness = variable(
        "Brightness",
        (0.0, 100.0),
        &[
            ("Dim", trap(0.0, 0.0, 20.0, 30.0)),
            ("Low", trap(20.0, 30.0, 40.0, 50.0)),
            ("Medium", trap(40.0, 50.0, 60.0, 70.0)),
            ("High", trap(60.0, 70.0, 80.0, 90.0)),
            ("Bright", trap(80.0, 90.0, 100.0, 100.0)),
        ],
    )?;

    let rules = RuleBase::new(vec![
        Rule::when("Ambient", "Dark").and("UserPref", "Dim").then("Brightness", "Dim"),
        Rule::when("Ambient", "Dark").and("UserPref", "Low").then("Brightness", "Low"),
        Rule::when("Ambient", "Dim").and("UserPref", "Low").then("Brightness", "Dim"),
        Rule::when("Ambient", "Dim").and("UserPref", "Medium").then("Brightness", "Medium"),
        Rule::when("Ambient", "Bright").and("UserPref", "Bright").then("Brightness", "Bright"),
    ]);

    Ok(ControllerSpec {
        inputs: vec![ambient, user_pref],
        output: brightness,
        rules,
        settings: InferenceSettings::default(),
    })
}
