//! # Controle Fuzzy — Demonstração
//!
//! **Ponto de entrada** que exercita os dois controladores de referência
//! com entradas fixas e imprime as saídas com duas casas decimais.
//!
//! ## Fluxo
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Constrói o motor do ventilador (validação antecipada)
//!   ├── Inferência em lote dos 4 pares (temperatura, umidade) via rayon
//!   ├── Constrói o motor de iluminação
//!   └── Inferência do par (ambiente, preferência)
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Saída padrão
//! cargo run
//!
//! # Inclui o relatório JSON de cada inferência
//! RUST_LOG=debug cargo run
//! ```

use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use fuzzy_control::{presets, InferenceEngine};

/// Pares (temperatura, umidade) do exemplo do ventilador.
const FAN_INPUTS: [[f64; 2]; 4] = [[23.0, 56.0], [45.0, 45.0], [56.0, 78.0], [78.0, 78.0]];

/// Luz ambiente em lux e preferência do usuário (0-100).
const LIGHT_INPUT: [f64; 2] = [45.0, 25.0];

fn main() -> Result<()> {
    // Aceita RUST_LOG para configurar o nível. Padrão: info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run_fan()?;
    run_light()?;
    Ok(())
}

fn run_fan() -> Result<()> {
    let engine = presets::fan_controller()
        .and_then(|spec| spec.build())
        .context("Falha ao construir o controlador do ventilador")?;

    let t_batch = Instant::now();
    let results = engine.infer_batch(&FAN_INPUTS[..]);
    let batch_us = t_batch.elapsed().as_micros() as u64;
    tracing::info!(pairs = FAN_INPUTS.len(), batch_us, "Lote do ventilador processado");

    for (inputs, result) in FAN_INPUTS.iter().zip(results) {
        let speed = result.with_context(|| format!("Falha na inferência para {:?}", inputs))?;
        log_report(&engine, inputs);
        println!(
            "Temperature: {}, Humidity: {} --> Fan Speed: {:.2}",
            inputs[0], inputs[1], speed
        );
    }
    Ok(())
}

fn run_light() -> Result<()> {
    let engine = presets::light_controller()
        .and_then(|spec| spec.build())
        .context("Falha ao construir o controlador de iluminação")?;

    let brightness = engine
        .infer(&LIGHT_INPUT)
        .context("Falha na inferência de iluminação")?;
    log_report(&engine, &LIGHT_INPUT);

    println!("Ambient Light Input: {} Lux", LIGHT_INPUT[0]);
    println!("User Preference Input: {}", LIGHT_INPUT[1]);
    println!("Final Brightness Level (0-100): {:.2}", brightness);
    Ok(())
}

/// Emite o relatório da inferência em JSON, apenas com `debug` habilitado.
fn log_report(engine: &InferenceEngine, inputs: &[f64]) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    match engine.infer_with_report(inputs) {
        Ok(report) => match serde_json::to_string(&report) {
            Ok(json) => tracing::debug!(report = %json, "Relatório de inferência"),
            Err(e) => tracing::warn!(error = %e, "Falha ao serializar relatório"),
        },
        Err(e) => tracing::warn!(error = %e, "Falha ao gerar relatório"),
    }
}
