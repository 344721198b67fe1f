//! CLI command implementations
//!
//! Each command loads the model, renders every unit, reports failed units as diagnostics, and returns an exit code.
//! A failed unit never stops the others from being written.

use std::fs;
use std::path::Path;

use objgen_core::ReservedSymbols;

use super::{CliError, CliResult, EmitOptions, ExitCode};
use crate::backend::{UnitOutput, render_batch, report_diagnostics};
use crate::diagnostics::Diagnostic;
use crate::model::{TypeModel, load_types};

/// Maximum model file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while deserializing.
const MAX_MODEL_SIZE: u64 = 100 * 1024 * 1024;

fn read_model(path: &Path) -> CliResult<Vec<TypeModel>> {
    let metadata =
        fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;
    if metadata.len() > MAX_MODEL_SIZE {
        return Err(CliError::failure(format!(
            "Model file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_MODEL_SIZE
        )));
    }
    load_types(path).map_err(|e| CliError::failure(format!("Error loading model: {e}")))
}

fn read_reserved(options: &EmitOptions) -> CliResult<ReservedSymbols> {
    let Some(path) = &options.reserved_symbols else {
        return Ok(ReservedSymbols::c_standard());
    };
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Error reading reserved symbols '{}': {}", path.display(), e)))?;
    let reserved = ReservedSymbols::parse(&text);
    tracing::debug!(path = %path.display(), symbols = reserved.len(), "loaded reserved symbols");
    Ok(reserved)
}

fn render(model: &Path, options: &EmitOptions) -> CliResult<Vec<UnitOutput>> {
    let types = read_model(model)?;
    let reserved = read_reserved(options)?;
    Ok(render_batch(&types, &options.config(), &reserved, options.jobs))
}

/// Print a fancy report for every failed unit and return the exit code for the batch.
fn finish(outputs: &[UnitOutput]) -> ExitCode {
    for output in outputs {
        if let Err(err) = &output.result {
            eprintln!("{:?}", miette::Report::new(err.clone()));
        }
    }
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let failures = report_diagnostics(outputs, &mut diagnostics);
    for diagnostic in &diagnostics {
        tracing::debug!(kind = %diagnostic.kind, member = %diagnostic.member, "{diagnostic}");
    }
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        eprintln!("{failures} of {} unit(s) failed", outputs.len());
        ExitCode::FAILURE
    }
}

/// Render every type in `model` into `<output>/<Native>.m`.
pub fn emit(model: &Path, output: &Path, options: &EmitOptions) -> CliResult<ExitCode> {
    let outputs = render(model, options)?;
    fs::create_dir_all(output)
        .map_err(|e| CliError::failure(format!("Error creating output directory '{}': {}", output.display(), e)))?;

    let mut written = 0;
    for unit in &outputs {
        let Ok(text) = &unit.result else {
            continue;
        };
        let path = output.join(format!("{}.m", unit.native_name));
        fs::write(&path, text).map_err(|e| CliError::failure(format!("Error writing {}: {}", path.display(), e)))?;
        tracing::info!(type_name = %unit.type_name, path = %path.display(), "wrote unit");
        written += 1;
    }
    println!("✓ Wrote {written} unit(s) to {}", output.display());
    Ok(finish(&outputs))
}

/// Render every type in `model` without writing anything.
pub fn check(model: &Path, options: &EmitOptions) -> CliResult<ExitCode> {
    let outputs = render(model, options)?;
    let code = finish(&outputs);
    if code == ExitCode::SUCCESS {
        println!("✓ {} unit(s) OK", outputs.len());
    }
    Ok(code)
}
