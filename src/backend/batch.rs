//! Render many units, isolating failures per unit.
//!
//! Units share only read-only state (the configuration and the reserved-symbol list), so a batch is split across
//! scoped worker threads with no locking. Results always come back in input order.

use std::num::NonZeroUsize;
use std::thread;

use objgen_core::ReservedSymbols;

use crate::config::EmitConfig;
use crate::diagnostics::DiagnosticSink;
use crate::model::TypeModel;

use super::emit::{EmitError, UnitEmitter};

/// Outcome of rendering one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOutput {
    pub type_name: String,
    pub native_name: String,
    pub result: Result<String, EmitError>,
}

impl UnitOutput {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

fn render_one(ty: &TypeModel, config: &EmitConfig, reserved: &ReservedSymbols) -> UnitOutput {
    let result = UnitEmitter::new(ty, config, reserved).render();
    if let Err(err) = &result {
        tracing::warn!(type_name = %ty.name, error = %err, "aborted unit");
    }
    UnitOutput {
        type_name: ty.name.clone(),
        native_name: ty.native_name.clone(),
        result,
    }
}

/// Render every type. `jobs` caps the number of worker threads; one renders on the calling thread.
#[tracing::instrument(skip_all, fields(units = types.len(), jobs = jobs.get()))]
pub fn render_batch(
    types: &[TypeModel],
    config: &EmitConfig,
    reserved: &ReservedSymbols,
    jobs: NonZeroUsize,
) -> Vec<UnitOutput> {
    let jobs = jobs.get().min(types.len().max(1));
    if jobs == 1 {
        return types.iter().map(|ty| render_one(ty, config, reserved)).collect();
    }

    let chunk_size = types.len().div_ceil(jobs);
    thread::scope(|scope| {
        let workers: Vec<_> = types
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|ty| render_one(ty, config, reserved))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        workers
            .into_iter()
            .zip(types.chunks(chunk_size))
            .flat_map(|(worker, chunk)| match worker.join() {
                Ok(outputs) => outputs,
                // Rendering does not panic on any model; a panicking worker is a bug, so surface it per unit.
                Err(_) => chunk
                    .iter()
                    .map(|ty| UnitOutput {
                        type_name: ty.name.clone(),
                        native_name: ty.native_name.clone(),
                        result: Err(EmitError::malformed(&ty.name, "", ty.line, "worker thread panicked")),
                    })
                    .collect(),
            })
            .collect()
    })
}

/// Report every failed unit to `sink`. Returns the number of failures.
pub fn report_diagnostics(outputs: &[UnitOutput], sink: &mut impl DiagnosticSink) -> usize {
    let mut failures = 0;
    for output in outputs {
        if let Err(err) = &output.result {
            sink.report(err.diagnostic());
            failures += 1;
        }
    }
    failures
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::diagnostics::{Diagnostic, DiagnosticKind};
    use crate::model::{ConstructorModel, TypeKind};

    fn batch() -> Vec<TypeModel> {
        let mut types: Vec<TypeModel> = (0..7)
            .map(|i| TypeModel::new(format!("T{i}"), TypeKind::Class))
            .collect();
        // Two undesignated constructors: ambiguous.
        types[3] = TypeModel::new("T3", TypeKind::Class)
            .with_constructor(ConstructorModel::new(Vec::new()))
            .with_constructor(ConstructorModel::new(Vec::new()));
        types
    }

    #[test]
    fn order_and_isolation_hold_for_any_worker_count() {
        let types = batch();
        let config = EmitConfig::default();
        let reserved = ReservedSymbols::c_standard();
        let sequential = render_batch(&types, &config, &reserved, NonZeroUsize::MIN);
        for jobs in [2, 3, 16] {
            let parallel = render_batch(&types, &config, &reserved, NonZeroUsize::new(jobs).unwrap());
            assert_eq!(parallel, sequential);
        }
        let names: Vec<_> = sequential.iter().map(|o| o.type_name.as_str()).collect();
        assert_eq!(names, vec!["T0", "T1", "T2", "T3", "T4", "T5", "T6"]);
        assert_eq!(sequential.iter().filter(|o| !o.is_ok()).count(), 1);
        assert!(!sequential[3].is_ok());
    }

    #[test]
    fn failures_reach_the_sink() {
        let types = batch();
        let outputs = render_batch(&types, &EmitConfig::default(), &ReservedSymbols::empty(), NonZeroUsize::MIN);
        let mut sink: Vec<Diagnostic> = Vec::new();
        assert_eq!(report_diagnostics(&outputs, &mut sink), 1);
        assert_eq!(sink[0].kind, DiagnosticKind::AmbiguousDesignatedInitializer);
        assert_eq!(sink[0].type_name, "T3");
    }

    #[test]
    fn empty_batch() {
        let outputs = render_batch(&[], &EmitConfig::default(), &ReservedSymbols::empty(), NonZeroUsize::MIN);
        assert!(outputs.is_empty());
    }
}
