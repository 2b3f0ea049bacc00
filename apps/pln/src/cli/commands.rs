//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::TvOp;
use pln::{AppError, LoadedScenario};
use pln_core::{AtomId, AtomSpace, AtomType, ChainReport, Pattern, TruthValue, query};
use std::path::Path;

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn atom_json(space: &AtomSpace, id: AtomId) -> serde_json::Value {
    let atom = space.get(id);
    serde_json::json!({
        "index": id.index(),
        "type": atom.map(|a| a.atom_type().name()),
        "label": space.label(id),
        "tv": atom.map(|a| a.tv()),
    })
}

fn atom_line(space: &AtomSpace, id: AtomId) -> String {
    match space.get(id) {
        Some(atom) => format!("{} {} {}", id, space.label(id), atom.tv()),
        None => id.to_string(),
    }
}

fn report_json(space: &AtomSpace, report: &ChainReport) -> serde_json::Value {
    serde_json::json!({
        "inferences": report.inferences,
        "iterations": report.iterations,
        "termination": report.termination,
        "conclusions": report
            .conclusions
            .iter()
            .map(|id| atom_json(space, *id))
            .collect::<Vec<_>>(),
        "atom_count": space.len(),
        "capacity": space.capacity(),
    })
}

fn print_report(space: &AtomSpace, report: &ChainReport) {
    println!("Inferences:  {}", report.inferences);
    println!("Iterations:  {}", report.iterations);
    println!("Termination: {:?}", report.termination);
    println!("Atoms:       {}/{}", space.len(), space.capacity());
    if !report.conclusions.is_empty() {
        println!();
        println!("Conclusions:");
        for id in &report.conclusions {
            println!("  - {}", atom_line(space, *id));
        }
    }
}

fn print_space(space: &AtomSpace) {
    println!();
    println!("AtomSpace:");
    for (id, _) in space.iter() {
        println!("  {}", atom_line(space, id));
    }
}

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Build a scenario and forward chain it.
pub fn cmd_run(
    file: &Path,
    target: Option<&str>,
    json_mode: bool,
    verbose: bool,
) -> Result<(), AppError> {
    let mut scenario = LoadedScenario::from_path(file)?;
    if let Some(name) = target {
        scenario.retarget(name)?;
    }
    let target = scenario.target;

    let report = scenario.engine().run(target);
    let space = &scenario.space;

    if json_mode {
        let mut output = report_json(space, &report);
        output["file"] = serde_json::json!(file.to_string_lossy());
        output["target"] = serde_json::json!(target.map(|id| space.label(id)));
        print_json(&output);
        return Ok(());
    }

    println!("PLN Forward Chaining");
    println!("====================");
    println!("Scenario: {}", file.display());
    let rules: Vec<&str> = scenario.rules.iter().map(|r| r.name.as_str()).collect();
    println!("Rules:    {}", rules.join(", "));
    if let Some(id) = target {
        println!("Target:   {}", space.label(id));
    }
    println!();
    print_report(space, &report);
    if verbose {
        print_space(space);
    }

    Ok(())
}

// =============================================================================
// QUERY COMMAND
// =============================================================================

/// Query a scenario for atoms of one type.
pub fn cmd_query(
    file: &Path,
    atom_type: &str,
    after_chain: bool,
    json_mode: bool,
) -> Result<(), AppError> {
    let atom_type: AtomType = atom_type.parse()?;
    let mut scenario = LoadedScenario::from_path(file)?;

    let inferences = if after_chain {
        let target = scenario.target;
        Some(scenario.engine().forward_chain(target))
    } else {
        None
    };

    let space = &scenario.space;
    let result = query(space, &Pattern::of_type(atom_type));

    if json_mode {
        print_json(&serde_json::json!({
            "file": file.to_string_lossy(),
            "atom_type": atom_type.name(),
            "inferences": inferences,
            "count": result.count,
            "atoms": result
                .atoms
                .iter()
                .map(|id| atom_json(space, *id))
                .collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    if let Some(n) = inferences {
        println!("Forward chaining made {} inference(s)", n);
    }
    println!("Found {} {} atom(s) with sufficient confidence:", result.count, atom_type);
    for id in &result.atoms {
        println!("  - {}", atom_line(space, *id));
    }

    Ok(())
}

// =============================================================================
// TV COMMAND
// =============================================================================

/// Evaluate one truth-value operation.
pub fn cmd_tv(op: &TvOp, json_mode: bool) -> Result<(), AppError> {
    let (name, operands, result): (&str, Vec<TruthValue>, TruthValue) = match op {
        TvOp::And { a, b } => ("and", vec![*a, *b], a.and(*b)),
        TvOp::Or { a, b } => ("or", vec![*a, *b], a.or(*b)),
        TvOp::Not { a } => ("not", vec![*a], a.not()),
    };

    if json_mode {
        print_json(&serde_json::json!({
            "op": name,
            "operands": operands,
            "result": result,
            "expectation": result.expectation(),
        }));
        return Ok(());
    }

    for (i, tv) in operands.iter().enumerate() {
        println!("TV{}: {}", i + 1, tv);
    }
    println!("{}: {}", name.to_ascii_uppercase(), result);
    println!("Expectation: {:.4}", result.expectation());

    Ok(())
}

// =============================================================================
// DEMO COMMAND
// =============================================================================

/// Walk through the built-in taxonomy scenario.
pub fn cmd_demo(json_mode: bool, verbose: bool) -> Result<(), AppError> {
    let mut scenario = LoadedScenario::demo()?;
    let initial_atoms = scenario.space.len();

    let report = scenario.engine().run(None);
    let space = &scenario.space;
    let concepts = query(space, &Pattern::of_type(AtomType::ConceptNode));

    let tv1 = TruthValue::new(0.8, 0.9, 5.0);
    let tv2 = TruthValue::new(0.7, 0.8, 3.0);

    if json_mode {
        print_json(&serde_json::json!({
            "initial_atoms": initial_atoms,
            "chain": report_json(space, &report),
            "concepts": concepts
                .atoms
                .iter()
                .map(|id| atom_json(space, *id))
                .collect::<Vec<_>>(),
            "truth_values": {
                "tv1": tv1,
                "tv2": tv2,
                "and": tv1.and(tv2),
                "or": tv1.or(tv2),
                "not": tv1.not(),
            },
            "embedding_width": space.embeddings().width(),
        }));
        return Ok(());
    }

    println!("PLN Inference Demo");
    println!("==================");
    println!();
    println!("1. Built taxonomy: {} atoms", initial_atoms);
    for (id, _) in space.iter().take(initial_atoms) {
        println!("   {}", atom_line(space, id));
    }

    println!();
    println!("2. Forward chaining");
    print_report(space, &report);

    println!();
    println!("3. ConceptNodes with sufficient confidence: {}", concepts.count);
    for id in &concepts.atoms {
        println!("   - {}", atom_line(space, *id));
    }

    println!();
    println!("4. Truth-value operations");
    println!("   TV1: {}", tv1);
    println!("   TV2: {}", tv2);
    println!("   AND: {}", tv1.and(tv2));
    println!("   OR:  {}", tv1.or(tv2));
    println!("   NOT: {}", tv1.not());

    println!();
    println!("5. AtomSpace statistics");
    println!("   Total atoms: {}/{}", space.len(), space.capacity());
    println!("   Embedding width: {}", space.embeddings().width());

    if verbose {
        print_space(space);
    }

    Ok(())
}
