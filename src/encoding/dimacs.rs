//! The DIMACS CNF format.
//!
//! ```text
//! c This is a comment
//! p cnf 3 2
//! 1 2 0
//! -2 3 0
//! ```
//!
//! Accepted deviations from the strict format: runs of spaces collapse to
//! one, and a line containing `%` truncates the input from that line on
//! (some benchmark archives end files this way).
//!
//! See: <https://jix.github.io/varisat/manual/0.2.0/formats/dimacs.html>

use crate::error::{Result, SatError};
use crate::instance::{Clause, Instance};

/// Parse a DIMACS CNF document into a normalized instance.
///
/// The syntax check is strict: the header must read `p cnf <n> <m>` with
/// both counts at least 1, every clause line must be `0`-terminated, the
/// number of clause lines must match `m`, and the variables used must be
/// exactly `[1..n]`. Duplicate clause lines are merged.
pub fn parse_dimacs(input: &str) -> Result<Instance> {
    let mut lines: Vec<&str> = input
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('c'))
        .collect();

    if let Some(cut) = lines.iter().position(|line| line.contains('%')) {
        lines.truncate(cut);
    }

    let Some((&header, clause_lines)) = lines.split_first() else {
        return Err(SatError::ParseError("empty input".into()));
    };
    let (num_variables, num_clauses) = parse_header(header)?;

    if clause_lines.len() != num_clauses {
        return Err(SatError::ParseError(format!(
            "header promises {} clauses, found {}",
            num_clauses,
            clause_lines.len()
        )));
    }

    let mut clauses: Vec<Clause> = Vec::new();
    for (index, line) in clause_lines.iter().enumerate() {
        let clause = parse_clause_line(index, line)?;
        if !clauses.iter().any(|kept| kept.literals == clause.literals) {
            clauses.push(clause);
        }
    }

    let instance = Instance::from_clauses(clauses)
        .map_err(|error| SatError::ParseError(error.to_string()))?;

    let used = instance.all_variables();
    if used.len() != num_variables || used.iter().any(|&v| v < 1 || v as usize > num_variables) {
        return Err(SatError::ParseError(format!(
            "clauses use {} variables, header promises the range 1..={}",
            used.len(),
            num_variables
        )));
    }

    Ok(instance.normalize())
}

/// Write an instance as a DIMACS CNF document.
pub fn write_dimacs(instance: &Instance) -> String {
    let mut output = format!(
        "p cnf {} {}",
        instance.num_variables(),
        instance.num_clauses()
    );
    for clause in instance.clauses() {
        output.push('\n');
        for &lit in &clause.literals {
            output.push_str(&format!("{lit} "));
        }
        output.push('0');
    }
    output
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let counts = match fields.as_slice() {
        ["p", "cnf", variables, clauses] => Some((variables.parse(), clauses.parse())),
        _ => None,
    };
    match counts {
        Some((Ok(variables), Ok(clauses))) if variables >= 1 && clauses >= 1 => {
            Ok((variables, clauses))
        }
        _ => Err(SatError::ParseError(format!(
            "malformed header {line:?}, expected \"p cnf <num_vars> <num_clauses>\""
        ))),
    }
}

fn parse_clause_line(index: usize, line: &str) -> Result<Clause> {
    let mut literals: Vec<i32> = Vec::new();
    for token in line.split_whitespace() {
        let literal: i32 = token.parse().map_err(|_| {
            SatError::ParseError(format!("clause line {index}: invalid literal {token:?}"))
        })?;
        literals.push(literal);
    }
    if literals.pop() != Some(0) {
        return Err(SatError::ParseError(format!(
            "clause line {index} is not terminated by 0"
        )));
    }
    if literals.contains(&0) {
        return Err(SatError::ParseError(format!(
            "clause line {index} contains an interior 0"
        )));
    }
    Ok(Clause::new(literals))
}

#[cfg(test)]
#[path = "../unit_tests/encoding/dimacs.rs"]
mod tests;
