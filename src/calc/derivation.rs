//! Fixed Derivations Module
//! The named results shown in the processed data table.

use super::query::Operator;
use super::value::Computed;
use crate::data::RecordStore;
use serde::Serialize;

/// One of the fixed named calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Derivation {
    Alpha,
    Beta,
    Charlie,
}

impl Derivation {
    pub const ALL: [Derivation; 3] = [Derivation::Alpha, Derivation::Beta, Derivation::Charlie];

    pub fn name(self) -> &'static str {
        match self {
            Derivation::Alpha => "Alpha",
            Derivation::Beta => "Beta",
            Derivation::Charlie => "Charlie",
        }
    }

    /// Keys of the left and right operands.
    pub fn operand_keys(self) -> (&'static str, &'static str) {
        match self {
            Derivation::Alpha => ("A5", "A20"),
            Derivation::Beta => ("A15", "A7"),
            Derivation::Charlie => ("A13", "A12"),
        }
    }

    pub fn operator(self) -> Operator {
        match self {
            Derivation::Alpha => Operator::Add,
            Derivation::Beta => Operator::Div,
            Derivation::Charlie => Operator::Mul,
        }
    }

    pub fn formula(self) -> String {
        let (a, b) = self.operand_keys();
        format!("{a} {} {b}", self.operator())
    }

    /// Raw stored operand values, zero included.
    pub fn operands(self, store: &RecordStore) -> (Option<i64>, Option<i64>) {
        let (a, b) = self.operand_keys();
        (store.get(a), store.get(b))
    }

    pub fn compute(self, store: &RecordStore) -> Computed {
        let (a, b) = self.operand_keys();
        match (store.operand(a), store.operand(b)) {
            (Some(a), Some(b)) => self.operator().apply(a, b),
            _ => Computed::Unavailable,
        }
    }
}

/// A row of the processed data table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRow {
    pub derivation: Derivation,
    pub formula: String,
    pub value: Computed,
    pub operands: (Option<i64>, Option<i64>),
}

/// Evaluate every fixed derivation against a snapshot.
pub fn derive_all(store: &RecordStore) -> Vec<DerivedRow> {
    Derivation::ALL
        .iter()
        .map(|&derivation| DerivedRow {
            derivation,
            formula: derivation.formula(),
            value: derivation.compute(store),
            operands: derivation.operands(store),
        })
        .collect()
}
