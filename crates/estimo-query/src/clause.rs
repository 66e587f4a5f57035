//! Structured predicate clauses
//!
//! Clauses stay structured (field, operator, values) until they reach the
//! service boundary, where [`Clause::render`] produces the textual
//! `where_clause` syntax with every membership value quoted and escaped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Columns the estimation service can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PostalCode,
    YearBuilt,
    SquareMeters,
    City,
    PlotOwnership,
    RoomCategory,
    BuildingType,
    State,
}

impl Field {
    /// Column name in the service's predicate syntax
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::PostalCode => "postal_code",
            Field::YearBuilt => "year_built",
            Field::SquareMeters => "square_meters",
            Field::City => "city",
            Field::PlotOwnership => "plot_ownership",
            Field::RoomCategory => "room_category",
            Field::BuildingType => "building_type",
            Field::State => "state",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Range comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    /// Greater than or equal (>=)
    Ge,
    /// Less than or equal (<=)
    Le,
}

impl ComparisonOp {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Ge => ">=",
            ComparisonOp::Le => "<=",
        }
    }
}

/// One filter condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Clause {
    /// `field op number`
    Range {
        field: Field,
        op: ComparisonOp,
        value: f64,
    },

    /// `field in ('a', 'b', ...)`
    Membership { field: Field, values: Vec<String> },
}

impl Clause {
    /// Create a `field >= value` clause
    pub fn at_least(field: Field, value: impl Into<f64>) -> Self {
        Clause::Range {
            field,
            op: ComparisonOp::Ge,
            value: value.into(),
        }
    }

    /// Create a `field <= value` clause
    pub fn at_most(field: Field, value: impl Into<f64>) -> Self {
        Clause::Range {
            field,
            op: ComparisonOp::Le,
            value: value.into(),
        }
    }

    /// Create a membership clause, `None` when there is nothing to match
    pub fn one_of<I, S>(field: Field, values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            None
        } else {
            Some(Clause::Membership { field, values })
        }
    }

    /// The column this clause tests
    pub fn field(&self) -> Field {
        match self {
            Clause::Range { field, .. } | Clause::Membership { field, .. } => *field,
        }
    }

    /// Serialize to the service's textual predicate syntax
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Range { field, op, value } => {
                write!(f, "{} {} {}", field, op.as_str(), value)
            }
            Clause::Membership { field, values } => {
                write!(f, "{} in (", field)?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&quote(value))?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Single-quote a literal, doubling embedded quotes.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// An ordered list of clauses, all of which must hold
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Textual clauses, in order, as sent in the `where_clause` payload
    pub fn render(&self) -> Vec<String> {
        self.clauses.iter().map(Clause::render).collect()
    }
}

impl IntoIterator for Predicate {
    type Item = Clause;
    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}
