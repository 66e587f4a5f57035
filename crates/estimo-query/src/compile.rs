//! Filter-to-predicate compilation.
//!
//! Clause order is fixed: postal code, year built, square meters, city,
//! ownership, room category, building type, condition. Both ranges always
//! contribute a lower and an upper clause; membership dimensions contribute
//! one clause only when something is selected.

use crate::clause::{Clause, Field, Predicate};
use crate::error::QueryResult;
use crate::filter::{check_ordered, FilterSet};
use crate::postal::parse_postal_codes;

/// Compile a filter set into an ordered predicate.
///
/// Pure: no I/O, no clock. Fails on an invalid postal code list or a range
/// whose lower bound exceeds its upper bound; nothing is emitted in that case.
///
/// Postal codes are sorted and deduplicated, so the clause lists them in
/// ascending order rather than in the order they were typed.
pub fn compile(filters: &FilterSet) -> QueryResult<Predicate> {
    let postal_codes = parse_postal_codes(&filters.postal_codes)?;
    check_ordered(
        "year built",
        f64::from(filters.year_built.lower),
        f64::from(filters.year_built.upper),
    )?;
    check_ordered(
        "square meters",
        filters.square_meters.lower,
        filters.square_meters.upper,
    )?;

    let mut clauses = Vec::with_capacity(10);

    let mut unique_codes = postal_codes;
    unique_codes.sort();
    unique_codes.dedup();
    clauses.extend(Clause::one_of(Field::PostalCode, unique_codes));

    clauses.push(Clause::at_least(Field::YearBuilt, filters.year_built.lower));
    clauses.push(Clause::at_most(Field::YearBuilt, filters.year_built.upper));
    clauses.push(Clause::at_least(
        Field::SquareMeters,
        filters.square_meters.lower,
    ));
    clauses.push(Clause::at_most(
        Field::SquareMeters,
        filters.square_meters.upper,
    ));

    clauses.extend(Clause::one_of(
        Field::City,
        filters.cities.iter().map(|c| c.code()),
    ));
    clauses.extend(Clause::one_of(
        Field::PlotOwnership,
        filters.ownership.iter().map(|o| o.code()),
    ));
    clauses.extend(Clause::one_of(
        Field::RoomCategory,
        filters.room_categories(),
    ));
    clauses.extend(Clause::one_of(
        Field::BuildingType,
        filters.building_types.iter().map(|b| b.code()),
    ));
    clauses.extend(Clause::one_of(
        Field::State,
        filters.conditions.iter().map(|c| c.code()),
    ));

    tracing::debug!("Compiled filters into {} clauses", clauses.len());
    Ok(Predicate::new(clauses))
}
