//! Flat query-parameter entry path.
//!
//! Filters can arrive pre-encoded as `key=value` pairs, for example from a
//! shared link:
//!
//! - `postal_code=00740,02320`
//! - `start_year=1965` / `end_year=1985`
//! - `min_m2=25` / `max_m2=85`
//! - `cities=helsinki|espoo`
//! - `ownership_types=oma,vuokra`
//! - `room_numbers=1,2` (`1`..`4`, where `4` means four or more)
//! - `prop_type=kt|rt`
//! - `condition=good,ok,bad`
//!
//! List values are split on `,` or `|`. The resulting [`FilterSet`] compiles
//! exactly like one built from UI selections.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{QueryError, QueryResult};
use crate::filter::{
    BuildingType, City, Condition, FilterSet, Ownership, RoomCount, DEFAULT_SQUARE_METERS,
    FUTURE_YEARS, MIN_YEAR_BUILT,
};

/// Year spans narrower than this are widened
pub const MIN_YEAR_SPAN: i32 = 5;
/// Floor-area spans narrower than this are widened
pub const MIN_AREA_SPAN: f64 = 4.0;
/// Amount added on each side when widening a narrow span
pub const WIDEN_BY: i32 = 2;

/// Split a `,` or `|` delimited list, dropping empty items
pub fn split_list(value: &str) -> Vec<&str> {
    value
        .split([',', '|'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Parse an `application/x-www-form-urlencoded` query string into a map.
///
/// Percent escapes and `+` are decoded; later keys win.
pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(query.trim().trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

impl FilterSet {
    /// Build a filter set from flat query parameters.
    ///
    /// Missing years default to the full selectable span, missing areas to
    /// the default selection. Narrow spans are widened by two on each side.
    pub fn from_query_params(
        params: &HashMap<String, String>,
        current_year: i32,
    ) -> QueryResult<Self> {
        let start_year = number_or(params, "start_year", MIN_YEAR_BUILT)?;
        let end_year = number_or(params, "end_year", current_year + FUTURE_YEARS)?;
        let (start_year, end_year) = widen_years(start_year, end_year)?;

        let min_m2 = number_or(params, "min_m2", DEFAULT_SQUARE_METERS.0)?;
        let max_m2 = number_or(params, "max_m2", DEFAULT_SQUARE_METERS.1)?;
        let (min_m2, max_m2) = if max_m2 - min_m2 < MIN_AREA_SPAN {
            let widen = f64::from(WIDEN_BY);
            ((min_m2 - widen).max(0.0), max_m2 + widen)
        } else {
            (min_m2, max_m2)
        };

        let filters = FilterSet::new((start_year, end_year), (min_m2, max_m2))
            .with_postal_codes(params.get("postal_code").cloned().unwrap_or_default())
            .with_cities(list(params, "cities", "city", City::from_token)?)
            .with_ownership(list(
                params,
                "ownership_types",
                "ownership type",
                Ownership::from_token,
            )?)
            .with_rooms(list(params, "room_numbers", "room count", RoomCount::from_token)?)
            .with_building_types(list(
                params,
                "prop_type",
                "building type",
                BuildingType::from_token,
            )?)
            .with_conditions(list(params, "condition", "condition", Condition::from_token)?);

        tracing::debug!(
            "Filters from query parameters: years {}..={}, area {}..={}",
            start_year,
            end_year,
            min_m2,
            max_m2
        );
        Ok(filters)
    }
}

fn widen_years(start_year: i32, end_year: i32) -> QueryResult<(i32, i32)> {
    let span = i64::from(end_year) - i64::from(start_year);
    if span >= i64::from(MIN_YEAR_SPAN) {
        return Ok((start_year, end_year));
    }
    match (
        start_year.checked_sub(WIDEN_BY),
        end_year.checked_add(WIDEN_BY),
    ) {
        (Some(lower), Some(upper)) => Ok((lower, upper)),
        _ => Err(QueryError::InvalidRange {
            dimension: "year built",
            lower: f64::from(start_year),
            upper: f64::from(end_year),
            min: f64::from(i32::MIN + WIDEN_BY),
            max: f64::from(i32::MAX - WIDEN_BY),
        }),
    }
}

fn number_or<T: FromStr>(params: &HashMap<String, String>, key: &str, default: T) -> QueryResult<T> {
    match params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(value) => value.parse().map_err(|_| QueryError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        }),
        None => Ok(default),
    }
}

fn list<T>(
    params: &HashMap<String, String>,
    key: &str,
    kind: &'static str,
    parse: fn(&str) -> Option<T>,
) -> QueryResult<Vec<T>> {
    let Some(value) = params.get(key) else {
        return Ok(Vec::new());
    };
    split_list(value)
        .into_iter()
        .map(|token| {
            parse(token).ok_or_else(|| QueryError::UnknownValue {
                kind,
                value: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile;
    use rstest::rstest;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    #[case("a,b", vec!["a", "b"])]
    #[case("a|b", vec!["a", "b"])]
    #[case(" a | b ,c ", vec!["a", "b", "c"])]
    #[case("a,,b|", vec!["a", "b"])]
    #[case("", vec![])]
    fn test_split_list(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_list(input), expected);
    }

    #[rstest]
    #[case("cities=helsinki%7Cespoo", "cities", "helsinki|espoo")]
    #[case("postal_code=00740%2C02320", "postal_code", "00740,02320")]
    #[case("postal_code=00740,+02320", "postal_code", "00740, 02320")]
    #[case("condition=hyv%C3%A4", "condition", "hyvä")]
    fn test_query_string_decoding(#[case] query: &str, #[case] key: &str, #[case] expected: &str) {
        assert_eq!(parse_query_string(query)[key], expected);
    }

    #[test]
    fn test_encoded_link_compiles() {
        let filters = FilterSet::from_query_params(
            &parse_query_string(
                "?cities=helsinki%7Cespoo&postal_code=00740%2C+02320&condition=hyv%C3%A4",
            ),
            2024,
        )
        .unwrap();
        assert_eq!(
            compile(&filters).unwrap().render()[0],
            "postal_code in ('00740', '02320')"
        );
        assert_eq!(filters.cities.len(), 2);
        assert!(filters.conditions.contains(&Condition::Good));
    }

    #[test]
    fn test_year_widening_at_integer_limits() {
        let err = FilterSet::from_query_params(
            &params(&[("start_year", "2147483646"), ("end_year", "2147483647")]),
            2024,
        )
        .unwrap_err();
        assert!(matches!(err, QueryError::InvalidRange { dimension: "year built", .. }));

        let widest = FilterSet::from_query_params(
            &params(&[("start_year", "-2147483648"), ("end_year", "2147483647")]),
            2024,
        );
        assert!(widest.is_ok());

        let reversed = FilterSet::from_query_params(
            &params(&[("start_year", "2147483647"), ("end_year", "-2147483648")]),
            2024,
        )
        .unwrap();
        assert!(matches!(compile(&reversed), Err(QueryError::InvalidRange { .. })));
    }

    #[test]
    fn test_parse_query_string() {
        let map = parse_query_string("?cities=helsinki|espoo&min_m2=30&flag");
        assert_eq!(map["cities"], "helsinki|espoo");
        assert_eq!(map["min_m2"], "30");
        assert_eq!(map["flag"], "");
    }

    #[test]
    fn test_defaults() {
        let filters = FilterSet::from_query_params(&HashMap::new(), 2024).unwrap();
        assert_eq!(filters.year_built.lower, 1880);
        assert_eq!(filters.year_built.upper, 2026);
        assert_eq!(filters.square_meters.lower, 25.0);
        assert_eq!(filters.square_meters.upper, 85.0);
        assert!(filters.cities.is_empty());
        assert!(filters.postal_codes.is_empty());
    }

    #[test]
    fn test_narrow_spans_are_widened() {
        let filters = FilterSet::from_query_params(
            &params(&[
                ("start_year", "1990"),
                ("end_year", "1992"),
                ("min_m2", "50"),
                ("max_m2", "52"),
            ]),
            2024,
        )
        .unwrap();
        assert_eq!((filters.year_built.lower, filters.year_built.upper), (1988, 1994));
        assert_eq!(
            (filters.square_meters.lower, filters.square_meters.upper),
            (48.0, 54.0)
        );
    }

    #[test]
    fn test_area_widening_clamps_at_zero() {
        let filters =
            FilterSet::from_query_params(&params(&[("min_m2", "1"), ("max_m2", "2")]), 2024)
                .unwrap();
        assert_eq!(filters.square_meters.lower, 0.0);
        assert_eq!(filters.square_meters.upper, 4.0);
    }

    #[test]
    fn test_same_predicate_as_ui_entry() {
        let from_params = FilterSet::from_query_params(
            &params(&[
                ("postal_code", "00740,02320"),
                ("start_year", "1965"),
                ("end_year", "1985"),
                ("min_m2", "25"),
                ("max_m2", "85"),
                ("cities", "espoo|helsinki"),
                ("ownership_types", "oma"),
                ("room_numbers", "1,4"),
                ("prop_type", "kt"),
                ("condition", "good|bad"),
            ]),
            2024,
        )
        .unwrap();

        let from_ui = FilterSet::new((1965, 1985), (25.0, 85.0))
            .with_postal_codes("00740, 02320")
            .with_cities([City::Helsinki, City::Espoo])
            .with_ownership([Ownership::Owned])
            .with_rooms([RoomCount::FourOrMore, RoomCount::Studio])
            .with_building_types([BuildingType::Apartment])
            .with_conditions([Condition::Passable, Condition::Good]);

        assert_eq!(compile(&from_params).unwrap(), compile(&from_ui).unwrap());
    }

    #[test]
    fn test_unknown_token() {
        let err = FilterSet::from_query_params(&params(&[("room_numbers", "1,7")]), 2024)
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownValue {
                kind: "room count",
                value: "7".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_number() {
        let err =
            FilterSet::from_query_params(&params(&[("start_year", "nineteen")]), 2024).unwrap_err();
        assert!(matches!(err, QueryError::InvalidNumber { ref key, .. } if key == "start_year"));
    }
}
