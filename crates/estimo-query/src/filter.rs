//! Filter selections describing the properties an estimate is based on.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};

/// Earliest selectable construction year
pub const MIN_YEAR_BUILT: i32 = 1880;
/// Years past the current year that remain selectable (planned construction)
pub const FUTURE_YEARS: i32 = 2;
/// Largest selectable floor area in square meters
pub const MAX_SQUARE_METERS: f64 = 400.0;
/// Default floor-area selection
pub const DEFAULT_SQUARE_METERS: (f64, f64) = (25.0, 85.0);
/// Lower end of the default built-year selection
pub const DEFAULT_START_YEAR: i32 = 1975;

/// Cities covered by the transaction data
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Espoo,
    Vantaa,
    Helsinki,
    Tampere,
    Jarvenpaa,
    Kerava,
    Jyvaskyla,
    Oulu,
    Kuopio,
    Joensuu,
    Turku,
    Kouvola,
    Lahti,
    Porvoo,
    Tuusula,
    Kauniainen,
}

impl City {
    pub const ALL: [City; 16] = [
        City::Espoo,
        City::Vantaa,
        City::Helsinki,
        City::Tampere,
        City::Jarvenpaa,
        City::Kerava,
        City::Jyvaskyla,
        City::Oulu,
        City::Kuopio,
        City::Joensuu,
        City::Turku,
        City::Kouvola,
        City::Lahti,
        City::Porvoo,
        City::Tuusula,
        City::Kauniainen,
    ];

    /// Value stored in the `city` column.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Espoo => "espoo",
            Self::Vantaa => "vantaa",
            Self::Helsinki => "helsinki",
            Self::Tampere => "tampere",
            Self::Jarvenpaa => "jarvenpaa",
            Self::Kerava => "kerava",
            Self::Jyvaskyla => "jyvaskyla",
            Self::Oulu => "oulu",
            Self::Kuopio => "kuopio",
            Self::Joensuu => "joensuu",
            Self::Turku => "turku",
            Self::Kouvola => "kouvola",
            Self::Lahti => "lahti",
            Self::Porvoo => "porvoo",
            Self::Tuusula => "tuusula",
            Self::Kauniainen => "kauniainen",
        }
    }

    /// Parse a city name, case insensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim().to_lowercase();
        Self::ALL.into_iter().find(|city| city.code() == token)
    }
}

/// Plot ownership type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ownership {
    Owned,
    Rented,
    /// Only offered by the valuation estimate
    Unknown,
}

impl Ownership {
    pub const ALL: [Ownership; 3] = [Ownership::Owned, Ownership::Rented, Ownership::Unknown];

    /// Value stored in the `plot_ownership` column.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Owned => "oma",
            Self::Rented => "vuokra",
            Self::Unknown => "unknown",
        }
    }

    /// Parse from a column code or an English name.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "oma" | "own" | "owned" => Some(Self::Owned),
            "vuokra" | "rented" | "leased" => Some(Self::Rented),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// Room count bucket as offered in the UI.
///
/// One bucket maps to several `room_category` labels in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomCount {
    Studio,
    Two,
    Three,
    FourOrMore,
}

impl RoomCount {
    pub const ALL: [RoomCount; 4] = [
        RoomCount::Studio,
        RoomCount::Two,
        RoomCount::Three,
        RoomCount::FourOrMore,
    ];

    /// The `room_category` labels this bucket expands to.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Self::Studio => &["Yksiö", "Yksiöt"],
            Self::Two => &["Kaksiot", "Kaksi huonetta"],
            Self::Three => &["Kolmiot", "Kolme huonetta"],
            Self::FourOrMore => &["Neljä huonetta tai enemmän"],
        }
    }

    /// Parse from the numeric query token (`1`..`4`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(Self::Studio),
            "2" => Some(Self::Two),
            "3" => Some(Self::Three),
            "4" => Some(Self::FourOrMore),
            _ => None,
        }
    }
}

/// Building type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    /// Kerrostalo
    Apartment,
    /// Rivitalo
    RowHouse,
    /// Omakotitalo
    DetachedHouse,
}

impl BuildingType {
    pub const ALL: [BuildingType; 3] = [
        BuildingType::Apartment,
        BuildingType::RowHouse,
        BuildingType::DetachedHouse,
    ];

    /// Value stored in the `building_type` column.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Apartment => "kt",
            Self::RowHouse => "rt",
            Self::DetachedHouse => "ok",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "kt" | "apartment" => Some(Self::Apartment),
            "rt" | "row-house" | "rowhouse" => Some(Self::RowHouse),
            "ok" | "detached-house" | "detached" => Some(Self::DetachedHouse),
            _ => None,
        }
    }
}

/// Property condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Condition {
    Good,
    Satisfying,
    Passable,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::Good, Condition::Satisfying, Condition::Passable];

    /// Value stored in the `state` column.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Good => "hyvä",
            Self::Satisfying => "tyyd.",
            Self::Passable => "huono",
        }
    }

    /// Parse from the query token (`good`/`ok`/`bad`) or the column code.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "good" | "hyvä" => Some(Self::Good),
            "ok" | "satisfying" | "tyyd." => Some(Self::Satisfying),
            "bad" | "passable" | "huono" => Some(Self::Passable),
            _ => None,
        }
    }
}

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    pub lower: T,
    pub upper: T,
}

impl<T: Copy> Range<T> {
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }
}

impl<T: Copy> From<(T, T)> for Range<T> {
    fn from((lower, upper): (T, T)) -> Self {
        Self::new(lower, upper)
    }
}

/// Allowed limits for the two range dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterBounds {
    pub year_built: Range<i32>,
    pub square_meters: Range<f64>,
}

impl FilterBounds {
    /// Limits relative to the given calendar year.
    pub fn for_year(current_year: i32) -> Self {
        Self {
            year_built: Range::new(MIN_YEAR_BUILT, current_year + FUTURE_YEARS),
            square_meters: Range::new(0.0, MAX_SQUARE_METERS),
        }
    }
}

/// A user's property filter selections.
///
/// Membership selections are ordered sets, so equal selections compile to
/// identical predicates whatever order they were picked in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Raw comma separated postal codes, validated at compile time
    pub postal_codes: String,
    pub year_built: Range<i32>,
    pub square_meters: Range<f64>,
    pub cities: BTreeSet<City>,
    pub ownership: BTreeSet<Ownership>,
    pub rooms: BTreeSet<RoomCount>,
    pub building_types: BTreeSet<BuildingType>,
    pub conditions: BTreeSet<Condition>,
}

impl FilterSet {
    /// Create a filter set with the two mandatory ranges and nothing else selected
    pub fn new(year_built: impl Into<Range<i32>>, square_meters: impl Into<Range<f64>>) -> Self {
        Self {
            postal_codes: String::new(),
            year_built: year_built.into(),
            square_meters: square_meters.into(),
            cities: BTreeSet::new(),
            ownership: BTreeSet::new(),
            rooms: BTreeSet::new(),
            building_types: BTreeSet::new(),
            conditions: BTreeSet::new(),
        }
    }

    /// The UI's initial selection for the given calendar year
    pub fn defaults_for_year(current_year: i32) -> Self {
        Self::new((DEFAULT_START_YEAR, current_year), DEFAULT_SQUARE_METERS)
    }

    pub fn with_postal_codes(mut self, input: impl Into<String>) -> Self {
        self.postal_codes = input.into();
        self
    }

    pub fn with_cities(mut self, cities: impl IntoIterator<Item = City>) -> Self {
        self.cities.extend(cities);
        self
    }

    pub fn with_ownership(mut self, ownership: impl IntoIterator<Item = Ownership>) -> Self {
        self.ownership.extend(ownership);
        self
    }

    pub fn with_rooms(mut self, rooms: impl IntoIterator<Item = RoomCount>) -> Self {
        self.rooms.extend(rooms);
        self
    }

    pub fn with_building_types(mut self, types: impl IntoIterator<Item = BuildingType>) -> Self {
        self.building_types.extend(types);
        self
    }

    pub fn with_conditions(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    /// Expanded `room_category` labels in bucket order
    pub fn room_categories(&self) -> Vec<&'static str> {
        self.rooms
            .iter()
            .flat_map(|room| room.categories().iter().copied())
            .collect()
    }

    /// Check both ranges against the allowed limits.
    pub fn validate(&self, bounds: &FilterBounds) -> QueryResult<()> {
        check_range(
            "year built",
            f64::from(self.year_built.lower),
            f64::from(self.year_built.upper),
            f64::from(bounds.year_built.lower),
            f64::from(bounds.year_built.upper),
        )?;
        check_range(
            "square meters",
            self.square_meters.lower,
            self.square_meters.upper,
            bounds.square_meters.lower,
            bounds.square_meters.upper,
        )
    }

    /// Reject ownership types the addressed estimation does not offer.
    pub fn reject_ownership(&self, unsupported: &[Ownership]) -> QueryResult<()> {
        match self.ownership.iter().find(|o| unsupported.contains(o)) {
            Some(ownership) => Err(QueryError::UnsupportedOwnership {
                code: ownership.code(),
            }),
            None => Ok(()),
        }
    }
}

/// Lower bound must not exceed upper bound; both must be finite.
pub(crate) fn check_ordered(dimension: &'static str, lower: f64, upper: f64) -> QueryResult<()> {
    if lower.is_finite() && upper.is_finite() && lower <= upper {
        Ok(())
    } else {
        Err(QueryError::InvalidRange {
            dimension,
            lower,
            upper,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        })
    }
}

fn check_range(
    dimension: &'static str,
    lower: f64,
    upper: f64,
    min: f64,
    max: f64,
) -> QueryResult<()> {
    let ordered = lower.is_finite() && upper.is_finite() && lower <= upper;
    if ordered && lower >= min && upper <= max {
        Ok(())
    } else {
        Err(QueryError::InvalidRange {
            dimension,
            lower,
            upper,
            min,
            max,
        })
    }
}
