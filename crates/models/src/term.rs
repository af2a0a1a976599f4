use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display as FmtDisplay, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

#[cfg(feature = "database")]
use sea_orm::Value;

/// A named academic semester.
///
/// Declaration order is the chronological rank within a year, so the derived
/// `Ord` is the academic ordering and never the alphabetical one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(try_from = "String")]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Semester {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Semester {
    /// Position within the academic year, starting at 1 for Winter
    pub fn rank(self) -> u8 {
        match self {
            Self::Winter => 1,
            Self::Spring => 2,
            Self::Summer => 3,
            Self::Fall => 4,
        }
    }

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn all() -> Vec<Semester> {
        Semester::iter().collect()
    }

    /// Semesters whose rank is at least this one's
    pub fn at_or_after(self) -> Vec<Semester> {
        Semester::iter().filter(|s| s.rank() >= self.rank()).collect()
    }

    /// Semesters whose rank is at most this one's
    pub fn at_or_before(self) -> Vec<Semester> {
        Semester::iter().filter(|s| s.rank() <= self.rank()).collect()
    }
}

impl TryFrom<String> for Semester {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Semester::from_str(value.trim()).map_err(|_| {
            ValidationError::new(
                "semester",
                format!("'{value}' is not one of Winter, Spring, Summer, Fall"),
            )
        })
    }
}

/// A point in academic time: a year and a semester within it.
///
/// Ordering compares the year first, then the semester rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Term {
    pub year: i32,
    pub semester: Semester,
}

impl Term {
    pub fn new(year: i32, semester: Semester) -> Self {
        Self { year, semester }
    }
}

impl FmtDisplay for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.year, self.semester)
    }
}

impl FromStr for Term {
    type Err = ValidationError;

    /// Parses the `"{year} {semester}"` form, e.g. `"2024 Fall"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            ValidationError::new(
                "semester_year",
                format!("'{s}' is not of the form '<year> <semester>'"),
            )
        };

        let mut parts = s.split_whitespace();
        let (Some(year), Some(semester), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let year = year.parse().map_err(|_| invalid())?;
        let semester = Semester::try_from(semester.to_string())?;

        Ok(Term { year, semester })
    }
}

/// An inclusive range of academic terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermRange {
    start: Term,
    end: Term,
}

impl TermRange {
    /// Creates a range, rejecting one whose start follows its end
    pub fn new(start: Term, end: Term) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::new(
                "term_range",
                format!("start term {start} follows end term {end}"),
            ));
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> Term {
        self.start
    }

    pub fn end(&self) -> Term {
        self.end
    }

    pub fn contains(&self, term: Term) -> bool {
        let after_start = term.year > self.start.year
            || (term.year == self.start.year
                && term.semester.rank() >= self.start.semester.rank());
        let before_end = term.year < self.end.year
            || (term.year == self.end.year && term.semester.rank() <= self.end.semester.rank());

        after_start && before_end
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for Semester {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => {
                Semester::from_str(&s).map_err(|_| sea_orm::sea_query::ValueTypeErr)
            }
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "Semester".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::String(sea_orm::sea_query::StringLen::N(16))
    }
}

#[cfg(feature = "database")]
impl From<Semester> for Value {
    fn from(semester: Semester) -> Self {
        Value::String(Some(Box::new(semester.as_str().to_owned())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for Semester {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        Semester::from_str(&val).map_err(|_| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Unknown semester stored in database: {val}"
            )))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for Semester {
    fn null() -> Value {
        Value::String(None)
    }
}

// Needed because `Semester` is part of the `semesters` composite primary key
#[cfg(feature = "database")]
impl sea_orm::TryFromU64 for Semester {
    fn try_from_u64(_: u64) -> Result<Self, sea_orm::DbErr> {
        Err(sea_orm::DbErr::ConvertFromU64("Semester"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(year: i32, semester: Semester) -> Term {
        Term::new(year, semester)
    }

    #[test]
    fn test_semester_rank_table() {
        assert_eq!(Semester::Winter.rank(), 1);
        assert_eq!(Semester::Spring.rank(), 2);
        assert_eq!(Semester::Summer.rank(), 3);
        assert_eq!(Semester::Fall.rank(), 4);
    }

    #[test]
    fn test_semester_order_is_not_alphabetical() {
        // Alphabetically "Fall" < "Spring" < "Summer" < "Winter"
        assert!(Semester::Winter < Semester::Spring);
        assert!(Semester::Spring < Semester::Summer);
        assert!(Semester::Summer < Semester::Fall);
        assert!(Semester::Winter < Semester::Fall);
    }

    #[test]
    fn test_semester_from_str_ignores_case() {
        assert_eq!(Semester::from_str("fall").unwrap(), Semester::Fall);
        assert_eq!(Semester::from_str("WINTER").unwrap(), Semester::Winter);
        assert!(Semester::from_str("Autumn").is_err());
    }

    #[test]
    fn test_semester_serde() {
        let semester: Semester = serde_json::from_str("\"spring\"").unwrap();
        assert_eq!(semester, Semester::Spring);
        assert_eq!(serde_json::to_string(&Semester::Summer).unwrap(), "\"Summer\"");
        assert!(serde_json::from_str::<Semester>("\"Monsoon\"").is_err());
    }

    #[test]
    fn test_semester_neighbourhoods() {
        assert_eq!(
            Semester::Spring.at_or_after(),
            vec![Semester::Spring, Semester::Summer, Semester::Fall]
        );
        assert_eq!(
            Semester::Spring.at_or_before(),
            vec![Semester::Winter, Semester::Spring]
        );
        assert_eq!(Semester::Winter.at_or_before(), vec![Semester::Winter]);
        assert_eq!(Semester::Fall.at_or_after(), vec![Semester::Fall]);
    }

    #[test]
    fn test_term_ordering() {
        assert!(term(2023, Semester::Fall) < term(2024, Semester::Winter));
        assert!(term(2024, Semester::Winter) < term(2024, Semester::Spring));
        assert!(term(2024, Semester::Summer) < term(2024, Semester::Fall));
    }

    #[test]
    fn test_term_display_and_parse() {
        let fall = term(2024, Semester::Fall);
        assert_eq!(fall.to_string(), "2024 Fall");
        assert_eq!(Term::from_str("2024 Fall").unwrap(), fall);
        assert_eq!(Term::from_str("  2024   fall ").unwrap(), fall);
    }

    #[test]
    fn test_term_parse_rejects_malformed() {
        assert!(Term::from_str("2024").is_err());
        assert!(Term::from_str("Fall 2024").is_err());
        assert!(Term::from_str("2024 Fall extra").is_err());
        assert!(Term::from_str("2024 Harvest").is_err());
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = TermRange::new(term(2024, Semester::Spring), term(2024, Semester::Fall)).unwrap();

        assert!(range.contains(term(2024, Semester::Spring)));
        assert!(range.contains(term(2024, Semester::Summer)));
        assert!(range.contains(term(2024, Semester::Fall)));
        assert!(!range.contains(term(2023, Semester::Fall)));
        assert!(!range.contains(term(2025, Semester::Spring)));
    }

    #[test]
    fn test_range_uses_rank_for_winter() {
        let range = TermRange::new(term(2024, Semester::Spring), term(2024, Semester::Fall)).unwrap();
        assert!(!range.contains(term(2024, Semester::Winter)));
    }

    #[test]
    fn test_range_spanning_years() {
        let range = TermRange::new(term(2022, Semester::Fall), term(2024, Semester::Winter)).unwrap();

        assert!(range.contains(term(2022, Semester::Fall)));
        assert!(range.contains(term(2023, Semester::Winter)));
        assert!(range.contains(term(2023, Semester::Fall)));
        assert!(range.contains(term(2024, Semester::Winter)));
        assert!(!range.contains(term(2022, Semester::Summer)));
        assert!(!range.contains(term(2024, Semester::Spring)));
    }

    #[test]
    fn test_range_agrees_with_term_order() {
        let start = term(2023, Semester::Summer);
        let end = term(2025, Semester::Spring);
        let range = TermRange::new(start, end).unwrap();

        for year in 2021..=2027 {
            for semester in Semester::all() {
                let candidate = term(year, semester);
                assert_eq!(
                    range.contains(candidate),
                    start <= candidate && candidate <= end,
                    "disagreement at {candidate}"
                );
            }
        }
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = TermRange::new(term(2024, Semester::Fall), term(2024, Semester::Spring))
            .unwrap_err();
        assert_eq!(err.field, "term_range");
    }
}
