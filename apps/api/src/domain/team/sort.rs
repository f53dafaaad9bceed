use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use super::team::Team;

/// Attribute names callers may sort teams by
pub const SORTABLE_FIELDS: &[&str] = &["name", "acronym", "budget"];

/// Prefix marking a sort token as descending
pub const DESCENDING_MARKER: char = '-';

/// A Team attribute with a known column and comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamSortField {
    Name,
    Acronym,
    Budget,
}

impl TeamSortField {
    /// Every attribute the Team entity exposes for ordering
    pub const ALL: [TeamSortField; 3] = [
        TeamSortField::Name,
        TeamSortField::Acronym,
        TeamSortField::Budget,
    ];

    /// Resolves an attribute name against the entity's attributes
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// Attribute name as exposed to callers
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSortField::Name => "name",
            TeamSortField::Acronym => "acronym",
            TeamSortField::Budget => "budget",
        }
    }

    /// SQL expression ordering the `teams` table by this attribute
    ///
    /// Text columns compare bytewise so PostgreSQL agrees with [`Self::compare`].
    pub fn order_expression(&self) -> &'static str {
        match self {
            TeamSortField::Name => r#"name COLLATE "C""#,
            TeamSortField::Acronym => r#"acronym COLLATE "C""#,
            TeamSortField::Budget => "budget",
        }
    }

    /// Compares two teams on this attribute in ascending order
    ///
    /// An unset budget sorts after every set budget, matching PostgreSQL's
    /// default `NULLS LAST` for ascending order.
    pub fn compare(&self, a: &Team, b: &Team) -> Ordering {
        match self {
            TeamSortField::Name => a.name().cmp(b.name()),
            TeamSortField::Acronym => a.acronym().cmp(b.acronym()),
            TeamSortField::Budget => match (a.budget(), b.budget()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for TeamSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// One (attribute, direction) pair of a multi-key ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: TeamSortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(field: TeamSortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: TeamSortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Compares two teams according to this order's attribute and direction
    pub fn compare(&self, a: &Team, b: &Team) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A sort token named an attribute outside the allow-list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid field name for sorting: {field}")]
pub struct InvalidSortField {
    pub field: String,
}

/// Allow-list entries that still resolve to an attribute of the entity
///
/// An entry without a matching [`TeamSortField`] is not sortable.
pub fn effective_sort_fields() -> Vec<TeamSortField> {
    SORTABLE_FIELDS
        .iter()
        .filter_map(|name| TeamSortField::from_name(name))
        .collect()
}

/// Parses sort tokens into an ordered list of sort orders
///
/// A token prefixed with `-` sorts descending on the remainder, any other
/// token sorts ascending on the whole token. Output order follows input
/// order. The first token naming an attribute outside the allow-list fails
/// the whole parse; an empty token list yields no ordering.
///
/// # Example
/// ```
/// use football_teams_api::domain::team::sort::{parse_sort_orders, SortOrder, TeamSortField};
///
/// let orders = parse_sort_orders(&["name", "-budget"]).unwrap();
/// assert_eq!(
///     orders,
///     vec![
///         SortOrder::asc(TeamSortField::Name),
///         SortOrder::desc(TeamSortField::Budget),
///     ]
/// );
///
/// let err = parse_sort_orders(&["-salary"]).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid field name for sorting: salary");
/// ```
pub fn parse_sort_orders<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<SortOrder>, InvalidSortField> {
    let allowed = effective_sort_fields();

    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            let (name, direction) = match token.strip_prefix(DESCENDING_MARKER) {
                Some(rest) => (rest, SortDirection::Desc),
                None => (token, SortDirection::Asc),
            };

            let field = TeamSortField::from_name(name)
                .filter(|field| allowed.contains(field))
                .ok_or_else(|| {
                    tracing::warn!(field = name, "Invalid sorting field");
                    InvalidSortField {
                        field: name.to_string(),
                    }
                })?;

            tracing::debug!(field = %field, direction = direction.as_sql(), "Sorting by field");
            Ok(SortOrder { field, direction })
        })
        .collect()
}

/// Compares two teams under a multi-key ordering, left-to-right precedence
pub fn compare_teams(orders: &[SortOrder], a: &Team, b: &Team) -> Ordering {
    orders
        .iter()
        .map(|order| order.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
