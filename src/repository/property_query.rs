//! Property search query builder.
//!
//! Turns [`FilterOptions`] into SQL text plus an ordered list of bound
//! parameters. Placeholder `$N` always refers to the N-th parameter, and
//! placeholders appear in the text in ascending order.

use rust_decimal::Decimal;
use sqlx::{postgres::PgArguments, query::QueryAs, Postgres};

use crate::models::property::FilterOptions;

/// Number of listings returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: i64 = 10;

const BASE_SELECT: &str = "SELECT properties.*, avg(property_reviews.rating) AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id";

const GROUP_BY: &str = "GROUP BY properties.id";
const ORDER_BY: &str = "ORDER BY cost_per_night";

/// A value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i32),
    BigInt(i64),
    Numeric(Decimal),
}

impl SqlParam {
    /// Bind this value as the next positional argument of `query`
    pub fn bind_to<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            SqlParam::Text(v) => query.bind(v.as_str()),
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::BigInt(v) => query.bind(*v),
            SqlParam::Numeric(v) => query.bind(*v),
        }
    }
}

/// Generated search statement and its parameters, in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySearchQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// A boolean condition whose right-hand side is a single placeholder
struct Predicate {
    lhs: &'static str,
    param: SqlParam,
}

type PredicateFn = fn(&FilterOptions) -> Option<Predicate>;

/// WHERE predicates, in the order they are appended
const WHERE_PREDICATES: [PredicateFn; 4] = [
    city_predicate,
    owner_predicate,
    minimum_price_predicate,
    maximum_price_predicate,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clause {
    None,
    WhereStarted,
}

impl Clause {
    fn keyword(self) -> &'static str {
        match self {
            Clause::None => "WHERE",
            Clause::WhereStarted => "AND",
        }
    }
}

/// Drop the leading sigil and wrap the rest in LIKE wildcards
fn city_pattern(city: &str) -> String {
    let mut chars = city.chars();
    chars.next();
    format!("%{}%", chars.as_str())
}

fn city_predicate(options: &FilterOptions) -> Option<Predicate> {
    options
        .city
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(|city| Predicate {
            lhs: "city LIKE",
            param: SqlParam::Text(city_pattern(city)),
        })
}

fn owner_predicate(options: &FilterOptions) -> Option<Predicate> {
    options.owner_id.map(|id| Predicate {
        lhs: "owner_id =",
        param: SqlParam::Int(id),
    })
}

fn minimum_price_predicate(options: &FilterOptions) -> Option<Predicate> {
    options.minimum_price_per_night.map(|price| Predicate {
        lhs: "cost_per_night >=",
        param: SqlParam::BigInt(price.minor_units()),
    })
}

fn maximum_price_predicate(options: &FilterOptions) -> Option<Predicate> {
    options.maximum_price_per_night.map(|price| Predicate {
        lhs: "cost_per_night <=",
        param: SqlParam::BigInt(price.minor_units()),
    })
}

fn rating_predicate(options: &FilterOptions) -> Option<Predicate> {
    options.minimum_rating.map(|rating| Predicate {
        lhs: "avg(property_reviews.rating) >=",
        param: SqlParam::Numeric(rating.value()),
    })
}

/// Build the property search statement for `options`, returning at most `limit` rows
pub fn build(options: &FilterOptions, limit: i64) -> PropertySearchQuery {
    let mut sql = String::from(BASE_SELECT);
    let mut params = Vec::new();

    let mut push = |sql: &mut String, keyword: &str, predicate: Predicate| {
        params.push(predicate.param);
        sql.push_str(&format!("\n{} {} ${}", keyword, predicate.lhs, params.len()));
    };

    let mut clause = Clause::None;
    for predicate in WHERE_PREDICATES.iter().filter_map(|p| p(options)) {
        push(&mut sql, clause.keyword(), predicate);
        clause = Clause::WhereStarted;
    }

    sql.push('\n');
    sql.push_str(GROUP_BY);

    // Aggregate condition: always after GROUP BY, never part of the WHERE chain
    if let Some(predicate) = rating_predicate(options) {
        push(&mut sql, "HAVING", predicate);
    }

    params.push(SqlParam::BigInt(limit));
    sql.push_str(&format!("\n{}\nLIMIT ${}", ORDER_BY, params.len()));

    PropertySearchQuery { sql, params }
}
