/**
 * Resource Catalog
 *
 * Row and request types for every table served by the generic CRUD
 * routes: goods, books, fruits, questions and greenmarket products.
 *
 * Numeric fields accept either a JSON number or a numeric string, since
 * the form-driven front ends post both. A blank string counts as absent,
 * and whole-valued floats such as `1500.0` are accepted.
 */

use std::fmt;

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};
use sqlx::FromRow;

use crate::backend::resources::repository::{Resource, SqliteQuery};
use crate::shared::error::{require, require_text, SharedError};

// Larger floats can no longer be told apart from their integer neighbours.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

struct FlexibleInt;

impl<'de> Visitor<'de> for FlexibleInt {
    type Value = Option<i64>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a whole number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value)
            .map(Some)
            .map_err(|_| E::custom(format!("expected a whole number, got {value}")))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT_FLOAT {
            Ok(Some(value as i64))
        } else {
            Err(E::custom(format!("expected a whole number, got {value}")))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse()
            .map(Some)
            .map_err(|_| E::custom(format!("expected a whole number, got {value:?}")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

pub(crate) fn flexible_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FlexibleInt)
}

/// Prices and counts of 0 are treated as not filled in
fn require_amount(field: &str, value: Option<i64>) -> Result<i64, SharedError> {
    require(field, value.filter(|amount| *amount != 0))
}

// goods

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Goods {
    pub g_code: i64,
    pub g_name: String,
    pub g_cost: i64,
}

#[derive(Deserialize, Debug, Default)]
pub struct GoodsDraft {
    #[serde(default)]
    pub g_name: Option<String>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub g_cost: Option<i64>,
}

impl Resource for Goods {
    type Draft = GoodsDraft;

    const TABLE: &'static str = "goods";
    const KEY: &'static str = "g_code";
    const COLUMNS: &'static [&'static str] = &["g_name", "g_cost"];
    const ORDER: Option<&'static str> = Some("g_code DESC");
    const LABEL: &'static str = "goods";

    fn validate(draft: &GoodsDraft) -> Result<(), SharedError> {
        require_text("g_name", draft.g_name.as_deref())?;
        require_amount("g_cost", draft.g_cost)?;
        Ok(())
    }

    fn bind_draft<'q>(draft: GoodsDraft, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(draft.g_name).bind(draft.g_cost)
    }
}

// book_store

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Book {
    pub num: i64,
    pub name: String,
    pub area1: Option<String>,
    pub area2: Option<String>,
    pub area3: Option<String>,
    #[serde(rename = "BOOK_CNT")]
    #[sqlx(rename = "BOOK_CNT")]
    pub book_cnt: i64,
    pub owner_nm: Option<String>,
    pub tel_num: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct BookDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub area1: Option<String>,
    #[serde(default)]
    pub area2: Option<String>,
    #[serde(default)]
    pub area3: Option<String>,
    #[serde(rename = "BOOK_CNT", default, deserialize_with = "flexible_int")]
    pub book_cnt: Option<i64>,
    #[serde(default)]
    pub owner_nm: Option<String>,
    #[serde(default)]
    pub tel_num: Option<String>,
}

impl Resource for Book {
    type Draft = BookDraft;

    const TABLE: &'static str = "book_store";
    const KEY: &'static str = "num";
    const COLUMNS: &'static [&'static str] = &[
        "name", "area1", "area2", "area3", "BOOK_CNT", "owner_nm", "tel_num",
    ];
    const LABEL: &'static str = "book";

    fn validate(draft: &BookDraft) -> Result<(), SharedError> {
        require_text("name", draft.name.as_deref())?;
        require_amount("BOOK_CNT", draft.book_cnt)?;
        Ok(())
    }

    fn bind_draft<'q>(draft: BookDraft, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(draft.name)
            .bind(draft.area1)
            .bind(draft.area2)
            .bind(draft.area3)
            .bind(draft.book_cnt)
            .bind(draft.owner_nm)
            .bind(draft.tel_num)
    }
}

// fruit

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Fruit {
    pub num: i64,
    pub name: String,
    pub price: i64,
    pub color: String,
    pub country: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct FruitDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub price: Option<i64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Resource for Fruit {
    type Draft = FruitDraft;

    const TABLE: &'static str = "fruit";
    const KEY: &'static str = "num";
    const COLUMNS: &'static [&'static str] = &["name", "price", "color", "country"];
    const ORDER: Option<&'static str> = Some("num DESC");
    const LABEL: &'static str = "fruit";

    fn validate(draft: &FruitDraft) -> Result<(), SharedError> {
        require_text("name", draft.name.as_deref())?;
        require_amount("price", draft.price)?;
        require_text("color", draft.color.as_deref())?;
        require_text("country", draft.country.as_deref())?;
        Ok(())
    }

    fn bind_draft<'q>(draft: FruitDraft, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(draft.name)
            .bind(draft.price)
            .bind(draft.color)
            .bind(draft.country)
    }
}

// question

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Question {
    pub num: i64,
    pub name: String,
    pub tel: String,
    pub email: String,
    pub txtbox: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct QuestionDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tel: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub txtbox: Option<String>,
}

impl Resource for Question {
    type Draft = QuestionDraft;

    const TABLE: &'static str = "question";
    const KEY: &'static str = "num";
    const COLUMNS: &'static [&'static str] = &["name", "tel", "email", "txtbox"];
    const LABEL: &'static str = "question";

    fn validate(draft: &QuestionDraft) -> Result<(), SharedError> {
        require_text("name", draft.name.as_deref())?;
        require_text("tel", draft.tel.as_deref())?;
        require_text("email", draft.email.as_deref())?;
        require_text("txtbox", draft.txtbox.as_deref())?;
        Ok(())
    }

    fn bind_draft<'q>(draft: QuestionDraft, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(draft.name)
            .bind(draft.tel)
            .bind(draft.email)
            .bind(draft.txtbox)
    }
}

// greenmarket_products

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Set by the image upload route, never by create or update
    pub image_url: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub price: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Resource for Product {
    type Draft = ProductDraft;

    const TABLE: &'static str = "greenmarket_products";
    const KEY: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &["name", "price", "description", "category"];
    const ORDER: Option<&'static str> = Some("id DESC");
    const LABEL: &'static str = "product";

    fn validate(draft: &ProductDraft) -> Result<(), SharedError> {
        require_text("name", draft.name.as_deref())?;
        require_amount("price", draft.price)?;
        Ok(())
    }

    fn bind_draft<'q>(draft: ProductDraft, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(draft.name)
            .bind(draft.price)
            .bind(draft.description)
            .bind(draft.category)
    }
}
