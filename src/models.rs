use serde::{Deserialize, Serialize};

use crate::schema::plants;
use diesel::prelude::*;

/// Plant details as stored and served.
#[derive(Debug, Clone, Serialize, Queryable)]
pub struct Plant {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub is_in_stock: bool,
}

/// New plant details; the id is assigned by the database on insert.
#[derive(Debug, Clone, Serialize, Deserialize, Insertable)]
#[diesel(table_name = plants)]
pub struct NewPlant {
    pub name: String,
    pub image: String,
    pub price: f64,
    pub is_in_stock: bool,
}

impl NewPlant {
    /// Constructs new plant details.
    #[cfg(test)] // only needed in tests
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        price: f64,
        is_in_stock: bool,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            price,
            is_in_stock,
        }
    }
}

/// Partial update; fields absent from the request body are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, AsChangeset)]
#[diesel(table_name = plants)]
pub struct UpdatePlant {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub is_in_stock: Option<bool>,
}

impl UpdatePlant {
    /// True when no field is set; Diesel refuses to build an empty changeset.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image.is_none()
            && self.price.is_none()
            && self.is_in_stock.is_none()
    }
}
