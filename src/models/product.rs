use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::introspect::{DeletedAt, Repr, Scalar};
use crate::record;

/// Product lifecycle badge (`draft`, `published`, `archived`, `out_of_stock`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Badge(pub String);

crate::field_type!(Badge => Repr::Scalar(Scalar::Str));

record! {
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Category: "categories" {
        #[field(json = "id", store = "primaryKey;column:id")]
        pub id: u32,
        #[field(json = "name", store = "column:name;size:100;unique;not null", ui = "creatable;visible;editable;filterable;sortable")]
        pub name: String,
        #[field(json = "slug", store = "column:slug;size:100;unique;not null;index", ui = "visible;filterable")]
        pub slug: String,
        #[field(json = "description", store = "column:description;type:text", ui = "creatable;visible;editable")]
        pub description: String,
        #[field(json = "image_url", store = "column:image_url;size:500", ui = "creatable;visible;editable")]
        pub image_url: String,
        #[field(json = "is_active", store = "column:is_active;default:true", ui = "visible;editable;filterable")]
        pub is_active: bool,
        #[field(json = "created_at", store = "column:created_at")]
        pub created_at: DateTime<Utc>,
        #[field(json = "updated_at", store = "column:updated_at")]
        pub updated_at: DateTime<Utc>,
        #[field(json = "deleted_at,omitempty", store = "index")]
        pub deleted_at: DeletedAt,
    }
}

record! {
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct SubCategory: "sub_categories" {
        #[field(json = "id", store = "primaryKey;column:id")]
        pub id: u32,
        #[field(
            json = "category_id",
            store = "column:category_id;not null;index",
            ui = "creatable;editable;filterable;selection:/options?data=category",
        )]
        pub category_id: u32,
        #[field(json = "name", store = "column:name;size:100;not null", ui = "creatable;visible;editable;filterable;sortable")]
        pub name: String,
        #[field(json = "slug", store = "column:slug;size:100;not null;index", ui = "visible;filterable")]
        pub slug: String,
        #[field(json = "description", store = "column:description;type:text", ui = "creatable;visible;editable")]
        pub description: String,
        #[field(json = "image_url", store = "column:image_url;size:500", ui = "creatable;visible;editable")]
        pub image_url: String,
        #[field(json = "is_active", store = "column:is_active;default:true", ui = "visible;editable;filterable")]
        pub is_active: bool,
        #[field(json = "created_at", store = "column:created_at")]
        pub created_at: DateTime<Utc>,
        #[field(json = "updated_at", store = "column:updated_at")]
        pub updated_at: DateTime<Utc>,
        #[field(json = "deleted_at,omitempty", store = "index")]
        pub deleted_at: DeletedAt,
    }
}

record! {
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Shop: "shops" {
        #[field(json = "id", store = "primaryKey;column:id")]
        pub id: u32,
        #[field(json = "external_id", store = "column:external_id;size:100;unique")]
        pub external_id: String,
        #[field(json = "name", store = "column:name;size:200;not null", ui = "creatable;visible;editable;filterable;sortable")]
        pub name: String,
        #[field(json = "slug", store = "column:slug;size:200;unique;not null;index")]
        pub slug: String,
        #[field(json = "domain", store = "column:domain;size:200")]
        pub domain: String,
        #[field(json = "city", store = "column:city;size:100", ui = "visible;filterable")]
        pub city: String,
        #[field(json = "image_url", store = "column:image_url;size:500")]
        pub image_url: String,
        #[field(json = "reputation", store = "column:reputation;size:500")]
        pub reputation: String,
        #[field(json = "is_official", store = "column:is_official;default:false", ui = "visible;filterable")]
        pub is_official: bool,
        #[field(json = "created_at", store = "column:created_at")]
        pub created_at: DateTime<Utc>,
        #[field(json = "updated_at", store = "column:updated_at")]
        pub updated_at: DateTime<Utc>,
        #[field(json = "deleted_at,omitempty", store = "index")]
        pub deleted_at: DeletedAt,
    }
}

record! {
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Product: "products" {
        #[field(json = "id", store = "primaryKey;column:id")]
        pub id: u32,
        #[field(json = "external_id", store = "column:external_id;size:100;unique")]
        pub external_id: String,
        #[field(json = "sku", store = "column:sku;size:100;unique;index", ui = "creatable;visible;editable;filterable")]
        pub sku: String,
        #[field(json = "name", store = "column:name;size:255;not null", ui = "creatable;visible;editable;filterable;sortable")]
        pub name: String,
        #[field(json = "slug", store = "column:slug;size:255;unique;not null;index")]
        pub slug: String,
        #[field(json = "subtitle", store = "column:subtitle;size:255", ui = "creatable;visible;editable")]
        pub subtitle: String,
        #[field(json = "description", store = "column:description;type:text", ui = "creatable;visible;editable")]
        pub description: String,
        #[field(json = "image_url", store = "column:image_url;size:500;not null", ui = "creatable;visible;editable")]
        pub image_url: String,
        #[field(json = "price", store = "column:price;not null", ui = "creatable;visible;editable;filterable;sortable")]
        pub price: f64,
        #[field(json = "slashed_price", store = "column:slashed_price", ui = "creatable;visible;editable")]
        pub slashed_price: f64,
        #[field(json = "discount_pct", store = "column:discount_pct;default:0", ui = "visible;filterable")]
        pub discount_pct: i32,
        #[field(json = "stock", store = "column:stock;default:0", ui = "creatable;visible;editable;filterable;sortable")]
        pub stock: i32,
        #[field(json = "rating", store = "column:rating;default:0", ui = "visible;filterable;sortable")]
        pub rating: f32,
        #[field(json = "count_review", store = "column:count_review;default:0", ui = "visible;sortable")]
        pub count_review: i32,
        #[field(json = "count_sold", store = "column:count_sold;default:0", ui = "visible;sortable")]
        pub count_sold: i32,
        // grams
        #[field(json = "weight", store = "column:weight", ui = "creatable;visible;editable")]
        pub weight: i32,
        #[field(json = "is_active", store = "column:is_active;default:true", ui = "visible;editable;filterable")]
        pub is_active: bool,
        #[field(json = "is_featured", store = "column:is_featured;default:false", ui = "visible;editable;filterable")]
        pub is_featured: bool,
        #[field(
            json = "status",
            store = "column:status;default:'draft'",
            ui = "visible;editable;filterable;sortable;selection:/options?data=product_status",
        )]
        pub status: Badge,
        #[field(
            json = "category_id",
            store = "column:category_id;index",
            ui = "creatable;editable;filterable;selection:/options?data=category",
        )]
        pub category_id: u32,
        #[field(
            json = "sub_category_id",
            store = "column:sub_category_id;index",
            ui = "creatable;editable;filterable;selection:/options?data=sub_category",
        )]
        pub sub_category_id: u32,
        #[field(
            json = "shop_id",
            store = "column:shop_id;not null;index",
            ui = "creatable;editable;filterable;selection:/options?data=shop",
        )]
        pub shop_id: u32,
        #[field(json = "created_at", store = "column:created_at")]
        pub created_at: DateTime<Utc>,
        #[field(json = "updated_at", store = "column:updated_at")]
        pub updated_at: DateTime<Utc>,
        #[field(json = "deleted_at,omitempty", store = "index")]
        pub deleted_at: DeletedAt,
    }
}

record! {
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ProductVariant: "product_variants" {
        #[field(json = "id", store = "primaryKey;column:id")]
        pub id: u32,
        #[field(json = "product_id", store = "column:product_id;not null;index")]
        pub product_id: u32,
        #[field(json = "sku", store = "column:sku;size:100;unique;index")]
        pub sku: String,
        #[field(json = "name", store = "column:name;size:100;not null")]
        pub name: String,
        #[field(json = "price", store = "column:price")]
        pub price: f64,
        #[field(json = "stock", store = "column:stock;default:0")]
        pub stock: i32,
        #[field(json = "weight", store = "column:weight")]
        pub weight: i32,
        #[field(json = "image_url", store = "column:image_url;size:500")]
        pub image_url: String,
        #[field(json = "is_available", store = "column:is_available;default:true")]
        pub is_available: bool,
        #[field(json = "created_at", store = "column:created_at")]
        pub created_at: DateTime<Utc>,
        #[field(json = "updated_at", store = "column:updated_at")]
        pub updated_at: DateTime<Utc>,
        #[field(json = "deleted_at,omitempty", store = "index")]
        pub deleted_at: DeletedAt,
    }
}
