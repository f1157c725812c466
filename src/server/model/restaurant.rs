//! Restaurant domain models and parameters.
//!
//! Provides the restaurant and dish domain models, the sparse filter used to select
//! restaurants, and parameter types for create/update/list operations. Parameter
//! types are built from DTOs at the controller boundary and validated before they
//! reach the repository.

use bson::{doc, oid::ObjectId, Document};
use entity::restaurant::field;

use crate::{
    model::restaurant::{
        CreateDishDto, CreateRestaurantDto, DishDto, RestaurantDto, RestaurantQueryDto,
        UpdateRestaurantDto,
    },
    server::{
        error::input::InputError,
        util::parse::{parse_object_id, parse_ordering, parse_page},
    },
};

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

/// Known misspellings and the city name they normalize to.
const CITY_MISSPELLINGS: &[(&str, &str)] = &[
    ("Mascow", "Moscow"),
    ("Moskow", "Moscow"),
    ("Sankt-Peterburg", "Saint Petersburg"),
];

/// A dish embedded in a restaurant menu.
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    /// Dish name.
    pub name: String,
    /// Price multiplied by 100.
    pub price: i64,
}

impl Dish {
    /// Converts an embedded document to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::dish::Model) -> Self {
        Self {
            name: entity.name,
            price: entity.price,
        }
    }

    /// Converts the dish into an embedded document.
    ///
    /// Embedded dishes are addressed through their parent, so no id is assigned.
    pub fn into_entity(self) -> entity::dish::Model {
        entity::dish::Model {
            id: None,
            name: self.name,
            price: self.price,
        }
    }

    /// Converts a submitted dish into a validated domain model.
    ///
    /// # Returns
    /// - `Ok(Dish)` - Name present and price non-negative
    /// - `Err(InputError::EmptyField)` - Blank name
    /// - `Err(InputError::NegativePrice)` - Price below zero
    pub fn from_dto(dto: CreateDishDto) -> Result<Self, InputError> {
        let name = required("name", dto.name)?;

        if dto.price < 0 {
            return Err(InputError::NegativePrice(dto.price));
        }

        Ok(Self {
            name,
            price: dto.price,
        })
    }

    pub fn into_dto(self) -> DishDto {
        DishDto {
            id: None,
            name: self.name,
            price: self.price,
        }
    }
}

/// A restaurant with its menu.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    /// Identifier assigned by the repository at creation.
    pub id: ObjectId,
    pub name: String,
    pub city: String,
    /// `None` when the rating is unset.
    pub rating: Option<f64>,
    /// Menu in append order. Empty for restaurants read through `list`.
    pub menu: Vec<Dish>,
}

impl Restaurant {
    /// Converts a restaurant document to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::restaurant::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            rating: entity.rating,
            menu: entity.menu.into_iter().map(Dish::from_entity).collect(),
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> RestaurantDto {
        RestaurantDto {
            id: self.id.to_hex(),
            name: self.name,
            city: self.city,
            rating: self.rating,
            menu: self.menu.into_iter().map(Dish::into_dto).collect(),
        }
    }
}

/// Sparse restaurant filter.
///
/// Each present field constrains the match; absent fields match anything. A
/// rating of `Some(0.0)` is a real constraint, distinct from `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantFilter {
    pub id: Option<ObjectId>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub rating: Option<f64>,
}

impl RestaurantFilter {
    /// Filter matching exactly one restaurant by identifier.
    pub fn by_id(id: ObjectId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    /// Store filter document containing only the present fields.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();

        if let Some(id) = self.id {
            document.insert(field::ID, id);
        }
        if let Some(name) = &self.name {
            document.insert(field::NAME, name.clone());
        }
        if let Some(city) = &self.city {
            document.insert(field::CITY, city.clone());
        }
        if let Some(rating) = self.rating {
            document.insert(field::RATING, rating);
        }

        document
    }
}

/// Parameters for listing restaurants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListRestaurantsParams {
    pub filter: RestaurantFilter,
    /// Field to order by, `-` prefixed for descending order.
    pub ordering: Option<String>,
    /// 1-based page number; `0` disables pagination.
    pub page: u64,
}

impl ListRestaurantsParams {
    /// Builds list parameters from the query string.
    ///
    /// # Returns
    /// - `Ok(ListRestaurantsParams)` - Query parsed
    /// - `Err(InputError::InvalidObjectId)` - `id` is not a valid ObjectId
    /// - `Err(InputError::InvalidPage)` - `page` is not a non-negative integer
    /// - `Err(InputError::InvalidOrdering)` - `ordering` is not a field name
    pub fn from_dto(dto: RestaurantQueryDto) -> Result<Self, InputError> {
        let id = dto.id.as_deref().map(parse_object_id).transpose()?;
        let page = parse_page(dto.page.as_deref())?;
        let ordering = parse_ordering(dto.ordering.as_deref())?;

        Ok(Self {
            filter: RestaurantFilter {
                id,
                name: dto.name,
                city: dto.city,
                rating: dto.rating,
            },
            ordering,
            page,
        })
    }
}

/// Parameters for creating a restaurant. The identifier is assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRestaurantParams {
    pub name: String,
    pub city: String,
    pub rating: Option<f64>,
    pub menu: Vec<Dish>,
}

impl CreateRestaurantParams {
    /// Converts and validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateRestaurantParams)` - All fields valid
    /// - `Err(InputError)` - Blank name or city, misspelled city, rating out of
    ///   range, or an invalid dish
    pub fn from_dto(dto: CreateRestaurantDto) -> Result<Self, InputError> {
        let name = required("name", dto.name)?;
        let city = validate_city(required("city", dto.city)?)?;
        let rating = dto.rating.map(validate_rating).transpose()?;
        let menu = dto
            .menu
            .into_iter()
            .map(Dish::from_dto)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            city,
            rating,
            menu,
        })
    }
}

/// Partial change applied with `$set` semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRestaurantParams {
    pub name: Option<String>,
    pub city: Option<String>,
    pub rating: Option<f64>,
}

impl UpdateRestaurantParams {
    /// Converts and validates a partial change.
    ///
    /// # Returns
    /// - `Ok(UpdateRestaurantParams)` - At least one valid field present
    /// - `Err(InputError::EmptyChange)` - No field present
    /// - `Err(InputError)` - A present field is invalid
    pub fn from_dto(dto: UpdateRestaurantDto) -> Result<Self, InputError> {
        let params = Self {
            name: dto.name.map(|name| required("name", name)).transpose()?,
            city: dto
                .city
                .map(|city| required("city", city).and_then(validate_city))
                .transpose()?,
            rating: dto.rating.map(validate_rating).transpose()?,
        };

        if params.is_empty() {
            return Err(InputError::EmptyChange);
        }

        Ok(params)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.city.is_none() && self.rating.is_none()
    }

    /// `{"$set": {...}}` document with only the present fields.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();

        if let Some(name) = &self.name {
            set.insert(field::NAME, name.clone());
        }
        if let Some(city) = &self.city {
            set.insert(field::CITY, city.clone());
        }
        if let Some(rating) = self.rating {
            set.insert(field::RATING, rating);
        }

        doc! { "$set": set }
    }
}

fn required(field: &'static str, value: String) -> Result<String, InputError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(InputError::EmptyField(field));
    }

    Ok(value.to_string())
}

fn validate_rating(rating: f64) -> Result<f64, InputError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(InputError::RatingOutOfRange(rating));
    }

    Ok(rating)
}

fn validate_city(city: String) -> Result<String, InputError> {
    if let Some(&(_, expected)) = CITY_MISSPELLINGS
        .iter()
        .find(|(misspelling, _)| misspelling.eq_ignore_ascii_case(&city))
    {
        return Err(InputError::UnknownCity {
            given: city,
            expected,
        });
    }

    Ok(city)
}
