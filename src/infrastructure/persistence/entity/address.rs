use crate::domain::address::address::Address;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub street_name: String,
    pub number: i64,
    pub complement: Option<String>,
    pub neighbourhood: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Address {
    fn from(value: Model) -> Self {
        Address {
            id: Some(value.id),
            street_name: value.street_name,
            number: value.number,
            complement: value.complement,
            neighbourhood: value.neighbourhood,
            city: value.city,
            state: value.state,
            country: value.country,
            zip_code: value.zip_code,
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

impl From<Address> for ActiveModel {
    fn from(value: Address) -> Self {
        ActiveModel {
            id: value.id.map_or(ActiveValue::NotSet, Set),
            street_name: Set(value.street_name),
            number: Set(value.number),
            complement: Set(value.complement),
            neighbourhood: Set(value.neighbourhood),
            city: Set(value.city),
            state: Set(value.state),
            country: Set(value.country),
            zip_code: Set(value.zip_code),
            latitude: Set(value.latitude),
            longitude: Set(value.longitude),
        }
    }
}
