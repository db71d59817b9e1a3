use sea_orm::entity::prelude::*;

/// A vehicle bought for resale.
///
/// Prices are whole currency units.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub purchase_price: i32,
    pub list_price: i32,
    pub sale_price: i32,
    /// Odometer reading at purchase.
    pub miles: i32,
    pub purchase_location: String,
    pub purchase_date: Date,
    /// Unset until the vehicle is sold.
    pub sold_date: Option<Date>,
    pub sold: bool,
    /// Owning user, unset until assigned. No foreign key constraint.
    pub user_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
