use sea_orm::entity::prelude::*;

/// A single repair job done on a vehicle.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "repairs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub shop: String,
    pub work_description: String,
    pub parts_cost: i32,
    pub labor_cost: i32,
    pub labor_hours: f64,
    pub date: Date,
    /// Owning vehicle. No foreign key constraint.
    pub vehicle_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
