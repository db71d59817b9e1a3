//! The entity store: every query the handlers need, behind one cloneable handle.
use entity::{repair, user, vehicle};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::models::{NewRepairInput, NewVehicleInput};

/// Handle to the relational store.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub(crate) struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub(crate) fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub(crate) async fn create_user(
        &self,
        name: String,
        email: String,
    ) -> Result<user::Model, DbErr> {
        let user = user::ActiveModel {
            name: Set(name),
            email: Set(email),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        tracing::debug!(user_id = user.id, "Created user");
        Ok(user)
    }

    pub(crate) async fn find_users_by_email(&self, email: &str) -> Result<Vec<user::Model>, DbErr> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
    }

    pub(crate) async fn all_users(&self) -> Result<Vec<user::Model>, DbErr> {
        user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
    }

    /// Returns whether a row was actually removed.
    pub(crate) async fn delete_user(&self, id: i32) -> Result<bool, DbErr> {
        let res = user::Entity::delete_by_id(id).exec(&self.db).await?;
        tracing::debug!(user_id = id, rows = res.rows_affected, "Deleted user");
        Ok(res.rows_affected > 0)
    }

    pub(crate) async fn create_vehicle(
        &self,
        input: NewVehicleInput,
    ) -> Result<vehicle::Model, DbErr> {
        let vehicle = vehicle::ActiveModel {
            year: Set(input.year),
            make: Set(input.make),
            model: Set(input.model),
            purchase_price: Set(input.purchase_price),
            list_price: Set(input.list_price),
            sale_price: Set(input.sale_price),
            miles: Set(input.miles),
            purchase_location: Set(input.purchase_location),
            purchase_date: Set(input.purchase_date),
            sold_date: Set(input.sold_date),
            sold: Set(input.sold),
            user_id: Set(input.user_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        tracing::debug!(vehicle_id = vehicle.id, user_id = ?vehicle.user_id, "Created vehicle");
        Ok(vehicle)
    }

    pub(crate) async fn find_vehicles_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<vehicle::Model>, DbErr> {
        vehicle::Entity::find()
            .filter(vehicle::Column::UserId.eq(user_id))
            .order_by_asc(vehicle::Column::Id)
            .all(&self.db)
            .await
    }

    pub(crate) async fn all_vehicles(&self) -> Result<Vec<vehicle::Model>, DbErr> {
        vehicle::Entity::find()
            .order_by_asc(vehicle::Column::Id)
            .all(&self.db)
            .await
    }

    /// Returns whether a row was actually removed.
    pub(crate) async fn delete_vehicle(&self, id: i32) -> Result<bool, DbErr> {
        let res = vehicle::Entity::delete_by_id(id).exec(&self.db).await?;
        tracing::debug!(vehicle_id = id, rows = res.rows_affected, "Deleted vehicle");
        Ok(res.rows_affected > 0)
    }

    pub(crate) async fn create_repair(
        &self,
        input: NewRepairInput,
    ) -> Result<repair::Model, DbErr> {
        let repair = repair::ActiveModel {
            shop: Set(input.shop),
            work_description: Set(input.work_description),
            parts_cost: Set(input.parts_cost),
            labor_cost: Set(input.labor_cost),
            labor_hours: Set(input.labor_hours),
            date: Set(input.date),
            vehicle_id: Set(input.vehicle_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        tracing::debug!(
            repair_id = repair.id,
            vehicle_id = repair.vehicle_id,
            "Created repair"
        );
        Ok(repair)
    }

    pub(crate) async fn find_repairs_by_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<repair::Model>, DbErr> {
        repair::Entity::find()
            .filter(repair::Column::VehicleId.eq(vehicle_id))
            .order_by_asc(repair::Column::Id)
            .all(&self.db)
            .await
    }

    /// Returns whether a row was actually removed.
    pub(crate) async fn delete_repair(&self, id: i32) -> Result<bool, DbErr> {
        let res = repair::Entity::delete_by_id(id).exec(&self.db).await?;
        tracing::debug!(repair_id = id, rows = res.rows_affected, "Deleted repair");
        Ok(res.rows_affected > 0)
    }
}
