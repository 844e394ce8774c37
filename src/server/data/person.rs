use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::integrity::BusinessKey,
    model::person::{CreatePersonParam, Person, UpdatePersonParam},
};

impl BusinessKey for entity::person::Entity {
    type Key = String;
    type Id = i32;

    const KIND: &'static str = "person";

    fn key_condition(username: &String) -> Condition {
        Condition::all().add(entity::person::Column::Username.eq(username.clone()))
    }

    fn identity_column() -> entity::person::Column {
        entity::person::Column::Id
    }

    fn key_of(model: &entity::person::Model) -> String {
        model.username.clone()
    }
}

/// Repository for person records, keyed by username.
pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every person ordered by username.
    ///
    /// # Returns
    /// - `Ok(Vec<Person>)` - All persons, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(&self) -> Result<Vec<Person>, DbErr> {
        let people = entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Username)
            .all(self.db)
            .await?;

        Ok(people.into_iter().map(Person::from_entity).collect())
    }

    /// Finds a person by username.
    ///
    /// # Arguments
    /// - `username` - Business key of the person
    ///
    /// # Returns
    /// - `Ok(Some(Person))` - The person
    /// - `Ok(None)` - No person has the username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Person>, DbErr> {
        let person = entity::prelude::Person::find()
            .filter(entity::person::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(person.map(Person::from_entity))
    }

    /// Inserts a new person.
    ///
    /// Uniqueness of the username is checked by the caller; a duplicate surfaces
    /// here as the store's unique constraint error.
    ///
    /// # Arguments
    /// - `param` - Username, names and optional contact fields
    ///
    /// # Returns
    /// - `Ok(Person)` - The stored person
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePersonParam) -> Result<Person, DbErr> {
        let person = entity::person::ActiveModel {
            username: ActiveValue::Set(param.username),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            age: ActiveValue::Set(param.age),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Person::from_entity(person))
    }

    /// Applies the provided fields to the person with the given username.
    ///
    /// Absent fields are left untouched. Nothing is written when no field changes.
    ///
    /// # Arguments
    /// - `username` - Business key of the person to update
    /// - `param` - Fields to change; `Some(None)` clears a nullable field
    ///
    /// # Returns
    /// - `Ok(Person)` - The person after the update
    /// - `Err(DbErr::RecordNotFound)` - No person has the username
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, username: &str, param: UpdatePersonParam) -> Result<Person, DbErr> {
        let person = entity::prelude::Person::find()
            .filter(entity::person::Column::Username.eq(username))
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Person {} not found", username)))?;

        let mut active_model: entity::person::ActiveModel = person.clone().into();
        if let Some(first_name) = param.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = param.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(age) = param.age {
            active_model.age = ActiveValue::Set(age);
        }

        if !active_model.is_changed() {
            return Ok(Person::from_entity(person));
        }

        let person = active_model.update(self.db).await?;

        Ok(Person::from_entity(person))
    }

    /// Deletes the person with the given username. Links to airlines and trips are
    /// left to the caller.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows, 0 when the username is unknown
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, username: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Person::delete_many()
            .filter(entity::person::Column::Username.eq(username))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
