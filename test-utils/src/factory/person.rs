//! Person factory for creating test person entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test persons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let person = PersonFactory::new(&db)
///     .username("jdoe")
///     .age(42)
///     .build()
///     .await?;
/// ```
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    first_name: String,
    last_name: String,
    email: Option<String>,
    age: Option<i32>,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new PersonFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"`
    /// - first_name: `"First{id}"`
    /// - last_name: `"Last{id}"`
    /// - email / age: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            email: None,
            age: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    /// Builds and inserts the person entity into the database.
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        entity::person::ActiveModel {
            username: ActiveValue::Set(self.username),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            age: ActiveValue::Set(self.age),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person with default values.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).build().await
}

/// Creates a person with a specific username.
pub async fn create_person_with_username(
    db: &DatabaseConnection,
    username: impl Into<String>,
) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).username(username).build().await
}
