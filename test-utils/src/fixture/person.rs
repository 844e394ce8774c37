//! Person fixtures for in-memory test data.

/// Creates a person entity model with default values.
///
/// Defaults: id `1`, username `"jdoe"`, name `"John Doe"`, email `"jdoe@example.com"`, age `42`.
pub fn entity() -> entity::person::Model {
    entity_builder().build()
}

/// Creates a person entity builder for customization.
pub fn entity_builder() -> PersonEntityBuilder {
    PersonEntityBuilder::default()
}

/// Builder for person entity models.
pub struct PersonEntityBuilder {
    id: i32,
    username: String,
    first_name: String,
    last_name: String,
    email: Option<String>,
    age: Option<i32>,
}

impl Default for PersonEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            username: "jdoe".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: Some("jdoe@example.com".to_string()),
            age: Some(42),
        }
    }
}

impl PersonEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn age(mut self, age: Option<i32>) -> Self {
        self.age = age;
        self
    }

    pub fn build(self) -> entity::person::Model {
        entity::person::Model {
            id: self.id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            age: self.age,
        }
    }
}
