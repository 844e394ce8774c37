use crate::model::person::{CreatePersonDto, PersonDto, UpdatePersonDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> PersonDto {
        PersonDto {
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            age: self.age,
        }
    }

    pub fn from_entity(entity: entity::person::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            age: entity.age,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePersonParam {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl CreatePersonParam {
    pub fn from_dto(dto: CreatePersonDto) -> Self {
        Self {
            username: dto.username,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            age: dto.age,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePersonParam {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<Option<String>>,
    pub age: Option<Option<i32>>,
}

impl UpdatePersonParam {
    pub fn from_dto(dto: UpdatePersonDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            age: dto.age,
        }
    }
}
