pub use super::airline::Entity as Airline;
pub use super::airline_staff::Entity as AirlineStaff;
pub use super::airport::Entity as Airport;
pub use super::person::Entity as Person;
pub use super::person_trip::Entity as PersonTrip;
pub use super::plan_item::Entity as PlanItem;
pub use super::trip::Entity as Trip;
