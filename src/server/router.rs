use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{airline, airport, person, staff, traveller, trip},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(airline_routes())
        .merge(airport_routes())
        .merge(person_routes())
        .merge(trip_routes())
        .merge(association_routes())
}

fn airline_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/airlines",
            get(airline::get_airlines).post(airline::create_airline),
        )
        .route("/api/airlines/search", post(airline::search_airlines))
        .route("/api/airlines/search/count", post(airline::count_airlines))
        .route(
            "/api/airlines/{code}",
            get(airline::get_airline)
                .patch(airline::update_airline)
                .delete(airline::delete_airline),
        )
        .route("/api/airlines/{code}/exists", get(airline::airline_exists))
}

fn airport_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/airports",
            get(airport::get_airports).post(airport::create_airport),
        )
        .route("/api/airports/search", post(airport::search_airports))
        .route("/api/airports/search/count", post(airport::count_airports))
        .route(
            "/api/airports/{icao}/{iata}",
            get(airport::get_airport)
                .patch(airport::update_airport)
                .delete(airport::delete_airport),
        )
        .route(
            "/api/airports/{icao}/{iata}/exists",
            get(airport::airport_exists),
        )
        .route(
            "/api/airports/{icao}/{iata}/airlines",
            get(airport::get_based_airlines),
        )
}

fn person_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/persons",
            get(person::get_persons).post(person::create_person),
        )
        .route("/api/persons/search", post(person::search_persons))
        .route("/api/persons/search/count", post(person::count_persons))
        .route(
            "/api/persons/{username}",
            get(person::get_person)
                .patch(person::update_person)
                .delete(person::delete_person),
        )
        .route("/api/persons/{username}/exists", get(person::person_exists))
}

fn trip_routes() -> Router<AppState> {
    Router::new()
        .route("/api/trips", get(trip::get_trips).post(trip::create_trip))
        .route("/api/trips/search", post(trip::search_trips))
        .route("/api/trips/search/count", post(trip::count_trips))
        .route(
            "/api/trips/{trip_id}",
            get(trip::get_trip)
                .patch(trip::update_trip)
                .delete(trip::delete_trip),
        )
        .route("/api/trips/{trip_id}/exists", get(trip::trip_exists))
}

fn association_routes() -> Router<AppState> {
    Router::new()
        .route("/api/airlines/{code}/staff", get(staff::get_staff))
        .route(
            "/api/airlines/{code}/staff/{username}",
            get(staff::staff_exists)
                .post(staff::add_staff)
                .delete(staff::remove_staff),
        )
        .route("/api/persons/{username}/airlines", get(staff::get_employers))
        .route("/api/staff/search", post(staff::search_staff))
        .route("/api/staff/search/count", post(staff::count_staff))
        .route(
            "/api/persons/{username}/trips",
            get(traveller::get_person_trips),
        )
        .route(
            "/api/trips/{trip_id}/travellers",
            get(traveller::get_travellers),
        )
        .route(
            "/api/trips/{trip_id}/travellers/{username}",
            get(traveller::traveller_exists)
                .post(traveller::add_traveller)
                .delete(traveller::remove_traveller),
        )
        .route(
            "/api/person-trips/search",
            post(traveller::search_person_trips),
        )
        .route(
            "/api/person-trips/search/count",
            post(traveller::count_person_trips),
        )
}
