use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use israflight_client::app_config::ApiConfig;
use israflight_client::resources::{
    AirportsApi, ArrivalsApi, AuthApi, BookingsApi, FlightsApi, FrequentFlyersApi, PlanesApi,
};
use israflight_client::{ApiClient, ApiError};
use israflight_core::arrivals::{board_rows, StatusTone};
use chrono::NaiveDate;
use israflight_core::models::{FrequentFlyer, Plane};
use israflight_core::ValidationError;
use serde_json::{json, Value};

async fn spawn_backend(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiClient::new(&ApiConfig::with_base_url(format!("http://{}/api", addr))).unwrap()
}

fn flight_json(id: i32) -> Value {
    json!({
        "id": id,
        "planeId": 1,
        "departureAirportId": 1,
        "arrivalAirportId": 2,
        "departureTime": "2024-10-08T08:00:00",
        "arrivalTime": "2024-10-08T12:30:00",
        "price": 199.0
    })
}

#[tokio::test]
async fn test_get_decodes_resources() {
    let router = Router::new()
        .route("/api/flights", get(|| async { Json(json!([flight_json(1), flight_json(2)])) }))
        .route(
            "/api/flights/{id}",
            get(|Path(id): Path<i32>| async move { Json(flight_json(id)) }),
        )
        .route(
            "/api/airports",
            get(|| async {
                Json(json!([{"id": 1, "name": "Ben Gurion", "code": "TLV", "city": "Tel Aviv", "country": "Israel"}]))
            }),
        );
    let api = spawn_backend(router).await;

    let flights = FlightsApi::new(api.clone()).list().await.unwrap();
    assert_eq!(flights.len(), 2);

    let flight = FlightsApi::new(api.clone()).get(9).await.unwrap();
    assert_eq!(flight.id, Some(9));

    let airports = AirportsApi::new(api).list().await.unwrap();
    assert_eq!(airports[0].code, "TLV");
}

#[tokio::test]
async fn test_non_success_keeps_status_and_body() {
    let router = Router::new().route(
        "/api/bookings",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"message": "Flight arrival time is on shabbat", "parasha": "Noach", "shabbatEntry": "17:58", "shabbatExit": "19:03"})),
            )
        }),
    );
    let api = spawn_backend(router).await;

    let err = api
        .post::<_, Value>("/bookings", &json!({"frequentFlyerId": 1, "flightId": 2}))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    let message = err.display_message();
    let lines: Vec<&str> = message.lines().collect();
    assert_eq!(lines[0], "Flight arrival time is on shabbat");
    assert_eq!(lines[1], "Parasha: Noach | Shabbat: 17:58 \u{2192} 19:03");
}

#[tokio::test]
async fn test_plain_text_error_body_is_verbatim() {
    let router = Router::new().route(
        "/api/flights",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
    );
    let api = spawn_backend(router).await;

    let err = FlightsApi::new(api).list().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert_eq!(err.display_message().as_str(), "Internal Server Error");
}

#[tokio::test]
async fn test_unparseable_success_body_is_malformed() {
    let router = Router::new().route("/api/airports", get(|| async { "<html>maintenance</html>" }));
    let api = spawn_backend(router).await;

    let err = AirportsApi::new(api).list().await.unwrap_err();
    match &err {
        ApiError::MalformedResponse { body, .. } => assert_eq!(body, "<html>maintenance</html>"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.display_message().as_str(), "<html>maintenance</html>");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ApiClient::new(&ApiConfig::with_base_url(format!("http://{}/api", addr))).unwrap();
    let err = FlightsApi::new(api).list().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
    assert!(!err.display_message().as_str().is_empty());
}

#[tokio::test]
async fn test_put_and_delete_semantics() {
    let router = Router::new()
        .route(
            "/api/flights/{id}",
            get(|Path(id): Path<i32>| async move { Json(flight_json(id)) })
                .put(|| async { StatusCode::NO_CONTENT })
                .delete(|| async { StatusCode::NO_CONTENT }),
        )
        .route(
            "/api/planes/{id}",
            axum::routing::put(|Path(id): Path<i32>, Json(mut plane): Json<Value>| async move {
                plane["id"] = json!(id);
                Json(plane)
            })
            .delete(|| async { StatusCode::OK }),
        );
    let api = spawn_backend(router).await;

    let flights = FlightsApi::new(api.clone());
    let flight = flights.get(4).await.unwrap();
    flights.update(4, &flight).await.unwrap();
    assert!(flights.delete(4).await.unwrap());

    let planes = PlanesApi::new(api);
    let plane = Plane {
        id: None,
        manufacturer: "Airbus".to_string(),
        nickname: "Negev".to_string(),
        year: 2019,
        image_url: None,
    };
    let updated = planes.update(3, &plane).await.unwrap().expect("echoed plane");
    assert_eq!(updated.id, Some(3));
    // 200 instead of 204 is not reported as a deletion
    assert!(!planes.delete(3).await.unwrap());
}

#[tokio::test]
async fn test_bookings_query_by_user() {
    let router = Router::new().route(
        "/api/bookings",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let user: i32 = params.get("userId").and_then(|v| v.parse().ok()).unwrap_or(0);
            Json(json!([{"id": 10, "frequentFlyerId": user, "flightId": 2, "bookingDate": "2024-10-01T09:15:00"}]))
        }),
    );
    let api = spawn_backend(router).await;

    let bookings = BookingsApi::new(api).list_for_user(12).await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].frequent_flyer_id, 12);
    assert!(bookings[0].booking_date.is_some());
}

#[tokio::test]
async fn test_login_flow() {
    let router = Router::new().route(
        "/api/Auths/login",
        post(|Json(body): Json<Value>| async move {
            if body["Username"] == "admin" && body["Password"] == "secret" {
                (
                    StatusCode::OK,
                    Json(json!({"auth": {"id": 1, "username": "admin", "role": "admin"}})),
                )
            } else {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"error": "Invalid username or password"})),
                )
            }
        }),
    );
    let api = spawn_backend(router).await;
    let auth = AuthApi::new(api);

    let user = auth.login(" admin ", "secret").await.unwrap();
    assert!(user.is_admin());

    let err = auth.login("admin", "wrong").await.unwrap_err();
    assert_eq!(err.status(), Some(401));

    let err = auth.login("", "secret").await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::MissingField("Username"))
    ));
}

#[tokio::test]
async fn test_login_without_auth_object_is_malformed() {
    let router = Router::new().route("/api/Auths/login", post(|| async { Json(json!({"ok": true})) }));
    let api = spawn_backend(router).await;

    let err = AuthApi::new(api).login("dana", "pw").await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse { .. }));
    assert_eq!(
        err.display_message().as_str(),
        "Malformed response: Invalid response from server"
    );
}

#[tokio::test]
async fn test_arrivals_board() {
    let router = Router::new().route(
        "/api/flights/arrivals",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("hoursAhead").map(String::as_str), Some("3"));
            Json(json!({"data": [
                {"flightNumber": "LY008", "airline": "El Al", "origin": "JFK", "scheduledArrival": "2025-03-02T16:45:00", "status": "active"},
                {"FlightNumber": "UA90", "Airline": "United", "Origin": "EWR", "Status": "delayed"}
            ]}))
        }),
    );
    let api = spawn_backend(router).await;
    let arrivals = ArrivalsApi::new(api);

    let rows = board_rows(&arrivals.arrivals(3).await.unwrap());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].scheduled_arrival, "2025-03-02 16:45");
    assert_eq!(rows[0].tone, StatusTone::Active);
    assert_eq!(rows[1].tone, StatusTone::Delayed);

    let err = arrivals.arrivals(8).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::HoursAheadOutOfRange(8))
    ));
}

type Calls = Arc<Mutex<Vec<(&'static str, Value)>>>;

fn registration_backend(calls: Calls, account_status: StatusCode) -> Router {
    Router::new()
        .route(
            "/api/frequentflyers",
            post(|State(calls): State<Calls>, Json(body): Json<Value>| async move {
                calls.lock().unwrap().push(("frequentflyers", body.clone()));
                let mut created = body;
                created["id"] = json!(31);
                (StatusCode::CREATED, Json(created))
            }),
        )
        .route(
            "/api/auths",
            post(move |State(calls): State<Calls>, Json(body): Json<Value>| async move {
                calls.lock().unwrap().push(("auths", body));
                (account_status, Json(json!({"message": "Username already exists"})))
            }),
        )
        .with_state(calls)
}

fn profile() -> FrequentFlyer {
    FrequentFlyer {
        id: None,
        username: "dana".to_string(),
        password: "pw123".to_string(),
        first_name: "Dana".to_string(),
        last_name: "Levi".to_string(),
        email: "dana@example.com".to_string(),
        phone_number: "050-1234567".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 4).unwrap(),
        passport_number: "P1234567".to_string(),
    }
}

#[tokio::test]
async fn test_register_creates_profile_then_account() {
    let calls: Calls = Arc::default();
    let api = spawn_backend(registration_backend(calls.clone(), StatusCode::CREATED)).await;

    let created = FrequentFlyersApi::new(api).register(&profile()).await.unwrap();
    assert_eq!(created.id, Some(31));
    assert_eq!(created.full_name(), "Dana Levi");

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 2);

    let (path, body) = &calls[0];
    assert_eq!(*path, "frequentflyers");
    assert_eq!(body["username"], "dana");
    assert_eq!(body["dateOfBirth"], "1990-05-04");

    let (path, body) = &calls[1];
    assert_eq!(*path, "auths");
    assert_eq!(body["username"], "dana");
    assert_eq!(body["password"], "pw123");
    assert_eq!(body["role"], "frequentFlyer");
}

#[tokio::test]
async fn test_register_keeps_profile_when_account_fails() {
    let calls: Calls = Arc::default();
    let api = spawn_backend(registration_backend(calls.clone(), StatusCode::CONFLICT)).await;

    let err = FrequentFlyersApi::new(api).register(&profile()).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.display_message().as_str(), "Username already exists");

    // The profile went out before the account was refused
    let paths: Vec<&str> = calls.lock().unwrap().iter().map(|(path, _)| *path).collect();
    assert_eq!(paths, vec!["frequentflyers", "auths"]);
}

#[tokio::test]
async fn test_register_validates_before_sending() {
    let calls: Calls = Arc::default();
    let api = spawn_backend(registration_backend(calls.clone(), StatusCode::CREATED)).await;

    let mut incomplete = profile();
    incomplete.email = " ".to_string();
    let err = FrequentFlyersApi::new(api).register(&incomplete).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::MissingField("Email"))
    ));
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_frequent_flyer() {
    let router = Router::new().route(
        "/api/frequentflyers/{id}",
        get(|Path(id): Path<i32>| async move {
            Json(json!({
                "Id": id, "Username": "dana", "FirstName": "Dana", "LastName": "Levi",
                "Email": "dana@example.com", "DateOfBirth": "1990-05-04T00:00:00"
            }))
        }),
    );
    let api = spawn_backend(router).await;
    let flyers = FrequentFlyersApi::new(api);

    let flyer = flyers.get(31).await.unwrap();
    assert_eq!(flyer.id, Some(31));
    assert_eq!(flyer.full_name(), "Dana Levi");
    assert_eq!(flyer.date_of_birth, NaiveDate::from_ymd_opt(1990, 5, 4).unwrap());

    let err = flyers.get(0).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::InvalidId { .. })));
}
