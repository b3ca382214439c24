use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use israflight_client::app_config::Config;
use israflight_client::resources::{
    AirportsApi, ArrivalsApi, AuthApi, BookingsApi, FlightsApi, FrequentFlyersApi, PlanesApi,
};
use israflight_client::{ApiClient, ApiError, BookingOutcome, BookingService, RestBookingGateway};
use israflight_core::arrivals::board_rows;
use israflight_core::models::{Booking, BookingRequest, Flight, FrequentFlyer, Plane};
use israflight_core::search::{search_flights, FlightSearchCriteria};
use israflight_core::ticket::BoardingPass;
use israflight_core::validation::parse_year;
use israflight_core::eligibility;
use tracing::{info, warn};

use crate::render;

pub struct App {
    api: ApiClient,
    config: Config,
}

impl App {
    pub fn new(api: ApiClient, config: Config) -> Self {
        Self { api, config }
    }

    fn flights(&self) -> FlightsApi {
        FlightsApi::new(self.api.clone())
    }

    fn airports(&self) -> AirportsApi {
        AirportsApi::new(self.api.clone())
    }

    fn planes(&self) -> PlanesApi {
        PlanesApi::new(self.api.clone())
    }

    fn bookings(&self) -> BookingsApi {
        BookingsApi::new(self.api.clone())
    }
}

/// Prints the user-facing text of a failed call. These are not process
/// failures, the command still exits 0.
fn report(context: &str, err: &ApiError) {
    warn!("{}: {}", context, err);
    eprintln!("{}:\n{}", context, err.display_message());
}

pub async fn login(app: &App, username: &str, password: &str) -> Result<()> {
    match AuthApi::new(app.api.clone()).login(username, password).await {
        Ok(user) => println!("Logged in as {} ({}), id {}", user.username, user.role, user.id),
        Err(e) => report("Login failed", &e),
    }
    Ok(())
}

pub async fn register(app: &App, profile: &FrequentFlyer) -> Result<()> {
    match FrequentFlyersApi::new(app.api.clone()).register(profile).await {
        Ok(created) => println!(
            "Registered {} (id {})",
            created.full_name(),
            created.id.map(|id| id.to_string()).unwrap_or_else(|| "pending".to_string())
        ),
        Err(e) => report("Registration failed", &e),
    }
    Ok(())
}

pub async fn airports(app: &App) -> Result<()> {
    match app.airports().list().await {
        Ok(airports) => render::airports(&airports),
        Err(e) => report("Could not load airports", &e),
    }
    Ok(())
}

pub async fn list_flights(app: &App) -> Result<()> {
    match app.flights().list().await {
        Ok(flights) => render::flights(&flights),
        Err(e) => report("Could not load flights", &e),
    }
    Ok(())
}

pub async fn create_flight(app: &App, flight: &Flight) -> Result<()> {
    match app.flights().create(flight).await {
        Ok(_) => println!("Flight scheduled successfully."),
        Err(e) => report("Could not schedule flight", &e),
    }
    Ok(())
}

pub async fn delete_flight(app: &App, flight_id: i32) -> Result<()> {
    match app.flights().delete(flight_id).await {
        Ok(true) => println!("Flight deleted."),
        Ok(false) => println!("Backend did not confirm the deletion."),
        Err(e) => report("Could not delete flight", &e),
    }
    Ok(())
}

pub async fn search(app: &App, from: Option<i32>, to: Option<i32>, date: NaiveDate) -> Result<()> {
    let criteria = FlightSearchCriteria {
        from_airport: from,
        to_airport: to,
        departure_date: date,
    };
    if let Err(e) = criteria.validate() {
        eprintln!("Validation Error: {}", e);
        return Ok(());
    }

    let flights = match app.flights().list().await {
        Ok(flights) => flights,
        Err(e) => {
            report("Could not load flights", &e);
            return Ok(());
        }
    };

    match search_flights(&flights, &criteria) {
        Ok(outcome) => {
            if !outcome.exact_match {
                println!("No flights match your criteria. Showing all available flights.");
            }
            render::flights(&outcome.flights);
        }
        Err(e) => eprintln!("Validation Error: {}", e),
    }
    Ok(())
}

pub fn check_arrival(arrival: &NaiveDateTime) {
    let result = eligibility::evaluate_arrival(arrival);
    if result.is_allowed() {
        println!("{} is open for booking.", arrival.format("%A %Y-%m-%d %H:%M"));
    } else {
        println!("{}", result.display_message());
    }
}

pub async fn book(app: &App, user: i32, flight: i32, seat: Option<String>) -> Result<()> {
    let gateway = RestBookingGateway::new(app.flights(), app.bookings());
    let service = BookingService::new(Arc::new(gateway));

    let mut request = BookingRequest::new(user, flight);
    if let Some(seat) = seat {
        request = request.with_seat(seat);
    }

    let outcome = service.book(request).await;
    match &outcome {
        BookingOutcome::Confirmed { booking, flight } => {
            println!("Booking Successful\n{}", outcome.message());
            let path = write_boarding_pass(app, booking, flight).await?;
            println!("Boarding pass written to {}", path.display());
        }
        BookingOutcome::Rejected { .. } | BookingOutcome::Failed { .. } => {
            eprintln!("Booking Failed\n{}", outcome.message());
        }
    }
    Ok(())
}

pub async fn bookings(app: &App, user: i32) -> Result<()> {
    match app.bookings().list_for_user(user).await {
        Ok(bookings) => render::bookings(&bookings),
        Err(e) => report("Could not load bookings", &e),
    }
    Ok(())
}

pub async fn ticket(app: &App, booking_id: i32) -> Result<()> {
    let booking = match app.bookings().get(booking_id).await {
        Ok(booking) => booking,
        Err(e) => {
            report("Could not load booking", &e);
            return Ok(());
        }
    };
    let flight = match app.flights().get(booking.flight_id).await {
        Ok(flight) => flight,
        Err(e) => {
            report("Flight not found", &e);
            return Ok(());
        }
    };

    let path = write_boarding_pass(app, &booking, &flight).await?;
    println!("Boarding pass written to {}", path.display());
    Ok(())
}

/// Airport and traveler names are best effort, the pass is written without
/// them rather than not at all.
async fn write_boarding_pass(app: &App, booking: &Booking, flight: &Flight) -> Result<PathBuf> {
    let airports = app.airports().list().await.unwrap_or_else(|e| {
        warn!("Airport names unavailable: {}", e);
        Vec::new()
    });
    let traveler_name = FrequentFlyersApi::new(app.api.clone())
        .get(booking.frequent_flyer_id)
        .await
        .map(|flyer| flyer.full_name())
        .map_err(|e| warn!("Traveler name unavailable: {}", e))
        .ok();

    let pass = BoardingPass::new(booking, flight, &airports, traveler_name, Local::now().naive_local());

    let dir = &app.config.tickets.output_dir;
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Could not create {}", dir.display()))?;
    let path = dir.join(pass.file_name());
    tokio::fs::write(&path, pass.render())
        .await
        .with_context(|| format!("Could not write {}", path.display()))?;

    info!(booking_id = ?booking.id, path = %path.display(), "Boarding pass generated");
    Ok(path)
}

pub async fn list_planes(app: &App) -> Result<()> {
    match app.planes().list().await {
        Ok(planes) if planes.is_empty() => eprintln!("No planes found."),
        Ok(planes) => render::planes(&planes),
        Err(e) => report("No planes found or API error", &e),
    }
    Ok(())
}

pub async fn save_plane(
    app: &App,
    plane_id: Option<i32>,
    manufacturer: String,
    nickname: String,
    year: &str,
    image_url: Option<String>,
) -> Result<()> {
    let year = match parse_year(year) {
        Ok(year) => year,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(());
        }
    };
    let plane = Plane {
        id: plane_id,
        manufacturer: manufacturer.trim().to_string(),
        nickname: nickname.trim().to_string(),
        year,
        image_url,
    };

    let planes = app.planes();
    match plane_id {
        None => match planes.create(&plane).await {
            Ok(_) => println!("Plane added successfully!"),
            Err(e) => report("Failed to add plane", &e),
        },
        Some(id) => match planes.update(id, &plane).await {
            Ok(_) => println!("Plane updated successfully!"),
            Err(e) => report("Failed to update plane", &e),
        },
    }
    Ok(())
}

pub async fn delete_plane(app: &App, plane_id: i32) -> Result<()> {
    match app.planes().delete(plane_id).await {
        Ok(true) => println!("Plane deleted successfully."),
        Ok(false) => println!("Backend did not confirm the deletion."),
        Err(e) => report("Failed to delete plane", &e),
    }
    Ok(())
}

pub async fn arrivals(app: &App, hours: u32) -> Result<()> {
    match ArrivalsApi::new(app.api.clone()).arrivals(hours).await {
        Ok(arrivals) => render::arrivals(&board_rows(&arrivals)),
        Err(e) => report("Error", &e),
    }
    Ok(())
}
