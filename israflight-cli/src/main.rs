//! `israflight` - terminal front end for the IsraFlight booking backend.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use israflight_client::app_config::Config;
use israflight_client::ApiClient;
use israflight_core::timestamp::{parse_date, parse_timestamp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "israflight")]
#[command(about = "Search, book and administer IsraFlight flights")]
struct Cli {
    /// Backend base URL, overrides configuration
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check credentials against the backend
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Create a frequent flyer profile and its login
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// Date of birth, YYYY-MM-DD
        #[arg(long, value_parser = date_arg)]
        dob: NaiveDate,
        #[arg(long, default_value = "")]
        passport: String,
    },

    /// List airports
    Airports,

    /// Flight schedule administration
    Flights {
        #[command(subcommand)]
        action: FlightAction,
    },

    /// Find flights between two airports on a date
    Search {
        /// Departure airport id
        #[arg(long)]
        from: Option<i32>,
        /// Destination airport id
        #[arg(long)]
        to: Option<i32>,
        /// Departure date, YYYY-MM-DD
        #[arg(long, value_parser = date_arg)]
        date: NaiveDate,
    },

    /// Tell whether an arrival time falls in the Shabbat window
    CheckArrival {
        #[arg(value_parser = timestamp_arg)]
        arrival: NaiveDateTime,
    },

    /// Book a flight and write the boarding pass
    Book {
        /// Frequent flyer id
        #[arg(long)]
        user: i32,
        #[arg(long)]
        flight: i32,
        #[arg(long)]
        seat: Option<String>,
    },

    /// List a traveler's bookings
    Bookings {
        #[arg(long)]
        user: i32,
    },

    /// Write the boarding pass of an existing booking
    Ticket {
        #[arg(long)]
        booking: i32,
    },

    /// Fleet administration
    Planes {
        #[command(subcommand)]
        action: PlaneAction,
    },

    /// Live arrivals board
    Arrivals {
        /// How far ahead to look, 1 to 5 hours
        #[arg(long, default_value = "3")]
        hours: u32,
    },
}

#[derive(Subcommand)]
enum FlightAction {
    List,
    Create {
        #[arg(long)]
        plane: i32,
        #[arg(long)]
        from: i32,
        #[arg(long)]
        to: i32,
        #[arg(long, value_parser = timestamp_arg)]
        departure: NaiveDateTime,
        #[arg(long, value_parser = timestamp_arg)]
        arrival: NaiveDateTime,
        #[arg(long)]
        price: f64,
    },
    Delete {
        #[arg(long)]
        id: i32,
    },
}

#[derive(Subcommand)]
enum PlaneAction {
    List,
    Add {
        #[arg(long)]
        manufacturer: String,
        #[arg(long, default_value = "")]
        nickname: String,
        /// Kept as text so a bad year gets the form's message
        #[arg(long)]
        year: String,
        #[arg(long)]
        image_url: Option<String>,
    },
    Update {
        #[arg(long)]
        id: i32,
        #[arg(long)]
        manufacturer: String,
        #[arg(long, default_value = "")]
        nickname: String,
        #[arg(long)]
        year: String,
        #[arg(long)]
        image_url: Option<String>,
    },
    Delete {
        #[arg(long)]
        id: i32,
    },
}

fn date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

fn timestamp_arg(value: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(value).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "israflight_cli=info,israflight_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().context("Failed to load config")?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    tracing::debug!("Using backend at {}", config.api.base_url);

    let api = ApiClient::new(&config.api).context("Failed to build API client")?;
    let app = commands::App::new(api, config);

    match cli.command {
        Command::Login { username, password } => commands::login(&app, &username, &password).await,
        Command::Register {
            username,
            password,
            first_name,
            last_name,
            email,
            phone,
            dob,
            passport,
        } => {
            let profile = israflight_core::models::FrequentFlyer {
                id: None,
                username,
                password,
                first_name,
                last_name,
                email,
                phone_number: phone,
                date_of_birth: dob,
                passport_number: passport,
            };
            commands::register(&app, &profile).await
        }
        Command::Airports => commands::airports(&app).await,
        Command::Flights { action } => match action {
            FlightAction::List => commands::list_flights(&app).await,
            FlightAction::Create {
                plane,
                from,
                to,
                departure,
                arrival,
                price,
            } => {
                let flight = israflight_core::models::Flight {
                    id: None,
                    plane_id: plane,
                    departure_airport_id: from,
                    arrival_airport_id: to,
                    departure_time: departure,
                    arrival_time: arrival,
                    price,
                };
                commands::create_flight(&app, &flight).await
            }
            FlightAction::Delete { id } => commands::delete_flight(&app, id).await,
        },
        Command::Search { from, to, date } => commands::search(&app, from, to, date).await,
        Command::CheckArrival { arrival } => {
            commands::check_arrival(&arrival);
            Ok(())
        }
        Command::Book { user, flight, seat } => commands::book(&app, user, flight, seat).await,
        Command::Bookings { user } => commands::bookings(&app, user).await,
        Command::Ticket { booking } => commands::ticket(&app, booking).await,
        Command::Planes { action } => match action {
            PlaneAction::List => commands::list_planes(&app).await,
            PlaneAction::Add {
                manufacturer,
                nickname,
                year,
                image_url,
            } => commands::save_plane(&app, None, manufacturer, nickname, &year, image_url).await,
            PlaneAction::Update {
                id,
                manufacturer,
                nickname,
                year,
                image_url,
            } => commands::save_plane(&app, Some(id), manufacturer, nickname, &year, image_url).await,
            PlaneAction::Delete { id } => commands::delete_plane(&app, id).await,
        },
        Command::Arrivals { hours } => commands::arrivals(&app, hours).await,
    }
}
