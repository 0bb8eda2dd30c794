use clap::Parser;
use rideshare_client::{
    cli::{Cli, Command},
    geo, geocode::Geocoder, models::{NewFeedback, NewRide, NewRideRequest},
    payment, poll, ApiClient, PollOutcome, SessionManager, StatusPoller,
};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rideshare_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let api = ApiClient::new(cli.server_url.clone());
    let mut sessions = SessionManager::new();

    match cli.command {
        Command::Login { email, password } => {
            let user = api.login(&email, &password).await?;
            let session = sessions.begin(&user);
            println!("Logged in as {} (user id {})", session.username, session.user_id);
            if let Some(upi) = &session.upi_id {
                println!("UPI id on file: {}", upi);
            }
        }

        Command::Profile { user_id } => {
            let user = api.get_user(user_id).await?;
            println!("{} <{}>", user.username, user.email);
            println!("phone: {}  gender: {}", user.phonenumber, user.gender);
            match user.upi_id {
                Some(upi) => println!("upi: {}", upi),
                None => println!("upi: (not set)"),
            }
        }

        Command::SetUpi { user_id, upi_id } => {
            api.update_upi(user_id, &upi_id).await?;
            println!("UPI id updated");
        }

        Command::PostRide {
            driver_name,
            vehicle_info,
            origin,
            destination,
            seats,
            date,
            time,
        } => {
            let ride_id = api
                .post_ride(&NewRide {
                    driver_name,
                    vehicle_info,
                    origin,
                    destination,
                    available_seats: seats,
                    ride_date: date,
                    ride_time: time,
                })
                .await?;
            println!("Ride posted with id {}", ride_id);
        }

        Command::Rides => {
            let rides = api.list_rides().await?;
            if rides.is_empty() {
                println!("No rides available");
            }
            for ride in rides {
                println!(
                    "#{} {} -> {} on {} at {} | {} ({} seats)",
                    ride.id,
                    ride.origin,
                    ride.destination,
                    ride.ride_date,
                    ride.ride_time,
                    ride.driver_name,
                    ride.available_seats
                );
            }
        }

        Command::RequestRide {
            rider_name,
            gender,
            pickup,
            destination,
            contact,
            push_token,
        } => {
            let request_id = api
                .create_ride_request(&NewRideRequest {
                    rider_name,
                    gender,
                    pickup_location: pickup,
                    destination_location: destination,
                    contact,
                    push_token,
                })
                .await?;
            println!("Ride request submitted, id {}", request_id);
            println!("Run `rideshare-cli watch {}` to wait for a driver", request_id);
        }

        Command::Requests => {
            let requests = api.list_ride_requests().await?;
            if requests.is_empty() {
                println!("No open ride requests");
            }
            for req in requests {
                println!(
                    "#{} {} ({}) {} -> {} | contact {} | {}",
                    req.id,
                    req.rider_name,
                    req.gender,
                    req.pickup_location,
                    req.destination_location,
                    req.contact,
                    req.status
                );
            }
        }

        Command::Accept {
            request_id,
            driver_name,
        } => {
            let progress_id = api.accept_request(request_id, &driver_name).await?;
            println!("Request {} accepted, trip id {}", request_id, progress_id);
        }

        Command::Status { request_id } => {
            let status = api.request_status(request_id).await?;
            println!("Ride status: {}", status);
        }

        Command::Watch {
            request_id,
            interval_secs,
        } => {
            let (cancel_tx, cancel_rx) = poll::cancel_channel();
            tokio::spawn(async move {
                let _ = tokio::signal::ctrl_c().await;
                let _ = cancel_tx.send(true);
            });

            println!("Waiting for a driver to accept request {}...", request_id);
            let poller = StatusPoller::new(api.clone(), request_id)
                .with_interval(Duration::from_secs(interval_secs));
            match poller.run(cancel_rx).await? {
                PollOutcome::Accepted => println!("Driver has accepted the ride!"),
                PollOutcome::Cancelled => println!("Stopped watching"),
            }
        }

        Command::Reached {
            driver_name,
            progress_id,
        } => {
            api.complete_progress(&driver_name, progress_id).await?;
            println!("Trip {} marked as completed", progress_id);
        }

        Command::Estimate { from, to } => {
            let geocoder = Geocoder::new();
            let origin = geocoder.locate(&from).await?;
            let destination = geocoder.locate(&to).await?;
            let distance = geo::distance_km(origin, destination);
            println!("{} -> {}", from, to);
            println!("distance: {:.2} km", distance);
            println!("eta: {} min", geo::eta_minutes(distance));
            println!("fare: {}", geo::fare_display(distance));
        }

        Command::PayLink {
            upi_id,
            payee_name,
            amount,
        } => {
            println!("{}", payment::upi_pay_link(&upi_id, &payee_name, amount));
        }

        Command::Feedback {
            name,
            email,
            role,
            text,
            rating,
            issue,
        } => {
            api.submit_feedback(&NewFeedback {
                name,
                email,
                role,
                feedback_text: text,
                rating,
                issue,
            })
            .await?;
            println!("Feedback submitted, thank you!");
        }
    }

    Ok(())
}
