use crate::commandline::Commandline;
use crate::error::RoomBookingError;
use clap::Parser;

mod admin;
mod availability;
mod booking;
mod commandline;
mod configuration;
mod context;
mod database;
mod error;
mod room;
mod seed;
mod server;
mod types;
mod utils;

#[tokio::main]
async fn main() -> Result<(), RoomBookingError> {
	let commandline = Commandline::parse();
	commandline.run().await
}
