use crate::configuration::Configuration;
use crate::context::ApplicationContext;
use crate::error::RoomBookingError;
use crate::seed::seed_database;
use crate::server::run_server;
use crate::utils::time_source::TimeSource;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
pub struct Commandline {
	#[clap(short = 'c', long = "config-file", default_value = "configuration.toml")]
	pub configuration_file_path: String,
	#[clap(subcommand)]
	pub command: Option<BaseCommand>,
}

#[derive(clap::Parser, Default)]
pub enum BaseCommand {
	/// Run the room booking server
	#[default]
	Run,
	/// Print the configuration
	Configuration,
}

impl Commandline {
	pub async fn run(self) -> Result<(), RoomBookingError> {
		let configuration = Configuration::from_file(&self.configuration_file_path)?;

		let base_command = self.command.unwrap_or_default();
		match base_command {
			BaseCommand::Run => {
				tracing_subscriber::fmt()
					.with_env_filter(EnvFilter::new(&configuration.log_filters))
					.init();

				let application_context = ApplicationContext::new(configuration, TimeSource::default()).await?;
				seed_database(&application_context).await?;

				info!(
					"Starting server. REST API available at 'http://{}/api'.",
					application_context.configuration.address
				);
				run_server(application_context).await?;
			}
			BaseCommand::Configuration => println!("{configuration:?}"),
		}
		Ok(())
	}
}
