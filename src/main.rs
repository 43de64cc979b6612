use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use fittrack::{
    analytics::{self, Period},
    auth, meals, profile, ApiClient, ClientConfig,
};

#[derive(Debug, Parser)]
#[command(name = "fittrack", version, about = "Command-line client for the fitness tracker API")]
struct Cli {
    /// Log in with these credentials before running the command.
    #[arg(long, env = "FITTRACK_EMAIL", requires = "password")]
    email: Option<String>,

    #[arg(long, env = "FITTRACK_PASSWORD", hide_env_values = true, requires = "email")]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show whether the session is signed in.
    Verify,
    /// Show the account and its fitness profile.
    Profile,
    /// BMR, TDEE and macro targets derived from the profile.
    Recommendations,
    /// Search the food database.
    Foods {
        query: String,
        #[arg(long = "max", default_value_t = meals::DEFAULT_MAX_RESULTS)]
        max_results: u32,
    },
    /// Meals logged today with totals and remaining targets.
    MealsToday,
    /// Meals grouped by day over a recent period.
    MealHistory {
        #[arg(long, default_value_t = Period::Week)]
        period: Period,
        /// Print the daily calorie chart points instead of the raw history.
        #[arg(long)]
        trend: bool,
    },
    /// Nutrition averages and totals for a period.
    MealStats {
        #[arg(long, default_value_t = Period::Week)]
        period: Period,
    },
    /// Daily nutrition targets.
    Goals,
    /// Step count for today.
    StepsToday,
    /// Daily step history over a recent period.
    Steps {
        #[arg(long, default_value_t = Period::Week)]
        period: Period,
    },
    /// End the session.
    Logout,
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "fittrack=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    // stdout carries command output.
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(api: &ApiClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Verify => print_json(&auth::verify_auth(api).await),
        Command::Profile => print_json(&profile::get_profile(api).await?),
        Command::Recommendations => print_json(&profile::get_recommendations(api).await?),
        Command::Foods { query, max_results } => {
            print_json(&meals::search_foods(api, &query, max_results).await?)
        }
        Command::MealsToday => print_json(&meals::get_today_meals(api).await?),
        Command::MealHistory { period, trend } => {
            let range = analytics::date_range(period);
            let history = meals::get_meal_history(api, &range.start(), &range.end()).await?;
            if trend {
                print_json(&meals::calorie_trend(&history))
            } else {
                print_json(&history)
            }
        }
        Command::MealStats { period } => {
            print_json(&meals::get_meal_stats(api, period.stats_period()).await?)
        }
        Command::Goals => print_json(&meals::get_nutrition_goals(api).await?),
        Command::StepsToday => print_json(&analytics::get_today_steps(api).await?),
        Command::Steps { period } => {
            let range = analytics::date_range(period);
            print_json(&analytics::get_steps_history(api, &range.start(), &range.end()).await?)
        }
        Command::Logout => {
            auth::logout(api).await;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let api = ApiClient::install(&ClientConfig::from_env()?)?;
    tracing::debug!(base_url = api.base_url(), "client ready");

    if let (Some(email), Some(password)) = (cli.email.as_deref(), cli.password.as_deref()) {
        if let Err(e) = auth::login(api, email, password).await {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    }

    match run(api, cli.command).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
