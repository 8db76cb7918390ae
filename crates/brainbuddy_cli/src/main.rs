use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth_flow::{AuthFlowController, SimulatedGateway, SubmitOutcome, VerifyOutcome};
use brainbuddy_core::{AppConfig, AuthMode, Navigator, Route, UserRole};
use chat_directory::ChatListController;
use session_store::{FileStore, SessionRepository};

#[derive(Parser)]
#[command(name = "brainbuddy")]
#[command(about = "Headless driver for the BrainBuddy auth and chat flows")]
#[command(version)]
struct Cli {
    /// Session storage directory (defaults to the configured one)
    #[arg(long, env = "BRAINBUDDY_STORAGE_DIR")]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and verify the OTP
    Login {
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
        #[arg(long)]
        name: String,
        #[arg(long)]
        mobile: String,
        /// OTP code; any value (including none) verifies
        #[arg(long, default_value = "")]
        otp: String,
    },
    /// Register and verify the OTP
    Register {
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
        #[arg(long)]
        name: String,
        #[arg(long)]
        mobile: String,
        #[arg(long)]
        bio: String,
        /// OTP code; any value (including none) verifies
        #[arg(long, default_value = "")]
        otp: String,
    },
    /// Show the chat list for the current session
    Chats {
        /// Filter entries by name, subject or school
        #[arg(long)]
        query: Option<String>,
    },
    /// Clear the session
    Logout,
}

fn parse_role(value: &str) -> Result<UserRole, String> {
    UserRole::parse(value)
        .ok_or_else(|| format!("expected 'student' or 'teacher', got {value:?}"))
}

/// Navigator that prints pushed routes; there is no real router here.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, route: Route) {
        println!("-> {}", route.path());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(true))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::new();
    let storage_dir = cli.storage_dir.unwrap_or_else(|| config.storage_dir.clone());
    tracing::debug!("session storage at {}", storage_dir.display());

    let sessions = SessionRepository::new(FileStore::new(&storage_dir));
    let gateway = SimulatedGateway::new(config.simulated_delay());
    let navigator: Arc<dyn Navigator> = Arc::new(PrintNavigator);

    match cli.command {
        Commands::Login {
            role,
            name,
            mobile,
            otp,
        } => run_auth(role, AuthMode::Login, name, mobile, None, otp, sessions, gateway, navigator).await,
        Commands::Register {
            role,
            name,
            mobile,
            bio,
            otp,
        } => {
            run_auth(
                role,
                AuthMode::Register,
                name,
                mobile,
                Some(bio),
                otp,
                sessions,
                gateway,
                navigator,
            )
            .await
        }
        Commands::Chats { query } => show_chats(query, sessions, navigator).await,
        Commands::Logout => {
            ChatListController::logout(&sessions, navigator.as_ref()).await?;
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_auth(
    role: UserRole,
    mode: AuthMode,
    name: String,
    mobile: String,
    bio: Option<String>,
    otp: String,
    sessions: SessionRepository<FileStore>,
    gateway: SimulatedGateway,
    navigator: Arc<dyn Navigator>,
) -> anyhow::Result<()> {
    let mut flow = AuthFlowController::new(role, sessions, gateway, navigator);
    flow.set_name(name);
    flow.set_mobile(mobile);
    if let Some(bio) = bio {
        flow.set_bio(bio);
    }

    match flow.submit(mode).await? {
        SubmitOutcome::OtpSent => println!("OTP sent to {}", flow.form().mobile),
        SubmitOutcome::MissingFields(fields) => {
            anyhow::bail!("missing required fields: {}", fields.join(", "))
        }
        other => anyhow::bail!("submit did not start: {other:?}"),
    }

    match flow.verify(&otp).await? {
        VerifyOutcome::Authenticated(route) => {
            println!("logged in as {role}; dashboard at {}", route.path());
            Ok(())
        }
        other => anyhow::bail!("verification did not complete: {other:?}"),
    }
}

async fn show_chats(
    query: Option<String>,
    sessions: SessionRepository<FileStore>,
    navigator: Arc<dyn Navigator>,
) -> anyhow::Result<()> {
    let Some(mut list) = ChatListController::load(&sessions, navigator.as_ref()).await? else {
        println!("no session; log in first");
        return Ok(());
    };

    println!(
        "Messages for {} ({})",
        list.profile().name,
        list.user_type()
    );

    if let Some(query) = query {
        list.set_query(query);
    }

    for chat in list.filtered() {
        let descriptor = chat.descriptor().unwrap_or("-");
        let online = if chat.is_online { "online" } else { "offline" };
        println!(
            "  {} [{descriptor}, {online}] unread {} - {}",
            chat.name, chat.unread, chat.last_message
        );
    }
    println!("total unread: {}", list.total_unread());

    Ok(())
}
