//! CLI command implementations

use anyhow::{bail, Result};
use dialoguer::Password;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::{
    error, info, print_participant_table, print_profile, print_requirement_detail,
    print_requirement_table, print_version_table, success, warn, OutputFormat,
};
use crate::client::ApiClient;
use crate::config::{self, Config};
use crate::router::{Router, DASHBOARD, LOGIN};
use crate::session::{FileTokenStorage, SessionStore};

/// Everything a command needs: config, shared session, router and client
struct App {
    session: SessionStore,
    router: Arc<Router>,
    client: ApiClient,
}

fn app() -> Result<App> {
    let config: Config = config::load_config()?;
    let storage = Arc::new(FileTokenStorage::new(&config.session.token_file));
    let session = SessionStore::new(storage)?;
    let router = Arc::new(Router::new(session.clone()));
    let client = ApiClient::new(&config.api, session.clone(), router.clone())?;

    Ok(App {
        session,
        router,
        client,
    })
}

/// Navigate to the command's route; commands on protected routes abort
/// here when the guard bounces an unauthenticated session to login
fn enter_route(app: &App, path: &str) -> Result<()> {
    let landed = app.router.navigate(path)?;
    if landed.path == LOGIN && path != LOGIN {
        bail!("Not logged in. Run 'reqdoc login --email <email>' first");
    }
    Ok(())
}

fn generation_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .expect("Invalid spinner template - this is a bug in the codebase"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Initialize a new reqdoc.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new("reqdoc.toml");

    if config_path.exists() {
        warn("reqdoc.toml already exists");
        return Ok(());
    }

    fs::write(config_path, config::default_config_content())?;

    success("Created reqdoc.toml");
    info("Edit the configuration file and run 'reqdoc login --email <email>' to get started");

    Ok(())
}

/// Log in and persist the session token
pub async fn login(email: &str) -> Result<()> {
    let app = app()?;
    enter_route(&app, LOGIN)?;

    if app.session.is_authenticated() {
        // The guard bounced us to the dashboard; mirror that in the CLI
        warn("Already logged in. Run 'reqdoc logout' to switch accounts");
        return Ok(());
    }

    let password = Password::new().with_prompt("Password").interact()?;

    match app.client.login(email, &password).await {
        Ok(response) => {
            app.session.set_token(Some(response.access_token))?;
            let username = response.user.username.clone();
            app.session.set_user(Some(response.user));
            app.router.navigate(DASHBOARD)?;
            success(&format!("Logged in as {}", username));
            Ok(())
        }
        Err(e) => {
            error(&format!("Login failed: {}", e));
            Err(e.into())
        }
    }
}

/// Create a new account
pub async fn register(username: &str, email: &str) -> Result<()> {
    let app = app()?;
    enter_route(&app, "/register")?;

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let message = app.client.register(username, email, &password).await?;
    success(&message);
    info("Log in with 'reqdoc login --email <email>'");
    Ok(())
}

/// Clear the stored session
pub async fn logout() -> Result<()> {
    let app = app()?;

    if !app.session.is_authenticated() {
        info("Not logged in");
        return Ok(());
    }

    app.session.logout()?;
    app.router.force(LOGIN)?;
    success("Logged out");
    Ok(())
}

/// Show the currently logged-in user
pub async fn whoami() -> Result<()> {
    let app = app()?;
    enter_route(&app, DASHBOARD)?;

    let user = app.client.profile().await?;
    app.session.set_user(Some(user.clone()));
    print_profile(&user);
    Ok(())
}

/// List requirements the user participates in
pub async fn list(format: OutputFormat) -> Result<()> {
    let app = app()?;
    enter_route(&app, DASHBOARD)?;

    let requirements = app.client.list_requirements().await?;

    match format {
        OutputFormat::Table => print_requirement_table(&requirements),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&requirements)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&requirements)?),
    }

    Ok(())
}

/// Show a single requirement
pub async fn show(id: &str) -> Result<()> {
    let app = app()?;
    enter_route(&app, &format!("/requirement/{id}"))?;

    let requirement = app.client.get_requirement(id).await?;
    print_requirement_detail(&requirement);
    Ok(())
}

/// Create a new requirement
pub async fn create(title: &str, description: Option<&str>) -> Result<()> {
    let app = app()?;
    enter_route(&app, DASHBOARD)?;

    let requirement = app.client.create_requirement(title, description).await?;
    success(&format!("Created requirement {}", requirement.id));
    Ok(())
}

/// Invite users to a requirement by email
pub async fn invite(id: &str, emails: &[String]) -> Result<()> {
    let app = app()?;
    enter_route(&app, &format!("/requirement/{id}"))?;

    // Resolve emails to user ids first; fail before inviting anyone
    let mut user_ids = Vec::with_capacity(emails.len());
    for email in emails {
        match app.client.user_by_email(email).await {
            Ok(user) => user_ids.push(user.id),
            Err(e) => {
                error(&format!("Could not resolve {}: {}", email, e));
                return Err(e.into());
            }
        }
    }

    let result = app.client.invite_members(id, &user_ids).await?;
    success(&result.message);
    for user in &result.invited_users {
        info(&format!("Invited {} <{}>", user.username, user.email));
    }
    Ok(())
}

/// List the participants of a requirement
pub async fn participants(id: &str) -> Result<()> {
    let app = app()?;
    enter_route(&app, &format!("/requirement/{id}"))?;

    let participants = app.client.get_participants(id).await?;
    print_participant_table(&participants);
    Ok(())
}

/// Generate a new document version
pub async fn generate(id: &str) -> Result<()> {
    let app = app()?;
    enter_route(&app, &format!("/requirement/{id}"))?;

    let spinner = generation_spinner("Generating document (this can take a while)...");
    let result = app.client.generate_document(id).await;
    spinner.finish_and_clear();

    match result {
        Ok(generated) => {
            success(&format!(
                "Generated document version {} ({} chars)",
                generated.version,
                generated.document.chars().count()
            ));
            Ok(())
        }
        Err(e) => {
            error(&format!("Generation failed: {}", e));
            Err(e.into())
        }
    }
}

/// Export the latest document as PDF
pub async fn export(id: &str, output: Option<std::path::PathBuf>) -> Result<()> {
    let app = app()?;
    enter_route(&app, &format!("/requirement/{id}"))?;

    let path = output.unwrap_or_else(|| std::path::PathBuf::from(format!("{id}.pdf")));
    let bytes = app.client.export_pdf(id).await?;
    fs::write(&path, &bytes)?;

    success(&format!(
        "Exported {} bytes to {}",
        bytes.len(),
        path.display()
    ));
    Ok(())
}

/// List generated document versions
pub async fn versions(id: &str) -> Result<()> {
    let app = app()?;
    enter_route(&app, &format!("/requirement/{id}"))?;

    let versions = app.client.list_document_versions(id).await?;
    print_version_table(&versions);
    Ok(())
}

/// Print a specific document version
pub async fn doc(id: &str, version: u32) -> Result<()> {
    let app = app()?;
    enter_route(&app, &format!("/requirement/{id}"))?;

    let document = app.client.get_document_version(id, version).await?;
    println!("{}", document.content);
    Ok(())
}
