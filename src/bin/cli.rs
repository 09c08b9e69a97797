//! Blog List CLI
//!
//! Terminal front end driving the same controller as the browser app:
//! - List blogs, most liked first
//! - Log in and out (the session persists between runs)
//! - Create, like and remove blogs

use anyhow::Context;
use bloglist::config::{generate_default_config, Config, LoggingConfig};
use bloglist::{ApiClient, BlogApp, BlogDraft, FileSessionStore, View};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bloglist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "View, create, like and delete blogs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/bloglist/config.toml or ./bloglist.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List blogs, most liked first
    List,

    /// Log in and remember the session
    Login {
        /// Username
        username: String,
        /// Password
        #[arg(long, env = "BLOGLIST_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Create a blog
    Create {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        author: String,
        #[arg(short, long)]
        url: String,
    },

    /// Like a blog
    Like {
        /// Blog id
        id: String,
    },

    /// Remove a blog
    Remove {
        /// Blog id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging);

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let client = ApiClient::new(config.api.client_config())?;
    let sessions = FileSessionStore::new(config.session.path());
    let app = BlogApp::new(client.clone(), client, sessions);

    match cli.command {
        Commands::Logout => {
            app.restore_session();
            app.logout();
            println!("Logged out");
            return Ok(());
        }
        Commands::Whoami => {
            match app.restore_session() {
                Some(user) => println!("{} ({})", user.name, user.username),
                None => println!("Not logged in"),
            }
            return Ok(());
        }
        _ => {}
    }

    app.bootstrap()
        .await
        .with_context(|| format!("Cannot load blogs from {}", config.api.base_url))?;

    let outcome = match cli.command {
        Commands::List => {
            print_blogs(&app.view());
            Ok(())
        }
        Commands::Login { username, password } => {
            app.set_username(username);
            app.set_password(password);
            app.login().await.map(|user| {
                println!("{} Logged In", user.name);
            })
        }
        Commands::Create { title, author, url } => app
            .add_blog(BlogDraft { title, author, url })
            .await
            .map(|blog| println!("Created {}", blog.id)),
        Commands::Like { id } => app
            .add_like(&id)
            .await
            .map(|blog| println!("{} now has {} likes", blog.title, blog.likes)),
        Commands::Remove { id, yes } => app
            .remove_blog(&id, |prompt| yes || confirm(prompt))
            .await
            .map(|removed| {
                if !removed {
                    println!("Kept");
                }
            }),
        Commands::Logout | Commands::Whoami | Commands::Config { .. } => Ok(()),
    };

    if let Some(message) = app.state().message() {
        println!("{}", message);
    }

    outcome.map_err(Into::into)
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("bloglist={}", config.level)),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Ask on stdin; anything but y/yes declines
fn confirm(prompt: &str) -> bool {
    print!("{}? [y/N] ", prompt);
    if std::io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn print_blogs(view: &View) {
    let blogs = match view {
        View::Blogs(view) => {
            println!("{}", view.logged_in_label());
            println!();
            &view.blogs
        }
        View::Login(_) => {
            println!("Not logged in");
            println!();
            println!("Log in with:");
            println!("  bloglist login <username> --password <password>");
            return;
        }
    };

    if blogs.is_empty() {
        println!("No blogs yet.");
        return;
    }

    println!("{:<26} {:>6}  {:<40} {}", "ID", "Likes", "Title", "Author");
    println!("{}", "-".repeat(90));
    for item in blogs {
        let marker = if item.removable { " *" } else { "" };
        println!(
            "{:<26} {:>6}  {:<40} {}{}",
            item.blog.id, item.blog.likes, item.blog.title, item.blog.author, marker
        );
    }
}
