// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ClientSure command-line client.
//!
//! User commands sign in first with `--email`/`--password` (or
//! `CLIENTSURE_EMAIL`/`CLIENTSURE_PASSWORD`); the session cookie lives for
//! one invocation. Admin commands use the token stored by `admin-login`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clientsure_client::{
    config::Config,
    controllers::{ChannelNotifier, Notice, NoticeLevel, Notifier, Poller},
    models::{AdminLoginRequest, LoginRequest, PostQuery},
    state::{duplicate_ids, UserStats},
    time_utils::time_ago,
    ClientSure,
};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "clientsure", about = "ClientSure platform client")]
struct Cli {
    #[arg(long, env = "CLIENTSURE_EMAIL", global = true)]
    email: Option<String>,
    #[arg(long, env = "CLIENTSURE_PASSWORD", hide_env_values = true, global = true)]
    password: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check user credentials
    Login,
    /// Sign in to the admin console and store the token
    AdminLogin {
        username: String,
        #[arg(long, env = "CLIENTSURE_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored admin token
    AdminLogout,
    /// Token balance and subscription
    Profile,
    /// List leads
    Leads {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Only leads already unlocked
        #[arg(long)]
        accessed: bool,
    },
    /// Unlock one lead, or several in one bulk request
    Unlock {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Show the community feed
    Feed {
        #[arg(long)]
        trending: bool,
        #[arg(long)]
        search: Option<String>,
    },
    Like {
        post_id: String,
    },
    Unlike {
        post_id: String,
    },
    /// Keep the community feed refreshed until Ctrl-C
    Watch,
    /// Admin: keep the moderation list refreshed until Ctrl-C
    AdminWatch,
    /// Admin: users with totals
    AdminUsers,
    /// Admin: leads sharing an email address
    AdminDuplicates {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(api_url = %config.api_url, "Configuration loaded");

    let client = ClientSure::new(config).context("Failed to build client")?;
    let (notifier, mut notices) = ChannelNotifier::new();
    let notifier: Arc<dyn Notifier> = Arc::new(notifier);

    let outcome = run(&cli, &client, notifier, &mut notices).await;
    print_notices(&mut notices);
    outcome
}

async fn run(
    cli: &Cli,
    client: &ClientSure,
    notifier: Arc<dyn Notifier>,
    notices: &mut UnboundedReceiver<Notice>,
) -> Result<()> {
    match &cli.command {
        Command::Login => {
            let response = user_login(cli, client).await?;
            println!("{}", response);
        }
        Command::AdminLogin { username, password } => {
            let request = AdminLoginRequest {
                username: username.clone(),
                password: password.clone(),
            };
            let response = client
                .auth
                .admin_login(&request)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("Invalid credentials")))?;
            match response.token {
                Some(_) => println!("Admin login successful"),
                None => anyhow::bail!(response.message.unwrap_or_else(|| "Invalid credentials".into())),
            }
        }
        Command::AdminLogout => {
            client.auth.logout_admin();
            println!("Admin token removed");
        }
        Command::Profile => {
            user_login(cli, client).await?;
            let tokens = client.dashboard_controller(notifier).tokens().await?;
            println!(
                "Tokens today: {}/{} ({:.1}% used)",
                tokens.available,
                tokens.daily_limit,
                tokens.daily_usage_percent()
            );
            println!(
                "This month:   {} of {} remaining",
                tokens.monthly_remaining, tokens.monthly_total
            );
            println!(
                "Subscription: {}{}",
                if tokens.subscription_active { "active" } else { "inactive" },
                tokens.plan_name.map(|p| format!(" ({})", p)).unwrap_or_default()
            );
        }
        Command::Leads { page, accessed } => {
            user_login(cli, client).await?;
            let leads = if *accessed {
                client.leads.list_accessed(*page, client.config.leads_page_size).await?
            } else {
                client.leads.list(*page, client.config.leads_page_size).await?
            };
            for lead in &leads.leads {
                let marker = if lead.is_accessed_by_user { "open" } else { "locked" };
                println!(
                    "{:<26} {:<7} {:<30} {}",
                    lead.id,
                    marker,
                    lead.name,
                    lead.city.as_deref().unwrap_or("-")
                );
            }
            println!("Page {} of {}", page, leads.pagination.total_pages);
        }
        Command::Unlock { ids } => {
            user_login(cli, client).await?;
            let leads = client.leads_controller(notifier);
            if let [id] = ids.as_slice() {
                leads.access_one(id).await?;
            } else {
                leads.select_many(ids).await;
                if leads.bulk_access().await?.is_none() {
                    println!("No leads selected");
                }
            }
        }
        Command::Feed { trending, search } => {
            user_login(cli, client).await?;
            let community = client.community_controller(notifier);
            community
                .set_query(PostQuery {
                    trending: *trending,
                    search: search.clone().unwrap_or_default(),
                    ..Default::default()
                })
                .await;
            community.open().await?;

            let feed = community.feed().await;
            let now = chrono::Utc::now();
            for post in feed.posts() {
                let mine = if feed.is_liked_by_me(&post.id) { "*" } else { " " };
                println!(
                    "{} {:<26} {:>3} likes {:>3} comments  {} ({}, {})",
                    mine,
                    post.id,
                    post.like_count(),
                    post.comments.len(),
                    post.post_title,
                    post.user_id.name,
                    time_ago(&post.created_at, now)
                );
            }
        }
        Command::Like { post_id } | Command::Unlike { post_id } => {
            user_login(cli, client).await?;
            let community = client.community_controller(notifier);
            community.open().await?;
            if matches!(cli.command, Command::Like { .. }) {
                community.like(post_id).await?;
            } else {
                community.unlike(post_id).await?;
            }
            community.settle().await;
            if let Some(post) = community.feed().await.post(post_id) {
                println!("{}: {} likes", post.post_title, post.like_count());
            }
        }
        Command::Watch => {
            user_login(cli, client).await?;
            let community = client.community_controller(notifier);
            community.open().await?;
            print_notices(notices);

            let poller_handle = community.clone();
            let mut poller = Poller::spawn(client.config.community_poll, move || {
                let community = poller_handle.clone();
                async move {
                    if community.refresh(true).await.is_ok() {
                        let feed = community.feed().await;
                        println!("Feed refreshed: {} posts", feed.posts().len());
                    }
                }
            });

            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    Some(notice) = notices.recv() => print_notice(&notice),
                }
            }
            poller.stop();
        }
        Command::AdminWatch => {
            let admin = client.admin_controller(notifier);
            let posts = admin.community_posts().await;
            println!("Community posts: {}", posts.len());
            print_notices(notices);

            let mut poller = Poller::spawn(client.config.admin_poll, move || {
                let admin = admin.clone();
                async move {
                    let posts = admin.community_posts().await;
                    println!("Moderation list refreshed: {} posts", posts.len());
                }
            });

            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    Some(notice) = notices.recv() => print_notice(&notice),
                }
            }
            poller.stop();
        }
        Command::AdminUsers => {
            let admin = client.admin_controller(notifier);
            let users = admin.users().await;
            for user in &users {
                let plan = user
                    .subscription
                    .as_ref()
                    .and_then(|s| s.plan_id.as_ref())
                    .map(|p| p.name.as_str())
                    .unwrap_or("-");
                println!("{:<26} {:<24} {:<32} {}", user.id, user.name, user.email, plan);
            }
            let stats = UserStats::from_users(&users, chrono::Utc::now());
            println!(
                "Total {} | active {} | inactive {} | new this month {}",
                stats.total, stats.active, stats.inactive, stats.new_this_month
            );
        }
        Command::AdminDuplicates { page } => {
            let admin = client.admin_controller(notifier);
            let leads = admin.leads(*page).await;
            let duplicates = duplicate_ids(&leads.leads);
            for lead in leads.leads.iter().filter(|l| duplicates.contains(&l.id)) {
                println!("{:<26} {:<32} {}", lead.id, lead.email, lead.name);
            }
            println!("Duplicates ({})", duplicates.len());
        }
    }

    Ok(())
}

/// Sign in with the global credentials; returns the server message.
async fn user_login(cli: &Cli, client: &ClientSure) -> Result<String> {
    let (Some(email), Some(password)) = (&cli.email, &cli.password) else {
        anyhow::bail!("--email and --password (or CLIENTSURE_EMAIL/CLIENTSURE_PASSWORD) are required");
    };

    let request = LoginRequest {
        email: email.clone(),
        password: password.clone(),
    };
    let response = client
        .auth
        .login(&request)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Login failed")))?;
    Ok(response.message_or("Login successful"))
}

fn print_notices(notices: &mut UnboundedReceiver<Notice>) {
    while let Ok(notice) = notices.try_recv() {
        print_notice(&notice);
    }
}

fn print_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Error | NoticeLevel::Warning => eprintln!("! {}", notice.message),
        NoticeLevel::Success | NoticeLevel::Info => println!("> {}", notice.message),
    }
}

/// Initialize logging: JSON lines when `LOG_FORMAT=json`, human-readable
/// otherwise. Logs go to stderr so command output stays clean.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("clientsure_client=info,warn"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
