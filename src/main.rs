use std::path::PathBuf;

use botline_client::{
    media::InputFile,
    options::{PhotoOptions, TextOptions},
    telegram::DEFAULT_MAX_CONNECTIONS,
    BotClient,
};
use botline_core::config;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "botline", version, about = "botline: Telegram Bot API from the shell")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Bot token; overrides `bot.token` from the config file.
    #[arg(long, env = "BOTLINE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Log every raw API response.
    #[arg(long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the bot's identity.
    Me,
    /// Fetch pending updates and print them as JSON lines.
    Poll {
        /// Keep long polling until interrupted.
        #[arg(long)]
        follow: bool,
    },
    /// Send a text message.
    Send {
        /// Numeric chat id or @channelusername.
        chat: String,
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Upload a local photo.
    Photo {
        chat: String,
        file: PathBuf,
        #[arg(long)]
        caption: Option<String>,
    },
    /// Manage the webhook.
    Webhook {
        #[command(subcommand)]
        action: WebhookAction,
    },
}

#[derive(Subcommand)]
enum WebhookAction {
    /// Register an HTTPS webhook.
    Set {
        url: String,
        #[arg(long)]
        ip_address: Option<String>,
        #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
        max_connections: u32,
    },
    /// Remove the webhook.
    Delete {
        /// Drop updates queued on the server.
        #[arg(long)]
        drop_pending: bool,
    },
    /// Show webhook status.
    Info,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut cfg = config::load(&cli.config)?;
    if let Some(token) = cli.token {
        cfg.bot.token = token;
    }
    if cli.debug {
        cfg.bot.debug = true;
    }
    if cfg.bot.token.is_empty() {
        anyhow::bail!("bot token is empty. Set it in config.toml or BOTLINE_TOKEN env var.");
    }

    let mut bot = BotClient::from_config(&cfg);

    match cli.command {
        Commands::Me => {
            let me = bot.get_me().await?;
            println!("{}", serde_json::to_string_pretty(&me)?);
        }
        Commands::Poll { follow } => loop {
            let updates = bot.poll_next().await?;
            for update in &updates {
                println!("{}", serde_json::to_string(update)?);
            }
            if !follow {
                info!("cursor at {}", bot.last_update_id());
                break;
            }
        },
        Commands::Send { chat, text } => {
            if text.is_empty() {
                anyhow::bail!("no text provided. Usage: botline send <chat> <text>");
            }
            let sent = bot
                .send_message(parse_chat(&chat), &text.join(" "), &TextOptions::default())
                .await?;
            println!("{}", serde_json::to_string(&sent)?);
        }
        Commands::Photo {
            chat,
            file,
            caption,
        } => {
            let options = PhotoOptions {
                caption,
                ..PhotoOptions::default()
            };
            let sent = bot
                .send_photo(parse_chat(&chat), InputFile::path(file), &options)
                .await?;
            println!("{}", serde_json::to_string(&sent)?);
        }
        Commands::Webhook { action } => match action {
            WebhookAction::Set {
                url,
                ip_address,
                max_connections,
            } => {
                let allowed: Vec<&str> = cfg
                    .polling
                    .allowed_updates
                    .iter()
                    .map(String::as_str)
                    .collect();
                bot.set_webhook(&url, ip_address.as_deref(), max_connections, &allowed)
                    .await?;
                println!("webhook set to {url}");
            }
            WebhookAction::Delete { drop_pending } => {
                bot.delete_webhook(drop_pending).await?;
                println!("webhook removed");
            }
            WebhookAction::Info => {
                let status = bot.get_webhook_info().await?;
                println!("{}", serde_json::to_string_pretty(&status)?);
            }
        },
    }

    Ok(())
}

/// Numeric ids stay numeric; anything else is sent as a username.
fn parse_chat(chat: &str) -> botline_client::ChatId {
    chat.parse::<i64>()
        .map(Into::into)
        .unwrap_or_else(|_| chat.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use botline_client::ChatId;

    #[test]
    fn test_parse_chat() {
        assert_eq!(parse_chat("-100123"), ChatId::Integer(-100123));
        assert_eq!(parse_chat("@news"), ChatId::Username("@news".into()));
    }

    #[test]
    fn test_cli_parses_webhook_set() {
        let cli = Cli::try_parse_from([
            "botline",
            "--config",
            "x.toml",
            "webhook",
            "set",
            "https://example.com/hook",
        ])
        .unwrap();
        assert_eq!(cli.config, "x.toml");
        match cli.command {
            Commands::Webhook {
                action: WebhookAction::Set {
                    max_connections, ..
                },
            } => assert_eq!(max_connections, 40),
            _ => panic!("expected webhook set"),
        }
    }
}
