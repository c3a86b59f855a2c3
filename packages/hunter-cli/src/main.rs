// Command-line host for the Hunter email finder tools

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hunter_client::{HunterClient, HunterConfig, ToolRegistry, ToolResponse};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hunter", about = "Find email addresses using Hunter.io")]
struct Cli {
    /// Hunter.io API key (falls back to HUNTER_API_KEY / .env)
    #[arg(long, env = "HUNTER_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find an email from a domain and a person's first and last name
    DomainName {
        domain: String,
        first_name: String,
        last_name: String,
    },
    /// Find an email from a company name and a person's first and last name
    CompanyName {
        company: String,
        first_name: String,
        last_name: String,
    },
    /// Find an email from a domain and a person's full name
    FullName { domain: String, full_name: String },
    /// List email addresses for a domain
    DomainSearch {
        domain: String,
        #[arg(long, default_value_t = hunter_client::DEFAULT_DOMAIN_SEARCH_LIMIT)]
        limit: u32,
    },
    /// Print the tool definitions as JSON
    Tools,
    /// Call a tool by name with JSON arguments
    Call { tool: String, arguments: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,hunter_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = HunterConfig::from_env();
    if let Some(api_key) = cli.api_key {
        config = HunterConfig {
            api_key: api_key.into(),
            ..config
        };
    }
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    tracing::debug!(base_url = %config.base_url, "Configuration loaded");

    let client = HunterClient::new(config);

    let response = match cli.command {
        Command::DomainName {
            domain,
            first_name,
            last_name,
        } => {
            client
                .find_email_by_domain_and_name(&domain, &first_name, &last_name)
                .await
        }
        Command::CompanyName {
            company,
            first_name,
            last_name,
        } => {
            client
                .find_email_by_company_and_name(&company, &first_name, &last_name)
                .await
        }
        Command::FullName { domain, full_name } => {
            client.find_email_by_full_name(&domain, &full_name).await
        }
        Command::DomainSearch { domain, limit } => client.domain_search(&domain, Some(limit)).await,
        Command::Tools => {
            let definitions: Vec<_> = ToolRegistry::new(client)
                .definitions()
                .iter()
                .map(|d| d.to_function_format())
                .collect();
            let json = serde_json::to_string_pretty(&definitions)
                .context("Failed to serialize tool definitions")?;
            println!("{}", json);
            return Ok(());
        }
        Command::Call { tool, arguments } => {
            ToolRegistry::new(client).call(&tool, &arguments).await
        }
    };

    print_response(&response);
    if !response.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_response(response: &ToolResponse) {
    let text = response.as_str();
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}
