use clap::Parser;
use linkdock::config::cli::{AuthCommand, Cli, Commands, LinksCommand};
use linkdock::domain::model::{CollectionRef, NewLink, Tag};
use linkdock::utils::logger;
use linkdock::{ApiClient, LinkdockError, Settings};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbosity() > 0);

    if let Err(e) = run(cli).await {
        tracing::error!("command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), LinkdockError> {
    let mut settings = Settings::load()?;

    match cli.command {
        Commands::Auth(command) => run_auth(command, &mut settings),
        Commands::Links(command) => {
            settings.require_complete()?;
            let client = ApiClient::from_provider(&settings);
            run_links(command, &client).await
        }
    }
}

fn run_auth(command: AuthCommand, settings: &mut Settings) -> Result<(), LinkdockError> {
    match command {
        AuthCommand::SetToken { token } => settings.auth.access_token = token,
        AuthCommand::SetUser { user } => settings.auth.user = user,
        AuthCommand::SetHost { host } => settings.auth.host = host,
    }
    settings.save()?;
    println!("Configuration updated");
    Ok(())
}

async fn run_links(command: LinksCommand, client: &ApiClient) -> Result<(), LinkdockError> {
    match command {
        LinksCommand::ListLinks { verbose } => {
            tracing::info!("Listing all links");
            let links = client.get_links().await?;
            for link in &links {
                println!("\t{}", link.render(verbose));
            }
        }
        LinksCommand::GetLink { id, verbose } => {
            let link = client.get_link(id).await?;
            println!("{}", link.render(verbose));
        }
        LinksCommand::AddLink {
            url,
            name,
            description,
            collection,
            link_type,
            tags,
            verbose,
        } => {
            tracing::info!("Adding link");
            let mut new_link = NewLink::new(name, Some(url), link_type, description)?;
            if let Some(collection_id) = collection {
                new_link = new_link.with_collection(CollectionRef::by_id(collection_id));
            }
            if !tags.is_empty() {
                new_link = new_link.with_tags(resolve_tags(client, &tags).await?);
            }

            let link = client.create_link(&new_link).await?;
            println!("Link added with ID: {}", link.id);
            if verbose > 0 {
                println!("\t{}", link.render(verbose));
            }
        }
    }
    Ok(())
}

/// Resolve tag ids supplied on the command line to the full tags the write
/// model carries. Unknown ids fail before anything is created.
async fn resolve_tags(client: &ApiClient, ids: &[i64]) -> Result<Vec<Tag>, LinkdockError> {
    let known = client.get_tags().await?;
    ids.iter()
        .map(|id| {
            known
                .iter()
                .find(|tag| tag.id == *id)
                .cloned()
                .ok_or_else(|| LinkdockError::ValidationError {
                    field: "tag".to_string(),
                    message: format!("no tag with id {}", id),
                })
        })
        .collect()
}
