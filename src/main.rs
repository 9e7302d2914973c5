use anyhow::{anyhow, Result};
use aws_config::BehaviorVersion;
use route53_ddns::dns_provider::DynDnsProvider;
use route53_ddns::secret_store::DynSecretStore;
use route53_ddns::{OperatingConfig, Route53Provider, ServerConfig, SsmSecretStore, Updater};
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let mut first_args = std::env::args().take(3);
    let (program_name, first_arg, second_arg) = (
        first_args.next().unwrap_or("route53-ddns".to_string()),
        first_args.next(),
        first_args.next(),
    );

    if first_arg.as_deref() == Some("hash-password") {
        return match second_arg {
            None => Err(anyhow!("usage: {program_name} hash-password <password>")),
            Some(password) => {
                println!("{}", route53_ddns::auth::hash_password(&password));
                Ok(())
            }
        };
    }

    let operating_config = OperatingConfig::from_env()?;
    let server_config = config_init(first_arg)?;
    tracing::info!(
        "updating zone {} for *.{}",
        operating_config.zone_id,
        operating_config.domain_suffix
    );

    let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let secret_store: DynSecretStore = Arc::new(SsmSecretStore::new(&sdk_config));
    let dns_provider: DynDnsProvider = Arc::new(Route53Provider::new(&sdk_config));
    let updater = Arc::new(Updater::new(
        Arc::new(operating_config),
        secret_store,
        dns_provider,
    ));

    tracing::info!("API listening on {}", &server_config.api_bind_addr);
    let api_server = route53_ddns::api::new(&server_config, updater)?;
    let api_handle = tokio::spawn(api_server);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("quitting from signal");
        },
        Ok(api_res) = api_handle => {
            if let Err(err) = api_res {
                return Err(err.into())
            }
        }
    }
    tracing::info!("goodbye");
    Ok(())
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route53_ddns=info,tower_http=info".into()),
        )
        .init();
}

fn config_init(config_file: Option<String>) -> Result<ServerConfig> {
    let config = match config_file {
        None => ServerConfig::default(),
        Some(config_file) => {
            tracing::debug!("loaded config from {config_file}");
            ServerConfig::try_from_file(&config_file)?
        }
    };
    Ok(config.with_env_overrides()?)
}
