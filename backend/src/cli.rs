use std::io::Write as _;
use std::path::Path;

use anyhow::{Context as _, bail};
use clap::{Arg, ArgMatches, Command, command};
use dioxus::logger::tracing::{info, trace};
use dotenv::dotenv;
use linkshort_shared::config::{DEFAULT_SITE_URL, SiteConfig};

/// The configuration of the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub site: SiteConfig,
    pub internal_ip: String,
    pub port: u16,
}

/// The configuration can be serialized into an environment-file.
impl ServerConfig {
    #[must_use]
    pub fn to_env_strings(&self) -> Vec<String> {
        vec![
            format!("LINKSHORT_IP=\"{}\"\n", self.internal_ip),
            format!("LINKSHORT_PORT={}\n", self.port),
            concat!(
                "# The site url is part of every short link.\n",
                "# The browser bundle reads it at build time, rebuild after changing it.\n"
            )
            .to_owned(),
            format!("LINKSHORT_SITE_URL=\"{}\"\n", self.site.base_url()),
        ]
    }
}

fn generate_cli() -> Command {
    command!()
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .help("The port the linkshort service will run on")
                .env("LINKSHORT_PORT")
                .value_parser(clap::value_parser!(u16))
                .global(true),
        )
        .arg(
            Arg::new("internal_ip")
                .long("hostip")
                .short('i')
                .help("The host (ip) that will run the linkshort service")
                .env("LINKSHORT_IP")
                .global(true),
        )
        .arg(
            Arg::new("public_url")
                .long("public-url")
                .short('u')
                .help("The origin that will be part of the short urls.")
                .env("LINKSHORT_SITE_URL")
                .default_value(DEFAULT_SITE_URL)
                .global(true),
        )
        .subcommand(
            Command::new("runserver")
                .about("Run the server")
                .display_order(1),
        )
        .subcommand(
            Command::new("generate-env")
                .about("Generate an .env file template using the current settings and exit")
                .display_order(2),
        )
}

/// parse the options to the [`ServerConfig`] struct
fn parse_args_to_config(config: &ArgMatches) -> ServerConfig {
    trace!("Parsing the arguments");
    let public_url = config
        .get_one::<String>("public_url")
        .map_or(DEFAULT_SITE_URL, String::as_str);
    let internal_ip = config
        .get_one::<String>("internal_ip")
        .cloned()
        .or_else(|| dioxus::cli_config::server_ip().map(|ip| ip.to_string()))
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = config
        .get_one::<u16>("port")
        .copied()
        .or_else(dioxus::cli_config::server_port)
        .unwrap_or(8080);
    ServerConfig {
        site: SiteConfig::new(public_url),
        internal_ip,
        port,
    }
}

/// Parse the command line and the environment.
///
/// Returns `Ok(None)` if a subcommand other than `runserver` was executed and the
/// process should exit.
///
/// # Errors
/// Fails if a subcommand could not complete.
pub fn setup() -> anyhow::Result<Option<ServerConfig>> {
    // load the environment .env file if available.
    dotenv().ok();
    info!("Launching linkshort");

    let config = generate_cli().get_matches();
    let server_config = parse_args_to_config(&config);

    if config.subcommand_matches("generate-env").is_some() {
        generate_env_file(Path::new(".env"), &server_config)?;
        return Ok(None);
    }

    info!(
        "Starting the server with the following configuration: {} {}",
        server_config.internal_ip, server_config.port
    );
    Ok(Some(server_config))
}

fn generate_env_file(path: &Path, server_config: &ServerConfig) -> anyhow::Result<()> {
    if path.exists() {
        bail!("ERROR: There already is a {} file - ABORT!", path.display());
    }

    info!("Creating a {} file with the current options", path.display());
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for line in server_config.to_env_strings() {
        file.write_all(line.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    info!("Successfully created the env file!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServerConfig {
        let matches = generate_cli()
            .try_get_matches_from(args)
            .expect("valid arguments");
        parse_args_to_config(&matches)
    }

    #[test]
    fn explicit_arguments_win() {
        let config = parse(&[
            "linkshort",
            "--hostip",
            "0.0.0.0",
            "--port",
            "9000",
            "--public-url",
            "https://sho.rt/",
            "runserver",
        ]);
        assert_eq!(config.internal_ip, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.site.base_url(), "https://sho.rt");
    }

    #[test]
    fn env_template_contains_every_setting() {
        let config = ServerConfig {
            site: SiteConfig::new("https://sho.rt"),
            internal_ip: "127.0.0.1".to_string(),
            port: 8080,
        };
        let content = config.to_env_strings().concat();
        assert!(content.contains("LINKSHORT_IP=\"127.0.0.1\""));
        assert!(content.contains("LINKSHORT_PORT=8080"));
        assert!(content.contains("LINKSHORT_SITE_URL=\"https://sho.rt\""));
    }

    #[test]
    fn existing_env_file_is_not_overwritten() {
        let path = std::env::temp_dir().join(format!("linkshort-env-{}", std::process::id()));
        std::fs::write(&path, "KEEP=1\n").expect("writable temp dir");
        let config = ServerConfig {
            site: SiteConfig::default(),
            internal_ip: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert!(generate_env_file(&path, &config).is_err());
        assert_eq!(std::fs::read_to_string(&path).expect("readable"), "KEEP=1\n");
        std::fs::remove_file(&path).ok();
    }
}
