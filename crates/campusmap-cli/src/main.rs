use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusmap_lib::{
    CatalogBackend, Category, FilterCriteria, FixedLocationProvider, JsonBackend, LatLng,
    MapSession, RestBackend,
};

#[derive(Parser, Debug)]
#[command(version, about = "Campus map catalog utilities")]
struct Cli {
    /// Read the catalog from a local JSON file instead of a remote backend.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Base URL of the campus data API.
    #[arg(long)]
    base_url: Option<String>,

    /// API key sent with each request to the campus data API.
    #[arg(long)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Restrict to one category (e.g. "Academic"); omit for all.
    #[arg(long)]
    category: Option<String>,

    /// Case-insensitive search over name, description, and building code.
    #[arg(long, default_value = "")]
    query: String,

    /// Show frequently used locations only.
    #[arg(long)]
    frequent_only: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog locations, optionally filtered.
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// List filtered locations with their distance from a position.
    Near {
        /// Latitude of the reference position.
        #[arg(long)]
        lat: f64,

        /// Longitude of the reference position.
        #[arg(long)]
        lon: f64,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Create a custom marker owned by --owner.
    AddMarker {
        /// Owner of the new marker.
        #[arg(long)]
        owner: String,

        /// Marker name.
        #[arg(long)]
        name: String,

        /// Marker description.
        #[arg(long, default_value = "")]
        description: String,

        /// Latitude, as entered in the form.
        #[arg(long)]
        lat: String,

        /// Longitude, as entered in the form.
        #[arg(long)]
        lon: String,

        /// Marker display color.
        #[arg(long, default_value = "#3b82f6")]
        color: String,
    },
    /// Print the category enumeration with its display colors.
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Categories => {
            handle_categories();
            Ok(())
        }
        Command::List { ref filter } => {
            let backend = make_backend(&cli)?;
            let criteria = build_criteria(filter)?;
            handle_list(backend.as_ref(), criteria, None).await
        }
        Command::Near {
            lat,
            lon,
            ref filter,
        } => {
            let backend = make_backend(&cli)?;
            let criteria = build_criteria(filter)?;
            handle_list(backend.as_ref(), criteria, Some(LatLng::new(lat, lon))).await
        }
        Command::AddMarker {
            ref owner,
            ref name,
            ref description,
            ref lat,
            ref lon,
            ref color,
        } => {
            let backend = make_backend(&cli)?;
            handle_add_marker(
                backend.as_ref(),
                owner.clone(),
                name.clone(),
                description.clone(),
                lat.clone(),
                lon.clone(),
                color.clone(),
            )
            .await
        }
    }
}

fn make_backend(cli: &Cli) -> Result<Box<dyn CatalogBackend>> {
    if let Some(path) = cli.catalog.as_deref() {
        return Ok(Box::new(load_json_backend(path)?));
    }
    if let Some(base_url) = cli.base_url.as_deref() {
        let api_key = cli.api_key.clone().unwrap_or_default();
        return Ok(Box::new(RestBackend::new(base_url, api_key)));
    }
    bail!("provide either --catalog <file> or --base-url <url>");
}

fn load_json_backend(path: &Path) -> Result<JsonBackend> {
    JsonBackend::from_file(path)
        .with_context(|| format!("failed to load catalog from {}", path.display()))
}

fn build_criteria(filter: &FilterArgs) -> Result<FilterCriteria> {
    let category = match filter.category.as_deref() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("unrecognized category {raw:?}"))?,
        None => Default::default(),
    };
    Ok(FilterCriteria {
        category,
        query: filter.query.clone(),
        frequent_only: filter.frequent_only,
    })
}

async fn handle_list(
    backend: &dyn CatalogBackend,
    criteria: FilterCriteria,
    position: Option<LatLng>,
) -> Result<()> {
    let mut session = MapSession::new(None);
    session.refresh_catalog(backend).await;
    if let Some(position) = position {
        session
            .locate(&FixedLocationProvider::new(position))
            .await
            .context("location lookup failed")?;
    }
    session.set_criteria(criteria);

    if session.visible().is_empty() {
        println!("No locations found");
        return Ok(());
    }

    for entry in session.visible() {
        let mut line = format!("{}  [{}]", entry.poi.name, entry.poi.category);
        if let Some(code) = entry.poi.building_code.as_deref() {
            line.push_str(&format!("  ({code})"));
        }
        if entry.poi.is_frequently_used {
            line.push_str("  *");
        }
        if let Some(label) = entry.distance_label() {
            line.push_str(&format!("  {label}"));
        }
        println!("{line}");
        if !entry.poi.description.is_empty() {
            println!("    {}", entry.poi.description);
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn handle_add_marker(
    backend: &dyn CatalogBackend,
    owner: String,
    name: String,
    description: String,
    lat: String,
    lon: String,
    color: String,
) -> Result<()> {
    let mut session = MapSession::new(Some(owner.clone()));
    session.marker_flow_mut().open();

    let form = session.marker_flow_mut().form_mut();
    form.name = name;
    form.description = description;
    form.latitude = lat;
    form.longitude = lon;
    form.color = color;

    session
        .create_marker(backend)
        .await
        .context("failed to create marker")?;

    println!(
        "Marker created; {owner} now has {} marker(s)",
        session.markers().len()
    );
    Ok(())
}

fn handle_categories() {
    for category in Category::ALL {
        println!("{}  {}", category.label(), category.color());
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
