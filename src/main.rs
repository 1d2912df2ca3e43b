use clap::{Args, Parser, Subcommand};
use log::error;
use routers_campus::{
    Catalog, GraphBuilder, LocationId, NeighborStrategy, RouteConfig, RouteService, StaticCatalog,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "routers-campus",
    version,
    about = "Walking routes across a campus map"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every known location
    Locations {
        #[command(flatten)]
        source: Source,
    },
    /// Find the shortest walking route between two locations
    Route {
        /// Id of the starting location
        from: u32,
        /// Id of the destination
        to: u32,
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Print the K-nearest-neighbour graph
    Graph {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        graph: GraphArgs,
    },
}

#[derive(Args, Debug)]
struct Source {
    /// JSON file of locations, defaults to the built-in campus
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GraphArgs {
    /// Outgoing edges per location (K)
    #[arg(short, long)]
    neighbors: Option<usize>,
    /// Neighbour selection strategy
    #[arg(short, long)]
    strategy: Option<NeighborStrategy>,
}

impl Source {
    fn load(&self) -> routers_campus::Result<StaticCatalog> {
        match &self.catalog {
            Some(path) => Ok(StaticCatalog::from_path(path)?),
            None => Ok(StaticCatalog::campus()),
        }
    }
}

impl GraphArgs {
    fn config(&self) -> routers_campus::Result<RouteConfig> {
        let mut config = RouteConfig::read_env()?;

        if let Some(neighbors) = self.neighbors {
            config = config.with_neighbors(neighbors);
        }

        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }

        Ok(config.validate()?)
    }
}

fn run(command: Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = match command {
        Command::Locations { source } => {
            let catalog = source.load()?;
            serde_json::to_string_pretty(catalog.locations())?
        }
        Command::Route {
            from,
            to,
            source,
            graph,
        } => {
            let service = RouteService::new(source.load()?, graph.config()?);
            let route = service.get_route(LocationId(from), LocationId(to));
            serde_json::to_string_pretty(&route)?
        }
        Command::Graph { source, graph } => {
            let catalog = source.load()?;
            let builder = GraphBuilder::from_config(&graph.config()?);
            serde_json::to_string_pretty(&builder.build(catalog.locations()).adjacency())?
        }
    };

    Ok(output)
}

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    routers_campus::util::trace::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    env_logger::init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
