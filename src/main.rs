use clap::{Parser, Subcommand};
use coursematch_api::RestApi;
use coursematch_engine::{RecommenderEngine, DEFAULT_TOP_K};
use coursematch_storage::{SyntheticConfig, SyntheticData};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Content-based training recommender
#[derive(Parser, Debug)]
#[command(name = "coursematch")]
#[command(about = "Recommend courses to trainees and trainees to courses", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the data, fit the model and serve the HTTP API
    Serve {
        /// Path to the data directory
        #[arg(short, long, default_value = "./data")]
        data_dir: PathBuf,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// HTTP API port
        #[arg(long, default_value_t = 8000)]
        http_port: u16,
    },

    /// Write a synthetic data set
    Generate {
        /// Output directory
        #[arg(short, long, default_value = "./data")]
        out: PathBuf,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = 80)]
        courses: usize,

        #[arg(long, default_value_t = 200)]
        trainees: usize,

        #[arg(long, default_value_t = 2000)]
        interactions: usize,
    },

    /// Print recommendations as JSON
    Recommend {
        #[command(subcommand)]
        target: Target,

        /// Path to the data directory
        #[arg(short, long, default_value = "./data", global = true)]
        data_dir: PathBuf,

        /// Number of results
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K, global = true)]
        top_k: usize,
    },
}

#[derive(Subcommand, Debug)]
enum Target {
    /// Courses for a trainee
    Trainee { trainee_id: String },
    /// Trainees for a course
    Course { course_id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Serve {
            data_dir,
            host,
            http_port,
        } => serve(data_dir, host, http_port).await,
        Command::Generate {
            out,
            seed,
            courses,
            trainees,
            interactions,
        } => {
            let config = SyntheticConfig {
                seed,
                courses,
                trainees,
                interactions,
                ..SyntheticConfig::default()
            };
            SyntheticData::generate(&config).write_to(&out)?;
            Ok(())
        }
        Command::Recommend {
            target,
            data_dir,
            top_k,
        } => {
            let engine = RecommenderEngine::load(&data_dir)?;
            let output = match target {
                Target::Trainee { trainee_id } => serde_json::to_string_pretty(
                    &engine.recommend_for_trainee(&trainee_id, top_k)?,
                )?,
                Target::Course { course_id } => serde_json::to_string_pretty(
                    &engine.recommend_for_course(&course_id, top_k)?,
                )?,
            };
            println!("{output}");
            Ok(())
        }
    }
}

async fn serve(data_dir: PathBuf, host: String, http_port: u16) -> anyhow::Result<()> {
    info!("Starting coursematch v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", data_dir);

    // A load failure ends the process before anything is bound
    let engine = Arc::new(RecommenderEngine::load(&data_dir)?);
    info!("Engine initialized");

    let http_handle = spawn_http_server(engine, host, http_port);
    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        joined = tokio::task::spawn_blocking(move || http_handle.join()) => {
            match joined? {
                Ok(served) => served?,
                Err(_) => anyhow::bail!("HTTP server thread panicked"),
            }
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}

/// Run the REST API on its own thread inside an actix system.
///
/// A bind failure comes back through the join handle.
fn spawn_http_server(
    engine: Arc<RecommenderEngine>,
    host: String,
    http_port: u16,
) -> std::thread::JoinHandle<std::io::Result<()>> {
    std::thread::spawn(move || {
        info!("Starting HTTP server on {}:{}", host, http_port);
        let sys = actix_web::rt::System::new();
        let served = sys.block_on(RestApi::start(engine, &host, http_port));
        if let Err(e) = &served {
            tracing::error!("HTTP server error: {}", e);
        }
        served
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursematch_storage::DataSet;

    fn empty_engine() -> Arc<RecommenderEngine> {
        let data = DataSet::from_parts(vec![], vec![], vec![], vec![], vec![]).unwrap();
        Arc::new(RecommenderEngine::new(data))
    }

    #[test]
    fn test_bind_failure_is_returned() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        let handle = spawn_http_server(empty_engine(), "127.0.0.1".to_string(), port);
        let served = handle.join().unwrap();
        assert!(served.is_err());
    }
}
