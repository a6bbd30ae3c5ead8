use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arith-cli")]
#[command(about = "Call the multiply/divide functions over HTTP", long_about = None)]
struct Cli {
    /// Base URL including the route prefix.
    #[arg(short, long, default_value = "http://localhost:7071/api")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute A * B
    Multiply {
        #[arg(allow_hyphen_values = true)]
        a: Option<String>,
        #[arg(allow_hyphen_values = true)]
        b: Option<String>,
    },
    /// Compute A / B, truncated toward zero
    Divide {
        #[arg(allow_hyphen_values = true)]
        a: Option<String>,
        #[arg(allow_hyphen_values = true)]
        b: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let (function, a, b) = match cli.command {
        Commands::Multiply { a, b } => ("multiply", a, b),
        Commands::Divide { a, b } => ("divide", a, b),
    };

    // Omitted operands are left out of the query so the service reports them.
    let mut query = Vec::new();
    if let Some(a) = a {
        query.push(("A", a));
    }
    if let Some(b) = b {
        query.push(("B", b));
    }

    let res = client
        .get(format!("{}/{}", cli.url.trim_end_matches('/'), function))
        .query(&query)
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        eprintln!("Response: {}", body);
        std::process::exit(1);
    }

    println!("{}", body);
    if body.starts_with("ERROR: ") {
        std::process::exit(2);
    }
    Ok(())
}
