//! Print the OpenAPI document as JSON, or YAML with `--yaml`.

use clap::Parser;
use contacts::doc::ApiDoc;
use utoipa::OpenApi;

#[derive(Parser)]
#[command(about = "Print the contacts OpenAPI document")]
struct Args {
    /// Emit YAML instead of JSON.
    #[arg(long)]
    yaml: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let doc = ApiDoc::openapi();
    let rendered = if args.yaml {
        doc.to_yaml()?
    } else {
        doc.to_pretty_json()?
    };
    println!("{rendered}");
    Ok(())
}
