use clap::Parser;
use embed_link::{
    AccessPayload, P256Signer, build_embed_link, now_millis, sign_payload, validate_base_url,
};

/// Generate a signed, access-restricted embed link.
#[derive(Parser)]
struct Args {
    /// Base64 body of the PKCS#8 EC private key (PEM armor optional)
    private_key: String,
    /// URL the signed query parameters are appended to (http:// or https://, no query string)
    base_url: String,
    #[clap(long = "linkAccessFilter")]
    link_access_filter: Option<String>,
    #[clap(long = "cubeAccessFilter")]
    cube_access_filter: Option<String>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    validate_base_url(&args.base_url)?;

    let payload = AccessPayload::new(
        args.cube_access_filter.as_deref(),
        args.link_access_filter.as_deref(),
        now_millis(),
    );
    let signer = P256Signer::from_pem(&args.private_key)?;
    let (json, signature) = sign_payload(&signer, &payload)?;

    println!("Payload: {json}");
    println!(
        "Restricted Embed Link: {}",
        build_embed_link(&args.base_url, &signature, &payload)
    );
    Ok(())
}
