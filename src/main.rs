use ::anyhow::Context;
use ::anyhow::Result;
use ::onfido_document_upload::ApiKeyFormatter;
use ::onfido_document_upload::UploadConfig;
use ::onfido_document_upload::UploadError;
use ::onfido_document_upload::UploadResponse;
use ::onfido_document_upload::Uploader;
use ::std::process::ExitCode;
use ::tracing::level_filters::LevelFilter;
use ::tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(response) => {
            println!("{response}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.downcast_ref::<UploadError>() {
                Some(upload_error) => println!("Error {}: {err:#}", upload_error.stage()),
                None => println!("Error: {err:#}"),
            }

            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<UploadResponse> {
    if let Err(err) = dotenv::dotenv() {
        if !err.not_found() {
            return Err(err).context("Failed to load .env file");
        }
    }

    let config = UploadConfig::from_env()?;
    println!("{}", ApiKeyFormatter(config.auth_token()));

    let uploader = Uploader::new(config)?;
    let response = uploader.upload().await?;

    Ok(response)
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(::std::io::stderr)
        .init();
}
