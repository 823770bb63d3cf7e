use clap::{Parser, ValueEnum};
use contact_intake::client::{ContactForm, FormFields, FormStatus};
use contact_intake::utils::logger;

/// Service categories offered in the form UI.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ServiceType {
    Residential,
    Commercial,
    Panel,
    Lighting,
    Repair,
    Ev,
}

impl ServiceType {
    fn wire_value(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Panel => "panel",
            Self::Lighting => "lighting",
            Self::Repair => "repair",
            Self::Ev => "ev",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "submit-contact")]
#[command(about = "Submit a quote request to a running contact-intake server")]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:8080/api/contact")]
    endpoint: String,

    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, value_enum)]
    service_type: Option<ServiceType>,

    #[arg(long)]
    message: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let form = ContactForm::new(args.endpoint.clone());
    form.set_fields(FormFields {
        name: args.name,
        email: args.email,
        phone: args.phone,
        service_type: args
            .service_type
            .map(|s| s.wire_value().to_string())
            .unwrap_or_default(),
        message: args.message,
    });

    tracing::info!("Submitting quote request to {}", args.endpoint);

    match form.submit().await {
        FormStatus::Success => {
            println!("✅ Message sent. Thank you — we will get in touch with you soon.");
            Ok(())
        }
        _ => {
            let detail = form.error_message().unwrap_or_else(|| {
                "Error sending your message. Please try again later.".to_string()
            });
            eprintln!("❌ {}", detail);
            std::process::exit(1);
        }
    }
}
