//! CLI tool for payment card validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a card number, optionally with CVC, expiry and a brand allow-list
//! cardcheck validate 4111111111111111 --cvc 123 --expiry 12/30 --allow visa
//!
//! # Detect the brand
//! cardcheck detect 378282246310005
//!
//! # Mask or format for display
//! cardcheck mask 4111111111111111 --visible 4
//! cardcheck format 378282246310005 --by-brand
//!
//! # Generate test card numbers
//! cardcheck generate --brand mastercard --count 5
//! ```
//!
//! Exit status is 0 when the input is valid, 1 when it is not, and 2 on
//! usage errors.

use std::process::ExitCode;

use cardcheck::format::{format_for_brand_with_separator, format_with_separator};
use cardcheck::generate::generate_cards;
use cardcheck::{
    detect_brand, expiry, is_luhn_valid, mask, sanitize, validate_card, validate_cvc, BrandId,
    BrandTable, ValidateOptions, ValidationResult,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Payment card validation tool")]
struct Cli {
    /// Log validator decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a card number
    Validate {
        /// Card number to validate (spaces and dashes allowed)
        card_number: String,

        /// Security code to check against the detected brand
        #[arg(long)]
        cvc: Option<String>,

        /// Expiry date (MM/YY, MM/YYYY, MMYY)
        #[arg(long)]
        expiry: Option<String>,

        /// Accepted brand id; repeat to allow several
        #[arg(long = "allow")]
        allow: Vec<BrandId>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Detect card brand from number
    Detect {
        /// Card number (or partial number)
        card_number: String,
    },

    /// Check if a card passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Format a card number
    Format {
        /// Card number to format
        card_number: String,

        /// Separator to use
        #[arg(short, long, default_value = " ")]
        separator: String,

        /// Group at the detected brand's gaps instead of every four digits
        #[arg(long)]
        by_brand: bool,
    },

    /// Mask a card number for display
    Mask {
        /// Card number to mask
        card_number: String,

        /// Trailing digits to leave visible
        #[arg(long, default_value = "4")]
        visible: usize,
    },

    /// Validate a security code
    Cvc {
        /// Code to validate
        code: String,

        /// Card brand (affects valid length)
        #[arg(short, long)]
        brand: Option<BrandId>,
    },

    /// Validate an expiry date
    Expiry {
        /// Expiry date (MM/YY, MM/YYYY, etc.)
        date: String,
    },

    /// Generate test card numbers (for testing only)
    Generate {
        /// Card brand to generate
        #[arg(short, long, default_value = "visa")]
        brand: BrandId,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// List known brands
    Brands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate {
            card_number,
            cvc,
            expiry,
            allow,
            output,
        } => cmd_validate(&card_number, cvc, expiry.as_deref(), allow, output),
        Commands::Detect { card_number } => cmd_detect(&card_number),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Format {
            card_number,
            separator,
            by_brand,
        } => cmd_format(&card_number, &separator, by_brand),
        Commands::Mask {
            card_number,
            visible,
        } => cmd_mask(&card_number, visible),
        Commands::Cvc { code, brand } => cmd_cvc(&code, brand),
        Commands::Expiry { date } => cmd_expiry(&date),
        Commands::Generate { brand, count } => cmd_generate(brand, count),
        Commands::Brands => cmd_brands(),
    }
}

fn verdict(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_validate(
    card_number: &str,
    cvc: Option<String>,
    expiry_input: Option<&str>,
    allow: Vec<BrandId>,
    output: OutputFormat,
) -> ExitCode {
    let mut options = ValidateOptions {
        cvc,
        ..ValidateOptions::default()
    };

    if let Some(input) = expiry_input {
        match expiry::parse_expiry(input) {
            Ok(date) => options = options.expiry(&date),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        }
    }

    if !allow.is_empty() {
        options = options.allowed_brands(allow);
    }

    let result = validate_card(card_number, &options);

    match output {
        OutputFormat::Text => print_result(&result),
        OutputFormat::Json => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    verdict(result.is_valid())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn print_result(result: &ValidationResult) {
    println!("Valid: {}", yes_no(result.is_valid()));
    println!("Brand: {}", result.card_brand());
    println!("Luhn: {}", yes_no(result.number_valid()));
    println!("Length: {}", yes_no(result.length_valid()));
    if let Some(valid) = result.cvc_valid() {
        println!("CVC: {}", yes_no(valid));
    }
    if let Some(valid) = result.expiry_valid() {
        println!("Expiry: {}", yes_no(valid));
    }
    if let Some(masked) = result.display_number() {
        println!("Masked: {}", masked);
    }
    if let Some(reason) = result.reason() {
        println!("Reason: {}", reason);
    }
}

fn cmd_detect(card_number: &str) -> ExitCode {
    let digits = sanitize(card_number);
    if digits.is_empty() {
        eprintln!("Error: No digits provided");
        return ExitCode::from(2);
    }

    match detect_brand(&digits).definition() {
        Some(brand) => {
            println!("Detected Brand: {} ({})", brand.display_name, brand.id);
            println!("Valid Lengths: {:?}", brand.lengths);
            println!("Security Code: {} ({} digits)", brand.code.label, brand.code.size);
            ExitCode::SUCCESS
        }
        None => {
            println!("Detected Brand: unknown");
            ExitCode::FAILURE
        }
    }
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    let digits = sanitize(card_number);
    let pass = !digits.is_empty() && is_luhn_valid(&digits);
    println!("Luhn check: {}", if pass { "PASS" } else { "FAIL" });
    verdict(pass)
}

fn cmd_format(card_number: &str, separator: &str, by_brand: bool) -> ExitCode {
    let digits = sanitize(card_number);
    let formatted = match detect_brand(&digits).definition() {
        Some(brand) if by_brand => format_for_brand_with_separator(&digits, brand, separator),
        _ => format_with_separator(&digits, separator),
    };
    println!("{}", formatted);
    ExitCode::SUCCESS
}

fn cmd_mask(card_number: &str, visible: usize) -> ExitCode {
    match mask(card_number, visible) {
        Ok(masked) => {
            println!("{}", masked);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_cvc(code: &str, brand: Option<BrandId>) -> ExitCode {
    let definition = brand.and_then(|id| BrandTable::builtin().get(id));

    match validate_cvc(code, definition) {
        Ok(length) => {
            println!("Valid: yes");
            println!("Length: {} digits", length);
            if let Some(def) = definition {
                println!("Label: {}", def.code.label);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_expiry(date: &str) -> ExitCode {
    match expiry::validate_expiry(date) {
        Ok(exp) => {
            println!("Valid: yes");
            println!("Month: {:02}", exp.month());
            println!("Year: {}", exp.year());
            println!("Formatted: {}", exp.format_short());
            println!("Months Until Expiry: {}", exp.months_until_expiry());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_generate(brand: BrandId, count: usize) -> ExitCode {
    let cards = generate_cards(brand, count);
    if cards.is_empty() && count > 0 {
        eprintln!("Error: {} has no patterns to generate from", brand);
        return ExitCode::FAILURE;
    }

    for card in cards {
        println!("{}", card);
    }
    ExitCode::SUCCESS
}

fn cmd_brands() -> ExitCode {
    for brand in BrandTable::builtin().iter() {
        let patterns: Vec<String> = brand.patterns.iter().map(ToString::to_string).collect();
        let patterns = if patterns.is_empty() {
            "-".to_string()
        } else {
            patterns.join(", ")
        };
        println!(
            "{:<18} {:<18} {:<4} {}  [{}]",
            brand.id.as_str(),
            brand.display_name,
            brand.code.label.as_str(),
            brand.code.size,
            patterns
        );
    }
    ExitCode::SUCCESS
}
