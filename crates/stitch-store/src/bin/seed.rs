//! # Seed Data Generator
//!
//! Appends demo orders to a data file for development.
//!
//! ## Usage
//! ```bash
//! # 25 orders into ./stitch_dev.json (default)
//! cargo run -p stitch-store --bin seed
//!
//! # Custom amount and file
//! cargo run -p stitch-store --bin seed -- --count 200 --data ./data/orders.json
//!
//! # Start from an empty document (drops existing orders, config, settings)
//! cargo run -p stitch-store --bin seed -- --reset
//! ```
//!
//! Orders go through the ledger, so they are validated and priced with
//! whatever config the file already holds.

use std::env;
use stitch_core::{Document, OrderDraft, Packaging, Size};
use stitch_store::{Store, StoreConfig};

const CUSTOMERS: &[&str] = &[
    "Ana Torres",
    "Luis Ramos",
    "Camila Vega",
    "Diego Flores",
    "Sofia Medina",
    "Mateo Castro",
    "Valeria Rojas",
    "Jorge Salazar",
    "Lucia Paredes",
    "Andres Quispe",
    "Daniela Huaman",
    "Pablo Chavez",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 25;
    let mut data_path = String::from("./stitch_dev.json");
    let mut reset = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(25);
                    i += 1;
                }
            }
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    data_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--reset" => reset = true,
            "--help" | "-h" => {
                println!("Stitch Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>     Number of orders to append (default: 25)");
                println!("  -d, --data <PATH>   Data file path (default: ./stitch_dev.json)");
                println!("      --reset         Replace the file with an empty document first");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Stitch Seed Data Generator");
    println!("=============================");
    println!("Data file: {}", data_path);
    println!("Orders:    {}", count);
    println!();

    let store = Store::open(StoreConfig::new(&data_path)).await?;
    if reset {
        store.save(&Document::default()).await?;
        println!("✓ Reset data file to defaults");
    }
    let existing = store.orders().list().await?.len();
    println!("✓ Opened store ({} existing orders)", existing);

    let start = std::time::Instant::now();
    let ledger = store.orders();
    for n in 0..count {
        let order = ledger.create_draft(demo_order(n)).await?;
        if (n + 1) % 10 == 0 {
            println!("  Created {} orders (last: {} @ {})", n + 1, order.customer, order.price);
        }
    }

    let stats = store.stats().await?;
    println!();
    println!("✓ Created {} orders in {:?}", count, start.elapsed());
    println!("  Total orders:  {}", stats.total_orders);
    println!("  Total revenue: {}", stats.total_revenue);
    println!("  Embroidered:   {}", stats.embroidery_count);
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Deterministic demo order for index `n`.
fn demo_order(n: usize) -> OrderDraft {
    OrderDraft {
        customer: CUSTOMERS[n % CUSTOMERS.len()].to_string(),
        size: Size::ALL[(n * 7) % Size::ALL.len()],
        packaging: Packaging::ALL[(n * 5) % Packaging::ALL.len()],
        embroidery: n % 3 == 0,
    }
}
