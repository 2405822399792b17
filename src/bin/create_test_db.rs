use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use magasinier_rs::initialize_db;

/// A utility for creating a test database for the REST API server of magasinier_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test categories...");

    conn.execute(
        "INSERT INTO category (name, description) VALUES
            ('Food', 'Things to eat'),
            ('Beverages', 'Things to drink'),
            ('Condiments', 'Things to put on other food');",
        (),
    )?;

    println!("Creating test products...");

    conn.execute(
        "INSERT INTO product (name, price, stock, category_id) VALUES
            ('Instant Noodles', 150, 80, 1),
            ('Rice 1kg', 1200, 30, 1),
            ('Cola', 350, 24, 2),
            ('Orange Juice', 400, 12, 2),
            ('Chilli Sauce', 550, 16, 3);",
        (),
    )?;

    println!("Success!");

    Ok(())
}
