//! Household Budget Simulation
//!
//! This example simulates a year of monthly household cash flow.
//!
//! Key concepts:
//! - Constant items for fixed income and rent
//! - A Markov chain for grocery spending habits
//! - A recurrence for a slowly growing utility bill
//! - A noisy independent recurrence for side income
//! - Reproducible runs from a single seeded configuration
//!
//! Run with: RUST_LOG=budget_sim=debug cargo run --example household_budget

use budget_sim::budget;
use budget_sim::items::{ConstantItem, ContinuousItem, DiscreteItem};
use budget_sim::SimConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("budget_sim=info")),
        )
        .init();

    println!("=== Household Budget Simulation ===\n");

    let config = SimConfig::new().with_steps(12).with_seed(42);
    config.validate().unwrap();
    let mut seeds = config.rng();

    let mut salary = ConstantItem::new("salary", 3200.0);
    let mut rent = ConstantItem::new("rent", -1250.0);

    let mut groceries = DiscreteItem::builder("groceries")
        .state("Frugal", -320.0)
        .state("Normal", -460.0)
        .state("Splurge", -720.0)
        .matrix(vec![
            vec![0.6, 0.35, 0.05],
            vec![0.2, 0.6, 0.2],
            vec![0.1, 0.7, 0.2],
        ])
        .init("Normal")
        .config(&config)
        .rng(StdRng::seed_from_u64(seeds.random()))
        .build()
        .unwrap();

    let mut utilities = ContinuousItem::builder("utilities")
        .recurrence_from_prior(|prior: &f64, _| prior * 1.01)
        .init(-140.0)
        .build()
        .unwrap();

    let mut side_income = ContinuousItem::builder("side_income")
        .recurrence(|rng| (rng.random_range(0.0..600.0_f64) / 10.0).round() * 10.0)
        .rng(StdRng::seed_from_u64(seeds.random()))
        .build()
        .unwrap();

    println!("Grocery habits start in: {}", groceries.prior());
    println!("Grocery states:");
    for (label, amount) in groceries.states() {
        println!("  {label:<8} {amount:>8.2}");
    }
    println!();

    let run = {
        let mut budget = budget![
            &mut salary,
            &mut rent,
            &mut groceries,
            &mut utilities,
            &mut side_income,
        ];
        budget.run(&config)
    };

    println!("Run {} ({} months)\n", run.id, run.steps);

    print!("{:>5}", run.values.index_name());
    for name in run.items() {
        print!(" {name:>12}");
    }
    println!(" {:>12}", "net");

    let totals = run.values.row_totals();
    for (month, row) in run.values.rows().enumerate() {
        print!("{month:>5}");
        for value in row {
            print!(" {value:>12.2}");
        }
        println!(" {:>12.2}", totals[month]);
    }

    println!("\nGrocery habits by month:");
    if let Some(habits) = run.labels.column("groceries") {
        let habits: Vec<String> = habits.iter().map(ToString::to_string).collect();
        println!("  {}", habits.join(" -> "));
    }

    let savings: f64 = totals.iter().sum();
    println!("\nNet savings over the year: {savings:.2}");
    println!("Groceries ended the year in: {}", groceries.prior());

    println!("\n=== Example Complete ===");
}
