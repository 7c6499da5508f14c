//! Console demo for the banking crate.
//!
//! Opens two accounts, moves money between them and shows that an
//! overdraft is rejected without touching either balance.

use testbed_banking::{Account, Bank, BankingError, Money};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_balances(title: &str, bank: &Bank) {
    println!("\n{title}:");
    for account in bank.accounts() {
        println!("  {}: {}", account.holder(), account.balance());
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "testbed_banking=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Banking Demo: Transfers ===");

    let mut bank = Bank::new("BBVA");
    let donor = bank.add_account(Account::new("Jhon Doe donor", "2500".parse()?));
    let recipient = bank.add_account(Account::new("Cesar", "1500".parse()?));
    print_balances("Initial balances", &bank);

    println!("\nTransferring 400 from the donor to Cesar...");
    bank.transfer_between(donor, recipient, &Money::from_units(400))?;
    print_balances("After transfer", &bank);

    println!("\nTransferring 10000 (more than the donor holds)...");
    match bank.transfer_between(donor, recipient, &Money::from_units(10_000)) {
        Err(BankingError::InsufficientFunds) => {
            println!("Rejected as expected: {}", BankingError::InsufficientFunds);
        }
        other => anyhow::bail!("expected insufficient funds, got {other:?}"),
    }
    print_balances("Balances unchanged", &bank);

    println!("\n=== Demo Complete ===");
    Ok(())
}
