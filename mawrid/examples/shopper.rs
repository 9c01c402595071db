//! The credit card shopper, wired by the resolver.
//!
//! Run with `RUST_LOG=mawrid=trace` to watch every resolution step.

use mawrid::{Injectable, MawridError, Resolver, implements};
use tracing_subscriber::EnvFilter;

trait CreditCard: Send + Sync {
    fn charge(&self) -> String;
}

#[derive(Injectable)]
struct Visa;

impl CreditCard for Visa {
    fn charge(&self) -> String {
        "Charging with the Visa!".to_string()
    }
}

#[derive(Injectable)]
struct MasterCard;

impl CreditCard for MasterCard {
    fn charge(&self) -> String {
        "Swiping the MasterCard!".to_string()
    }
}

implements!(Visa => dyn CreditCard);
implements!(MasterCard => dyn CreditCard);

#[derive(Injectable)]
struct Shopper {
    card: Box<dyn CreditCard>,
}

impl Shopper {
    fn charge(&self) {
        println!("{}", self.card.charge());
    }
}

fn main() -> Result<(), MawridError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mawrid=debug")),
        )
        .init();

    let resolver = Resolver::new();
    resolver.register::<Shopper, Shopper>()?;
    resolver.register::<Box<dyn CreditCard>, Visa>()?;
    resolver.validate()?;

    let tree = resolver.dependency_tree::<Shopper>()?;
    tracing::info!(%tree, "Resolving shopper");

    let shopper: Shopper = resolver.resolve()?;
    shopper.charge();

    Ok(())
}
