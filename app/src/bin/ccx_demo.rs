//! ColdChainX scripted walkthrough
//!
//! Drives one session through all three dashboards and prints the snapshot
//! the rendering surface would paint at each step.

use coldchainx_app::{Action, Config, Session};
use shared::models::BruisingSeverity;
use shared::types::{Role, Route, SortKey};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.demo.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ColdChainX walkthrough");
    tracing::info!("Environment: {}", config.environment);

    let mut session = Session::with_role(config.demo.role()?);

    // FPO: create a lot, then price a reefer for it
    session.dispatch(Action::SetCrop {
        value: "Okra".to_string(),
    })?;
    session.dispatch(Action::SetVariety {
        value: "Kashi".to_string(),
    })?;
    session.dispatch(Action::SetWeight {
        value: "450".to_string(),
    })?;
    session.dispatch(Action::CreateLot)?;
    print_snapshot("fpo-home", &session)?;

    session.dispatch(Action::Navigate {
        route: Route::FindReefer {
            lot_id: Some("LOT-NSK-004".to_string()),
        },
    })?;
    session.dispatch(Action::SetDestination {
        value: "Pune DC".to_string(),
    })?;
    print_snapshot("find-reefer", &session)?;

    // Distributor: build a load on the Mumbai lane
    session.dispatch(Action::SetRole {
        role: Role::Distributor,
    })?;
    session.dispatch(Action::Navigate {
        route: Route::BuildLoad {
            lane: Some("Nashik → Mumbai DC".to_string()),
        },
    })?;
    for _ in 0..4 {
        session.dispatch(Action::AddToLoad {
            lot_id: "LOT-NSK-001".to_string(),
        })?;
    }
    session.dispatch(Action::AddToLoad {
        lot_id: "LOT-NSK-002".to_string(),
    })?;
    session.dispatch(Action::DecrementLoad { index: 1 })?;
    print_snapshot("build-load", &session)?;

    // Distributor: raise a dispute
    session.dispatch(Action::Navigate {
        route: Route::Dispute {
            lot_id: Some("LOT-NSK-002".to_string()),
        },
    })?;
    session.dispatch(Action::SetDisputeDetails {
        value: "Door open 14 min at Igatpuri toll".to_string(),
    })?;
    session.dispatch(Action::SubmitDispute)?;
    print_snapshot("dispute", &session)?;

    // Retailer: sort the marketplace, buy, and run gate-in QC
    session.dispatch(Action::SetRole {
        role: Role::Retailer,
    })?;
    session.dispatch(Action::SetSortKey {
        key: SortKey::Days,
    })?;
    session.dispatch(Action::Buy {
        lot_id: "LOT-NSK-001".to_string(),
    })?;
    session.dispatch(Action::Buy {
        lot_id: "LOT-NSK-001".to_string(),
    })?;
    print_snapshot("retailer-home", &session)?;

    session.dispatch(Action::Navigate {
        route: Route::GateIn {
            lot_id: Some("LOT-NSK-001".to_string()),
        },
    })?;
    session.dispatch(Action::SetBruising {
        severity: BruisingSeverity::Mild,
    })?;
    session.dispatch(Action::SetWeightDifference { kg: 30.0 })?;
    print_snapshot("gate-in", &session)?;

    tracing::info!("Walkthrough complete");
    Ok(())
}

fn print_snapshot(step: &str, session: &Session) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&session.snapshot())?;
    println!("--- {} ---\n{}\n", step, json);
    Ok(())
}
