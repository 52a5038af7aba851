//! Simulated fetch driver for a profile screen.
//!
//! The driver owns the lifecycle: it constructs states through the four
//! variants as the (simulated) request progresses, and the view layer reads
//! them back exclusively through `fold_with` and the merge helpers. Run with
//! `RUST_LOG=info cargo run --example fetch_driver`.

use remote_data::{Combine, RemoteData};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum FetchError {
    #[error("profile service unreachable")]
    Unreachable,
    #[error("no profile with id {0}")]
    NotFound(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Profile {
    id: u64,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AvatarUrl(String);

/// One step of a fake profile request: the first poll is still in flight,
/// the second fails, the third succeeds.
fn poll_profile(attempt: u32, id: u64) -> RemoteData<FetchError, Profile> {
    match attempt {
        0 => RemoteData::Pending,
        1 => RemoteData::Failure(FetchError::Unreachable),
        _ => RemoteData::Success(Profile {
            id,
            name: "Ada".to_string(),
        }),
    }
}

fn poll_avatar(attempt: u32) -> RemoteData<FetchError, AvatarUrl> {
    if attempt < 2 {
        RemoteData::Pending
    } else {
        RemoteData::Success(AvatarUrl("https://example.net/ada.png".to_string()))
    }
}

/// The view layer never inspects tags directly; it folds.
fn render(state: &RemoteData<FetchError, (Profile, AvatarUrl)>) -> String {
    state.as_ref().fold_with(
        || "press enter to load".to_string(),
        || "loading profile...".to_string(),
        |e| format!("something went wrong: {e}"),
        |(profile, avatar)| format!("{} <img src={}>", profile.name, avatar.0),
    )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut screen: RemoteData<FetchError, (Profile, AvatarUrl)> = RemoteData::Initial;
    info!(view = %render(&screen), "screen mounted");

    for attempt in 0..3 {
        let profile = poll_profile(attempt, 42);
        let avatar = poll_avatar(attempt);

        if let RemoteData::Failure(ref error) = profile {
            warn!(%error, attempt, "profile fetch failed, retrying");
        }

        // A transient failure falls back to the still-pending state so the
        // next attempt can settle it.
        let profile = profile.or_else(|| RemoteData::Pending);

        screen = (profile, avatar).combine();
        info!(attempt, view = %render(&screen), "screen updated");
    }

    if let RemoteData::Success((profile, _)) = &screen {
        info!(id = profile.id, "profile settled");
    }
}
