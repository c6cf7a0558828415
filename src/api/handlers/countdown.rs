use std::convert::Infallible;

use askama::Template;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use chrono::{DateTime, Utc};
use futures_util::stream::{self, Stream};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::{
    api::state::AppState,
    domain::{Breakdown, CountdownState, SiteProfile},
    web::templates::countdown::{CountdownTemplate, LiveTemplate},
};

#[derive(Debug, Serialize)]
pub struct CountdownSnapshot {
    pub target: DateTime<Utc>,
    pub live: bool,
    pub remaining: Option<Breakdown>,
}

// GET /api/countdown
pub async fn snapshot(State(state): State<AppState>) -> Json<CountdownSnapshot> {
    let countdown = &state.service_context.countdown;
    let current = countdown.snapshot();

    Json(CountdownSnapshot {
        target: countdown.target(),
        live: current.is_live(),
        remaining: current.remaining(),
    })
}

// GET /api/countdown/stream
//
// One ticker per connection. The ticker handle rides along in the stream
// state, so a disconnect drops the stream and cancels the ticker.
pub async fn stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = state.service_context.countdown.spawn(
        move |current| {
            let _ = tx.send(current);
        },
        || tracing::debug!("Countdown stream reached launch"),
    );

    let site = state.service_context.site.clone();
    let events = stream::unfold((rx, handle), move |(mut rx, handle)| {
        let site = site.clone();
        async move {
            let current = rx.recv().await?;
            Some((Ok(render_event(current, &site)), (rx, handle)))
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// `tick` carries the time blocks; `live` carries the replacement headline.
fn render_event(current: CountdownState, site: &SiteProfile) -> Event {
    let rendered = match current {
        CountdownState::Counting(_) => CountdownTemplate { launch: current.into() }
            .render()
            .map(|html| ("tick", html)),
        CountdownState::Live => LiveTemplate { site }.render().map(|html| ("live", html)),
    };

    match rendered {
        Ok((name, html)) => Event::default().event(name).data(html),
        Err(e) => {
            tracing::error!("Failed to render countdown event: {}", e);
            Event::default().comment("render failed")
        }
    }
}
