use serde::Serialize;
use tabi_places::{CardPresentation, EnrichmentState};

use crate::cli::{GlobalFlags, PlaceArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PlaceResponse {
    view: &'static str,
    state: EnrichmentState,
    card: CardPresentation,
}

/// Handle `tabi place`.
pub async fn handle(args: &PlaceArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = args.query();
    let enrichment = tabi_places::enrichment_from_config(&ctx.config.places)?;

    enrichment.resolve(Some(query.as_str()));
    let state = enrichment.settled().await;

    let card = CardPresentation::new(
        args.title.as_deref().unwrap_or(&query),
        args.image.as_deref(),
        Some(query.as_str()),
        &state,
    );
    let response = PlaceResponse {
        view: state.view().kind(),
        state,
        card,
    };
    output(&response, flags.format)
}
