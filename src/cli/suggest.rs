use super::{list::format_output, Context};
use crate::{warn, ListingFormat, SuggestArgs};

pub(crate) fn suggest_cmd(ctx: &Context, args: &SuggestArgs) {
    let engine = args.engine.as_deref().map(|id| ctx.engine_arg(id));
    let limit = args.limit.unwrap_or(ctx.suggestion_limit);

    let suggestions = ctx.registry.find_similar(&args.query, engine, limit);

    if suggestions.is_empty() && !matches!(args.format, ListingFormat::Json) {
        warn!("no models resemble \"{}\"", args.query);
        return;
    }

    format_output(suggestions, args.format);
}
