use omnai::Criteria;
use tracing::debug;

use super::{list::format_output, Context};
use crate::FindArgs;

fn criteria(args: &FindArgs) -> Criteria {
    let criteria = Criteria::new()
        .cost(args.cost.clone())
        .speed(args.speed.clone())
        .quality(args.quality.clone())
        .best_for(args.best_for.clone())
        .engine(args.engine.clone());

    match args.free_tier {
        Some(free_tier) => criteria.free_tier(free_tier),
        None => criteria,
    }
}

pub(crate) fn find_cmd(ctx: &Context, args: &FindArgs) {
    for engine in &args.engine {
        ctx.engine_arg(engine);
    }

    let criteria = criteria(args);

    debug!(?criteria, "searching models");

    let models = ctx.registry.find(&criteria);

    format_output(models, args.format);
}
