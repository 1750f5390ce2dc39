use omnai::ModelRecord;

use super::{
    list::{format_output, table::Table},
    Context,
};
use crate::{die, DefaultArgs, ShowArgs};

impl<'a> From<&'a ModelRecord> for Table {
    fn from(model: &'a ModelRecord) -> Self {
        let mut tab = Table::new();

        let optional = |value: Option<String>| value.unwrap_or_else(|| "unknown".to_string());
        let or_dash = |value: String| if value.is_empty() { "-".to_string() } else { value };

        let fields = [
            ("id", model.id.clone()),
            ("name", model.full_name.clone()),
            ("engine", model.engine.clone()),
            ("model", model.model.clone()),
            (
                "context_window",
                optional(model.context_window.map(|tokens| tokens.to_string())),
            ),
            (
                "temperature",
                optional(model.default_temperature.map(|t| t.to_string())),
            ),
            ("cost", model.cost.to_string()),
            (
                "cost_per_mtok",
                format!(
                    "${:.2} input, ${:.2} output",
                    model.cost_per_mtok.input, model.cost_per_mtok.output
                ),
            ),
            ("free_tier", model.free_tier.to_string()),
            ("speed", model.speed.to_string()),
            ("quality", model.quality.to_string()),
            ("best_for", or_dash(model.best_for.join(", "))),
            ("notes", or_dash(model.notes.clone())),
        ];

        for (field, value) in fields {
            tab.add_row(vec![field.to_string(), value]);
        }

        tab
    }
}

pub(crate) fn show_cmd(ctx: &Context, args: &ShowArgs) {
    let model =
        match ctx
            .registry
            .validate_with_limit(&args.id, args.engine.as_deref(), ctx.suggestion_limit)
        {
            Ok(model) => model,
            Err(err) => die!("{}", err),
        };

    format_output(model, args.format);
}

pub(crate) fn default_cmd(ctx: &Context, args: &DefaultArgs) {
    let engine = ctx.engine_arg(&args.engine);

    match ctx.registry.get_default(engine) {
        Some(model) => println!("{}", model),
        None => die!(
            "engine \"{}\" has no default model, its model is chosen in the engine's own configuration",
            engine
        ),
    }
}
