use omnai::{EngineRecord, ModelRecord, ModelSummary};
use table::{IntoTable, Table};

pub(crate) mod table;

use super::Context;
use crate::{die, ListArgs, ListModelArgs, ListObject, ListingFormat};

fn context_window(tokens: Option<u64>) -> String {
    match tokens {
        Some(tokens) => tokens.to_string(),
        None => "unknown".to_string(),
    }
}

fn tags(tags: &[String]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.join(",")
    }
}

impl<'a> From<Vec<&'a ModelRecord>> for Table {
    fn from(value: Vec<&'a ModelRecord>) -> Self {
        let mut tab = Table::new();

        tab.set_header([
            "MODEL", "ENGINE", "COST", "SPEED", "QUALITY", "CONTEXT", "FREE", "BEST_FOR",
        ]);

        for model in value {
            tab.add_row(vec![
                model.id.clone(),
                model.engine.clone(),
                model.cost.to_string(),
                model.speed.to_string(),
                model.quality.to_string(),
                context_window(model.context_window),
                if model.free_tier { "yes" } else { "no" }.to_string(),
                tags(&model.best_for),
            ]);
        }

        tab
    }
}

impl From<Vec<ModelSummary>> for Table {
    fn from(value: Vec<ModelSummary>) -> Self {
        let mut tab = Table::new();

        tab.set_header(["MODEL", "ENGINE", "COST", "SPEED", "QUALITY", "NAME"]);

        for model in value {
            tab.add_row(vec![
                model.id,
                model.engine,
                model.cost.to_string(),
                model.speed.to_string(),
                model.quality.to_string(),
                model.full_name,
            ]);
        }

        tab
    }
}

impl<'a> From<&'a [EngineRecord]> for Table {
    fn from(value: &'a [EngineRecord]) -> Self {
        let mut tab = Table::new();

        tab.set_header([
            "ENGINE",
            "TYPE",
            "AUTH",
            "STREAMING",
            "DEFAULT_MODEL",
            "ALIASES",
        ]);

        for engine in value {
            tab.add_row(vec![
                engine.id.clone(),
                engine.deployment.to_string(),
                if engine.requires_auth { "required" } else { "none" }.to_string(),
                if engine.supports_streaming { "yes" } else { "no" }.to_string(),
                engine.default_model.clone().unwrap_or_else(|| "-".to_string()),
                tags(&engine.aliases),
            ]);
        }

        tab
    }
}

pub(crate) fn format_output<O: IntoTable + serde::Serialize>(object: O, format: ListingFormat) {
    match format {
        ListingFormat::Json => {
            let output = match serde_json::to_string_pretty(&object) {
                Ok(output) => output,
                Err(err) => die!("failed to serialize output: {}", err),
            };

            println!("{}", output);
        }
        ListingFormat::Table => {
            let tab = object.into_table();

            print!("{}", tab);
        }
        ListingFormat::HeaderlessTable => {
            let mut tab = object.into_table();

            tab.print_header(false);

            print!("{}", tab);
        }
    }
}

fn get_models<'a>(ctx: &'a Context, args: &ListModelArgs) -> Vec<&'a ModelRecord> {
    let engine = args.engine.as_deref().map(|id| ctx.engine_arg(id));

    if args.custom {
        ctx.registry
            .list_custom()
            .into_iter()
            .filter(|model| {
                engine.map_or(true, |engine| {
                    ctx.registry
                        .canonical_engine(&model.engine)
                        .unwrap_or(model.engine.as_str())
                        == engine
                })
            })
            .collect()
    } else {
        ctx.registry.list(engine)
    }
}

pub(crate) fn list_cmd(ctx: &Context, args: &ListArgs) {
    let format = args.format;

    match &args.object {
        ListObject::Models(args) => {
            let models = get_models(ctx, args);
            format_output(models, format);
        }
        ListObject::Engines => {
            let engines = ctx.registry.list_engines();
            format_output(engines, format);
        }
    }
}
