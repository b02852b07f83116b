use clap::Parser;
use std::path::Path;
use uuid::Uuid;

mod cli;
mod config;
mod errors;
mod log;
mod plan;
mod profile;
mod prompt;
mod provider;
mod render;
mod wire;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let mut cfg = config::Config::default();
    cfg.root = args.root.clone();
    cfg.model = args.model.clone();
    cfg.timeout_secs = args.timeout_secs;

    let profile = args.profile();
    let api_key = config::resolve_api_key(args.api_key.clone());

    let txid = Uuid::new_v4();
    if args.debug {
        println!("debug: flag enabled");
        log::print_planned_paths(Path::new(&cfg.root), txid);
    }

    let prov = provider::make_provider(args.demo, api_key, &cfg);
    let source = prov.source();

    let pb = render::spinner("🗓️ Synchronizing your week (Mon-Sun)...");
    let outcome = prov.request_plan(&profile, args.debug).await;
    pb.finish_and_clear();

    // A live failure is tagged, not sentinel text, but the run still
    // ends in something displayable: the error banner plus the usual
    // format-error message from the empty plan below.
    let raw = match outcome {
        Ok(text) => text,
        Err(e) => {
            render::show_request_error(&e);
            e.to_string()
        }
    };

    let prompt_text = prompt::coach_prompt(&profile);
    let saved = log::save_stage(
        "generate",
        &profile,
        &prompt_text,
        &raw,
        txid,
        &cfg,
        args.save_request,
        args.save_response,
    )?;
    if args.debug {
        log::print_saved_paths("generate", &saved);
    }

    let week = plan::parse(&raw);
    if args.debug && week.skipped > 0 {
        eprintln!("debug[parse]: skipped {} malformed day block(s)", week.skipped);
    }
    if args.debug && week.days.is_empty() {
        eprintln!("debug: raw model output:\n{raw}");
    }

    render::show_week(&week, &profile, source);

    Ok(())
}
