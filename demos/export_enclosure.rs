use std::{env, fs};

use anyhow::Context;
use enclosure_tools::{
    models::page::PageSnapshot,
    parse_slot_range,
    plugin::{Effect, Notification, OutboundMessage, PluginSession},
};

fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaulting to Info.
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = env::args().skip(1);
    let page_path = args
        .next()
        .unwrap_or_else(|| "tests/fixtures/enclosure_page.json".to_string());
    let slot_input = args.next().unwrap_or_default();

    log::info!("Loading page snapshot from {}", page_path);
    let json = fs::read_to_string(&page_path)
        .with_context(|| format!("reading page snapshot {page_path}"))?;
    let page: PageSnapshot = serde_json::from_str(&json).context("decoding page snapshot")?;

    let mut session = PluginSession::new();

    let options = session.handle(Notification::ListEnclosureOptions, &page)?;
    let Some(Effect::Send {
        message: OutboundMessage::EnclosureOptions(names),
    }) = options.into_iter().next()
    else {
        anyhow::bail!("no enclosure options returned");
    };
    let enclosure = names.first().context("page has no enclosure instances")?;
    log::info!("Enclosures on page: {:?}, using '{}'", names, enclosure);

    session.handle(Notification::SelectEnclosure(Some(enclosure.clone())), &page)?;
    match parse_slot_range(&slot_input) {
        Some(slots) => {
            session.handle(Notification::SetRange(Some(slots)), &page)?;
        }
        None => log::warn!("Ignoring invalid slot input {:?}", slot_input),
    }

    for effect in session.handle(Notification::SelectAllDrivetrayHandles, &page)? {
        if let Effect::Select { ids } = effect {
            log::info!("Would select {} handles: {:?}", ids.len(), ids);
        }
    }

    for effect in session.handle(Notification::ExportAsSvg, &page)? {
        if let Effect::Send {
            message: OutboundMessage::CopyToClipboard(svg),
        } = effect
        {
            println!("{svg}");
        }
    }

    Ok(())
}
