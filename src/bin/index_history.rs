use egostrategy_indexhub::config::Config;
use egostrategy_indexhub::scrapers::yahoo::YahooScraper;
use egostrategy_indexhub::services::data_service::DataService;

use clap::{App, Arg};
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init();

    let matches = App::new("IndexHub")
        .version("1.0.0")
        .author("EgoStrategy Team")
        .about("Scrape historical index prices into JSON files")
        .arg(
            Arg::with_name("ticker")
                .short('t')
                .long("ticker")
                .value_name("TICKER")
                .help("Index ticker without the ^ prefix, may be repeated (default: DJI, GSPC)")
                .takes_value(true)
                .multiple_occurrences(true),
        )
        .arg(
            Arg::with_name("data-dir")
                .short('d')
                .long("data-dir")
                .value_name("DIR")
                .help("Directory to write <ticker>_data.json files into")
                .takes_value(true)
                .default_value("data"),
        )
        .arg(
            Arg::with_name("keep-going")
                .long("keep-going")
                .help("Continue with the remaining tickers when one fails")
                .takes_value(false),
        )
        .get_matches();

    let mut config = Config::new()
        .with_data_dir(matches.value_of("data-dir").unwrap_or("data"))
        .with_isolate_failures(matches.is_present("keep-going"));

    if let Some(tickers) = matches.values_of("ticker") {
        config = config.with_tickers(tickers.map(|t| t.to_uppercase()));
    }

    info!("Processing tickers: {}", config.tickers.join(", "));

    let scraper = YahooScraper::new(config.request_timeout)?;
    let data_service = DataService::new(config, Arc::new(scraper));

    let written = data_service.process_all().await?;
    for path in &written {
        info!("Wrote {}", path.display());
    }

    Ok(())
}
