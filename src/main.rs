//! # Kotoba
//!
//! Japanese vocabulary collection from news articles.
//!
//! ```sh
//! kotoba 0.1.0
//! Japanese vocabulary collection from news articles.
//!
//! USAGE:
//!     kotoba <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     export     Export stored words to CSV
//!     fix-pos    Normalize POS labels of stored words
//!     help       Prints this message or the help of the given subcommand(s)
//!     run        Fetch new articles and store their words
//! ```
//!
//! Logging is configured with `RUST_LOG` (e.g. `RUST_LOG=kotoba=info`).
use structopt::StructOpt;

use kotoba::dictionary::Dictionary;
use kotoba::error::Error;
use kotoba::io;
use kotoba::pipelines::{NewsPipeline, Pipeline};
use kotoba::sources::HttpSite;
use kotoba::store::SqliteStore;
use kotoba::tokenizer::VibratoTokenizer;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Kotoba::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Kotoba::Run(r) => {
            let config = r.config()?;
            let store = SqliteStore::open(&config.db_path)?;
            let site = HttpSite::new(&config.site)?;
            let dictionary = Dictionary::load(&config.dictionary_dir)?;
            let tokenizer =
                VibratoTokenizer::from_path(&config.tokenizer_dict, config.feature_layout.clone())?;

            let p = NewsPipeline::new(&site, &tokenizer, &dictionary, &store, &config);
            let report = p.run()?;
            info!("{:?}", report);
        }
        cli::Kotoba::FixPos(c) => {
            let config = c.config()?;
            let store = SqliteStore::open(&config.db_path)?;
            store.normalize_pos()?;
        }
        cli::Kotoba::Export(e) => {
            let config = e.common.config()?;
            let store = SqliteStore::open(&config.db_path)?;
            io::export_csv(&e.dst, &store.words()?)?;
        }
    };
    Ok(())
}
