//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use kotoba::config::Config;
use kotoba::error::Error;
use kotoba::tokenizer::FormMode;

#[derive(Debug, StructOpt)]
#[structopt(name = "kotoba", about = "Japanese vocabulary collection from news articles.")]
/// Holds every command that is callable by the `kotoba` command.
pub enum Kotoba {
    #[structopt(about = "Fetch new articles and store their words")]
    Run(Run),
    #[structopt(about = "Normalize POS labels of stored words")]
    FixPos(Common),
    #[structopt(about = "Export stored words to CSV")]
    Export(Export),
}

/// Options shared by every command.
#[derive(Debug, StructOpt)]
pub struct Common {
    #[structopt(
        parse(from_os_str),
        long = "config",
        short = "c",
        help = "JSON configuration file"
    )]
    pub config: Option<PathBuf>,
    #[structopt(parse(from_os_str), long = "db", help = "SQLite database location")]
    pub db: Option<PathBuf>,
}

impl Common {
    /// Build the configuration: defaults, then config file, then flags.
    pub fn config(&self) -> Result<Config, Error> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)?,
            None => Config::default(),
        };
        if let Some(db) = &self.db {
            config.db_path = db.clone();
        }
        Ok(config)
    }
}

#[derive(Debug, StructOpt)]
pub struct Run {
    #[structopt(flatten)]
    pub common: Common,
    #[structopt(parse(from_os_str), long = "dictionary", help = "JMdict term banks folder")]
    pub dictionary: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "tokenizer",
        help = "vibrato system dictionary (.dic or .dic.zst)"
    )]
    pub tokenizer: Option<PathBuf>,
    #[structopt(long = "workers", short = "w", help = "number of processing threads")]
    pub workers: Option<usize>,
    #[structopt(long = "chunks", help = "number of chunks text is split into")]
    pub chunks: Option<usize>,
    #[structopt(long = "max-requests", help = "maximum number of concurrent requests")]
    pub max_requests: Option<usize>,
    #[structopt(long = "form", help = "kept morpheme form (surface or dictionary)")]
    pub form: Option<FormMode>,
}

impl Run {
    pub fn config(&self) -> Result<Config, Error> {
        let mut config = self.common.config()?;
        if let Some(dictionary) = &self.dictionary {
            config.dictionary_dir = dictionary.clone();
        }
        if let Some(tokenizer) = &self.tokenizer {
            config.tokenizer_dict = tokenizer.clone();
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(chunks) = self.chunks {
            config.chunks = chunks;
        }
        if let Some(max_requests) = self.max_requests {
            config.max_concurrent_requests = max_requests;
        }
        if let Some(form) = self.form {
            config.form_mode = form;
        }
        Ok(config)
    }
}

#[derive(Debug, StructOpt)]
pub struct Export {
    #[structopt(flatten)]
    pub common: Common,
    #[structopt(parse(from_os_str), help = "destination CSV file")]
    pub dst: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_overrides() {
        let opt = Kotoba::from_iter(vec![
            "kotoba",
            "run",
            "--db",
            "other.db",
            "-w",
            "2",
            "--form",
            "dictionary",
        ]);
        let config = match opt {
            Kotoba::Run(r) => r.config().unwrap(),
            other => panic!("unexpected command {:?}", other),
        };
        assert_eq!(config.db_path, PathBuf::from("other.db"));
        assert_eq!(config.workers, 2);
        assert_eq!(config.form_mode, FormMode::Dictionary);
        // untouched
        assert_eq!(config.chunks, 100);
    }

    #[test]
    fn export_dst() {
        let opt = Kotoba::from_iter(vec!["kotoba", "export", "words.csv"]);
        match opt {
            Kotoba::Export(e) => assert_eq!(e.dst, PathBuf::from("words.csv")),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
