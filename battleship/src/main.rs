// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::io;

use clap::{App, Arg, ArgMatches};
use tracing::error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shipsetup::PlacementSession;

/// Filter used when `--log-level` is absent.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Place the five ships of a Battleship fleet on a 10x10 board.")
        .arg(
            Arg::with_name("log_level")
                .long("log-level")
                .value_name("FILTER")
                .help("diagnostic log filter, written to stderr (e.g. debug, shipsetup=info)")
                .takes_value(true)
                .validator(validate_log_filter),
        )
        .get_matches();

    init_logging(&matches);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = PlacementSession::new(stdin.lock(), stdout.lock());
    if let Err(err) = session.run() {
        error!(%err, "placement aborted");
        return Err(err);
    }
    Ok(())
}

/// Reject filters that `EnvFilter` cannot parse, so a typo is reported instead of
/// silently falling back to the default.
fn validate_log_filter(filter: String) -> Result<(), String> {
    EnvFilter::try_new(&filter)
        .map(|_| ())
        .map_err(|err| format!("invalid log filter {:?}: {}", filter, err))
}

/// Install the log subscriber. Logs go to stderr so that stdout only carries the game.
fn init_logging(matches: &ArgMatches) {
    let filter = matches
        .value_of("log_level")
        .and_then(|filter| EnvFilter::try_new(filter).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}
