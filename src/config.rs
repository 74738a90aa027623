use crate::cmds;
use cmds::Cmd;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use termion::event::Key;

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "WEEKSPAN_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("weekspan").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".weekspan.toml"));
    }

    locations
}

/// Optional overrides read from the TOML config file. Anything absent keeps
/// its built-in default.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    tick_rate_ms: Option<u64>,
    focus_symbol: Option<char>,
    today_symbol: Option<char>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub key_map: KeyMap,
    pub tick_rate: Duration,
    pub focus_symbol: char,
    pub today_symbol: char,
}

impl Default for Config {
    fn default() -> Config {
        let mut config = Config {
            key_map: HashMap::new(),
            tick_rate: Duration::from_millis(500),
            focus_symbol: '>',
            today_symbol: '*',
        };

        config.key_map.insert(Key::Char('l'), Cmd::NextDay);
        config.key_map.insert(Key::Char('h'), Cmd::PrevDay);
        config.key_map.insert(Key::Char('j'), Cmd::NextWeek);
        config.key_map.insert(Key::Char('k'), Cmd::PrevWeek);
        config.key_map.insert(Key::Right, Cmd::NextDay);
        config.key_map.insert(Key::Left, Cmd::PrevDay);
        config.key_map.insert(Key::Down, Cmd::NextWeek);
        config.key_map.insert(Key::Up, Cmd::PrevWeek);
        config.key_map.insert(Key::Char('n'), Cmd::NextMonth);
        config.key_map.insert(Key::Char('p'), Cmd::PrevMonth);
        config.key_map.insert(Key::Char('N'), Cmd::NextYear);
        config.key_map.insert(Key::Char('P'), Cmd::PrevYear);
        config.key_map.insert(Key::Char('\n'), Cmd::Confirm);
        config.key_map.insert(Key::Esc, Cmd::DismissError);
        config.key_map.insert(Key::Char('q'), Cmd::Exit);

        for (i, key) in ('1'..='9').enumerate() {
            config.key_map.insert(Key::Char(key), Cmd::Predefined(i));
        }

        config
    }
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> io::Result<Config> {
        let mut config = Config::default();

        let location = path.or_else(|| {
            find_configfile_locations()
                .into_iter()
                .find(|path| path.exists())
        });

        if let Some(location) = location {
            let raw = fs::read_to_string(&location)?;
            let file: ConfigFile = toml::from_str(&raw)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

            if let Some(ms) = file.tick_rate_ms {
                config.tick_rate = Duration::from_millis(ms);
            }
            if let Some(symbol) = file.focus_symbol {
                config.focus_symbol = symbol;
            }
            if let Some(symbol) = file.today_symbol {
                config.today_symbol = symbol;
            }

            log::info!("loaded config from {}", location.display());
        }

        Ok(config)
    }
}
