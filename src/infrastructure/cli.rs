use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[arg(short, long, value_name = "FILE", help = "Present a JSON5 deck file instead of the built-in deck")]
    pub deck: Option<PathBuf>,

    #[arg(short, long, value_name = "DIR", help = "Directory holding the slide images")]
    pub assets: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "N",
        help = "Start on the N-th visible slide (1-based)",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub start: Option<u32>,

    #[arg(short, long, help = "Print the visible slides and exit")]
    pub list: bool,
}

impl Cli {
    /// 0-based start index
    pub fn start_index(&self) -> usize {
        self.start.map_or(0, |n| n.saturating_sub(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["hawkdeck"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 60.0);
        assert_eq!(cli.deck, None);
        assert_eq!(cli.start_index(), 0);
        assert!(!cli.list);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "hawkdeck", "--deck", "talk.json5", "--assets", "img", "--start", "3", "--list",
        ]);
        assert_eq!(cli.deck, Some(PathBuf::from("talk.json5")));
        assert_eq!(cli.assets, Some(PathBuf::from("img")));
        assert_eq!(cli.start_index(), 2);
        assert!(cli.list);
    }

    #[test]
    fn test_start_zero_is_rejected() {
        assert!(Cli::try_parse_from(["hawkdeck", "--start", "0"]).is_err());
    }
}
