use clap::Parser;

fn parse_seed_letter(raw: &str) -> Result<char, String> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => Ok(ch.to_ascii_lowercase()),
        _ => Err(format!("'{raw}' is not a single ASCII letter")),
    }
}

#[derive(Debug, Parser)]
#[command(name = "mealdeck", version, about = "Browse TheMealDB recipes as swipeable cards")]
pub struct Cli {
    /// First-letter seed for the recipe search
    #[arg(short, long, default_value = "a", value_parser = parse_seed_letter)]
    pub letter: char,

    /// Animation tick interval in milliseconds
    #[arg(long, default_value_t = 33, value_parser = clap::value_parser!(u64).range(1..=1000))]
    pub tick_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_behavior() {
        let cli = Cli::parse_from(["mealdeck"]);
        assert_eq!(cli.letter, 'a');
        assert_eq!(cli.tick_ms, 33);
    }

    #[test]
    fn letter_is_lowercased() {
        let cli = Cli::parse_from(["mealdeck", "--letter", "B"]);
        assert_eq!(cli.letter, 'b');
    }

    #[test]
    fn rejects_multi_char_letter() {
        assert!(Cli::try_parse_from(["mealdeck", "--letter", "ab"]).is_err());
        assert!(Cli::try_parse_from(["mealdeck", "--letter", "1"]).is_err());
    }
}
