//! Console renderer: the intro/outro screens, the slow-typed text, and the
//! turn loop. All timing and animation lives here; the engine only ever sees
//! one line of input per turn.

use anyhow::Result;
use ashfall_game::{
    APOCALYPTIC_QUOTES, CITY_SIGHTS, FOREST_SIGHTS, GameState, SURVIVAL_TIPS, WASTELAND_SIGHTS,
    new_game,
};
use clap::Parser;
use colored::Colorize;
use log::info;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

const BANNER: &str = r"
 ▄▀█ █▀ █░█ █▀▀ ▄▀█ █░░ █░░
 █▀█ ▄█ █▀█ █▀░ █▀█ █▄▄ █▄▄
";

const DIVIDER: &str = "-----------------------------------------";

#[derive(Debug, Parser)]
#[command(name = "ashfall", version)]
#[command(about = "Ashfall - a post-apocalyptic text adventure")]
struct Args {
    /// Seed for a reproducible session (drawn from entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the intro screen
    #[arg(long)]
    skip_intro: bool,

    /// Print instantly instead of slow-typing
    #[arg(long)]
    fast: bool,
}

impl Args {
    fn type_delay(&self) -> Duration {
        if self.fast {
            Duration::ZERO
        } else {
            Duration::from_millis(8)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("starting session with seed {seed}");
    let mut state = new_game(seed);

    let mut input = io::stdin().lock().lines();
    if !args.skip_intro {
        display_intro(args.type_delay(), &mut input)?;
    }
    println!("{}", format!("Seed: {seed}").dimmed());

    run_loop(&mut state, args.type_delay(), &mut input)
}

fn display_intro<I>(delay: Duration, input: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("{}", BANNER.yellow());
    slow_print("\nA post-apocalyptic text adventure\n", delay);

    let quote = APOCALYPTIC_QUOTES[rand::thread_rng().gen_range(0..APOCALYPTIC_QUOTES.len())];
    println!("{}", format!("\n\"{quote}\"").italic().dimmed());

    println!("\n{DIVIDER}\n");
    slow_print(
        "The world as you knew it ended 5 years ago in a flash of nuclear fire.\n\
         You've survived in your small bunker, but supplies are running low, and the air filtration system is failing.\n\
         It's time to venture out into the wasteland, to find other survivors and perhaps, a new beginning for humanity.\n\
         \nYour mission: Find survivors and bring them together. Humanity must endure.\n",
        delay,
    );
    println!("\n{DIVIDER}\n");
    slow_print("Type 'help' for a list of commands.\n", delay);

    print!("\nPress Enter to begin your journey...");
    io::stdout().flush()?;
    input.next().transpose()?;
    Ok(())
}

fn run_loop<I>(state: &mut GameState, delay: Duration, input: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    // Initial look at the starting location.
    println!("{}", state.process_command("look"));

    while !state.is_game_over() {
        println!("\n{}", state.time_info().cyan());
        print!("\n> ");
        io::stdout().flush()?;

        let Some(line) = input.next().transpose()? else {
            break; // stdin closed
        };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if is_quit(&line) {
            if confirm_quit(input)? {
                break;
            }
            continue;
        }

        println!();
        slow_print(&state.process_command(&line), delay);
        println!();

        if line.eq_ignore_ascii_case("wait") {
            let tip = SURVIVAL_TIPS[rand::thread_rng().gen_range(0..SURVIVAL_TIPS.len())];
            println!("{}", tip.dimmed());
        } else if line.to_lowercase().starts_with("search") {
            let here = state.player.as_ref().map(|p| p.location.as_str());
            if let Some(pool) = here.and_then(ambient_pool) {
                let sight = pool[rand::thread_rng().gen_range(0..pool.len())];
                println!("{}", sight.dimmed());
            }
        }

        if state.is_game_over() {
            display_game_over(state, delay);
        }
    }
    Ok(())
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
}

/// Flavor pool matching the terrain the player is currently searching.
fn ambient_pool(location_id: &str) -> Option<&'static [&'static str]> {
    match location_id {
        "wasteland" | "radioactive_crater" => Some(WASTELAND_SIGHTS),
        "ruined_city" | "hospital" => Some(CITY_SIGHTS),
        "forest" => Some(FOREST_SIGHTS),
        _ => None,
    }
}

fn confirm_quit<I>(input: &mut I) -> Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("\nAre you sure you want to quit? (y/n): ");
    io::stdout().flush()?;
    let Some(line) = input.next().transpose()? else {
        return Ok(true);
    };
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn display_game_over(state: &GameState, delay: Duration) {
    let victory = state.ending.as_ref().is_some_and(ashfall_game::Ending::is_victory);
    println!("\n{DIVIDER}\n");
    let headline = if victory {
        "VICTORY".green().bold()
    } else {
        "GAME OVER".red().bold()
    };
    println!("{headline}\n");
    if let Some(reason) = state.game_over_reason() {
        slow_print(&reason, delay);
        println!();
    }

    println!("\nSurvival Statistics:");
    println!("Days Survived: {}", state.day);
    if let Some(player) = state.player.as_ref() {
        println!(
            "Survivors Found: {}/{}",
            player.survivors_found, state.total_survivors
        );
        println!("Quests Completed: {}", player.completed_quests.len());
    }
}

fn slow_print(text: &str, char_delay: Duration) {
    if char_delay.is_zero() {
        println!("{text}");
        return;
    }
    for c in text.chars() {
        print!("{c}");
        let _ = io::stdout().flush();
        thread::sleep(char_delay);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_pools_cover_the_searchable_terrain() {
        assert!(ambient_pool("wasteland").is_some());
        assert!(ambient_pool("ruined_city").is_some());
        assert!(ambient_pool("forest").is_some());
        assert!(ambient_pool("bunker").is_none());
        assert!(ambient_pool("settlement").is_none());
    }

    #[test]
    fn quit_matcher_accepts_both_verbs_any_case() {
        assert!(is_quit("quit"));
        assert!(is_quit("EXIT"));
        assert!(is_quit("Quit"));
        assert!(!is_quit("quite"));
        assert!(!is_quit("go west"));
    }

    #[test]
    fn fast_mode_disables_the_typing_delay() {
        let args = Args {
            seed: None,
            skip_intro: true,
            fast: true,
        };
        assert!(args.type_delay().is_zero());
        let args = Args {
            fast: false,
            ..args
        };
        assert!(!args.type_delay().is_zero());
    }
}
